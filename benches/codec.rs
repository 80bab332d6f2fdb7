use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use loomwire::{ExecutionSummary, ListResponse, WireMessage};

fn listing(rows: usize) -> ListResponse {
    ListResponse {
        executions: (0..rows)
            .map(|i| ExecutionSummary {
                execution_id: format!("01923e5a-7c4f-{i:04}-b3d2-0242ac120002"),
                workflow_id: "etl-nightly".into(),
                version_hash: "9f86d081884c7d65".into(),
                status: "RUNNING".into(),
                created_at: "2026-08-30T08:00:00Z".into(),
            })
            .collect(),
    }
}

fn bench_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for rows in [1usize, 10, 100] {
        let resp = listing(rows);
        let encoded_len = resp.encode().len() as u64;
        group.throughput(Throughput::Bytes(encoded_len));
        group.bench_function(format!("encode_{rows}_rows"), |b| {
            b.iter(|| {
                black_box(resp.encode());
            });
        });
    }

    group.finish();
}

fn bench_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");

    for rows in [1usize, 10, 100] {
        let encoded = listing(rows).encode();
        group.throughput(Throughput::Bytes(encoded.len() as u64));
        group.bench_function(format!("decode_{rows}_rows"), |b| {
            b.iter(|| {
                black_box(ListResponse::decode(&encoded).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_encode, bench_decode);
criterion_main!(benches);
