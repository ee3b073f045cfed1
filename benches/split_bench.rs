//! Benchmarks for bufsplit.
//!
//! Run with:
//!     cargo bench

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};

use bufsplit::{Dialect, SplitConfig, Splitter, Tokenizer, tokenize_copy};

fn csv_data(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size + 64);
    let mut i = 0usize;
    while data.len() < size {
        data.extend_from_slice(
            format!("{i},\"name, {i}\",{},{}\n", i * 7 % 1000, i * 13 % 97).as_bytes(),
        );
        i += 1;
    }
    data
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split");

    for size in [64 * 1024, 1024 * 1024, 10 * 1024 * 1024] {
        let data = csv_data(size);

        group.throughput(Throughput::Bytes(data.len() as u64));
        for blocks in [4, 64] {
            group.bench_with_input(
                format!("{}kb_{}blocks", size / 1024, blocks),
                &data,
                |b, data| {
                    let splitter = Splitter::new(SplitConfig::new(b'\n', blocks).unwrap());
                    b.iter(|| {
                        let blocks = splitter.split(black_box(data)).unwrap();
                        black_box(blocks.len())
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_tokenize(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize");
    let data = csv_data(1024 * 1024);
    group.throughput(Throughput::Bytes(data.len() as u64));

    for (name, dialect) in [
        ("in_place_quoted", Dialect::new(b',')),
        ("in_place_unquoted", Dialect::unquoted(b',')),
    ] {
        let tokenizer = Tokenizer::new(dialect);
        group.bench_function(name, |b| {
            b.iter_batched_ref(
                || data.clone(),
                |buf| {
                    let mut fields = 0;
                    for record in buf.split_mut(|&b| b == b'\n') {
                        fields += tokenizer.tokenize_in_place(record).unwrap().len();
                    }
                    black_box(fields)
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.bench_function("copy_quoted", |b| {
        b.iter(|| {
            let mut fields = 0;
            for record in black_box(&data).split(|&b| b == b'\n') {
                fields += tokenize_copy(record, b',', true).unwrap().len();
            }
            black_box(fields)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_split, bench_tokenize);
criterion_main!(benches);
