use core::hint::black_box;
use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use strand::{Alphabet, BASE64_ALPHABET, StringGenerator, default_strategies};

const LENGTHS: &[usize] = &[10, 100, 1000];

fn bench_strategies(c: &mut Criterion) {
    let alphabet = Alphabet::new(BASE64_ALPHABET).expect("default alphabet is non-empty");
    let strategies = default_strategies();

    for &length in LENGTHS {
        let mut group = c.benchmark_group(format!("generate/{length}"));
        group.throughput(Throughput::Bytes(length as u64));

        for strategy in &strategies {
            group.bench_function(strategy.name(), |b| {
                b.iter(|| black_box(strategy.generate(black_box(length), &alphabet)));
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
