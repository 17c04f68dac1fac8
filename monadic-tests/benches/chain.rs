use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use monadic::{Either, Maybe};
use pprof::criterion::{Output, PProfProfiler};

fn step(n: u64) -> Maybe<u64> {
    n.checked_add(1).into()
}

fn step_either(n: u64) -> Either<&'static str, u64> {
    n.checked_add(1).ok_or("overflow").into()
}

fn bench_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("chain");

    for len in [16usize, 1024] {
        group.bench_with_input(BenchmarkId::new("option and_then", len), &len, |b, &len| {
            b.iter(|| {
                (0..len).fold(Some(black_box(0u64)), |acc, _| {
                    acc.and_then(|n| n.checked_add(1))
                })
            })
        });

        group.bench_with_input(BenchmarkId::new("maybe chain", len), &len, |b, &len| {
            b.iter(|| (0..len).fold(Maybe::of(black_box(0u64)), |acc, _| acc.chain(step)))
        });

        group.bench_with_input(BenchmarkId::new("either chain", len), &len, |b, &len| {
            b.iter(|| {
                (0..len).fold(Either::of(black_box(0u64)), |acc, _| acc.chain(step_either))
            })
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .with_profiler(
            PProfProfiler::new(100, Output::Flamegraph(None))
        );
    targets = bench_chain
}
criterion_main!(benches);
