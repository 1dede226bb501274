use criterion::{black_box, criterion_group, criterion_main, Criterion};
use signed_rank::statistics::SignCombinations;
use signed_rank::WilcoxonTest;

fn bench_enumeration(c: &mut Criterion) {
    let mut group = c.benchmark_group("signed_rank");
    group.sample_size(20);

    for n in [10usize, 16, 20] {
        let magnitudes: Vec<u32> = (1..=n as u32).collect();
        let combos = SignCombinations::new(n).expect("n fits the index space");
        group.bench_function(format!("count_at_most_n{n}"), |b| {
            b.iter(|| black_box(combos.count_at_most(black_box(&magnitudes), 52).ok()))
        });
    }

    let a: Vec<f64> = (0..20).map(|i| 0.75 + f64::from(i) * 0.003).collect();
    let b: Vec<f64> = (0..20).map(|i| 0.78 + f64::from(i) * 0.002).collect();
    group.bench_function("full_test_n20", |bencher| {
        bencher.iter(|| {
            let result = WilcoxonTest::new().run(black_box(&a), black_box(&b));
            black_box(result.map(|r| r.exact_p_value))
        });
    });
    group.finish();
}

criterion_group!(benches, bench_enumeration);
criterion_main!(benches);
