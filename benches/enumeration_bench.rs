use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use semigroup_sieve::element::Transformation;
use semigroup_sieve::families::{Family, FullTransformationMonoid, SymmetricGroup};
use semigroup_sieve::semigroup::Semigroup;

fn bench_saturation(c: &mut Criterion) {
    let mut group = c.benchmark_group("saturation");
    group.sample_size(20);

    for &n in &[4i64, 5] {
        let gens = FullTransformationMonoid::generators(n).expect("valid degree");
        group.bench_with_input(BenchmarkId::new("full_transformation", n), &gens, |b, gens| {
            b.iter(|| {
                let mut s = Semigroup::new(gens.iter().cloned()).expect("valid generators");
                black_box(s.size().expect("finite"));
            });
        });
    }

    for &n in &[5i64, 6] {
        let gens = SymmetricGroup::generators(n).expect("valid degree");
        group.bench_with_input(BenchmarkId::new("symmetric", n), &gens, |b, gens| {
            b.iter(|| {
                let mut s = Semigroup::new(gens.iter().cloned()).expect("valid generators");
                black_box(s.size().expect("finite"));
            });
        });
    }

    group.finish();
}

fn bench_lazy_membership(c: &mut Criterion) {
    let mut group = c.benchmark_group("membership");
    let gens = FullTransformationMonoid::generators(5).expect("valid degree");
    let near = Transformation::constant(5, 0).expect("in range");
    let absent = Transformation::new(vec![0, 1, 2, 3]).expect("in range");

    group.bench_function("contains_constant", |b| {
        b.iter(|| {
            let mut s = Semigroup::new(gens.iter().cloned()).expect("valid generators");
            black_box(s.contains(&near).expect("finite"));
        });
    });

    group.bench_function("word_for_constant", |b| {
        b.iter(|| {
            let mut s = Semigroup::new(gens.iter().cloned()).expect("valid generators");
            black_box(s.word_for(&near).expect("finite"));
        });
    });

    // Saturates once; later lookups take the saturated path.
    group.bench_function("contains_after_saturation", |b| {
        let mut s = Semigroup::new(gens.iter().cloned()).expect("valid generators");
        b.iter(|| black_box(s.contains(&absent).expect("finite")));
    });

    group.finish();
}

criterion_group!(benches, bench_saturation, bench_lazy_membership);
criterion_main!(benches);
