use std::collections::HashSet;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::distributions::Uniform;
use rand::{Rng, thread_rng};
use rand::prelude::IteratorRandom;
use bloom_analyzer::{BloomFilter, HashScheme};

const ITEMS: usize = 1_000_000;

pub fn lookup_values(c: &mut Criterion) {
    let params = BloomFilter::optimal_parameters(ITEMS, 0.02).unwrap();
    let mut rng = thread_rng();
    let distribution = Uniform::new_inclusive(0, 10u64.pow(12));

    let mut bgroup = c.benchmark_group("lookup-values");
    for scheme in [HashScheme::SeededMix, HashScheme::DoubleXxh3] {
        let mut bf = BloomFilter::with_scheme(params.num_bits, params.num_hashes, scheme).unwrap();
        let mut track_inserted = HashSet::new();
        for _ in 0..ITEMS {
            let value = rng.sample(distribution).to_string();
            bf.insert(&value);
            track_inserted.insert(value);
        }

        bgroup.bench_function(format!("{:?}/lookup-random-values", scheme),
                         |b|
                             b.iter(||
                                 bf.might_contain(
                                     &rng.sample(distribution).to_string()
                                 )
                             ));

        bgroup.bench_function(format!("{:?}/lookup-inserted-values", scheme),
                         |b|
                             b.iter(||
                                 bf.might_contain(track_inserted.iter().choose(&mut rng).unwrap())
                             ));
    }
    bgroup.finish();
}

pub fn plan_parameters(c: &mut Criterion) {
    c.bench_function("optimal-parameters", |b| {
        b.iter(|| BloomFilter::optimal_parameters(black_box(ITEMS), black_box(0.01)))
    });
}

criterion_group!(benches, lookup_values, plan_parameters);
criterion_main!(benches);
