use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::{Rng, SeedableRng, XorShiftRng};
use std::collections::BTreeSet;
use treap_collections::treap::TreapSet;

const NUM_OF_OPERATIONS: usize = 100;

fn bench_treap_insert(c: &mut Criterion) {
    c.bench_function("bench treap insert", |b| {
        b.iter(|| {
            let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = TreapSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_treap_contains(c: &mut Criterion) {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = TreapSet::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        set.insert(key);
        values.push(key);
    }

    c.bench_function("bench treap contains", move |b| {
        b.iter(|| {
            for key in &values {
                black_box(set.contains(key));
            }
        })
    });
}

fn bench_treap_remove(c: &mut Criterion) {
    c.bench_function("bench treap remove", |b| {
        b.iter(|| {
            let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = TreapSet::new();
            let mut values = Vec::new();
            for _ in 0..NUM_OF_OPERATIONS {
                let key = rng.next_u32();
                set.insert(key);
                values.push(key);
            }
            for key in &values {
                black_box(set.remove(key));
            }
        })
    });
}

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_btreeset_contains(c: &mut Criterion) {
    let mut rng: XorShiftRng = SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = BTreeSet::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let key = rng.next_u32();
        set.insert(key);
        values.push(key);
    }

    c.bench_function("bench btreeset contains", move |b| {
        b.iter(|| {
            for key in &values {
                black_box(set.contains(key));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_treap_insert,
    bench_treap_contains,
    bench_treap_remove,
    bench_btreeset_insert,
    bench_btreeset_contains,
);
criterion_main!(benches);
