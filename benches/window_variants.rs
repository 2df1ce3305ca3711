use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hot100::problems::arrays::max_sliding_window;
use hot100::problems::strings::{longest_substring, min_window};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn bench_sliding_maximum(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let nums: Vec<i32> = (0..100_000).map(|_| rng.gen_range(-10_000..10_000)).collect();

    let mut group = c.benchmark_group("sliding_window_maximum");
    for &k in &[8usize, 256, 4_096] {
        group.bench_with_input(BenchmarkId::new("monotonic_deque", k), &k, |b, &k| {
            b.iter(|| max_sliding_window::monotonic_deque(black_box(&nums), k))
        });
        group.bench_with_input(BenchmarkId::new("max_heap", k), &k, |b, &k| {
            b.iter(|| max_sliding_window::max_heap(black_box(&nums), k))
        });
    }
    group.finish();
}

fn bench_substring_windows(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(7);
    let s: String = (0..50_000)
        .map(|_| char::from(b'a' + rng.gen_range(0..26u8)))
        .collect();

    let mut group = c.benchmark_group("substring_windows");
    group.bench_function("longest_substring/sliding_window_map", |b| {
        b.iter(|| longest_substring::sliding_window_map(black_box(&s)))
    });
    group.bench_function("longest_substring/last_index_table", |b| {
        b.iter(|| longest_substring::last_index_table(black_box(&s)))
    });
    group.bench_function("min_window/sliding_window", |b| {
        b.iter(|| min_window::sliding_window(black_box(&s), "xyzzy"))
    });
    group.finish();
}

criterion_group!(benches, bench_sliding_maximum, bench_substring_windows);
criterion_main!(benches);
