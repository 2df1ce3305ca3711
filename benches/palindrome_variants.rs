use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use hot100::problems::strings::longest_palindrome;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_text(rng: &mut StdRng, len: usize) -> String {
    const ALPHABET: &[u8] = b"abc";
    (0..len)
        .map(|_| {
            let idx = rng.gen_range(0..ALPHABET.len());
            char::from(ALPHABET[idx])
        })
        .collect()
}

fn bench_palindromes(c: &mut Criterion) {
    let mut group = c.benchmark_group("longest_palindrome");
    for &len in &[256usize, 1_024, 4_096] {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let s = random_text(&mut rng, len);

        group.bench_with_input(BenchmarkId::new("manacher", len), &s, |b, s| {
            b.iter(|| longest_palindrome::manacher(black_box(s)))
        });
        group.bench_with_input(BenchmarkId::new("expand_around_center", len), &s, |b, s| {
            b.iter(|| longest_palindrome::expand_around_center(black_box(s)))
        });
        if len <= 1_024 {
            group.bench_with_input(BenchmarkId::new("dynamic_programming", len), &s, |b, s| {
                b.iter(|| longest_palindrome::dynamic_programming(black_box(s)))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_palindromes);
criterion_main!(benches);
