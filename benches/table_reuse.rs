use criterion::{criterion_group, criterion_main, Criterion};
use dl_engines::{berghel_roach, berghel_roach_with, table::DiagonalTable};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn corpus(count: usize, max_len: usize) -> Vec<(Vec<u8>, Vec<u8>)> {
    const ALPHABET: &[u8] = b"abcdefgh";
    let mut rng = StdRng::seed_from_u64(7);
    let mut word = |len: usize| -> Vec<u8> {
        (0..len)
            .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
            .collect()
    };
    (0..count)
        .map(|i| {
            let len = (i * 7) % max_len + 1;
            let a = word(len);
            let mut b = a.clone();
            b.rotate_left(len.min(2) / 2);
            (a, b)
        })
        .collect()
}

fn bench_table_reuse(c: &mut Criterion) {
    let pairs = corpus(500, 48);
    let mut group = c.benchmark_group("br_table");

    group.bench_function("fresh_table_per_pair", |b| {
        b.iter(|| {
            pairs
                .iter()
                .map(|(x, y)| berghel_roach(x, y))
                .sum::<usize>()
        })
    });

    group.bench_function("shared_table", |b| {
        let mut table = DiagonalTable::new(48);
        b.iter(|| {
            pairs
                .iter()
                .map(|(x, y)| berghel_roach_with(&mut table, x, y, false).unwrap_or(usize::MAX))
                .sum::<usize>()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_table_reuse);
criterion_main!(benches);
