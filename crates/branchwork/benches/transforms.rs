//! Benchmarks for the exercises that are expected to handle large inputs.
//!
//! # Benchmarks
//!
//! - **`sort_ascending`**: quicksort over scrambled, ascending, and descending
//!   inputs of 2 003 elements.
//! - **`rotate_clockwise`**: in-place rotation of square matrices.
//! - **`spiral_matrix`**: spiral generation at several sizes.
//! - **`shuffle_chars`**: interleave shuffle of long strings with very large
//!   iteration counts.
//!
//! Inputs are built deterministically so runs are comparable.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench transforms
//! ```

use std::hint;

use branchwork::{rotate_clockwise, shuffle_chars, sort_ascending, spiral_matrix};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};

const SORT_LEN: u64 = 2_003;

fn scrambled() -> Vec<u64> {
    // 7919 is coprime with SORT_LEN, so this visits every value once
    (0..SORT_LEN).map(|i| i * 7919 % SORT_LEN).collect()
}

fn bench_sort(c: &mut Criterion) {
    let inputs = [
        ("scrambled", scrambled()),
        ("ascending", (0..SORT_LEN).collect()),
        ("descending", (0..SORT_LEN).rev().collect()),
    ];

    for (param, values) in inputs {
        c.bench_with_input(
            BenchmarkId::new("sort_ascending", param),
            &values,
            |b, values| {
                b.iter_batched_ref(
                    || hint::black_box(values.clone()),
                    |values| {
                        sort_ascending(values);
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_rotate(c: &mut Criterion) {
    for size in [16, 256, 1024] {
        let matrix = spiral_matrix(size);
        c.bench_with_input(
            BenchmarkId::new("rotate_clockwise", size),
            &matrix,
            |b, matrix| {
                b.iter_batched_ref(
                    || hint::black_box(matrix.clone()),
                    |matrix| {
                        rotate_clockwise(matrix);
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }
}

fn bench_spiral(c: &mut Criterion) {
    for size in [16, 256, 1024] {
        c.bench_with_input(BenchmarkId::new("spiral_matrix", size), &size, |b, &size| {
            b.iter(|| spiral_matrix(hint::black_box(size)));
        });
    }
}

fn bench_shuffle(c: &mut Criterion) {
    let text: String = "the quick brown fox jumps over the lazy dog "
        .chars()
        .cycle()
        .take(100_000)
        .collect();

    for iterations in [1, 1_000_000, usize::MAX] {
        c.bench_with_input(
            BenchmarkId::new("shuffle_chars", iterations),
            &iterations,
            |b, &iterations| {
                b.iter(|| shuffle_chars(hint::black_box(&text), iterations));
            },
        );
    }
}

criterion_group!(
    benches,
    bench_sort,
    bench_rotate,
    bench_spiral,
    bench_shuffle
);
criterion_main!(benches);
