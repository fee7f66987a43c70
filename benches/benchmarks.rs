//! Benchmarks for the pagination core

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use paper_pagination::wasm::flat_buffer::WindowBuffer;
use paper_pagination::{
    compute_window, diff_windows, next_page, ControlStrip, NavigationIntent, PaginationConfig,
    PaginationState,
};

fn bench_compute_window_small(c: &mut Criterion) {
    c.bench_function("compute_window_small", |b| {
        b.iter(|| compute_window(black_box(10), black_box(20), black_box(5)));
    });
}

fn bench_compute_window_wide(c: &mut Criterion) {
    c.bench_function("compute_window_wide", |b| {
        // Spills out of inline storage
        b.iter(|| compute_window(black_box(50_000), black_box(100_000), black_box(64)));
    });
}

fn bench_next_page(c: &mut Criterion) {
    c.bench_function("next_page_cycle", |b| {
        b.iter(|| {
            let mut page = 0;
            for _ in 0..100 {
                page = next_page(NavigationIntent::Next, page, black_box(50)).unwrap_or(page);
            }
            page
        });
    });
}

fn bench_control_strip(c: &mut Criterion) {
    c.bench_function("build_control_strip", |b| {
        let config = PaginationConfig::default();
        let mut state = PaginationState::new(10_000, 10, 7).unwrap();
        state.apply(NavigationIntent::SelectPage(500)).unwrap();

        b.iter(|| black_box(ControlStrip::build(&state, &config)));
    });
}

fn bench_diff_and_encode(c: &mut Criterion) {
    c.bench_function("diff_and_encode", |b| {
        let prev = compute_window(40, 100, 9).unwrap();
        let curr = compute_window(41, 100, 9).unwrap();
        let mut buf = WindowBuffer::new();

        b.iter(|| {
            black_box(diff_windows(&prev, &curr));
            buf.write(&curr, 41, 100);
        });
    });
}

criterion_group!(
    benches,
    bench_compute_window_small,
    bench_compute_window_wide,
    bench_next_page,
    bench_control_strip,
    bench_diff_and_encode,
);

criterion_main!(benches);
