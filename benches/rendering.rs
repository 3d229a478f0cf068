//! Benchmarks for row layout.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use runed::editor::Buffer;

fn sample_text() -> String {
    (0..500)
        .map(|i| format!("\tfn item_{i}() {{ let s = \"日本語テキスト\"; }}\t// {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bench_render_all_rows(c: &mut Criterion) {
    let text = sample_text();

    c.bench_function("render_all_rows_cold", |b| {
        b.iter(|| {
            let mut buf = Buffer::from_text(black_box(&text));
            for row in 0..buf.row_count() {
                black_box(buf.render(row).map(<[char]>::len).ok());
            }
        });
    });

    let mut warm = Buffer::from_text(&text);
    c.bench_function("render_all_rows_cached", |b| {
        b.iter(|| {
            for row in 0..warm.row_count() {
                black_box(warm.render(row).map(<[char]>::len).ok());
            }
        });
    });
}

criterion_group!(benches, bench_render_all_rows);
criterion_main!(benches);
