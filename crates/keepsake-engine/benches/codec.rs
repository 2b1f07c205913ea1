use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use keepsake_engine::{markdown, render, surface};

fn sample_letter() -> String {
    let paragraph = "My dearest, happy **birthday** to you! Every day with you feels like a \
                     *celebration*, and I wanted to write down a few of the reasons why.";
    let mut letter = String::new();
    for _ in 0..40 {
        letter.push_str(paragraph);
        letter.push_str("\n\n");
    }
    letter
}

fn bench_decode(c: &mut Criterion) {
    let letter = sample_letter();
    c.bench_function("markdown_decode_letter", |b| {
        b.iter(|| markdown::decode(black_box(&letter)))
    });
}

fn bench_encode(c: &mut Criterion) {
    let doc = markdown::decode(&sample_letter());
    c.bench_function("markdown_encode_letter", |b| {
        b.iter(|| markdown::encode(black_box(&doc)))
    });
}

fn bench_surface_round_trip(c: &mut Criterion) {
    let doc = markdown::decode(&sample_letter());
    let markup = surface::to_markup(&doc);
    c.bench_function("surface_markup_parse", |b| {
        b.iter(|| surface::from_markup(black_box(&markup)))
    });
}

fn bench_render(c: &mut Criterion) {
    let doc = markdown::decode(&sample_letter());
    c.bench_function("render_letter", |b| {
        b.iter(|| render::to_html(black_box(&doc)))
    });
}

criterion_group!(
    benches,
    bench_decode,
    bench_encode,
    bench_surface_round_trip,
    bench_render
);
criterion_main!(benches);
