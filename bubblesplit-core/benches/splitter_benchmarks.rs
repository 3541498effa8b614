//! Throughput benchmarks for MessageSplitter
//!
//! Run with: cargo bench --bench splitter_benchmarks

use bubblesplit_core::{format_for_bridge, MessageSplitter};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Generate chat-style text of roughly `size` bytes
fn generate_text(size: usize) -> String {
    let base = "Sure thing! Dr. Patel can see you at noon, or at three if that works better. \
                Would you like me to book it? ";
    let mut text = base.repeat(size / base.len() + 1);
    text.truncate(size);
    text
}

fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let splitter = MessageSplitter::new();

    for size in [256, 1024, 10_240, 102_400] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("split", size), &text, |b, text| {
            b.iter(|| splitter.split(black_box(text)));
        });
    }

    group.finish();
}

fn bench_max_chars(c: &mut Criterion) {
    let mut group = c.benchmark_group("max_chars");
    let text = generate_text(10_240);

    for max_chars in [40, 80, 160, 320] {
        let splitter = MessageSplitter::with_max_chars(max_chars).unwrap();
        group.bench_with_input(BenchmarkId::new("split", max_chars), &text, |b, text| {
            b.iter(|| splitter.split(black_box(text)));
        });
    }

    group.finish();
}

fn bench_long_sentence(c: &mut Criterion) {
    let sentence = "word ".repeat(2_000);
    let splitter = MessageSplitter::new();

    c.bench_function("long_sentence_word_wrap", |b| {
        b.iter(|| splitter.split(black_box(&sentence)));
    });
}

fn bench_delivery(c: &mut Criterion) {
    let splitter = MessageSplitter::new();
    let messages = splitter.split(&generate_text(10_240));

    c.bench_function("format_for_bridge", |b| {
        b.iter(|| format_for_bridge(black_box(messages.clone())));
    });
}

criterion_group!(
    benches,
    bench_text_sizes,
    bench_max_chars,
    bench_long_sentence,
    bench_delivery
);
criterion_main!(benches);
