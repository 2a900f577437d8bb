//! Rendering performance benchmarks.
//!
//! Measures datasheet rendering as field values grow.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use datasheet::{DatasheetRenderer, TagKey, TagMapping};

/// Tag mapping with every field set to `paragraphs` paragraphs of prose,
/// with a list in the secondary use case.
fn generate_tags(paragraphs: usize) -> TagMapping {
    let mut tags = TagMapping::new();
    for key in TagKey::ALL {
        let mut value = String::new();
        for i in 0..paragraphs {
            if i > 0 {
                value.push_str("\n\n");
            }
            match key {
                TagKey::UsecaseSecondary => value.push_str(&format!("- use case {}", i + 1)),
                TagKey::Title => value.push_str("Benchmark Model"),
                _ => value.push_str(&format!(
                    "Paragraph {} of the {} field, with *emphasis* and `code`.",
                    i + 1,
                    key
                )),
            }
        }
        tags.insert(key.as_str(), value);
    }
    tags
}

/// Benchmark rendering with growing field sizes.
fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    let renderer = DatasheetRenderer::new();

    for paragraphs in [1, 10, 100].iter() {
        let tags = generate_tags(*paragraphs);
        let bytes: usize = tags.iter().map(|(_, v)| v.len()).sum();

        group.throughput(Throughput::Bytes(bytes as u64));
        group.bench_with_input(
            BenchmarkId::new("paragraphs", paragraphs),
            &tags,
            |b, tags| b.iter(|| black_box(renderer.render(tags))),
        );
    }

    group.finish();
}

/// Benchmark the all-missing case, where every field logs a warning.
fn bench_render_empty(c: &mut Criterion) {
    let renderer = DatasheetRenderer::new();
    let tags = TagMapping::new();

    c.bench_function("render_empty", |b| {
        b.iter(|| black_box(renderer.render(&tags)))
    });
}

criterion_group!(benches, bench_render, bench_render_empty);
criterion_main!(benches);
