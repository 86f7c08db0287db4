//! Benchmarks for quizlay pagination performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks exercise the layout engine with synthetic documents.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use quizlay::{layout, style, Question, Section};

/// Creates a synthetic exam with the given shape.
fn create_sections(section_count: usize, questions_per_section: usize) -> Vec<Section> {
    (0..section_count)
        .map(|s| {
            let mut section = Section::new(format!("Part {}", s + 1));
            for q in 0..questions_per_section {
                section.add_question(Question::multiple_choice(
                    (s * questions_per_section + q + 1) as u32,
                    format!(
                        "Benchmark question {} with enough text to span a line or two of output?",
                        q + 1
                    ),
                    vec![
                        "First option".into(),
                        "Second option".into(),
                        "Third option".into(),
                        "Fourth option".into(),
                    ],
                    q % 4,
                ));
            }
            section
        })
        .collect()
}

fn bench_paginate(c: &mut Criterion) {
    let preset = style::resolve("standard");

    let small = create_sections(1, 10);
    c.bench_function("paginate_1x10", |b| {
        b.iter(|| layout::paginate(black_box(&small), black_box(preset)))
    });

    let medium = create_sections(5, 40);
    c.bench_function("paginate_5x40", |b| {
        b.iter(|| layout::paginate(black_box(&medium), black_box(preset)))
    });

    let large = create_sections(20, 100);
    c.bench_function("paginate_20x100", |b| {
        b.iter(|| layout::paginate(black_box(&large), black_box(preset)))
    });
}

fn bench_estimate(c: &mut Criterion) {
    use quizlay::{CharWidthEstimator, HeightEstimator};

    let preset = style::resolve("compact");
    let question = Question::multiple_choice(
        1,
        "A question of fairly typical length used to measure estimator throughput?",
        vec!["one".into(), "two".into(), "three".into(), "four".into()],
        2,
    );

    c.bench_function("estimate_height", |b| {
        b.iter(|| CharWidthEstimator.estimate(black_box(&question), black_box(preset)))
    });
}

criterion_group!(benches, bench_paginate, bench_estimate);
criterion_main!(benches);
