//! Benchmarks for the local triage classifier.
//!
//! The classifier runs on every completed intake and on every reopen, so it
//! must stay well under a millisecond even for long free-text answers.

use std::time::Duration;

use criterion::{criterion_group, criterion_main, Criterion};
use intake_core::{Answers, QuestionKey};
use intake_triage::{classify, render_summary};

/// Build an answer set whose main concern is roughly `words` words long.
fn answers_with_concern(words: usize, tail: &str) -> Answers {
    let filler = "the discomfort started after lunch and has not gone away ";
    let mut concern = String::new();
    while concern.split_whitespace().count() < words {
        concern.push_str(filler);
    }
    concern.push_str(tail);

    [
        (QuestionKey::MainConcern, concern.as_str()),
        (QuestionKey::Duration, "about a week"),
        (QuestionKey::Severity, "6 out of 10"),
        (QuestionKey::AdditionalSymptoms, "mild fever, fatigue"),
        (QuestionKey::MedicalHistory, "hypertension"),
    ]
    .into_iter()
    .collect()
}

fn bench_classify(c: &mut Criterion) {
    let mut group = c.benchmark_group("classify");
    group.measurement_time(Duration::from_secs(5));

    let short = answers_with_concern(5, "headache");
    group.bench_function("short_concern", |b| b.iter(|| classify(&short)));

    // No keyword hits: every rule is evaluated.
    let long_miss = answers_with_concern(300, "nothing specific");
    group.bench_function("long_concern_no_match", |b| b.iter(|| classify(&long_miss)));

    group.finish();
}

fn bench_summary(c: &mut Criterion) {
    let answers = answers_with_concern(40, "itchy rash");
    let result = classify(&answers);
    let notes = vec!["worse in the evening".to_string()];
    c.bench_function("render_summary", |b| {
        b.iter(|| render_summary(&answers, &result, &notes))
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(50);
    targets = bench_classify, bench_summary
);
criterion_main!(benches);
