// Criterion benchmarks for Mood AI

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use mood_ai::core::{Advisor, MoodAnalyzer, Scorer};
use mood_ai::models::JournalEntry;

const SAMPLE_SENTENCES: [&str; 6] = [
    "Today I felt happy and grateful for my friends.",
    "Work was stressful and I am tired, a bit overwhelmed.",
    "Went for a walk, the weather was nice and calm.",
    "I read a book in the park (it was ok).",
    "Still worried about the exam, but confident I prepared!",
    "Nothing much happened; dinner, dishes, bed.",
];

fn create_entry(sentences: usize) -> String {
    (0..sentences)
        .map(|i| SAMPLE_SENTENCES[i % SAMPLE_SENTENCES.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn bench_score_short(c: &mut Criterion) {
    let scorer = Scorer::default();

    c.bench_function("score_short_entry", |b| {
        b.iter(|| scorer.score(black_box("I am so happy today")));
    });
}

fn bench_score_by_length(c: &mut Criterion) {
    let scorer = Scorer::default();

    let mut group = c.benchmark_group("scoring");

    for sentence_count in [1, 10, 100, 1000].iter() {
        let text = create_entry(*sentence_count);

        group.bench_with_input(
            BenchmarkId::new("score", sentence_count),
            &text,
            |b, text| {
                b.iter(|| scorer.score(black_box(text)));
            },
        );
    }

    group.finish();
}

fn bench_advise(c: &mut Criterion) {
    let advisor = Advisor::new();

    c.bench_function("advise", |b| {
        b.iter(|| advisor.advise(black_box(6.3), black_box("")));
    });
}

fn bench_analyze(c: &mut Criterion) {
    let analyzer = MoodAnalyzer::default();
    let entry = JournalEntry::new(create_entry(20), "Weekly recap");

    c.bench_function("analyze_entry_20_sentences", |b| {
        b.iter(|| analyzer.analyze(black_box(&entry)));
    });
}

criterion_group!(
    benches,
    bench_score_short,
    bench_score_by_length,
    bench_advise,
    bench_analyze
);

criterion_main!(benches);
