/// Benchmark module for the word counter and GitHub statistics aggregation.
/// Measures analysis of large documents, text commands and repository reduction.
use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use portfolio_stats::analysis::{aggregate, analyze, TextCommand};
use portfolio_stats::{RepoRecord, UserProfile};

const PARAGRAPH: &str = "The quick brown fox jumps over the lazy dog. Pack my box with \
five dozen liquor jugs! How vexingly quick daft zebras jump? Sphinx of black quartz, \
judge my vow.\n\n";

/// Build a document of roughly `paragraphs * 30` words
///
/// # Arguments
/// * `paragraphs` - Number of times the sample paragraph is repeated
fn build_document(paragraphs: usize) -> String {
    PARAGRAPH.repeat(paragraphs)
}

/// Build `count` repositories spread over several years and languages
fn build_repositories(count: usize) -> Vec<RepoRecord> {
    let languages = ["Rust", "Go", "TypeScript", "Python", "C", "Zig", "Lua"];
    let start = Utc.with_ymd_and_hms(2015, 1, 1, 0, 0, 0).unwrap();

    (0..count)
        .map(|i| RepoRecord {
            id: i as u64,
            name: format!("repo-{}", i),
            description: None,
            url: format!("https://github.com/someone/repo-{}", i),
            homepage: None,
            stars: (i % 50) as u64,
            forks: (i % 7) as u64,
            language: Some(languages[i % languages.len()].to_string()),
            topics: Vec::new(),
            pushed_at: Some(start + Duration::days((i * 13) as i64 + 40)),
            created_at: Some(start + Duration::days((i * 11) as i64)),
            is_fork: i % 5 == 0,
        })
        .collect()
}

/// Benchmark text analysis on short and long documents
///
/// # Arguments
/// * `c` - Criterion benchmark configuration
fn bench_text_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_analysis");
    let short = build_document(1);
    let long = build_document(1_000);

    group.bench_function("analyze_short", |b| {
        b.iter(|| analyze(black_box(&short), black_box("")))
    });

    group.bench_function("analyze_long", |b| {
        b.iter(|| analyze(black_box(&long), black_box("")))
    });

    group.bench_function("analyze_long_with_exclusions", |b| {
        b.iter(|| analyze(black_box(&long), black_box("the, my, of, quick")))
    });

    group.finish();
}

/// Benchmark the text clean-up commands
fn bench_text_commands(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_commands");
    let long = build_document(1_000);

    for (name, command) in [
        ("collapse_whitespace", TextCommand::CollapseWhitespace),
        ("remove_duplicate_words", TextCommand::RemoveDuplicateWords),
        ("title_case", TextCommand::TitleCase),
    ] {
        group.bench_function(name, |b| b.iter(|| command.apply(black_box(&long))));
    }

    group.finish();
}

/// Benchmark repository aggregation at the page cap (10 pages of 100)
fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("repo_aggregation");
    let repos = build_repositories(1_000);
    let profile = UserProfile {
        login: "someone".to_string(),
        public_repos: 1_000,
    };

    group.bench_function("aggregate_1000_repos", |b| {
        b.iter(|| aggregate(black_box(&profile), black_box(&repos)))
    });

    group.finish();
}

criterion_group!(benches, bench_text_analysis, bench_text_commands, bench_aggregation);
criterion_main!(benches);
