//! Benchmarks for ranked search over synthetic guide-page corpora.
//!
//! Simulates realistic page sizes:
//! - small:  a single guide page   (~12 FAQ entries, ~8 sections)
//! - medium: a large guide         (~60 FAQ entries, ~30 sections)
//! - large:  well past anything a page would hold (~400 items)
//!
//! The large size exists to confirm the linear scan stays comfortably under
//! a keystroke debounce interval even when the corpus is absurd.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dalil::{search, Corpus, FaqEntry, SectionEntry, SourceRef};

/// Corpus size configurations
struct PageSize {
    name: &'static str,
    faq_entries: usize,
    sections: usize,
}

const PAGE_SIZES: &[PageSize] = &[
    PageSize {
        name: "small",
        faq_entries: 12,
        sections: 8,
    },
    PageSize {
        name: "medium",
        faq_entries: 60,
        sections: 30,
    },
    PageSize {
        name: "large",
        faq_entries: 300,
        sections: 100,
    },
];

/// Guide-domain vocabulary for realistic corpus text
const GUIDE_WORDS: &[&str] = &[
    "scholarship",
    "application",
    "deadline",
    "transcript",
    "recommendation",
    "passport",
    "visa",
    "interview",
    "program",
    "university",
    "funding",
    "tuition",
    "housing",
    "insurance",
    "language",
    "certificate",
    "motivation",
    "letter",
    "submission",
    "eligibility",
    "document",
    "checklist",
    "timeline",
    "acceptance",
];

/// Queries covering the interesting scoring paths
const QUERIES: &[(&str, &str)] = &[
    ("single_token", "scholarship"),
    ("multi_token", "application deadline"),
    ("short_query", "at"),
    ("no_match", "zzzzzz"),
];

fn synthetic_text(seed: usize, words: usize) -> String {
    (0..words)
        .map(|i| GUIDE_WORDS[(seed * 7 + i * 3) % GUIDE_WORDS.len()])
        .collect::<Vec<_>>()
        .join(" ")
}

fn build_corpus(size: &PageSize) -> Corpus {
    Corpus {
        faq: (0..size.faq_entries)
            .map(|i| FaqEntry {
                question: synthetic_text(i, 8),
                answer: synthetic_text(i + 1, 40),
                source: SourceRef(format!("#faq-{}", i)),
            })
            .collect(),
        sections: (0..size.sections)
            .map(|i| SectionEntry {
                title: synthetic_text(i + 2, 4),
                content: synthetic_text(i + 3, 120),
                source: SourceRef(format!("#section-{}", i)),
            })
            .collect(),
    }
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");

    for size in PAGE_SIZES {
        let corpus = build_corpus(size);
        group.throughput(Throughput::Elements(corpus.len() as u64));

        for (query_name, query) in QUERIES {
            group.bench_with_input(
                BenchmarkId::new(*query_name, size.name),
                &corpus,
                |b, corpus| b.iter(|| search(black_box(corpus), black_box(*query))),
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_search);
criterion_main!(benches);
