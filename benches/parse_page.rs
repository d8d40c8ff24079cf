// benches/parse_page.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use ao3_scrape::core::html::parse_document;
use ao3_scrape::specs::{search::SearchPage, work::WorkRules};

const SAMPLE: &str = include_str!("../tests/fixtures/search_page.html");

fn bench_parse_page(c: &mut Criterion) {
    let page = SearchPage::new();
    let rules = WorkRules::new("https://archiveofourown.org");

    c.bench_function("parse_document", |b| {
        b.iter(|| black_box(parse_document(black_box(SAMPLE.as_bytes()))))
    });

    let doc = parse_document(SAMPLE.as_bytes());
    c.bench_function("extract_page", |b| {
        b.iter(|| {
            let (_, frags) = page.parse_page(black_box(&doc));
            let recs = rules.extract_all(1, &frags);
            black_box(recs.len())
        })
    });

    c.bench_function("total_results", |b| {
        b.iter(|| black_box(page.total_results(black_box(&doc)).ok()))
    });
}

criterion_group!(benches, bench_parse_page);
criterion_main!(benches);
