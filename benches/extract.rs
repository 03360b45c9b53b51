// benches/extract.rs
use chrono::NaiveDate;
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use redfin_tools::{
    details::collect_details,
    rows::{LONG_ROW, SCORING_DETAILS},
    snapshot::HtmlPage,
    specs::listing,
};

const LISTING: &str = include_str!("../tests/fixtures/listing.html");
const URL: &str = "https://www.redfin.com/ST/Anytown/123-Main-St-00000/home/12345678";

fn bench_extract(c: &mut Criterion) {
    let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap_or_default();

    // Parse included; every action re-reads the page.
    c.bench_function("parse_and_collect", |b| {
        b.iter(|| {
            let page = HtmlPage::parse(black_box(LISTING), URL);
            black_box(collect_details(&page, today).len())
        })
    });

    let page = HtmlPage::parse(LISTING, URL);

    c.bench_function("collect_only", |b| {
        b.iter(|| black_box(collect_details(black_box(&page), today).len()))
    });

    c.bench_function("additional_details", |b| {
        b.iter(|| black_box(listing::additional_details(black_box(&page)).len()))
    });

    let details = collect_details(&page, today);
    c.bench_function("format_rows", |b| {
        b.iter(|| {
            let long = LONG_ROW.format(black_box(&details));
            let scoring = SCORING_DETAILS.format(black_box(&details));
            black_box(long.len() + scoring.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
