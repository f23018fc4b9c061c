use criterion::{criterion_group, criterion_main, Criterion, black_box};

use dashboard_scrape::{
    config::options::ScrapeOptions,
    core::Page,
    specs::{listing, project},
};

fn detail_sample() -> String {
    // Roughly the shape of a real detail page: lots of layout, four labels.
    let filler: String = (0..400)
        .map(|i| format!("<tr><td class=\"k\">Row {i}</td><td><span id=\"x{i}\">value {i}</span></td></tr>"))
        .collect();
    format!(
        r#"<html><head><title>Project Detail</title></head><body><form><table>{filler}
        <tr><td><span id="ContentPlaceHolder1_lblGstin"> 27AAAPL1234C1ZV </span></td></tr>
        <tr><td><span id="ContentPlaceHolder1_lblPan">AAAPL1234C</span></td></tr>
        <tr><td><span id="ContentPlaceHolder1_lblProjectName">Lake View</span></td></tr>
        <tr><td><span id="ContentPlaceHolder1_lblAddress">Plot 4, Sector 9</span></td></tr>
        </table></form></body></html>"#
    )
}

fn listing_sample() -> String {
    let items: String = (0..500)
        .map(|i| format!("<li><a href=\"ProjectDetail.aspx?id={i}\">Project {i}</a></li>"))
        .collect();
    format!(r#"<html><body><div class="panel-body"><ul>{items}</ul></div></body></html>"#)
}

fn bench_extract(c: &mut Criterion) {
    let detail = detail_sample();
    let list = listing_sample();
    let opts = ScrapeOptions::default();

    c.bench_function("detail_parse_and_extract", |b| {
        b.iter(|| {
            let page = Page::parse(black_box(&detail));
            black_box(project::extract(&page, "N/A"))
        })
    });

    let parsed = Page::parse(&detail);
    c.bench_function("detail_extract_only", |b| {
        b.iter(|| black_box(project::extract(black_box(&parsed), "N/A")))
    });

    c.bench_function("listing_links", |b| {
        b.iter(|| {
            let page = Page::parse(black_box(&list));
            let links = listing::detail_links(&page, &opts).expect("listing parses");
            black_box(links.len())
        })
    });
}

criterion_group!(benches, bench_extract);
criterion_main!(benches);
