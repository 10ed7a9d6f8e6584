use criterion::{black_box, criterion_group, criterion_main, Criterion};
use viewdeps::{ErbTracker, SourceTemplate, Tracker};

fn erb_source_snippet() -> &'static str {
    r#"<h1><%= @post.title %></h1>
<%= render "posts/form" %>
<%= render partial: "comments/comment", collection: @post.comments %>
<%= render(@topic) %>
<%= render "sidebar" %>
<%# Template Dependency: shared/analytics %>
"#
}

fn large_synthetic_source(renders: usize) -> String {
    // The scanner only matches lowercase identifiers, so suffix with letters.
    let mut source = String::new();
    for i in 0..renders {
        let hi = (b'a' + (i / 26 % 26) as u8) as char;
        let lo = (b'a' + (i % 26) as u8) as char;
        source.push_str(&format!("<p>filler line {i}</p>\n"));
        source.push_str(&format!("<%= render \"shared/partial_{hi}{lo}\" %>\n"));
    }
    source
}

fn bench_small_template(c: &mut Criterion) {
    let tracker = ErbTracker::new();
    let template = SourceTemplate::erb(erb_source_snippet());
    c.bench_function("erb_extract_small", |b| {
        b.iter(|| tracker.dependencies(black_box("posts/show"), &template))
    });
}

fn bench_large_template(c: &mut Criterion) {
    let tracker = ErbTracker::new();
    let template = SourceTemplate::erb(large_synthetic_source(500));
    c.bench_function("erb_extract_500_renders", |b| {
        b.iter(|| tracker.dependencies(black_box("posts/show"), &template))
    });
}

criterion_group!(benches, bench_small_template, bench_large_template);
criterion_main!(benches);
