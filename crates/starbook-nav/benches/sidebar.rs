//! Benchmarks for sidebar building.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use starbook_nav::{Document, LocaleSet, build_sidebar};

/// Create documents for a tree with specified depth and breadth.
///
/// Every directory holds an `index.md` and `breadth` subdirectories.
fn create_documents(prefix: &str, depth: usize, breadth: usize) -> Vec<Document> {
    fn create_level(
        dir: &str,
        current_depth: usize,
        max_depth: usize,
        breadth: usize,
        docs: &mut Vec<Document>,
    ) {
        if current_depth > max_depth {
            return;
        }

        let id = if dir.is_empty() {
            "index.md".to_owned()
        } else {
            format!("{dir}/index.md")
        };
        let slug = id.trim_end_matches(".md").to_owned();
        docs.push(Document::new(id, slug, format!("Level {current_depth}")));

        for i in 0..breadth {
            let child = if dir.is_empty() {
                format!("section-{i}")
            } else {
                format!("{dir}/section-{i}")
            };
            create_level(&child, current_depth + 1, max_depth, breadth, docs);
        }
    }

    let mut docs = Vec::new();
    create_level(prefix, 0, depth, breadth, &mut docs);
    docs
}

fn bench_build_sidebar(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_sidebar");

    for (depth, breadth) in [(2, 5), (3, 5), (5, 3)] {
        let docs = create_documents("", depth, breadth);
        group.bench_with_input(
            BenchmarkId::new("no_locales", format!("{depth}x{breadth}")),
            &docs,
            |b, docs| b.iter(|| build_sidebar(docs, "section-0/section-1/index", None)),
        );
    }

    group.finish();
}

fn bench_build_sidebar_locales(c: &mut Criterion) {
    let mut docs = create_documents("", 3, 4);
    docs.extend(create_documents("fr", 3, 4));
    docs.extend(create_documents("de", 3, 4));
    let locales = LocaleSet::new(["root", "fr", "de"]);

    let mut group = c.benchmark_group("build_sidebar_locales");

    group.bench_function("root", |b| {
        b.iter(|| build_sidebar(&docs, "section-0/index", Some(&locales)));
    });

    group.bench_function("prefixed", |b| {
        b.iter(|| build_sidebar(&docs, "fr/section-0/index", Some(&locales)));
    });

    group.finish();
}

criterion_group!(benches, bench_build_sidebar, bench_build_sidebar_locales);
criterion_main!(benches);
