use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use renamarion::inventory::{Entry, EntryKind};
use renamarion::rules::{classify, NameResolver, RuleSet};
use renamarion::scanner::{ScanProgress, Scanner};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const NAMES: &[&str] = &[
    "plain.txt",
    "foo<bar>.txt",
    "notes, ",
    "report|final\".pdf",
    "what?*.md",
    "a:b:c ,",
];

// Helper function to create a tree with a share of invalid names
fn create_tree(width: usize) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    for d in 0..width {
        let dir = temp_dir.path().join(format!("dir:{d}"));
        fs::create_dir(&dir).unwrap();
        for (i, name) in NAMES.iter().enumerate() {
            fs::write(dir.join(format!("{i}-{name}")), "").unwrap();
        }
    }
    temp_dir
}

fn bench_classify(c: &mut Criterion) {
    let rules = RuleSet::defaults();
    let mut group = c.benchmark_group("classify");

    for name in NAMES {
        group.bench_with_input(BenchmarkId::from_parameter(name), name, |b, name| {
            b.iter(|| classify(black_box(name), &rules))
        });
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let rules = RuleSet::defaults();
    let resolver = NameResolver::new(&rules);
    let entries: Vec<Entry> = NAMES
        .iter()
        .map(|name| Entry::classify(EntryKind::File, Path::new("/srv"), name, &rules))
        .collect();

    c.bench_function("resolve", |b| {
        b.iter(|| {
            for entry in &entries {
                let _ = black_box(resolver.resolve(entry));
            }
        })
    });
}

fn bench_scan(c: &mut Criterion) {
    let rules = RuleSet::defaults();
    let mut group = c.benchmark_group("scan");

    for width in [10, 100] {
        let tree = create_tree(width);
        let scanner = Scanner::new(tree.path()).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(width), &scanner, |b, scanner| {
            b.iter(|| scanner.scan(&rules, &ScanProgress::hidden()).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_classify, bench_resolve, bench_scan);
criterion_main!(benches);
