// Criterion benchmarks for hunlite-dict.
//
// Uses the fixture dictionary under tests/data by default. Set
// HUNLITE_BENCH_DICT to a path stem (without extension) to benchmark a real
// hunspell dictionary instead, e.g. /usr/share/hunspell/en_US.
//
// Run:
//   cargo bench -p hunlite-dict
//   HUNLITE_BENCH_DICT=/usr/share/hunspell/en_US cargo bench -p hunlite-dict

use std::path::PathBuf;

use criterion::{Criterion, criterion_group, criterion_main};
use hunlite_dict::{LoadOptions, SpellHandle};

// ---------------------------------------------------------------------------
// Dictionary discovery
// ---------------------------------------------------------------------------

fn dictionary_stem() -> PathBuf {
    if let Ok(stem) = std::env::var("HUNLITE_BENCH_DICT") {
        let stem = PathBuf::from(stem);
        if stem.with_extension("aff").exists() && stem.with_extension("dic").exists() {
            return stem;
        }
        eprintln!("HUNLITE_BENCH_DICT={} not found, using fixture", stem.display());
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/en_test")
}

fn load_texts() -> (String, String) {
    let stem = dictionary_stem();
    let aff = std::fs::read_to_string(stem.with_extension("aff")).expect("failed to read .aff");
    let dic = std::fs::read_to_string(stem.with_extension("dic")).expect("failed to read .dic");
    (aff, dic)
}

const WORDS: &[&str] = &[
    "cat", "Cats", "UNLOCKED", "flies", "sunshine", "speling", "wrold", "helo", "iPod", "IPOD",
    "baking", "roots", "xyzzy", "Hello", "station",
];

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_build(c: &mut Criterion) {
    let (aff, dic) = load_texts();
    c.bench_function("build", |b| {
        b.iter(|| {
            SpellHandle::from_texts("bench", &aff, &dic, &LoadOptions::default())
                .expect("dictionary builds")
        });
    });
}

fn bench_check(c: &mut Criterion) {
    let (aff, dic) = load_texts();
    let handle = SpellHandle::from_texts("bench", &aff, &dic, &LoadOptions::default())
        .expect("dictionary builds");
    c.bench_function("check_words", |b| {
        b.iter(|| {
            for word in WORDS {
                std::hint::black_box(handle.check(word).expect("loaded"));
            }
        });
    });
}

/// Cold suggestions: a fresh handle per iteration so the memo never hits.
fn bench_suggest(c: &mut Criterion) {
    let (aff, dic) = load_texts();
    let handle = SpellHandle::from_texts("bench", &aff, &dic, &LoadOptions::default())
        .expect("dictionary builds");
    let json = handle.serialize().expect("serializes");

    c.bench_function("suggest_cold", |b| {
        b.iter_batched(
            || SpellHandle::deserialize(&json).expect("deserializes"),
            |handle| std::hint::black_box(handle.suggest("speling", 5).expect("loaded")),
            criterion::BatchSize::LargeInput,
        );
    });

    handle.suggest("speling", 5).expect("loaded");
    c.bench_function("suggest_cached", |b| {
        b.iter(|| std::hint::black_box(handle.suggest("speling", 5).expect("loaded")));
    });
}

fn bench_serialize(c: &mut Criterion) {
    let (aff, dic) = load_texts();
    let handle = SpellHandle::from_texts("bench", &aff, &dic, &LoadOptions::default())
        .expect("dictionary builds");
    let json = handle.serialize().expect("serializes");

    c.bench_function("serialize", |b| {
        b.iter(|| std::hint::black_box(handle.serialize().expect("serializes")));
    });
    c.bench_function("deserialize", |b| {
        b.iter(|| std::hint::black_box(SpellHandle::deserialize(&json).expect("deserializes")));
    });
}

criterion_group!(benches, bench_build, bench_check, bench_suggest, bench_serialize);
criterion_main!(benches);
