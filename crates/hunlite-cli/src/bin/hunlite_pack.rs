// hunlite-pack: Build a dictionary once and save it as LANG.json.
//
// Loading a packed dictionary skips affix parsing and word-list expansion;
// the other tools prefer LANG.json over LANG.aff/LANG.dic when both exist.
//
// Usage:
//   hunlite-pack [-d DICT_PATH] [-l LANG] [-o OUT_DIR]
//
// Options:
//   -d, --dict-path PATH   Directory containing LANG.aff and LANG.dic
//   -l, --lang LANG        Dictionary language (default: en_US)
//   -o, --output DIR       Output directory (default: the source directory)
//   -v, --verbose          Debug logging (RUST_LOG overrides)
//   -h, --help             Print help

use std::path::PathBuf;

use hunlite_cli::DictionaryFiles;

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (common, args) =
        hunlite_cli::parse_common_args(&args).unwrap_or_else(|e| hunlite_cli::fatal(&e));

    if hunlite_cli::wants_help(&args) {
        println!("hunlite-pack: Build a dictionary and save it as LANG.json.");
        println!();
        println!("Usage: hunlite-pack [-d DICT_PATH] [-l LANG] [-o OUT_DIR]");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Directory containing LANG.aff and LANG.dic");
        println!("  -l, --lang LANG        Dictionary language (default: {})", hunlite_cli::DEFAULT_LANG);
        println!("  -o, --output DIR       Output directory (default: the source directory)");
        println!("  -v, --verbose          Debug logging (RUST_LOG overrides)");
        println!("  -h, --help             Print this help");
        return;
    }

    hunlite_cli::init_logging(common.verbose);

    let mut output: Option<PathBuf> = None;
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        if arg == "-o" || arg == "--output" {
            let dir = iter
                .next()
                .unwrap_or_else(|| hunlite_cli::fatal("--output requires a value"));
            output = Some(PathBuf::from(dir));
        } else {
            hunlite_cli::fatal(&format!("unexpected argument: {arg}"));
        }
    }

    let files = hunlite_cli::find_dictionary(
        common.dict_path.as_deref(),
        &common.lang,
        hunlite_cli::source_in,
    )
    .unwrap_or_else(|e| hunlite_cli::fatal(&e));
    let DictionaryFiles::Source { aff, dic } = files else {
        hunlite_cli::fatal("expected .aff/.dic source files");
    };

    let handle = hunlite_cli::load_source(&aff, &dic, &common.lang)
        .unwrap_or_else(|e| hunlite_cli::fatal(&e));
    let json = handle
        .serialize()
        .unwrap_or_else(|e| hunlite_cli::fatal(&e.to_string()));

    let dir = output
        .or_else(|| aff.parent().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("."));
    let target = dir.join(format!("{}.json", common.lang));
    std::fs::write(&target, json)
        .unwrap_or_else(|e| hunlite_cli::fatal(&format!("failed to write {}: {e}", target.display())));

    println!(
        "{}: {} word forms -> {}",
        common.lang,
        handle.word_count(),
        target.display()
    );
}
