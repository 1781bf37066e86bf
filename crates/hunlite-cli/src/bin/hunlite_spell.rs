// hunlite-spell: Check spelling of words from stdin.
//
// Reads words from stdin (one per line) and reports whether each word
// is correctly spelled:
//   C: word    (correct)
//   W: word    (wrong / misspelled)
//   S: word    (suggestion, with -s)
//
// Usage:
//   hunlite-spell [-d DICT_PATH] [-l LANG] [OPTIONS]
//
// Options:
//   -d, --dict-path PATH   Directory containing LANG.aff/LANG.dic or LANG.json
//   -l, --lang LANG        Dictionary language (default: en_US)
//   -s, --suggest          Also print suggestions for misspelled words
//   -v, --verbose          Debug logging (RUST_LOG overrides)
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (common, args) =
        hunlite_cli::parse_common_args(&args).unwrap_or_else(|e| hunlite_cli::fatal(&e));

    if hunlite_cli::wants_help(&args) {
        println!("hunlite-spell: Check spelling of words from stdin.");
        println!();
        println!("Usage: hunlite-spell [-d DICT_PATH] [-l LANG] [OPTIONS]");
        println!();
        println!("Reads words from stdin (one per line). Prints:");
        println!("  C: word    (correct)");
        println!("  W: word    (misspelled)");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH   Directory containing LANG.aff/LANG.dic or LANG.json");
        println!("  -l, --lang LANG        Dictionary language (default: {})", hunlite_cli::DEFAULT_LANG);
        println!("  -s, --suggest          Also print suggestions for misspelled words");
        println!("  -v, --verbose          Debug logging (RUST_LOG overrides)");
        println!("  -h, --help             Print this help");
        return;
    }

    hunlite_cli::init_logging(common.verbose);
    let show_suggestions = args.iter().any(|a| a == "-s" || a == "--suggest");

    let handle = hunlite_cli::load_handle(common.dict_path.as_deref(), &common.lang)
        .unwrap_or_else(|e| hunlite_cli::fatal(&e));

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l,
            Err(e) => {
                eprintln!("error reading stdin: {e}");
                break;
            }
        };
        let word = line.trim();
        if word.is_empty() {
            continue;
        }

        let correct = handle.check(word).unwrap_or_else(|e| hunlite_cli::fatal(&e.to_string()));
        if correct {
            let _ = writeln!(out, "C: {word}");
        } else {
            let _ = writeln!(out, "W: {word}");
            if show_suggestions {
                let suggestions = handle
                    .suggest_default(word)
                    .unwrap_or_else(|e| hunlite_cli::fatal(&e.to_string()));
                for suggestion in suggestions {
                    let _ = writeln!(out, "S: {suggestion}");
                }
            }
        }
    }
}
