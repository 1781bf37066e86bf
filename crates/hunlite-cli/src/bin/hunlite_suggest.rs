// hunlite-suggest: Generate spelling suggestions for words.
//
// Suggests corrections for each WORD argument, or for each line of stdin
// when no words are given. Correctly spelled words are reported as such.
//
// Usage:
//   hunlite-suggest [-d DICT_PATH] [-l LANG] [OPTIONS] [WORD...]
//
// Options:
//   -d, --dict-path PATH      Directory containing LANG.aff/LANG.dic or LANG.json
//   -l, --lang LANG           Dictionary language (default: en_US)
//   -n, --max-suggestions N   Maximum number of suggestions (default: 5)
//   -v, --verbose             Debug logging (RUST_LOG overrides)
//   -h, --help                Print help

use std::io::{self, BufRead, Write};

use hunlite_dict::SpellHandle;

fn suggest_word(word: &str, handle: &SpellHandle, out: &mut impl Write) {
    let correct = handle.check(word).unwrap_or_else(|e| hunlite_cli::fatal(&e.to_string()));
    if correct {
        let _ = writeln!(out, "{word} (correct)");
        return;
    }
    let suggestions = handle
        .suggest_default(word)
        .unwrap_or_else(|e| hunlite_cli::fatal(&e.to_string()));
    if suggestions.is_empty() {
        let _ = writeln!(out, "{word}: (no suggestions)");
    } else {
        let _ = writeln!(out, "{word}:");
        for s in &suggestions {
            let _ = writeln!(out, "  {s}");
        }
    }
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (common, args) =
        hunlite_cli::parse_common_args(&args).unwrap_or_else(|e| hunlite_cli::fatal(&e));

    if hunlite_cli::wants_help(&args) {
        println!("hunlite-suggest: Generate spelling suggestions.");
        println!();
        println!("Usage: hunlite-suggest [-d DICT_PATH] [-l LANG] [OPTIONS] [WORD...]");
        println!();
        println!("If WORD arguments are given, suggests for each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -d, --dict-path PATH      Directory containing LANG.aff/LANG.dic or LANG.json");
        println!("  -l, --lang LANG           Dictionary language (default: {})", hunlite_cli::DEFAULT_LANG);
        println!("  -n, --max-suggestions N   Maximum number of suggestions (default: 5)");
        println!("  -v, --verbose             Debug logging (RUST_LOG overrides)");
        println!("  -h, --help                Print this help");
        return;
    }

    hunlite_cli::init_logging(common.verbose);

    let mut max_suggestions: usize = 5;
    let mut words: Vec<String> = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if arg == "-n" || arg == "--max-suggestions" {
            let value = iter
                .next()
                .unwrap_or_else(|| hunlite_cli::fatal("--max-suggestions requires a value"));
            max_suggestions = value
                .parse()
                .unwrap_or_else(|_| hunlite_cli::fatal("invalid number for --max-suggestions"));
        } else if !arg.starts_with('-') {
            words.push(arg.clone());
        }
    }

    let mut handle = hunlite_cli::load_handle(common.dict_path.as_deref(), &common.lang)
        .unwrap_or_else(|e| hunlite_cli::fatal(&e));
    handle.set_max_suggestions(max_suggestions);

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    if words.is_empty() {
        let stdin = io::stdin();
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
            suggest_word(word, &handle, &mut out);
        }
    } else {
        for word in &words {
            suggest_word(word, &handle, &mut out);
        }
    }
}
