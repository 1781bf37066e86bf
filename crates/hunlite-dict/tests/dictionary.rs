//! End-to-end tests over the fixture dictionaries in tests/data.
//!
//! Run: cargo test -p hunlite-dict --test dictionary

use std::path::PathBuf;

use hunlite_dict::{LoadOptions, SpellError, SpellHandle};

// ---------------------------------------------------------------------------
// Helper: load fixtures
// ---------------------------------------------------------------------------

fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/data")
        .join(name);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

fn load(stem: &str) -> SpellHandle {
    load_with(stem, &LoadOptions::default())
}

fn load_with(stem: &str, options: &LoadOptions) -> SpellHandle {
    let aff = fixture(&format!("{stem}.aff"));
    let dic = fixture(&format!("{stem}.dic"));
    SpellHandle::from_texts(stem, &aff, &dic, options)
        .unwrap_or_else(|e| panic!("failed to load {stem}: {e}"))
}

fn check(handle: &SpellHandle, word: &str) -> bool {
    handle.check(word).unwrap()
}

// ---------------------------------------------------------------------------
// Word checking
// ---------------------------------------------------------------------------

#[test]
fn flagless_entries_are_valid() {
    let handle = load("en_test");
    for word in ["spelling", "hello", "help", "world", "phone", "station"] {
        assert!(check(&handle, word), "{word} should be valid");
    }
}

#[test]
fn unknown_words_are_invalid() {
    let handle = load("en_test");
    for word in ["speling", "wrold", "cats'", "dogss", "unhello", "xyz"] {
        assert!(!check(&handle, word), "{word} should be invalid");
    }
}

#[test]
fn suffix_rules_expand() {
    let handle = load("en_test");
    for word in ["cats", "dogs", "flies", "flied", "boxes", "baked", "baking"] {
        assert!(check(&handle, word), "{word} should be derived");
    }
    assert!(!check(&handle, "flys"));
    assert!(!check(&handle, "bakeing"));
}

#[test]
fn prefix_and_suffix_combine() {
    let handle = load("en_test");
    for word in ["unlock", "locked", "unlocked"] {
        assert!(check(&handle, word), "{word} should be derived");
    }
}

#[test]
fn needaffix_base_is_invalid_alone() {
    let handle = load("en_test");
    assert!(!check(&handle, "root"));
    assert!(check(&handle, "roots"));
}

#[test]
fn capitalization_variants() {
    let handle = load("en_test");
    assert!(check(&handle, "cat"));
    assert!(check(&handle, "CAT"));
    assert!(check(&handle, "Cat"));
    assert!(check(&handle, "UNLOCKED"));
}

#[test]
fn keepcase_words_reject_variants() {
    let handle = load("en_test");
    assert!(check(&handle, "iPod"));
    assert!(!check(&handle, "IPOD"));
    assert!(!check(&handle, "IPod"));
}

#[test]
fn compounds_follow_rules() {
    let handle = load("en_test");
    assert!(handle.check_exact("sunshine").unwrap());
    assert!(handle.check_exact("moonlight").unwrap());
    assert!(handle.check_exact("SunLight").unwrap());
    assert!(!handle.check_exact("moonshine2").unwrap());
    assert!(!handle.check_exact("shinesun").unwrap());
    assert!(!handle.check_exact("sunmoon").unwrap());
}

#[test]
fn only_in_compound_words() {
    let handle = load("en_test");
    assert!(!check(&handle, "fire"));
    assert!(handle.check_exact("fireshine").unwrap());
    assert!(handle.check_exact("firefirelight").unwrap());
}

#[test]
fn has_flag_reads_directives() {
    let handle = load("en_test");
    assert!(handle.has_flag("hell", "NOSUGGEST", None).unwrap());
    assert!(handle.has_flag("iPod", "KEEPCASE", None).unwrap());
    assert!(!handle.has_flag("hello", "KEEPCASE", None).unwrap());
    assert!(!handle.has_flag("hello", "NOT_A_DIRECTIVE", None).unwrap());
}

// ---------------------------------------------------------------------------
// Flag encodings
// ---------------------------------------------------------------------------

#[test]
fn long_flags() {
    let handle = load("long_flags");
    for word in ["work", "works", "works'x", "rework", "reworks", "plain"] {
        assert!(check(&handle, word), "{word} should be valid");
    }
    assert!(handle.check_exact("toolbox").unwrap());
    assert!(!handle.check_exact("boxtool").unwrap());
    assert!(handle.has_flag("secret", "NOSUGGEST", None).unwrap());
}

#[test]
fn numeric_flags() {
    let handle = load("num_flags");
    for word in ["view", "views", "preview", "previews", "Linux"] {
        assert!(check(&handle, word), "{word} should be valid");
    }
    assert!(!check(&handle, "LINUX"));
    assert!(!check(&handle, "linux"));
}

#[test]
fn seeded_flag_mode_overrides_file() {
    let mut options = LoadOptions::default();
    options.flags.insert("FLAG".to_string(), "num".to_string());
    let aff = "SFX 77 Y 1\nSFX 77 0 s .\n";
    let handle = SpellHandle::from_texts("seeded", aff, "1\ncat/77\n", &options).unwrap();
    assert!(check(&handle, "cats"));
}

// ---------------------------------------------------------------------------
// Suggestions
// ---------------------------------------------------------------------------

#[test]
fn suggests_missing_letter() {
    let handle = load("en_test");
    let got = handle.suggest("speling", 5).unwrap();
    assert!(got.contains(&"spelling".to_string()), "{got:?}");
    assert!(!got.contains(&"speling".to_string()));
}

#[test]
fn valid_words_get_no_suggestions() {
    let handle = load("en_test");
    assert!(handle.suggest("hello", 5).unwrap().is_empty());
}

#[test]
fn replacement_table_shortcut() {
    let handle = load("en_test");
    assert_eq!(handle.suggest("stashun", 5).unwrap(), vec!["station".to_string()]);
    assert_eq!(handle.suggest("fone", 5).unwrap(), vec!["phone".to_string()]);
}

#[test]
fn nosuggest_words_are_never_offered() {
    let handle = load("en_test");
    let got = handle.suggest("helo", 10).unwrap();
    assert!(got.contains(&"hello".to_string()));
    assert!(!got.iter().any(|w| w == "hell"));
}

#[test]
fn suggestions_are_recased() {
    let handle = load("en_test");
    assert_eq!(handle.suggest("Helo", 1).unwrap(), vec!["Hello".to_string()]);
    assert_eq!(handle.suggest("HELO", 1).unwrap(), vec!["HELLO".to_string()]);
}

#[test]
fn suggest_is_idempotent() {
    let handle = load("en_test");
    let first = handle.suggest("wrold", 3).unwrap();
    let second = handle.suggest("wrold", 3).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.first().map(String::as_str), Some("world"));
}

#[test]
fn cache_does_not_freeze_small_results() {
    let handle = load("en_test");
    let small = handle.suggest("helo", 1).unwrap();
    let large = handle.suggest("helo", 10).unwrap();
    assert_eq!(small.len(), 1);
    assert!(large.len() >= small.len());
    assert_eq!(large[..small.len()], small[..]);
}

#[test]
fn custom_alphabet_limits_candidates() {
    let options = LoadOptions {
        alphabet: "xyz".to_string(),
        ..LoadOptions::default()
    };
    let handle = load_with("en_test", &options);
    // Recovering "spelling" needs an inserted 'l', which is not in the alphabet.
    assert!(!handle.suggest("speling", 5).unwrap().contains(&"spelling".to_string()));
}

// ---------------------------------------------------------------------------
// Serialization
// ---------------------------------------------------------------------------

#[test]
fn round_trip_preserves_behaviour() {
    let handle = load("en_test");
    let json = handle.serialize().unwrap();
    let restored = SpellHandle::deserialize(&json).unwrap();

    for word in [
        "cats", "Cat", "CAT", "unlocked", "root", "roots", "iPod", "IPOD", "fire", "xyz",
    ] {
        assert_eq!(check(&restored, word), check(&handle, word), "{word}");
    }
    for word in ["sunshine", "fireshine", "shinesun"] {
        assert_eq!(
            restored.check_exact(word).unwrap(),
            handle.check_exact(word).unwrap(),
            "{word}"
        );
    }
    assert_eq!(
        restored.suggest("speling", 5).unwrap(),
        handle.suggest("speling", 5).unwrap()
    );
}

#[test]
fn not_loaded_is_distinct_from_unknown() {
    let handle = SpellHandle::new("en_test");
    assert!(matches!(handle.check("cat"), Err(SpellError::NotLoaded)));
    assert!(matches!(handle.suggest("cat", 5), Err(SpellError::NotLoaded)));
}
