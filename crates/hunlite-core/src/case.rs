// Case type detection and case-variant construction for dictionary lookups
// and suggestion recasing.

/// Classification of character casing within a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseType {
    /// No letters found in the word (only digits, punctuation, etc.).
    NoLetters,
    /// All letters are lowercase: "cat".
    AllLower,
    /// First letter is uppercase, rest are lowercase: "Cat".
    FirstUpper,
    /// Mixed case that does not fit other patterns: "cAt", "McDonald".
    Complex,
    /// All letters are uppercase: "CAT".
    AllUpper,
}

/// Detect the case pattern of a word.
///
/// Non-letter characters (digits, punctuation, apostrophes) are ignored when
/// determining the pattern, so "DON'T" is `AllUpper` and "o'clock" is
/// `AllLower`.
pub fn detect_case(word: &str) -> CaseType {
    let mut chars = word.chars();
    let Some(first) = chars.next() else {
        return CaseType::NoLetters;
    };

    let first_uc = first.is_uppercase();
    let mut rest_lc = true;
    let mut all_uc = !first.is_lowercase();
    let mut no_letters = !(first.is_uppercase() || first.is_lowercase());

    for c in chars {
        if c.is_uppercase() {
            no_letters = false;
            rest_lc = false;
        }
        if c.is_lowercase() {
            all_uc = false;
            no_letters = false;
        }
    }

    if no_letters {
        return CaseType::NoLetters;
    }
    if all_uc {
        return CaseType::AllUpper;
    }
    if !rest_lc {
        return CaseType::Complex;
    }
    if first_uc {
        CaseType::FirstUpper
    } else {
        CaseType::AllLower
    }
}

/// Returns `true` if the first character of `word` is an uppercase letter.
pub fn starts_upper(word: &str) -> bool {
    word.chars().next().is_some_and(char::is_uppercase)
}

/// "cAT" -> "Cat": first character uppercased, the rest lowercased.
pub fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

/// "cAT" -> "CAT": first character uppercased, the rest left untouched.
pub fn upper_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// "CaT" -> "caT": first character lowercased, the rest left untouched.
pub fn lower_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Recase a lowercase candidate so that it follows the casing scheme of
/// `case_type`.
///
/// - `AllUpper` -- every letter is uppercased.
/// - `FirstUpper` -- first character is uppercased, rest kept as is.
/// - everything else -- returned unchanged.
pub fn apply_case(word: &str, case_type: CaseType) -> String {
    match case_type {
        CaseType::AllUpper => word.to_uppercase(),
        CaseType::FirstUpper => upper_first(word),
        CaseType::NoLetters | CaseType::AllLower | CaseType::Complex => word.to_string(),
    }
}
