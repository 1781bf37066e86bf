// Compiled regular expressions built from dictionary data.
//
// A `Pattern` keeps its source text next to the compiled regex so that it
// can be serialized as a plain string and recompiled on load.

use std::fmt;

use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

/// Upper bound on the compiled size of a single pattern.
///
/// Compound rules expand into alternations over every word carrying a flag,
/// which can be far larger than the regex crate's 10 MB default.
pub const PATTERN_SIZE_LIMIT: usize = 256 * (1 << 20);

/// A regular expression together with the source it was compiled from.
#[derive(Clone, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile `source` as-is.
    pub fn new(source: impl Into<String>) -> Result<Self, regex::Error> {
        let source = source.into();
        let regex = RegexBuilder::new(&source)
            .size_limit(PATTERN_SIZE_LIMIT)
            .build()?;
        Ok(Self { source, regex })
    }

    /// Condition of a suffix entry: must match at the end of the word.
    pub fn suffix_condition(condition: &str) -> Result<Self, regex::Error> {
        Self::new(format!("(?:{condition})$"))
    }

    /// Condition of a prefix entry: must match at the start of the word.
    pub fn prefix_condition(condition: &str) -> Result<Self, regex::Error> {
        Self::new(format!("^(?:{condition})"))
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl TryFrom<String> for Pattern {
    type Error = regex::Error;

    fn try_from(source: String) -> Result<Self, Self::Error> {
        Self::new(source)
    }
}

impl From<Pattern> for String {
    fn from(pattern: Pattern) -> Self {
        pattern.source
    }
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for Pattern {}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}
