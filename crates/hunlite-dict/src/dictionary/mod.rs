// Dictionary: the expanded word table plus everything needed to answer
// lookups once loading is done.

pub mod builder;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use hunlite_aff::{Directives, ReplacementTable, RuleTable};
use hunlite_core::flag::{FlagMode, FlagSet};

use crate::compound::CompoundMatcher;

pub use builder::DictionaryBuilder;

/// Default alphabet for edit-distance suggestions.
pub const DEFAULT_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// Word form to the rule-code sets it was declared with.
///
/// An empty list means the word is known and carries no codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DictionaryTable {
    words: HashMap<String, Vec<FlagSet>>,
}

impl DictionaryTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `word`, accumulating `codes` as one more rule-code set.
    ///
    /// Empty `codes` only make sure the word is present; a word that
    /// already carries sets keeps them.
    pub fn add_word(&mut self, word: &str, codes: FlagSet) {
        let sets = self.words.entry_ref(word).or_default();
        if !codes.is_empty() {
            sets.push(codes);
        }
    }

    /// Rule-code sets recorded for `word`, or `None` if unknown.
    pub fn get(&self, word: &str) -> Option<&[FlagSet]> {
        self.words.get(word).map(Vec::as_slice)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains_key(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.keys().map(String::as_str)
    }
}

/// A fully built dictionary.
///
/// Immutable once built; lookups only need a shared reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dictionary {
    pub(crate) rules: RuleTable,
    pub(crate) directives: Directives,
    pub(crate) flag_mode: FlagMode,
    pub(crate) words: DictionaryTable,
    pub(crate) compound: CompoundMatcher,
    pub(crate) replacements: ReplacementTable,
    pub(crate) alphabet: String,
}

impl Dictionary {
    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn directives(&self) -> &Directives {
        &self.directives
    }

    pub fn flag_mode(&self) -> FlagMode {
        self.flag_mode
    }

    pub fn words(&self) -> &DictionaryTable {
        &self.words
    }

    pub fn compound(&self) -> &CompoundMatcher {
        &self.compound
    }

    pub fn replacements(&self) -> &ReplacementTable {
        &self.replacements
    }

    pub fn alphabet(&self) -> &str {
        &self.alphabet
    }

    /// Decoded code of a flag directive such as `KEEPCASE`.
    pub(crate) fn directive_code(&self, name: &str) -> Option<String> {
        self.directives.code(name, self.flag_mode)
    }
}
