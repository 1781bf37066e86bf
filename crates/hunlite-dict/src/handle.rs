// SpellHandle: top-level integration point for spell checking.
//
// Owns the built dictionary and the suggestion cache and exposes checking,
// suggestion and serialization through one interface.
//
// Design notes:
// - A handle created with `new` holds no dictionary until `load` succeeds;
//   every lookup on it fails with `SpellError::NotLoaded`.
// - The suggester borrows the dictionary and is created on the fly in each
//   `suggest` call.
// - The suggestion cache is shared through `&self` and is not serialized.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use hunlite_aff::{AffError, DEFAULT_MAX_RULE_DEPTH, Directives, parse_affix};
use hunlite_core::flag::FlagSet;

use crate::dictionary::{DEFAULT_ALPHABET, Dictionary, DictionaryBuilder};
use crate::speller::Speller;
use crate::suggestion::{DEFAULT_SUGGESTION_LIMIT, Suggester, SuggestionCache};

/// Version written by [`SpellHandle::serialize`].
pub const FORMAT_VERSION: u32 = 1;

/// Error type for SpellHandle operations.
#[derive(Debug, thiserror::Error)]
pub enum SpellError {
    /// A lookup was made before a dictionary was loaded.
    #[error("dictionary not loaded")]
    NotLoaded,

    /// The affix file could not be parsed.
    #[error("invalid affix file: {0}")]
    Affix(#[from] AffError),

    /// Serialized state could not be written or read.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Serialized state was written by an incompatible version.
    #[error("unsupported serialized format version {0}")]
    UnsupportedVersion(u32),
}

/// Options applied while building a dictionary.
#[derive(Debug, Clone)]
pub struct LoadOptions {
    /// Directive values that take precedence over the affix file.
    pub flags: HashMap<String, String>,
    /// Alphabet for edit-distance suggestions.
    pub alphabet: String,
    /// Continuation-class recursion cap.
    pub max_rule_depth: usize,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            flags: HashMap::new(),
            alphabet: DEFAULT_ALPHABET.to_string(),
            max_rule_depth: DEFAULT_MAX_RULE_DEPTH,
        }
    }
}

#[derive(Serialize)]
struct SerializedRef<'a> {
    version: u32,
    language: &'a str,
    dictionary: &'a Dictionary,
}

#[derive(Deserialize)]
struct Serialized {
    version: u32,
    language: String,
    dictionary: Option<Dictionary>,
}

/// Top-level handle owning one language's dictionary.
pub struct SpellHandle {
    language: String,
    dictionary: Option<Dictionary>,
    cache: SuggestionCache,
    max_suggestions: usize,
}

impl SpellHandle {
    /// An empty handle; lookups fail until [`load`](Self::load) succeeds.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            dictionary: None,
            cache: SuggestionCache::new(),
            max_suggestions: DEFAULT_SUGGESTION_LIMIT,
        }
    }

    /// Build a handle from affix and word-list text.
    pub fn from_texts(
        language: impl Into<String>,
        aff_text: &str,
        dic_text: &str,
        options: &LoadOptions,
    ) -> Result<Self, SpellError> {
        let mut handle = Self::new(language);
        handle.load_with(aff_text, dic_text, options)?;
        Ok(handle)
    }

    /// Load a dictionary with default options.
    pub fn load(&mut self, aff_text: &str, dic_text: &str) -> Result<(), SpellError> {
        self.load_with(aff_text, dic_text, &LoadOptions::default())
    }

    /// Load a dictionary, replacing any previous one.
    pub fn load_with(
        &mut self,
        aff_text: &str,
        dic_text: &str,
        options: &LoadOptions,
    ) -> Result<(), SpellError> {
        let seed = Directives::from_seed(&options.flags);
        let affix = parse_affix(aff_text, &seed)?;
        let dictionary = DictionaryBuilder::new(affix)
            .alphabet(options.alphabet.as_str())
            .max_rule_depth(options.max_rule_depth)
            .build(dic_text);
        log::debug!(
            "{}: loaded {} word forms",
            self.language,
            dictionary.words().len()
        );
        self.dictionary = Some(dictionary);
        self.cache.clear();
        Ok(())
    }

    fn dictionary(&self) -> Result<&Dictionary, SpellError> {
        self.dictionary.as_ref().ok_or(SpellError::NotLoaded)
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn is_loaded(&self) -> bool {
        self.dictionary.is_some()
    }

    /// Number of distinct word forms, or 0 before loading.
    pub fn word_count(&self) -> usize {
        self.dictionary.as_ref().map_or(0, |d| d.words().len())
    }

    /// Is `word` valid, allowing case variants.
    pub fn check(&self, word: &str) -> Result<bool, SpellError> {
        Ok(self.dictionary()?.check(word))
    }

    /// Is `word` valid exactly as written.
    pub fn check_exact(&self, word: &str) -> Result<bool, SpellError> {
        Ok(self.dictionary()?.check_exact(word))
    }

    /// Does `word` carry the code configured for directive `flag_name`.
    pub fn has_flag(
        &self,
        word: &str,
        flag_name: &str,
        explicit: Option<&[FlagSet]>,
    ) -> Result<bool, SpellError> {
        Ok(self.dictionary()?.has_flag(word, flag_name, explicit))
    }

    /// Up to `limit` corrections for `word`, best first.
    pub fn suggest(&self, word: &str, limit: usize) -> Result<Vec<String>, SpellError> {
        let dictionary = self.dictionary()?;
        Ok(Suggester::new(dictionary).suggest(word, limit, &self.cache))
    }

    /// Suggestions limited by [`set_max_suggestions`](Self::set_max_suggestions).
    pub fn suggest_default(&self, word: &str) -> Result<Vec<String>, SpellError> {
        self.suggest(word, self.max_suggestions)
    }

    pub fn set_max_suggestions(&mut self, value: usize) {
        self.max_suggestions = value;
    }

    pub fn max_suggestions(&self) -> usize {
        self.max_suggestions
    }

    /// Suggestion cache statistics: (entries, hits, misses).
    pub fn cache_stats(&self) -> (usize, u64, u64) {
        (self.cache.len(), self.cache.hits(), self.cache.misses())
    }

    /// Export the built dictionary as JSON.
    pub fn serialize(&self) -> Result<String, SpellError> {
        let doc = SerializedRef {
            version: FORMAT_VERSION,
            language: &self.language,
            dictionary: self.dictionary()?,
        };
        Ok(serde_json::to_string(&doc)?)
    }

    /// Rebuild a loaded handle from [`serialize`](Self::serialize) output.
    pub fn deserialize(data: &str) -> Result<Self, SpellError> {
        let doc: Serialized = serde_json::from_str(data)?;
        if doc.version != FORMAT_VERSION {
            return Err(SpellError::UnsupportedVersion(doc.version));
        }
        let dictionary = doc.dictionary.ok_or(SpellError::NotLoaded)?;
        Ok(Self {
            language: doc.language,
            dictionary: Some(dictionary),
            cache: SuggestionCache::new(),
            max_suggestions: DEFAULT_SUGGESTION_LIMIT,
        })
    }
}
