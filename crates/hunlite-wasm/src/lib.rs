// WASM bindings for hunlite.
//
// Provides a `WasmSpeller` class exported via wasm-bindgen that wraps
// the `SpellHandle` from hunlite-dict. Load options and cache statistics
// cross the boundary as plain JavaScript objects via serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const speller = new WasmSpeller("en_US", affText, dicText);
//   speller.check("hello");          // => true
//   speller.suggest("helo", 3);      // => ["hello", "help", ...]
//   speller.hasFlag("hell", "NOSUGGEST");  // => true
//   const packed = speller.serialize();
//   const again = WasmSpeller.deserialize(packed);
//
//   // Options: directive overrides, suggestion alphabet, rule depth.
//   new WasmSpeller("de", aff, dic, { flags: { FLAG: "long" }, alphabet: "abc" });

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use hunlite_dict::{LoadOptions, SpellError, SpellHandle};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Load options as passed from JavaScript. Missing fields keep defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsLoadOptions {
    #[serde(default)]
    flags: HashMap<String, String>,
    alphabet: Option<String>,
    max_rule_depth: Option<usize>,
}

impl From<JsLoadOptions> for LoadOptions {
    fn from(js: JsLoadOptions) -> Self {
        let defaults = LoadOptions::default();
        LoadOptions {
            flags: js.flags.into_iter().collect(),
            alphabet: js.alphabet.unwrap_or(defaults.alphabet),
            max_rule_depth: js.max_rule_depth.unwrap_or(defaults.max_rule_depth),
        }
    }
}

/// Serializable suggestion cache statistics.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsCacheStats {
    entries: usize,
    hits: u64,
    misses: u64,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn spell_error_to_js(e: SpellError) -> JsError {
    JsError::new(&e.to_string())
}

fn load_options(options: Option<JsValue>) -> Result<LoadOptions, JsError> {
    match options {
        Some(value) if !value.is_undefined() && !value.is_null() => {
            let js: JsLoadOptions = serde_wasm_bindgen::from_value(value)
                .map_err(|e| JsError::new(&e.to_string()))?;
            Ok(js.into())
        }
        _ => Ok(LoadOptions::default()),
    }
}

// ============================================================================
// WasmSpeller
// ============================================================================

/// Hunspell-style spell checker for WebAssembly.
#[wasm_bindgen]
pub struct WasmSpeller {
    handle: SpellHandle,
}

#[wasm_bindgen]
impl WasmSpeller {
    /// Build a speller from affix and word-list text.
    ///
    /// - `options`: optional `{ flags, alphabet, maxRuleDepth }` object
    #[wasm_bindgen(constructor)]
    pub fn new(
        language: &str,
        aff_text: &str,
        dic_text: &str,
        options: Option<JsValue>,
    ) -> Result<WasmSpeller, JsError> {
        let options = load_options(options)?;
        let handle = SpellHandle::from_texts(language, aff_text, dic_text, &options)
            .map_err(spell_error_to_js)?;
        Ok(WasmSpeller { handle })
    }

    /// Rebuild a speller from the output of `serialize`.
    pub fn deserialize(data: &str) -> Result<WasmSpeller, JsError> {
        let handle = SpellHandle::deserialize(data).map_err(spell_error_to_js)?;
        Ok(WasmSpeller { handle })
    }

    /// Export the built dictionary as a JSON string.
    pub fn serialize(&self) -> Result<String, JsError> {
        self.handle.serialize().map_err(spell_error_to_js)
    }

    pub fn language(&self) -> String {
        self.handle.language().to_string()
    }

    /// Check whether a word is correctly spelled, allowing case variants.
    pub fn check(&self, word: &str) -> Result<bool, JsError> {
        self.handle.check(word).map_err(spell_error_to_js)
    }

    /// Check whether a word is valid exactly as written.
    #[wasm_bindgen(js_name = "checkExact")]
    pub fn check_exact(&self, word: &str) -> Result<bool, JsError> {
        self.handle.check_exact(word).map_err(spell_error_to_js)
    }

    /// Whether `word` carries the code configured for directive `flagName`.
    #[wasm_bindgen(js_name = "hasFlag")]
    pub fn has_flag(&self, word: &str, flag_name: &str) -> Result<bool, JsError> {
        self.handle
            .has_flag(word, flag_name, None)
            .map_err(spell_error_to_js)
    }

    /// Generate spelling suggestions, best first.
    ///
    /// Without `limit`, the value from `setMaxSuggestions` is used.
    pub fn suggest(&self, word: &str, limit: Option<usize>) -> Result<Vec<String>, JsError> {
        match limit {
            Some(limit) => self.handle.suggest(word, limit),
            None => self.handle.suggest_default(word),
        }
        .map_err(spell_error_to_js)
    }

    /// Number of distinct word forms in the dictionary.
    #[wasm_bindgen(js_name = "wordCount")]
    pub fn word_count(&self) -> usize {
        self.handle.word_count()
    }

    /// Suggestion cache statistics as `{ entries, hits, misses }`.
    #[wasm_bindgen(js_name = "cacheStats")]
    pub fn cache_stats(&self) -> Result<JsValue, JsError> {
        let (entries, hits, misses) = self.handle.cache_stats();
        serde_wasm_bindgen::to_value(&JsCacheStats {
            entries,
            hits,
            misses,
        })
        .map_err(|e| JsError::new(&e.to_string()))
    }

    /// Set the maximum number of suggestions to return.
    #[wasm_bindgen(js_name = "setMaxSuggestions")]
    pub fn set_max_suggestions(&mut self, value: usize) {
        self.handle.set_max_suggestions(value);
    }

    /// Release resources held by this instance.
    pub fn terminate(self) {}
}
