// Suggestion generation module
//
// Produces ranked corrections for a misspelled word:
//   - `generators`: single-edit candidate generators (EditGenerator trait)
//   - `status`: per-call validity memo and candidate weighting
//   - `cache`: per-word memo shared across calls

pub mod cache;
pub mod generators;
pub mod status;

pub use cache::SuggestionCache;
pub use generators::{EditGenerator, default_generators, edits1};
pub use status::SuggestionStatus;

use hunlite_aff::directives::NOSUGGEST;
use hunlite_core::case::{CaseType, apply_case, detect_case};

use crate::dictionary::Dictionary;
use crate::speller::Speller;

/// Default number of suggestions returned.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 5;

/// Edit-distance suggestion strategy over one dictionary.
pub struct Suggester<'a> {
    dictionary: &'a Dictionary,
    generators: Vec<Box<dyn EditGenerator + Send + Sync>>,
}

impl<'a> Suggester<'a> {
    /// Suggester using the dictionary's alphabet.
    pub fn new(dictionary: &'a Dictionary) -> Self {
        let alphabet: Vec<char> = dictionary.alphabet().chars().collect();
        Self {
            dictionary,
            generators: default_generators(&alphabet),
        }
    }

    /// Up to `limit` corrections for `word`, best first.
    ///
    /// Results are memoized in `cache` under `word` as given. A valid word
    /// has no suggestions. When a `REP` substitution yields a valid word it
    /// is returned alone and not memoized.
    pub fn suggest(&self, word: &str, limit: usize, cache: &SuggestionCache) -> Vec<String> {
        if limit == 0 {
            return Vec::new();
        }
        if let Some(cached) = cache.get(word, limit) {
            return cached;
        }
        if self.dictionary.check(word) {
            return Vec::new();
        }

        for candidate in self.dictionary.replacements().candidates(word) {
            if self.dictionary.check(&candidate) {
                log::trace!("{word}: REP correction {candidate:?}");
                return vec![candidate];
            }
        }

        let ranked = self.rank(word);
        let case_type = detect_case(word);
        let mut suggestions: Vec<String> = Vec::with_capacity(limit);
        for (candidate, _) in ranked {
            if suggestions.len() == limit {
                break;
            }
            let recased = apply_case(&candidate, case_type);
            if self.dictionary.has_flag(&candidate, NOSUGGEST, None)
                || self.dictionary.has_flag(&recased, NOSUGGEST, None)
                || suggestions.contains(&recased)
            {
                continue;
            }
            suggestions.push(recased);
        }

        cache.insert(word, suggestions.clone(), limit);
        suggestions
    }

    /// Every valid word within two edits of `word`, weighted by the number
    /// of edit paths reaching it.
    ///
    /// Capitalized and uppercase words are edited in lowercase, so the
    /// returned candidates still need recasing.
    pub fn rank(&self, word: &str) -> Vec<(String, usize)> {
        let case_type = detect_case(word);
        let chars: Vec<char> = match case_type {
            CaseType::AllUpper | CaseType::FirstUpper => word.to_lowercase().chars().collect(),
            CaseType::NoLetters | CaseType::AllLower | CaseType::Complex => word.chars().collect(),
        };
        let mut status = SuggestionStatus::new(self.dictionary, case_type);

        let first = edits1(&self.generators, &chars);
        for candidate in &first {
            status.add_candidate(candidate);
        }

        let mut second = Vec::new();
        for candidate in &first {
            let candidate: Vec<char> = candidate.chars().collect();
            second.clear();
            for generator in &self.generators {
                generator.generate(&candidate, &mut second);
            }
            for c in &second {
                status.add_candidate(c);
            }
        }

        log::debug!(
            "{word}: {} edit-1 candidates, {} lookups, {} valid",
            first.len(),
            status.lookups(),
            status.candidate_count()
        );
        status.into_ranked()
    }
}
