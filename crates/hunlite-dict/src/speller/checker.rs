// Word checking against a built dictionary: exact lookups, compound
// fallback and case variants.

use hunlite_aff::directives::{KEEPCASE, ONLYINCOMPOUND};
use hunlite_core::case::{CaseType, capitalize, detect_case, lower_first, starts_upper};
use hunlite_core::flag::FlagSet;

use super::Speller;
use crate::dictionary::Dictionary;

impl Dictionary {
    /// Whether a word that is absent from the table forms a compound.
    fn check_compound(&self, word: &str) -> bool {
        match self.directives.compound_min() {
            Some(min) => word.chars().count() >= min && self.compound.is_match(word),
            None => false,
        }
    }

    /// Outcome of trying one case variant, or `None` to keep looking.
    ///
    /// A variant flagged `KEEPCASE` rejects the whole word.
    fn check_variant(&self, variant: &str) -> Option<bool> {
        if self.has_flag(variant, KEEPCASE, None) {
            return Some(false);
        }
        self.check_exact(variant).then_some(true)
    }
}

impl Speller for Dictionary {
    fn check_exact(&self, word: &str) -> bool {
        let Some(sets) = self.words.get(word) else {
            return self.check_compound(word);
        };
        if sets.is_empty() {
            return true;
        }
        match self.directive_code(ONLYINCOMPOUND) {
            Some(code) => sets.iter().any(|set| !set.contains(&code)),
            None => true,
        }
    }

    fn check(&self, word: &str) -> bool {
        let word = word.trim();
        if word.is_empty() {
            return false;
        }
        if self.check_exact(word) {
            return true;
        }

        match detect_case(word) {
            CaseType::AllUpper => {
                for variant in [capitalize(word), word.to_lowercase()] {
                    if variant == word {
                        continue;
                    }
                    if let Some(valid) = self.check_variant(&variant) {
                        return valid;
                    }
                }
                false
            }
            CaseType::FirstUpper | CaseType::Complex if starts_upper(word) => {
                self.check_variant(&lower_first(word)).unwrap_or(false)
            }
            _ => false,
        }
    }

    fn has_flag(&self, word: &str, flag_name: &str, explicit: Option<&[FlagSet]>) -> bool {
        let Some(code) = self.directive_code(flag_name) else {
            return false;
        };
        let sets = match explicit {
            Some(sets) => sets,
            None => match self.words.get(word) {
                Some(sets) => sets,
                None => return false,
            },
        };
        sets.iter().flatten().any(|c| *c == code)
    }
}
