// Spell checking module

pub mod checker;

use hunlite_core::flag::FlagSet;

/// Trait for spell checkers.
///
/// `check_exact` answers for the word exactly as given. `check` also
/// accepts case variants of known words.
pub trait Speller {
    /// Is `word` valid as written, either as a table entry or a compound.
    fn check_exact(&self, word: &str) -> bool;

    /// Is `word` valid, trimming whitespace and trying case variants.
    fn check(&self, word: &str) -> bool;

    /// Does `word` carry the code configured for directive `flag_name`.
    ///
    /// `explicit` replaces the table lookup with the given rule-code sets.
    fn has_flag(&self, word: &str, flag_name: &str, explicit: Option<&[FlagSet]>) -> bool;
}
