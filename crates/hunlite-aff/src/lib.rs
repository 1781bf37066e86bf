//! Affix-file handling for the hunlite spell checker.
//!
//! - [`parser`] -- affix-file text to [`AffixData`]
//! - [`affix`] -- prefix/suffix rule model
//! - [`apply`] -- derivation of word forms through rules and continuation classes
//! - [`directives`] -- scalar directives such as `KEEPCASE` and `COMPOUNDMIN`
//! - [`replacement`] -- the `REP` table
//! - [`pattern`] -- serializable compiled regular expressions

pub mod affix;
pub mod apply;
pub mod directives;
pub mod parser;
pub mod pattern;
pub mod replacement;

pub use affix::{AffixEntry, AffixRule, RuleKind, RuleTable};
pub use apply::{DEFAULT_MAX_RULE_DEPTH, RuleApplier};
pub use directives::Directives;
pub use parser::{AffixData, parse_affix};
pub use pattern::Pattern;
pub use replacement::ReplacementTable;

use hunlite_core::flag::UnknownFlagMode;

/// Error type for affix-file parsing.
#[derive(Debug, thiserror::Error)]
pub enum AffError {
    #[error("line {line}: {directive} block count {value:?} is not a number")]
    InvalidCount {
        line: usize,
        directive: String,
        value: String,
    },
    #[error(transparent)]
    FlagMode(#[from] UnknownFlagMode),
}
