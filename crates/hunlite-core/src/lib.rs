//! Shared leaf types for the hunlite spell checker.
//!
//! - [`case`] -- case classification and case-variant construction
//! - [`flag`] -- rule-code decoding for the `FLAG` encodings

pub mod case;
pub mod flag;

pub use case::CaseType;
pub use flag::{Flag, FlagMode, FlagSet, RuleToken, UnknownFlagMode};
