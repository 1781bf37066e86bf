// Flag codec: decoding of rule-code strings under the four FLAG encodings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A single decoded rule code ("S", "Aa", "1023", ...).
pub type Flag = String;

/// An ordered list of rule codes attached to one dictionary entry or affix.
pub type FlagSet = Vec<Flag>;

/// Name of the affix-file directive that selects the encoding.
pub const FLAG_DIRECTIVE: &str = "FLAG";

/// Rule-code encoding selected by the `FLAG` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FlagMode {
    /// No `FLAG` directive: one character per code.
    #[default]
    Single,
    /// `FLAG long`: two characters per code.
    Long,
    /// `FLAG num`: comma-separated decimal codes.
    Numeric,
    /// `FLAG UTF-8`: one Unicode code point per code.
    Utf8,
}

/// Error returned for a `FLAG` value that names no known encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown FLAG encoding: {0:?}")]
pub struct UnknownFlagMode(pub String);

impl FromStr for FlagMode {
    type Err = UnknownFlagMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "long" => Ok(FlagMode::Long),
            "num" => Ok(FlagMode::Numeric),
            "UTF-8" => Ok(FlagMode::Utf8),
            other => Err(UnknownFlagMode(other.to_string())),
        }
    }
}

impl fmt::Display for FlagMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlagMode::Single => "single",
            FlagMode::Long => "long",
            FlagMode::Numeric => "num",
            FlagMode::Utf8 => "UTF-8",
        };
        f.write_str(name)
    }
}

/// One element of a compound-rule flag sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleToken {
    /// A rule code that may name a flag.
    Code(Flag),
    /// A character outside any code, normally regex syntax such as `*` or `?`.
    Literal(char),
}

impl FlagMode {
    /// Resolve the mode from the value of a `FLAG` directive, if any.
    pub fn from_directive(value: Option<&str>) -> Result<Self, UnknownFlagMode> {
        match value {
            None => Ok(FlagMode::Single),
            Some(v) => v.parse(),
        }
    }

    /// Decode a rule-code string into its individual codes.
    ///
    /// An empty string decodes to no codes. In `Long` mode a trailing odd
    /// character forms a one-character code. In `Numeric` mode empty
    /// comma-separated fields are dropped.
    pub fn decode(self, codes: &str) -> FlagSet {
        if codes.is_empty() {
            return Vec::new();
        }
        match self {
            FlagMode::Single | FlagMode::Utf8 => codes.chars().map(String::from).collect(),
            FlagMode::Long => {
                let chars: Vec<char> = codes.chars().collect();
                chars.chunks(2).map(|pair| pair.iter().collect()).collect()
            }
            FlagMode::Numeric => codes
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(String::from)
                .collect(),
        }
    }

    /// Split a compound-rule flag sequence into codes and literal syntax.
    ///
    /// Single-character modes treat every character as a code, since any
    /// character may be a flag. `Long` and `Numeric` rules write codes in
    /// parentheses: `(aa)(bb)*`, `(101)(102)?`.
    pub fn rule_tokens(self, rule: &str) -> Vec<RuleToken> {
        match self {
            FlagMode::Single | FlagMode::Utf8 => {
                rule.chars().map(|c| RuleToken::Code(c.to_string())).collect()
            }
            FlagMode::Long | FlagMode::Numeric => {
                let mut tokens = Vec::new();
                let mut chars = rule.chars();
                while let Some(c) = chars.next() {
                    if c != '(' {
                        tokens.push(RuleToken::Literal(c));
                        continue;
                    }
                    let rest = chars.as_str();
                    match rest.find(')') {
                        Some(end) => {
                            tokens.push(RuleToken::Code(rest[..end].to_string()));
                            chars = rest[end + 1..].chars();
                        }
                        None => tokens.push(RuleToken::Literal(c)),
                    }
                }
                tokens
            }
        }
    }
}
