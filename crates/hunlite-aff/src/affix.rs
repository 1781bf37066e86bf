// Affix rule data model: rule kinds, conditional entries, rule tables.

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use hunlite_core::flag::{Flag, FlagSet};

use crate::pattern::Pattern;

/// Rule table keyed by rule code.
pub type RuleTable = HashMap<Flag, AffixRule>;

/// Whether a rule prepends (`PFX`) or appends (`SFX`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RuleKind {
    Prefix,
    Suffix,
}

impl RuleKind {
    /// Map an affix-file directive to a rule kind.
    pub fn from_directive(directive: &str) -> Option<Self> {
        match directive {
            "PFX" => Some(RuleKind::Prefix),
            "SFX" => Some(RuleKind::Suffix),
            _ => None,
        }
    }
}

/// One conditional transformation inside an affix rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffixEntry {
    /// Text to insert; may be empty.
    pub add: String,
    /// Literal text to strip before adding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strip: Option<String>,
    /// Condition the base word must satisfy; `None` means unconstrained.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Pattern>,
    /// Further rule codes applied to the derived word.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub continuation: FlagSet,
}

impl AffixEntry {
    /// Derive a word form from `word`, or `None` if the condition fails.
    ///
    /// A suffix strip is removed from the end of the word when present;
    /// a prefix strip is removed at its first occurrence.
    pub fn derive(&self, word: &str, kind: RuleKind) -> Option<String> {
        if let Some(condition) = &self.condition {
            if !condition.is_match(word) {
                return None;
            }
        }

        let mut derived = match (&self.strip, kind) {
            (Some(strip), RuleKind::Suffix) => {
                word.strip_suffix(strip.as_str()).unwrap_or(word).to_string()
            }
            (Some(strip), RuleKind::Prefix) => word.replacen(strip.as_str(), "", 1),
            (None, _) => word.to_string(),
        };

        match kind {
            RuleKind::Suffix => derived.push_str(&self.add),
            RuleKind::Prefix => derived.insert_str(0, &self.add),
        }
        Some(derived)
    }
}

/// A prefix or suffix rule: every matching entry yields one derived form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffixRule {
    pub kind: RuleKind,
    /// May a prefix and a suffix be applied to the same base together.
    pub combineable: bool,
    pub entries: Vec<AffixEntry>,
}
