// Derivation of word forms from a base word and a rule code.

use crate::affix::RuleTable;

/// Default cap on continuation-class nesting.
pub const DEFAULT_MAX_RULE_DEPTH: usize = 8;

/// Applies affix rules, following continuation classes recursively.
#[derive(Debug, Clone, Copy)]
pub struct RuleApplier<'a> {
    rules: &'a RuleTable,
    max_depth: usize,
}

impl<'a> RuleApplier<'a> {
    pub fn new(rules: &'a RuleTable) -> Self {
        Self {
            rules,
            max_depth: DEFAULT_MAX_RULE_DEPTH,
        }
    }

    /// Limit how many continuation levels are followed below the first rule.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Every word form derivable from `word` through `code`.
    ///
    /// Each entry whose condition matches contributes one form, followed by
    /// the forms its continuation classes derive from that form. Unknown
    /// codes derive nothing.
    pub fn apply(&self, word: &str, code: &str) -> Vec<String> {
        let mut forms = Vec::new();
        self.apply_into(word, code, 0, &mut forms);
        forms
    }

    fn apply_into(&self, word: &str, code: &str, depth: usize, forms: &mut Vec<String>) {
        let Some(rule) = self.rules.get(code) else {
            log::trace!("no affix rule for code {code:?}");
            return;
        };

        for entry in &rule.entries {
            let Some(derived) = entry.derive(word, rule.kind) else {
                continue;
            };

            if !entry.continuation.is_empty() {
                if depth < self.max_depth {
                    for next in &entry.continuation {
                        self.apply_into(&derived, next, depth + 1, forms);
                    }
                } else {
                    log::debug!("continuation depth limit reached at {derived:?} (code {code:?})");
                }
            }
            forms.push(derived);
        }
    }
}
