// Compound-rule matching.
//
// Each COMPOUNDRULE flag sequence is compiled once, after the word list has
// been read, into a case-insensitive anchored regex in which every flag code
// is replaced by an alternation of the words carrying that flag.

use hashbrown::{HashMap, HashSet};
use serde::{Deserialize, Serialize};

use hunlite_aff::Pattern;
use hunlite_core::flag::{Flag, FlagMode, RuleToken};

/// Base words recorded per compound flag.
pub type CompoundRuleCodes = HashMap<Flag, Vec<String>>;

/// Characters of a compound rule that are kept as regex syntax.
const RULE_METACHARACTERS: &[char] = &['*', '?', '+', '(', ')', '[', ']', '{', '}', '|', '.'];

/// Stand-in for a code that carries no words.
const NEVER_MATCHES: &str = "[^\\s\\S]";

/// Every code referenced by `rules`, for seeding [`CompoundRuleCodes`].
pub fn referenced_codes(rules: &[String], mode: FlagMode) -> Vec<Flag> {
    rules
        .iter()
        .flat_map(|rule| mode.rule_tokens(rule))
        .filter_map(|token| match token {
            RuleToken::Code(code) => Some(code),
            RuleToken::Literal(_) => None,
        })
        .collect()
}

/// Compiled compound rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompoundMatcher {
    patterns: Vec<Pattern>,
}

impl CompoundMatcher {
    /// Compile every rule against the recorded word lists.
    ///
    /// A code without words compiles to an atom that never matches, so a
    /// rule that requires it can never match while an optional or starred
    /// use of it is skipped. Rules that fail to compile are dropped.
    pub fn compile(rules: &[String], codes: &CompoundRuleCodes, mode: FlagMode) -> Self {
        let mut patterns = Vec::with_capacity(rules.len());
        for rule in rules {
            match Pattern::new(rule_source(rule, codes, mode)) {
                Ok(pattern) => patterns.push(pattern),
                Err(e) => log::warn!("dropping compound rule {rule:?}: {e}"),
            }
        }
        log::debug!("compiled {} of {} compound rules", patterns.len(), rules.len());
        Self { patterns }
    }

    /// Does `word` match any compound rule.
    pub fn is_match(&self, word: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(word))
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }
}

fn rule_source(rule: &str, codes: &CompoundRuleCodes, mode: FlagMode) -> String {
    let mut body = String::new();
    for token in mode.rule_tokens(rule) {
        match token {
            RuleToken::Code(code) => match codes.get(&code) {
                Some(words) if !words.is_empty() => push_alternation(&mut body, words),
                _ => {
                    let mut chars = code.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) if RULE_METACHARACTERS.contains(&c) => body.push(c),
                        _ => {
                            log::trace!("compound rule {rule:?}: code {code:?} has no words");
                            body.push_str(NEVER_MATCHES);
                        }
                    }
                }
            },
            RuleToken::Literal(c) if RULE_METACHARACTERS.contains(&c) => body.push(c),
            RuleToken::Literal(c) => body.push_str(&regex::escape(c.encode_utf8(&mut [0; 4]))),
        }
    }
    format!("(?i)^(?:{body})$")
}

fn push_alternation(body: &mut String, words: &[String]) {
    let mut seen = HashSet::new();
    body.push_str("(?:");
    let mut first = true;
    for word in words {
        if !seen.insert(word.as_str()) {
            continue;
        }
        if !first {
            body.push('|');
        }
        body.push_str(&regex::escape(word));
        first = false;
    }
    body.push(')');
}
