// REP table: common misspelling substrings and their corrections.

use serde::{Deserialize, Serialize};

/// Ordered list of (pattern, replacement) pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReplacementTable {
    pairs: Vec<(String, String)>,
}

impl ReplacementTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, pattern: impl Into<String>, replacement: impl Into<String>) {
        self.pairs.push((pattern.into(), replacement.into()));
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// Candidate corrections for `word`, in table order.
    ///
    /// Each pair whose pattern occurs in `word` yields the word with the
    /// first occurrence substituted.
    pub fn candidates<'a>(&'a self, word: &'a str) -> impl Iterator<Item = String> + 'a {
        self.pairs
            .iter()
            .filter(move |(pattern, _)| !pattern.is_empty() && word.contains(pattern.as_str()))
            .map(move |(pattern, replacement)| word.replacen(pattern.as_str(), replacement, 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_substitute_first_occurrence() {
        let mut table = ReplacementTable::new();
        table.push("f", "ph");
        let got: Vec<String> = table.candidates("fotograf").collect();
        assert_eq!(got, vec!["photograf".to_string()]);
    }

    #[test]
    fn candidates_keep_table_order_and_skip_misses() {
        let mut table = ReplacementTable::new();
        table.push("shun", "tion");
        table.push("xx", "x");
        table.push("a", "ei");
        let got: Vec<String> = table.candidates("stashun").collect();
        assert_eq!(got, vec!["station".to_string(), "steishun".to_string()]);
    }

    #[test]
    fn empty_table_yields_nothing() {
        let table = ReplacementTable::new();
        assert!(table.is_empty());
        assert_eq!(table.candidates("word").count(), 0);
    }
}
