// Dictionary builder: reads the word list, expands every entry through the
// affix rules and compiles the compound rules.

use hunlite_aff::directives::{NEEDAFFIX, ONLYINCOMPOUND};
use hunlite_aff::{AffixData, DEFAULT_MAX_RULE_DEPTH, RuleApplier};
use hunlite_core::flag::{FlagMode, FlagSet};

use super::{DEFAULT_ALPHABET, Dictionary, DictionaryTable};
use crate::compound::{CompoundMatcher, CompoundRuleCodes, referenced_codes};

/// Split a word-list line into the base word and its decoded rule codes.
///
/// The code string ends at the first whitespace; morphological fields
/// after it are ignored.
fn split_entry(line: &str, mode: FlagMode) -> (&str, FlagSet) {
    match line.split_once('/') {
        Some((word, rest)) => {
            let codes = rest.split_whitespace().next().unwrap_or_default();
            (word.trim(), mode.decode(codes))
        }
        None => (
            line.split_whitespace().next().unwrap_or_default(),
            FlagSet::new(),
        ),
    }
}

/// Builds a [`Dictionary`] from parsed affix data and word-list text.
#[derive(Debug, Clone)]
pub struct DictionaryBuilder {
    affix: AffixData,
    alphabet: String,
    max_rule_depth: usize,
}

impl DictionaryBuilder {
    pub fn new(affix: AffixData) -> Self {
        Self {
            affix,
            alphabet: DEFAULT_ALPHABET.to_string(),
            max_rule_depth: DEFAULT_MAX_RULE_DEPTH,
        }
    }

    /// Alphabet used by edit-distance suggestions.
    pub fn alphabet(mut self, alphabet: impl Into<String>) -> Self {
        self.alphabet = alphabet.into();
        self
    }

    /// Continuation-class recursion cap.
    pub fn max_rule_depth(mut self, depth: usize) -> Self {
        self.max_rule_depth = depth;
        self
    }

    /// Expand the word list into the word table and per-flag compound words.
    ///
    /// The first line is the advisory entry count. Lines starting with a
    /// tab are comments.
    pub fn expand(&self, dic_text: &str) -> (DictionaryTable, CompoundRuleCodes) {
        let mode = self.affix.flag_mode;
        let rules = &self.affix.rules;
        let applier = RuleApplier::new(rules).with_max_depth(self.max_rule_depth);
        let need_affix = self.affix.directives.code(NEEDAFFIX, mode);

        let mut codes: CompoundRuleCodes = referenced_codes(&self.affix.compound_rules, mode)
            .into_iter()
            .map(|code| (code, Vec::new()))
            .collect();
        if let Some(code) = self.affix.directives.code(ONLYINCOMPOUND, mode) {
            codes.entry(code).or_default();
        }

        let mut table = DictionaryTable::new();
        let mut lines = dic_text.lines().filter(|l| !l.trim().is_empty());
        let declared = lines.next().and_then(|first| match first.trim().parse::<usize>() {
            Ok(n) => Some(n),
            Err(_) => {
                log::warn!("word list does not start with an entry count: {first:?}");
                None
            }
        });
        // Without a count header the first line is an ordinary entry.
        let first_entry = match declared {
            Some(_) => None,
            None => dic_text.lines().find(|l| !l.trim().is_empty()),
        };

        let mut entries = 0usize;
        for line in first_entry.into_iter().chain(lines) {
            if line.starts_with('\t') {
                continue;
            }
            let (word, word_codes) = split_entry(line.trim(), mode);
            if word.is_empty() {
                continue;
            }
            entries += 1;

            if word_codes.is_empty() {
                table.add_word(word, FlagSet::new());
                continue;
            }

            let needs_affix = need_affix
                .as_ref()
                .is_some_and(|code| word_codes.contains(code));
            if !needs_affix {
                table.add_word(word, word_codes.clone());
            }

            for (i, code) in word_codes.iter().enumerate() {
                if let Some(rule) = rules.get(code) {
                    let derived = applier.apply(word, code);
                    for form in &derived {
                        table.add_word(form, FlagSet::new());
                    }

                    if rule.combineable {
                        for other_code in &word_codes[i + 1..] {
                            let Some(other) = rules.get(other_code) else {
                                continue;
                            };
                            if !other.combineable || other.kind == rule.kind {
                                continue;
                            }
                            for form in &derived {
                                for combined in applier.apply(form, other_code) {
                                    table.add_word(&combined, FlagSet::new());
                                }
                            }
                        }
                    }
                } else {
                    log::trace!("{word}: code {code:?} names no affix rule");
                }

                if let Some(words) = codes.get_mut(code) {
                    words.push(word.to_string());
                }
            }
        }

        if let Some(n) = declared {
            if n != entries {
                log::debug!("word list declares {n} entries, found {entries}");
            }
        }

        codes.retain(|_, words| !words.is_empty());
        (table, codes)
    }

    /// Expand the word list and compile the compound rules.
    pub fn build(self, dic_text: &str) -> Dictionary {
        let (words, codes) = self.expand(dic_text);
        let compound =
            CompoundMatcher::compile(&self.affix.compound_rules, &codes, self.affix.flag_mode);
        log::debug!(
            "built dictionary: {} word forms, {} affix rules, {} compound rules",
            words.len(),
            self.affix.rules.len(),
            compound.len()
        );

        let AffixData {
            rules,
            directives,
            flag_mode,
            replacements,
            ..
        } = self.affix;
        Dictionary {
            rules,
            directives,
            flag_mode,
            words,
            compound,
            replacements,
            alphabet: self.alphabet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hunlite_aff::{Directives, parse_affix};

    fn builder(aff: &str) -> DictionaryBuilder {
        DictionaryBuilder::new(parse_affix(aff, &Directives::default()).unwrap())
    }

    fn set(codes: &[&str]) -> FlagSet {
        codes.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn split_entry_handles_codes_and_morphology() {
        assert_eq!(split_entry("cat", FlagMode::Single), ("cat", set(&[])));
        assert_eq!(split_entry("cat/SM", FlagMode::Single), ("cat", set(&["S", "M"])));
        assert_eq!(
            split_entry("cat/SM po:noun", FlagMode::Single),
            ("cat", set(&["S", "M"]))
        );
        assert_eq!(split_entry("hello po:interj", FlagMode::Single), ("hello", set(&[])));
        assert_eq!(split_entry("foo/1,22", FlagMode::Numeric), ("foo", set(&["1", "22"])));
    }

    #[test]
    fn suffix_expansion_adds_flagless_forms() {
        let (table, _) = builder("SFX S Y 1\nSFX S 0 s .\n").expand("1\ncat/S\n");
        assert_eq!(table.get("cat"), Some(&[set(&["S"])][..]));
        assert_eq!(table.get("cats"), Some(&[][..]));
    }

    #[test]
    fn bare_words_are_flagless() {
        let (table, _) = builder("").expand("2\nhello\nworld\n");
        assert_eq!(table.get("hello"), Some(&[][..]));
        assert_eq!(table.get("world"), Some(&[][..]));
    }

    #[test]
    fn needaffix_hides_the_base_word() {
        let aff = "NEEDAFFIX !\nSFX S Y 1\nSFX S 0 s .\n";
        let (table, _) = builder(aff).expand("1\nfoo/S!\n");
        assert!(!table.contains("foo"));
        assert!(table.contains("foos"));
    }

    #[test]
    fn combineable_prefix_and_suffix_combine() {
        let aff = "PFX U Y 1\nPFX U 0 un .\nSFX D Y 1\nSFX D 0 ed .\n";
        let (table, _) = builder(aff).expand("1\nlock/UD\n");
        for word in ["lock", "unlock", "locked", "unlocked"] {
            assert!(table.contains(word), "{word} missing");
        }
    }

    #[test]
    fn combination_only_with_later_codes() {
        let aff = "PFX U Y 1\nPFX U 0 un .\nSFX D Y 1\nSFX D 0 ed .\n";
        let (table, _) = builder(aff).expand("1\nlock/DU\n");
        // D derives "locked" and looks ahead to U, giving "unlocked".
        assert!(table.contains("unlocked"));
        assert!(!table.contains("ununlock"));
    }

    #[test]
    fn non_combineable_rules_do_not_combine() {
        let aff = "PFX U N 1\nPFX U 0 un .\nSFX D Y 1\nSFX D 0 ed .\n";
        let (table, _) = builder(aff).expand("1\nlock/UD\n");
        assert!(table.contains("unlock"));
        assert!(table.contains("locked"));
        assert!(!table.contains("unlocked"));
    }

    #[test]
    fn compound_codes_collect_base_words_and_prune_empties() {
        let aff = "ONLYINCOMPOUND c\nCOMPOUNDRULE 2\nCOMPOUNDRULE AB\nCOMPOUNDRULE XY\n";
        let (_, codes) = builder(aff).expand("3\nsun/A\nshine/B\nfoo/c\n");
        assert_eq!(codes["A"], vec!["sun".to_string()]);
        assert_eq!(codes["B"], vec!["shine".to_string()]);
        assert_eq!(codes["c"], vec!["foo".to_string()]);
        assert!(!codes.contains_key("X"));
        assert!(!codes.contains_key("Y"));
    }

    #[test]
    fn tab_lines_are_comments_and_crlf_is_accepted() {
        let (table, _) = builder("").expand("2\r\n\tcomment\r\nalpha\r\nbeta/\r\n");
        assert!(table.contains("alpha"));
        assert!(table.contains("beta"));
        assert!(!table.contains("\tcomment"));
        assert!(!table.contains("comment"));
    }

    #[test]
    fn missing_count_line_keeps_first_entry() {
        let (table, _) = builder("").expand("alpha\nbeta\n");
        assert!(table.contains("alpha"));
        assert!(table.contains("beta"));
    }

    #[test]
    fn unknown_codes_are_skipped() {
        let (table, _) = builder("").expand("1\nword/QZ\n");
        assert_eq!(table.get("word"), Some(&[set(&["Q", "Z"])][..]));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn build_compiles_compound_rules() {
        let aff = "COMPOUNDMIN 3\nCOMPOUNDRULE 1\nCOMPOUNDRULE AB\n";
        let dict = builder(aff).build("2\nsun/A\nshine/B\n");
        assert_eq!(dict.compound().len(), 1);
        assert!(dict.compound().is_match("sunshine"));
        assert_eq!(dict.alphabet(), DEFAULT_ALPHABET);
    }
}
