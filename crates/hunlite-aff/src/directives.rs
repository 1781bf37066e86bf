// Scalar affix-file directives (KEEPCASE, NEEDAFFIX, COMPOUNDMIN, FLAG, ...).

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};

use hunlite_core::flag::{FLAG_DIRECTIVE, Flag, FlagMode, UnknownFlagMode};

/// Words with this flag must keep their dictionary casing.
pub const KEEPCASE: &str = "KEEPCASE";
/// Words with this flag are valid only with an affix applied.
pub const NEEDAFFIX: &str = "NEEDAFFIX";
/// Words with this flag are valid only inside compounds.
pub const ONLYINCOMPOUND: &str = "ONLYINCOMPOUND";
/// Words with this flag are never offered as suggestions.
pub const NOSUGGEST: &str = "NOSUGGEST";
/// Minimum word length for compound matching.
pub const COMPOUNDMIN: &str = "COMPOUNDMIN";

/// Directive name to first-argument mapping.
///
/// Unknown directives are kept verbatim so newer affix files still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Directives {
    values: HashMap<String, String>,
}

impl Directives {
    /// Create a directive map pre-seeded with `seed` values.
    pub fn from_seed<'a, I>(seed: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a String)>,
    {
        Self {
            values: seed
                .into_iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// The rule-code encoding selected by the `FLAG` directive.
    pub fn flag_mode(&self) -> Result<FlagMode, UnknownFlagMode> {
        FlagMode::from_directive(self.get(FLAG_DIRECTIVE))
    }

    /// The decoded rule code configured for a flag directive such as
    /// `KEEPCASE`, or `None` if the directive is absent or empty.
    pub fn code(&self, name: &str, mode: FlagMode) -> Option<Flag> {
        self.get(name)
            .and_then(|value| mode.decode(value).into_iter().next())
    }

    /// The `COMPOUNDMIN` threshold, if configured, numeric and non-zero.
    ///
    /// `COMPOUNDMIN 0` leaves compound matching off.
    pub fn compound_min(&self) -> Option<usize> {
        let raw = self.get(COMPOUNDMIN)?;
        match raw.parse() {
            Ok(0) => None,
            Ok(n) => Some(n),
            Err(_) => {
                log::warn!("ignoring non-numeric COMPOUNDMIN value {raw:?}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_values_are_present() {
        let seed: std::collections::HashMap<String, String> =
            [("KEEPCASE".to_string(), "K".to_string())].into();
        let d = Directives::from_seed(&seed);
        assert_eq!(d.get(KEEPCASE), Some("K"));
        assert_eq!(d.len(), 1);
    }

    #[test]
    fn code_is_decoded_under_mode() {
        let mut d = Directives::default();
        d.insert(NOSUGGEST, "!!");
        assert_eq!(d.code(NOSUGGEST, FlagMode::Long).as_deref(), Some("!!"));
        assert_eq!(d.code(NOSUGGEST, FlagMode::Single).as_deref(), Some("!"));
        assert_eq!(d.code(KEEPCASE, FlagMode::Single), None);
    }

    #[test]
    fn flag_mode_defaults_to_single() {
        let d = Directives::default();
        assert_eq!(d.flag_mode(), Ok(FlagMode::Single));
    }

    #[test]
    fn flag_mode_rejects_unknown() {
        let mut d = Directives::default();
        d.insert(FLAG_DIRECTIVE, "octal");
        assert!(d.flag_mode().is_err());
    }

    #[test]
    fn compound_min_parses_numbers_only() {
        let mut d = Directives::default();
        assert_eq!(d.compound_min(), None);
        d.insert(COMPOUNDMIN, "3");
        assert_eq!(d.compound_min(), Some(3));
        d.insert(COMPOUNDMIN, "three");
        assert_eq!(d.compound_min(), None);
    }

    #[test]
    fn compound_min_zero_is_unset() {
        let mut d = Directives::default();
        d.insert(COMPOUNDMIN, "0");
        assert_eq!(d.compound_min(), None);
    }
}
