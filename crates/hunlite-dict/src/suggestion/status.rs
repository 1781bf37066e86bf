// Suggestion status tracking: per-call validity memo and candidate weights.

use hashbrown::HashMap;

use hunlite_core::case::{CaseType, apply_case};

use crate::speller::Speller;

/// Tracks the state of one suggestion run.
///
/// Every known candidate adds one to its weight, so a word reachable
/// through several edit paths ranks higher. Validity is looked up at most
/// once per distinct string.
///
/// Candidates are generated in lowercase for capitalized and uppercase
/// input; they are checked in the casing they will be offered in.
pub struct SuggestionStatus<'a> {
    speller: &'a dyn Speller,
    case_type: CaseType,
    /// Validity of every string checked so far.
    known: HashMap<String, bool>,
    /// Occurrence count of each valid candidate.
    weights: HashMap<String, usize>,
    lookups: usize,
}

impl<'a> SuggestionStatus<'a> {
    pub fn new(speller: &'a dyn Speller, case_type: CaseType) -> Self {
        Self {
            speller,
            case_type,
            known: HashMap::new(),
            weights: HashMap::new(),
            lookups: 0,
        }
    }

    /// Whether `candidate` is valid, consulting the memo first.
    pub fn is_known(&mut self, candidate: &str) -> bool {
        if let Some(&valid) = self.known.get(candidate) {
            return valid;
        }
        self.lookups += 1;
        let valid = match self.case_type {
            CaseType::AllUpper | CaseType::FirstUpper => {
                self.speller.check(&apply_case(candidate, self.case_type))
            }
            CaseType::NoLetters | CaseType::AllLower | CaseType::Complex => {
                self.speller.check(candidate)
            }
        };
        self.known.insert(candidate.to_string(), valid);
        valid
    }

    /// Count `candidate` if it is valid.
    pub fn add_candidate(&mut self, candidate: &str) {
        if self.is_known(candidate) {
            *self.weights.entry_ref(candidate).or_insert(0) += 1;
        }
    }

    /// Number of distinct strings sent to the speller.
    pub fn lookups(&self) -> usize {
        self.lookups
    }

    pub fn candidate_count(&self) -> usize {
        self.weights.len()
    }

    /// Consume the status, returning candidates best-first: highest weight,
    /// then lexicographically smallest.
    pub fn into_ranked(self) -> Vec<(String, usize)> {
        let mut ranked: Vec<(String, usize)> = self.weights.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked
    }
}
