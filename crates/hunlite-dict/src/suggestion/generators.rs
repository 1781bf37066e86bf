// Edit-distance candidate generators: each applies one class of single
// edit to a word and emits every resulting string, valid or not.

// ---------------------------------------------------------------------------
// Trait
// ---------------------------------------------------------------------------

/// Trait for individual edit generators.
pub trait EditGenerator {
    /// Push every word one edit of this class away from `word` onto `out`.
    fn generate(&self, word: &[char], out: &mut Vec<String>);
}

/// All candidates one edit away from `word`, in generator order.
///
/// Duplicates are kept: a word reachable through several edits appears
/// once per edit.
pub fn edits1(generators: &[Box<dyn EditGenerator + Send + Sync>], word: &[char]) -> Vec<String> {
    let mut out = Vec::new();
    for generator in generators {
        generator.generate(word, &mut out);
    }
    out
}

/// The four Norvig edits over `alphabet`.
pub fn default_generators(alphabet: &[char]) -> Vec<Box<dyn EditGenerator + Send + Sync>> {
    vec![
        Box::new(Deletion),
        Box::new(Transposition),
        Box::new(Substitution {
            characters: alphabet.to_vec(),
        }),
        Box::new(Insertion {
            characters: alphabet.to_vec(),
        }),
    ]
}

// ---------------------------------------------------------------------------
// Deletion
// ---------------------------------------------------------------------------

/// Remove one character at each position.
pub struct Deletion;

impl EditGenerator for Deletion {
    fn generate(&self, word: &[char], out: &mut Vec<String>) {
        for i in 0..word.len() {
            out.push(word[..i].iter().chain(&word[i + 1..]).collect());
        }
    }
}

// ---------------------------------------------------------------------------
// Transposition
// ---------------------------------------------------------------------------

/// Swap each pair of adjacent, differing characters.
pub struct Transposition;

impl EditGenerator for Transposition {
    fn generate(&self, word: &[char], out: &mut Vec<String>) {
        let mut buffer = word.to_vec();
        for i in 1..word.len() {
            if word[i - 1] == word[i] {
                continue;
            }
            buffer.swap(i - 1, i);
            out.push(buffer.iter().collect());
            buffer.swap(i - 1, i);
        }
    }
}

// ---------------------------------------------------------------------------
// Substitution
// ---------------------------------------------------------------------------

/// Replace each character with every other character of the alphabet.
pub struct Substitution {
    pub characters: Vec<char>,
}

impl EditGenerator for Substitution {
    fn generate(&self, word: &[char], out: &mut Vec<String>) {
        let mut buffer = word.to_vec();
        for i in 0..word.len() {
            for &c in &self.characters {
                if c == word[i] {
                    continue;
                }
                buffer[i] = c;
                out.push(buffer.iter().collect());
            }
            buffer[i] = word[i];
        }
    }
}

// ---------------------------------------------------------------------------
// Insertion
// ---------------------------------------------------------------------------

/// Insert every alphabet character at every position, including the end.
pub struct Insertion {
    pub characters: Vec<char>,
}

impl EditGenerator for Insertion {
    fn generate(&self, word: &[char], out: &mut Vec<String>) {
        for i in 0..=word.len() {
            for &c in &self.characters {
                let mut candidate = String::with_capacity(word.len() + 1);
                candidate.extend(&word[..i]);
                candidate.push(c);
                candidate.extend(&word[i..]);
                out.push(candidate);
            }
        }
    }
}
