//! Hunspell-style dictionary engine.
//!
//! - [`dictionary`] -- word-list expansion into the word table
//! - [`compound`] -- compound-rule compilation and matching
//! - [`speller`] -- exact and case-aware word checking
//! - [`suggestion`] -- ranked, memoized corrections
//! - [`handle`] -- [`SpellHandle`], the entry point, with serialization
//!
//! ```no_run
//! use hunlite_dict::{LoadOptions, SpellHandle};
//!
//! let aff = std::fs::read_to_string("en_US.aff").unwrap();
//! let dic = std::fs::read_to_string("en_US.dic").unwrap();
//! let handle = SpellHandle::from_texts("en_US", &aff, &dic, &LoadOptions::default()).unwrap();
//! assert!(handle.check("hello").unwrap());
//! let corrections = handle.suggest("helo", 5).unwrap();
//! # let _ = corrections;
//! ```

pub mod compound;
pub mod dictionary;
pub mod handle;
pub mod speller;
pub mod suggestion;

pub use dictionary::{Dictionary, DictionaryBuilder, DictionaryTable};
pub use handle::{LoadOptions, SpellError, SpellHandle};
pub use speller::Speller;
