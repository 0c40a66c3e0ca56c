//! # Speaker identification with character-level Markov models
//!
//! A k-order [`MarkovModel`] is trained on each of two reference speeches,
//! then the unknown text is scored under both with additive smoothing.
//! The speaker with the higher length-normalized log probability wins,
//! ties go to [`Speaker::B`].
//!
//! Counts are kept either in [`FrequencyMap`], a separate chaining hash map,
//! or in [`StdCountTable`], selected by [`TableBackend`]. Both give the same scores.
//!
//! # Example
//! ```rust
//! use speakerid::{identify_speaker, Speaker, SpeakerIdentifier, TableBackend};
//!
//! let res = identify_speaker("aaaa", "abab", "aaaa", 1, TableBackend::HashTable).unwrap();
//! assert_eq!(res.verdict, Speaker::A);
//!
//! // or configured
//! let res = SpeakerIdentifier::new(2)
//!     .backend(TableBackend::Dict)
//!     .parallel(false)
//!     .identify("abab", "aaaa", "abba")
//!     .unwrap();
//! println!("A: {} B: {} -> {}", res.score_a, res.score_b, res.verdict);
//! ```

mod error;
mod identifier;
mod kgrams;
mod model;
mod table;

pub use error::{Error, Result};
pub use identifier::{identify_speaker, Identification, Speaker, SpeakerIdentifier};
pub use model::MarkovModel;
pub use table::{
    hash, CountTable, FrequencyMap, FrequencyMapConfig, StdCountTable, TableBackend,
    HASH_MULTIPLIER,
};
