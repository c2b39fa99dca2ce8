//! Core data structures for the morfo analyzer
//!
//! Everything past the dictionary parser works in terms of these types:
//! tagged enums for the combinatorial attributes of a morpheme, the
//! [`MorphemeEntry`] record itself, and the [`AnalysisResult`] value that
//! every analysis returns.

pub mod error;
pub mod types;

pub use error::{MorfoError, Result};
pub use types::{
    AnalysisResult, CompoundLimit, MorphemeEntry, MorphemeFlag, PartOfSpeech, Transitivity,
};
