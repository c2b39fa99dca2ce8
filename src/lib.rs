//! # morfo
//!
//! A morphological analyzer and spell checker for Esperanto.
//!
//! Given a word, morfo decides whether it is a legal construction of the
//! language and, if so, returns a dotted segmentation into its constituent
//! morphemes: roots, derivational affixes and the grammatical ending.
//! `forgesitaj` analyzes as `forges.it.aj`, `aerodinamiko` as
//! `aer.o.dinamik.o`. The same engine drives a spell checker over free
//! text: whatever cannot be segmented is reported as misspelled.
//!
//! ## Features
//!
//! - **Morpheme dictionary**: a tab-separated table of roots and affixes
//!   with their combinatorial attributes, loaded once and frozen
//! - **Ending recognition**: the grammatical endings (`-o -a -e -i -as`...)
//!   identified by longest match over characters, never bytes
//! - **Compound splitting**: backtracking search over morpheme sequences
//!   under positional, part-of-speech and rarity constraints, with
//!   linking vowels (`nask.o.tag.o`)
//! - **Fallback lexicon**: second-chance lookup in a pre-segmented word
//!   list, deriving participles and `ig`/`iĝ` forms on the fly
//! - **Notation tolerance**: accepts `cx`-digraphs and `c^`-digraphs and
//!   converts them to the supersigned letters before analysis
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use morfo::{Analyzer, MorfoConfig};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Load the dictionary and fallback lexicon once, at startup.
//! let analyzer = Analyzer::from_config(&MorfoConfig::default())?;
//!
//! let result = analyzer.analyze_word("abateco");
//! assert!(result.valid);
//! assert_eq!(result.text, "abat.ec.o");
//!
//! // Spell-check a whole text: invalid words, one per line.
//! let report = analyzer.analyze_text("la hundo kuras tre rapide", false);
//! println!("{report}");
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`core`](crate::core): morpheme records, tagged attribute enums, errors
//! - [`orthography`]: notation conversion and character classes
//! - [`dictionary`]: the frozen morpheme store
//! - [`ending`]: grammatical ending recognizer
//! - [`splitter`]: the recursive compound search
//! - [`lexicon`]: the pre-segmented fallback lexicon
//! - [`analyzer`]: word, text and file drivers
//! - [`config`]: paths and thresholds, with `MORFO_*` env overrides
//!
//! ## Concurrency
//!
//! The [`Analyzer`] is read-only after construction: share it behind an
//! `Arc` and analyze from any number of threads. Per-call state is limited
//! to the transient segmentation trail.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod analyzer;
pub mod config;
pub mod core;
pub mod dictionary;
pub mod ending;
pub mod lexicon;
pub mod logging;
pub mod orthography;
pub mod splitter;

pub use crate::analyzer::Analyzer;
pub use crate::config::MorfoConfig;
pub use crate::core::{AnalysisResult, MorfoError, MorphemeEntry, Result};
pub use crate::dictionary::Dictionary;
pub use crate::lexicon::Lexicon;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
