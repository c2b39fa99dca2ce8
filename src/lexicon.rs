//! Fallback pre-segmented lexicon
//!
//! Second-chance lookup for words the core engine cannot analyze. The
//! source file carries one headword per line, morpheme boundaries marked
//! with `/` (PEJVO style):
//!
//! ```text
//! aviad/i : flugi per aviadilo
//! ```
//!
//! Only citation forms are listed, so [`Lexicon::lookup_inflected`] derives
//! inflected variants on the fly: it strips the grammatical ending, peels
//! participle and `ig`/`iĝ` suffixes, and reassembles the stored
//! segmentation around them.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::ending::{strip_ending, EndingPos};
use crate::orthography;

/// Participle suffixes, longest first.
const PARTICIPLES: [&str; 6] = ["ant", "int", "ont", "at", "it", "ot"];

/// Read-only map from word to dotted segmentation.
#[derive(Debug, Default)]
pub struct Lexicon {
    map: HashMap<String, String>,
}

impl Lexicon {
    /// An empty lexicon; the analyzer then runs on the core engine alone.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load the lexicon from a file. The fallback layer is optional, so a
    /// missing or unreadable file degrades to an empty map with a warning.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(data) => {
                let lexicon = Self::parse(&data);
                debug!(entries = lexicon.len(), path = %path.display(), "fallback lexicon loaded");
                lexicon
            }
            Err(error) => {
                warn!(path = %path.display(), %error, "fallback lexicon unavailable");
                Self::empty()
            }
        }
    }

    /// Parse lexicon entries from an in-memory string.
    pub fn parse(data: &str) -> Self {
        let mut map: HashMap<String, String> = HashMap::new();
        for line in data.lines() {
            let Some((headword, _)) = line.split_once(':') else { continue };
            let cleaned = orthography::normalize(&orthography::to_accented(headword))
                .trim()
                .to_lowercase();
            let segments: Vec<&str> = cleaned.split('/').filter(|s| !s.is_empty()).collect();
            if segments.len() < 2 {
                continue;
            }
            let word: String = segments.concat();
            if !word.chars().all(orthography::is_letter) {
                continue;
            }
            // First occurrence wins.
            map.entry(word).or_insert_with(|| segments.join("."));
        }
        Self { map }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// True when the map holds nothing.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Look up `word` (lowercase, NFC, accented), deriving inflected forms
    /// when the citation form misses.
    pub fn lookup_inflected(&self, word: &str) -> Option<String> {
        if word.is_empty() {
            return None;
        }
        if let Some(segmentation) = self.map.get(word) {
            return Some(segmentation.clone());
        }

        let ending = strip_ending(word);
        if ending.length == 0 {
            return None;
        }
        let chars: Vec<char> = word.chars().collect();
        let base: String = chars[..chars.len() - ending.length].iter().collect();

        let (stem, suffixes) = peel_derivational(&base);
        let pos = if suffixes.is_empty() { ending.pos } else { EndingPos::Verb };
        let vowel = canonical_vowel(pos)?;
        if stem.is_empty() {
            return None;
        }

        let canonical = self.canonical_segments(&stem, vowel)?;
        let mut tokens = canonical;
        tokens.extend(suffixes);
        tokens.push(ending.ending.to_string());
        Some(tokens.join("."))
    }

    /// Fetch the stored segmentation for a stem, trying the bare stem and
    /// the stem with its canonical vowel; the final canonical segment is
    /// required and stripped.
    fn canonical_segments(&self, stem: &str, vowel: &str) -> Option<Vec<String>> {
        let with_vowel = format!("{stem}{vowel}");
        for candidate in [stem, with_vowel.as_str()] {
            let Some(segmentation) = self.map.get(candidate) else { continue };
            let mut tokens: Vec<String> = segmentation.split('.').map(String::from).collect();
            if tokens.last().map(String::as_str) == Some(vowel) {
                tokens.pop();
                return Some(tokens);
            }
        }
        None
    }
}

/// Peel zero or one trailing participle, then any chain of `ig`/`iĝ`.
/// Returns the residual stem and the peeled suffixes in surface order.
fn peel_derivational(base: &str) -> (String, Vec<String>) {
    let mut stem = base.to_string();
    let mut suffixes: Vec<String> = Vec::new();

    for participle in PARTICIPLES {
        if stem.ends_with(participle) && stem.len() > participle.len() {
            stem.truncate(stem.len() - participle.len());
            suffixes.insert(0, participle.to_string());
            break;
        }
    }

    loop {
        if stem.ends_with("ig") && stem.len() > 2 {
            stem.truncate(stem.len() - 2);
            suffixes.insert(0, "ig".to_string());
        } else if stem.ends_with("iĝ") && stem.len() > "iĝ".len() {
            stem.truncate(stem.len() - "iĝ".len());
            suffixes.insert(0, "iĝ".to_string());
        } else {
            break;
        }
    }

    (stem, suffixes)
}

/// Canonical final vowel for a part of speech.
fn canonical_vowel(pos: EndingPos) -> Option<&'static str> {
    match pos {
        EndingPos::Noun => Some("o"),
        EndingPos::Adjective => Some("a"),
        EndingPos::Adverb => Some("e"),
        EndingPos::Verb => Some("i"),
        _ => None,
    }
}
