//! Morpheme dictionary store
//!
//! The dictionary is a tab-separated table, one morpheme per row:
//!
//! ```text
//! divid	VERBO	N	T	N	KF	NLM	1	R
//! ```
//!
//! Columns: key, part of speech, meaning, transitivity, standalone,
//! needs-ending, compound limit, rarity, flag. The meaning column is
//! positional only and anything past column nine is a free comment. The
//! store is built once at startup and never mutated afterwards; concurrent
//! readers need no locking.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::{
    CompoundLimit, MorfoError, MorphemeEntry, MorphemeFlag, PartOfSpeech, Result, Transitivity,
};
use crate::orthography;

/// Frozen map from morpheme key to its dictionary entry.
#[derive(Debug, Default)]
pub struct Dictionary {
    entries: HashMap<String, MorphemeEntry>,
}

impl Dictionary {
    /// Load the dictionary from a file. A missing file is fatal; malformed
    /// rows are logged and skipped.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(MorfoError::DictionaryNotFound { path: path.to_path_buf() });
        }
        let data = fs::read_to_string(path)?;
        let dictionary = Self::parse(&data);
        if dictionary.is_empty() {
            return Err(MorfoError::EmptyDictionary { path: path.to_path_buf() });
        }
        debug!(entries = dictionary.len(), path = %path.display(), "dictionary loaded");
        Ok(dictionary)
    }

    /// Parse dictionary rows from an in-memory string. Exposed so tests can
    /// run against fixture tables without touching the filesystem.
    pub fn parse(data: &str) -> Self {
        let mut entries: HashMap<String, MorphemeEntry> = HashMap::new();
        for (number, line) in data.lines().enumerate() {
            let line = line.trim_end();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match parse_row(line) {
                Some(entry) => {
                    // Duplicate keys: the later row replaces the earlier one.
                    entries.insert(entry.key.clone(), entry);
                }
                None => {
                    warn!(row = number + 1, content = line, "skipping malformed dictionary row");
                }
            }
        }
        Self { entries }
    }

    /// Look up a morpheme by its canonical key (lowercase, accented, NFC).
    pub fn lookup(&self, key: &str) -> Option<&MorphemeEntry> {
        self.entries.get(key)
    }

    /// Number of loaded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no row survived parsing.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Parse one row into an entry, or `None` when any enum-valued field falls
/// outside its table.
fn parse_row(line: &str) -> Option<MorphemeEntry> {
    let fields: Vec<&str> = line.split('\t').map(str::trim).collect();
    if fields.len() < 9 {
        return None;
    }

    let key = orthography::normalize(&orthography::to_accented(fields[0])).to_lowercase();
    if key.is_empty() || !key.chars().all(|c| orthography::is_letter(c) || c == '-') {
        return None;
    }

    let pos = PartOfSpeech::from_label(fields[1])?;
    // Single letters enter the dictionary only as LITERO rows.
    if key.chars().count() == 1 && pos != PartOfSpeech::Letter {
        return None;
    }

    // fields[2] is the meaning column; positional, not stored.
    let transitivity = Transitivity::from_label(fields[3])?;
    let standalone = match fields[4] {
        "SF" => true,
        "N" => false,
        _ => return None,
    };
    let needs_ending = match fields[5] {
        "KF" => true,
        "N" => false,
        _ => return None,
    };
    let compound_limit = CompoundLimit::from_label(fields[6])?;
    let rarity: u8 = fields[7].parse().ok()?;
    if rarity > 4 {
        return None;
    }
    let flag = MorphemeFlag::from_label(fields[8])?;

    Some(MorphemeEntry {
        key,
        pos,
        transitivity,
        standalone,
        needs_ending,
        compound_limit,
        rarity,
        flag,
    })
}
