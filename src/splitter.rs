//! Recursive compound splitter
//!
//! Partitions a stem (the word minus its grammatical ending) into a legal
//! sequence of dictionary morphemes: a depth-first, left-to-right search
//! with the shortest candidate tried first, so analyses with more, shorter
//! morphemes win ties. A linking vowel (`nask.o.tag.o`) may be consumed
//! between two content roots and becomes a trail element of its own.
//!
//! Rarity gating runs outside the search: the driver calls [`split`] with
//! the configured threshold first and retries wide open only when that
//! fails, so a rare morpheme never displaces a common analysis.

use crate::core::{CompoundLimit, MorphemeEntry, MorphemeFlag, PartOfSpeech};
use crate::dictionary::Dictionary;
use crate::ending::{EndingMatch, EndingPos};

/// Hard bound on morphemes per compound, from observed vocabulary.
const MAX_MORPHEMES: usize = 9;

/// Vowels that may link two roots.
const LINK_VOWELS: [char; 4] = ['o', 'a', 'e', 'i'];

/// One chosen element of a segmentation in progress.
#[derive(Debug, Clone)]
struct TrailItem {
    key: String,
    pos: PartOfSpeech,
    passive_ok: bool,
    link: bool,
}

struct Search<'d> {
    dictionary: &'d Dictionary,
    chars: Vec<char>,
    ending: EndingMatch,
    rarity_limit: u8,
    trail: Vec<TrailItem>,
}

/// Try to split `stem` into morphemes under the given rarity limit.
///
/// On success returns the trail segments in order, linking vowels included,
/// without the grammatical ending. The first legal cover in enumeration
/// order is returned; `None` means no cover exists at this limit.
pub fn split(
    dictionary: &Dictionary,
    stem: &str,
    ending: EndingMatch,
    rarity_limit: u8,
) -> Option<Vec<String>> {
    let chars: Vec<char> = stem.chars().collect();
    if chars.is_empty() {
        return None;
    }
    let mut search = Search { dictionary, chars, ending, rarity_limit, trail: Vec::new() };
    if search.descend(0, false) {
        Some(search.trail.into_iter().map(|item| item.key).collect())
    } else {
        None
    }
}

impl Search<'_> {
    /// Extend the trail over `chars[offset..]`. `after_link` marks that the
    /// previous trail element was a linking vowel, which must be followed by
    /// a content root.
    fn descend(&mut self, offset: usize, after_link: bool) -> bool {
        if self.morpheme_count() >= MAX_MORPHEMES {
            return false;
        }
        let rest_len = self.chars.len() - offset;
        let first = self.trail.is_empty();

        for take in 1..=rest_len {
            let candidate: String = self.chars[offset..offset + take].iter().collect();
            let Some(entry) = self.dictionary.lookup(&candidate) else { continue };
            let entry = entry.clone();

            if !self.admissible(&entry, take, first, after_link) {
                continue;
            }

            let is_last = take == rest_len;
            if is_last {
                if self.last_role_ok(&entry) {
                    self.push_morpheme(&entry);
                    return true;
                }
                continue;
            }

            // FIRST and INTERNAL roles share the same placement here; the
            // positional limits differ.
            if !first && !internal_position_ok(entry.compound_limit) {
                continue;
            }

            self.push_morpheme(&entry);
            if self.descend(offset + take, false) {
                return true;
            }

            // A linking vowel may follow a content root, consuming one
            // character before the next root.
            if entry.pos.is_content_root() && !after_link && rest_len - take >= 2 {
                let vowel = self.chars[offset + take];
                if LINK_VOWELS.contains(&vowel) {
                    self.trail.push(TrailItem {
                        key: vowel.to_string(),
                        pos: entry.pos,
                        passive_ok: false,
                        link: true,
                    });
                    if self.descend(offset + take + 1, true) {
                        return true;
                    }
                    self.trail.pop();
                }
            }
            self.trail.pop();
        }
        false
    }

    /// Checks shared by every role: flag, rarity, minimum length, the
    /// root-to-root constraint around linking vowels, and participle
    /// attachment.
    fn admissible(&self, entry: &MorphemeEntry, take: usize, first: bool, after_link: bool) -> bool {
        if entry.flag == MorphemeFlag::Excluded {
            return false;
        }
        if entry.rarity > self.rarity_limit {
            return false;
        }
        if take == 1 && entry.pos != PartOfSpeech::Letter {
            return false;
        }
        if after_link && !entry.pos.is_content_root() {
            return false;
        }
        if first && !first_position_ok(entry.compound_limit) {
            return false;
        }
        if entry.pos == PartOfSpeech::Participle && !self.participle_ok(entry) {
            return false;
        }
        true
    }

    /// A participle suffix needs a stem to its left, and the passive set
    /// (`at it ot`) attaches only to transitive verbs.
    fn participle_ok(&self, entry: &MorphemeEntry) -> bool {
        let Some(previous) = self.trail.iter().rev().find(|item| !item.link) else {
            return false;
        };
        let passive = matches!(entry.key.as_str(), "at" | "it" | "ot");
        if passive {
            return matches!(previous.pos, PartOfSpeech::Verb | PartOfSpeech::NounOrVerb)
                && previous.passive_ok;
        }
        true
    }

    /// LAST role: positional limit, non-degenerate compound for
    /// CompoundOnly entries, and agreement with the word's ending.
    fn last_role_ok(&self, entry: &MorphemeEntry) -> bool {
        if !last_position_ok(entry.compound_limit) {
            return false;
        }
        if entry.flag == MorphemeFlag::CompoundOnly && self.morpheme_count() == 0 {
            return false;
        }
        if self.ending.length > 0 {
            compatible_with_ending(entry.pos, self.ending.pos)
        } else {
            entry.standalone && !entry.needs_ending
        }
    }

    fn push_morpheme(&mut self, entry: &MorphemeEntry) {
        self.trail.push(TrailItem {
            key: entry.key.clone(),
            pos: entry.pos,
            passive_ok: entry.transitivity.allows_passive(),
            link: false,
        });
    }

    fn morpheme_count(&self) -> usize {
        self.trail.iter().filter(|item| !item.link).count()
    }
}

fn first_position_ok(limit: CompoundLimit) -> bool {
    !matches!(limit, CompoundLimit::SuffixOnly | CompoundLimit::Particle)
}

fn internal_position_ok(limit: CompoundLimit) -> bool {
    !matches!(limit, CompoundLimit::PrefixOnly | CompoundLimit::SuffixOnly)
}

fn last_position_ok(limit: CompoundLimit) -> bool {
    limit != CompoundLimit::PrefixOnly
}

/// Ending agreement for the final morpheme of a compound.
///
/// Broader than the single-morpheme table: compounds nominalize and
/// adverbialize freely (`ĉiu.tag.e` puts a noun before the adverb ending),
/// and derivational suffixes take whatever ending the word carries.
fn compatible_with_ending(pos: PartOfSpeech, ending: EndingPos) -> bool {
    use PartOfSpeech::*;
    if matches!(pos, AffixSuffix | Participle) {
        return true;
    }
    match ending {
        EndingPos::Noun => matches!(pos, Noun | NounOrVerb | Verb | Adjective),
        EndingPos::Adjective => matches!(pos, Adjective | Noun | NounOrVerb | Verb | Numeral | Pronoun),
        EndingPos::Adverb => {
            matches!(pos, Adverb | Noun | NounOrVerb | Verb | Adjective | Numeral | Preposition)
        }
        EndingPos::Verb => matches!(pos, Verb | NounOrVerb),
        EndingPos::Numeral => pos == Numeral,
        EndingPos::Pronoun => pos == Pronoun,
        EndingPos::None => false,
    }
}
