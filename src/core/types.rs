//! Core type definitions for the morfo analyzer
//!
//! The string labels of the dictionary file appear only in the `from_label`
//! constructors here; everything past the TSV parser works with these tagged
//! enums.

use std::fmt;

/// Grammatical category of a morpheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartOfSpeech {
    /// Noun root (substantive), e.g. `tag`
    Noun,
    /// Root used both as noun and verb, e.g. `divid`
    NounOrVerb,
    /// Verb root, e.g. `forges`
    Verb,
    /// Adjective root, e.g. `bel`
    Adjective,
    /// Adverb root or invariant adverb, e.g. `hodiaŭ`
    Adverb,
    /// Numeral, e.g. `du`
    Numeral,
    /// Pronoun, e.g. `ĉiu`
    Pronoun,
    /// Preposition, e.g. `dum`
    Preposition,
    /// Conjunction, e.g. `kaj`
    Conjunction,
    /// Interjection, e.g. `ho`
    Interjection,
    /// Uninflected particle, e.g. `ĉi`
    Particle,
    /// Bound prefix, e.g. `mal`
    AffixPrefix,
    /// Bound suffix, e.g. `ec`
    AffixSuffix,
    /// Participle suffix, e.g. `int`
    Participle,
    /// Single letter admitted as a morpheme of its own
    Letter,
    /// Abbreviation, e.g. `n-r`
    Abbreviation,
}

impl PartOfSpeech {
    /// Parse a dictionary label. Returns `None` for labels outside the table.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "SUBST" => Some(Self::Noun),
            "SUBSTVERBO" => Some(Self::NounOrVerb),
            "VERBO" => Some(Self::Verb),
            "ADJ" => Some(Self::Adjective),
            "ADVERBO" => Some(Self::Adverb),
            "NUMERO" => Some(Self::Numeral),
            "PRONOMO" => Some(Self::Pronoun),
            "PREPOZICIO" => Some(Self::Preposition),
            "KONJUNKCIO" => Some(Self::Conjunction),
            "INTERJEKCIO" => Some(Self::Interjection),
            "PARTIKULO" => Some(Self::Particle),
            "PREFIKSO" => Some(Self::AffixPrefix),
            "SUFIKSO" => Some(Self::AffixSuffix),
            "PARTICIPO" => Some(Self::Participle),
            "LITERO" => Some(Self::Letter),
            "MALLONGIGO" => Some(Self::Abbreviation),
            _ => None,
        }
    }

    /// True for the lexical categories that can carry a linking vowel on
    /// either side inside a compound.
    pub fn is_content_root(self) -> bool {
        matches!(
            self,
            Self::Noun | Self::NounOrVerb | Self::Verb | Self::Adjective | Self::Numeral
        )
    }
}

/// Transitivity of a verb root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transitivity {
    /// Takes a direct object, e.g. `vid`
    Transitive,
    /// Takes no direct object, e.g. `dorm`
    Intransitive,
    /// Used both ways, e.g. `lud`
    Either,
    /// Not a verb
    NotApplicable,
}

impl Transitivity {
    /// Parse a dictionary label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "T" => Some(Self::Transitive),
            "N" => Some(Self::Intransitive),
            "X" => Some(Self::Either),
            "-" => Some(Self::NotApplicable),
            _ => None,
        }
    }

    /// True when a passive participle may attach to a root of this
    /// transitivity.
    pub fn allows_passive(self) -> bool {
        matches!(self, Self::Transitive | Self::Either)
    }
}

/// Positions a morpheme may occupy inside a compound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompoundLimit {
    /// No positional restriction
    None,
    /// Only as the first element, e.g. `bo`
    PrefixOnly,
    /// Only as the final element, e.g. `ec`
    SuffixOnly,
    /// Acts as prefix or suffix but never alone
    BothPrefixAndSuffix,
    /// Participle suffix slot, e.g. `int`
    Particle,
}

impl CompoundLimit {
    /// Parse a dictionary label. `LM` (limited) collapses onto `NLM`; the
    /// rarity column carries that distinction now.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "NLM" | "LM" => Some(Self::None),
            "P" => Some(Self::PrefixOnly),
            "S" => Some(Self::SuffixOnly),
            "PS" => Some(Self::BothPrefixAndSuffix),
            "PRT" => Some(Self::Particle),
            _ => None,
        }
    }
}

/// Whether an entry may be reported alone, only inside compounds, or never.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphemeFlag {
    /// Normal entry
    Regular,
    /// Only usable as part of a compound
    CompoundOnly,
    /// Present in the file for reference, never matched
    Excluded,
}

impl MorphemeFlag {
    /// Parse a dictionary label.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "R" => Some(Self::Regular),
            "K" => Some(Self::CompoundOnly),
            "X" => Some(Self::Excluded),
            _ => None,
        }
    }
}

/// One row of the morpheme dictionary, immutable after load.
#[derive(Debug, Clone)]
pub struct MorphemeEntry {
    /// Canonical lowercase surface, without any grammatical vowel
    pub key: String,
    /// Grammatical category
    pub pos: PartOfSpeech,
    /// Verb transitivity, `NotApplicable` for non-verbs
    pub transitivity: Transitivity,
    /// May appear as a whole word without a grammatical ending
    pub standalone: bool,
    /// Takes a grammatical ending when used as a word
    pub needs_ending: bool,
    /// Allowed positions in a compound
    pub compound_limit: CompoundLimit,
    /// 0 (very common) .. 4 (admitted only when nothing else fits)
    pub rarity: u8,
    /// Regular / compound-only / excluded
    pub flag: MorphemeFlag,
}

/// Outcome of analyzing one word.
///
/// When `valid`, `text` holds the dotted segmentation (`abat.ec.o`);
/// otherwise it holds the original surface untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    /// Whether the word is a legal construction
    pub valid: bool,
    /// Dotted segmentation, or the original word
    pub text: String,
}

impl AnalysisResult {
    /// A successful analysis carrying its dotted segmentation.
    pub fn valid(text: impl Into<String>) -> Self {
        Self { valid: true, text: text.into() }
    }

    /// A failed analysis; the original surface is passed through.
    pub fn invalid(original: impl Into<String>) -> Self {
        Self { valid: false, text: original.into() }
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        assert_eq!(PartOfSpeech::from_label("SUBST"), Some(PartOfSpeech::Noun));
        assert_eq!(PartOfSpeech::from_label("SUFIKSO"), Some(PartOfSpeech::AffixSuffix));
        assert_eq!(PartOfSpeech::from_label("substo"), None);
        assert_eq!(Transitivity::from_label("X"), Some(Transitivity::Either));
        assert_eq!(CompoundLimit::from_label("LM"), Some(CompoundLimit::None));
        assert_eq!(CompoundLimit::from_label("PS"), Some(CompoundLimit::BothPrefixAndSuffix));
        assert_eq!(CompoundLimit::from_label("PRT"), Some(CompoundLimit::Particle));
        assert_eq!(MorphemeFlag::from_label("K"), Some(MorphemeFlag::CompoundOnly));
        assert_eq!(MorphemeFlag::from_label(""), None);
    }

    #[test]
    fn passive_participle_gate() {
        assert!(Transitivity::Transitive.allows_passive());
        assert!(Transitivity::Either.allows_passive());
        assert!(!Transitivity::Intransitive.allows_passive());
    }

    #[test]
    fn analysis_result_constructors() {
        let ok = AnalysisResult::valid("abat.ec.o");
        assert!(ok.valid);
        assert_eq!(ok.text, "abat.ec.o");

        let bad = AnalysisResult::invalid("kuraciisto");
        assert!(!bad.valid);
        assert_eq!(bad.to_string(), "kuraciisto");
    }
}
