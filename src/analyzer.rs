//! Word, text and file drivers
//!
//! The [`Analyzer`] owns the dictionary snapshot and the fallback lexicon
//! and composes the layers of the engine: ending stripping, the
//! single-morpheme check, the compound splitter with its rarity rerun, and
//! the fallback lookup. It is an explicit context value: build one from a
//! [`MorfoConfig`](crate::config::MorfoConfig) at startup and share it
//! freely, it is read-only after construction.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::config::MorfoConfig;
use crate::core::{AnalysisResult, MorphemeFlag, PartOfSpeech, Result};
use crate::dictionary::Dictionary;
use crate::ending::{strip_ending, EndingMatch, EndingPos};
use crate::lexicon::Lexicon;
use crate::orthography::{is_letter, is_word_char, normalize, restore_capitals, to_accented};
use crate::splitter;

/// Rarity admitted without a rerun; morphemes above it only appear when
/// nothing else covers the word.
pub const DEFAULT_RARITY_THRESHOLD: u8 = 2;

/// A handful of short accusative forms collide with unrelated roots
/// (`vin` the pronoun vs `vin-` the wine root), so they bypass the engine.
const EXCEPTIONS: &[(&str, &str)] = &[
    ("ĝin", "ĝi.n"),
    ("lin", "li.n"),
    ("min", "mi.n"),
    ("sin", "si.n"),
    ("vin", "vi.n"),
    ("lian", "li.an"),
    ("cian", "ci.an"),
];

/// The morphological analyzer: dictionary snapshot + fallback lexicon.
#[derive(Debug)]
pub struct Analyzer {
    dictionary: Dictionary,
    lexicon: Lexicon,
    rarity_threshold: u8,
}

impl Analyzer {
    /// Build an analyzer over an already-loaded dictionary and lexicon.
    pub fn new(dictionary: Dictionary, lexicon: Lexicon) -> Self {
        Self { dictionary, lexicon, rarity_threshold: DEFAULT_RARITY_THRESHOLD }
    }

    /// Override the rarity threshold of the first search pass.
    pub fn with_rarity_threshold(mut self, threshold: u8) -> Self {
        self.rarity_threshold = threshold;
        self
    }

    /// Load dictionary and lexicon from the paths in `config`. A missing
    /// dictionary is fatal, a missing lexicon leaves the fallback empty.
    pub fn from_config(config: &MorfoConfig) -> Result<Self> {
        config.validate()?;
        let dictionary = Dictionary::load(&config.dictionary_path)?;
        let lexicon = match &config.lexicon_path {
            Some(path) => Lexicon::load(path),
            None => Lexicon::empty(),
        };
        debug!(
            morphemes = dictionary.len(),
            fallback_entries = lexicon.len(),
            "analyzer ready"
        );
        Ok(Self::new(dictionary, lexicon).with_rarity_threshold(config.rarity_threshold))
    }

    /// Analyze a single word token (accented form; case-insensitive).
    ///
    /// Returns the dotted segmentation with the input's capitalization
    /// restored, or the input unchanged when the word is not a legal
    /// construction.
    pub fn analyze_word(&self, word: &str) -> AnalysisResult {
        if word.is_empty() {
            return AnalysisResult::invalid(word);
        }
        if word.chars().any(|ch| !is_letter(ch) && ch != '-') {
            return AnalysisResult::invalid(word);
        }

        let lowered = normalize(word).to_lowercase();
        match self.analyze_lowered(&lowered) {
            Some(segmentation) => AnalysisResult::valid(restore_capitals(word, &segmentation)),
            None => AnalysisResult::invalid(word),
        }
    }

    /// The engine proper, on a lowercase NFC word. Returns the dotted
    /// segmentation on success.
    fn analyze_lowered(&self, word: &str) -> Option<String> {
        let mut chars = word.chars();
        if let (Some(only), None) = (chars.next(), chars.next()) {
            // Single letters pass as themselves.
            return is_letter(only).then(|| word.to_string());
        }

        if let Some((_, split)) = EXCEPTIONS.iter().find(|(surface, _)| *surface == word) {
            return Some((*split).to_string());
        }

        // Words that stand alone without a grammatical ending: `dum`,
        // `hodiaŭ`, `unu`. Checked before stripping, which would otherwise
        // shave a phantom ending off the invariants.
        if let Some(entry) = self.dictionary.lookup(word) {
            if entry.standalone && !entry.needs_ending && entry.flag == MorphemeFlag::Regular {
                return Some(word.to_string());
            }
        }

        let ending = strip_ending(word);
        if ending.length > 0 {
            let word_chars: Vec<char> = word.chars().collect();
            let stem: String = word_chars[..word_chars.len() - ending.length].iter().collect();

            if let Some(entry) = self.dictionary.lookup(&stem) {
                if entry.flag == MorphemeFlag::Regular
                    && entry.needs_ending
                    && single_morpheme_compatible(entry.pos, ending.pos)
                {
                    return Some(format!("{stem}.{}", ending.ending));
                }
            }

            if let Some(trail) = self.split_gated(&stem, ending) {
                let mut text = trail.join(".");
                text.push('.');
                text.push_str(ending.ending);
                return Some(text);
            }

            // `-aŭ` marks invariant adverbs but the vowel group belongs to
            // the root (`post.morgaŭ`), so compounds retry unstripped.
            if ending.ending == "aŭ" {
                if let Some(trail) = self.split_gated(word, EndingMatch::none()) {
                    return Some(trail.join("."));
                }
            }
        } else if let Some(trail) = self.split_gated(word, ending) {
            return Some(trail.join("."));
        }

        self.lexicon.lookup_inflected(word)
    }

    /// Compound search with rarity gating: the configured threshold first,
    /// then wide open, so rare morphemes never displace a common analysis.
    fn split_gated(&self, stem: &str, ending: EndingMatch) -> Option<Vec<String>> {
        splitter::split(&self.dictionary, stem, ending, self.rarity_threshold)
            .or_else(|| splitter::split(&self.dictionary, stem, ending, 4))
    }

    /// Analyze free text.
    ///
    /// In morpheme mode the text is re-emitted with every valid word
    /// replaced by its dotted segmentation, everything else verbatim. In
    /// spell-check mode only the invalid words are emitted, one per line.
    pub fn analyze_text(&self, text: &str, morpheme_mode: bool) -> String {
        let mut out = String::with_capacity(text.len());
        let mut token = String::new();
        for ch in text.chars() {
            if is_word_char(ch) {
                token.push(ch);
            } else {
                self.flush_token(&mut token, &mut out, morpheme_mode);
                if morpheme_mode {
                    out.push(ch);
                }
            }
        }
        self.flush_token(&mut token, &mut out, morpheme_mode);
        out
    }

    /// Analyze one accumulated word token into `out`.
    fn flush_token(&self, token: &mut String, out: &mut String, morpheme_mode: bool) {
        if token.is_empty() {
            return;
        }
        let accented = normalize(&to_accented(token));
        let result = self.analyze_word(&accented);
        if morpheme_mode {
            out.push_str(&result.text);
        } else if !result.valid {
            out.push_str(&result.text);
            out.push('\n');
        }
        token.clear();
    }

    /// Analyze the contents of a file. I/O failures are fatal.
    pub fn analyze_file(&self, path: &Path, morpheme_mode: bool) -> Result<String> {
        let text = fs::read_to_string(path)?;
        Ok(self.analyze_text(&text, morpheme_mode))
    }
}

/// Strict POS agreement for a whole stem with its ending.
fn single_morpheme_compatible(pos: PartOfSpeech, ending: EndingPos) -> bool {
    use PartOfSpeech::*;
    match ending {
        EndingPos::Noun => matches!(pos, Noun | NounOrVerb),
        EndingPos::Adjective => pos == Adjective,
        EndingPos::Adverb => pos == Adverb,
        EndingPos::Verb => matches!(pos, Verb | NounOrVerb),
        EndingPos::Numeral => pos == Numeral,
        EndingPos::Pronoun => pos == Pronoun,
        EndingPos::None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Dictionary {
        let rows = [
            ["ĉiu", "PRONOMO", "N", "-", "SF", "N", "NLM", "0", "R"],
            ["tag", "SUBST", "TAGO", "-", "N", "KF", "NLM", "0", "R"],
            ["forges", "VERBO", "N", "T", "N", "KF", "NLM", "0", "R"],
            ["it", "PARTICIPO", "N", "-", "N", "N", "PRT", "0", "R"],
            ["abat", "SUBST", "RELPOSTENO", "-", "N", "KF", "NLM", "1", "R"],
            ["ec", "SUFIKSO", "N", "-", "N", "N", "S", "0", "R"],
            ["aer", "SUBST", "N", "-", "N", "KF", "NLM", "0", "R"],
            ["dinamik", "SUBST", "N", "-", "N", "KF", "NLM", "1", "R"],
            ["kurac", "VERBO", "N", "T", "N", "KF", "NLM", "0", "R"],
            ["kur", "VERBO", "N", "N", "N", "KF", "NLM", "0", "R"],
            ["ist", "SUFIKSO", "N", "-", "N", "N", "S", "0", "R"],
            ["n-r", "SUBST", "N", "-", "N", "KF", "NLM", "1", "R"],
            ["dum", "PREPOZICIO", "N", "-", "SF", "N", "NLM", "0", "R"],
            ["hodiaŭ", "ADVERBO", "N", "-", "SF", "N", "NLM", "0", "R"],
            ["morgaŭ", "ADVERBO", "N", "-", "SF", "N", "NLM", "0", "R"],
            ["post", "PREPOZICIO", "N", "-", "SF", "N", "NLM", "0", "R"],
            ["vort", "SUBST", "N", "-", "N", "KF", "NLM", "0", "R"],
            ["riĉ", "ADJ", "N", "-", "N", "KF", "NLM", "0", "R"],
            ["ul", "SUFIKSO", "N", "-", "N", "N", "S", "0", "R"],
            ["um", "SUFIKSO", "N", "-", "N", "N", "S", "4", "R"],
            ["lav", "VERBO", "N", "T", "N", "KF", "NLM", "0", "R"],
            ["ej", "SUFIKSO", "N", "-", "N", "N", "S", "0", "R"],
        ];
        let data: Vec<String> = rows.iter().map(|r| r.join("\t")).collect();
        Dictionary::parse(&data.join("\n"))
    }

    fn lexicon() -> Lexicon {
        Lexicon::parse("aviad/i : flugi\nabolici/i : forigi\n")
    }

    fn analyzer() -> Analyzer {
        Analyzer::new(dictionary(), lexicon())
    }

    #[test]
    fn scenario_table() {
        let analyzer = analyzer();
        for (input, expected) in [
            ("forgesitaj", "forges.it.aj"),
            ("ĉiutage", "ĉiu.tag.e"),
            ("n-rojn", "n-r.ojn"),
            ("abateco", "abat.ec.o"),
            ("aerodinamiko", "aer.o.dinamik.o"),
            ("aviadinte", "aviad.int.e"),
            ("aboliciiĝos", "abolici.iĝ.os"),
        ] {
            let result = analyzer.analyze_word(input);
            assert!(result.valid, "{input} should be valid");
            assert_eq!(result.text, expected, "{input}");
        }
    }

    #[test]
    fn doubled_vowel_is_not_coerced() {
        let analyzer = analyzer();
        let result = analyzer.analyze_word("kuraciisto");
        assert!(!result.valid);
        assert_eq!(result.text, "kuraciisto");
    }

    #[test]
    fn x_notation_converts_before_analysis() {
        let analyzer = analyzer();
        let accented = normalize(&to_accented("cxiutage"));
        let result = analyzer.analyze_word(&accented);
        assert_eq!(result.text, "ĉiu.tag.e");
    }

    #[test]
    fn standalone_words_pass_unchanged() {
        let analyzer = analyzer();
        for word in ["dum", "hodiaŭ", "morgaŭ"] {
            let result = analyzer.analyze_word(word);
            assert!(result.valid, "{word}");
            assert_eq!(result.text, word);
        }
    }

    #[test]
    fn zero_ending_compound() {
        let analyzer = analyzer();
        let result = analyzer.analyze_word("postmorgaŭ");
        assert!(result.valid);
        assert_eq!(result.text, "post.morgaŭ");
    }

    #[test]
    fn accusative_pronoun_exceptions() {
        let analyzer = analyzer();
        assert_eq!(analyzer.analyze_word("vin").text, "vi.n");
        assert_eq!(analyzer.analyze_word("min").text, "mi.n");
        assert_eq!(analyzer.analyze_word("lian").text, "li.an");
    }

    #[test]
    fn single_letters_are_words() {
        let analyzer = analyzer();
        assert!(analyzer.analyze_word("a").valid);
        assert!(analyzer.analyze_word("ŭ").valid);
        assert!(!analyzer.analyze_word("3").valid);
    }

    #[test]
    fn non_letter_characters_reject_the_token() {
        let analyzer = analyzer();
        assert!(!analyzer.analyze_word("tag3o").valid);
        assert!(!analyzer.analyze_word("l'").valid);
    }

    #[test]
    fn round_trip_and_ending_soundness() {
        let analyzer = analyzer();
        for input in ["forgesitaj", "ĉiutage", "abateco", "aerodinamiko", "n-rojn", "lavejo"] {
            let result = analyzer.analyze_word(input);
            assert!(result.valid, "{input}");
            // Removing the dots restores the input exactly.
            assert_eq!(result.text.replace('.', ""), input, "{input}");
            // The final segment is exactly the recognized ending.
            let ending = strip_ending(input);
            if ending.length > 0 {
                assert!(
                    result.text.ends_with(&format!(".{}", ending.ending)),
                    "{input} -> {}",
                    result.text
                );
            }
        }
    }

    #[test]
    fn determinism() {
        let analyzer = analyzer();
        let first = analyzer.analyze_word("aerodinamiko");
        for _ in 0..3 {
            assert_eq!(analyzer.analyze_word("aerodinamiko"), first);
        }
    }

    #[test]
    fn rare_morpheme_only_when_forced() {
        let analyzer = analyzer();
        // `tag.um.i` exists only through the rare suffix; it is still found.
        let forced = analyzer.analyze_word("tagumi");
        assert!(forced.valid);
        assert_eq!(forced.text, "tag.um.i");
        // But a common analysis is preferred when one exists: `lavejo`
        // never reaches for rarity-4 morphemes.
        assert_eq!(analyzer.analyze_word("lavejo").text, "lav.ej.o");
    }

    #[test]
    fn fallback_is_monotonic() {
        let with = analyzer();
        let without = Analyzer::new(dictionary(), Lexicon::empty());
        // Core-accepted words do not change when the fallback disappears.
        for word in ["forgesitaj", "abateco", "ĉiutage", "dum"] {
            assert_eq!(with.analyze_word(word), without.analyze_word(word));
        }
        // Fallback-only words degrade to invalid.
        assert!(with.analyze_word("aviadinte").valid);
        assert!(!without.analyze_word("aviadinte").valid);
    }

    #[test]
    fn capitals_are_restored() {
        let analyzer = analyzer();
        assert_eq!(analyzer.analyze_word("RIĈULO").text, "RIĈ.UL.O");
        assert_eq!(analyzer.analyze_word("Abateco").text, "Abat.ec.o");
    }

    #[test]
    fn text_driver_morpheme_mode() {
        let analyzer = analyzer();
        let out = analyzer.analyze_text("Abateco, kaj vortto!", true);
        assert_eq!(out, "Abat.ec.o, kaj vortto!");
    }

    #[test]
    fn text_driver_spell_mode() {
        let analyzer = analyzer();
        let out = analyzer.analyze_text("abateco vortto ĉiutage zzz", false);
        assert_eq!(out, "vortto\nzzz\n");
    }

    #[test]
    fn text_driver_converts_notation() {
        let analyzer = analyzer();
        let out = analyzer.analyze_text("cxiutage", true);
        assert_eq!(out, "ĉiu.tag.e");
    }

    #[test]
    fn file_driver_round_trip() {
        use std::io::Write;
        let analyzer = analyzer();
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "abateco vortto").expect("write");
        let out = analyzer.analyze_file(file.path(), false).expect("analyze");
        assert_eq!(out, "vortto\n");
        let out = analyzer.analyze_file(file.path(), true).expect("analyze");
        assert_eq!(out, "abat.ec.o vortto");
    }

    #[test]
    fn missing_file_is_an_error() {
        let analyzer = analyzer();
        assert!(analyzer.analyze_file(Path::new("/nonexistent/input.txt"), true).is_err());
    }
}
