//! Grammatical ending recognizer
//!
//! Esperanto words normally close with a short grammatical ending that fixes
//! the part of speech: `-o(j)(n)` noun, `-a(j)(n)` adjective, `-e(n)`
//! adverb, `-i -as -is -os -us -u` verb, plus the invariant adverbial `-aŭ`.
//! The recognizer returns the longest such ending, measured in characters,
//! never in bytes.

/// Minimum character length of a root or stem.
pub const MIN_ROOT_LEN: usize = 2;

/// Part of speech implied by a grammatical ending.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndingPos {
    /// `-o -oj -on -ojn`
    Noun,
    /// `-a -aj -an -ajn`
    Adjective,
    /// `-e -en -aŭ`
    Adverb,
    /// `-i -as -is -os -us -u`
    Verb,
    /// Reserved; no surface ending maps here
    Numeral,
    /// Reserved; pronominal case forms come from the exception table
    Pronoun,
    /// No recognized ending
    None,
}

/// A recognized ending: its surface, character length and implied POS.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndingMatch {
    /// The matched suffix, `""` when nothing matched
    pub ending: &'static str,
    /// Character count of the suffix, 0..=3
    pub length: usize,
    /// Implied part of speech
    pub pos: EndingPos,
}

impl EndingMatch {
    /// The zero-length non-match.
    pub fn none() -> Self {
        Self { ending: "", length: 0, pos: EndingPos::None }
    }
}

/// Longest match first; the set is prefix-free once ordered by length.
const ENDINGS: &[(&str, EndingPos)] = &[
    ("ojn", EndingPos::Noun),
    ("ajn", EndingPos::Adjective),
    ("oj", EndingPos::Noun),
    ("on", EndingPos::Noun),
    ("aj", EndingPos::Adjective),
    ("an", EndingPos::Adjective),
    ("en", EndingPos::Adverb),
    ("aŭ", EndingPos::Adverb),
    ("as", EndingPos::Verb),
    ("is", EndingPos::Verb),
    ("os", EndingPos::Verb),
    ("us", EndingPos::Verb),
    ("o", EndingPos::Noun),
    ("a", EndingPos::Adjective),
    ("e", EndingPos::Adverb),
    ("i", EndingPos::Verb),
    ("u", EndingPos::Verb),
];

/// Identify the grammatical ending of `word` (lowercase, NFC).
///
/// Returns the longest legal ending whose removal leaves a stem of at least
/// [`MIN_ROOT_LEN`] characters; otherwise the zero-length match.
pub fn strip_ending(word: &str) -> EndingMatch {
    let chars: Vec<char> = word.chars().collect();
    let word_len = chars.len();

    for &(suffix, pos) in ENDINGS {
        let suffix_len = suffix.chars().count();
        if word_len < suffix_len + MIN_ROOT_LEN {
            continue;
        }
        let tail = &chars[word_len - suffix_len..];
        if tail.iter().copied().eq(suffix.chars()) {
            return EndingMatch { ending: suffix, length: suffix_len, pos };
        }
    }
    EndingMatch::none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longest_match_wins() {
        assert_eq!(strip_ending("arbojn").ending, "ojn");
        assert_eq!(strip_ending("arboj").ending, "oj");
        assert_eq!(strip_ending("arbon").ending, "on");
        assert_eq!(strip_ending("arbo").ending, "o");
    }

    #[test]
    fn verb_endings() {
        for (word, ending) in [
            ("kuris", "is"),
            ("kuras", "as"),
            ("kuros", "os"),
            ("kurus", "us"),
            ("kuri", "i"),
            ("kuru", "u"),
        ] {
            let m = strip_ending(word);
            assert_eq!(m.ending, ending, "{word}");
            assert_eq!(m.pos, EndingPos::Verb, "{word}");
        }
    }

    #[test]
    fn adverb_endings() {
        assert_eq!(strip_ending("tage").pos, EndingPos::Adverb);
        assert_eq!(strip_ending("hejmen").ending, "en");
        let m = strip_ending("hodiaŭ");
        assert_eq!(m.ending, "aŭ");
        assert_eq!(m.length, 2);
        assert_eq!(m.pos, EndingPos::Adverb);
    }

    #[test]
    fn short_words_have_no_ending() {
        // The residual stem must keep at least two characters.
        assert_eq!(strip_ending("do").length, 0);
        assert_eq!(strip_ending("oj").length, 0);
        assert_eq!(strip_ending("tis").length, 0);
        // Three characters are enough for a one-letter ending.
        assert_eq!(strip_ending("iri").ending, "i");
    }

    #[test]
    fn char_counting_not_byte_counting() {
        // `ĉiuj` is four characters; stripping `-j`? `j` alone is not an
        // ending, and `aj`/`oj` do not match, so nothing is stripped.
        assert_eq!(strip_ending("ĉiuj").length, 0);
        // `ŝaŭmo` strips `-o` leaving a four-character stem.
        let m = strip_ending("ŝaŭmo");
        assert_eq!(m.ending, "o");
    }

    #[test]
    fn unrecognized_tail() {
        assert_eq!(strip_ending("hotel").length, 0);
        assert_eq!(strip_ending("zzz").length, 0);
    }
}
