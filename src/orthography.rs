//! Esperanto orthography utilities
//!
//! Esperanto text arrives in three notations: the proper supersigned
//! letters (`ĉ ĝ ĥ ĵ ŝ ŭ`), the x-digraphs (`cx gx hx jx sx ux`), and the
//! caret digraphs (`c^ g^ ...`). Everything downstream of this module works
//! on NFC-normalized, supersigned text.

use unicode_normalization::UnicodeNormalization;

/// Map a plain letter to its supersigned form, if it accepts one.
fn accented(ch: char) -> Option<char> {
    match ch {
        'c' => Some('ĉ'),
        'g' => Some('ĝ'),
        'h' => Some('ĥ'),
        'j' => Some('ĵ'),
        's' => Some('ŝ'),
        'u' => Some('ŭ'),
        'C' => Some('Ĉ'),
        'G' => Some('Ĝ'),
        'H' => Some('Ĥ'),
        'J' => Some('Ĵ'),
        'S' => Some('Ŝ'),
        'U' => Some('Ŭ'),
        _ => None,
    }
}

/// Replace x-digraphs (`cx`, `CX`, `cX`...) and caret digraphs (`c^`) with
/// the corresponding supersigned letter. Other characters pass through.
pub fn to_accented(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let mut out = String::with_capacity(word.len());
    let mut i = 0;
    while i < chars.len() {
        let ch = chars[i];
        if let Some(acc) = accented(ch) {
            if let Some(&next) = chars.get(i + 1) {
                if next == 'x' || next == 'X' || next == '^' {
                    out.push(acc);
                    i += 2;
                    continue;
                }
            }
        }
        out.push(ch);
        i += 1;
    }
    out
}

/// NFC-normalize a string. Dictionary keys and input tokens are compared
/// in this form; a decomposed `ĉ` (c + combining circumflex) would
/// otherwise never match.
pub fn normalize(s: &str) -> String {
    s.nfc().collect()
}

/// True for Latin letters plus the six supersigned Esperanto letters.
pub fn is_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
        || matches!(ch, 'ĉ' | 'ĝ' | 'ĥ' | 'ĵ' | 'ŝ' | 'ŭ' | 'Ĉ' | 'Ĝ' | 'Ĥ' | 'Ĵ' | 'Ŝ' | 'Ŭ')
}

/// True for characters that belong to a word token: letters, the hyphen,
/// and the apostrophe (elision: `l'`).
pub fn is_word_char(ch: char) -> bool {
    is_letter(ch) || ch == '-' || ch == '\''
}

/// Reapply the capitalization of `original` onto a dotted segmentation of
/// its lowercase form: `RIĈULO` + `riĉ.ul.o` gives `RIĈ.UL.O`.
///
/// The segmentation minus its dots must have exactly the character count of
/// `original`; the analyzer guarantees this for every valid result.
pub fn restore_capitals(original: &str, analyzed: &str) -> String {
    let original_chars: Vec<char> = original.chars().collect();
    let mut out = String::with_capacity(analyzed.len());
    let mut index = 0;
    for ch in analyzed.chars() {
        if ch == '.' {
            out.push(ch);
        } else if let Some(&orig) = original_chars.get(index) {
            out.push(orig);
            index += 1;
        } else {
            out.push(ch);
        }
    }
    out
}
