// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only

//! Message normalization.
//!
//! Messages are uppercased, stripped of punctuation and have their spaces
//! replaced by [`SPACE_MARKER`] before embedding. This keeps every
//! character close to [`CHAR_OFFSET`](crate::stego::pixel::CHAR_OFFSET) on
//! the code-point line, so the per-pixel change stays small.

use once_cell::sync::Lazy;
use regex::Regex;

/// Stand-in for a literal space while the message is embedded.
///
/// `@` is itself punctuation, so a literal `@` in the input is stripped by
/// [`normalize`] and a decoded `@` always means a space.
pub const SPACE_MARKER: char = '@';

/// Unicode general category P. ASCII symbols such as `$`, `+` or `~` are
/// category S and survive.
static PUNCTUATION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\p{P}").unwrap());

/// Returns `true` for characters removed by [`normalize`].
pub fn is_punctuation(c: char) -> bool {
    let mut buf = [0u8; 4];
    PUNCTUATION.is_match(c.encode_utf8(&mut buf))
}

/// Uppercase, strip punctuation, and replace spaces with [`SPACE_MARKER`].
pub fn normalize(message: &str) -> String {
    let upper: String = message.chars().flat_map(char::to_uppercase).collect();
    PUNCTUATION
        .replace_all(&upper, "")
        .chars()
        .map(|c| if c == ' ' { SPACE_MARKER } else { c })
        .collect()
}

/// Turn a decoded [`SPACE_MARKER`] back into a space.
pub fn restore_space(c: char) -> char {
    if c == SPACE_MARKER {
        ' '
    } else {
        c
    }
}

/// The text [`decode`](crate::stego::decode) returns for `message`:
/// normalized, with markers turned back into spaces.
pub fn expected_plaintext(message: &str) -> String {
    normalize(message).chars().map(restore_space).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_and_marks_spaces() {
        assert_eq!(normalize("a b"), "A@B");
        assert_eq!(normalize("Hi"), "HI");
    }

    #[test]
    fn strips_punctuation() {
        assert_eq!(normalize("Hello there!"), "HELLO@THERE");
        assert_eq!(normalize("it's 5 o'clock, @home?"), "ITS@5@OCLOCK@HOME");
        assert_eq!(normalize("“quoted” — ok…"), "QUOTED@@OK");
    }

    #[test]
    fn strips_non_latin_punctuation() {
        assert_eq!(normalize("hi！"), "HI");
        assert_eq!(normalize("HI。"), "HI");
        assert_eq!(normalize("「x」"), "X");
        assert_eq!(normalize("،"), "");
        assert_eq!(normalize("HI、 ⸮"), "HI@");
        assert!(is_punctuation('¿'));
        assert!(!is_punctuation('€'));
    }

    #[test]
    fn symbols_kept() {
        assert_eq!(normalize("1+1=2 $5 ~x"), "1+1=2@$5@~X");
    }

    #[test]
    fn uppercase_may_expand() {
        assert_eq!(normalize("straße"), "STRASSE");
    }

    #[test]
    fn expected_plaintext_restores_spaces() {
        assert_eq!(expected_plaintext("a b, c!"), "A B C");
        assert_eq!(expected_plaintext(""), "");
    }
}
