use crate::error::GameError;
use std::fmt;

pub const WORD_LENGTH: usize = 5;

/// Russian lowercase letters, `ё` included.
pub const RUSSIAN_ALPHABET: &str = "абвгдеёжзийклмнопрстуфхцчшщъыьэюя";

pub fn is_alphabet_letter(c: char) -> bool {
    RUSSIAN_ALPHABET.contains(c)
}

/// A validated, lowercase word of exactly [`WORD_LENGTH`] alphabet letters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word(String);

impl Word {
    /// Lowercases `raw` and checks its length, then its alphabet.
    ///
    /// Length is counted in characters; Cyrillic letters are two bytes each in UTF-8.
    pub fn parse(raw: &str) -> Result<Self, GameError> {
        let normalized = raw.to_lowercase();
        let got = normalized.chars().count();
        if got != WORD_LENGTH {
            return Err(GameError::WordLengthMismatch {
                got,
                expected: WORD_LENGTH,
            });
        }
        if !normalized.chars().all(is_alphabet_letter) {
            return Err(GameError::InvalidAlphabet { word: normalized });
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    pub fn contains(&self, letter: char) -> bool {
        self.0.contains(letter)
    }

    pub fn to_uppercase(&self) -> String {
        self.0.to_uppercase()
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercases() {
        let word = Word::parse("ЗаБоР").unwrap();
        assert_eq!(word.as_str(), "забор");
    }

    #[test]
    fn test_parse_counts_chars_not_bytes() {
        // "ёжик" is 4 letters but 8 bytes
        assert_eq!(
            Word::parse("ёжик"),
            Err(GameError::WordLengthMismatch {
                got: 4,
                expected: 5
            })
        );
        assert!(Word::parse("ёжики").is_ok());
    }

    #[test]
    fn test_parse_checks_length_before_alphabet() {
        assert_eq!(
            Word::parse("abc"),
            Err(GameError::WordLengthMismatch {
                got: 3,
                expected: 5
            })
        );
    }

    #[test]
    fn test_parse_rejects_latin_and_digits() {
        assert!(matches!(
            Word::parse("zabor"),
            Err(GameError::InvalidAlphabet { .. })
        ));
        assert!(matches!(
            Word::parse("забо1"),
            Err(GameError::InvalidAlphabet { .. })
        ));
        // Latin 'o' hidden among Cyrillic letters
        assert!(matches!(
            Word::parse("забoр"),
            Err(GameError::InvalidAlphabet { .. })
        ));
    }

    #[test]
    fn test_parse_rejects_whitespace_inside_length() {
        assert!(matches!(
            Word::parse("за ор"),
            Err(GameError::InvalidAlphabet { .. })
        ));
    }

    #[test]
    fn test_alphabet_has_33_letters() {
        assert_eq!(RUSSIAN_ALPHABET.chars().count(), 33);
        assert!(is_alphabet_letter('ё'));
        assert!(!is_alphabet_letter('Я'));
    }
}
