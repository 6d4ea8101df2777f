use crate::word::Word;
use std::collections::BTreeSet;
use std::fmt;

/// Three-tier classification of one guessed letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterMark {
    /// Same letter at the same position in the secret.
    Exact,
    /// Letter occurs somewhere in the secret.
    Present,
    Absent,
}

/// Feedback for one accepted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessResult {
    word: Word,
    letter_present: BTreeSet<char>,
    position_correct: Vec<bool>,
}

impl GuessResult {
    /// Evaluates `guess` against `secret`.
    ///
    /// Presence is letter existence only: a letter guessed twice but present
    /// once in the secret is reported present for both occurrences.
    pub fn evaluate(guess: &Word, secret: &Word) -> Self {
        let position_correct = guess
            .chars()
            .zip(secret.chars())
            .map(|(g, s)| g == s)
            .collect();
        let letter_present = guess.chars().filter(|&c| secret.contains(c)).collect();
        Self {
            word: guess.clone(),
            letter_present,
            position_correct,
        }
    }

    pub fn word(&self) -> &Word {
        &self.word
    }

    pub fn letter_present(&self) -> &BTreeSet<char> {
        &self.letter_present
    }

    pub fn position_correct(&self) -> &[bool] {
        &self.position_correct
    }

    /// True when every position matches.
    pub fn is_correct(&self) -> bool {
        self.position_correct.iter().all(|&ok| ok)
    }

    pub fn mark_at(&self, index: usize) -> Option<LetterMark> {
        let letter = self.word.chars().nth(index)?;
        let exact = *self.position_correct.get(index)?;
        Some(self.classify(letter, exact))
    }

    /// Letters of the guess with their marks, in guess order.
    pub fn marks(&self) -> impl Iterator<Item = (char, LetterMark)> + '_ {
        self.word
            .chars()
            .zip(self.position_correct.iter())
            .map(|(letter, &exact)| (letter, self.classify(letter, exact)))
    }

    fn classify(&self, letter: char, exact: bool) -> LetterMark {
        if exact {
            LetterMark::Exact
        } else if self.letter_present.contains(&letter) {
            LetterMark::Present
        } else {
            LetterMark::Absent
        }
    }
}

/// Plain-text board: `[з]` exact, `(з)` present, ` з ` absent.
impl fmt::Display for GuessResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (letter, mark)) in self.marks().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match mark {
                LetterMark::Exact => write!(f, "[{letter}]")?,
                LetterMark::Present => write!(f, "({letter})")?,
                LetterMark::Absent => write!(f, " {letter} ")?,
            }
        }
        Ok(())
    }
}
