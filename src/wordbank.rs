use crate::error::WordSourceError;
use crate::word::Word;
use rand::Rng;
use rand::seq::IndexedRandom;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/russian-5-w.txt");

/// Where a [`WordSource`] reads its words from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordOrigin {
    Embedded,
    Text(String),
    File(PathBuf),
}

/// Vocabulary of secret words, read once and cached for the lifetime of the value.
#[derive(Debug)]
pub struct WordSource {
    origin: WordOrigin,
    words: OnceLock<Vec<Word>>,
}

impl WordSource {
    pub fn new(origin: WordOrigin) -> Self {
        Self {
            origin,
            words: OnceLock::new(),
        }
    }

    pub fn embedded() -> Self {
        Self::new(WordOrigin::Embedded)
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(WordOrigin::Text(text.into()))
    }

    pub fn origin(&self) -> &WordOrigin {
        &self.origin
    }

    /// Reads the vocabulary on first call; later calls return the cached list.
    pub fn load(&self) -> Result<&[Word], WordSourceError> {
        if let Some(words) = self.words.get() {
            return Ok(words.as_slice());
        }
        let words = match &self.origin {
            WordOrigin::Embedded => load_wordbank_from_str(EMBEDDED_WORDBANK),
            WordOrigin::Text(text) => load_wordbank_from_str(text),
            WordOrigin::File(path) => load_wordbank_from_file(path)?,
        };
        if words.is_empty() {
            return Err(WordSourceError::Empty);
        }
        log::info!("Loaded {} words from {:?}", words.len(), self.origin);
        Ok(self.words.get_or_init(|| words).as_slice())
    }

    /// Picks a word uniformly at random. Requires a successful [`load`](Self::load).
    pub fn random_word<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Word, WordSourceError> {
        let words = self.words.get().ok_or(WordSourceError::NotLoaded)?;
        words.choose(rng).cloned().ok_or(WordSourceError::Empty)
    }
}

/// Normalizes each line and keeps the ones that form a valid [`Word`].
pub fn load_wordbank_from_str(data: &str) -> Vec<Word> {
    let mut rejected = 0usize;
    let words: Vec<Word> = data
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| match Word::parse(line) {
            Ok(word) => Some(word),
            Err(_) => {
                rejected += 1;
                None
            }
        })
        .collect();
    if rejected > 0 {
        log::warn!("Skipped {rejected} malformed vocabulary lines");
    }
    words
}

pub fn load_wordbank_from_file(path: &Path) -> Result<Vec<Word>, WordSourceError> {
    let data = fs::read_to_string(path).map_err(|source| WordSourceError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(load_wordbank_from_str(&data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Write;

    #[test]
    fn test_load_from_str_normalizes_lines() {
        let words = load_wordbank_from_str("  ЗАБОР \nигрок\n\n книга");
        let words: Vec<&str> = words.iter().map(Word::as_str).collect();
        assert_eq!(words, vec!["забор", "игрок", "книга"]);
    }

    #[test]
    fn test_load_from_str_skips_malformed_lines() {
        let words = load_wordbank_from_str("забор\nдом\ncrane\nслово1\nслово");
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_embedded_wordbank_is_usable() {
        let source = WordSource::embedded();
        let words = source.load().unwrap();
        assert!(words.len() > 100);
        assert_eq!(
            load_wordbank_from_str(EMBEDDED_WORDBANK).len(),
            EMBEDDED_WORDBANK.lines().filter(|l| !l.trim().is_empty()).count(),
            "embedded list should not contain malformed lines"
        );
    }

    #[test]
    fn test_random_word_requires_load() {
        let source = WordSource::from_text("забор");
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            source.random_word(&mut rng),
            Err(WordSourceError::NotLoaded)
        ));
        source.load().unwrap();
        assert_eq!(source.random_word(&mut rng).unwrap().as_str(), "забор");
    }

    #[test]
    fn test_empty_source_is_unavailable() {
        let source = WordSource::from_text("\n  \nдом\n");
        assert!(matches!(source.load(), Err(WordSourceError::Empty)));
        let mut rng = StdRng::seed_from_u64(1);
        assert!(matches!(
            source.random_word(&mut rng),
            Err(WordSourceError::NotLoaded)
        ));
    }

    #[test]
    fn test_missing_file_is_unavailable() {
        let source = WordSource::new(WordOrigin::File(PathBuf::from(
            "/nonexistent/wordle-chat/words.txt",
        )));
        assert!(matches!(
            source.load(),
            Err(WordSourceError::Unreadable { .. })
        ));
    }

    #[test]
    fn test_load_is_cached() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "забор").unwrap();
        writeln!(file, "игрок").unwrap();
        let path = file.path().to_path_buf();

        let source = WordSource::new(WordOrigin::File(path.clone()));
        assert_eq!(source.load().unwrap().len(), 2);

        // The file is gone but the cached vocabulary stays
        drop(file);
        assert!(!path.exists());
        assert_eq!(source.load().unwrap().len(), 2);
    }

    #[test]
    fn test_random_word_comes_from_vocabulary() {
        let source = WordSource::from_text("забор\nигрок\nкнига");
        let words = source.load().unwrap().to_vec();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let word = source.random_word(&mut rng).unwrap();
            assert!(words.contains(&word));
        }
    }
}
