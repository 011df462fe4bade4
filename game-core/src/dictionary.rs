use crate::Word;
use rand::Rng;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Word list compiled into the binary
pub const EMBEDDED_WORDS: &str = include_str!("../words/words.txt");

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("dictionary contains no valid five letter words")]
    Empty,
    #[error("failed to read word list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Immutable vocabulary used both to draw secrets and to accept guesses
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<Word>,
    index: HashSet<Word>,
}

impl Dictionary {
    /// Build a dictionary from a newline separated word list.
    /// Blank lines and `#` comments are ignored; entries that are not five
    /// letters are skipped.
    pub fn new(word_list: &str) -> Result<Self, DictionaryError> {
        let entries = word_list
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        Self::from_words(entries)
    }

    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut ordered = Vec::new();
        let mut index = HashSet::new();

        for entry in words {
            let entry = entry.as_ref();
            match Word::parse(entry) {
                Ok(word) => {
                    if index.insert(word) {
                        ordered.push(word);
                    }
                }
                Err(err) => warn!("Skipping dictionary entry {:?}: {}", entry, err),
            }
        }

        if ordered.is_empty() {
            return Err(DictionaryError::Empty);
        }

        debug!("Loaded dictionary with {} words", ordered.len());
        Ok(Self {
            words: ordered,
            index,
        })
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::new(&content)
    }

    /// The default vocabulary shipped with the crate
    pub fn embedded() -> Result<Self, DictionaryError> {
        Self::new(EMBEDDED_WORDS)
    }

    /// Case-insensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        Word::parse(word).is_ok_and(|w| self.contains_word(&w))
    }

    pub fn contains_word(&self, word: &Word) -> bool {
        self.index.contains(word)
    }

    /// Uniformly pick a secret using the thread-local RNG
    pub fn pick_random_secret(&self) -> Word {
        self.pick_random_secret_with(&mut rand::rng())
    }

    pub fn pick_random_secret_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Word {
        // Non-empty by construction
        self.words[rng.random_range(0..self.words.len())]
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; construction rejects empty word lists
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }
}
