use crate::error::{PlainsightError, PsResult};
use std::collections::HashMap;
use std::fmt;

/// The ordered character set shared by ciphertext, plaintext, mappings and
/// the language model. Positions are assigned in the order the characters
/// appear in the source string; the char -> position lookup is built once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Vec<char>,
    positions: HashMap<char, usize>,
}

impl Alphabet {
    /// Parses an alphabet string. Duplicates and alphabets shorter than 2
    /// characters are rejected.
    pub fn parse(s: &str) -> PsResult<Self> {
        let mut chars = Vec::new();
        let mut positions = HashMap::new();
        for c in s.chars() {
            if positions.insert(c, chars.len()).is_some() {
                return Err(PlainsightError::DuplicateAlphabetChar(c));
            }
            chars.push(c);
        }
        if chars.len() < 2 {
            return Err(PlainsightError::AlphabetTooSmall(chars.len()));
        }
        Ok(Self { chars, positions })
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn position(&self, c: char) -> Option<usize> {
        self.positions.get(&c).copied()
    }

    /// Like `position`, but unknown characters become `OutOfAlphabet`.
    pub fn require(&self, c: char) -> PsResult<usize> {
        self.position(c).ok_or(PlainsightError::OutOfAlphabet(c))
    }

    pub fn contains(&self, c: char) -> bool {
        self.positions.contains_key(&c)
    }

    pub fn char_at(&self, idx: usize) -> char {
        self.chars[idx]
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }

    /// Maps a text to alphabet positions, failing on the first character
    /// outside the alphabet.
    pub fn index_text(&self, text: &str) -> PsResult<Vec<usize>> {
        text.chars().map(|c| self.require(c)).collect()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.chars {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}
