use crate::error::{Error, Result};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

pub const EMBEDDED_WORDBANK: &str = include_str!("resources/words.txt");

/// Source of target words, one per round.
///
/// Words must be non-empty and made only of `a..=z`; anything else would
/// give a round that is won before any guess or can never be won.
/// No guarantee is made that consecutive rounds get different words.
pub trait WordProvider {
    fn random_word(&mut self) -> String;
}

impl<F: FnMut() -> String> WordProvider for F {
    fn random_word(&mut self) -> String {
        self()
    }
}

/// Whether `word` can be used as a target.
#[must_use]
pub fn is_playable_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_lowercase())
}

fn normalize(line: &str) -> Option<String> {
    let word = line.trim().to_lowercase();
    is_playable_word(&word).then_some(word)
}

pub fn load_wordbank_from_str(data: &str) -> Vec<String> {
    data.lines().filter_map(normalize).collect()
}

pub fn load_wordbank_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut words = Vec::new();
    for line in reader.lines() {
        if let Some(word) = normalize(&line?) {
            words.push(word);
        }
    }
    Ok(words)
}

/// A fixed corpus of lowercase words with its own RNG.
#[derive(Debug, Clone)]
pub struct Wordbank {
    words: Vec<String>,
    rng: StdRng,
}

impl Wordbank {
    /// Wordbank seeded from the operating system.
    pub fn new(words: Vec<String>) -> Result<Self> {
        Self::with_rng(words, StdRng::from_os_rng())
    }

    /// Wordbank with a fixed seed, so the same sequence of words comes out every run.
    pub fn seeded(words: Vec<String>, seed: u64) -> Result<Self> {
        Self::with_rng(words, StdRng::seed_from_u64(seed))
    }

    fn with_rng(words: Vec<String>, rng: StdRng) -> Result<Self> {
        if words.is_empty() {
            return Err(Error::EmptyWordbank);
        }
        Ok(Self { words, rng })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }
}

impl WordProvider for Wordbank {
    fn random_word(&mut self) -> String {
        // words is non-empty by construction
        self.words
            .choose(&mut self.rng)
            .cloned()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_wordbank_from_str_lowercases_and_trims() {
        let words = load_wordbank_from_str("  React \nRUST\ngo\n");
        assert_eq!(words, vec!["react", "rust", "go"]);
    }

    #[test]
    fn test_load_wordbank_from_str_drops_invalid_lines() {
        let words = load_wordbank_from_str("c++\n\nnode.js\nkotlin\n  \nc3po\n");
        assert_eq!(words, vec!["kotlin"]);
    }

    #[test]
    fn test_embedded_wordbank_is_playable() {
        let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
        assert!(words.len() > 100);
        assert!(words.iter().all(|w| w.chars().all(|c| c.is_ascii_lowercase())));
    }

    #[test]
    fn test_load_wordbank_from_file() {
        let path = std::env::temp_dir().join("assembly_endgame_wordbank_unit.txt");
        {
            let mut file = File::create(&path).unwrap();
            writeln!(file, "Haskell").unwrap();
            writeln!(file, "f#").unwrap();
            writeln!(file, "elixir").unwrap();
        }
        let words = load_wordbank_from_file(&path).unwrap();
        assert_eq!(words, vec!["haskell", "elixir"]);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_wordbank_from_missing_file() {
        let result = load_wordbank_from_file("/nonexistent/assembly_endgame/words.txt");
        assert!(matches!(result, Err(Error::Io(_))));
    }

    #[test]
    fn test_empty_wordbank_rejected() {
        assert!(matches!(Wordbank::new(Vec::new()), Err(Error::EmptyWordbank)));
        assert!(matches!(
            Wordbank::seeded(Vec::new(), 7),
            Err(Error::EmptyWordbank)
        ));
    }

    #[test]
    fn test_random_word_comes_from_corpus() {
        let words = load_wordbank_from_str("alpha\nbeta\ngamma\n");
        let mut bank = Wordbank::new(words.clone()).unwrap();
        for _ in 0..20 {
            assert!(words.contains(&bank.random_word()));
        }
    }

    #[test]
    fn test_seeded_wordbank_is_deterministic() {
        let words = load_wordbank_from_str(EMBEDDED_WORDBANK);
        let mut a = Wordbank::seeded(words.clone(), 42).unwrap();
        let mut b = Wordbank::seeded(words, 42).unwrap();
        let first: Vec<String> = (0..10).map(|_| a.random_word()).collect();
        let second: Vec<String> = (0..10).map(|_| b.random_word()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_closure_is_a_word_provider() {
        let mut words = vec!["rust", "go"].into_iter();
        let mut provider = move || words.next().unwrap_or("zig").to_string();
        assert_eq!(provider.random_word(), "rust");
        assert_eq!(provider.random_word(), "go");
        assert_eq!(provider.random_word(), "zig");
    }

    #[test]
    fn test_is_playable_word() {
        assert!(is_playable_word("react"));
        assert!(!is_playable_word(""));
        assert!(!is_playable_word("GO"));
        assert!(!is_playable_word("c++"));
    }

    #[test]
    fn test_single_word_bank_always_returns_it() {
        let mut bank = Wordbank::seeded(vec!["react".to_string()], 1).unwrap();
        assert_eq!(bank.random_word(), "react");
        assert_eq!(bank.random_word(), "react");
    }
}
