use crate::error::{Error, Result};

/// A 24-bit colour, kept independent of any rendering backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Language {
    pub name: String,
    pub background: Rgb,
    pub foreground: Rgb,
}

impl Language {
    pub fn new(name: impl Into<String>, background: Rgb, foreground: Rgb) -> Self {
        Self {
            name: name.into(),
            background,
            foreground,
        }
    }
}

const LIGHT: Rgb = Rgb(0xF9, 0xF4, 0xDA);
const DARK: Rgb = Rgb(0x1E, 0x1E, 0x1E);

const DEFAULT_LANGUAGES: [(&str, Rgb, Rgb); 9] = [
    ("HTML", Rgb(0xE2, 0x68, 0x0F), LIGHT),
    ("CSS", Rgb(0x32, 0x8A, 0xF1), LIGHT),
    ("JavaScript", Rgb(0xF4, 0xEB, 0x13), DARK),
    ("React", Rgb(0x2E, 0xD3, 0xE9), DARK),
    ("TypeScript", Rgb(0x29, 0x8E, 0xC6), LIGHT),
    ("Node.js", Rgb(0x59, 0x91, 0x37), LIGHT),
    ("Python", Rgb(0xFF, 0xD7, 0x42), DARK),
    ("Ruby", Rgb(0xD0, 0x2B, 0x2B), LIGHT),
    ("Assembly", Rgb(0x2D, 0x51, 0x9F), LIGHT),
];

/// Ordered list of languages. Every wrong guess costs one entry, from the
/// front; the last entry is the one the player is left with on a loss.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LanguageRoster {
    languages: Vec<Language>,
}

impl LanguageRoster {
    /// Builds a roster. At least two entries are needed, otherwise the
    /// player would have zero lives.
    pub fn new(languages: Vec<Language>) -> Result<Self> {
        if languages.len() < 2 {
            return Err(Error::RosterTooSmall {
                len: languages.len(),
            });
        }
        Ok(Self { languages })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.languages.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Number of wrong guesses tolerated before the round is lost.
    #[must_use]
    pub fn life_budget(&self) -> usize {
        self.languages.len() - 1
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Language> {
        self.languages.get(index)
    }

    /// The survivor of a lost round.
    #[must_use]
    pub fn last(&self) -> &Language {
        // non-empty by construction
        &self.languages[self.languages.len() - 1]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Language> {
        self.languages.iter()
    }
}

impl Default for LanguageRoster {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES
                .iter()
                .map(|&(name, bg, fg)| Language::new(name, bg, fg))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a LanguageRoster {
    type Item = &'a Language;
    type IntoIter = std::slice::Iter<'a, Language>;

    fn into_iter(self) -> Self::IntoIter {
        self.languages.iter()
    }
}
