//! Orthography: the permitted letters, the vowels and the hyphen.
//!
//! An [`Orthography`] is shared by the tokenizer (which letters make up a
//! token) and the validator (alphabet closure, vowel presence, boundary
//! hyphen). The default is the Khakas Cyrillic alphabet.
//!
//! ```
//! use khakas_spelldict::orthography::Orthography;
//!
//! let khakas = Orthography::khakas();
//! assert!(khakas.is_letter('ӧ'));
//! assert!(khakas.is_letter('-'));
//! assert!(khakas.is_vowel('ӱ'));
//! assert!(!khakas.is_vowel('ғ'));
//! ```

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SpellDictError};

/// Khakas letters plus the hyphen.
pub const KHAKAS_ALPHABET: &str = "абвгдежзийклмнопрстуфхцчшщъыьэюяёіғңҷӧӱ-";

/// Khakas vowels.
pub const KHAKAS_VOWELS: &str = "аеиоуыэюяёіӧӱ";

/// The hyphen joining compound words.
pub const HYPHEN: char = '-';

/// Letter, vowel and hyphen sets for one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "OrthographySpec", into = "OrthographySpec")]
pub struct Orthography {
    alphabet: BTreeSet<char>,
    vowels: BTreeSet<char>,
    hyphen: char,
}

/// Serialized form of an [`Orthography`]: plain strings, as written in a
/// config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrthographySpec {
    /// Every permitted character, hyphen included.
    pub alphabet: String,
    /// Characters counted as vowels. Must be a subset of the alphabet.
    pub vowels: String,
    /// Hyphen character. Must be part of the alphabet.
    #[serde(default = "default_hyphen")]
    pub hyphen: char,
}

fn default_hyphen() -> char {
    HYPHEN
}

impl Orthography {
    /// Build an orthography from its alphabet and vowel strings.
    ///
    /// Fails when the alphabet is empty, does not contain the hyphen,
    /// contains characters that change under lowercasing, or when a vowel is
    /// missing from the alphabet.
    pub fn new(alphabet: &str, vowels: &str, hyphen: char) -> Result<Self> {
        let alphabet: BTreeSet<char> = alphabet.chars().collect();
        let vowels: BTreeSet<char> = vowels.chars().collect();

        if alphabet.is_empty() {
            return Err(SpellDictError::invalid_config("alphabet is empty"));
        }
        if vowels.is_empty() {
            return Err(SpellDictError::invalid_config("vowel set is empty"));
        }
        if !alphabet.contains(&hyphen) {
            return Err(SpellDictError::invalid_config(format!(
                "alphabet does not contain the hyphen '{hyphen}'"
            )));
        }
        if let Some(c) = alphabet.iter().find(|c| !is_lowercase_stable(**c)) {
            return Err(SpellDictError::invalid_config(format!(
                "alphabet character '{c}' is not lowercase"
            )));
        }
        if let Some(v) = vowels.iter().find(|v| !alphabet.contains(v)) {
            return Err(SpellDictError::invalid_config(format!(
                "vowel '{v}' is not part of the alphabet"
            )));
        }

        Ok(Orthography {
            alphabet,
            vowels,
            hyphen,
        })
    }

    /// The Khakas orthography.
    pub fn khakas() -> Self {
        Orthography {
            alphabet: KHAKAS_ALPHABET.chars().collect(),
            vowels: KHAKAS_VOWELS.chars().collect(),
            hyphen: HYPHEN,
        }
    }

    pub fn is_letter(&self, c: char) -> bool {
        self.alphabet.contains(&c)
    }

    pub fn is_vowel(&self, c: char) -> bool {
        self.vowels.contains(&c)
    }

    pub fn hyphen(&self) -> char {
        self.hyphen
    }

    /// Permitted characters in ascending code point order.
    pub fn alphabet(&self) -> impl Iterator<Item = char> + '_ {
        self.alphabet.iter().copied()
    }

    pub fn vowels(&self) -> impl Iterator<Item = char> + '_ {
        self.vowels.iter().copied()
    }
}

impl Default for Orthography {
    fn default() -> Self {
        Self::khakas()
    }
}

impl TryFrom<OrthographySpec> for Orthography {
    type Error = SpellDictError;

    fn try_from(spec: OrthographySpec) -> Result<Self> {
        Orthography::new(&spec.alphabet, &spec.vowels, spec.hyphen)
    }
}

impl From<Orthography> for OrthographySpec {
    fn from(orthography: Orthography) -> Self {
        OrthographySpec {
            alphabet: orthography.alphabet.iter().collect(),
            vowels: orthography.vowels.iter().collect(),
            hyphen: orthography.hyphen,
        }
    }
}

fn is_lowercase_stable(c: char) -> bool {
    let mut lower = c.to_lowercase();
    lower.next() == Some(c) && lower.next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_khakas_sets() {
        let o = Orthography::khakas();
        for c in "ғңҷӧӱі".chars() {
            assert!(o.is_letter(c), "{c} should be a letter");
        }
        assert!(!o.is_letter('a')); // latin
        assert!(!o.is_letter('1'));
        assert!(o.is_vowel('а'));
        assert!(!o.is_vowel('-'));
        assert_eq!(o.hyphen(), '-');
        assert_eq!(o, Orthography::default());
    }

    #[test]
    fn test_new_rejects_bad_input() {
        assert!(Orthography::new("", "а", '-').is_err());
        assert!(Orthography::new("аб-", "", '-').is_err());
        assert!(Orthography::new("аб", "а", '-').is_err());
        assert!(Orthography::new("аБ-", "а", '-').is_err());
        assert!(Orthography::new("аб-", "о", '-').is_err());
        assert!(Orthography::new("аб-", "а", '-').is_ok());
    }

    #[test]
    fn test_serde_uses_plain_strings() {
        let o = Orthography::new("ба-", "а", '-').unwrap();
        let json = serde_json::to_string(&o).unwrap();
        assert_eq!(json, r#"{"alphabet":"-аб","vowels":"а","hyphen":"-"}"#);

        let back: Orthography = serde_json::from_str(&json).unwrap();
        assert_eq!(back, o);

        let missing_hyphen = serde_json::from_str::<Orthography>(r#"{"alphabet":"аб","vowels":"а"}"#);
        assert!(missing_hyphen.is_err());
    }
}
