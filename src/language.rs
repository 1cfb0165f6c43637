//! Closed set of target languages.
//!
//! This module is the single source of truth for language tokens: a stable identifier ([`Language`]) plus a
//! const metadata table ([`LANGUAGES`]) that records canonical spellings and display names. Each tag maps to a
//! statically allocated generator; there is no lookup by type name.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact.
//!
//! ## Examples
//! ```rust
//! use tester::language::{self, Language};
//!
//! assert_eq!(language::from_str("haskell"), Some(Language::Haskell));
//! assert_eq!(Language::Gobstones.as_str(), "gobstones");
//! assert!(!Language::Gobstones.generator().supports_grouped_examples());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::TesterError;
use crate::generators::{Gobstones, Haskell, JavaScript, TestGenerator};

/// Stable identifier for every supported output language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Haskell,
    JavaScript,
    Gobstones,
}

/// Metadata for one registered language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageInfo {
    pub id: Language,
    /// Token accepted by [`from_str`] and the dispatcher.
    pub canonical: &'static str,
    pub display_name: &'static str,
}

/// Registry of every supported language, in listing order.
pub const LANGUAGES: &[LanguageInfo] = &[
    LanguageInfo {
        id: Language::Haskell,
        canonical: "haskell",
        display_name: "Haskell",
    },
    LanguageInfo {
        id: Language::JavaScript,
        canonical: "javascript",
        display_name: "JavaScript",
    },
    LanguageInfo {
        id: Language::Gobstones,
        canonical: "gobstones",
        display_name: "Gobstones",
    },
];

static HASKELL: Haskell = Haskell;
static JAVASCRIPT: JavaScript = JavaScript;
static GOBSTONES: Gobstones = Gobstones;

/// Resolve a language token.
pub fn from_str(token: &str) -> Option<Language> {
    LANGUAGES.iter().find(|info| info.canonical == token).map(|info| info.id)
}

/// Every accepted token, in registry order.
pub fn known_tokens() -> Vec<&'static str> {
    LANGUAGES.iter().map(|info| info.canonical).collect()
}

impl Language {
    pub fn info(self) -> &'static LanguageInfo {
        match self {
            Language::Haskell => &LANGUAGES[0],
            Language::JavaScript => &LANGUAGES[1],
            Language::Gobstones => &LANGUAGES[2],
        }
    }

    pub fn as_str(self) -> &'static str {
        self.info().canonical
    }

    pub fn display_name(self) -> &'static str {
        self.info().display_name
    }

    /// The generator registered for this language.
    pub fn generator(self) -> &'static dyn TestGenerator {
        match self {
            Language::Haskell => &HASKELL,
            Language::JavaScript => &JAVASCRIPT,
            Language::Gobstones => &GOBSTONES,
        }
    }
}

impl FromStr for Language {
    type Err = TesterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        from_str(s).ok_or_else(|| TesterError::unknown_language(s))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_registry_tokens_unique_and_resolvable() {
        let mut seen = HashSet::new();
        for info in LANGUAGES {
            assert!(seen.insert(info.canonical), "duplicate token {}", info.canonical);
            assert_eq!(from_str(info.canonical), Some(info.id));
            assert_eq!(info.id.info(), info);
            assert_eq!(info.id.as_str(), info.canonical);
        }
    }

    #[test]
    fn test_generator_matches_its_tag() {
        for info in LANGUAGES {
            assert_eq!(info.id.generator().language(), info.id);
        }
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(from_str("Haskell"), None);
        assert_eq!(from_str("js"), None);
        assert_eq!(from_str(""), None);
    }

    #[test]
    fn test_parse_unknown_language() {
        let err = "cobol".parse::<Language>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unknown language `cobol` (expected one of: haskell, javascript, gobstones)"
        );
    }

    #[test]
    fn test_capability_flags() {
        assert!(Language::Haskell.generator().supports_grouped_examples());
        assert!(Language::JavaScript.generator().supports_grouped_examples());
        assert!(!Language::Gobstones.generator().supports_grouped_examples());
    }

    #[test]
    fn test_display_uses_token() {
        assert_eq!(Language::JavaScript.to_string(), "javascript");
        assert_eq!(Language::JavaScript.display_name(), "JavaScript");
    }
}
