//! Locale and layout direction (Value Objects)

use crate::core::error::DomainError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Layout direction derived from the locale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    #[default]
    LeftToRight,
    RightToLeft,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::LeftToRight => "ltr",
            Direction::RightToLeft => "rtl",
        }
    }

    pub fn is_rtl(&self) -> bool {
        matches!(self, Direction::RightToLeft)
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Supported locales (closed set)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Ar,
    De,
}

impl Locale {
    /// Switcher order
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Ar, Locale::De];

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::En => "EN",
            Locale::Ar => "AR",
            Locale::De => "DE",
        }
    }

    /// Name of the language in that language
    pub fn native_name(&self) -> &'static str {
        match self {
            Locale::En => "English",
            Locale::Ar => "العربية",
            Locale::De => "Deutsch",
        }
    }

    pub fn direction(&self) -> Direction {
        match self {
            Locale::Ar => Direction::RightToLeft,
            Locale::En | Locale::De => Direction::LeftToRight,
        }
    }

    /// Position in [`Locale::ALL`], used for O(1) catalog lookup
    pub(crate) fn index(&self) -> usize {
        match self {
            Locale::En => 0,
            Locale::Ar => 1,
            Locale::De => 2,
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = DomainError;

    /// Case-insensitive; region tags such as `ar-EG` or `de_DE` are accepted.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        let lang = normalized.split(['-', '_']).next().unwrap_or("");
        match lang {
            "en" => Ok(Locale::En),
            "ar" => Ok(Locale::Ar),
            "de" => Ok(Locale::De),
            _ => Err(DomainError::UnsupportedLocale(s.to_string())),
        }
    }
}

impl Serialize for Locale {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
