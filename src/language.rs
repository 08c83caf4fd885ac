//! Supported languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LangsegError, Result};

/// A language family with its own segmentation backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Japanese,
    Korean,
    Thai,
}

impl Language {
    /// Every supported language, in slot order.
    pub const ALL: [Language; 3] = [Language::Japanese, Language::Korean, Language::Thai];

    /// Dense index used for per-language slots.
    pub fn index(self) -> usize {
        match self {
            Language::Japanese => 0,
            Language::Korean => 1,
            Language::Thai => 2,
        }
    }

    /// Short code used for batch result prefixes and environment overrides.
    pub fn code(self) -> &'static str {
        match self {
            Language::Japanese => "jp",
            Language::Korean => "ko",
            Language::Thai => "th",
        }
    }

    /// Lowercase display name.
    pub fn name(self) -> &'static str {
        match self {
            Language::Japanese => "japanese",
            Language::Korean => "korean",
            Language::Thai => "thai",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Language {
    type Err = LangsegError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ja" | "jp" | "jpn" | "japanese" => Ok(Language::Japanese),
            "ko" | "kr" | "kor" | "korean" => Ok(Language::Korean),
            "th" | "tha" | "thai" => Ok(Language::Thai),
            other => Err(LangsegError::invalid_argument(format!(
                "unsupported language '{other}'"
            ))),
        }
    }
}
