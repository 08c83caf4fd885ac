//! Segmenter configuration.
//!
//! A [`SegmenterConfig`] selects the profile for each language and points
//! the analyzers at their resources. Every field has a default, so an empty
//! JSON object is a valid configuration:
//!
//! ```json
//! {
//!   "japanese": { "profile": "complete", "stopwords_path": "ja_stop.txt" },
//!   "korean": { "user_dictionary": "ko_user.csv" },
//!   "results_dir": "/var/lib/langseg"
//! }
//! ```
//!
//! [`SegmenterConfig::from_env`] reads the file named by `LANGSEG_CONFIG`
//! (if set) and then applies `LANGSEG_JP_PROFILE`, `LANGSEG_KO_PROFILE` and
//! `LANGSEG_TH_PROFILE` overrides.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::error::{LangsegError, Result};
use crate::language::Language;
use crate::profile::ProfileName;

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV: &str = "LANGSEG_CONFIG";

pub const IPADIC_URI: &str = "embedded://ipadic";
pub const KO_DIC_URI: &str = "embedded://ko-dic";

/// Per-language analyzer settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LanguageConfig {
    /// Which filter chain to build.
    pub profile: ProfileName,

    /// Dictionary URI for the dictionary-backed analyzers. Ignored for Thai.
    pub dictionary: Option<String>,

    /// Optional user dictionary URI. Ignored for Thai.
    pub user_dictionary: Option<String>,

    /// Lindera segmentation mode (`normal` or `decompose`). Ignored for Thai.
    pub mode: String,

    /// Stopword file replacing the builtin list of the stopword stage.
    pub stopwords_path: Option<PathBuf>,
}

impl Default for LanguageConfig {
    fn default() -> Self {
        LanguageConfig {
            profile: ProfileName::Default,
            dictionary: None,
            user_dictionary: None,
            mode: "normal".to_string(),
            stopwords_path: None,
        }
    }
}

impl LanguageConfig {
    /// Config with the given profile and defaults elsewhere.
    pub fn with_profile(profile: ProfileName) -> Self {
        LanguageConfig {
            profile,
            ..Default::default()
        }
    }

    /// The dictionary URI to load, falling back to the embedded dictionary
    /// of `language`.
    pub fn dictionary_uri(&self, language: Language) -> Option<&str> {
        match (&self.dictionary, language) {
            (Some(uri), Language::Japanese | Language::Korean) => Some(uri.as_str()),
            (None, Language::Japanese) => Some(IPADIC_URI),
            (None, Language::Korean) => Some(KO_DIC_URI),
            (_, Language::Thai) => None,
        }
    }
}

/// Configuration for every language plus batch defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmenterConfig {
    pub japanese: LanguageConfig,
    pub korean: LanguageConfig,
    pub thai: LanguageConfig,

    /// Parent directory for batch result directories. Defaults to the
    /// current working directory.
    pub results_dir: Option<PathBuf>,
}

impl SegmenterConfig {
    pub fn for_language(&self, language: Language) -> &LanguageConfig {
        match language {
            Language::Japanese => &self.japanese,
            Language::Korean => &self.korean,
            Language::Thai => &self.thai,
        }
    }

    pub fn for_language_mut(&mut self, language: Language) -> &mut LanguageConfig {
        match language {
            Language::Japanese => &mut self.japanese,
            Language::Korean => &mut self.korean,
            Language::Thai => &mut self.thai,
        }
    }

    /// Select `profile` for every language.
    pub fn with_profile(mut self, profile: ProfileName) -> Self {
        for language in Language::ALL {
            self.for_language_mut(language).profile = profile;
        }
        self
    }

    /// Load a configuration from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LangsegError::config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("invalid configuration in {}", path.display()))?;
        Ok(config)
    }

    /// Load the configuration from the environment.
    pub fn from_env() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::from_file(PathBuf::from(path))?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Apply `LANGSEG_<CODE>_PROFILE` overrides read through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        for language in Language::ALL {
            let key = format!("LANGSEG_{}_PROFILE", language.code().to_ascii_uppercase());
            if let Some(value) = lookup(&key) {
                self.for_language_mut(language).profile = value.parse()?;
            }
        }
        Ok(())
    }
}
