//! Profile table.
//!
//! A profile is a named, ordered list of analysis stages for one language.
//! The table is static data: one pipeline type serves every profile, and the
//! choice of profile only changes which stages [`Profile::build`] wires in.
//!
//! | Language | `minimal` | `default` | `complete` |
//! |---|---|---|---|
//! | Japanese | tokenizer | tokenizer, pos-stop, width, lowercase | tokenizer, base-form, pos-stop, width, stopwords, lowercase |
//! | Korean | tokenizer | tokenizer (decompound, no punctuation), lowercase | tokenizer (decompound, no punctuation), pos-stop, lowercase |
//! | Thai | tokenizer | tokenizer, lowercase, stopwords | tokenizer, lowercase, stopwords |
//!
//! The `default` Japanese chain keeps surface forms: base-form reduction
//! only appears in `complete`. Japanese punctuation is removed by the
//! part-of-speech stage, Korean punctuation by the tokenizer itself.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::analysis::analyzer::PipelineAnalyzer;
use crate::analysis::token_filter::stop::{
    DEFAULT_JAPANESE_STOP_WORDS_SET, DEFAULT_THAI_STOP_WORDS_SET,
};
use crate::analysis::token_filter::{
    BaseFormFilter, Filter, LowercaseFilter, PartOfSpeechStopFilter, StopFilter, WidthFilter,
};
use crate::analysis::tokenizer::Tokenizer;
use crate::analysis::tokenizer::lindera::{DictionaryLayout, LinderaTokenizer};
use crate::analysis::tokenizer::thai::ThaiTokenizer;
use crate::config::LanguageConfig;
use crate::error::{LangsegError, Result};
use crate::language::Language;

/// Name of a profile.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ProfileName {
    /// Tokenizer only.
    Minimal,
    /// The shipped chain.
    #[default]
    Default,
    /// Every stage that improves recall.
    Complete,
}

impl ProfileName {
    pub const ALL: [ProfileName; 3] = [
        ProfileName::Minimal,
        ProfileName::Default,
        ProfileName::Complete,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ProfileName::Minimal => "minimal",
            ProfileName::Default => "default",
            ProfileName::Complete => "complete",
        }
    }
}

impl fmt::Display for ProfileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProfileName {
    type Err = LangsegError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimal" => Ok(ProfileName::Minimal),
            "default" => Ok(ProfileName::Default),
            "complete" => Ok(ProfileName::Complete),
            other => Err(LangsegError::invalid_argument(format!(
                "unknown profile '{other}' (expected minimal, default or complete)"
            ))),
        }
    }
}

/// Kind of an analysis stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageKind {
    Tokenizer,
    BaseForm,
    PartOfSpeechStop,
    WidthNormalize,
    Lowercase,
    StopWords,
}

/// Stop-tag set used by a part-of-speech stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopTags {
    Japanese,
    Korean,
}

/// Builtin stopword list used when no stopword file is configured.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StopWords {
    Japanese,
    Thai,
}

/// One entry of a profile: a stage kind plus the data it needs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum StageSpec {
    Tokenizer {
        decompound: bool,
        discard_punctuation: bool,
    },
    BaseForm,
    PartOfSpeechStop { tags: StopTags },
    WidthNormalize,
    Lowercase,
    StopWords { builtin: StopWords },
}

impl StageSpec {
    pub fn kind(&self) -> StageKind {
        match self {
            StageSpec::Tokenizer { .. } => StageKind::Tokenizer,
            StageSpec::BaseForm => StageKind::BaseForm,
            StageSpec::PartOfSpeechStop { .. } => StageKind::PartOfSpeechStop,
            StageSpec::WidthNormalize => StageKind::WidthNormalize,
            StageSpec::Lowercase => StageKind::Lowercase,
            StageSpec::StopWords { .. } => StageKind::StopWords,
        }
    }
}

const TOKENIZER: StageSpec = StageSpec::Tokenizer {
    decompound: false,
    discard_punctuation: false,
};
const KOREAN_TOKENIZER: StageSpec = StageSpec::Tokenizer {
    decompound: true,
    discard_punctuation: true,
};

const JAPANESE_MINIMAL: &[StageSpec] = &[TOKENIZER];
const JAPANESE_DEFAULT: &[StageSpec] = &[
    TOKENIZER,
    StageSpec::PartOfSpeechStop {
        tags: StopTags::Japanese,
    },
    StageSpec::WidthNormalize,
    StageSpec::Lowercase,
];
const JAPANESE_COMPLETE: &[StageSpec] = &[
    TOKENIZER,
    StageSpec::BaseForm,
    StageSpec::PartOfSpeechStop {
        tags: StopTags::Japanese,
    },
    StageSpec::WidthNormalize,
    StageSpec::StopWords {
        builtin: StopWords::Japanese,
    },
    StageSpec::Lowercase,
];

const KOREAN_MINIMAL: &[StageSpec] = &[TOKENIZER];
const KOREAN_DEFAULT: &[StageSpec] = &[KOREAN_TOKENIZER, StageSpec::Lowercase];
const KOREAN_COMPLETE: &[StageSpec] = &[
    KOREAN_TOKENIZER,
    StageSpec::PartOfSpeechStop {
        tags: StopTags::Korean,
    },
    StageSpec::Lowercase,
];

const THAI_MINIMAL: &[StageSpec] = &[TOKENIZER];
const THAI_DEFAULT: &[StageSpec] = &[
    TOKENIZER,
    StageSpec::Lowercase,
    StageSpec::StopWords {
        builtin: StopWords::Thai,
    },
];
const THAI_COMPLETE: &[StageSpec] = THAI_DEFAULT;

/// A (language, profile name) pair resolved to its stage list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub language: Language,
    pub name: ProfileName,
    pub stages: &'static [StageSpec],
}

impl Profile {
    /// Look up the stage list for `language` and `name`.
    pub fn resolve(language: Language, name: ProfileName) -> Self {
        let stages = match (language, name) {
            (Language::Japanese, ProfileName::Minimal) => JAPANESE_MINIMAL,
            (Language::Japanese, ProfileName::Default) => JAPANESE_DEFAULT,
            (Language::Japanese, ProfileName::Complete) => JAPANESE_COMPLETE,
            (Language::Korean, ProfileName::Minimal) => KOREAN_MINIMAL,
            (Language::Korean, ProfileName::Default) => KOREAN_DEFAULT,
            (Language::Korean, ProfileName::Complete) => KOREAN_COMPLETE,
            (Language::Thai, ProfileName::Minimal) => THAI_MINIMAL,
            (Language::Thai, ProfileName::Default) => THAI_DEFAULT,
            (Language::Thai, ProfileName::Complete) => THAI_COMPLETE,
        };
        Profile {
            language,
            name,
            stages,
        }
    }

    pub fn stage_kinds(&self) -> Vec<StageKind> {
        self.stages.iter().map(StageSpec::kind).collect()
    }

    /// Instantiate every stage and chain them into an analyzer.
    pub fn build(&self, config: &LanguageConfig) -> Result<PipelineAnalyzer> {
        let mut stages = self.stages.iter();
        let tokenizer = match stages.next() {
            Some(StageSpec::Tokenizer {
                decompound,
                discard_punctuation,
            }) => self.tokenizer(config, *decompound, *discard_punctuation)?,
            _ => {
                return Err(LangsegError::config(format!(
                    "profile {} for {} does not start with a tokenizer",
                    self.name, self.language
                )));
            }
        };

        let mut analyzer = PipelineAnalyzer::new(tokenizer)
            .with_name(format!("{}_{}", self.language, self.name));
        for stage in stages {
            analyzer = analyzer.add_filter(self.filter(stage, config)?);
        }
        Ok(analyzer)
    }

    fn tokenizer(
        &self,
        config: &LanguageConfig,
        decompound: bool,
        discard_punctuation: bool,
    ) -> Result<Arc<dyn Tokenizer>> {
        let layout = match self.language {
            Language::Japanese => DictionaryLayout::Ipadic,
            Language::Korean => DictionaryLayout::KoDic,
            Language::Thai => return Ok(Arc::new(ThaiTokenizer::new())),
        };
        let dictionary = config
            .dictionary_uri(self.language)
            .ok_or_else(|| LangsegError::config(format!("no dictionary for {}", self.language)))?;
        let tokenizer = LinderaTokenizer::new(
            &config.mode,
            dictionary,
            config.user_dictionary.as_deref(),
            layout,
        )?
        .with_decompound(decompound)
        .with_discard_punctuation(discard_punctuation);
        Ok(Arc::new(tokenizer))
    }

    fn filter(&self, stage: &StageSpec, config: &LanguageConfig) -> Result<Arc<dyn Filter>> {
        let filter: Arc<dyn Filter> = match stage {
            StageSpec::Tokenizer { .. } => {
                return Err(LangsegError::config(format!(
                    "profile {} for {} has more than one tokenizer",
                    self.name, self.language
                )));
            }
            StageSpec::BaseForm => Arc::new(BaseFormFilter::new()),
            StageSpec::PartOfSpeechStop { tags } => match tags {
                StopTags::Japanese => Arc::new(PartOfSpeechStopFilter::japanese()),
                StopTags::Korean => Arc::new(PartOfSpeechStopFilter::korean()),
            },
            StageSpec::WidthNormalize => Arc::new(WidthFilter::new()),
            StageSpec::Lowercase => Arc::new(LowercaseFilter::new()),
            StageSpec::StopWords { builtin } => match &config.stopwords_path {
                Some(path) => Arc::new(StopFilter::from_file(path)?),
                None => Arc::new(StopFilter::with_stop_words(match builtin {
                    StopWords::Japanese => DEFAULT_JAPANESE_STOP_WORDS_SET.clone(),
                    StopWords::Thai => DEFAULT_THAI_STOP_WORDS_SET.clone(),
                })),
            },
        };
        Ok(filter)
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.language, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_profile_starts_with_one_tokenizer() {
        for language in Language::ALL {
            for name in ProfileName::ALL {
                let kinds = Profile::resolve(language, name).stage_kinds();
                assert_eq!(kinds[0], StageKind::Tokenizer, "{language}/{name}");
                assert_eq!(
                    kinds.iter().filter(|k| **k == StageKind::Tokenizer).count(),
                    1
                );
            }
        }
    }

    #[test]
    fn test_japanese_default_keeps_surface_forms() {
        let kinds = Profile::resolve(Language::Japanese, ProfileName::Default).stage_kinds();
        assert_eq!(
            kinds,
            vec![
                StageKind::Tokenizer,
                StageKind::PartOfSpeechStop,
                StageKind::WidthNormalize,
                StageKind::Lowercase,
            ]
        );
        assert!(!kinds.contains(&StageKind::BaseForm));
    }

    #[test]
    fn test_japanese_complete_order() {
        let kinds = Profile::resolve(Language::Japanese, ProfileName::Complete).stage_kinds();
        let base = kinds.iter().position(|k| *k == StageKind::BaseForm).unwrap();
        let pos = kinds
            .iter()
            .position(|k| *k == StageKind::PartOfSpeechStop)
            .unwrap();
        assert!(base < pos);
    }

    #[test]
    fn test_korean_default_tokenizer() {
        let profile = Profile::resolve(Language::Korean, ProfileName::Default);
        assert_eq!(
            profile.stages[0],
            StageSpec::Tokenizer {
                decompound: true,
                discard_punctuation: true,
            }
        );
        let minimal = Profile::resolve(Language::Korean, ProfileName::Minimal);
        assert_eq!(minimal.stages[0], TOKENIZER);
    }

    #[test]
    fn test_thai_default_folds_case_and_stopwords() {
        let kinds = Profile::resolve(Language::Thai, ProfileName::Default).stage_kinds();
        assert_eq!(
            kinds,
            vec![
                StageKind::Tokenizer,
                StageKind::Lowercase,
                StageKind::StopWords,
            ]
        );
    }

    #[test]
    fn test_profile_name_parse() {
        assert_eq!("Complete".parse::<ProfileName>().unwrap(), ProfileName::Complete);
        assert_eq!(ProfileName::default(), ProfileName::Default);
        assert!("full".parse::<ProfileName>().is_err());
    }

    #[test]
    fn test_build_thai_complete() {
        let profile = Profile::resolve(Language::Thai, ProfileName::Complete);
        let analyzer = profile
            .build(&LanguageConfig::with_profile(ProfileName::Complete))
            .unwrap();
        assert_eq!(analyzer.stage_names(), vec!["thai", "lowercase", "stop"]);
    }

    #[test]
    fn test_build_missing_stopword_file() {
        let config = LanguageConfig {
            stopwords_path: Some("/nonexistent/stopwords.txt".into()),
            ..LanguageConfig::with_profile(ProfileName::Complete)
        };
        let err = Profile::resolve(Language::Thai, ProfileName::Complete)
            .build(&config)
            .unwrap_err();
        assert!(matches!(err, LangsegError::Resource(_)));
    }

    #[test]
    fn test_stage_spec_json() {
        let json = serde_json::to_string(&StageSpec::PartOfSpeechStop {
            tags: StopTags::Korean,
        })
        .unwrap();
        assert_eq!(json, r#"{"stage":"part_of_speech_stop","tags":"korean"}"#);
    }
}
