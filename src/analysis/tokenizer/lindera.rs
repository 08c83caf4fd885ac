use std::borrow::Cow;
use std::str::FromStr;

use lindera::dictionary::{load_dictionary, load_user_dictionary};
use lindera::mode::Mode;
use lindera::segmenter::Segmenter;

use crate::analysis::token::{IntoTokenStream, Token, TokenMetadata, TokenStream};
use crate::error::{LangsegError, Result};

use super::Tokenizer;

/// How to read the feature columns of the loaded dictionary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DictionaryLayout {
    /// IPADIC: 品詞, 細分類1-3, 活用型, 活用形, 原形, 読み, 発音
    Ipadic,
    /// ko-dic: tag, semantic class, jongseong, reading, type, first tag, last tag, expression
    KoDic,
}

/// ko-dic tags of punctuation and symbols.
const KODIC_PUNCTUATION_TAGS: &[&str] = &["SF", "SP", "SSO", "SSC", "SC", "SE", "SY"];

/// IPADIC top-level category of punctuation and symbols.
const IPADIC_SYMBOL: &str = "記号";

/// Morphological tokenizer backed by a Lindera segmenter.
pub struct LinderaTokenizer {
    inner: Segmenter,
    layout: DictionaryLayout,
    decompound: bool,
    discard_punctuation: bool,
}

impl LinderaTokenizer {
    /// Create a new Lindera tokenizer.
    pub fn new(
        mode_str: &str,
        dict_uri: &str,
        user_dict_uri: Option<&str>,
        layout: DictionaryLayout,
    ) -> Result<Self> {
        let mode = Mode::from_str(mode_str).map_err(|e| {
            LangsegError::config(format!("Invalid mode '{}': {}", mode_str, e))
        })?;
        let dict = load_dictionary(dict_uri).map_err(|e| {
            LangsegError::resource(format!("Failed to load dictionary '{}': {}", dict_uri, e))
        })?;
        let metadata = &dict.metadata;
        let user_dict = match user_dict_uri {
            Some(uri) => Some(load_user_dictionary(uri, metadata).map_err(|e| {
                LangsegError::resource(format!("Failed to load user dictionary '{}': {}", uri, e))
            })?),
            None => None,
        };
        let inner = Segmenter::new(mode, dict, user_dict);

        Ok(Self {
            inner,
            layout,
            decompound: false,
            discard_punctuation: false,
        })
    }

    /// Split ko-dic compound entries into their constituent morphemes.
    pub fn with_decompound(mut self, decompound: bool) -> Self {
        self.decompound = decompound;
        self
    }

    /// Drop tokens the dictionary tags as punctuation or symbols.
    pub fn with_discard_punctuation(mut self, discard: bool) -> Self {
        self.discard_punctuation = discard;
        self
    }

    pub fn layout(&self) -> DictionaryLayout {
        self.layout
    }

    fn is_punctuation(&self, surface: &str, details: &[&str]) -> bool {
        let tagged = match (self.layout, details.first()) {
            (DictionaryLayout::Ipadic, Some(pos)) => *pos == IPADIC_SYMBOL,
            // inflected ko-dic entries carry `VV+EF` style tags
            (DictionaryLayout::KoDic, Some(tag)) => tag
                .split('+')
                .next()
                .is_some_and(|t| KODIC_PUNCTUATION_TAGS.contains(&t)),
            (_, None) => false,
        };
        tagged || (!surface.is_empty() && surface.chars().all(|c| c.is_ascii_punctuation()))
    }

    fn metadata(&self, details: &[&str]) -> Option<TokenMetadata> {
        match self.layout {
            DictionaryLayout::Ipadic => ipadic_metadata(details),
            DictionaryLayout::KoDic => kodic_metadata(details),
        }
    }
}

fn detail(details: &[&str], index: usize) -> Option<String> {
    details
        .get(index)
        .filter(|d| !d.is_empty() && **d != "*")
        .map(|d| d.to_string())
}

fn ipadic_metadata(details: &[&str]) -> Option<TokenMetadata> {
    if details.len() < 4 {
        return None;
    }
    let pos: Vec<&str> = details[..4]
        .iter()
        .copied()
        .filter(|d| !d.is_empty() && *d != "*")
        .collect();

    Some(TokenMetadata {
        part_of_speech: (!pos.is_empty()).then(|| pos.join("-")),
        base_form: detail(details, 6),
        reading: detail(details, 7),
    })
}

fn kodic_metadata(details: &[&str]) -> Option<TokenMetadata> {
    // "UNK" and friends carry a single column
    if details.len() < 4 {
        return None;
    }

    Some(TokenMetadata {
        part_of_speech: detail(details, 0),
        base_form: None,
        reading: detail(details, 3),
    })
}

/// Parse a ko-dic expression column (`가락/NNG/*+지/NNG/*`) into (surface, tag) parts.
fn parse_expression(expression: &str) -> Vec<(&str, &str)> {
    expression
        .split('+')
        .filter_map(|part| {
            let mut fields = part.split('/');
            let surface = fields.next()?.trim();
            let tag = fields.next().unwrap_or("").trim();
            (!surface.is_empty()).then_some((surface, tag))
        })
        .collect()
}

impl Tokenizer for LinderaTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();

        let segmented = self
            .inner
            .segment(Cow::Borrowed(text))
            .map_err(|e| LangsegError::analysis(format!("Failed to segment text: {}", e)))?;

        for mut token in segmented {
            let surface = token.surface.to_string();
            let byte_start = token.byte_start;
            let byte_end = token.byte_end;
            let details = token.details();
            if self.discard_punctuation && self.is_punctuation(&surface, &details) {
                continue;
            }
            let metadata = self.metadata(&details);

            if self.decompound
                && self.layout == DictionaryLayout::KoDic
                && details.get(4).copied() == Some("Compound")
            {
                let parts = details
                    .get(7)
                    .map(|expr| parse_expression(expr))
                    .unwrap_or_default();
                let joined: String = parts.iter().map(|(s, _)| *s).collect();

                // Only split when the parts spell out the surface exactly, so
                // offsets stay meaningful.
                if parts.len() > 1 && joined == surface {
                    let mut offset = byte_start;
                    for (part, tag) in parts {
                        let position = tokens.len();
                        let end = offset + part.len();
                        let mut sub = Token::with_offsets(part, position, offset, end);
                        if !tag.is_empty() && tag != "*" {
                            sub = sub.with_part_of_speech(tag);
                        }
                        tokens.push(sub);
                        offset = end;
                    }
                    continue;
                }
            }

            let position = tokens.len();
            let mut out = Token::with_offsets(surface, position, byte_start, byte_end);
            if let Some(metadata) = metadata {
                out = out.with_metadata(metadata);
            }
            tokens.push(out);
        }

        Ok(tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "lindera"
    }
}
