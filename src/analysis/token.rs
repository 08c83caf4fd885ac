//! Token types and utilities for text analysis.
//!
//! This module defines the data that flows between the stages of a
//! segmentation pipeline. A tokenizer produces [`Token`]s carrying their
//! surface text, byte offsets and, when the analyzer provides them,
//! morphological attributes ([`TokenMetadata`]) such as the part-of-speech
//! tag and the dictionary base form. Filters read and rewrite those tokens.
//!
//! # Token streams
//!
//! A [`TokenStream`] is a lazy, fallible iterator: every pull may fail with
//! an analysis error raised by the external analyzer. Filters map over the
//! stream without collecting it, so a failure surfaces at the position where
//! it happened and the consumer decides what to do with the partial output.
//!
//! # Examples
//!
//! ```
//! use langseg::analysis::token::Token;
//!
//! let token = Token::with_offsets("world", 1, 6, 11);
//! assert_eq!(token.text, "world");
//! assert_eq!(token.start_offset, 6);
//! assert_eq!(token.end_offset, 11);
//! ```
//!
//! Attaching morphological metadata:
//!
//! ```
//! use langseg::analysis::token::Token;
//!
//! let token = Token::new("食べ", 0)
//!     .with_part_of_speech("動詞-自立")
//!     .with_base_form("食べる");
//!
//! assert_eq!(token.part_of_speech(), Some("動詞-自立"));
//! assert_eq!(token.base_form(), Some("食べる"));
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A single unit of text produced by a tokenizer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the tokenizer output (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Morphological attributes supplied by the analyzer
    pub metadata: Option<TokenMetadata>,
}

/// Morphological attributes attached to a token by the analyzer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenMetadata {
    /// Part-of-speech tag. For IPADIC this is the hyphen-joined category
    /// path (`助詞-係助詞`); for ko-dic it is the mecab-ko tag (`JKS`).
    pub part_of_speech: Option<String>,

    /// Dictionary base form (lemma), when the dictionary provides one
    pub base_form: Option<String>,

    /// Reading, when the dictionary provides one
    pub reading: Option<String>,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            metadata: None,
        }
    }

    /// Create a new token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        text: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            text: text.into(),
            position,
            start_offset,
            end_offset,
            metadata: None,
        }
    }

    /// Get the length of the token text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if the token is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Check if the token contains nothing but whitespace.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Set metadata for this token.
    pub fn with_metadata(mut self, metadata: TokenMetadata) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set the part-of-speech tag.
    pub fn with_part_of_speech<S: Into<String>>(mut self, tag: S) -> Self {
        let metadata = self.metadata.get_or_insert_with(TokenMetadata::default);
        metadata.part_of_speech = Some(tag.into());
        self
    }

    /// Set the dictionary base form.
    pub fn with_base_form<S: Into<String>>(mut self, base_form: S) -> Self {
        let metadata = self.metadata.get_or_insert_with(TokenMetadata::default);
        metadata.base_form = Some(base_form.into());
        self
    }

    /// Part-of-speech tag, if known.
    pub fn part_of_speech(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|m| m.part_of_speech.as_deref())
    }

    /// Dictionary base form, if known.
    pub fn base_form(&self) -> Option<&str> {
        self.metadata.as_ref().and_then(|m| m.base_form.as_deref())
    }

    /// Replace the token text, keeping offsets and metadata.
    pub fn with_text<S: Into<String>>(mut self, text: S) -> Self {
        self.text = text.into();
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A lazy, fallible sequence of tokens flowing through a pipeline.
pub type TokenStream = Box<dyn Iterator<Item = Result<Token>> + Send>;

/// Trait for types that can produce a token stream.
pub trait IntoTokenStream {
    /// Convert this type into a token stream.
    fn into_token_stream(self) -> TokenStream;
}

impl IntoTokenStream for Vec<Token> {
    fn into_token_stream(self) -> TokenStream {
        Box::new(self.into_iter().map(Ok))
    }
}
