//! Tokenizer implementations for text analysis.
//!
//! A tokenizer is the mandatory first stage of every pipeline: it splits raw
//! text into candidate tokens using a language-specific analyzer.
//!
//! # Available Tokenizers
//!
//! - [`lindera::LinderaTokenizer`] - Dictionary-based morphological analysis
//!   for Japanese (IPADIC) and Korean (ko-dic)
//! - [`thai::ThaiTokenizer`] - Dictionary-based Thai word segmentation
//!
//! # Examples
//!
//! Implementing a custom tokenizer:
//!
//! ```
//! use langseg::analysis::token::{IntoTokenStream, Token, TokenStream};
//! use langseg::analysis::tokenizer::Tokenizer;
//! use langseg::error::Result;
//!
//! struct CommaTokenizer;
//!
//! impl Tokenizer for CommaTokenizer {
//!     fn tokenize(&self, text: &str) -> Result<TokenStream> {
//!         let tokens: Vec<Token> = text
//!             .split(',')
//!             .enumerate()
//!             .map(|(i, s)| Token::new(s.trim(), i))
//!             .collect();
//!         Ok(tokens.into_token_stream())
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "comma"
//!     }
//! }
//! ```

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// Tokenizers are shared read-only across concurrent sessions, hence the
/// `Send + Sync` bound.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod lindera;
pub mod thai;
