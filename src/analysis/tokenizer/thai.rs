//! Thai word tokenizer.
//!
//! Thai is written without spaces between words, so UAX #29 word boundaries
//! alone leave whole phrases as a single segment. This tokenizer uses the ICU
//! word segmenter, which falls back to a dictionary/LSTM model for complex
//! scripts (Thai, Lao, Khmer, Myanmar) and to the UAX #29 rules for
//! everything else. Mixed input such as `Hello สวัสดี world` therefore splits
//! at every script boundary.
//!
//! Segments that are not word-like (whitespace, punctuation) are dropped.
//!
//! # Examples
//!
//! ```
//! use langseg::analysis::token::Token;
//! use langseg::analysis::tokenizer::Tokenizer;
//! use langseg::analysis::tokenizer::thai::ThaiTokenizer;
//! use langseg::error::Result;
//!
//! let tokenizer = ThaiTokenizer::new();
//! let tokens: Vec<Token> = tokenizer
//!     .tokenize("Hello สวัสดี world")
//!     .unwrap()
//!     .collect::<Result<_>>()
//!     .unwrap();
//!
//! assert_eq!(tokens[0].text, "Hello");
//! ```

use icu_segmenter::WordSegmenter;

use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::analysis::tokenizer::Tokenizer;
use crate::error::Result;

/// A tokenizer that splits Thai (and mixed-script) text into words.
pub struct ThaiTokenizer {
    segmenter: WordSegmenter,
}

impl ThaiTokenizer {
    /// Create a new Thai tokenizer using the compiled-in segmentation models.
    pub fn new() -> Self {
        ThaiTokenizer {
            segmenter: WordSegmenter::new_auto(),
        }
    }
}

impl Default for ThaiTokenizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tokenizer for ThaiTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = Vec::new();
        let mut breaks = self.segmenter.segment_str(text);
        let mut start = 0;

        while let Some(end) = breaks.next() {
            if end == 0 {
                continue;
            }
            if breaks.is_word_like() {
                let word = &text[start..end];
                if !word.trim().is_empty() {
                    tokens.push(Token::with_offsets(word, tokens.len(), start, end));
                }
            }
            start = end;
        }

        Ok(tokens.into_token_stream())
    }

    fn name(&self) -> &'static str {
        "thai"
    }
}
