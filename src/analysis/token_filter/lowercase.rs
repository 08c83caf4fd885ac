//! Lowercase filter implementation.
//!
//! Case folding for indexing. Scripts without case (kana, kanji, hangul,
//! Thai) pass through unchanged.
//!
//! # Examples
//!
//! ```
//! use langseg::analysis::token::{IntoTokenStream, Token};
//! use langseg::analysis::token_filter::Filter;
//! use langseg::analysis::token_filter::lowercase::LowercaseFilter;
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("OceanBase", 0), Token::new("データ", 1)];
//! let filtered: Vec<_> = filter
//!     .filter(tokens.into_token_stream())
//!     .unwrap()
//!     .map(|t| t.unwrap().text)
//!     .collect();
//!
//! assert_eq!(filtered, vec!["oceanbase", "データ"]);
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that converts tokens to lowercase.
///
/// - Converts all cased characters to lowercase (full Unicode, not just ASCII)
/// - Preserves positions, offsets and metadata
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }
}

fn lowercase(text: &str) -> String {
    if text.is_ascii() {
        text.to_ascii_lowercase()
    } else {
        text.to_lowercase()
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            token.map(|token| {
                if !token.text.chars().any(char::is_uppercase) {
                    token
                } else {
                    let text = lowercase(&token.text);
                    token.with_text(text)
                }
            })
        })))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::{IntoTokenStream, Token};

    #[test]
    fn test_lowercase_filter() {
        let filter = LowercaseFilter::new();
        let tokens = vec![
            Token::new("Hello", 0),
            Token::new("WORLD", 1),
            Token::new("Test", 2),
            Token::new("ÉCOLE", 3),
        ];

        let result: Vec<Token> = filter
            .filter(tokens.into_token_stream())
            .unwrap()
            .collect::<Result<Vec<_>>>()
            .unwrap();

        assert_eq!(result.len(), 4);
        assert_eq!(result[0].text, "hello");
        assert_eq!(result[1].text, "world");
        assert_eq!(result[2].text, "test");
        assert_eq!(result[3].text, "école");
    }

    #[test]
    fn test_non_latin_untouched() {
        let filter = LowercaseFilter::new();
        let tokens = vec![Token::new("학교", 0), Token::new("สวัสดี", 1)];

        let result: Vec<String> = filter
            .filter(tokens.into_token_stream())
            .unwrap()
            .map(|t| t.unwrap().text)
            .collect();

        assert_eq!(result, vec!["학교", "สวัสดี"]);
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(LowercaseFilter::new().name(), "lowercase");
    }
}
