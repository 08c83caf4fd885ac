//! Width normalization filter.
//!
//! Folds the two width variants used in CJK text to one canonical form:
//!
//! - full-width ASCII (`Ｏｃｅａｎ１２３`) becomes half-width (`Ocean123`)
//! - half-width katakana (`ﾃﾞｰﾀ`) becomes full-width (`データ`), merging a
//!   following half-width voiced/semi-voiced sound mark into the kana
//!
//! # Examples
//!
//! ```
//! use langseg::analysis::token::{IntoTokenStream, Token};
//! use langseg::analysis::token_filter::Filter;
//! use langseg::analysis::token_filter::width::WidthFilter;
//!
//! let tokens = vec![Token::new("ＤＢ", 0), Token::new("ﾃﾞｰﾀ", 1)];
//! let result: Vec<_> = WidthFilter::new()
//!     .filter(tokens.into_token_stream())
//!     .unwrap()
//!     .map(|t| t.unwrap().text)
//!     .collect();
//!
//! assert_eq!(result, vec!["DB", "データ"]);
//! ```

use unicode_normalization::UnicodeNormalization;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// Full-width ASCII or half-width katakana, including the sound marks.
fn is_width_variant(c: char) -> bool {
    matches!(c, '\u{ff01}'..='\u{ff5e}' | '\u{ff65}'..='\u{ff9f}')
}

/// Normalize the width of every character in `text`.
///
/// NFKC is applied to runs of width variants only, so other compatibility
/// characters such as `①` are kept as they are.
pub fn normalize_width(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut run = String::new();

    for c in text.chars() {
        if is_width_variant(c) {
            run.push(c);
            continue;
        }
        if !run.is_empty() {
            out.extend(run.nfkc());
            run.clear();
        }
        out.push(c);
    }
    out.extend(run.nfkc());

    out
}

fn needs_normalization(text: &str) -> bool {
    text.chars().any(is_width_variant)
}

/// A filter that normalizes full-width/half-width variants.
#[derive(Clone, Debug, Default)]
pub struct WidthFilter;

impl WidthFilter {
    pub fn new() -> Self {
        WidthFilter
    }
}

impl Filter for WidthFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            token.map(|token| {
                if !needs_normalization(&token.text) {
                    token
                } else {
                    let text = normalize_width(&token.text);
                    token.with_text(text)
                }
            })
        })))
    }

    fn name(&self) -> &'static str {
        "width"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fullwidth_ascii() {
        assert_eq!(normalize_width("Ｏｃｅａｎ１２３！"), "Ocean123!");
    }

    #[test]
    fn test_halfwidth_katakana() {
        assert_eq!(normalize_width("ｺﾝﾋﾟｭｰﾀｰ"), "コンピューター");
        assert_eq!(normalize_width("ﾃﾞｰﾀﾍﾞｰｽ"), "データベース");
        assert_eq!(normalize_width("ｳﾞ"), "ヴ");
    }

    #[test]
    fn test_dangling_mark() {
        assert_eq!(normalize_width("ﾞ"), "\u{3099}");
        assert_eq!(normalize_width("ｱﾟ"), "ア\u{309a}");
    }

    #[test]
    fn test_untouched() {
        assert_eq!(normalize_width("日本語 abc データ"), "日本語 abc データ");
        assert!(!needs_normalization("データ"));
    }

    #[test]
    fn test_other_compatibility_chars_kept() {
        assert_eq!(normalize_width("①ﾃﾞｰﾀ㍿"), "①データ㍿");
        assert_eq!(normalize_width("ｶﾞ１"), "ガ1");
    }

    #[test]
    fn test_filter_name() {
        assert_eq!(WidthFilter::new().name(), "width");
    }
}
