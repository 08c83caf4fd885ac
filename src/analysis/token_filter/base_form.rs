//! Base form filter implementation.
//!
//! Replaces each token that carries a dictionary base form with that form
//! (`食べ` → `食べる`). Improves recall for inflected words at the cost of
//! exact-match fidelity, which is why only the recall-oriented profiles use it.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;
use crate::error::Result;

/// A filter that rewrites tokens to their dictionary base form.
#[derive(Clone, Debug, Default)]
pub struct BaseFormFilter;

impl BaseFormFilter {
    pub fn new() -> Self {
        BaseFormFilter
    }
}

impl Filter for BaseFormFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| {
            token.map(|token| match token.base_form() {
                Some(base) if base != token.text => {
                    let base = base.to_string();
                    token.with_text(base)
                }
                _ => token,
            })
        })))
    }

    fn name(&self) -> &'static str {
        "base_form"
    }
}
