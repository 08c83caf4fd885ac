//! Token filter implementations for token transformation.
//!
//! Filters are the optional stages of a pipeline. Each one wraps the
//! incoming [`TokenStream`] lazily; errors raised upstream pass through
//! untouched so the session sees them at the position they occurred.
//!
//! # Available Filters
//!
//! - [`base_form::BaseFormFilter`] - Replace inflected tokens with their dictionary form
//! - [`part_of_speech::PartOfSpeechStopFilter`] - Drop tokens by grammatical category
//! - [`width::WidthFilter`] - Fold full-width/half-width variants to one width
//! - [`lowercase::LowercaseFilter`] - Case folding
//! - [`stop::StopFilter`] - Drop tokens found in a stopword list

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod base_form;
pub mod lowercase;
pub mod part_of_speech;
pub mod stop;
pub mod width;

pub use base_form::BaseFormFilter;
pub use lowercase::LowercaseFilter;
pub use part_of_speech::PartOfSpeechStopFilter;
pub use stop::StopFilter;
pub use width::WidthFilter;
