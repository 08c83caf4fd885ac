//! Analyzers turn text into a processed token stream.
//!
//! The only production analyzer is [`pipeline::PipelineAnalyzer`], a
//! tokenizer followed by an ordered chain of filters. The trait exists so a
//! segmentation session can drive any analyzer, including test doubles that
//! fail part-way through a stream.

use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;
}

pub mod pipeline;

pub use pipeline::PipelineAnalyzer;
