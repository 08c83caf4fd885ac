//! Text analysis for segmentation pipelines.
//!
//! This module provides the building blocks a pipeline is assembled from:
//! tokenizers that split raw text, filters that transform the token stream,
//! and the analyzer that chains them.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer};
pub use token::{Token, TokenMetadata, TokenStream};
pub use token_filter::Filter;
pub use tokenizer::Tokenizer;
