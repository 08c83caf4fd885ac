//! Call-boundary segmentation API.
//!
//! [`segment`] never fails: blank input, analyzer failures and an
//! unavailable pipeline all produce an empty vector. Callers that need to
//! tell "no tokens" apart from "could not segment" use [`try_segment`].
//!
//! ```no_run
//! use langseg::language::Language;
//! use langseg::segment::{segment, try_segment, SegmentOutcome};
//!
//! let tokens = segment(Language::Japanese, Some("私は学生です"));
//!
//! match try_segment(Language::Korean, Some("한국어 형태소 분석")) {
//!     SegmentOutcome::Tokens(tokens) => println!("{}", tokens.join(",")),
//!     SegmentOutcome::Unavailable { reason } => eprintln!("{reason}"),
//! }
//! ```

use log::warn;
use serde::{Deserialize, Serialize};

use crate::language::Language;
use crate::registry::{self, PipelineRegistry};

/// Result of a segmentation call that reports unavailability.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentOutcome {
    /// The pipeline ran. The list may be empty.
    Tokens(Vec<String>),
    /// The pipeline for the language could not be constructed.
    Unavailable { reason: String },
}

impl SegmentOutcome {
    pub fn is_available(&self) -> bool {
        matches!(self, SegmentOutcome::Tokens(_))
    }

    /// The tokens, or an empty vector when unavailable.
    pub fn into_tokens(self) -> Vec<String> {
        match self {
            SegmentOutcome::Tokens(tokens) => tokens,
            SegmentOutcome::Unavailable { .. } => Vec::new(),
        }
    }
}

/// Segment `text` with the process-wide registry.
pub fn segment(language: Language, text: Option<&str>) -> Vec<String> {
    segment_with(registry::global(), language, text)
}

/// Segment `text` with the process-wide registry, reporting unavailability.
pub fn try_segment(language: Language, text: Option<&str>) -> SegmentOutcome {
    try_segment_with(registry::global(), language, text)
}

/// Segment `text` with an explicit registry.
pub fn segment_with(
    registry: &PipelineRegistry,
    language: Language,
    text: Option<&str>,
) -> Vec<String> {
    match try_segment_with(registry, language, text) {
        SegmentOutcome::Tokens(tokens) => tokens,
        SegmentOutcome::Unavailable { reason } => {
            warn!("{language} segmentation unavailable: {reason}");
            Vec::new()
        }
    }
}

/// Segment `text` with an explicit registry, reporting unavailability.
///
/// Blank or absent input returns `Tokens(vec![])` without constructing the
/// pipeline.
pub fn try_segment_with(
    registry: &PipelineRegistry,
    language: Language,
    text: Option<&str>,
) -> SegmentOutcome {
    let text = match text {
        Some(text) if !text.trim().is_empty() => text,
        _ => return SegmentOutcome::Tokens(Vec::new()),
    };

    match registry.get_pipeline(language) {
        Ok(pipeline) => SegmentOutcome::Tokens(pipeline.run(text)),
        Err(e) => SegmentOutcome::Unavailable {
            reason: e.to_string(),
        },
    }
}
