//! A constructed segmentation pipeline.
//!
//! A [`Pipeline`] is the immutable result of building one profile for one
//! language. The registry owns it and hands out `Arc` clones; any number of
//! sessions may run against it at the same time.

use std::fmt;

use crate::analysis::analyzer::{Analyzer, PipelineAnalyzer};
use crate::error::Result;
use crate::language::Language;
use crate::profile::{Profile, StageKind};
use crate::session::SegmentationSession;

pub struct Pipeline {
    profile: Profile,
    analyzer: Box<dyn Analyzer>,
}

impl Pipeline {
    /// Build the analyzer for `profile` and wrap it.
    pub fn from_analyzer(profile: Profile, analyzer: PipelineAnalyzer) -> Self {
        Self::with_analyzer(profile, Box::new(analyzer))
    }

    /// Wrap an arbitrary analyzer. Used to plug in instrumented analyzers.
    pub fn with_analyzer(profile: Profile, analyzer: Box<dyn Analyzer>) -> Self {
        Pipeline { profile, analyzer }
    }

    pub fn language(&self) -> Language {
        self.profile.language
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn stage_kinds(&self) -> Vec<StageKind> {
        self.profile.stage_kinds()
    }

    pub fn analyzer(&self) -> &dyn Analyzer {
        self.analyzer.as_ref()
    }

    /// Segment `text`. Blank input returns no tokens without touching the
    /// analyzer; analyzer failures also return no tokens.
    pub fn run(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return Vec::new();
        }
        SegmentationSession::new(self.analyzer()).run(text)
    }

    /// Like [`run`](Self::run) but reports analyzer failures.
    pub fn try_run(&self, text: &str) -> Result<Vec<String>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        SegmentationSession::new(self.analyzer()).try_run(text)
    }
}

impl fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pipeline")
            .field("profile", &self.profile.to_string())
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}
