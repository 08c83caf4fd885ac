//! # langseg
//!
//! Japanese, Korean and Thai segmentation backends for a database
//! full-text indexer.
//!
//! ## Features
//!
//! - Dictionary-based morphological segmentation for Japanese (IPADIC) and
//!   Korean (ko-dic), dictionary/LSTM word breaking for Thai
//! - Selectable filter chains ("profiles") per language
//! - Pipelines built once per process, shared across threads, and retried
//!   after a failed construction
//! - A never-failing call-boundary API plus a status-reporting variant
//! - Line-oriented batch segmentation and a token cursor for index plugins
//!
//! ## Example
//!
//! ```no_run
//! use langseg::prelude::*;
//!
//! let tokens = segment(Language::Japanese, Some("私は学生です"));
//! assert_eq!(tokens, vec!["私", "学生"]);
//! ```

pub mod analysis;
pub mod batch;
pub mod cli;
pub mod config;
pub mod error;
pub mod language;
pub mod parser;
pub mod pipeline;
pub mod profile;
pub mod registry;
pub mod segment;
pub mod session;

pub mod prelude {
    pub use crate::batch::{BatchDriver, BatchReport};
    pub use crate::config::{LanguageConfig, SegmenterConfig};
    pub use crate::error::{LangsegError, Result};
    pub use crate::language::Language;
    pub use crate::parser::{FtParser, WordInfo};
    pub use crate::pipeline::Pipeline;
    pub use crate::profile::{Profile, ProfileName, StageKind};
    pub use crate::registry::{PipelineFactory, PipelineRegistry, SlotState};
    pub use crate::segment::{SegmentOutcome, segment, try_segment};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
