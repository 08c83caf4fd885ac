//! Batch segmentation of text files.
//!
//! Each input line is segmented independently and written as one output
//! line:
//!
//! - a blank input line is written as an empty line
//! - a line that yields no tokens is written as its trimmed original
//! - otherwise the tokens are joined with `,`
//!
//! Output goes to `<results_dir>/<code>_<YYYYMMDD_HHMMSS>.txt`, where the
//! default results directory is `<code>_results` (for example
//! `jp_results/jp_20250101_120000.txt`). The directory is created on demand.
//!
//! The input is streamed in chunks of [`DEFAULT_CHUNK_LINES`] lines. Lines
//! of a chunk are segmented in parallel with rayon and the chunk is written
//! before the next one is read, so output order always matches input order
//! and memory stays bounded by the chunk size.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use chrono::{DateTime, Local};
use log::{debug, info, warn};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{LangsegError, Result};
use crate::language::Language;
use crate::pipeline::Pipeline;
use crate::registry::PipelineRegistry;

/// Timestamp format of output file names.
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// Lines read, segmented and written per chunk.
pub const DEFAULT_CHUNK_LINES: usize = 4096;

/// Summary of a batch run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub language: Language,
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub lines_processed: usize,
    pub tokens_emitted: usize,
    pub blank_lines: usize,
    /// Non-blank lines that produced no tokens and were copied through.
    pub passthrough_lines: usize,
    pub started_at: DateTime<Local>,
    pub elapsed_ms: u64,
}

/// How a single line was rendered.
#[derive(Clone, Debug, PartialEq, Eq)]
enum LineResult {
    Blank,
    Passthrough(String),
    Tokens { joined: String, count: usize },
}

impl LineResult {
    fn text(&self) -> &str {
        match self {
            LineResult::Blank => "",
            LineResult::Passthrough(text) => text,
            LineResult::Tokens { joined, .. } => joined,
        }
    }
}

fn render_line(pipeline: &Pipeline, line: &str) -> LineResult {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineResult::Blank;
    }
    let tokens = pipeline.run(trimmed);
    if tokens.is_empty() {
        LineResult::Passthrough(trimmed.to_string())
    } else {
        LineResult::Tokens {
            count: tokens.len(),
            joined: tokens.join(","),
        }
    }
}

/// Segments files line by line with one language's pipeline.
#[derive(Debug)]
pub struct BatchDriver<'a> {
    registry: &'a PipelineRegistry,
    language: Language,
    results_dir: PathBuf,
    parallel: bool,
    chunk_lines: usize,
}

impl<'a> BatchDriver<'a> {
    /// Driver writing into `<code>_results` under the current directory.
    pub fn new(registry: &'a PipelineRegistry, language: Language) -> Self {
        BatchDriver {
            registry,
            language,
            results_dir: PathBuf::from(format!("{}_results", language.code())),
            parallel: true,
            chunk_lines: DEFAULT_CHUNK_LINES,
        }
    }

    /// Write into `dir` instead of the default results directory.
    pub fn with_results_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.results_dir = dir.into();
        self
    }

    /// Place the default `<code>_results` directory under `root`.
    pub fn with_results_root<P: AsRef<Path>>(mut self, root: P) -> Self {
        self.results_dir = root
            .as_ref()
            .join(format!("{}_results", self.language.code()));
        self
    }

    /// Segment lines on the current thread only.
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }

    /// Number of lines held in memory at once. Zero is treated as one.
    pub fn with_chunk_lines(mut self, lines: usize) -> Self {
        self.chunk_lines = lines.max(1);
        self
    }

    pub fn results_dir(&self) -> &Path {
        &self.results_dir
    }

    /// Output path for a run started at `timestamp`.
    pub fn output_path_for(&self, timestamp: &DateTime<Local>) -> PathBuf {
        self.results_dir.join(format!(
            "{}_{}.txt",
            self.language.code(),
            timestamp.format(TIMESTAMP_FORMAT)
        ))
    }

    /// Segment `input` into a new timestamped file in the results directory.
    pub fn process_file<P: AsRef<Path>>(&self, input: P) -> Result<BatchReport> {
        let started_at = Local::now();
        let output = self.output_path_for(&started_at);
        self.process_to(input.as_ref(), &output, started_at)
    }

    /// Segment `input` into `output`.
    pub fn process_to(
        &self,
        input: &Path,
        output: &Path,
        started_at: DateTime<Local>,
    ) -> Result<BatchReport> {
        if !input.is_file() {
            return Err(LangsegError::not_found(format!(
                "input file {}",
                input.display()
            )));
        }

        let pipeline = self.registry.get_pipeline(self.language)?;
        let timer = Instant::now();

        info!("Processing file: {}", input.display());
        let mut lines = BufReader::new(File::open(input)?).lines();

        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent)?;
        }
        let mut writer = BufWriter::new(File::create(output)?);

        let mut report = BatchReport {
            language: self.language,
            input_path: input.to_path_buf(),
            output_path: output.to_path_buf(),
            lines_processed: 0,
            tokens_emitted: 0,
            blank_lines: 0,
            passthrough_lines: 0,
            started_at,
            elapsed_ms: 0,
        };

        let mut chunk = Vec::with_capacity(self.chunk_lines);
        loop {
            chunk.clear();
            for line in lines.by_ref().take(self.chunk_lines) {
                chunk.push(line?);
            }
            if chunk.is_empty() {
                break;
            }

            for result in self.render_lines(&pipeline, &chunk) {
                report.lines_processed += 1;
                match &result {
                    LineResult::Blank => report.blank_lines += 1,
                    LineResult::Passthrough(text) => {
                        report.passthrough_lines += 1;
                        warn!(
                            "Line {} produced no tokens, writing original text: '{}'",
                            report.lines_processed, text
                        );
                    }
                    LineResult::Tokens { count, .. } => report.tokens_emitted += count,
                }
                writeln!(writer, "{}", result.text())?;
            }
        }
        writer.flush()?;

        report.elapsed_ms = timer.elapsed().as_millis() as u64;
        info!(
            "Processed {} lines, {} tokens -> {}",
            report.lines_processed,
            report.tokens_emitted,
            output.display()
        );
        Ok(report)
    }

    fn render_lines(&self, pipeline: &Arc<Pipeline>, lines: &[String]) -> Vec<LineResult> {
        if self.parallel {
            debug!("Segmenting {} lines in parallel", lines.len());
            lines
                .par_iter()
                .map(|line| render_line(pipeline, line))
                .collect()
        } else {
            lines.iter().map(|line| render_line(pipeline, line)).collect()
        }
    }
}
