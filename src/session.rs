//! Segmentation session.
//!
//! A session drives one analyzer over one input and returns the surviving
//! token texts. The stream goes through acquire, reset, pull until
//! exhausted, finalize and release. Release happens in `Drop`, so it runs on
//! every exit path including a failed pull.
//!
//! Sessions are cheap and share nothing. A failure while pulling aborts the
//! session: the tokens collected so far are discarded, the failure is logged
//! and the caller receives an empty result.

use log::{debug, warn};

use crate::analysis::analyzer::Analyzer;
use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Lifecycle of the stream held by a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreamState {
    Acquired,
    Reset,
    Finalized,
}

/// An acquired token stream. Releasing it is tied to drop.
struct ActiveStream<'a> {
    stream: TokenStream,
    analyzer: &'a str,
    state: StreamState,
    pulled: usize,
}

impl<'a> ActiveStream<'a> {
    fn acquire(analyzer: &'a dyn Analyzer, text: &str) -> Result<Self> {
        let stream = analyzer.analyze(text)?;
        debug!("{}: acquired token stream", analyzer.name());
        Ok(ActiveStream {
            stream,
            analyzer: analyzer.name(),
            state: StreamState::Acquired,
            pulled: 0,
        })
    }

    fn reset(&mut self) {
        self.pulled = 0;
        self.state = StreamState::Reset;
    }

    fn pull(&mut self) -> Option<Result<Token>> {
        debug_assert_eq!(self.state, StreamState::Reset);
        let next = self.stream.next();
        if next.is_some() {
            self.pulled += 1;
        }
        next
    }

    fn finalize(&mut self) {
        self.state = StreamState::Finalized;
        debug!("{}: finalized after {} tokens", self.analyzer, self.pulled);
    }
}

impl Drop for ActiveStream<'_> {
    fn drop(&mut self) {
        if self.state != StreamState::Finalized {
            debug!(
                "{}: releasing token stream in state {:?}",
                self.analyzer, self.state
            );
        } else {
            debug!("{}: released token stream", self.analyzer);
        }
    }
}

/// One segmentation call against a shared analyzer.
pub struct SegmentationSession<'a> {
    analyzer: &'a dyn Analyzer,
}

impl<'a> SegmentationSession<'a> {
    pub fn new(analyzer: &'a dyn Analyzer) -> Self {
        SegmentationSession { analyzer }
    }

    /// Segment `text`, absorbing analyzer failures into an empty result.
    pub fn run(&self, text: &str) -> Vec<String> {
        match self.try_run(text) {
            Ok(tokens) => tokens,
            Err(e) => {
                warn!(
                    "{}: segmentation aborted, returning no tokens: {}",
                    self.analyzer.name(),
                    e
                );
                Vec::new()
            }
        }
    }

    /// Segment `text`, surfacing the first analyzer failure.
    ///
    /// Token texts are trimmed. Tokens that are empty or whitespace-only
    /// after trimming are dropped. Order and duplicates are kept.
    pub fn try_run(&self, text: &str) -> Result<Vec<String>> {
        let mut stream = ActiveStream::acquire(self.analyzer, text)?;
        stream.reset();

        let mut tokens = Vec::new();
        while let Some(token) = stream.pull() {
            let token = token?;
            let trimmed = token.text.trim();
            if trimmed.is_empty() {
                continue;
            }
            if trimmed.len() == token.text.len() {
                tokens.push(token.text);
            } else {
                tokens.push(trimmed.to_string());
            }
        }

        stream.finalize();
        Ok(tokens)
    }
}
