//! Full-text parser cursor.
//!
//! The host index consumes tokens one at a time through an init / next /
//! reset protocol. [`FtParser`] adapts a pipeline to that protocol: `init`
//! segments the whole document once, `next_token` hands out the tokens in
//! order with their byte and character lengths, and `reset` returns the
//! cursor to its initial state so it can be reused for the next document.

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::{LangsegError, Result};
use crate::language::Language;
use crate::registry::PipelineRegistry;

/// One token as reported to the index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordInfo {
    pub word: String,
    /// Length of `word` in UTF-8 bytes.
    pub byte_len: usize,
    /// Length of `word` in characters.
    pub char_len: usize,
    /// Occurrence count. Always 1; duplicates are reported individually.
    pub freq: u32,
}

impl WordInfo {
    pub fn new(word: String) -> Self {
        WordInfo {
            byte_len: word.len(),
            char_len: word.chars().count(),
            freq: 1,
            word,
        }
    }
}

/// A token is indexable unless it is empty or made only of ASCII whitespace.
pub fn is_valid_token(token: &str) -> bool {
    !token.is_empty() && !token.bytes().all(|b| b.is_ascii_whitespace())
}

/// Cursor over the tokens of one document.
#[derive(Debug, Default)]
pub struct FtParser {
    tokens: Vec<WordInfo>,
    position: usize,
    initialized: bool,
}

impl FtParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Segment `text` with the pipeline for `language`.
    ///
    /// Fails with [`LangsegError::InvalidOperation`] if the parser is
    /// already initialized. If the pipeline cannot be built or the analyzer
    /// fails, the parser is left uninitialized.
    pub fn init(
        &mut self,
        registry: &PipelineRegistry,
        language: Language,
        text: &str,
    ) -> Result<()> {
        if self.initialized {
            return Err(LangsegError::invalid_operation(
                "parser is already initialized",
            ));
        }

        let words = registry
            .get_pipeline(language)
            .and_then(|pipeline| pipeline.try_run(text))
            .inspect_err(|e| warn!("{language} parser init failed: {e}"))?;

        self.tokens = words
            .into_iter()
            .filter(|w| is_valid_token(w))
            .map(WordInfo::new)
            .collect();
        self.position = 0;
        self.initialized = true;
        debug!(
            "{language} parser initialized with {} tokens from {} bytes",
            self.tokens.len(),
            text.len()
        );
        Ok(())
    }

    /// The next token, or `None` once every token has been returned.
    pub fn next_token(&mut self) -> Result<Option<WordInfo>> {
        if !self.initialized {
            return Err(LangsegError::invalid_operation("parser is not initialized"));
        }
        let token = self.tokens.get(self.position).cloned();
        if token.is_some() {
            self.position += 1;
        }
        Ok(token)
    }

    /// Drop the current document and return to the uninitialized state.
    pub fn reset(&mut self) {
        self.tokens.clear();
        self.position = 0;
        self.initialized = false;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn total_tokens(&self) -> usize {
        self.tokens.len()
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len().saturating_sub(self.position)
    }
}

impl Iterator for FtParser {
    type Item = WordInfo;

    fn next(&mut self) -> Option<WordInfo> {
        self.next_token().ok().flatten()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::analysis::analyzer::Analyzer;
    use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
    use crate::pipeline::Pipeline;
    use crate::profile::{Profile, ProfileName};
    use crate::registry::PipelineFactory;

    struct CommaAnalyzer;

    impl Analyzer for CommaAnalyzer {
        fn analyze(&self, text: &str) -> Result<TokenStream> {
            let tokens: Vec<Token> = text
                .split(',')
                .enumerate()
                .map(|(i, w)| Token::new(w, i))
                .collect();
            Ok(tokens.into_token_stream())
        }

        fn name(&self) -> &str {
            "comma"
        }
    }

    struct CommaFactory;

    impl PipelineFactory for CommaFactory {
        fn build(&self, language: Language) -> Result<Pipeline> {
            Ok(Pipeline::with_analyzer(
                Profile::resolve(language, ProfileName::Minimal),
                Box::new(CommaAnalyzer),
            ))
        }

        fn profile(&self, _language: Language) -> ProfileName {
            ProfileName::Minimal
        }
    }

    fn registry() -> PipelineRegistry {
        PipelineRegistry::with_factory(Arc::new(CommaFactory))
    }

    #[test]
    fn test_cursor_protocol() {
        let registry = registry();
        let mut parser = FtParser::new();

        assert!(matches!(
            parser.next_token(),
            Err(LangsegError::InvalidOperation(_))
        ));

        parser.init(&registry, Language::Korean, "한국어,db,한국어").unwrap();
        assert!(matches!(
            parser.init(&registry, Language::Korean, "again"),
            Err(LangsegError::InvalidOperation(_))
        ));

        let first = parser.next_token().unwrap().unwrap();
        assert_eq!(
            first,
            WordInfo {
                word: "한국어".to_string(),
                byte_len: 9,
                char_len: 3,
                freq: 1,
            }
        );
        assert_eq!(parser.next_token().unwrap().unwrap().word, "db");
        assert_eq!(parser.next_token().unwrap().unwrap().word, "한국어");
        assert_eq!(parser.next_token().unwrap(), None);
        assert_eq!(parser.next_token().unwrap(), None);

        parser.reset();
        assert!(!parser.is_initialized());
        parser.init(&registry, Language::Thai, "a,b").unwrap();
        assert_eq!(parser.map(|w| w.word).collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_blank_document() {
        let registry = registry();
        let mut parser = FtParser::new();
        parser.init(&registry, Language::Japanese, "   ").unwrap();
        assert_eq!(parser.total_tokens(), 0);
        assert_eq!(parser.next_token().unwrap(), None);
    }

    #[test]
    fn test_valid_token() {
        assert!(is_valid_token("a"));
        assert!(is_valid_token("\u{3000}"));
        assert!(!is_valid_token(""));
        assert!(!is_valid_token(" \t\r\n"));
    }

    #[test]
    fn test_init_failure_leaves_parser_uninitialized() {
        struct Broken;
        impl PipelineFactory for Broken {
            fn build(&self, _language: Language) -> Result<Pipeline> {
                Err(LangsegError::resource("missing"))
            }
            fn profile(&self, _language: Language) -> ProfileName {
                ProfileName::Default
            }
        }

        let registry = PipelineRegistry::with_factory(Arc::new(Broken));
        let mut parser = FtParser::new();
        assert!(parser.init(&registry, Language::Thai, "text").is_err());
        assert!(!parser.is_initialized());
    }
}
