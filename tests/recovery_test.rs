use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use langseg::analysis::analyzer::PipelineAnalyzer;
use langseg::analysis::token::TokenStream;
use langseg::analysis::token_filter::{Filter, LowercaseFilter};
use langseg::analysis::tokenizer::thai::ThaiTokenizer;
use langseg::error::{LangsegError, Result};
use langseg::language::Language;
use langseg::pipeline::Pipeline;
use langseg::profile::{Profile, ProfileName};

/// Fails on the second token while `armed` is set.
struct TrippingFilter {
    armed: Arc<AtomicBool>,
}

impl Filter for TrippingFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let armed = self.armed.load(Ordering::SeqCst);
        Ok(Box::new(tokens.enumerate().map(move |(i, token)| {
            if armed && i == 1 {
                Err(LangsegError::analysis("simulated analyzer failure"))
            } else {
                token
            }
        })))
    }

    fn name(&self) -> &'static str {
        "tripping"
    }
}

#[test]
fn test_mid_stream_failure_is_not_fatal() {
    let armed = Arc::new(AtomicBool::new(true));
    let analyzer = PipelineAnalyzer::new(Arc::new(ThaiTokenizer::new()))
        .add_filter(Arc::new(TrippingFilter {
            armed: Arc::clone(&armed),
        }))
        .add_filter(Arc::new(LowercaseFilter::new()));
    let pipeline = Pipeline::from_analyzer(
        Profile::resolve(Language::Thai, ProfileName::Default),
        analyzer,
    );

    // The first token was produced before the failure; it is discarded too.
    assert!(pipeline.run("Hello World Again").is_empty());
    assert!(pipeline.try_run("Hello World Again").is_err());

    armed.store(false, Ordering::SeqCst);
    assert_eq!(
        pipeline.run("Hello World Again"),
        vec!["hello", "world", "again"]
    );
}

/// Fails on any token spelled "poison".
struct PoisonFilter;

impl Filter for PoisonFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.map(|token| match token {
            Ok(token) if token.text == "poison" => {
                Err(LangsegError::analysis("poisoned token"))
            }
            other => other,
        })))
    }

    fn name(&self) -> &'static str {
        "poison"
    }
}

#[test]
fn test_failure_in_one_call_does_not_leak_into_concurrent_calls() {
    let analyzer =
        PipelineAnalyzer::new(Arc::new(ThaiTokenizer::new())).add_filter(Arc::new(PoisonFilter));
    let pipeline = Arc::new(Pipeline::from_analyzer(
        Profile::resolve(Language::Thai, ProfileName::Minimal),
        analyzer,
    ));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let pipeline = Arc::clone(&pipeline);
            std::thread::spawn(move || {
                let text = if i % 2 == 0 {
                    format!("token{i} second")
                } else {
                    format!("token{i} poison second")
                };
                (i, pipeline.run(&text))
            })
        })
        .collect();

    for handle in handles {
        let (i, tokens) = handle.join().unwrap();
        if i % 2 == 0 {
            assert_eq!(tokens, vec![format!("token{i}"), "second".to_string()]);
        } else {
            assert!(tokens.is_empty());
        }
    }
}
