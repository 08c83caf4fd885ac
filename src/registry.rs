//! Pipeline registry.
//!
//! The registry owns one slot per language. A slot starts empty and is
//! filled by the first caller that needs it; every later caller shares the
//! same [`Pipeline`] through an `Arc`.
//!
//! Construction is guarded per slot:
//!
//! 1. Read-lock the slot. If a pipeline is there, return it.
//! 2. Take the slot's construction mutex and look again, since another
//!    caller may have finished while this one was waiting.
//! 3. Build, publish, return.
//!
//! A failed build leaves the slot empty. Callers that were already waiting
//! on that attempt receive its error; the next caller to arrive starts a
//! fresh attempt. There is no permanent failed state, and one language
//! failing never affects the others.
//!
//! # Examples
//!
//! ```no_run
//! use langseg::language::Language;
//! use langseg::registry;
//!
//! let pipeline = registry::global().get_pipeline(Language::Japanese).unwrap();
//! let tokens = pipeline.run("私は学生です");
//! ```

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::{Arc, LazyLock};

use log::{debug, info, warn};
use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};

use crate::config::SegmenterConfig;
use crate::error::{LangsegError, Result};
use crate::language::Language;
use crate::pipeline::Pipeline;
use crate::profile::{Profile, ProfileName};

/// Builds the pipeline for a language.
pub trait PipelineFactory: Send + Sync {
    fn build(&self, language: Language) -> Result<Pipeline>;

    /// Profile the factory builds for `language`.
    fn profile(&self, language: Language) -> ProfileName;
}

/// Builds pipelines from the profile table and a [`SegmenterConfig`].
#[derive(Clone, Debug, Default)]
pub struct ProfileFactory {
    config: SegmenterConfig,
}

impl ProfileFactory {
    pub fn new(config: SegmenterConfig) -> Self {
        ProfileFactory { config }
    }

    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }
}

impl PipelineFactory for ProfileFactory {
    fn build(&self, language: Language) -> Result<Pipeline> {
        let config = self.config.for_language(language);
        let profile = Profile::resolve(language, config.profile);
        let analyzer = profile.build(config)?;
        Ok(Pipeline::from_analyzer(profile, analyzer))
    }

    fn profile(&self, language: Language) -> ProfileName {
        self.config.for_language(language).profile
    }
}

/// Observable state of a registry slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotState {
    Uninitialized,
    Ready,
}

#[derive(Default)]
struct Slot {
    pipeline: RwLock<Option<Arc<Pipeline>>>,
    init: Mutex<()>,
    /// Incremented after every failed attempt.
    failures: AtomicU64,
    constructions: AtomicUsize,
    last_error: Mutex<Option<String>>,
}

impl Slot {
    fn ready(&self) -> Option<Arc<Pipeline>> {
        self.pipeline.read().as_ref().map(Arc::clone)
    }
}

/// Lazily constructed, shared pipelines for every language.
pub struct PipelineRegistry {
    factory: Arc<dyn PipelineFactory>,
    slots: [Slot; 3],
}

impl PipelineRegistry {
    /// Registry that builds from the profile table with `config`.
    pub fn new(config: SegmenterConfig) -> Self {
        Self::with_factory(Arc::new(ProfileFactory::new(config)))
    }

    pub fn with_factory(factory: Arc<dyn PipelineFactory>) -> Self {
        PipelineRegistry {
            factory,
            slots: Default::default(),
        }
    }

    fn slot(&self, language: Language) -> &Slot {
        &self.slots[language.index()]
    }

    /// Return the pipeline for `language`, building it on first use.
    pub fn get_pipeline(&self, language: Language) -> Result<Arc<Pipeline>> {
        let slot = self.slot(language);
        if let Some(pipeline) = slot.ready() {
            return Ok(pipeline);
        }

        let failures_seen = slot.failures.load(Ordering::Acquire);
        let _guard = slot.init.lock();

        if let Some(pipeline) = slot.ready() {
            return Ok(pipeline);
        }

        if slot.failures.load(Ordering::Acquire) != failures_seen {
            let message = slot
                .last_error
                .lock()
                .clone()
                .unwrap_or_else(|| "construction failed".to_string());
            debug!("{language}: reporting the failure of the attempt this call waited on");
            return Err(LangsegError::construction(language, message));
        }

        let profile = self.factory.profile(language);
        info!("Building {language} pipeline (profile: {profile})");

        match self.factory.build(language) {
            Ok(pipeline) => {
                let pipeline = Arc::new(pipeline);
                *slot.pipeline.write() = Some(Arc::clone(&pipeline));
                *slot.last_error.lock() = None;
                slot.constructions.fetch_add(1, Ordering::AcqRel);
                info!("{language} pipeline ready");
                Ok(pipeline)
            }
            Err(e) => {
                let message = match e {
                    LangsegError::Construction { message, .. } => message,
                    other => other.to_string(),
                };
                warn!("{language} pipeline construction failed: {message}");
                *slot.last_error.lock() = Some(message.clone());
                slot.failures.fetch_add(1, Ordering::Release);
                Err(LangsegError::construction(language, message))
            }
        }
    }

    /// The pipeline for `language` if it has already been built.
    pub fn peek(&self, language: Language) -> Option<Arc<Pipeline>> {
        self.slot(language).ready()
    }

    pub fn state(&self, language: Language) -> SlotState {
        match self.slot(language).ready() {
            Some(_) => SlotState::Ready,
            None => SlotState::Uninitialized,
        }
    }

    /// Number of successful constructions for `language`.
    pub fn construction_count(&self, language: Language) -> usize {
        self.slot(language).constructions.load(Ordering::Acquire)
    }

    /// Number of failed construction attempts for `language`.
    pub fn failure_count(&self, language: Language) -> u64 {
        self.slot(language).failures.load(Ordering::Acquire)
    }

    /// Message of the most recent failed attempt, cleared on success.
    pub fn last_error(&self, language: Language) -> Option<String> {
        self.slot(language).last_error.lock().clone()
    }

    pub fn profile(&self, language: Language) -> ProfileName {
        self.factory.profile(language)
    }

    /// Build every listed language now. Failures are reported per language
    /// and stay retryable.
    pub fn warm_up(&self, languages: &[Language]) -> Vec<(Language, Result<()>)> {
        languages
            .iter()
            .map(|&language| (language, self.get_pipeline(language).map(|_| ())))
            .collect()
    }
}

impl Default for PipelineRegistry {
    fn default() -> Self {
        Self::new(SegmenterConfig::default())
    }
}

impl std::fmt::Debug for PipelineRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("PipelineRegistry");
        for language in Language::ALL {
            s.field(language.name(), &self.state(language));
        }
        s.finish()
    }
}

static GLOBAL: LazyLock<PipelineRegistry> = LazyLock::new(|| {
    let config = SegmenterConfig::from_env().unwrap_or_else(|e| {
        warn!("Ignoring invalid environment configuration: {e}");
        SegmenterConfig::default()
    });
    PipelineRegistry::new(config)
});

/// The process-wide registry, configured from the environment on first use.
pub fn global() -> &'static PipelineRegistry {
    &GLOBAL
}

#[cfg(test)]
mod tests {
    use std::sync::Barrier;
    use std::thread;
    use std::time::Duration;

    use super::*;
    use crate::analysis::analyzer::Analyzer;
    use crate::analysis::token::{IntoTokenStream, Token, TokenStream};

    struct SplitAnalyzer;

    impl Analyzer for SplitAnalyzer {
        fn analyze(&self, text: &str) -> Result<TokenStream> {
            let tokens: Vec<Token> = text
                .split_whitespace()
                .enumerate()
                .map(|(i, w)| Token::new(w, i))
                .collect();
            Ok(tokens.into_token_stream())
        }

        fn name(&self) -> &str {
            "split"
        }
    }

    /// Fails the first `fail_first` builds, sleeping `delay` in each build.
    struct ScriptedFactory {
        fail_first: usize,
        delay: Duration,
        builds: AtomicUsize,
    }

    impl ScriptedFactory {
        fn new(fail_first: usize, delay: Duration) -> Self {
            ScriptedFactory {
                fail_first,
                delay,
                builds: AtomicUsize::new(0),
            }
        }
    }

    impl PipelineFactory for ScriptedFactory {
        fn build(&self, language: Language) -> Result<Pipeline> {
            let n = self.builds.fetch_add(1, Ordering::SeqCst);
            thread::sleep(self.delay);
            if n < self.fail_first {
                return Err(LangsegError::resource("dictionary not found"));
            }
            Ok(Pipeline::with_analyzer(
                Profile::resolve(language, ProfileName::Minimal),
                Box::new(SplitAnalyzer),
            ))
        }

        fn profile(&self, _language: Language) -> ProfileName {
            ProfileName::Minimal
        }
    }

    #[test]
    fn test_constructs_once() {
        let factory = Arc::new(ScriptedFactory::new(0, Duration::ZERO));
        let registry = PipelineRegistry::with_factory(factory.clone());

        assert_eq!(registry.state(Language::Thai), SlotState::Uninitialized);
        let first = registry.get_pipeline(Language::Thai).unwrap();
        let second = registry.get_pipeline(Language::Thai).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(registry.state(Language::Thai), SlotState::Ready);
        assert_eq!(registry.construction_count(Language::Thai), 1);
        assert_eq!(factory.builds.load(Ordering::SeqCst), 1);
        assert_eq!(first.run("a b"), vec!["a", "b"]);
    }

    #[test]
    fn test_concurrent_first_calls() {
        let factory = Arc::new(ScriptedFactory::new(0, Duration::from_millis(20)));
        let registry = Arc::new(PipelineRegistry::with_factory(factory.clone()));
        let barrier = Arc::new(Barrier::new(8));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let registry = Arc::clone(&registry);
                let barrier = Arc::clone(&barrier);
                thread::spawn(move || {
                    barrier.wait();
                    registry.get_pipeline(Language::Korean).unwrap()
                })
            })
            .collect();

        let pipelines: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert!(pipelines.iter().all(|p| Arc::ptr_eq(p, &pipelines[0])));
        assert_eq!(factory.builds.load(Ordering::SeqCst), 1);
        assert_eq!(registry.construction_count(Language::Korean), 1);
    }

    #[test]
    fn test_retry_after_failure() {
        let factory = Arc::new(ScriptedFactory::new(1, Duration::ZERO));
        let registry = PipelineRegistry::with_factory(factory.clone());

        let err = registry.get_pipeline(Language::Japanese).unwrap_err();
        assert!(matches!(
            err,
            LangsegError::Construction {
                language: Language::Japanese,
                ..
            }
        ));
        assert!(err.to_string().contains("dictionary not found"));
        assert_eq!(registry.state(Language::Japanese), SlotState::Uninitialized);
        assert_eq!(registry.failure_count(Language::Japanese), 1);
        assert!(registry.last_error(Language::Japanese).is_some());

        registry.get_pipeline(Language::Japanese).unwrap();
        assert_eq!(registry.state(Language::Japanese), SlotState::Ready);
        assert_eq!(registry.last_error(Language::Japanese), None);
        assert_eq!(factory.builds.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_waiters_share_failed_attempt() {
        let factory = Arc::new(ScriptedFactory::new(1, Duration::from_millis(100)));
        let registry = Arc::new(PipelineRegistry::with_factory(factory.clone()));

        let leader = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.get_pipeline(Language::Thai).map(|_| ()))
        };
        thread::sleep(Duration::from_millis(30));
        let waiter = {
            let registry = Arc::clone(&registry);
            thread::spawn(move || registry.get_pipeline(Language::Thai).map(|_| ()))
        };

        assert!(leader.join().unwrap().is_err());
        assert!(waiter.join().unwrap().is_err());
        assert_eq!(factory.builds.load(Ordering::SeqCst), 1);

        // a fresh caller retries
        assert!(registry.get_pipeline(Language::Thai).is_ok());
    }

    #[test]
    fn test_languages_are_isolated() {
        struct KoreanBroken;
        impl PipelineFactory for KoreanBroken {
            fn build(&self, language: Language) -> Result<Pipeline> {
                if language == Language::Korean {
                    return Err(LangsegError::resource("ko-dic missing"));
                }
                Ok(Pipeline::with_analyzer(
                    Profile::resolve(language, ProfileName::Minimal),
                    Box::new(SplitAnalyzer),
                ))
            }
            fn profile(&self, _language: Language) -> ProfileName {
                ProfileName::Minimal
            }
        }

        let registry = PipelineRegistry::with_factory(Arc::new(KoreanBroken));
        let results = registry.warm_up(&Language::ALL);

        assert!(results[0].1.is_ok());
        assert!(results[1].1.is_err());
        assert!(results[2].1.is_ok());
        assert_eq!(registry.state(Language::Japanese), SlotState::Ready);
        assert_eq!(registry.state(Language::Korean), SlotState::Uninitialized);
    }
}
