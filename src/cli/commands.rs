//! Command implementations for the langseg CLI.

use std::io::{self, BufRead};

use log::debug;

use crate::batch::BatchDriver;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SegmenterConfig;
use crate::error::Result;
use crate::language::Language;
use crate::profile::{Profile, ProfileName};
use crate::registry::PipelineRegistry;
use crate::segment::{SegmentOutcome, try_segment_with};

/// Execute a CLI command.
pub fn execute_command(args: LangsegArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Segment(segment_args) => segment_text(segment_args.clone(), config, &args),
        Command::Batch(batch_args) => batch_file(batch_args.clone(), config, &args),
        Command::Profiles(profiles_args) => list_profiles(profiles_args.clone(), config, &args),
    }
}

/// Resolve the configuration from `--config`, the environment and `--profile`.
pub fn load_config(args: &LangsegArgs) -> Result<SegmenterConfig> {
    let mut config = match &args.config {
        Some(path) => {
            debug!("Loading configuration from: {}", path.display());
            let mut config = SegmenterConfig::from_file(path)?;
            config.apply_env_overrides(|key| std::env::var(key).ok())?;
            config
        }
        None => SegmenterConfig::from_env()?,
    };

    if let Some(profile) = args.profile {
        config = config.with_profile(profile);
    }
    Ok(config)
}

/// Segment the argument text, or every stdin line.
fn segment_text(args: SegmentArgs, config: SegmenterConfig, cli_args: &LangsegArgs) -> Result<()> {
    let registry = PipelineRegistry::new(config);
    let profile = registry.profile(args.language);

    let run = |text: String| -> Result<()> {
        let result = match try_segment_with(&registry, args.language, Some(&text)) {
            SegmentOutcome::Tokens(tokens) => SegmentResult {
                language: args.language,
                profile,
                text,
                tokens,
                unavailable: None,
            },
            SegmentOutcome::Unavailable { reason } => SegmentResult {
                language: args.language,
                profile,
                text,
                tokens: Vec::new(),
                unavailable: Some(reason),
            },
        };
        output_result("Segmentation result", &result, cli_args)
    };

    match args.text {
        Some(text) => run(text),
        None => {
            for line in io::stdin().lock().lines() {
                run(line?)?;
            }
            Ok(())
        }
    }
}

/// Segment a file into a timestamped result file.
fn batch_file(args: BatchArgs, config: SegmenterConfig, cli_args: &LangsegArgs) -> Result<()> {
    let results_root = config.results_dir.clone();
    let registry = PipelineRegistry::new(config);

    let mut driver = BatchDriver::new(&registry, args.language);
    if let Some(dir) = args.results_dir {
        driver = driver.with_results_dir(dir);
    } else if let Some(root) = results_root {
        driver = driver.with_results_root(root);
    }
    if args.sequential {
        driver = driver.sequential();
    }

    if cli_args.verbosity() > 0 {
        println!("Processing file: {}", args.input.display());
    }

    let report = driver.process_file(&args.input)?;
    output_result("Batch processing completed", &report, cli_args)
}

/// Print the profile table, marking the selected profile of each language.
fn list_profiles(
    args: ProfilesArgs,
    config: SegmenterConfig,
    cli_args: &LangsegArgs,
) -> Result<()> {
    let languages: Vec<Language> = match args.language {
        Some(language) => vec![language],
        None => Language::ALL.to_vec(),
    };

    let profiles = languages
        .into_iter()
        .flat_map(|language| {
            let selected = config.for_language(language).profile;
            ProfileName::ALL.into_iter().map(move |name| ProfileRow {
                language,
                profile: name,
                selected: name == selected,
                stages: Profile::resolve(language, name).stage_kinds(),
            })
        })
        .collect();

    output_result("Profiles", &ProfileTable { profiles }, cli_args)
}
