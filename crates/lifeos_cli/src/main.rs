//! LifeOS command-line probe.
//!
//! # Responsibility
//! - Provide a small executable to exercise `lifeos_core` without a UI shell.
//! - Own one draft mailbox per run and pass it to the handoff session.

mod session;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lifeos_core::{Classifier, ClassifierConfig, DraftMailbox};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lifeos", version, about = "LifeOS core probe: classification and draft handoff")]
struct Cli {
    /// Absolute directory for rolling log files; logging stays off when unset.
    #[arg(long, global = true, env = "LIFEOS_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error); needs a log directory.
    #[arg(long, global = true, env = "LIFEOS_LOG_LEVEL", requires = "log_dir")]
    log_level: Option<String>,

    /// JSON classifier config; falls back to LIFEOS_CLASSIFIER_CONFIG, then defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print core health and version
    Ping,
    /// Print thought, message and tone categories for TEXT
    Classify {
        text: String,
    },
    /// Read handoff commands from stdin against one mailbox
    Handoff,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli
            .log_level
            .as_deref()
            .unwrap_or(lifeos_core::default_log_level());
        lifeos_core::init_logging(level, log_dir).context("failed to initialize logging")?;
    }

    let config = match cli.config.as_deref() {
        Some(path) => ClassifierConfig::from_json_file(path),
        None => ClassifierConfig::load_from_env(),
    }
    .context("failed to load classifier config")?;
    let classifier = Classifier::new(config).context("invalid classifier config")?;

    match cli.command {
        Command::Ping => {
            println!("lifeos_core ping={}", lifeos_core::ping());
            println!("lifeos_core version={}", lifeos_core::core_version());
        }
        Command::Classify { text } => {
            let classification = classifier.classify(text.as_str());
            println!("thought={}", classification.thought);
            println!("message={}", classification.message);
            println!("tone={}", classification.tone);
        }
        Command::Handoff => {
            let mailbox = DraftMailbox::new();
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            session::run_session(stdin.lock(), &mut stdout, &mailbox, &classifier)?;
        }
    }

    Ok(())
}
