//! msgsift command line
//!
//! Thin transport adapter over the detector core: loads the model registry
//! once, runs a single detection, prints the verdict label. Any other
//! presentation layer (HTTP handler, UI callback) would call the same
//! `detect` entry points with no extra state.

use clap::{Parser, Subcommand};
use msgsift_detectors::prelude::*;
use msgsift_detectors::MIN_MESSAGE_CHARS;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "msgsift")]
#[command(author, version, about = "Classify message text as spam or phishing")]
#[command(propagate_version = true)]
struct Cli {
    /// Directory holding the per-domain model artifacts
    #[arg(long, env = "MSGSIFT_MODELS_DIR", default_value = "./models")]
    models_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Check a message for spam
    Spam {
        /// Message text to classify (minimum 60 characters)
        text: String,
    },

    /// Check a message for phishing
    Phishing {
        /// Message text to classify (minimum 60 characters)
        text: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let registry = ModelRegistry::load(&cli.models_dir);

    match cli.command {
        Commands::Spam { text } => {
            let detector = SpamDetector::new(&registry)?;
            let verdict = detector.detect(&text).await;
            report_length(&text);
            println!("{}", verdict);
        }

        Commands::Phishing { text } => {
            let detector = PhishingDetector::new(&registry)?;
            let verdict = detector.detect(&text).await;
            report_length(&text);
            println!("{}", verdict);
        }
    }

    Ok(())
}

fn report_length(text: &str) {
    let chars = text.trim().chars().count();
    if chars < MIN_MESSAGE_CHARS {
        info!(chars, minimum = MIN_MESSAGE_CHARS, "message below length floor");
    }
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        "msgsift_detectors=debug,msgsift_cli=debug"
    } else {
        "msgsift_detectors=info,msgsift_cli=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
