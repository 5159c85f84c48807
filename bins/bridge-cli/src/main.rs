mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bridge-cli")]
#[command(about = "Campus Bridge CLI - Judge coding challenge submissions locally", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Judge a source file against a single test case
    Evaluate {
        /// Path to the source file
        #[arg(short, long)]
        file: PathBuf,

        /// Language tag (java, cpp/c++, javascript/js, python/py)
        #[arg(short, long)]
        language: String,

        /// Test input; a literal "\n" separates the array from the target
        #[arg(short, long)]
        input: String,

        /// Expected output, e.g. [0,1]
        #[arg(short, long)]
        expected: String,
    },

    /// Judge a source file against every test case of a challenge
    Test {
        /// Path to the source file
        #[arg(short, long)]
        file: PathBuf,

        /// Language tag
        #[arg(short, long)]
        language: String,

        /// Challenge id
        #[arg(short, long, default_value = "two-sum")]
        challenge: String,

        /// Challenge catalog JSON (defaults to BRIDGE_CHALLENGES_PATH or built-in)
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Print the run summary as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// List available challenges
    Challenges {
        /// Challenge catalog JSON
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Print starter code for a challenge
    Starter {
        /// Challenge id
        #[arg(short, long, default_value = "two-sum")]
        challenge: String,

        /// Language tag
        #[arg(short, long)]
        language: String,

        /// Challenge catalog JSON
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let passed = match cli.command {
        Commands::Evaluate {
            file,
            language,
            input,
            expected,
        } => commands::evaluate_file(&file, &language, &input, &expected)?,
        Commands::Test {
            file,
            language,
            challenge,
            catalog,
            json,
        } => commands::test_file(&file, &language, &challenge, catalog.as_deref(), json)?,
        Commands::Challenges { catalog } => {
            commands::list_challenges(catalog.as_deref())?;
            true
        }
        Commands::Starter {
            challenge,
            language,
            catalog,
        } => {
            println!("{}", commands::starter_code(&challenge, &language, catalog.as_deref())?);
            true
        }
    };

    if !passed {
        std::process::exit(1);
    }

    Ok(())
}
