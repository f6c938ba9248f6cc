//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific
//! modules. Every file path defaults to the built-in constants but can be
//! overridden per invocation.

mod fixtures;
mod reshape;
mod scrape;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config;

#[derive(Parser)]
#[command(name = "cardscrape")]
#[command(about = "Wiki card catalog scraper and relational fixture pipeline")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Scrape the card catalog
    Scrape {
        #[command(subcommand)]
        command: ScrapeCommands,
    },

    /// Split combined "index: name" fusion fields into Number and Name
    Reshape {
        /// Input fusions JSON
        #[arg(long, default_value = config::FUSIONS_JSON)]
        input: PathBuf,
        /// Output reshaped JSON
        #[arg(long, default_value = config::FUSIONS_RESHAPED_JSON)]
        output: PathBuf,
    },

    /// Produce seed fixtures for the record manager
    Fixtures {
        #[command(subcommand)]
        command: FixtureCommands,
    },
}

#[derive(Subcommand)]
enum ScrapeCommands {
    /// Extract the index tables to JSON and CSV
    List {
        /// Output JSON path
        #[arg(long, default_value = config::CARD_LIST_JSON)]
        json: PathBuf,
        /// Output CSV path
        #[arg(long, default_value = config::CARD_LIST_CSV)]
        csv: PathBuf,
    },
    /// Crawl every detail page linked from the index
    Cards {
        /// Output JSON path
        #[arg(long, default_value = config::CARD_DETAILS_JSON)]
        json: PathBuf,
        /// Output CSV path
        #[arg(long, default_value = config::CARD_DETAILS_CSV)]
        csv: PathBuf,
        /// Seconds to wait between page fetches
        #[arg(long, default_value_t = config::REQUEST_DELAY_SECS)]
        delay: u64,
    },
}

#[derive(Subcommand)]
enum FixtureCommands {
    /// Wrap scraped card details in the dm1.card fixture envelope
    Cards {
        /// Input card details JSON
        #[arg(long, default_value = config::CARD_DETAILS_JSON)]
        input: PathBuf,
        /// Output fixture JSON
        #[arg(long, default_value = config::CARD_FIXTURES_JSON)]
        output: PathBuf,
    },
    /// Split reshaped fusions into fusion and material-group fixtures
    Fusions {
        /// Input reshaped fusions JSON
        #[arg(long, default_value = config::FUSIONS_RESHAPED_JSON)]
        input: PathBuf,
        /// Output envelope JSON (intermediate, one record per fusion)
        #[arg(long, default_value = config::FUSION_ENVELOPE_JSON)]
        envelope: PathBuf,
        /// Output fusion fixture JSON
        #[arg(long, default_value = config::FUSION_FIXTURES_JSON)]
        fusions: PathBuf,
        /// Output material-group fixture JSON
        #[arg(long, default_value = config::MATERIAL_GROUP_FIXTURES_JSON)]
        groups: PathBuf,
    },
}

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Scrape { command } => match command {
            ScrapeCommands::List { json, csv } => scrape::cmd_scrape_list(&json, &csv).await,
            ScrapeCommands::Cards { json, csv, delay } => {
                scrape::cmd_scrape_cards(&json, &csv, delay).await
            }
        },
        Commands::Reshape { input, output } => reshape::cmd_reshape(&input, &output),
        Commands::Fixtures { command } => match command {
            FixtureCommands::Cards { input, output } => {
                fixtures::cmd_card_fixtures(&input, &output)
            }
            FixtureCommands::Fusions {
                input,
                envelope,
                fusions,
                groups,
            } => fixtures::cmd_fusion_fixtures(&input, &envelope, &fusions, &groups),
        },
    }
}
