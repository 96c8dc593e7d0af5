mod cli;

use std::{io::Read, path::Path};

use bin_status::{
    bulk,
    config::{Config, FailurePolicy},
    error::{self, LookupError},
    report, utils, BatchProcessor, BinLookup, LookupClient,
};
use clap::Parser;
use cli::{Cli, Commands};
use colored::*;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("bin_status=info,warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match Config::load(&cli.config) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    let options = RunOptions {
        policy: if cli.keep_going {
            FailurePolicy::Collect
        } else {
            config.batch.failure_policy
        },
        concurrency: cli.concurrency.unwrap_or(config.batch.concurrency),
    };

    let result = match LookupClient::new(&config.lookup) {
        Ok(client) => match cli.command {
            Commands::Check { cards } => check_inline(client, cards, options).await,
            Commands::File { input, output } => {
                info!("Checking cards from {}", input.display());
                check_file(client, &input, &output, options).await
            }
        },
        Err(e) => Err(e),
    };

    if let Err(e) = result {
        error!("{}", format!("Error: {}", e).red());
        std::process::exit(1);
    }
}

#[derive(Clone, Copy)]
struct RunOptions {
    policy: FailurePolicy,
    concurrency: usize,
}

async fn run_batch<L: BinLookup>(
    processor: &BatchProcessor<L>,
    cards: &[String],
    options: RunOptions,
) -> error::Result<Vec<String>> {
    match options.policy {
        FailurePolicy::Abort => processor.process_concurrent(cards, options.concurrency).await,
        FailurePolicy::Collect => Ok(processor
            .process_each(cards)
            .await
            .into_iter()
            .map(|outcome| match outcome.result {
                Ok(record) => record,
                Err(e) => report::format_failure(&outcome.card, &e),
            })
            .collect()),
    }
}

async fn check_inline(
    client: LookupClient,
    cards: Vec<String>,
    options: RunOptions,
) -> error::Result<()> {
    let cards = if cards.is_empty() {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .map_err(|e| LookupError::Io {
                path: "<stdin>".into(),
                source: e,
            })?;
        bulk::parse_cards(&text)
    } else {
        cards
    };

    let processor = BatchProcessor::new(client);
    let records = run_batch(&processor, &cards, options).await?;

    println!("{}", report::join_reply(&records));
    Ok(())
}

async fn check_file(
    client: LookupClient,
    input: &Path,
    output: &Path,
    options: RunOptions,
) -> error::Result<()> {
    let cards = bulk::read_cards(input)?;

    let progress = utils::batch_progress(cards.len());
    let processor = BatchProcessor::new(client).with_progress(progress.clone());
    let records = run_batch(&processor, &cards, options).await;
    progress.finish_and_clear();
    let records = records?;

    bulk::write_records(output, &records)?;

    println!(
        "{} Wrote {} records to {}",
        "✓".green(),
        records.len().to_string().green(),
        output.display().to_string().cyan()
    );
    Ok(())
}
