use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use hexaco_score::config::{self, Overrides};
use hexaco_score::{inventory, logging, output, responses, scoring, ScoreError};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_OUTPUT: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Parser, Debug)]
#[command(name = "hexaco-score")]
#[command(about = "Score HEXACO-PI-R (100-item) responses into trait means", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Do not print the score summary to stdout
    #[arg(short, long)]
    quiet: bool,

    /// Path to config file (defaults to ./hexaco.yaml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Response file with columns q1..q100 (default: results.csv)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Where to write the trait scores (default: personality.csv)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also score the 24 facets
    #[arg(long)]
    facets: bool,
}

fn exit_code(err: &ScoreError) -> i32 {
    match err {
        ScoreError::SourceNotFound { .. }
        | ScoreError::MissingColumns { .. }
        | ScoreError::Csv { .. } => EXIT_INPUT,
        ScoreError::SinkWrite { .. } => EXIT_OUTPUT,
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let start_time = Instant::now();

    // Load config
    let config = match config::load_config(cli.config.clone()) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = config::validate_config(&config) {
        tracing::error!("Config errors:");
        for error in errors {
            tracing::error!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let settings = config.resolve(&Overrides {
        input: cli.input,
        output: cli.output,
        facets: cli.facets,
    });
    tracing::debug!(?settings, "resolved run settings");

    if let Err(errors) = config::validate_settings(&settings) {
        tracing::error!("Config errors:");
        for error in errors {
            tracing::error!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    // Validate the compiled scoring key before touching any data
    let scales = inventory::all_scales(settings.facets);
    if let Err(errors) = scoring::validate_key(&scales, &inventory::REVERSED_ITEMS) {
        tracing::error!("Scoring key errors:");
        for error in errors {
            tracing::error!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let loaded = match responses::load_responses(&settings.input, settings.delimiter) {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("{}", e);
            std::process::exit(exit_code(&e));
        }
    };

    for cell in &loaded.malformed {
        tracing::warn!("Treating as missing: {}", cell);
    }
    if !loaded.malformed.is_empty() {
        tracing::info!(
            "{} malformed cells treated as missing",
            loaded.malformed.len()
        );
    }
    tracing::debug!(
        "Loaded {} respondents from {} in {:?}",
        loaded.table.len(),
        settings.input.display(),
        start_time.elapsed()
    );

    let scores = scoring::score_responses(&loaded.table, &scales);

    if !cli.quiet {
        let use_colors = output::should_use_colors();
        println!("{}", output::format_score_table(&scores, use_colors));
    }

    if let Err(e) = output::save_scores(&settings.output, &scores, settings.delimiter) {
        tracing::error!("{}", e);
        std::process::exit(exit_code(&e));
    }

    tracing::info!(
        "Wrote {} scales for {} respondents to {}",
        scores.scales.len(),
        scores.len(),
        settings.output.display()
    );
    tracing::debug!("Total: {:?}", start_time.elapsed());

    std::process::exit(EXIT_SUCCESS);
}
