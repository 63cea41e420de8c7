use clap::{Parser, Subcommand};
use medcast::pipeline::{self, ExportOptions, TrainOptions};
use medcast::tracking::DEFAULT_RUNS_DIR;
use medcast_index::{DEFAULT_SEARCH_K, INSIGHT_K};
use medcast_model::{
    Strategy, DEFAULT_MAX_DEPTH, DEFAULT_SEED, DEFAULT_TEST_FRACTION, DEFAULT_TREES,
};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Medical insurance cost prediction with retrieval-based comparisons
#[derive(Parser, Debug)]
#[command(name = "medcast")]
#[command(about = "Predict insurance charges and explain them via similar records", long_about = None)]
struct Args {
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Train a model on a seeded split and log the run
    Train {
        /// Input CSV path
        #[arg(short, long, default_value = "insurance.csv")]
        data: PathBuf,

        /// Model strategy: linear or random_forest
        #[arg(short, long, default_value = "linear")]
        model: String,

        /// Shuffle and bootstrap seed
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Tree count (random_forest only)
        #[arg(long, default_value_t = DEFAULT_TREES)]
        trees: usize,

        /// Maximum tree depth (random_forest only)
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        depth: usize,

        /// Directory for tracked runs
        #[arg(long, default_value = DEFAULT_RUNS_DIR)]
        runs_dir: PathBuf,
    },
    /// Write predictions and neighbor-cost insights for every record
    Export {
        /// Input CSV path
        #[arg(short, long, default_value = "insurance.csv")]
        data: PathBuf,

        /// Output CSV path
        #[arg(short, long, default_value = "dashboard_export.csv")]
        output: PathBuf,

        /// Tree count for the export model
        #[arg(long, default_value_t = DEFAULT_TREES)]
        trees: usize,

        /// Maximum tree depth for the export model
        #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
        depth: usize,

        /// Bootstrap seed for the export model
        #[arg(long, default_value_t = DEFAULT_SEED)]
        seed: u64,

        /// Neighbors per record for the insight pass
        #[arg(short, long, default_value_t = INSIGHT_K)]
        k: usize,
    },
    /// Query the similarity index with free text
    Query {
        /// Input CSV path
        #[arg(short, long, default_value = "insurance.csv")]
        data: PathBuf,

        /// Free-text query
        query: String,

        /// Result count
        #[arg(short, long, default_value_t = DEFAULT_SEARCH_K)]
        k: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting medcast v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Train {
            data,
            model,
            seed,
            trees,
            depth,
            runs_dir,
        } => {
            let strategy = Strategy::parse(&model, trees, depth)?;
            let report = pipeline::train(&TrainOptions {
                data,
                strategy,
                seed,
                test_fraction: DEFAULT_TEST_FRACTION,
                runs_dir,
            })?;
            println!("Model: {}", strategy.name());
            println!("RMSE: {}", report.rmse);
            println!("MAE: {}", report.mae);
            println!("Run: {}", report.run_id);
        }
        Command::Export {
            data,
            output,
            trees,
            depth,
            seed,
            k,
        } => {
            let report = pipeline::export(&ExportOptions {
                data,
                output,
                n_trees: trees,
                max_depth: depth,
                seed,
                k,
            })?;
            println!("Wrote {} rows to {}", report.rows, report.output.display());
        }
        Command::Query { data, query, k } => {
            let results = pipeline::query(&data, &query, k)?;
            for (i, hit) in results.iter().enumerate() {
                println!("--- Result {} (score {:.4}) ---", i + 1, hit.score);
                println!("{}", hit.document.text);
            }
        }
    }

    Ok(())
}
