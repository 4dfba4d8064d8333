//! # finsight
//!
//! Command-line tooling for the finsight service: generate synthetic
//! datasets, train the fraud/anomaly models and score transactions offline.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use datagen::{feature_matrix, save_all_datasets, DatasetSummary, TransactionGenerator};
use fraud::{EngineConfig, FraudEngine, Transaction, TrainingSet};

type CliResult<T> = std::result::Result<T, String>;

#[derive(Parser)]
#[command(name = "finsight")]
#[command(about = "Financial insights tooling", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate synthetic training datasets as CSV files
    Generate {
        /// Output directory
        #[arg(short, long, default_value = "data")]
        output: PathBuf,

        /// RNG seed
        #[arg(long, default_value_t = datagen::DEFAULT_SEED)]
        seed: u64,

        /// Transaction rows
        #[arg(long, default_value_t = 50_000)]
        transactions: usize,

        /// Network traffic rows
        #[arg(long, default_value_t = 30_000)]
        network: usize,

        /// User behaviour rows
        #[arg(long, default_value_t = 25_000)]
        behavior: usize,

        /// Compliance audit rows
        #[arg(long, default_value_t = 10_000)]
        compliance: usize,

        /// Financial crisis rows
        #[arg(long, default_value_t = 50_000)]
        crisis: usize,
    },

    /// Train fraud and anomaly models on synthetic transactions
    Train {
        /// Directory for persisted models
        #[arg(short, long, default_value = "models")]
        model_dir: PathBuf,

        /// Training rows to generate
        #[arg(long, default_value_t = 50_000)]
        rows: usize,

        /// RNG seed
        #[arg(long, default_value_t = datagen::DEFAULT_SEED)]
        seed: u64,
    },

    /// Score a transaction JSON file against saved models
    Score {
        /// Directory holding persisted models
        #[arg(short, long, default_value = "models")]
        model_dir: PathBuf,

        /// JSON file with one transaction object
        #[arg(short, long)]
        input: PathBuf,

        /// Typical transaction amount for risk-factor analysis
        #[arg(long)]
        typical: Option<f64>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Generate {
            output,
            seed,
            transactions,
            network,
            behavior,
            compliance,
            crisis,
        } => generate(
            output,
            seed,
            DatasetSummary {
                transactions,
                network_traffic: network,
                user_behavior: behavior,
                compliance_audit: compliance,
                financial_crisis: crisis,
            },
        ),
        Commands::Train {
            model_dir,
            rows,
            seed,
        } => train(model_dir, rows, seed),
        Commands::Score {
            model_dir,
            input,
            typical,
        } => score(model_dir, input, typical),
    };

    if let Err(message) = result {
        eprintln!("error: {message}");
        std::process::exit(1);
    }
}

fn generate(output: PathBuf, seed: u64, counts: DatasetSummary) -> CliResult<()> {
    let written =
        save_all_datasets(&output, seed, counts).map_err(|e| e.to_string())?;
    println!(
        "generated {} samples across 5 datasets in {}",
        written.total(),
        output.display()
    );
    Ok(())
}

fn train(model_dir: PathBuf, rows: usize, seed: u64) -> CliResult<()> {
    println!("generating {rows} synthetic transactions...");
    let records = TransactionGenerator::new(seed).generate(rows);
    let (features, labels) = feature_matrix(&records);
    let set = TrainingSet::new(features, labels).map_err(|e| e.to_string())?;

    let mut engine = FraudEngine::new(EngineConfig::with_model_dir(&model_dir));

    println!("training fraud classifier...");
    let evaluation = engine.train_fraud_model(&set).map_err(|e| e.to_string())?;
    println!(
        "  accuracy {:.4}  precision {:.4}  recall {:.4}  f1 {:.4}  roc-auc {:.4}",
        evaluation.accuracy,
        evaluation.precision,
        evaluation.recall,
        evaluation.f1,
        evaluation.roc_auc
    );

    println!("training anomaly detector...");
    let summary = engine
        .train_anomaly_model(&set.features)
        .map_err(|e| e.to_string())?;
    println!(
        "  anomaly rate {:.4}  mean score {:.4}",
        summary.anomaly_rate, summary.mean_score
    );

    engine.save().map_err(|e| e.to_string())?;
    println!("models saved to {}", model_dir.display());
    Ok(())
}

fn score(model_dir: PathBuf, input: PathBuf, typical: Option<f64>) -> CliResult<()> {
    let file = File::open(&input).map_err(|e| format!("{}: {e}", input.display()))?;
    let transaction: Transaction =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| e.to_string())?;

    let mut engine = FraudEngine::new(EngineConfig::with_model_dir(&model_dir));
    engine.load().map_err(|e| e.to_string())?;

    let output = match typical {
        Some(typical) => {
            let (prediction, analysis) = engine
                .analyze_transaction(&transaction, typical)
                .map_err(|e| e.to_string())?;
            serde_json::json!({ "prediction": prediction, "analysis": analysis })
        }
        None => {
            let prediction = engine
                .predict_fraud(&transaction)
                .map_err(|e| e.to_string())?;
            serde_json::json!({ "prediction": prediction })
        }
    };
    let findings = engine
        .detect_anomalies(std::slice::from_ref(&transaction))
        .map_err(|e| e.to_string())?;

    let report = serde_json::json!({
        "fraud": output,
        "anomaly": findings.first(),
    });
    println!(
        "{}",
        serde_json::to_string_pretty(&report).map_err(|e| e.to_string())?
    );
    Ok(())
}
