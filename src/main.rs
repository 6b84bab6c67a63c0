use anyhow::Context;
use clap::{Parser, Subcommand};
use ict_issue_triage::config::Config;
use ict_issue_triage::ml::IssueClassificationService;
use ict_issue_triage::models::{load_work_logs, ClassificationRequest};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "ict-triage")]
#[command(about = "Classify ICT issues against historical work logs", long_about = None)]
struct Cli {
    /// Work-log JSON file to train on (overrides the configured default)
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify an issue description
    Classify {
        #[arg(short = 'D', long)]
        description: String,

        #[arg(short = 't', long, default_value = "Unknown")]
        item_type: String,
    },

    /// Show statistics about the trained model
    Stats,
}

fn main() -> anyhow::Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load configuration: {}", e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("ict_issue_triage={}", config.logging.level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let data_path = cli.data.unwrap_or_else(|| config.training.data_path.clone());
    let records = load_work_logs(&data_path)
        .with_context(|| format!("loading work logs from {}", data_path.display()))?;

    tracing::info!(n_records = records.len(), path = %data_path.display(), "Loaded work logs");

    let service = IssueClassificationService::from_work_logs(&records)
        .context("training issue classification model")?;

    match cli.command {
        Commands::Classify {
            description,
            item_type,
        } => {
            let request = ClassificationRequest::new(description, item_type);
            let result = service.classify(&request);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Stats => {
            println!("{}", serde_json::to_string_pretty(&service.stats())?);
        }
    }

    Ok(())
}
