//! `reimburse-submit` -- submit a receipt reimbursement request.
//!
//! Reads the receipt from disk, checks the form rules locally and posts the
//! request to the reimbursement server.
//!
//! # Environment variables
//!
//! | Variable             | Required | Default                 | Description        |
//! |----------------------|----------|-------------------------|--------------------|
//! | `REIMBURSE_ENDPOINT` | no       | `http://localhost:3000` | Server base URL    |

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use reimburse_client::{ClientError, ReimbursementClient};
use reimburse_core::form::{FormInput, FormState, MISSING_RECEIPT_MESSAGE};
use reimburse_core::receipt::{self, ACCEPTED_EXTENSIONS};
use reimburse_core::submission::ReceiptUpload;

/// Submit a receipt reimbursement request.
#[derive(Parser, Debug)]
#[command(name = "reimburse-submit", version, about)]
struct Cli {
    /// Reimbursement server base URL.
    #[arg(long, env = "REIMBURSE_ENDPOINT", default_value = "http://localhost:3000")]
    endpoint: String,

    /// Date of purchase (YYYY-MM-DD).
    #[arg(long, default_value = "")]
    date: String,

    /// Amount in dollars, e.g. 42.50.
    #[arg(long, default_value = "")]
    amount: String,

    /// What the expense was for (at least 10 characters).
    #[arg(long, default_value = "")]
    description: String,

    /// Receipt file (PDF, JPG, PNG).
    #[arg(long)]
    receipt: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "reimburse_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let receipt = match &cli.receipt {
        Some(path) => Some(read_receipt(path).await?),
        None => None,
    };

    let mut input = FormInput {
        date: cli.date,
        amount: cli.amount,
        description: cli.description,
        receipt,
    };
    let mut state = FormState::new();

    if input.receipt.is_none() {
        state.reject(MISSING_RECEIPT_MESSAGE);
        print_banner(&state);
        std::process::exit(1);
    }

    let client = ReimbursementClient::new(&cli.endpoint);
    state.begin()?;
    println!("{}", state.submit_label());

    match client.submit(&input).await {
        Ok(record) => {
            state.succeed();
            input.reset();
            tracing::info!(id = record.id, receipt_file = %record.receipt_file, "Submitted");
            print_banner(&state);
            println!(
                "#{} {} ${:.2} {} ({})",
                record.id, record.date, record.amount, record.description, record.receipt_file
            );
            Ok(())
        }
        Err(ClientError::Invalid(errors)) => {
            state.reset();
            for (field, message) in errors.iter() {
                eprintln!("{field}: {message}");
            }
            std::process::exit(2);
        }
        Err(e) => {
            tracing::error!(error = %e, "Submission failed");
            state.fail();
            print_banner(&state);
            std::process::exit(1);
        }
    }
}

/// Load a receipt, applying the file picker's extension filter.
async fn read_receipt(path: &Path) -> anyhow::Result<ReceiptUpload> {
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .context("Receipt path has no file name")?
        .to_string();

    if !receipt::is_accepted_extension(&file_name) {
        anyhow::bail!(
            "Receipt must be one of: {}",
            ACCEPTED_EXTENSIONS.join(", ")
        );
    }

    let data = tokio::fs::read(path)
        .await
        .with_context(|| format!("Failed to read receipt {}", path.display()))?;

    Ok(ReceiptUpload { file_name, data })
}

fn print_banner(state: &FormState) {
    if let Some(banner) = state.banner() {
        println!("{banner}");
    }
}
