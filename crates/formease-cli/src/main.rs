//! FormEase CLI - pre-fill a submission form from an uploaded document.

mod cli;
mod output;

use anyhow::{anyhow, Context};
use clap::Parser;
use cli::Cli;
use formease_domain::{merge, FormState};
use formease_extractor::{ExtractionOutcome, Extractor, ExtractorConfig, ExtractorError};
use formease_ingest::ingest_file;
use formease_llm::GeminiProvider;
use output::Formatter;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let formatter = Formatter::new(cli.format, !cli.no_color);

    let payload = ingest_file(&cli.file)
        .with_context(|| format!("Could not ingest '{}'", cli.file.display()))?;

    let api_key = cli
        .api_key
        .ok_or_else(|| anyhow!("No API key: set GEMINI_API_KEY or pass --api-key"))?;
    let backend = GeminiProvider::new(&cli.endpoint, &cli.model, api_key);

    let config = ExtractorConfig {
        extraction_timeout_secs: cli.timeout,
        model: cli.model.clone(),
    };
    config.validate().map_err(|e| anyhow!(e))?;

    let extractor = Extractor::new(backend, config);

    let record = match extractor.extract(&payload).await {
        Ok(record) => record,
        Err(e @ ExtractorError::BackendUnavailable(_)) => {
            return Err(anyhow!(e).context(
                "An error occurred during extraction. \
                 This may be due to a missing or invalid Gemini API key.",
            ));
        }
        Err(e) => return Err(anyhow!(e).context("An error occurred during extraction")),
    };

    match ExtractionOutcome::of(&record) {
        ExtractionOutcome::Empty => {
            println!(
                "We couldn't find details in the document. Please fill the form manually."
            );
        }
        ExtractionOutcome::Found { .. } => {
            let mut form = FormState::default();
            let fields_filled = merge(&record, &mut form);
            let output = formatter.format_form(&form, fields_filled)?;
            println!("{}", output.trim_end_matches('\n'));
        }
    }

    Ok(())
}
