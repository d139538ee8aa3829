// src/main.rs
mod batch;
mod extractors;
mod storage;
mod utils;

use std::path::PathBuf;

use clap::Parser;
use batch::BatchExtractor;
use extractors::StrategyKind;
use storage::StorageManager;
use utils::AppError;

/// Extracts the text of every PDF in a directory into one combined file
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory scanned for `.pdf` files
    #[arg(short, long, default_value = "docx")]
    input_dir: PathBuf,

    /// Combined text output file
    #[arg(short, long, default_value = "pdf_extracted.txt")]
    output: PathBuf,

    /// Decoding approach used for every file
    #[arg(short, long, value_enum, default_value_t = StrategyKind::WholeBuffer)]
    strategy: StrategyKind,

    /// Also write a JSON run report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Extract a single file and print the first characters of its text instead of running the batch
    #[arg(long, conflicts_with = "report")]
    probe: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), AppError> {
    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging();

    // 2. Parse CLI Arguments
    let args = Args::parse();
    tracing::debug!("Starting with args: {:?}", args);

    let extractor = BatchExtractor::new(args.strategy.build());

    // 3. Smoke-test a single file
    if let Some(path) = &args.probe {
        tracing::info!("Probing {} with {} strategy", path.display(), extractor.strategy_name());
        return match extractor.probe(path).await {
            Ok(preview) => {
                println!("{}", preview);
                Ok(())
            }
            Err(e) => {
                tracing::error!("Probe of {} failed: {}", path.display(), e);
                Err(e.into())
            }
        };
    }

    // 4. Run the batch; per-file failures end up inside the output
    let report = extractor.run(&args.input_dir, &args.output).await?;

    // 5. Optional run report
    if let Some(report_path) = &args.report {
        StorageManager::new(&args.output).save_report(report_path, &report)?;
    }

    if report.succeeded == 0 && report.failed > 0 {
        tracing::warn!("None of the {} PDF files could be extracted", report.failed);
    }

    Ok(())
}
