// src/main.rs

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use huffpack::{codec, logger};

#[derive(Parser)]
#[command(name = "huffpack", version)]
#[command(about = "Lossless Huffman compression over 16-bit symbols.", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compress a file
    Compress {
        /// File to compress
        input: PathBuf,
        /// Destination for the compressed file
        output: PathBuf,
    },
    /// Decompress a previously compressed file
    Decompress {
        /// Compressed file to read
        input: PathBuf,
        /// Destination for the reconstructed bytes
        output: PathBuf,
    },
}

fn main() -> ExitCode {
    logger::init();

    let cli = Cli::parse();
    let started = Instant::now();

    let result = match cli.command {
        Commands::Compress { input, output } => {
            let span = tracing::info_span!("compress", input = %input.display());
            let _enter = span.enter();
            codec::compress_file(&input, &output)
        }
        Commands::Decompress { input, output } => {
            let span = tracing::info_span!("decompress", input = %input.display());
            let _enter = span.enter();
            codec::decompress_file(&input, &output)
        }
    };

    match result {
        Ok(()) => {
            info!(elapsed_ms = started.elapsed().as_millis() as u64, "done");
            ExitCode::SUCCESS
        }
        Err(e) => {
            // Failed runs may leave a partial destination behind; it is the
            // caller's job to discard it.
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
