//! pagechunk - split documents into overlapping, token-budgeted chunks.
//!
//! # Usage
//!
//! ```bash
//! pagechunk report.pdf
//! pagechunk report.pdf --chunk-size 500 --chunk-overlap 50 -o out/report.json
//! pagechunk a.pdf b.pdf c.txt --no-save -v
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use pagechunk::{
    default_output_path, save_to_json, Chunk, ChunkSummary, Chunker, ChunkingConfig,
    DocumentProcessor,
};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Split PDF or text documents into chunks for a vector database.
///
/// Flags override values from --config, which override the defaults.
#[derive(Parser)]
#[command(name = "pagechunk", version, about)]
struct Cli {
    /// Documents to process (PDF, or UTF-8 text with form-feed page breaks)
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Token budget per chunk [default: 300]
    #[arg(long)]
    chunk_size: Option<usize>,

    /// Overlap between chunks in tokens (overrides --chunk-overlap-percent)
    #[arg(long)]
    chunk_overlap: Option<usize>,

    /// Overlap as a fraction of the chunk size [default: 0.1]
    #[arg(long)]
    chunk_overlap_percent: Option<f64>,

    /// Chunks and pages under this many tokens are dropped [default: 20]
    #[arg(long)]
    min_chunk_size: Option<usize>,

    /// Tokenizer encoding, or "approximate" [default: cl100k_base]
    #[arg(long)]
    encoding: Option<String>,

    /// JSON file with chunking parameters
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output JSON file (default: <input>_chunks.json next to each input)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Do not write JSON output
    #[arg(long)]
    no_save: bool,

    /// Leave page numbers out of chunk metadata
    #[arg(long)]
    no_page_numbers: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn chunking_config(&self) -> Result<ChunkingConfig> {
        let mut config = match &self.config {
            Some(path) => ChunkingConfig::from_json_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => ChunkingConfig::default(),
        };

        if let Some(size) = self.chunk_size {
            config.chunk_size = size;
        }
        if let Some(overlap) = self.chunk_overlap {
            config.chunk_overlap = Some(overlap);
        }
        if let Some(percent) = self.chunk_overlap_percent {
            config.chunk_overlap_percent = percent;
        }
        if let Some(min) = self.min_chunk_size {
            config.min_chunk_size = min;
        }
        if let Some(encoding) = &self.encoding {
            config.encoding = encoding.clone();
        }

        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.chunking_config()?;
    let chunker = Chunker::new(config).context("Invalid chunking configuration")?;
    let processor =
        DocumentProcessor::new(chunker).include_page_numbers(!cli.no_page_numbers);

    if let [path] = cli.paths.as_slice() {
        run_single(&cli, &processor, path)
    } else {
        run_batch(&cli, &processor);
        Ok(())
    }
}

fn run_single(cli: &Cli, processor: &DocumentProcessor, path: &Path) -> Result<()> {
    let start = Instant::now();
    let chunks = processor
        .process(path)
        .with_context(|| format!("Failed to process {}", path.display()))?;

    print_summary(path, processor, &chunks, start.elapsed().as_secs_f64());
    print_preview(&chunks);

    if !cli.no_save {
        let output = cli.output.clone().unwrap_or_else(|| default_output_path(path));
        save_to_json(&chunks, &output)
            .with_context(|| format!("Failed to save chunks to {}", output.display()))?;
        println!("\n✓ Chunks saved to: {}", output.display());
    }

    Ok(())
}

/// Several inputs: one file per document, or one combined file with --output
fn run_batch(cli: &Cli, processor: &DocumentProcessor) {
    if let Some(output) = &cli.output {
        let chunks = processor.process_many(&cli.paths);
        println!(
            "Processed {} documents into {} chunks",
            cli.paths.len(),
            chunks.len()
        );
        if !cli.no_save {
            match save_to_json(&chunks, output) {
                Ok(path) => println!("✓ Chunks saved to: {}", path.display()),
                Err(e) => tracing::error!("{}", e),
            }
        }
        return;
    }

    let mut failures = 0;
    for path in &cli.paths {
        let start = Instant::now();
        let chunks = match processor.process(path) {
            Ok(chunks) => chunks,
            Err(e) => {
                tracing::error!(path = %path.display(), "failed to process document: {}", e);
                failures += 1;
                continue;
            }
        };

        print_summary(path, processor, &chunks, start.elapsed().as_secs_f64());

        if !cli.no_save {
            let output = default_output_path(path);
            match save_to_json(&chunks, &output) {
                Ok(path) => println!("✓ Chunks saved to: {}", path.display()),
                Err(e) => {
                    tracing::error!("{}", e);
                    failures += 1;
                }
            }
        }
    }

    println!(
        "\nDone: {} succeeded, {} failed",
        cli.paths.len() - failures,
        failures
    );
}

fn print_summary(path: &Path, processor: &DocumentProcessor, chunks: &[Chunk], seconds: f64) {
    let chunker = processor.chunker();
    let summary = ChunkSummary::of(chunks);
    let overlap_percent = 100.0 * chunker.chunk_overlap() as f64 / chunker.chunk_size() as f64;

    println!("\n{}", "=".repeat(60));
    println!("Chunking results");
    println!("{}", "=".repeat(60));
    println!("File:            {}", path.display());
    println!("Tokenizer:       {}", chunker.tokenizer_name());
    println!("Chunk size:      {} tokens", chunker.chunk_size());
    println!(
        "Overlap:         {} tokens ({:.0}%)",
        chunker.chunk_overlap(),
        overlap_percent
    );
    println!("Chunks created:  {}", summary.chunk_count);
    if summary.chunk_count > 0 {
        println!(
            "Average chunk:   {:.1} tokens ({:.0} chars)",
            summary.avg_tokens, summary.avg_chars
        );
        println!("Largest chunk:   {} tokens", summary.max_tokens);
    }
    println!("Elapsed:         {:.2}s", seconds);
    println!("{}\n", "=".repeat(60));
}

fn print_preview(chunks: &[Chunk]) {
    if chunks.is_empty() {
        return;
    }

    println!("First chunks:\n");
    for (i, chunk) in chunks.iter().take(3).enumerate() {
        let source = chunk
            .metadata_value("source_name")
            .and_then(|v| v.as_str())
            .unwrap_or("unknown");
        let page = chunk
            .metadata_value("page_number")
            .map(|v| v.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        let excerpt: String = chunk.text.chars().take(200).collect();

        println!("--- Chunk {} ---", i + 1);
        println!("Source: {}, page: {}", source, page);
        println!("Tokens: {}, chars: {}", chunk.token_count, chunk.char_count);
        println!("Text: {}...\n", excerpt);
    }
}
