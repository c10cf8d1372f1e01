use anyhow::{Context, Result};
use clap::Parser;
use docchunk::{
    ChunkerConfig, DocumentParser, Encoding, HeuristicCounter, SmartChunker, TiktokenCounter,
    TokenCounter, DEFAULT_MAX_TOKENS,
};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Parse a PDF/DOCX document and split it into section-aware, token-bounded chunks
#[derive(Parser, Debug)]
#[command(name = "docchunk", version, about)]
struct Args {
    /// Document to process (.pdf or .docx)
    #[arg(default_value = "data/raw/resume.pdf")]
    path: PathBuf,

    /// Token budget per chunk
    #[arg(long, default_value_t = DEFAULT_MAX_TOKENS)]
    max_tokens: usize,

    /// tiktoken encoding matching the downstream model
    #[arg(long, default_value_t = Encoding::default())]
    encoding: Encoding,

    /// Estimate tokens from character counts instead of loading a BPE
    #[arg(long)]
    heuristic: bool,

    /// Number of structured elements to preview
    #[arg(long, default_value_t = 50)]
    preview_elements: usize,

    /// Characters shown per previewed element
    #[arg(long, default_value_t = 100)]
    preview_chars: usize,

    /// Print the chunks as JSON instead of the human-readable report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let start_time = Instant::now();

    let counter: Box<dyn TokenCounter> = if args.heuristic {
        Box::new(HeuristicCounter)
    } else {
        Box::new(
            TiktokenCounter::new(args.encoding)
                .with_context(|| format!("Failed to load tokenizer {}", args.encoding))?,
        )
    };
    let chunker = SmartChunker::new(counter, ChunkerConfig::new().max_tokens(args.max_tokens))
        .context("Invalid chunker configuration")?;

    // Step 1: flat text
    if !args.json {
        let flat = DocumentParser::new(false)?;
        let flat_text = flat
            .parse_text(&args.path)
            .with_context(|| format!("Failed to parse {}", args.path.display()))?;

        println!("Flat Text:");
        println!("{}", flat_text);
    }

    // Step 2: structured elements
    let structured = DocumentParser::new(true)?;
    let elements = structured
        .parse_elements(&args.path)
        .with_context(|| format!("Failed to partition {}", args.path.display()))?;
    info!(elements = elements.len(), path = %args.path.display(), "parsed document");

    if !args.json {
        println!("\nStructured Elements (first {}):", args.preview_elements);
        for element in elements.iter().take(args.preview_elements) {
            let preview: String = element.text.chars().take(args.preview_chars).collect();
            println!("[{}]: {}", element.category, preview);
        }
    }

    // Step 3: chunks
    let chunks = chunker.chunk(&elements);
    info!(
        chunks = chunks.len(),
        counter = chunker.counter().name(),
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "chunking complete"
    );

    if args.json {
        let json = serde_json::to_string_pretty(&chunks).context("Failed to serialize chunks")?;
        println!("{}", json);
        return Ok(());
    }

    println!(
        "\nChunks ({} total, max {} tokens, {}):",
        chunks.len(),
        chunker.config().max_tokens,
        chunker.counter().name()
    );
    for (i, chunk) in chunks.iter().enumerate() {
        println!(
            "  #{:<3} {:>5} tokens  section={:?}  categories={}",
            i,
            chunk.metadata.token_count,
            chunk.metadata.section.as_deref().unwrap_or("-"),
            chunk.metadata.categories.join(",")
        );
    }

    Ok(())
}
