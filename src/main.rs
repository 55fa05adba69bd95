//! This program downloads a public-domain book, by default Mary Shelley's
//! Frankenstein from Project Gutenberg, and tells which words are used most
//! often in it, ignoring common English words that carry little meaning.

mod config;
mod fetch;
mod longest;
mod progress;
mod report;
mod stopwords;
mod tokenize;
mod top;

use crate::{config::Config, report::Report};
use clap::Parser;
use log::LevelFilter;
use std::num::NonZeroUsize;
use tokio::io::{AsyncWriteExt, BufWriter};

/// Word frequency analysis of a public-domain book
///
/// Words are runs of letters, digits and underscores, and may contain
/// typographic apostrophes (’). Casing is ignored when counting words.
#[derive(Parser, Debug)]
#[command(version, author)]
struct Args {
    /// URL of the plain text document to be analyzed
    #[arg(long, default_value = DEFAULT_BOOK_URL)]
    url: Box<str>,

    /// Number of most frequent words to be displayed
    ///
    /// Common English words like "the" or "and" are not taken into account.
    /// Words which occur equally often are picked in alphabetical order.
    #[arg(short = 'n', long, default_value_t = DEFAULT_TOP_WORDS)]
    top: usize,

    /// Also display this many of the longest words, grouped by length
    #[arg(long)]
    longest: Option<NonZeroUsize>,

    /// Also display this many of the longest palindromes
    ///
    /// Common English words are not taken into account.
    #[arg(long)]
    palindromes: Option<NonZeroUsize>,
}
//
impl Args {
    /// Decode and validate CLI arguments
    pub fn parse_and_check() -> Result<Self> {
        // Decode CLI arguments
        let args = Args::parse();

        // Check CLI arguments for basic sanity
        let url = reqwest::Url::parse(&args.url)?;
        anyhow::ensure!(
            matches!(url.scheme(), "http" | "https"),
            "document URL should use the http or https scheme, not {}",
            url.scheme()
        );
        Ok(args)
    }
}
//
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Set up logging
    setup_logging().map_err(|e| anyhow::format_err!("{e}"))?;

    // Decode CLI arguments
    let config = Config::new(Args::parse_and_check()?);

    // Download the document
    let client = reqwest::Client::new();
    let document = fetch::download(&client, &config.url).await?;

    // Analyze it
    let report = Report::analyze(&document, &config.analysis);

    // Display the results
    {
        let stdout = tokio::io::stdout();
        let mut stdout = BufWriter::new(stdout);
        stdout.write_all(report.to_string().as_bytes()).await?;
        stdout.flush().await?;
    }
    Ok(())
}

/// Use anyhow for Result type erasure
pub use anyhow::Result;

/// Book that is analyzed by default: Frankenstein, by Mary Shelley
pub const DEFAULT_BOOK_URL: &str = "https://www.gutenberg.org/cache/epub/84/pg84.txt";

/// Number of frequent words that is displayed by default
pub const DEFAULT_TOP_WORDS: usize = 10;

/// Full text of a downloaded document
pub type Document = Box<str>;

/// Lowercase word
pub type Word = Box<str>;

/// Set up logging
fn setup_logging() -> syslog::Result<()> {
    syslog::init(
        syslog::Facility::LOG_USER,
        if cfg!(feature = "log-trace") {
            LevelFilter::Trace
        } else if cfg!(debug_assertions) {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        },
        None,
    )
}
