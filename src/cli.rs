use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use crate::error::SimilarityError;
use crate::input::gather_documents;
use crate::output::terminal::display_comparison;
use crate::similarity::{compare, Comparison, SimilarityOptions};

/// Docsim: how similar are two documents?
///
/// Cleans both texts, drops stop words and compares their token frequency
/// vectors by cosine similarity. 0.0 means no words in common, 1.0 means
/// the same words in the same proportions.
#[derive(Parser, Debug)]
#[command(name = "docsim", version, about)]
#[command(args_conflicts_with_subcommands = true)]
#[command(
    after_help = "With no subcommand, `docsim [FILE] [FILE]` is the same as `docsim compare [FILE] [FILE]`."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    #[command(flatten)]
    pub compare: CompareArgs,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compare two documents. Missing filenames are prompted for.
    Compare(CompareArgs),

    /// Serve the comparison form over HTTP
    #[cfg(feature = "web")]
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct CompareArgs {
    /// First document; typed at a prompt when omitted
    #[arg(value_name = "FILE")]
    pub file1: Option<PathBuf>,

    /// Second document; typed at a prompt when omitted
    #[arg(value_name = "FILE")]
    pub file2: Option<PathBuf>,

    /// Longest n-gram to count (default: DOCSIM_MAX_NGRAM or 1)
    #[arg(long)]
    pub ngram: Option<usize>,

    /// Decimal places in the score (default: DOCSIM_PRECISION or 2)
    #[arg(long)]
    pub precision: Option<u32>,

    /// Print the full comparison as JSON
    #[arg(long)]
    pub json: bool,

    /// Show token and vocabulary counts under the score
    #[arg(short, long)]
    pub verbose: bool,
}

impl CompareArgs {
    /// The files given on the command line, in order.
    pub fn files(&self) -> Vec<PathBuf> {
        self.file1.iter().chain(self.file2.iter()).cloned().collect()
    }
}

#[cfg(feature = "web")]
#[derive(Args, Debug, Clone, Default, PartialEq)]
pub struct ServeArgs {
    /// Address to bind (default: DOCSIM_BIND or 127.0.0.1)
    #[arg(long)]
    pub bind: Option<String>,

    /// Port to listen on (default: DOCSIM_PORT or 5000)
    #[arg(long)]
    pub port: Option<u16>,
}

/// How a `compare` run ended. Only `Scored` is a successful exit.
#[derive(Debug, Clone, PartialEq)]
pub enum CompareOutcome {
    Scored(Comparison),
    /// A document was blank as typed, so nothing was computed
    MissingDocument,
    /// A document had no tokens left after cleaning
    EmptyDocument,
}

impl CompareOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, CompareOutcome::Scored(_))
    }
}

/// Run the `compare` command: gather both documents, score them and print
/// the result to `out`. Prompts also go to `out`; problems go to `err`.
pub fn run_compare<R, W, E>(
    args: &CompareArgs,
    options: &SimilarityOptions,
    input: &mut R,
    out: &mut W,
    err: &mut E,
) -> Result<CompareOutcome>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let (doc1, doc2) = gather_documents(&args.files(), input, out)?;

    if doc1.is_empty() || doc2.is_empty() {
        writeln!(
            err,
            "{}",
            "Two documents are needed; nothing to compare.".yellow()
        )?;
        return Ok(CompareOutcome::MissingDocument);
    }

    match compare(&doc1, &doc2, options) {
        Ok(comparison) => {
            info!(score = comparison.score, "Compared documents");
            if args.json {
                writeln!(out, "{}", serde_json::to_string_pretty(&comparison)?)?;
            } else {
                display_comparison(out, &comparison, args.verbose)?;
            }
            Ok(CompareOutcome::Scored(comparison))
        }
        Err(e @ SimilarityError::EmptyDocument { .. }) => {
            writeln!(err, "{} {e}", "error:".red().bold())?;
            Ok(CompareOutcome::EmptyDocument)
        }
        Err(e) => Err(e.into()),
    }
}
