//! Command-line interface for otutab.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **build**: Tabulate a hit report into an OTU table and write it in
//!   one or more of the three output formats
//! - **extract**: Show the sample/OTU/taxonomy labels extracted from
//!   headers, for debugging annotation problems
//!
//! ## Usage
//!
//! ```text
//! # Build all three outputs from a hit report
//! otutab build hits.tsv --otutab-out table.txt --shared-out table.shared --biom-out table.biom
//!
//! # Pipe hits from an upstream search step
//! search ... | otutab build - --otutab-out table.txt
//!
//! # Check what labels a header produces
//! otutab extract "seq1;sample=A;size=10"
//! ```

use clap::{Parser, Subcommand};

pub mod build;
pub mod extract;

#[derive(Parser)]
#[command(name = "otutab")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Build OTU contingency tables from annotated sequence headers")]
#[command(
    long_about = "otutab accumulates per-(sample, OTU) read abundance from search hits.\n\nSample labels come from `sample=`/`barcodelabel=` annotations in query headers, OTU labels from `OTU`-prefixed tokens in target headers, and taxonomy strings from `tax=` annotations. The resulting table can be written as a classic tab-separated OTU table, a mothur shared file, or a BIOM 1.0 JSON document."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format for the extract command
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Tabulate a hit report and write the table
    Build(build::BuildArgs),

    /// Show the labels extracted from one or more headers
    Extract(extract::ExtractArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}
