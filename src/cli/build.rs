use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;

use crate::core::table::OtuTable;
use crate::export::biom::{write_biom, BiomMeta};
use crate::export::shared::write_shared;
use crate::export::tabular::write_tabular;
use crate::parsing;

const GENERATED_BY: &str = concat!(env!("CARGO_PKG_NAME"), " ", env!("CARGO_PKG_VERSION"));

#[derive(Args)]
pub struct BuildArgs {
    /// Input hit report with tab-separated columns:
    /// query_header, target_header, [abundance]
    /// Use '-' for stdin
    #[arg(required = true)]
    pub input: PathBuf,

    /// Write the classic tab-separated OTU table to this path
    #[arg(long)]
    pub otutab_out: Option<PathBuf>,

    /// Write the mothur shared format to this path
    #[arg(long)]
    pub shared_out: Option<PathBuf>,

    /// Write the BIOM 1.0 JSON format to this path
    #[arg(long)]
    pub biom_out: Option<PathBuf>,

    /// Label token for the first column of the shared output
    #[arg(long, default_value = env!("CARGO_PKG_NAME"))]
    pub shared_label: String,
}

/// Execute build subcommand
///
/// # Errors
///
/// Returns an error if no output is requested, the hit report cannot be
/// parsed, a hit carries a negative abundance, or an output file cannot
/// be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: BuildArgs, verbose: bool) -> anyhow::Result<()> {
    if args.otutab_out.is_none() && args.shared_out.is_none() && args.biom_out.is_none() {
        anyhow::bail!("At least one of --otutab-out, --shared-out, --biom-out is required");
    }

    let hits = read_hits(&args.input)?;

    let mut table = OtuTable::new()?;
    for hit in &hits {
        table
            .add(&hit.query_header, &hit.target_header, hit.abundance)
            .with_context(|| format!("Bad hit for query '{}'", hit.query_header))?;
    }

    if verbose {
        eprintln!(
            "Tabulated {} hits into {} samples x {} OTUs",
            hits.len(),
            table.num_samples(),
            table.num_otus(),
        );
    }

    if let Some(path) = &args.otutab_out {
        let mut writer = open_output(path)?;
        write_tabular(&table, &mut writer)
            .with_context(|| format!("Failed to write OTU table to {}", path.display()))?;
    }

    if let Some(path) = &args.shared_out {
        let mut writer = open_output(path)?;
        write_shared(&table, &args.shared_label, &mut writer)
            .with_context(|| format!("Failed to write shared file to {}", path.display()))?;
    }

    if let Some(path) = &args.biom_out {
        let meta = BiomMeta {
            // Convention carried over from the text formats' consumers:
            // the document id is the output file name
            id: path.display().to_string(),
            generated_by: GENERATED_BY.to_string(),
        };
        let mut writer = open_output(path)?;
        write_biom(&table, &meta, &mut writer)
            .with_context(|| format!("Failed to write BIOM file to {}", path.display()))?;
    }

    Ok(())
}

fn read_hits(input: &Path) -> anyhow::Result<Vec<parsing::Hit>> {
    if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        Ok(parsing::parse_hits_text(&buffer)?)
    } else {
        Ok(parsing::parse_hits_file(input)
            .with_context(|| format!("Failed to read hits from {}", input.display()))?)
    }
}

fn open_output(path: &Path) -> anyhow::Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}
