use std::io::Read;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::annotation::HeaderPatterns;

#[derive(Args)]
pub struct ExtractArgs {
    /// Headers to inspect; reads one header per line from stdin when omitted
    pub headers: Vec<String>,
}

/// Labels extracted from a single header, with the header treated as both
/// query (sample) and target (OTU, taxonomy).
#[derive(Debug, serde::Serialize)]
struct Extraction {
    header: String,
    sample: String,
    otu: String,
    taxonomy: Option<String>,
}

/// Execute extract subcommand
///
/// # Errors
///
/// Returns an error if pattern compilation fails, stdin cannot be read,
/// or JSON serialization fails.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ExtractArgs, format: OutputFormat) -> anyhow::Result<()> {
    let patterns = HeaderPatterns::compile()?;

    let headers = if args.headers.is_empty() {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer.lines().map(str::to_string).collect()
    } else {
        args.headers
    };

    let extractions: Vec<Extraction> = headers
        .into_iter()
        .map(|header| Extraction {
            sample: patterns.sample_label(&header),
            otu: patterns.otu_label(&header),
            taxonomy: patterns.taxonomy(&header),
            header,
        })
        .collect();

    match format {
        OutputFormat::Text => print_text(&extractions),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&extractions)?),
        OutputFormat::Tsv => print_tsv(&extractions),
    }

    Ok(())
}

fn print_text(extractions: &[Extraction]) {
    for (i, e) in extractions.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", e.header);
        println!("   sample: {}", e.sample);
        println!("   otu: {}", e.otu);
        match &e.taxonomy {
            Some(tax) => println!("   taxonomy: {tax}"),
            None => println!("   taxonomy: (none)"),
        }
    }
}

fn print_tsv(extractions: &[Extraction]) {
    println!("header\tsample\totu\ttaxonomy");
    for e in extractions {
        println!(
            "{}\t{}\t{}\t{}",
            e.header,
            e.sample,
            e.otu,
            e.taxonomy.as_deref().unwrap_or("")
        );
    }
}
