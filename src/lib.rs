//! # otutab
//!
//! A library for building OTU contingency tables from annotated sequence
//! headers.
//!
//! Amplicon pipelines assign reads to OTUs (operational taxonomic units)
//! by searching them against cluster centroids. The hits carry everything
//! needed for a community profile, but the sample and cluster identities
//! are buried in free-text headers using the usearch/vsearch annotation
//! convention (`;sample=A;`, `OTU_1`, `;tax=Bacteria;`).
//!
//! `otutab` extracts those labels, accumulates per-(sample, OTU) read
//! abundance into a sparse table, and serializes the result in the three
//! formats downstream tools consume: the classic tab-separated OTU table,
//! the mothur "shared" format, and BIOM 1.0 sparse JSON.
//!
//! ## Example
//!
//! ```rust
//! use otutab::{write_tabular, OtuTable};
//!
//! let mut table = OtuTable::new().unwrap();
//!
//! // One add call per hit from the upstream search step
//! table.add("seq1;sample=A;", "OTU_1;tax=Bacteria;", 5).unwrap();
//! table.add("seq2;sample=B;", "OTU_1", 3).unwrap();
//!
//! let mut out = Vec::new();
//! write_tabular(&table, &mut out).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Header annotation patterns and the count table
//! - [`export`]: The three table serializers
//! - [`parsing`]: Reader for tab-separated hit reports
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod export;
pub mod parsing;

// Re-export commonly used types for convenience
pub use crate::core::annotation::HeaderPatterns;
pub use crate::core::table::{OtuTable, TableError};
pub use crate::export::biom::{write_biom, BiomMeta, ExportError};
pub use crate::export::shared::write_shared;
pub use crate::export::tabular::write_tabular;
