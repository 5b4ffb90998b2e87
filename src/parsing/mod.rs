//! Parser for the hit reports that feed the table.
//!
//! The table itself is format-agnostic; it consumes
//! `(query_header, target_header, abundance)` triples. This module reads
//! those triples from tab-separated text, one hit per line:
//!
//! ```text
//! seq1;sample=A;	OTU_1;tax=Bacteria;	5
//! seq2;sample=B;	OTU_1	3
//! ```
//!
//! The third column is optional and defaults to 1.

pub mod hits;

pub use hits::{parse_hits_file, parse_hits_text, Hit, ParseError};
