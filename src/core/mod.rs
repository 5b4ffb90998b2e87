//! Core types for OTU table construction.
//!
//! This module provides the fundamental pieces of the pipeline:
//!
//! - [`HeaderPatterns`]: compiled matchers for the `;`-delimited header
//!   annotation conventions (`sample=`, `barcodelabel=`, `OTU...`, `tax=`)
//! - [`OtuTable`]: the sparse (sample, OTU) → abundance contingency table
//!
//! ## Header annotations
//!
//! | Annotation | Read from | Fallback when absent |
//! |------------|-----------|----------------------|
//! | `sample=` / `barcodelabel=` | query header | longest `[A-Za-z0-9_]` prefix |
//! | `OTU`-prefixed token | target header | empty string |
//! | `tax=` | target header | keep any earlier value |

pub mod annotation;
pub mod table;

pub use annotation::HeaderPatterns;
pub use table::{OtuTable, TableError};
