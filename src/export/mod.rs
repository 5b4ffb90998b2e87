//! Serializers for the three OTU table interchange formats.
//!
//! All exporters are read-only over a finished [`OtuTable`] and write one
//! complete, self-terminated document to the given writer:
//!
//! - [`tabular`]: the classic tab-separated OTU table (OTUs as rows)
//! - [`shared`]: the mothur "shared" format (samples as rows)
//! - [`biom`]: the BIOM 1.0 sparse-matrix JSON format
//!
//! The two text formats render the dense sample × OTU universe with 0 for
//! absent cells; the BIOM format lists only stored entries as coordinate
//! triples. Exporting twice against an unmutated table produces identical
//! bytes, except for the BIOM `date` field which captures the write time.
//!
//! [`OtuTable`]: crate::core::table::OtuTable

pub mod biom;
pub mod shared;
pub mod tabular;

pub use biom::{write_biom, BiomMeta, ExportError};
pub use shared::write_shared;
pub use tabular::write_tabular;
