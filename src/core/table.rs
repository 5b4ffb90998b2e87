use std::collections::{BTreeMap, BTreeSet};
use thiserror::Error;

use crate::core::annotation::HeaderPatterns;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("Failed to compile header annotation pattern: {0}")]
    Pattern(#[from] regex::Error),

    #[error("Negative abundance not allowed: {0}")]
    NegativeAbundance(i64),
}

/// A sparse contingency table of read abundance per (sample, OTU) pair.
///
/// Built incrementally from `(query_header, target_header, abundance)`
/// triples supplied by an external search or clustering step. The table
/// goes through a strict lifecycle: construct, any number of [`add`] calls,
/// then read-only export. Ordered containers keep samples and OTUs in
/// byte-lexicographic order, which is part of the output contract of all
/// three export formats.
///
/// [`add`]: OtuTable::add
#[derive(Debug)]
pub struct OtuTable {
    patterns: HeaderPatterns,

    /// Distinct sample labels, ascending
    samples: BTreeSet<String>,

    /// Distinct OTU labels, ascending
    otus: BTreeSet<String>,

    /// Abundance per (sample, OTU); a missing key means 0
    counts: BTreeMap<(String, String), u64>,

    /// Taxonomy annotation per OTU, last write wins
    taxonomy: BTreeMap<String, String>,
}

impl OtuTable {
    /// Create an empty table with freshly compiled annotation patterns.
    ///
    /// # Errors
    ///
    /// Returns `TableError::Pattern` if pattern compilation fails.
    pub fn new() -> Result<Self, TableError> {
        Ok(Self {
            patterns: HeaderPatterns::compile()?,
            samples: BTreeSet::new(),
            otus: BTreeSet::new(),
            counts: BTreeMap::new(),
            taxonomy: BTreeMap::new(),
        })
    }

    /// Record one hit: extract labels from the headers and accumulate
    /// `abundance` into the (sample, OTU) cell.
    ///
    /// The sample label comes from the query header, the OTU and taxonomy
    /// labels from the target header. Counts for the same cell accumulate
    /// across calls; a taxonomy annotation overwrites any earlier value for
    /// the same OTU, and its absence leaves an earlier value untouched.
    ///
    /// # Errors
    ///
    /// Returns `TableError::NegativeAbundance` if `abundance` is negative.
    /// Zero is accepted and creates a present (stored) entry.
    pub fn add(
        &mut self,
        query_header: &str,
        target_header: &str,
        abundance: i64,
    ) -> Result<(), TableError> {
        let abundance =
            u64::try_from(abundance).map_err(|_| TableError::NegativeAbundance(abundance))?;

        let sample = self.patterns.sample_label(query_header);
        let otu = self.patterns.otu_label(target_header);

        if let Some(tax) = self.patterns.taxonomy(target_header) {
            self.taxonomy.insert(otu.clone(), tax);
        }

        self.samples.insert(sample.clone());
        self.otus.insert(otu.clone());
        *self.counts.entry((sample, otu)).or_insert(0) += abundance;

        Ok(())
    }

    /// Sample labels in ascending order
    pub fn samples(&self) -> impl Iterator<Item = &str> {
        self.samples.iter().map(String::as_str)
    }

    /// OTU labels in ascending order
    pub fn otus(&self) -> impl Iterator<Item = &str> {
        self.otus.iter().map(String::as_str)
    }

    #[must_use]
    pub fn num_samples(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn num_otus(&self) -> usize {
        self.otus.len()
    }

    /// The stored count for a cell, or `None` if the cell is absent.
    ///
    /// Dense exporters render absent cells as 0; the sparse exporter emits
    /// only present cells, so the distinction matters.
    #[must_use]
    pub fn entry(&self, sample: &str, otu: &str) -> Option<u64> {
        self.counts
            .get(&(sample.to_string(), otu.to_string()))
            .copied()
    }

    /// The count for a cell, defaulting absent cells to 0.
    #[must_use]
    pub fn count(&self, sample: &str, otu: &str) -> u64 {
        self.entry(sample, otu).unwrap_or(0)
    }

    /// The taxonomy annotation for an OTU, if one was ever seen.
    #[must_use]
    pub fn taxonomy_of(&self, otu: &str) -> Option<&str> {
        self.taxonomy.get(otu).map(String::as_str)
    }

    /// Whether any OTU has a taxonomy annotation. Controls the presence of
    /// the `taxonomy` column in the tabular export.
    #[must_use]
    pub fn has_taxonomy(&self) -> bool {
        !self.taxonomy.is_empty()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
