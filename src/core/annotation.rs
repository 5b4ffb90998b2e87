use regex::Regex;

/// Compiled matchers for the header annotation conventions.
///
/// Headers follow the usearch/vsearch convention of `;`-delimited
/// `key=value` annotations, e.g. `read12;sample=gut3;size=100`. Three
/// annotations are recognized:
///
/// - `sample=` or `barcodelabel=` identifies the sample a read came from
/// - a token starting with `OTU` (any case) identifies the cluster
/// - `tax=` carries a free-text taxonomy string
#[derive(Debug)]
pub struct HeaderPatterns {
    sample: Regex,
    otu: Regex,
    tax: Regex,
}

impl HeaderPatterns {
    /// Compile the three annotation patterns.
    ///
    /// # Errors
    ///
    /// Returns `regex::Error` if a pattern fails to compile. The patterns
    /// are literals, so this only fires on a programming error, but callers
    /// treat it as fatal since extraction is meaningless without them.
    pub fn compile() -> Result<Self, regex::Error> {
        Ok(Self {
            sample: Regex::new(r"(?:^|;)(?:sample|barcodelabel)=([A-Za-z0-9_=]*)")?,
            // Only the OTU literal is case-insensitive; the captured token
            // keeps its original case.
            otu: Regex::new(r"(?:^|;)((?i:OTU)[A-Za-z0-9_=]*)")?,
            tax: Regex::new(r"(?:^|;)tax=([^;]*)")?,
        })
    }

    /// Extract the sample label from a query header.
    ///
    /// If no `sample=`/`barcodelabel=` annotation matches, falls back to
    /// the longest prefix of letters, digits, and underscore, so the first
    /// token of an unannotated header becomes the sample name. The result
    /// may be empty.
    #[must_use]
    pub fn sample_label(&self, header: &str) -> String {
        match self.sample.captures(header) {
            Some(caps) => caps[1].to_string(),
            None => header
                .chars()
                .take_while(|c| c.is_ascii_alphanumeric() || *c == '_')
                .collect(),
        }
    }

    /// Extract the OTU label from a target header.
    ///
    /// The label is the whole annotation token including its `OTU` prefix.
    /// Returns the empty string when no token matches; the empty label is a
    /// valid row identifier downstream.
    #[must_use]
    pub fn otu_label(&self, header: &str) -> String {
        self.otu
            .captures(header)
            .map(|caps| caps[1].to_string())
            .unwrap_or_default()
    }

    /// Extract the taxonomy annotation from a target header, if present.
    ///
    /// The value runs up to the next `;` or the end of the header.
    #[must_use]
    pub fn taxonomy(&self, header: &str) -> Option<String> {
        self.tax.captures(header).map(|caps| caps[1].to_string())
    }
}
