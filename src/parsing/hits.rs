use std::path::Path;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid hit format: {0}")]
    InvalidFormat(String),
}

/// One search/clustering hit: a query read assigned to a target centroid
/// with an abundance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hit {
    /// Full query header, annotations included
    pub query_header: String,

    /// Full target header, annotations included
    pub target_header: String,

    /// Read abundance carried by the hit
    pub abundance: i64,
}

/// Parse a hits file with columns: `query_header`, `target_header`,
/// `[abundance]`.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or other parse
/// errors if the content is invalid.
pub fn parse_hits_file(path: &Path) -> Result<Vec<Hit>, ParseError> {
    let content = std::fs::read_to_string(path)?;
    parse_hits_text(&content)
}

/// Parse hits from tab-separated text with columns: `query_header`,
/// `target_header`, `[abundance]`.
///
/// Blank lines and `#` comments are skipped. A missing abundance column
/// defaults to 1, one read per hit. Extra columns are ignored with a
/// warning so that wider hit reports can be fed in unchanged.
///
/// # Errors
///
/// Returns `ParseError::InvalidFormat` if a line has fewer than 2 fields
/// or its abundance is not an integer.
pub fn parse_hits_text(text: &str) -> Result<Vec<Hit>, ParseError> {
    let mut hits = Vec::new();
    let mut warned_extra = false;

    for (i, line) in text.lines().enumerate() {
        // Trim only for the skip checks; header fields keep their bytes
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        // Line numbers in errors are 1-based for user friendliness
        let line_num = i + 1;

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < 2 {
            return Err(ParseError::InvalidFormat(format!(
                "Line {line_num} has fewer than 2 fields"
            )));
        }

        if fields.len() > 3 && !warned_extra {
            warn!(
                line = line_num,
                fields = fields.len(),
                "Ignoring columns beyond the third"
            );
            warned_extra = true;
        }

        let abundance: i64 = match fields.get(2) {
            Some(value) => value.trim().parse().map_err(|_| {
                ParseError::InvalidFormat(format!(
                    "Invalid abundance on line {line_num}: '{}'",
                    fields[2]
                ))
            })?,
            None => 1,
        };

        hits.push(Hit {
            query_header: fields[0].to_string(),
            target_header: fields[1].to_string(),
            abundance,
        });
    }

    Ok(hits)
}
