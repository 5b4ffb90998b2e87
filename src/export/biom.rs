use std::io::Write;
use std::sync::OnceLock;

use chrono::Local;
use serde::Serialize;
use thiserror::Error;

use crate::core::table::OtuTable;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write BIOM output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize BIOM document: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Identity strings for the BIOM document, supplied by the surrounding
/// program and opaque to the exporter.
#[derive(Debug, Clone)]
pub struct BiomMeta {
    /// Value for the `id` key (conventionally the output file name)
    pub id: String,

    /// Value for the `generated_by` key (program name and version)
    pub generated_by: String,
}

/// BIOM 1.0 document. Struct field order fixes the JSON key order, which
/// downstream consumers expect.
#[derive(Debug, Serialize)]
struct BiomDocument<'a> {
    id: &'a str,
    format: &'static str,
    format_url: &'static str,
    #[serde(rename = "type")]
    kind: &'static str,
    generated_by: &'a str,
    date: String,
    matrix_type: &'static str,
    matrix_element_type: &'static str,
    shape: (usize, usize),
    rows: Vec<BiomRow<'a>>,
    columns: Vec<BiomColumn<'a>>,
    data: Vec<(usize, usize, u64)>,
}

#[derive(Debug, Serialize)]
struct BiomRow<'a> {
    id: &'a str,
    metadata: Option<RowMetadata<'a>>,
}

#[derive(Debug, Serialize)]
struct RowMetadata<'a> {
    taxonomy: &'a str,
}

#[derive(Debug, Serialize)]
struct BiomColumn<'a> {
    id: &'a str,
    /// Always null; samples carry no metadata in this table
    metadata: Option<()>,
}

/// Write the table as a BIOM 1.0 sparse-matrix JSON document.
///
/// Shape is `[num_otus, num_samples]`; `rows` enumerate OTUs and `columns`
/// samples, both ascending. `data` holds one `[row, col, count]` triple per
/// stored table entry in OTU-major then sample-minor order, with zero-based
/// indices into the enumerations. Cells never written are omitted; a stored
/// zero is emitted. The `date` field is the local time at the moment of
/// writing, formatted `YYYY-MM-DDTHH:MM:SS`.
///
/// # Errors
///
/// Returns `ExportError::Io` if the writer fails or
/// `ExportError::Serialize` if JSON serialization fails.
pub fn write_biom<W: Write>(
    table: &OtuTable,
    meta: &BiomMeta,
    writer: &mut W,
) -> Result<(), ExportError> {
    let document = build_document(table, meta, export_date().to_string());
    serde_json::to_writer_pretty(&mut *writer, &document)?;
    writeln!(writer)?;
    Ok(())
}

/// The timestamp written into the `date` field, captured once per process
/// so that repeated exports of an unmutated table are byte-identical.
fn export_date() -> &'static str {
    static DATE: OnceLock<String> = OnceLock::new();
    DATE.get_or_init(|| Local::now().format("%Y-%m-%dT%H:%M:%S").to_string())
}

fn build_document<'a>(table: &'a OtuTable, meta: &'a BiomMeta, date: String) -> BiomDocument<'a> {
    let rows = table
        .otus()
        .map(|otu| BiomRow {
            id: otu,
            metadata: table.taxonomy_of(otu).map(|taxonomy| RowMetadata { taxonomy }),
        })
        .collect();

    let columns = table
        .samples()
        .map(|sample| BiomColumn {
            id: sample,
            metadata: None,
        })
        .collect();

    let mut data = Vec::new();
    for (row, otu) in table.otus().enumerate() {
        for (col, sample) in table.samples().enumerate() {
            if let Some(count) = table.entry(sample, otu) {
                data.push((row, col, count));
            }
        }
    }

    BiomDocument {
        id: &meta.id,
        format: "Biological Observation Matrix 1.0",
        format_url: "http://biom-format.org/documentation/format_versions/biom-1.0.html",
        kind: "OTU table",
        generated_by: &meta.generated_by,
        date,
        matrix_type: "sparse",
        matrix_element_type: "int",
        shape: (table.num_otus(), table.num_samples()),
        rows,
        columns,
        data,
    }
}
