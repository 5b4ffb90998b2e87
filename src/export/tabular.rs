use std::io::Write;

use crate::core::table::OtuTable;

/// Write the table in the classic tab-separated OTU table layout.
///
/// Header row is `#OTU ID` followed by one column per sample in ascending
/// order, plus a trailing `taxonomy` column when any OTU carries a taxonomy
/// annotation. One data row per OTU in ascending order, with 0 for cells
/// never written. An empty table produces the header row only.
///
/// # Errors
///
/// Returns any I/O error from the underlying writer.
pub fn write_tabular<W: Write>(table: &OtuTable, writer: &mut W) -> std::io::Result<()> {
    write!(writer, "#OTU ID")?;
    for sample in table.samples() {
        write!(writer, "\t{sample}")?;
    }
    if table.has_taxonomy() {
        write!(writer, "\ttaxonomy")?;
    }
    writeln!(writer)?;

    for otu in table.otus() {
        write!(writer, "{otu}")?;
        for sample in table.samples() {
            write!(writer, "\t{}", table.count(sample, otu))?;
        }
        if table.has_taxonomy() {
            // Column exists for every row; cell is empty for an OTU
            // without an annotation
            write!(writer, "\t{}", table.taxonomy_of(otu).unwrap_or(""))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}
