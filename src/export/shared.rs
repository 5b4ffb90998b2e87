use std::io::Write;

use crate::core::table::OtuTable;

/// Write the table in the mothur "shared" layout.
///
/// Header row is `label`, `Group`, `numOtus`, then one column per OTU in
/// ascending order. One data row per sample in ascending order: the
/// caller-supplied label token, the sample identifier, the OTU-set size,
/// then per-OTU counts with 0 for cells never written. Samples are rows
/// here, the transpose of the tabular layout; that orientation is part of
/// the format.
///
/// # Errors
///
/// Returns any I/O error from the underlying writer.
pub fn write_shared<W: Write>(table: &OtuTable, label: &str, writer: &mut W) -> std::io::Result<()> {
    write!(writer, "label\tGroup\tnumOtus")?;
    for otu in table.otus() {
        write!(writer, "\t{otu}")?;
    }
    writeln!(writer)?;

    let num_otus = table.num_otus();
    for sample in table.samples() {
        write!(writer, "{label}\t{sample}\t{num_otus}")?;
        for otu in table.otus() {
            write!(writer, "\t{}", table.count(sample, otu))?;
        }
        writeln!(writer)?;
    }

    Ok(())
}
