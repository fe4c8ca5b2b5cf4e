use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use super::TagRecord;
use crate::error::Result;

/// Serialize records, in order, as CSV rows into any sink.
///
/// The header row is always written, including for an empty record set.
/// With `include_row_index` the table gains a leading unnamed column holding
/// the 0-based row number. A missing class serializes as an empty cell.
pub fn write_table<W: Write>(records: &[TagRecord], out: W, include_row_index: bool) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);

    if include_row_index {
        wtr.write_record(["", "tag", "class", "id", "text"])?;
    } else {
        wtr.write_record(["tag", "class", "id", "text"])?;
    }

    for (i, record) in records.iter().enumerate() {
        let class = record.class.as_deref().unwrap_or("");
        if include_row_index {
            let idx = i.to_string();
            wtr.write_record([
                idx.as_str(),
                record.tag.as_str(),
                class,
                record.id.as_str(),
                record.text.as_str(),
            ])?;
        } else {
            wtr.write_record([
                record.tag.as_str(),
                class,
                record.id.as_str(),
                record.text.as_str(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Write the table to `path`, replacing any previous artifact there.
pub fn write_table_path(
    records: &[TagRecord],
    path: &Path,
    include_row_index: bool,
) -> Result<()> {
    let file = File::create(path)?;
    write_table(records, file, include_row_index)?;
    debug!("Wrote {} records to {}", records.len(), path.display());
    Ok(())
}
