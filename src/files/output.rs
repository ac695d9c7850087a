use super::{LoadError, LoadResult};
use crate::schedule::OutputRow;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Write rows as tab-separated lines, no header and no quoting.
pub fn write_rows<W: Write>(rows: &[OutputRow], writer: W) -> csv::Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Never)
        .from_writer(writer);
    for row in rows {
        writer.write_record(row.fields())?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_rows_to_path<P: AsRef<Path>>(rows: &[OutputRow], path: P) -> LoadResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(LoadError::io(path))?;
    write_rows(rows, file).map_err(LoadError::csv(path))
}
