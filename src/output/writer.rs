use std::io::Write;
use std::path::Path;

use atomic_write_file::AtomicWriteFile;
use csv::WriterBuilder;

use crate::error::{Result, ScoreError};
use crate::scoring::ScoreTable;

/// Render a mean for the output file.
///
/// Shortest representation that round-trips, always with a fractional part
/// (`3.0`, `3.75`). Missing means are an empty cell.
pub fn format_mean(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:?}", v),
        None => String::new(),
    }
}

/// Write the score table as delimited text: a header of scale names, then one
/// row per respondent in input order.
pub fn write_scores<W: Write>(out: W, table: &ScoreTable, delimiter: u8) -> std::io::Result<()> {
    let mut writer = WriterBuilder::new().delimiter(delimiter).from_writer(out);

    writer.write_record(table.column_names())?;
    for row in &table.rows {
        writer.write_record(row.iter().map(|v| format_mean(*v)))?;
    }
    writer.flush()
}

/// Save the score table to `path` atomically
///
/// Uses atomic-write-file so the file is either fully written or not touched.
pub fn save_scores(path: &Path, table: &ScoreTable, delimiter: u8) -> Result<()> {
    let sink_err = |source: std::io::Error| ScoreError::SinkWrite {
        path: path.to_path_buf(),
        source,
    };

    let mut file = AtomicWriteFile::open(path).map_err(sink_err)?;
    write_scores(&mut file, table, delimiter).map_err(sink_err)?;
    file.commit().map_err(sink_err)?;

    Ok(())
}
