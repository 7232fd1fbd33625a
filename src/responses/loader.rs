use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, StringRecord, Trim};

use super::types::{LoadedResponses, MalformedCell, Response, ResponseTable};
use crate::error::{Result, ScoreError};
use crate::inventory::{column_name, Likert, ITEM_COUNT};

/// What a single cell turned out to hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Blank,
    Value(Likert),
    Malformed,
}

/// Parse one cell. Accepts integers 1-5 and integral decimals such as `4.0`.
pub fn parse_cell(raw: &str) -> Cell {
    let raw = raw.trim();
    if raw.is_empty() {
        return Cell::Blank;
    }

    if let Ok(n) = raw.parse::<u8>() {
        return Likert::new(n).map_or(Cell::Malformed, Cell::Value);
    }

    match raw.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && (1.0..=5.0).contains(&f) => {
            Likert::new(f as u8).map_or(Cell::Malformed, Cell::Value)
        }
        _ => Cell::Malformed,
    }
}

/// Load a response file from disk.
///
/// # Errors
///
/// - [`ScoreError::SourceNotFound`] if the file cannot be opened or read
/// - [`ScoreError::MissingColumns`] if any of q1..q100 is absent from the header
/// - [`ScoreError::Csv`] if the file is not readable as delimited text
pub fn load_responses(path: &Path, delimiter: u8) -> Result<LoadedResponses> {
    let file = File::open(path).map_err(|source| ScoreError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    })?;
    read_responses(file, path, delimiter)
}

/// Load responses from any reader; `path` is only used in diagnostics.
pub fn read_responses<R: Read>(input: R, path: &Path, delimiter: u8) -> Result<LoadedResponses> {
    let csv_err = |source: csv::Error| read_error(path, source);

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let headers = reader.headers().map_err(csv_err)?.clone();
    let positions = locate_item_columns(&headers).map_err(|columns| ScoreError::MissingColumns {
        path: path.to_path_buf(),
        columns,
    })?;

    let mut rows = Vec::new();
    let mut malformed = Vec::new();
    let mut record = ByteRecord::new();
    while reader.read_byte_record(&mut record).map_err(csv_err)? {
        let row_number = rows.len() + 1;
        let mut response = Response::new();

        for (index, &position) in positions.iter().enumerate() {
            let item = (index + 1) as u8;
            // Short rows: trailing cells are simply missing
            let Some(bytes) = record.get(position) else {
                continue;
            };
            let cell = match std::str::from_utf8(bytes) {
                Ok(text) => parse_cell(text),
                Err(_) => Cell::Malformed,
            };
            match cell {
                Cell::Blank => {}
                Cell::Value(value) => response.set(item, Some(value)),
                Cell::Malformed => malformed.push(MalformedCell {
                    row: row_number,
                    column: column_name(item),
                    raw: String::from_utf8_lossy(bytes).into_owned(),
                }),
            }
        }

        rows.push(response);
    }

    Ok(LoadedResponses {
        table: ResponseTable::new(rows),
        malformed,
    })
}

/// I/O failures while reading mean the source is unreadable, not malformed
fn read_error(path: &Path, source: csv::Error) -> ScoreError {
    if !source.is_io_error() {
        return ScoreError::Csv {
            path: path.to_path_buf(),
            source,
        };
    }
    let source = match source.into_kind() {
        csv::ErrorKind::Io(err) => err,
        other => std::io::Error::other(format!("{:?}", other)),
    };
    ScoreError::SourceNotFound {
        path: path.to_path_buf(),
        source,
    }
}

/// Map each item (q1..q100, in item order) to its column index in the header.
/// Returns every missing column name on failure, not just the first.
fn locate_item_columns(headers: &StringRecord) -> std::result::Result<Vec<usize>, Vec<String>> {
    let names: Vec<&str> = headers
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim())
        .collect();

    let mut positions = Vec::with_capacity(ITEM_COUNT);
    let mut missing = Vec::new();
    for item in 1..=ITEM_COUNT as u8 {
        let column = column_name(item);
        match names.iter().position(|name| *name == column) {
            Some(position) => positions.push(position),
            None => missing.push(column),
        }
    }

    if missing.is_empty() {
        Ok(positions)
    } else {
        Err(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header() -> String {
        (1..=100)
            .map(|i| format!("q{}", i))
            .collect::<Vec<_>>()
            .join(",")
    }

    fn row_of(value: &str) -> String {
        vec![value; 100].join(",")
    }

    fn read(csv: &str) -> Result<LoadedResponses> {
        read_responses(csv.as_bytes(), Path::new("results.csv"), b',')
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell(""), Cell::Blank);
        assert_eq!(parse_cell("   "), Cell::Blank);
        assert_eq!(parse_cell("3"), Cell::Value(Likert::new(3).unwrap()));
        assert_eq!(parse_cell(" 5 "), Cell::Value(Likert::new(5).unwrap()));
        assert_eq!(parse_cell("4.0"), Cell::Value(Likert::new(4).unwrap()));
        assert_eq!(parse_cell("0"), Cell::Malformed);
        assert_eq!(parse_cell("6"), Cell::Malformed);
        assert_eq!(parse_cell("2.5"), Cell::Malformed);
        assert_eq!(parse_cell("-1"), Cell::Malformed);
        assert_eq!(parse_cell("abc"), Cell::Malformed);
        assert_eq!(parse_cell("NaN"), Cell::Malformed);
    }

    #[test]
    fn test_load_preserves_row_order() {
        let csv = format!("{}\n{}\n{}\n{}\n", header(), row_of("1"), row_of("2"), row_of("3"));
        let loaded = read(&csv).unwrap();
        assert_eq!(loaded.table.len(), 3);
        assert!(loaded.malformed.is_empty());
        for (i, row) in loaded.table.rows.iter().enumerate() {
            let expected = Likert::new(i as u8 + 1);
            assert_eq!(row.get(1), expected);
            assert_eq!(row.get(100), expected);
        }
    }

    #[test]
    fn test_load_with_shuffled_and_extra_columns() {
        let mut names: Vec<String> = (1..=100).rev().map(|i| format!("q{}", i)).collect();
        names.insert(0, "respondent".to_string());
        let mut values: Vec<String> = (1..=100u32).rev().map(|i| ((i % 5) + 1).to_string()).collect();
        values.insert(0, "alice".to_string());
        let csv = format!("{}\n{}\n", names.join(","), values.join(","));

        let loaded = read(&csv).unwrap();
        let row = &loaded.table.rows[0];
        assert_eq!(row.get(1), Likert::new(2));
        assert_eq!(row.get(4), Likert::new(5));
        assert_eq!(row.get(5), Likert::new(1));
        assert!(loaded.malformed.is_empty());
    }

    #[test]
    fn test_load_reports_all_missing_columns() {
        let names: Vec<String> = (1..=100)
            .filter(|i| *i != 7 && *i != 99)
            .map(|i| format!("q{}", i))
            .collect();
        let csv = format!("{}\n", names.join(","));

        match read(&csv) {
            Err(ScoreError::MissingColumns { columns, .. }) => {
                assert_eq!(columns, vec!["q7".to_string(), "q99".to_string()]);
            }
            other => panic!("expected MissingColumns, got {:?}", other),
        }
    }

    #[test]
    fn test_blank_and_malformed_cells_are_missing() {
        let mut values = vec!["3"; 100];
        values[0] = "";
        values[1] = "x";
        values[2] = "9";
        let csv = format!("{}\n{}\n", header(), values.join(","));

        let loaded = read(&csv).unwrap();
        let row = &loaded.table.rows[0];
        assert_eq!(row.get(1), None);
        assert_eq!(row.get(2), None);
        assert_eq!(row.get(3), None);
        assert_eq!(row.get(4), Likert::new(3));
        assert_eq!(row.answered(), 97);

        let columns: Vec<&str> = loaded.malformed.iter().map(|m| m.column.as_str()).collect();
        assert_eq!(columns, vec!["q2", "q3"]);
        assert_eq!(loaded.malformed[0].row, 1);
        assert_eq!(loaded.malformed[0].raw, "x");
    }

    #[test]
    fn test_short_row_reads_missing() {
        let csv = format!("{}\n1,2,3\n", header());
        let loaded = read(&csv).unwrap();
        let row = &loaded.table.rows[0];
        assert_eq!(row.get(3), Likert::new(3));
        assert_eq!(row.get(4), None);
        assert_eq!(row.answered(), 3);
    }

    #[test]
    fn test_header_only_gives_empty_table() {
        let loaded = read(&format!("{}\n", header())).unwrap();
        assert!(loaded.table.is_empty());
    }

    #[test]
    fn test_semicolon_delimiter() {
        let header = header().replace(',', ";");
        let csv = format!("{}\n{}\n", header, vec!["4"; 100].join(";"));
        let loaded = read_responses(csv.as_bytes(), Path::new("results.csv"), b';').unwrap();
        assert_eq!(loaded.table.rows[0].get(50), Likert::new(4));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        match load_responses(&path, b',') {
            Err(ScoreError::SourceNotFound { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected SourceNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_directory_is_unreadable_source() {
        let dir = tempfile::tempdir().unwrap();
        match load_responses(dir.path(), b',') {
            Err(ScoreError::SourceNotFound { path, .. }) => assert_eq!(path, dir.path()),
            other => panic!("expected SourceNotFound, got {:?}", other),
        }
    }
}
