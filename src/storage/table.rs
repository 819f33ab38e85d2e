//! Delimiter-separated table files
//!
//! Whole files are read into memory as rows of text fields. Writes go to a
//! temporary file that is renamed over the destination, so a failed run never
//! leaves a partial report behind.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Terminator, WriterBuilder};
use tracing::debug;

use crate::error::{ReportError, ReportResult};

/// One row of text fields
pub type Row = Vec<String>;

/// Convert a delimiter to the single byte the csv crate expects
pub fn delimiter_byte(delimiter: char) -> ReportResult<u8> {
    if delimiter.is_ascii() && delimiter != '"' && delimiter != '\n' && delimiter != '\r' {
        Ok(delimiter as u8)
    } else {
        Err(ReportError::Validation(format!(
            "delimiter must be a single ASCII character other than a quote or line break, got {:?}",
            delimiter
        )))
    }
}

/// Read every row of a delimiter-separated file, header row included
///
/// All rows must have the same number of fields. Fields are not required to
/// be UTF-8; invalid sequences become U+FFFD, so a stray Latin-1 byte only
/// matters if it lands in a column that is parsed.
pub fn read_table(path: &Path, delimiter: char) -> ReportResult<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter_byte(delimiter)?)
        .has_headers(false)
        .from_path(path)
        .map_err(|e| ReportError::from_csv(path, e))?;

    let mut rows = Vec::new();
    for result in reader.byte_records() {
        let record = result.map_err(|e| ReportError::from_csv(path, e))?;
        rows.push(
            record
                .iter()
                .map(|field| String::from_utf8_lossy(field).into_owned())
                .collect(),
        );
    }

    debug!(path = %path.display(), rows = rows.len(), "read table");
    Ok(rows)
}

/// Split the header row off the data rows
pub fn split_header(rows: &[Row]) -> (Option<&Row>, &[Row]) {
    match rows.split_first() {
        Some((header, data)) => (Some(header), data),
        None => (None, &[]),
    }
}

/// Write rows atomically (write to temp, then rename)
///
/// Rows may differ in length.
pub fn write_table_atomic(path: &Path, rows: &[Row], delimiter: char) -> ReportResult<()> {
    let delimiter = delimiter_byte(delimiter)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ReportError::io(parent, e))?;
    }

    let temp_path = temp_path_for(path);
    let result = write_rows(&temp_path, rows, delimiter).and_then(|()| {
        fs::rename(&temp_path, path).map_err(|e| ReportError::io(path, e))
    });

    if result.is_err() {
        let _ = fs::remove_file(&temp_path);
    }
    result
}

fn write_rows(temp_path: &Path, rows: &[Row], delimiter: u8) -> ReportResult<()> {
    let file = File::create(temp_path).map_err(|e| ReportError::io(temp_path, e))?;

    let mut writer = WriterBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);

    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| ReportError::from_csv(temp_path, e))?;
    }

    writer.flush().map_err(|e| ReportError::io(temp_path, e))?;

    let file = writer
        .into_inner()
        .map_err(|e| ReportError::io(temp_path, e))?;
    file.sync_all().map_err(|e| ReportError::io(temp_path, e))
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut temp = path.as_os_str().to_owned();
    temp.push(".tmp");
    PathBuf::from(temp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn row(fields: &[&str]) -> Row {
        fields.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_read_semicolon_table() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("orders.csv");
        fs::write(&path, "Item;Price\n022207210;1.99\n022207204;2.99\n").unwrap();

        let rows = read_table(&path, ';').unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], row(&["022207210", "1.99"]));

        let (header, data) = split_header(&rows);
        assert_eq!(header, Some(&row(&["Item", "Price"])));
        assert_eq!(data.len(), 2);
    }

    #[test]
    fn test_read_quoted_fields() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("orders.csv");
        fs::write(&path, "a;b\n\"x;y\";\"say \"\"hi\"\"\"\n").unwrap();

        let rows = read_table(&path, ';').unwrap();
        assert_eq!(rows[1], row(&["x;y", "say \"hi\""]));
    }

    #[test]
    fn test_read_non_utf8_field() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("clients.csv");
        fs::write(&path, b"Item;Name;Price\n022207210;Societ\xe9;1.99\n").unwrap();

        let rows = read_table(&path, ';').unwrap();
        assert_eq!(rows[1][0], "022207210");
        assert_eq!(rows[1][1], "Societ\u{FFFD}");
        assert_eq!(rows[1][2], "1.99");
    }

    #[test]
    fn test_read_bare_quote_in_unquoted_field() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("orders.csv");
        fs::write(&path, "Item;Name;Price\n022207210;Foo \"bar;1.99\n").unwrap();

        let rows = read_table(&path, ';').unwrap();
        assert_eq!(rows[1], row(&["022207210", "Foo \"bar", "1.99"]));
    }

    #[test]
    fn test_read_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_table(&temp_dir.path().join("missing.csv"), ';').unwrap_err();
        assert!(err.is_io());
    }

    #[test]
    fn test_read_ragged_rows_is_format_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("orders.csv");
        fs::write(&path, "a;b;c\n1;2\n").unwrap();

        let err = read_table(&path, ';').unwrap_err();
        assert!(matches!(err, ReportError::Format { .. }));
    }

    #[test]
    fn test_split_header_empty() {
        let (header, data) = split_header(&[]);
        assert!(header.is_none());
        assert!(data.is_empty());
    }

    #[test]
    fn test_write_mixed_width_rows() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out").join("report.csv");
        let rows = vec![
            row(&["TSM", ":", "4.98"]),
            row(&["LEGAL, INC", ":", "0.0"]),
            row(&["", "", "", "Sum", "", "7.47"]),
        ];

        write_table_atomic(&path, &rows, ',').unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(
            contents,
            "TSM,:,4.98\n\"LEGAL, INC\",:,0.0\n,,,Sum,,7.47\n"
        );
        assert!(!temp_path_for(&path).exists());
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("report.csv");
        fs::write(&path, "old contents\n").unwrap();

        write_table_atomic(&path, &[row(&["new"])], ',').unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_delimiter_byte() {
        assert_eq!(delimiter_byte(';').unwrap(), b';');
        assert_eq!(delimiter_byte('\t').unwrap(), b'\t');
        assert!(delimiter_byte('§').is_err());
        assert!(delimiter_byte('"').is_err());
    }
}
