use std::fs::File;
use std::io;
use std::path::Path;

use csv::StringRecord;

use super::model::ExpansionDataset;
use crate::error::DatasetError;

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Load a temperature/volume dataset from a CSV file.
///
/// Expected layout: one header line (skipped), then one data row per line
/// with at least two comma-separated numeric fields:
///
/// ```text
/// temperature_c,volume_cc
/// 25.0,100.00112
/// 35.0,100.03487
/// ```
///
/// Columns beyond the first two are ignored. The first malformed row aborts
/// the load; a partially parsed dataset is never returned.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<ExpansionDataset, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => DatasetError::NotFound {
            path: path.to_path_buf(),
            source: e,
        },
        _ => DatasetError::Io {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let mut temperatures = Vec::new();
    let mut volumes = Vec::new();

    for (idx, result) in reader.records().enumerate() {
        // Header occupies line 1, so the first data record is line 2.
        let line = idx + 2;
        let record = result.map_err(|e| DatasetError::parse(line, e.to_string()))?;
        if record.len() < 2 {
            return Err(DatasetError::parse(
                line,
                format!("expected 2 fields, found {}", record.len()),
            ));
        }
        temperatures.push(parse_field(&record, 0, "temperature", line)?);
        volumes.push(parse_field(&record, 1, "volume", line)?);
    }

    let dataset = ExpansionDataset::new(temperatures, volumes)?;
    log::debug!(
        "loaded {} samples from {}",
        dataset.len(),
        path.display()
    );
    Ok(dataset)
}

fn parse_field(
    record: &StringRecord,
    index: usize,
    column: &str,
    line: usize,
) -> Result<f64, DatasetError> {
    let raw = record.get(index).unwrap_or("").trim();
    raw.parse::<f64>()
        .map_err(|_| DatasetError::parse(line, format!("{column} field '{raw}' is not a number")))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_dataset(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_header_and_rows_in_order() {
        let file = write_dataset("temperature_c,volume_cc\n0,100\n10,110\n20,121\n");
        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.temperatures(), &[0.0, 10.0, 20.0]);
        assert_eq!(ds.volumes(), &[100.0, 110.0, 121.0]);
    }

    #[test]
    fn trims_field_whitespace() {
        let file = write_dataset("t,v\n 0 , 100 \n 10 , 110 \n");
        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.temperatures(), &[0.0, 10.0]);
    }

    #[test]
    fn ignores_extra_columns() {
        let file = write_dataset("t,v,comment\n0,100,first\n10,110,second\n");
        let ds = load_csv(file.path()).unwrap();
        assert_eq!(ds.volumes(), &[100.0, 110.0]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_csv("/nonexistent/dataset.csv").unwrap_err();
        assert!(matches!(err, DatasetError::NotFound { .. }));
    }

    #[test]
    fn single_column_row_is_a_parse_error() {
        let file = write_dataset("t,v\n0,100\n10\n20,121\n");
        let err = load_csv(file.path()).unwrap_err();
        assert!(matches!(err, DatasetError::Parse { line: 3, .. }));
    }

    #[test]
    fn non_numeric_field_is_a_parse_error() {
        let file = write_dataset("t,v\n0,100\nten,110\n");
        let err = load_csv(file.path()).unwrap_err();
        match err {
            DatasetError::Parse { line, details } => {
                assert_eq!(line, 3);
                assert!(details.contains("temperature"));
            }
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn single_data_row_is_too_short() {
        let file = write_dataset("t,v\n0,100\n");
        assert!(matches!(
            load_csv(file.path()),
            Err(DatasetError::TooShort { rows: 1 })
        ));
    }
}
