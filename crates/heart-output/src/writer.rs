use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;
use polars::prelude::{AnyValue, DataFrame};

use heart_core::data_utils::{any_to_string, column_names};

/// Write the final table as CSV.
///
/// One header row of column names, one line per record, no row-index
/// column. The destination is created or truncated.
pub fn write_csv(df: &DataFrame, path: &Path) -> Result<()> {
    let mut writer = WriterBuilder::new()
        .from_path(path)
        .with_context(|| format!("write csv: {}", path.display()))?;

    writer
        .write_record(column_names(df))
        .with_context(|| format!("write header: {}", path.display()))?;

    let columns = df.get_columns();
    for idx in 0..df.height() {
        let mut record = Vec::with_capacity(columns.len());
        for column in columns {
            record.push(any_to_string(column.get(idx).unwrap_or(AnyValue::Null)));
        }
        writer
            .write_record(&record)
            .with_context(|| format!("write row {idx}: {}", path.display()))?;
    }
    writer
        .flush()
        .with_context(|| format!("flush csv: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn test_df() -> DataFrame {
        let age = Series::new("age".into(), vec!["63", "54"]).into_column();
        let chol = Series::new("chol".into(), vec!["233", "-9.0"]).into_column();
        DataFrame::new(vec![age, chol]).unwrap()
    }

    #[test]
    fn writes_header_and_rows_without_index() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("data.csv");

        write_csv(&test_df(), &path).expect("write csv");

        let contents = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(contents, "age,chol\n63,233\n54,-9.0\n");
    }

    #[test]
    fn existing_destination_is_truncated() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("data.csv");
        std::fs::write(&path, "stale contents that are much longer than the new file\n")
            .expect("seed file");

        write_csv(&test_df(), &path).expect("write csv");

        let contents = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(contents, "age,chol\n63,233\n54,-9.0\n");
    }

    #[test]
    fn unwritable_destination_fails() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("no-such-dir").join("data.csv");
        assert!(write_csv(&test_df(), &path).is_err());
    }
}
