use anyhow::{Context, Result, bail};
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

use heart_ingest::RecordTable;
use heart_model::{ColumnCatalog, Source};

/// One source's reshaped records as a string-typed polars frame.
#[derive(Debug, Clone)]
pub struct SourceFrame {
    pub source: Source,
    pub data: DataFrame,
}

impl SourceFrame {
    pub fn record_count(&self) -> usize {
        self.data.height()
    }
}

/// Build a frame from reshaped records, assigning the catalog's column names
/// in order.
///
/// Fails when the record width disagrees with the catalog length.
pub fn build_source_frame(table: &RecordTable, catalog: &ColumnCatalog) -> Result<SourceFrame> {
    if table.field_count() != catalog.len() {
        bail!(
            "{}: record width {} does not match {} catalog columns",
            table.source(),
            table.field_count(),
            catalog.len()
        );
    }
    let records = table.records();
    let mut columns = Vec::with_capacity(catalog.len());
    for (idx, name) in catalog.names().iter().enumerate() {
        let values: Vec<String> = records
            .iter()
            .map(|record| record.get(idx).map(String::as_str).unwrap_or("").to_string())
            .collect();
        columns.push(Series::new(name.as_str().into(), values).into_column());
    }
    let data = DataFrame::new(columns).with_context(|| format!("build {} frame", table.source()))?;
    Ok(SourceFrame {
        source: table.source(),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use heart_ingest::reshape;

    fn catalog() -> ColumnCatalog {
        ColumnCatalog::new(vec!["a".to_string(), "b".to_string(), "c".to_string()]).unwrap()
    }

    fn tokens(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| (*v).to_string()).collect()
    }

    #[test]
    fn builds_named_columns_in_order() {
        let table = reshape(
            Source::Cleveland,
            tokens(&["1", "2", "3", "4", "5", "6"]),
            3,
        );
        let frame = build_source_frame(&table, &catalog()).unwrap();

        assert_eq!(frame.source, Source::Cleveland);
        assert_eq!(frame.record_count(), 2);
        assert_eq!(
            crate::data_utils::column_names(&frame.data),
            vec!["a", "b", "c"]
        );
        assert_eq!(
            crate::data_utils::string_column(&frame.data, "b").unwrap(),
            vec!["2", "5"]
        );
    }

    #[test]
    fn width_mismatch_is_fatal() {
        let table = reshape(Source::Hungarian, tokens(&["1", "2", "3", "4"]), 4);
        let error = build_source_frame(&table, &catalog()).expect_err("width mismatch must fail");
        assert!(error.to_string().contains("record width 4"));
    }

    #[test]
    fn empty_table_builds_empty_frame() {
        let table = reshape(Source::Switzerland, Vec::new(), 3);
        let frame = build_source_frame(&table, &catalog()).unwrap();
        assert_eq!(frame.record_count(), 0);
        assert_eq!(frame.data.width(), 3);
    }
}
