//! Polars `AnyValue` helpers shared by the table stages.

use anyhow::Result;
use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NewChunkedArray};

/// Convert a Polars `AnyValue` to its textual form.
///
/// Cells in this pipeline are string-typed; `Null` becomes the empty string
/// so sentinel comparisons stay purely textual.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Materialize one column as owned strings, row by row.
pub fn string_column(df: &DataFrame, name: &str) -> Result<Vec<String>> {
    let column = df.column(name)?;
    let mut values = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        values.push(any_to_string(column.get(idx).unwrap_or(AnyValue::Null)));
    }
    Ok(values)
}

/// Column names as owned strings, in frame order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .iter()
        .map(|name| name.as_str().to_string())
        .collect()
}

/// Keep only the rows marked `true`.
pub fn filter_rows(df: &DataFrame, keep: &[bool]) -> Result<DataFrame> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    Ok(df.filter(&mask)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn test_df() -> DataFrame {
        let age = Series::new("age".into(), vec!["63", "-9"]).into_column();
        let sex = Series::new("sex".into(), vec!["1", "0"]).into_column();
        DataFrame::new(vec![age, sex]).unwrap()
    }

    #[test]
    fn any_to_string_handles_nulls_and_text() {
        assert_eq!(any_to_string(AnyValue::Null), "");
        assert_eq!(any_to_string(AnyValue::String("-9")), "-9");
    }

    #[test]
    fn string_column_preserves_order() {
        let df = test_df();
        assert_eq!(string_column(&df, "age").unwrap(), vec!["63", "-9"]);
        assert!(string_column(&df, "missing").is_err());
    }

    #[test]
    fn column_names_follow_frame_order() {
        assert_eq!(column_names(&test_df()), vec!["age", "sex"]);
    }

    #[test]
    fn filter_rows_applies_mask() {
        let df = test_df();
        let filtered = filter_rows(&df, &[false, true]).unwrap();
        assert_eq!(filtered.height(), 1);
        assert_eq!(string_column(&filtered, "age").unwrap(), vec!["-9"]);
    }
}
