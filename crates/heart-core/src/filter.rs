//! Sentinel row filtering.

use anyhow::Result;
use polars::prelude::DataFrame;

use crate::data_utils::{column_names, filter_rows, string_column};

/// Remove every row holding `sentinel` in any column.
///
/// Equivalent to filtering column by column: removal is monotonic, so only
/// rows complete in every surviving column remain. Returns the filtered
/// frame and the number of rows removed.
pub fn drop_sentinel_rows(df: &DataFrame, sentinel: &str) -> Result<(DataFrame, usize)> {
    if df.height() == 0 {
        return Ok((df.clone(), 0));
    }
    let mut keep = vec![true; df.height()];
    for name in column_names(df) {
        let values = string_column(df, &name)?;
        for (idx, value) in values.iter().enumerate() {
            if value.as_str() == sentinel {
                keep[idx] = false;
            }
        }
    }
    let filtered = filter_rows(df, &keep)?;
    let removed = df.height() - filtered.height();
    Ok((filtered, removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{IntoColumn, NamedFrom, Series};

    fn test_df(columns: Vec<(&str, Vec<&str>)>) -> DataFrame {
        let cols = columns
            .into_iter()
            .map(|(name, values)| {
                Series::new(
                    name.into(),
                    values.into_iter().map(String::from).collect::<Vec<_>>(),
                )
                .into_column()
            })
            .collect();
        DataFrame::new(cols).unwrap()
    }

    #[test]
    fn rows_with_sentinel_anywhere_are_removed() {
        let df = test_df(vec![
            ("age", vec!["63", "-9", "54", "41"]),
            ("chol", vec!["233", "180", "-9", "204"]),
        ]);

        let (filtered, removed) = drop_sentinel_rows(&df, "-9").unwrap();
        assert_eq!(removed, 2);
        assert_eq!(string_column(&filtered, "age").unwrap(), vec!["63", "41"]);
        assert_eq!(string_column(&filtered, "chol").unwrap(), vec!["233", "204"]);
    }

    #[test]
    fn textual_match_leaves_decimal_variants_alone() {
        let df = test_df(vec![("oldpeak", vec!["-9.0", "2.3"])]);
        let (filtered, removed) = drop_sentinel_rows(&df, "-9").unwrap();
        assert_eq!(removed, 0);
        assert_eq!(filtered.height(), 2);
    }

    #[test]
    fn empty_frame_passes_through() {
        let df = test_df(vec![("age", vec![])]);
        let (filtered, removed) = drop_sentinel_rows(&df, "-9").unwrap();
        assert_eq!(filtered.height(), 0);
        assert_eq!(removed, 0);
    }
}
