//! Two-phase column pruning: fixed drop list, then sparsity drop.

use anyhow::Result;
use polars::prelude::DataFrame;
use tracing::debug;

use heart_model::DROPPED_COLUMNS;

use crate::data_utils::{column_names, string_column};

/// Remove the fixed administrative/derived/unused columns unconditionally.
pub fn drop_fixed_columns(df: &DataFrame) -> DataFrame {
    df.drop_many(DROPPED_COLUMNS)
}

/// Count cells equal to `sentinel` in one column.
///
/// Textual comparison only: `-9.0` does not count.
pub fn sentinel_count(df: &DataFrame, name: &str, sentinel: &str) -> Result<usize> {
    let values = string_column(df, name)?;
    Ok(values
        .iter()
        .filter(|value| value.as_str() == sentinel)
        .count())
}

/// Remove every column whose sentinel count exceeds `threshold`.
///
/// Counts are taken against the incoming frame and each column's decision
/// is independent, so evaluation order cannot change the outcome. Returns
/// the pruned frame and the names removed, in frame order.
pub fn drop_sparse_columns(
    df: &DataFrame,
    sentinel: &str,
    threshold: usize,
) -> Result<(DataFrame, Vec<String>)> {
    let mut pruned = df.clone();
    let mut dropped = Vec::new();
    for name in column_names(df) {
        let count = sentinel_count(df, &name, sentinel)?;
        if count > threshold {
            debug!(column = %name, count, "dropping sparse column");
            pruned = pruned.drop(&name)?;
            dropped.push(name);
        }
    }
    Ok((pruned, dropped))
}
