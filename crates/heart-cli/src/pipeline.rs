//! Merge pipeline with explicit stages.
//!
//! The pipeline follows these stages in order:
//! 1. **Ingest**: read each institute file and reshape it into 76-field records
//! 2. **Merge**: stack the reshaped frames and assign the catalog names
//! 3. **Prune**: drop the fixed column list, then columns too sparse to keep
//! 4. **Filter**: drop rows holding the missing-value sentinel
//! 5. **Output**: write the final CSV
//!
//! Each stage takes the output of the previous stage and returns typed results.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{debug, info};

use heart_core::{
    SourceFrame, build_source_frame, drop_fixed_columns, drop_sentinel_rows, drop_sparse_columns,
    merge_frames,
};
use heart_ingest::{read_tokens, reshape};
use heart_model::{ColumnCatalog, MISSING_SENTINEL, SPARSITY_THRESHOLD, Source};

use crate::types::SourceSummary;

/// Result of the ingest stage.
#[derive(Debug)]
pub struct IngestResult {
    /// One frame per source, in merge order.
    pub frames: Vec<SourceFrame>,
    /// Per-source counts for the summary.
    pub sources: Vec<SourceSummary>,
}

/// Read and reshape the four institute files in merge order.
pub fn ingest(data_dir: &Path, catalog: &ColumnCatalog) -> Result<IngestResult> {
    let mut frames = Vec::with_capacity(Source::ALL.len());
    let mut sources = Vec::with_capacity(Source::ALL.len());
    for source in Source::ALL {
        let path = data_dir.join(source.file_name());
        let tokens = read_tokens(&path).with_context(|| format!("ingest {source}"))?;
        debug!(source = %source, tokens = tokens.len(), "tokenized");
        let table = reshape(source, tokens, catalog.len());
        let frame = build_source_frame(&table, catalog)?;
        info!(source = %source, rows = frame.record_count(), "ingested");
        sources.push(SourceSummary {
            source,
            file: path,
            records: frame.record_count(),
        });
        frames.push(frame);
    }
    Ok(IngestResult { frames, sources })
}

/// Stack the source frames into the unified table.
pub fn merge(frames: Vec<SourceFrame>) -> Result<DataFrame> {
    let merged = merge_frames(frames)?;
    info!(rows = merged.height(), columns = merged.width(), "merged");
    Ok(merged)
}

/// Result of the prune stage.
#[derive(Debug)]
pub struct PruneResult {
    pub data: DataFrame,
    /// Columns removed by the sparsity pass, in frame order.
    pub sparse_dropped: Vec<String>,
}

/// Drop the fixed column list, then columns too sparse to keep.
pub fn prune(df: &DataFrame) -> Result<PruneResult> {
    let fixed = drop_fixed_columns(df);
    debug!(columns = fixed.width(), "fixed columns dropped");
    let (data, sparse_dropped) =
        drop_sparse_columns(&fixed, MISSING_SENTINEL, SPARSITY_THRESHOLD)?;
    info!(
        columns = data.width(),
        sparse_dropped = sparse_dropped.len(),
        "pruned"
    );
    Ok(PruneResult {
        data,
        sparse_dropped,
    })
}

/// Result of the filter stage.
#[derive(Debug)]
pub struct FilterResult {
    pub data: DataFrame,
    pub rows_removed: usize,
}

/// Drop rows still holding the sentinel in any surviving column.
pub fn filter(df: &DataFrame) -> Result<FilterResult> {
    let (data, rows_removed) = drop_sentinel_rows(df, MISSING_SENTINEL)?;
    info!(rows = data.height(), rows_removed, "filtered");
    Ok(FilterResult { data, rows_removed })
}

/// Write the final CSV.
pub fn output(df: &DataFrame, path: &Path) -> Result<PathBuf> {
    heart_output::write_csv(df, path)?;
    info!(path = %path.display(), rows = df.height(), "wrote output");
    Ok(path.to_path_buf())
}
