use std::path::PathBuf;

use heart_model::Source;

/// Outcome of a full merge run, consumed by the console summary.
#[derive(Debug)]
pub struct MergeResult {
    pub output: PathBuf,
    pub sources: Vec<SourceSummary>,
    pub merged_rows: usize,
    pub sparse_dropped: Vec<String>,
    pub rows_removed: usize,
    pub final_rows: usize,
    pub final_columns: usize,
}

/// Per-source ingest counts, in merge order.
#[derive(Debug)]
pub struct SourceSummary {
    pub source: Source,
    pub file: PathBuf,
    pub records: usize,
}
