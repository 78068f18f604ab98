use std::time::Instant;

use anyhow::Result;
use comfy_table::Table;
use tracing::{debug, info_span};

use heart_model::{COLUMNS, ColumnCatalog};

use crate::cli::MergeArgs;
use crate::pipeline::{
    FilterResult, IngestResult, PruneResult, filter, ingest, merge, output, prune,
};
use crate::summary::apply_table_style;
use crate::types::MergeResult;

/// Print the 76-field raw record catalog.
pub fn run_columns() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Description"]);
    apply_table_style(&mut table);
    for column in COLUMNS {
        table.add_row(vec![column.name, column.label]);
    }
    println!("{table}");
    Ok(())
}

/// Run the full merge pipeline and collect the summary.
pub fn run_merge(args: &MergeArgs) -> Result<MergeResult> {
    let catalog = ColumnCatalog::standard();
    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| args.data_dir.join("data.csv"));
    let run_start = Instant::now();

    let ingest_span = info_span!("ingest", data_dir = %args.data_dir.display());
    let IngestResult { frames, sources } =
        ingest_span.in_scope(|| ingest(&args.data_dir, &catalog))?;

    let merged = info_span!("merge").in_scope(|| merge(frames))?;
    let merged_rows = merged.height();

    let PruneResult {
        data: pruned,
        sparse_dropped,
    } = info_span!("prune").in_scope(|| prune(&merged))?;

    let FilterResult {
        data: filtered,
        rows_removed,
    } = info_span!("filter").in_scope(|| filter(&pruned))?;

    let final_rows = filtered.height();
    let final_columns = filtered.width();
    let written = info_span!("output").in_scope(|| output(&filtered, &output_path))?;
    debug!(
        elapsed_ms = run_start.elapsed().as_millis() as u64,
        "merge pipeline done"
    );

    Ok(MergeResult {
        output: written,
        sources,
        merged_rows,
        sparse_dropped,
        rows_removed,
        final_rows,
        final_columns,
    })
}
