use anyhow::{Context, Result, bail};
use polars::prelude::DataFrame;
use tracing::debug;

use crate::frame::SourceFrame;

/// Stack source frames row-wise in their given order.
///
/// All frames must share the catalog's column layout; polars rejects a
/// schema mismatch during the vstack.
pub fn merge_frames(frames: Vec<SourceFrame>) -> Result<DataFrame> {
    let mut frames = frames.into_iter();
    let Some(first) = frames.next() else {
        bail!("no source frames to merge");
    };
    let mut merged = first.data;
    for frame in frames {
        debug!(source = %frame.source, rows = frame.record_count(), "stacking frame");
        merged
            .vstack_mut(&frame.data)
            .with_context(|| format!("merge {} frame", frame.source))?;
    }
    Ok(merged)
}
