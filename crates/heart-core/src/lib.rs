pub mod data_utils;
pub mod filter;
pub mod frame;
pub mod merge;
pub mod prune;

pub use filter::drop_sentinel_rows;
pub use frame::{SourceFrame, build_source_frame};
pub use merge::merge_frames;
pub use prune::{drop_fixed_columns, drop_sparse_columns, sentinel_count};
