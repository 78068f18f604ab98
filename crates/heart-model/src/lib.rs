pub mod columns;
pub mod error;
pub mod source;

pub use columns::{
    COLUMNS, ColumnCatalog, ColumnDef, DROPPED_COLUMNS, FIELD_COUNT, MISSING_SENTINEL,
    SPARSITY_THRESHOLD,
};
pub use error::{ModelError, Result};
pub use source::Source;
