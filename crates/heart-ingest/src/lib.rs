pub mod records;
pub mod tokens;

pub use records::{RecordTable, reshape};
pub use tokens::{IngestError, read_tokens};
