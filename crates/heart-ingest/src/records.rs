//! Fixed-width record reshaping.
//!
//! A raw token stream carries no record markers; records are reconstructed
//! by slicing consecutive chunks of a known field count.

use heart_model::Source;
use tracing::warn;

/// Records reconstructed from one source's token stream.
#[derive(Debug, Clone)]
pub struct RecordTable {
    source: Source,
    field_count: usize,
    records: Vec<Vec<String>>,
}

impl RecordTable {
    pub fn source(&self) -> Source {
        self.source
    }

    pub fn field_count(&self) -> usize {
        self.field_count
    }

    pub fn records(&self) -> &[Vec<String>] {
        &self.records
    }

    pub fn row_count(&self) -> usize {
        self.records.len()
    }
}

/// Slice a token stream into consecutive non-overlapping records of
/// `field_count` tokens, in order.
///
/// Integer-division semantics: `row_count = len / field_count`, and a
/// trailing remainder is discarded rather than treated as an error. The
/// discard is logged so a malformed source file is visible to the operator.
pub fn reshape(source: Source, tokens: Vec<String>, field_count: usize) -> RecordTable {
    if field_count == 0 {
        return RecordTable {
            source,
            field_count,
            records: Vec::new(),
        };
    }
    let row_count = tokens.len() / field_count;
    let remainder = tokens.len() % field_count;
    if remainder != 0 {
        warn!(
            source = %source,
            field_count,
            discarded = remainder,
            "token count not aligned to field boundary; discarding trailing tokens"
        );
    }
    let mut records = Vec::with_capacity(row_count);
    let mut tokens = tokens.into_iter();
    for _ in 0..row_count {
        records.push(tokens.by_ref().take(field_count).collect());
    }
    RecordTable {
        source,
        field_count,
        records,
    }
}
