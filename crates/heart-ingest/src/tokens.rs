use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;

/// Read one raw institute file as an ordered, whitespace-delimited token
/// stream.
///
/// The whole file is read up front; tokens keep their textual form. Any
/// run of whitespace (spaces, newlines) separates tokens, so record
/// boundaries in the file carry no meaning here.
pub fn read_tokens(path: &Path) -> Result<Vec<String>> {
    let contents = fs::read_to_string(path).map_err(|source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(contents.split_whitespace().map(ToString::to_string).collect())
}
