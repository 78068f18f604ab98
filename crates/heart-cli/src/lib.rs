//! Heart-disease ETL command-line interface.

pub mod cli;
pub mod commands;
pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
