//! CSV output for the merged heart-disease dataset.

mod writer;

pub use writer::write_csv;
