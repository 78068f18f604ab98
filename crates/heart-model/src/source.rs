use std::fmt;

use serde::{Deserialize, Serialize};

/// The four institutes whose raw files feed the merge.
///
/// [`Source::ALL`] fixes the concatenation order; the merged table stacks
/// the reshaped tables in exactly this sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Source {
    Cleveland,
    Hungarian,
    Switzerland,
    LongBeach,
}

impl Source {
    /// Merge order: cleveland, hungarian, switzerland, long beach.
    pub const ALL: [Source; 4] = [
        Source::Cleveland,
        Source::Hungarian,
        Source::Switzerland,
        Source::LongBeach,
    ];

    /// Raw file name inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Source::Cleveland => "cleveland.data",
            Source::Hungarian => "hungarian.data",
            Source::Switzerland => "switzerland.data",
            Source::LongBeach => "long-beach-va.data",
        }
    }

    /// Operator-facing label used in logs and the summary table.
    pub fn label(&self) -> &'static str {
        match self {
            Source::Cleveland => "cleveland",
            Source::Hungarian => "hungarian",
            Source::Switzerland => "switzerland",
            Source::LongBeach => "long beach",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
