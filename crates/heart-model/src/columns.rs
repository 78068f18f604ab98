//! Column catalog for the raw 76-field institute records.
//!
//! Every raw file tokenizes into records of exactly [`FIELD_COUNT`] fields.
//! The catalog fixes the name and order of those fields; the drop list names
//! the administrative/derived fields that are removed unconditionally before
//! sparsity pruning.

use std::collections::BTreeSet;

use crate::error::{ModelError, Result};

/// Number of fields in one raw record.
pub const FIELD_COUNT: usize = COLUMNS.len();

/// Literal token the institutes use for missing/unknown values.
///
/// Compared as text only. `-9.0` is a real measurement and must not match.
pub const MISSING_SENTINEL: &str = "-9";

/// A column whose sentinel count exceeds this is dropped as too sparse.
pub const SPARSITY_THRESHOLD: usize = 100;

/// One field of the raw record layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub label: &'static str,
}

const fn col(name: &'static str, label: &'static str) -> ColumnDef {
    ColumnDef { name, label }
}

/// The 76 fields of a raw institute record, in file order.
///
/// Names and meanings follow the institutes' attribute documentation.
pub const COLUMNS: [ColumnDef; 76] = [
    col("id", "patient identification number"),
    col("ccf", "social security number (zeroed)"),
    col("age", "age in years"),
    col("sex", "sex (1 = male, 0 = female)"),
    col("painloc", "chest pain location (1 = substernal)"),
    col("painexer", "pain provoked by exertion"),
    col("relrest", "pain relieved after rest"),
    col("pncaden", "sum of painloc, painexer, relrest"),
    col("cp", "chest pain type"),
    col("trestbps", "resting blood pressure (mm Hg)"),
    col("htn", "history of hypertension"),
    col("chol", "serum cholesterol (mg/dl)"),
    col("smoke", "smoker"),
    col("cigs", "cigarettes per day"),
    col("years", "years as a smoker"),
    col("fbs", "fasting blood sugar > 120 mg/dl"),
    col("dm", "history of diabetes"),
    col("famhist", "family history of coronary artery disease"),
    col("restecg", "resting electrocardiographic results"),
    col("ekgmo", "month of exercise ECG reading"),
    col("ekgday", "day of exercise ECG reading"),
    col("ekgyr", "year of exercise ECG reading"),
    col("dig", "digitalis used during exercise ECG"),
    col("prop", "beta blocker used during exercise ECG"),
    col("nitr", "nitrates used during exercise ECG"),
    col("pro", "calcium channel blocker used during exercise ECG"),
    col("diuretic", "diuretic used during exercise ECG"),
    col("proto", "exercise protocol"),
    col("thaldur", "duration of exercise test (minutes)"),
    col("thaltime", "time when ST depression was noted"),
    col("met", "METs achieved"),
    col("thalach", "maximum heart rate achieved"),
    col("thalrest", "resting heart rate"),
    col("tpeakbps", "peak exercise blood pressure, systolic"),
    col("tpeakbpd", "peak exercise blood pressure, diastolic"),
    col("dummy", "placeholder field"),
    col("trestbpd", "resting blood pressure, diastolic"),
    col("exang", "exercise induced angina"),
    col("xhypo", "exercise hypotension"),
    col("oldpeak", "ST depression induced by exercise relative to rest"),
    col("slope", "slope of peak exercise ST segment"),
    col("rldv5", "rest R-wave amplitude, lead V5"),
    col("rldv5e", "exercise R-wave amplitude, lead V5"),
    col("ca", "major vessels colored by fluoroscopy"),
    col("restckm", "unused"),
    col("exerckm", "unused"),
    col("restef", "rest radionuclide ejection fraction"),
    col("restwm", "rest wall motion abnormality"),
    col("exeref", "exercise radionuclide ejection fraction"),
    col("exerwm", "exercise wall motion abnormality"),
    col("thal", "thallium scan result"),
    col("thalsev", "unused"),
    col("thalpul", "unused"),
    col("earlobe", "unused"),
    col("cmo", "month of cardiac catheterization"),
    col("cday", "day of cardiac catheterization"),
    col("cyr", "year of cardiac catheterization"),
    col("num", "diagnosis of heart disease (angiographic status)"),
    col("lmt", "left main trunk narrowing"),
    col("ladprox", "proximal left anterior descending narrowing"),
    col("laddist", "distal left anterior descending narrowing"),
    col("diag", "diagonal branch narrowing"),
    col("cxmain", "main circumflex narrowing"),
    col("ramus", "ramus narrowing"),
    col("om1", "first obtuse marginal narrowing"),
    col("om2", "second obtuse marginal narrowing"),
    col("rcaprox", "proximal right coronary artery narrowing"),
    col("rcadist", "distal right coronary artery narrowing"),
    col("lvx1", "unused"),
    col("lvx2", "unused"),
    col("lvx3", "unused"),
    col("lvx4", "unused"),
    col("lvf", "unused"),
    col("cathef", "catheterization ejection fraction"),
    col("junk", "unused"),
    col("name", "patient last name (replaced)"),
];

/// Administrative/derived/unused fields removed unconditionally before the
/// sparsity pass.
pub const DROPPED_COLUMNS: [&str; 16] = [
    "id", "ccf", "dummy", "restckm", "exerckm", "thalsev", "thalpul", "earlobe", "lvx1", "lvx2",
    "lvx3", "lvx4", "lvf", "cathef", "junk", "name",
];

/// Ordered, duplicate-free set of column names for a record table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnCatalog {
    names: Vec<String>,
}

impl ColumnCatalog {
    /// Build a catalog from an ordered name list, rejecting duplicates.
    pub fn new(names: Vec<String>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(ModelError::DuplicateColumn(name.clone()));
            }
        }
        Ok(Self { names })
    }

    /// The standard 76-field raw record catalog.
    pub fn standard() -> Self {
        Self {
            names: COLUMNS.iter().map(|c| c.name.to_string()).collect(),
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_catalog_is_duplicate_free() {
        let catalog = ColumnCatalog::standard();
        assert_eq!(catalog.len(), FIELD_COUNT);
        assert!(ColumnCatalog::new(catalog.names().to_vec()).is_ok());
    }

    #[test]
    fn drop_list_names_exist_in_catalog() {
        let catalog = ColumnCatalog::standard();
        for name in DROPPED_COLUMNS {
            assert!(catalog.contains(name), "{name} missing from catalog");
        }
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let error = ColumnCatalog::new(vec!["age".to_string(), "age".to_string()])
            .expect_err("duplicates must fail");
        assert!(matches!(error, ModelError::DuplicateColumn(name) if name == "age"));
    }
}
