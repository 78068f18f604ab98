use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};

use heart_core::data_utils::{column_names, string_column};
use heart_output::write_csv;

fn test_df(columns: Vec<(&str, Vec<&str>)>) -> DataFrame {
    let cols = columns
        .into_iter()
        .map(|(name, values)| {
            Series::new(
                name.into(),
                values.into_iter().map(String::from).collect::<Vec<_>>(),
            )
            .into_column()
        })
        .collect();
    DataFrame::new(cols).unwrap()
}

#[test]
fn written_csv_round_trips_as_strings() {
    let df = test_df(vec![
        ("age", vec!["63", "54", "41"]),
        ("trestbps", vec!["145", "130", "120"]),
        ("oldpeak", vec!["2.3", "-9.0", "0"]),
    ]);
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("data.csv");

    write_csv(&df, &path).expect("write csv");

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(&path)
        .expect("open csv");
    let headers: Vec<String> = reader
        .headers()
        .expect("headers")
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(headers, column_names(&df));

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.expect("record");
        rows.push(record.iter().map(ToString::to_string).collect::<Vec<_>>());
    }
    assert_eq!(rows.len(), df.height());
    for (col_idx, name) in column_names(&df).iter().enumerate() {
        let expected = string_column(&df, name).expect("column");
        let actual: Vec<String> = rows.iter().map(|row| row[col_idx].clone()).collect();
        assert_eq!(actual, expected, "column {name} must round-trip");
    }
}
