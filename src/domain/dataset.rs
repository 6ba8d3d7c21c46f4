// Tabular dataset domain models
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of leading rows a pie chart takes from a percentage breakdown
pub const PIE_SLICE_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnType {
    Date,
    String,
    Number,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub label: String,
    #[serde(rename = "type")]
    pub kind: ColumnType,
}

impl Column {
    pub fn new(label: impl Into<String>, kind: ColumnType) -> Self {
        Self {
            label: label.into(),
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Date(NaiveDate),
    Text(String),
    Number(f64),
    Null,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Row(Vec<Cell>);

impl Row {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self(cells)
    }

    /// Placeholder for a row the service reported as absent
    pub fn null(arity: usize) -> Self {
        Self(vec![Cell::Null; arity])
    }
}

#[cfg(test)]
impl Row {
    pub fn cells(&self) -> &[Cell] {
        &self.0
    }
}

/// One day of a trend: (date, count)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "(NaiveDate, f64)")]
pub struct TrendRow {
    pub date: NaiveDate,
    pub count: f64,
}

impl From<(NaiveDate, f64)> for TrendRow {
    fn from((date, count): (NaiveDate, f64)) -> Self {
        Self { date, count }
    }
}

impl From<TrendRow> for Row {
    fn from(row: TrendRow) -> Self {
        Row::new(vec![Cell::Date(row.date), Cell::Number(row.count)])
    }
}

/// Per-label totals: (label, tracks, distinct users)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "(String, f64, f64)")]
pub struct CountRow {
    pub label: String,
    pub tracks: f64,
    pub users: f64,
}

impl CountRow {
    pub fn new(label: impl Into<String>, tracks: f64, users: f64) -> Self {
        Self {
            label: label.into(),
            tracks,
            users,
        }
    }
}

impl From<(String, f64, f64)> for CountRow {
    fn from((label, tracks, users): (String, f64, f64)) -> Self {
        Self {
            label,
            tracks,
            users,
        }
    }
}

impl From<CountRow> for Row {
    fn from(row: CountRow) -> Self {
        Row::new(vec![
            Cell::Text(row.label),
            Cell::Number(row.tracks),
            Cell::Number(row.users),
        ])
    }
}

/// Typed table handed to a chart widget. Built in one step, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DataTable {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl DataTable {
    pub fn new(columns: Vec<Column>, rows: Vec<Row>) -> Self {
        Self { columns, rows }
    }

    /// Two columns: the date and a count labelled by `title`
    pub fn trend(title: &str, rows: Vec<TrendRow>) -> Self {
        let columns = vec![
            Column::new("Date", ColumnType::Date),
            Column::new(title, ColumnType::Number),
        ];
        Self::new(columns, rows.into_iter().map(Row::from).collect())
    }

    /// Three columns: `column_name`, Tracks and Users
    pub fn counts(column_name: &str, rows: impl IntoIterator<Item = Row>) -> Self {
        Self::new(count_columns(column_name), rows.into_iter().collect())
    }

    /// Every row of a percentage breakdown; absent rows become null rows
    pub fn count_table(column_name: &str, rows: &[Option<CountRow>]) -> Self {
        let arity = count_columns(column_name).len();
        Self::counts(
            column_name,
            rows.iter().map(|row| match row {
                Some(row) => Row::from(row.clone()),
                None => Row::null(arity),
            }),
        )
    }

    /// Leading rows of a percentage breakdown, skipping absent ones
    pub fn pie_slices(column_name: &str, rows: &[Option<CountRow>]) -> Self {
        Self::counts(
            column_name,
            rows.iter()
                .take(PIE_SLICE_LIMIT)
                .flatten()
                .cloned()
                .map(Row::from),
        )
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
impl DataTable {
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

fn count_columns(column_name: &str) -> Vec<Column> {
    vec![
        Column::new(column_name, ColumnType::String),
        Column::new("Tracks", ColumnType::Number),
        Column::new("Users", ColumnType::Number),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(len: usize) -> Vec<Option<CountRow>> {
        (0..len)
            .map(|i| Some(CountRow::new(format!("t{}", i), i as f64, 1.0)))
            .collect()
    }

    #[test]
    fn test_pie_takes_first_five_rows() {
        let rows = breakdown(7);
        let pie = DataTable::pie_slices("Template", &rows);
        let table = DataTable::count_table("Template", &rows);

        assert_eq!(pie.len(), 5);
        assert_eq!(table.len(), 7);
        assert_eq!(pie.rows()[4].cells()[0], Cell::Text("t4".to_string()));
    }

    #[test]
    fn test_pie_with_fewer_rows_than_limit() {
        let rows = breakdown(3);
        assert_eq!(DataTable::pie_slices("Template", &rows).len(), 3);
        assert_eq!(DataTable::count_table("Template", &rows).len(), 3);
    }

    #[test]
    fn test_pie_skips_absent_rows_individually() {
        let mut rows = breakdown(7);
        rows[1] = None;
        rows[3] = None;

        let pie = DataTable::pie_slices("Template", &rows);
        let labels: Vec<&Cell> = pie.rows().iter().map(|r| &r.cells()[0]).collect();
        assert_eq!(
            labels,
            vec![
                &Cell::Text("t0".to_string()),
                &Cell::Text("t2".to_string()),
                &Cell::Text("t4".to_string()),
            ]
        );

        let table = DataTable::count_table("Template", &rows);
        assert_eq!(table.len(), 7);
        assert_eq!(table.rows()[1], Row::null(3));
    }

    #[test]
    fn test_trend_schema() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 1).unwrap();
        let table = DataTable::trend("Logins", vec![TrendRow { date, count: 4.0 }]);

        assert_eq!(table.columns()[0], Column::new("Date", ColumnType::Date));
        assert_eq!(table.columns()[1], Column::new("Logins", ColumnType::Number));
        assert_eq!(table.rows()[0].cells(), &[Cell::Date(date), Cell::Number(4.0)]);
    }

    #[test]
    fn test_rows_decode_from_service_arrays() {
        let trend: Vec<TrendRow> = serde_json::from_str(r#"[["2026-10-01", 12]]"#).unwrap();
        assert_eq!(trend[0].count, 12.0);

        let counts: Vec<Option<CountRow>> =
            serde_json::from_str(r#"[["genes", 10, 3], null]"#).unwrap();
        assert_eq!(counts[0], Some(CountRow::new("genes", 10.0, 3.0)));
        assert_eq!(counts[1], None);
    }

    #[test]
    fn test_serializes_null_cells() {
        let table = DataTable::count_table("Template", &[None]);
        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["rows"][0], serde_json::json!([null, null, null]));
        assert_eq!(json["columns"][1]["type"], "number");
    }
}
