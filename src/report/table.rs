use serde::Serialize;
use std::fs::File;
use std::io::{Error, Write};
use std::path::Path;
use strum_macros::{EnumString, IntoStaticStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TableFormat {
    Csv,
    Tsv,
    Json,
}

impl TableFormat {
    /// Picks the format from a file extension, defaulting to CSV.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        path.as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .and_then(|e| e.parse().ok())
            .unwrap_or(TableFormat::Csv)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Int(u64),
    Num(f64),
    Text(String),
    Empty,
}

impl Cell {
    fn render(&self) -> String {
        match self {
            Cell::Int(n) => n.to_string(),
            Cell::Num(x) => format!("{x:.12}"),
            Cell::Text(s) => s.clone(),
            Cell::Empty => String::new(),
        }
    }
}

impl From<f64> for Cell {
    fn from(x: f64) -> Self {
        Cell::Num(x)
    }
}

impl From<Option<f64>> for Cell {
    fn from(x: Option<f64>) -> Self {
        x.map_or(Cell::Empty, Cell::Num)
    }
}

impl From<usize> for Cell {
    fn from(n: usize) -> Self {
        Cell::Int(n as u64)
    }
}

impl From<String> for Cell {
    fn from(s: String) -> Self {
        Cell::Text(s)
    }
}

/// Tabular trace of a method run (samples, iterations, Romberg rows...).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new<S: Into<String>>(headers: impl IntoIterator<Item = S>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: vec![],
        }
    }

    /// Appends a row, padding short rows with empty cells.
    pub fn push(&mut self, mut row: Vec<Cell>) {
        row.resize(self.headers.len().max(row.len()), Cell::Empty);
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn export<P: AsRef<Path>>(&self, path: P, fmt: TableFormat) -> Result<(), Error> {
        match fmt {
            TableFormat::Csv => self.export_with_delimiter(path, ','),
            TableFormat::Tsv => self.export_with_delimiter(path, '\t'),
            TableFormat::Json => self.export_json(path),
        }
    }

    fn export_with_delimiter<P: AsRef<Path>>(&self, path: P, delimiter: char) -> Result<(), Error> {
        let mut w = File::create(path)?;
        let d = delimiter.to_string();
        writeln!(w, "{}", self.headers.join(&d))?;
        for row in &self.rows {
            let cells: Vec<String> = row.iter().map(Cell::render).collect();
            writeln!(w, "{}", cells.join(&d))?;
        }
        Ok(())
    }

    fn export_json<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let records: Vec<serde_json::Map<String, serde_json::Value>> = self
            .rows
            .iter()
            .map(|row| {
                self.headers
                    .iter()
                    .cloned()
                    .zip(row.iter().map(|c| match c {
                        Cell::Empty => serde_json::Value::Null,
                        other => serde_json::to_value(other).unwrap_or(serde_json::Value::Null),
                    }))
                    .collect()
            })
            .collect();
        let mut w = File::create(path)?;
        serde_json::to_writer_pretty(&mut w, &records)?;
        writeln!(w)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::NamedTempFile;

    fn table() -> Table {
        let mut t = Table::new(["i", "x", "note"]);
        t.push(vec![Cell::from(1usize), Cell::from(0.5), "first".to_string().into()]);
        t.push(vec![Cell::from(2usize), Cell::from(0.25)]);
        t
    }

    #[test]
    fn default_is_empty() {
        let t = Table::default();
        assert!(t.is_empty());
        assert_eq!(t.len(), 0);
    }

    #[test]
    fn short_rows_are_padded() {
        let t = table();
        assert_eq!(t.rows()[1].len(), 3);
        assert_eq!(t.rows()[1][2], Cell::Empty);
    }

    #[test]
    fn export_csv() {
        let tf = NamedTempFile::new().unwrap();
        table().export(tf.path(), TableFormat::Csv).unwrap();

        let got = fs::read_to_string(tf.path()).unwrap();
        let exp = "\
i,x,note
1,0.500000000000,first
2,0.250000000000,
";
        assert_eq!(got, exp);
    }

    #[test]
    fn export_tsv() {
        let tf = NamedTempFile::new().unwrap();
        table().export(tf.path(), TableFormat::Tsv).unwrap();

        let got = fs::read_to_string(tf.path()).unwrap();
        let exp = "i\tx\tnote\n1\t0.500000000000\tfirst\n2\t0.250000000000\t\n";
        assert_eq!(got, exp);
    }

    #[test]
    fn export_json_keeps_header_order_and_nulls() {
        let tf = NamedTempFile::new().unwrap();
        table().export(tf.path(), TableFormat::Json).unwrap();

        let got: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(tf.path()).unwrap()).unwrap();
        assert_eq!(
            got,
            serde_json::json!([
                {"i": 1, "x": 0.5, "note": "first"},
                {"i": 2, "x": 0.25, "note": null}
            ])
        );
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(TableFormat::from_path("out.TSV"), TableFormat::Tsv);
        assert_eq!(TableFormat::from_path("out.json"), TableFormat::Json);
        assert_eq!(TableFormat::from_path("out"), TableFormat::Csv);
    }
}
