// Neoshape - Graph Query Result Shaping
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Row-aligned tables built from normalized columns.
//!
//! Rows are aligned by position only. Cell `i` of every column lands in row
//! `i`, whatever record it originally came from. Columns shorter than the
//! longest one are padded with `Null` at the end.

use indexmap::IndexMap;
use neoshape_core::Value;
use serde::Serialize;
use std::fmt;
use std::io::Write;
use tabled::builder::Builder;
use tabled::settings::Style;
use tracing::warn;

use crate::config::TableConfig;
use crate::error::{Result, ShapeError};
use crate::normalize::ColumnMap;

/// A table of converted values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Arrange per-column sequences into rows.
    pub fn from_columns(columns: ColumnMap) -> Self {
        let row_count = columns.values().map(Vec::len).max().unwrap_or(0);

        {
            let ragged: Vec<(&str, usize)> = columns
                .iter()
                .filter(|(_, cells)| cells.len() != row_count)
                .map(|(name, cells)| (name.as_str(), cells.len()))
                .collect();
            if !ragged.is_empty() {
                warn!(
                    rows = row_count,
                    "column lengths differ, padding with nulls: {:?}", ragged
                );
            }
        }

        let mut rows: Vec<Vec<Value>> = (0..row_count)
            .map(|_| Vec::with_capacity(columns.len()))
            .collect();
        let mut names = Vec::with_capacity(columns.len());

        for (name, cells) in columns {
            let len = cells.len();
            for (row, cell) in rows.iter_mut().zip(cells) {
                row.push(cell);
            }
            for row in rows.iter_mut().skip(len) {
                row.push(Value::Null);
            }
            names.push(name);
        }

        Self {
            columns: names,
            rows,
        }
    }

    /// Column names in table order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Rows in record order.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cells of the named column, top to bottom.
    pub fn column(&self, name: &str) -> Option<Vec<&Value>> {
        let index = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|row| &row[index]).collect())
    }

    /// A single cell.
    pub fn cell(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row).map(|r| &r[index])
    }

    /// Rows as column-keyed maps.
    pub fn records(&self) -> Vec<IndexMap<&str, &Value>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(String::as_str)
                    .zip(row.iter())
                    .collect()
            })
            .collect()
    }

    /// Render the table as CSV with default settings.
    pub fn to_csv(&self) -> Result<String> {
        self.to_csv_with_config(&TableConfig::default())
    }

    /// Render the table as CSV.
    pub fn to_csv_with_config(&self, config: &TableConfig) -> Result<String> {
        let mut buffer = Vec::new();
        self.write_csv(&mut buffer, config)?;
        String::from_utf8(buffer).map_err(|_| ShapeError::InvalidUtf8 {
            context: "CSV output".to_string(),
        })
    }

    /// Write the table as CSV.
    pub fn write_csv<W: Write>(&self, writer: W, config: &TableConfig) -> Result<()> {
        let mut wtr = csv::WriterBuilder::new()
            .delimiter(config.delimiter)
            .quote_style(config.quote_style)
            .from_writer(writer);

        if config.include_headers {
            wtr.write_record(&self.columns)?;
        }
        for row in &self.rows {
            let cells = row.iter().map(cell_text).collect::<Result<Vec<_>>>()?;
            wtr.write_record(&cells)?;
        }

        wtr.flush()?;
        Ok(())
    }

    /// Render the rows as a JSON array of objects.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.records())?)
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut builder = Builder::default();
        builder.push_record(self.columns.iter().cloned());
        for row in &self.rows {
            let cells = row
                .iter()
                .map(cell_text)
                .collect::<Result<Vec<_>>>()
                .map_err(|_| fmt::Error)?;
            builder.push_record(cells);
        }
        let mut table = builder.build();
        table.with(Style::psql());
        write!(f, "{}", table)
    }
}

/// Text form of a cell: strings verbatim, null empty, the rest as JSON.
pub fn cell_text(value: &Value) -> Result<String> {
    Ok(match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        other => serde_json::to_string(other)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(pairs: Vec<(&str, Vec<Value>)>) -> ColumnMap {
        pairs
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    #[test]
    fn test_from_columns_aligns_by_position() {
        let table = Table::from_columns(columns(vec![
            ("name", vec![Value::from("Alice"), Value::from("Bob")]),
            ("age", vec![Value::Int(30), Value::Int(25)]),
        ]));

        assert_eq!(table.columns(), &["name".to_string(), "age".to_string()]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.cell(1, "name"), Some(&Value::from("Bob")));
        assert_eq!(table.cell(0, "age"), Some(&Value::Int(30)));
    }

    #[test]
    fn test_short_column_padded_with_null() {
        let table = Table::from_columns(columns(vec![
            ("a", vec![Value::Int(1), Value::Int(2), Value::Int(3)]),
            ("b", vec![Value::Int(9)]),
        ]));

        assert_eq!(table.row_count(), 3);
        assert_eq!(
            table.column("b"),
            Some(vec![&Value::Int(9), &Value::Null, &Value::Null])
        );
    }

    #[test]
    fn test_empty_columns() {
        let table = Table::from_columns(columns(vec![("n", vec![]), ("m", vec![])]));
        assert!(table.is_empty());
        assert_eq!(table.columns().len(), 2);
        assert_eq!(table.column("n"), Some(vec![]));
    }

    #[test]
    fn test_unknown_column() {
        let table = Table::from_columns(columns(vec![("a", vec![Value::Int(1)])]));
        assert_eq!(table.column("z"), None);
        assert_eq!(table.cell(0, "z"), None);
        assert_eq!(table.cell(5, "a"), None);
    }

    #[test]
    fn test_to_csv() {
        let table = Table::from_columns(columns(vec![
            ("name", vec![Value::from("Alice"), Value::Null]),
            ("tags", vec![Value::from(vec!["x", "y"]), Value::Bool(true)]),
        ]));

        let csv = table.to_csv().unwrap();
        assert_eq!(csv, "name,tags\nAlice,\"[\"\"x\"\",\"\"y\"\"]\"\n,true\n");
    }

    #[test]
    fn test_to_csv_without_headers() {
        let table = Table::from_columns(columns(vec![("n", vec![Value::Int(1)])]));
        let config = TableConfig {
            include_headers: false,
            delimiter: b';',
            ..Default::default()
        };
        assert_eq!(table.to_csv_with_config(&config).unwrap(), "1\n");
    }

    #[test]
    fn test_to_json_rows() {
        let table = Table::from_columns(columns(vec![
            ("b", vec![Value::Int(1)]),
            ("a", vec![Value::from("x")]),
        ]));
        assert_eq!(table.to_json().unwrap(), r#"[{"b":1,"a":"x"}]"#);
    }

    #[test]
    fn test_display_contains_cells() {
        let table = Table::from_columns(columns(vec![
            ("name", vec![Value::from("Alice")]),
            ("age", vec![Value::Int(30)]),
        ]));
        let text = table.to_string();
        assert!(text.contains("name"));
        assert!(text.contains("Alice"));
        assert!(text.contains("30"));
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(cell_text(&Value::Null).unwrap(), "");
        assert_eq!(cell_text(&Value::Float(1.5)).unwrap(), "1.5");
        assert_eq!(cell_text(&Value::from("plain")).unwrap(), "plain");
    }
}
