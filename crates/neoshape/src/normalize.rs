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

//! Whole-result normalization into columns or a table.

use indexmap::IndexMap;
use neoshape_core::{QueryResult, Value};
use serde::Serialize;
use tracing::debug;

use crate::config::{NormalizeConfig, OutputShape};
use crate::convert::convert_value;
use crate::report::{ReportEvent, Reporter, TracingReporter};
use crate::table::Table;

/// Column name mapped to one converted value per record that carried it.
///
/// Columns keep the order in which they were first seen: declared keys
/// first, then any extra names met while scanning records.
pub type ColumnMap = IndexMap<String, Vec<Value>>;

/// Output of [`normalize_result`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Normalized {
    /// Column map.
    Columns(ColumnMap),
    /// Row-aligned table.
    Table(Table),
}

impl Normalized {
    /// The column map, if that shape was requested.
    pub fn as_columns(&self) -> Option<&ColumnMap> {
        match self {
            Normalized::Columns(columns) => Some(columns),
            Normalized::Table(_) => None,
        }
    }

    /// The table, if that shape was requested.
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Normalized::Table(table) => Some(table),
            Normalized::Columns(_) => None,
        }
    }

    /// Take the column map, if that shape was requested.
    pub fn into_columns(self) -> Option<ColumnMap> {
        match self {
            Normalized::Columns(columns) => Some(columns),
            Normalized::Table(_) => None,
        }
    }

    /// Take the table, if that shape was requested.
    pub fn into_table(self) -> Option<Table> {
        match self {
            Normalized::Table(table) => Some(table),
            Normalized::Columns(_) => None,
        }
    }
}

/// Normalize a result, reporting through `tracing`.
///
/// # Examples
///
/// ```
/// use neoshape::{normalize_result, NormalizeConfig};
/// use neoshape_core::{Node, QueryResult, Record};
///
/// let result = QueryResult::new(["n"])
///     .with_record(Record::new().with("n", Node::new("4:db:1").with_label("Person")));
///
/// let normalized = normalize_result(&result, &NormalizeConfig::new().with_columns());
/// let columns = normalized.as_columns().unwrap();
/// assert_eq!(columns["n"].len(), 1);
/// ```
pub fn normalize_result(result: &QueryResult, config: &NormalizeConfig) -> Normalized {
    normalize_result_with(result, config, &TracingReporter)
}

/// Normalize a result, sending diagnostics to `reporter`.
///
/// Every top-level node, relationship and path is converted to its map form;
/// other values are kept as they are (see
/// [`NormalizeConfig::expand_nested`]). A column that ends up holding exactly
/// one list is replaced by that list's items.
pub fn normalize_result_with<R: Reporter + ?Sized>(
    result: &QueryResult,
    config: &NormalizeConfig,
    reporter: &R,
) -> Normalized {
    reporter.report(&ReportEvent::timing(result.len(), &result.summary));
    if config.verbose {
        reporter.report(&ReportEvent::query(&result.summary));
    }

    let mut columns = collect_columns(result, config.expand_nested);

    if config.unwrap_single_lists {
        unwrap_single_lists(&mut columns);
    }

    debug!(
        records = result.len(),
        columns = columns.len(),
        "normalized query result"
    );

    match config.output {
        OutputShape::Columns => Normalized::Columns(columns),
        OutputShape::Table => Normalized::Table(Table::from_columns(columns)),
    }
}

fn collect_columns(result: &QueryResult, expand_nested: bool) -> ColumnMap {
    let mut columns: ColumnMap = result
        .keys
        .iter()
        .map(|key| (key.clone(), Vec::with_capacity(result.len())))
        .collect();

    for record in &result.records {
        for (key, value) in record.items() {
            columns
                .entry(key.clone())
                .or_default()
                .push(convert_value(value, expand_nested));
        }
    }

    columns
}

fn unwrap_single_lists(columns: &mut ColumnMap) {
    for cells in columns.values_mut() {
        if let [Value::List(items)] = cells.as_mut_slice() {
            let items = std::mem::take(items);
            *cells = items;
        }
    }
}
