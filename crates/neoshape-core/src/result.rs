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

//! Eagerly materialized query results.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::value::Value;

/// One row of a query result: ordered `(column, value)` pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    entries: Vec<(String, Value)>,
}

impl Record {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column value.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.push(key, value);
        self
    }

    /// Append a column value in place.
    pub fn push(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Column names in record order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Values in record order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// `(column, value)` pairs in record order.
    pub fn items(&self) -> &[(String, Value)] {
        &self.entries
    }

    /// Value of the first column named `key`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the record has no columns.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The driver's own row materialization.
    ///
    /// Graph entities are reduced to plain data: a node becomes its property
    /// map, a relationship becomes `[start properties, type, end properties]`
    /// and a path becomes the alternating list of node property maps and
    /// relationship types. Element IDs and labels are dropped.
    pub fn data(&self) -> IndexMap<String, Value> {
        self.entries
            .iter()
            .map(|(k, v)| (k.clone(), materialize(v)))
            .collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

fn materialize(value: &Value) -> Value {
    match value {
        Value::Node(node) => materialize_properties(&node.properties),
        Value::Relationship(rel) => Value::List(vec![
            materialize_properties(&rel.start.properties),
            Value::String(rel.rel_type.clone()),
            materialize_properties(&rel.end.properties),
        ]),
        Value::Path(path) => {
            let mut out = Vec::with_capacity(path.nodes.len() + path.relationships.len());
            let mut nodes = path.nodes.iter();
            if let Some(first) = nodes.next() {
                out.push(materialize_properties(&first.properties));
            }
            for (rel, node) in path.relationships.iter().zip(nodes) {
                out.push(Value::String(rel.rel_type.clone()));
                out.push(materialize_properties(&node.properties));
            }
            Value::List(out)
        }
        Value::List(items) => Value::List(items.iter().map(materialize).collect()),
        Value::Map(map) => materialize_properties(map),
        other => other.clone(),
    }
}

fn materialize_properties(properties: &BTreeMap<String, Value>) -> Value {
    Value::Map(
        properties
            .iter()
            .map(|(k, v)| (k.clone(), materialize(v)))
            .collect(),
    )
}

/// Metadata the server reports alongside a result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSummary {
    /// Database the query ran against.
    pub database: Option<String>,
    /// Query text as sent.
    pub query: String,
    /// Milliseconds until the first record was available.
    pub result_available_after: Option<u64>,
    /// Milliseconds from availability until the result was fully consumed.
    pub result_consumed_after: Option<u64>,
}

impl ResultSummary {
    /// Create a summary for `query`.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    /// Set the database name.
    pub fn with_database(mut self, database: impl Into<String>) -> Self {
        self.database = Some(database.into());
        self
    }

    /// Set both timing offsets in milliseconds.
    pub fn with_timings(mut self, available_after: u64, consumed_after: u64) -> Self {
        self.result_available_after = Some(available_after);
        self.result_consumed_after = Some(consumed_after);
        self
    }
}

/// A fully fetched query result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    /// Column names declared by the query.
    pub keys: Vec<String>,
    /// Records in server order.
    pub records: Vec<Record>,
    /// Result metadata.
    pub summary: ResultSummary,
}

impl QueryResult {
    /// Create an empty result with the given declared columns.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            records: Vec::new(),
            summary: ResultSummary::default(),
        }
    }

    /// Append a record.
    pub fn with_record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    /// Append several records.
    pub fn with_records(mut self, records: impl IntoIterator<Item = Record>) -> Self {
        self.records.extend(records);
        self
    }

    /// Replace the summary.
    pub fn with_summary(mut self, summary: ResultSummary) -> Self {
        self.summary = summary;
        self
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no records were returned.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
