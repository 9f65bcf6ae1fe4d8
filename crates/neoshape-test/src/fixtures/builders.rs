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

//! Builders for customized result fixtures.

use neoshape_core::{Node, Path, QueryResult, Record, Relationship, ResultSummary, Value};

/// Builder for [`QueryResult`] fixtures laid out as a grid.
///
/// # Examples
///
/// ```
/// use neoshape_test::fixtures::builders::ResultBuilder;
/// use neoshape_core::Value;
///
/// let result = ResultBuilder::new(["name", "age"])
///     .row([Value::from("Alice"), Value::Int(30)])
///     .row([Value::from("Bob"), Value::Int(25)])
///     .query("MATCH (p:Person) RETURN p.name AS name, p.age AS age")
///     .timings(4, 6)
///     .build();
///
/// assert_eq!(result.records.len(), 2);
/// assert_eq!(result.summary.result_available_after, Some(4));
/// ```
#[derive(Debug, Clone)]
pub struct ResultBuilder {
    keys: Vec<String>,
    records: Vec<Record>,
    summary: ResultSummary,
}

impl ResultBuilder {
    /// Start a result with the given declared columns.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
            records: Vec::new(),
            summary: ResultSummary::new("RETURN *"),
        }
    }

    /// Add a record whose values line up with the declared columns.
    ///
    /// Extra values are dropped; missing trailing values leave those columns
    /// out of the record entirely.
    pub fn row<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let record = self.keys.iter().cloned().zip(values).collect::<Record>();
        self.records.push(record);
        self
    }

    /// Add a record as-is.
    pub fn record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    /// Set the query text.
    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.summary.query = query.into();
        self
    }

    /// Set the database name.
    pub fn database(mut self, database: impl Into<String>) -> Self {
        self.summary.database = Some(database.into());
        self
    }

    /// Set the timing offsets in milliseconds.
    pub fn timings(mut self, available_after: u64, consumed_after: u64) -> Self {
        self.summary.result_available_after = Some(available_after);
        self.summary.result_consumed_after = Some(consumed_after);
        self
    }

    /// Build the result.
    pub fn build(self) -> QueryResult {
        QueryResult {
            keys: self.keys,
            records: self.records,
            summary: self.summary,
        }
    }
}

/// Builder for a linear path `n0 -> n1 -> ... -> nk`.
///
/// # Examples
///
/// ```
/// use neoshape_test::fixtures::builders::PathBuilder;
///
/// let path = PathBuilder::new("Station").hops(3).rel_type("LINK").build();
/// assert_eq!(path.nodes.len(), 4);
/// assert_eq!(path.relationships.len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct PathBuilder {
    label: String,
    rel_type: String,
    hops: usize,
    reversed: Vec<usize>,
}

impl PathBuilder {
    /// Start a zero-length path over nodes labelled `label`.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            rel_type: "NEXT".to_string(),
            hops: 0,
            reversed: Vec::new(),
        }
    }

    /// Number of relationships to traverse.
    pub fn hops(mut self, hops: usize) -> Self {
        self.hops = hops;
        self
    }

    /// Relationship type used for every hop.
    pub fn rel_type(mut self, rel_type: impl Into<String>) -> Self {
        self.rel_type = rel_type.into();
        self
    }

    /// Traverse hop `index` against the relationship's declared direction.
    pub fn reversed(mut self, index: usize) -> Self {
        self.reversed.push(index);
        self
    }

    /// Build the path.
    ///
    /// Node `i` has element ID `4:path:{i}` and an `index` property; hop `i`
    /// has element ID `5:path:{i}`.
    pub fn build(self) -> Path {
        let node = |i: usize| {
            Node::new(format!("4:path:{}", i))
                .with_label(self.label.clone())
                .with_property("index", i as i64)
        };

        let mut path = Path::new(node(0));
        for i in 0..self.hops {
            let (from, to) = if self.reversed.contains(&i) {
                (node(i + 1), node(i))
            } else {
                (node(i), node(i + 1))
            };
            let rel = Relationship::new(format!("5:path:{}", i), self.rel_type.clone(), from, to);
            path = path.then(rel, node(i + 1));
        }
        path
    }
}
