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

//! Record-by-record flattening through the driver's own materialization.

use indexmap::IndexMap;
use neoshape_core::{QueryResult, Value};

/// One map per record, as produced by [`Record::data`](neoshape_core::Record::data).
///
/// Cheaper than [`normalize_result`](crate::normalize_result) but lossy:
/// element IDs and labels are gone and relationships collapse to
/// `[start properties, type, end properties]`.
pub fn flatten_result(result: &QueryResult) -> Vec<IndexMap<String, Value>> {
    result.records.iter().map(|record| record.data()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use neoshape_core::{Node, Record};

    #[test]
    fn test_one_map_per_record() {
        let result = QueryResult::new(["n", "score"])
            .with_record(
                Record::new()
                    .with("n", Node::new("4:db:1").with_property("name", "Alice"))
                    .with("score", 1.5),
            )
            .with_record(Record::new().with("n", Value::Null).with("score", 2.0));

        let rows = flatten_result(&result);

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].get("n").and_then(|n| n.get("name")),
            Some(&Value::from("Alice"))
        );
        assert_eq!(rows[1].get("n"), Some(&Value::Null));
        assert_eq!(
            rows[1].keys().map(String::as_str).collect::<Vec<_>>(),
            vec!["n", "score"]
        );
    }

    #[test]
    fn test_empty_result() {
        assert!(flatten_result(&QueryResult::new(["n"])).is_empty());
    }
}
