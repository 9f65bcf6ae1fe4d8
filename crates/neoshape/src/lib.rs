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

//! Reshape graph query results into plain maps, lists and tables.
//!
//! This crate provides functionality to:
//! - Convert nodes, relationships and paths into plain maps
//! - Normalize a whole result into per-column sequences or a table
//! - Flatten a result through the driver's own row materialization
//! - Render tables as CSV, JSON or a text grid
//!
//! # Mapping Strategy
//!
//! | Graph value | Converted form |
//! |-------------|----------------|
//! | Node | `{elementId, labels, properties}` |
//! | Relationship | `{startNode, endNode, elementId, type, properties}` |
//! | Path | `{startNodeElementId, endNodeElementId, nodes, relationships}` |
//! | Anything else | Unchanged |
//!
//! Element IDs are scoped to the query execution that produced them and must
//! not be stored or compared across executions.
//!
//! # Example: Normalize a Result
//!
//! ```rust
//! use neoshape::{normalize_result_with, MemoryReporter, NormalizeConfig};
//! use neoshape_core::{Node, QueryResult, Record, Relationship, ResultSummary};
//!
//! let alice = Node::new("4:db:1").with_label("Person").with_property("name", "Alice");
//! let bob = Node::new("4:db:2").with_label("Person").with_property("name", "Bob");
//! let knows = Relationship::new("5:db:1", "KNOWS", alice.clone(), bob);
//!
//! let result = QueryResult::new(["a", "r"])
//!     .with_record(Record::new().with("a", alice).with("r", knows))
//!     .with_summary(ResultSummary::new("MATCH (a)-[r:KNOWS]->() RETURN a, r").with_timings(1, 2));
//!
//! let reporter = MemoryReporter::new();
//! let table = normalize_result_with(&result, &NormalizeConfig::new(), &reporter)
//!     .into_table()
//!     .unwrap();
//!
//! assert_eq!(table.row_count(), 1);
//! assert_eq!(reporter.events().len(), 1);
//! println!("{}", table);
//! ```
//!
//! # Example: Convert a Single Entity
//!
//! ```rust
//! use neoshape::{convert_node, ShapeError};
//! use neoshape_core::{Node, Value};
//!
//! let map = convert_node(&Value::Node(Node::new("4:db:7"))).unwrap();
//! assert_eq!(map.get("elementId"), Some(&Value::from("4:db:7")));
//!
//! let err = convert_node(&Value::from("not a node")).unwrap_err();
//! assert!(matches!(err, ShapeError::TypeMismatch { expected: "Node", actual: "String" }));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod config;
pub mod convert;
pub mod error;
pub mod flatten;
pub mod normalize;
pub mod report;
pub mod table;

// Re-export main types at crate root for convenience
pub use config::{NormalizeConfig, NormalizeConfigBuilder, OutputShape, TableConfig};
pub use convert::{
    convert_node, convert_path, convert_relationship, convert_value, node_to_map, path_to_map,
    relationship_to_map,
};
pub use error::{Result, ShapeError};
pub use flatten::flatten_result;
pub use normalize::{normalize_result, normalize_result_with, ColumnMap, Normalized};
pub use report::{MemoryReporter, ReportEvent, Reporter, TracingReporter};
pub use table::Table;
