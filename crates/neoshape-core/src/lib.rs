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

//! Data model for graph query results.
//!
//! This crate models the object graph a graph-database driver hands back once a
//! query has been executed and every record pulled off the wire:
//!
//! - [`Node`], [`Relationship`] and [`Path`] graph entities
//! - [`Value`], the closed set of shapes a record value can take
//! - [`Record`], [`ResultSummary`] and [`QueryResult`]
//!
//! Nothing here talks to a database. Driver adapters build these types once
//! when results arrive; the `neoshape` crate then reshapes them.
//!
//! # Example
//!
//! ```rust
//! use neoshape_core::{Node, QueryResult, Record, ResultSummary};
//!
//! let alice = Node::new("4:db:1")
//!     .with_label("Person")
//!     .with_property("name", "Alice");
//!
//! let result = QueryResult::new(["n"])
//!     .with_record(Record::new().with("n", alice))
//!     .with_summary(ResultSummary::new("MATCH (n:Person) RETURN n").with_timings(2, 5));
//!
//! assert_eq!(result.len(), 1);
//! ```

#![deny(missing_docs)]

mod graph;
mod result;
mod value;

pub use graph::{Node, Path, Relationship};
pub use result::{QueryResult, Record, ResultSummary};
pub use value::Value;
