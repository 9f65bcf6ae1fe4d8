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

//! Shared test fixtures for the neoshape crates.
//!
//! # Quick Start
//!
//! ```rust
//! use neoshape_test::fixtures;
//!
//! // Pre-built results
//! let result = fixtures::people_result();
//! let result = fixtures::path_result();
//! let result = fixtures::empty_result();
//!
//! // Custom results
//! use neoshape_test::fixtures::builders::ResultBuilder;
//! use neoshape_core::Value;
//!
//! let result = ResultBuilder::new(["x"]).row([Value::Int(1)]).build();
//!
//! // Counting
//! let counts = neoshape_test::count_entities(&fixtures::relationship_result());
//! assert_eq!(counts.relationships, 2);
//! ```

use neoshape_core::{QueryResult, Value};

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> QueryResult)>;

/// Canonical graph entities and query results.
pub mod fixtures;

pub use fixtures::*;

/// Number of top-level graph entities in a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EntityCounts {
    /// Node values.
    pub nodes: usize,
    /// Relationship values.
    pub relationships: usize,
    /// Path values.
    pub paths: usize,
    /// Everything else.
    pub other: usize,
}

/// Count top-level graph entities across all records.
pub fn count_entities(result: &QueryResult) -> EntityCounts {
    let mut counts = EntityCounts::default();
    for value in result.records.iter().flat_map(|r| r.values()) {
        match value {
            Value::Node(_) => counts.nodes += 1,
            Value::Relationship(_) => counts.relationships += 1,
            Value::Path(_) => counts.paths += 1,
            _ => counts.other += 1,
        }
    }
    counts
}
