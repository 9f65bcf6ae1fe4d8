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

//! Canonical graph entities and query results.
//!
//! The entities form a small movie graph:
//!
//! ```text
//! (keanu:Person:Actor)-[:ACTED_IN {roles}]->(matrix:Movie)
//! (lana:Person:Director)-[:DIRECTED]->(matrix:Movie)
//! ```

pub mod builders;

use neoshape_core::{Node, Path, QueryResult, Record, Relationship, Value};

use crate::FixtureList;
use builders::ResultBuilder;

/// `(:Person:Actor {name: "Keanu Reeves", born: 1964})`
pub fn keanu() -> Node {
    Node::new("4:movies:0")
        .with_labels(["Person", "Actor"])
        .with_property("name", "Keanu Reeves")
        .with_property("born", 1964i64)
}

/// `(:Person:Director {name: "Lana Wachowski", born: 1965})`
pub fn lana() -> Node {
    Node::new("4:movies:1")
        .with_labels(["Person", "Director"])
        .with_property("name", "Lana Wachowski")
        .with_property("born", 1965i64)
}

/// `(:Movie {title: "The Matrix", released: 1999, rating: 8.7})`
pub fn matrix() -> Node {
    Node::new("4:movies:2")
        .with_label("Movie")
        .with_property("title", "The Matrix")
        .with_property("released", 1999i64)
        .with_property("rating", 8.7)
}

/// Keanu `ACTED_IN` The Matrix, with a `roles` list property.
pub fn acted_in() -> Relationship {
    Relationship::new("5:movies:0", "ACTED_IN", keanu(), matrix())
        .with_property("roles", vec!["Neo"])
}

/// Lana `DIRECTED` The Matrix.
pub fn directed() -> Relationship {
    Relationship::new("5:movies:1", "DIRECTED", lana(), matrix())
}

/// Keanu → The Matrix ← Lana, traversing `DIRECTED` backwards.
pub fn co_worker_path() -> Path {
    Path::new(keanu())
        .then(acted_in(), matrix())
        .then(directed(), lana())
}

/// `MATCH (p:Person) RETURN p`
pub fn people_result() -> QueryResult {
    ResultBuilder::new(["p"])
        .row([keanu()])
        .row([lana()])
        .query("MATCH (p:Person) RETURN p")
        .database("movies")
        .timings(3, 9)
        .build()
}

/// `MATCH (a)-[r]->(m:Movie) RETURN a, r, m`
pub fn relationship_result() -> QueryResult {
    ResultBuilder::new(["a", "r", "m"])
        .row([
            Value::Node(keanu()),
            Value::Relationship(acted_in()),
            Value::Node(matrix()),
        ])
        .row([
            Value::Node(lana()),
            Value::Relationship(directed()),
            Value::Node(matrix()),
        ])
        .query("MATCH (a)-[r]->(m:Movie) RETURN a, r, m")
        .database("movies")
        .timings(5, 12)
        .build()
}

/// `MATCH p = (:Actor)-[*]-(:Director) RETURN p, length(p) AS hops`
pub fn path_result() -> QueryResult {
    ResultBuilder::new(["p", "hops"])
        .row([Value::Path(co_worker_path()), Value::Int(2)])
        .query("MATCH p = (:Actor)-[*]-(:Director) RETURN p, length(p) AS hops")
        .database("movies")
        .timings(7, 1)
        .build()
}

/// `MATCH (p:Person) RETURN collect(p.name) AS names, count(p) AS total`
pub fn collected_names_result() -> QueryResult {
    ResultBuilder::new(["names", "total"])
        .row([
            Value::from(vec!["Keanu Reeves", "Lana Wachowski"]),
            Value::Int(2),
        ])
        .query("MATCH (p:Person) RETURN collect(p.name) AS names, count(p) AS total")
        .timings(2, 2)
        .build()
}

/// `MATCH (p:Person) RETURN collect(p) AS people`
pub fn collected_nodes_result() -> QueryResult {
    ResultBuilder::new(["people"])
        .row([Value::from(vec![keanu(), lana()])])
        .query("MATCH (p:Person) RETURN collect(p) AS people")
        .timings(2, 3)
        .build()
}

/// A query that matched nothing.
pub fn empty_result() -> QueryResult {
    ResultBuilder::new(["n", "m"])
        .query("MATCH (n:Unicorn)-->(m) RETURN n, m")
        .database("movies")
        .timings(1, 0)
        .build()
}

/// Scalars, maps, nulls and entities side by side.
pub fn mixed_result() -> QueryResult {
    let mut extra = Record::new();
    extra.push("title", "The Matrix");
    extra.push("meta", Value::from(serde_json::json!({"source": "imdb", "votes": 2000000})));
    extra.push("poster", Value::Bytes(vec![0x89, 0x50, 0x4e, 0x47]));
    extra.push("movie", matrix());

    ResultBuilder::new(["title", "meta", "poster", "movie"])
        .record(extra)
        .row([
            Value::from("Speed"),
            Value::Null,
            Value::Null,
            Value::Null,
        ])
        .query("MATCH (m:Movie) RETURN m.title AS title, m.meta AS meta, m.poster AS poster, m AS movie")
        .timings(4, 4)
        .build()
}

/// Every canned result, by name.
pub fn all() -> FixtureList {
    vec![
        ("people", people_result),
        ("relationships", relationship_result),
        ("path", path_result),
        ("collected_names", collected_names_result),
        ("collected_nodes", collected_nodes_result),
        ("empty", empty_result),
        ("mixed", mixed_result),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_co_worker_path_shape() {
        let path = co_worker_path();
        assert_eq!(path.nodes.len(), 3);
        assert_eq!(path.relationships.len(), 2);
        // second hop runs against DIRECTED's declared direction
        assert_eq!(path.relationships[1].start.element_id, lana().element_id);
        assert_eq!(path.nodes[2].element_id, lana().element_id);
    }

    #[test]
    fn test_all_fixtures_build() {
        for (name, fixture) in all() {
            let result = fixture();
            assert!(!result.keys.is_empty(), "{} has no keys", name);
        }
    }

    #[test]
    fn test_empty_result_has_keys_only() {
        let result = empty_result();
        assert!(result.records.is_empty());
        assert_eq!(result.keys, vec!["n".to_string(), "m".to_string()]);
    }
}
