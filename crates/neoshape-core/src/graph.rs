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

//! Graph entities: nodes, relationships and paths.
//!
//! Element IDs are only meaningful inside the query execution that produced
//! them. The same database entity may carry a different ID in the next query,
//! so they must never be persisted or compared across executions.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::value::Value;

/// A graph node.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    /// Execution-scoped element ID.
    pub element_id: String,
    /// The node's labels.
    pub labels: BTreeSet<String>,
    /// The node's properties.
    pub properties: BTreeMap<String, Value>,
}

impl Node {
    /// Create a node with no labels and no properties.
    pub fn new(element_id: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            labels: BTreeSet::new(),
            properties: BTreeMap::new(),
        }
    }

    /// Add a label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.insert(label.into());
        self
    }

    /// Add several labels.
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Add a property.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Get a property value.
    pub fn get_property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Check whether the node carries a label.
    pub fn has_label(&self, label: &str) -> bool {
        self.labels.contains(label)
    }
}

/// A directed graph relationship.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    /// Execution-scoped element ID.
    pub element_id: String,
    /// Relationship type name.
    #[serde(rename = "type")]
    pub rel_type: String,
    /// The relationship's properties.
    pub properties: BTreeMap<String, Value>,
    /// Origin endpoint.
    pub start: Node,
    /// Destination endpoint.
    pub end: Node,
}

impl Relationship {
    /// Create a relationship from `start` to `end`.
    pub fn new(
        element_id: impl Into<String>,
        rel_type: impl Into<String>,
        start: Node,
        end: Node,
    ) -> Self {
        Self {
            element_id: element_id.into(),
            rel_type: rel_type.into(),
            properties: BTreeMap::new(),
            start,
            end,
        }
    }

    /// Add a property.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Get a property value.
    pub fn get_property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Both endpoints in declared order.
    pub fn nodes(&self) -> (&Node, &Node) {
        (&self.start, &self.end)
    }
}

/// A walk through the graph: nodes interleaved with relationships.
///
/// A well-formed path holds `n` nodes and `n - 1` relationships. A zero-length
/// path is a single node with no relationships.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    /// Nodes in traversal order.
    pub nodes: Vec<Node>,
    /// Relationships in traversal order.
    pub relationships: Vec<Relationship>,
}

impl Path {
    /// Create a zero-length path starting (and ending) at `start`.
    pub fn new(start: Node) -> Self {
        Self {
            nodes: vec![start],
            relationships: Vec::new(),
        }
    }

    /// Extend the path by one hop.
    pub fn then(mut self, relationship: Relationship, node: Node) -> Self {
        self.relationships.push(relationship);
        self.nodes.push(node);
        self
    }

    /// First node of the path.
    pub fn start_node(&self) -> Option<&Node> {
        self.nodes.first()
    }

    /// Last node of the path.
    pub fn end_node(&self) -> Option<&Node> {
        self.nodes.last()
    }

    /// Number of relationships traversed.
    pub fn len(&self) -> usize {
        self.relationships.len()
    }

    /// True for a zero-length path.
    pub fn is_empty(&self) -> bool {
        self.relationships.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Node {
        Node::new("4:db:1")
            .with_label("Person")
            .with_property("name", "Alice")
    }

    fn bob() -> Node {
        Node::new("4:db:2")
            .with_label("Person")
            .with_property("name", "Bob")
    }

    #[test]
    fn test_node_builder() {
        let node = alice().with_labels(["Employee", "Person"]);
        assert_eq!(node.labels.len(), 2);
        assert!(node.has_label("Employee"));
        assert_eq!(
            node.get_property("name"),
            Some(&Value::String("Alice".to_string()))
        );
    }

    #[test]
    fn test_relationship_endpoints_keep_order() {
        let rel = Relationship::new("5:db:9", "KNOWS", alice(), bob()).with_property("since", 2020i64);
        let (start, end) = rel.nodes();
        assert_eq!(start.element_id, "4:db:1");
        assert_eq!(end.element_id, "4:db:2");
        assert_eq!(rel.get_property("since"), Some(&Value::Int(2020)));
    }

    #[test]
    fn test_zero_length_path() {
        let path = Path::new(alice());
        assert!(path.is_empty());
        assert_eq!(path.nodes.len(), 1);
        assert_eq!(path.start_node(), path.end_node());
    }

    #[test]
    fn test_path_then() {
        let rel = Relationship::new("5:db:9", "KNOWS", alice(), bob());
        let path = Path::new(alice()).then(rel, bob());
        assert_eq!(path.len(), 1);
        assert_eq!(path.start_node().unwrap().element_id, "4:db:1");
        assert_eq!(path.end_node().unwrap().element_id, "4:db:2");
    }

    #[test]
    fn test_relationship_serializes_type_key() {
        let rel = Relationship::new("5:db:9", "KNOWS", alice(), bob());
        let json = serde_json::to_value(&rel).unwrap();
        assert_eq!(json["type"], "KNOWS");
        assert_eq!(json["elementId"], "5:db:9");
        assert_eq!(json["start"]["elementId"], "4:db:1");
    }
}
