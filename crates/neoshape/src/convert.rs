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

//! Conversion of graph entities into plain maps.
//!
//! | Entity | Keys |
//! |--------|------|
//! | Node | `elementId`, `labels`, `properties` |
//! | Relationship | `startNode`, `endNode`, `elementId`, `type`, `properties` |
//! | Path | `startNodeElementId`, `endNodeElementId`, `nodes`, `relationships` |
//!
//! The `convert_*` functions accept any [`Value`] and fail with
//! [`ShapeError::TypeMismatch`] when it holds the wrong entity. The `*_to_map`
//! functions take the typed entity and cannot fail.

use neoshape_core::{Node, Path, Relationship, Value};
use std::collections::BTreeMap;

use crate::error::{Result, ShapeError};

/// Key holding an entity's element ID.
pub const ELEMENT_ID: &str = "elementId";
/// Key holding a node's labels.
pub const LABELS: &str = "labels";
/// Key holding an entity's properties.
pub const PROPERTIES: &str = "properties";
/// Key holding a relationship's origin node.
pub const START_NODE: &str = "startNode";
/// Key holding a relationship's destination node.
pub const END_NODE: &str = "endNode";
/// Key holding a relationship's type name.
pub const TYPE: &str = "type";
/// Key holding a path's first node ID.
pub const START_NODE_ELEMENT_ID: &str = "startNodeElementId";
/// Key holding a path's last node ID.
pub const END_NODE_ELEMENT_ID: &str = "endNodeElementId";
/// Key holding a path's converted nodes.
pub const NODES: &str = "nodes";
/// Key holding a path's converted relationships.
pub const RELATIONSHIPS: &str = "relationships";

/// Convert a node value into a map.
///
/// # Errors
///
/// Returns [`ShapeError::TypeMismatch`] if `value` is not a node.
///
/// # Examples
///
/// ```
/// use neoshape::convert_node;
/// use neoshape_core::{Node, Value};
///
/// let node = Value::Node(Node::new("4:db:1").with_label("Person"));
/// let map = convert_node(&node).unwrap();
/// assert_eq!(map.get("elementId"), Some(&Value::from("4:db:1")));
///
/// assert!(convert_node(&Value::Int(1)).is_err());
/// ```
pub fn convert_node(value: &Value) -> Result<Value> {
    match value {
        Value::Node(node) => Ok(node_to_map(node)),
        other => Err(mismatch("Node", other)),
    }
}

/// Convert a relationship value into a map.
///
/// # Errors
///
/// Returns [`ShapeError::TypeMismatch`] if `value` is not a relationship.
pub fn convert_relationship(value: &Value) -> Result<Value> {
    match value {
        Value::Relationship(rel) => Ok(relationship_to_map(rel)),
        other => Err(mismatch("Relationship", other)),
    }
}

/// Convert a path value into a map.
///
/// # Errors
///
/// Returns [`ShapeError::TypeMismatch`] if `value` is not a path.
pub fn convert_path(value: &Value) -> Result<Value> {
    match value {
        Value::Path(path) => Ok(path_to_map(path)),
        other => Err(mismatch("Path", other)),
    }
}

/// Map a node to `elementId`, `labels` and `properties`.
pub fn node_to_map(node: &Node) -> Value {
    Value::Map(node_fields(node))
}

/// Map a relationship, embedding both endpoints in declared order.
pub fn relationship_to_map(rel: &Relationship) -> Value {
    let mut map = BTreeMap::new();
    map.insert(START_NODE.to_string(), Value::Map(node_fields(&rel.start)));
    map.insert(
        ELEMENT_ID.to_string(),
        Value::String(rel.element_id.clone()),
    );
    map.insert(TYPE.to_string(), Value::String(rel.rel_type.clone()));
    map.insert(
        PROPERTIES.to_string(),
        Value::Map(rel.properties.clone()),
    );
    map.insert(END_NODE.to_string(), Value::Map(node_fields(&rel.end)));
    Value::Map(map)
}

/// Map a path to its endpoint IDs and converted members.
///
/// A path without nodes reports `Null` endpoint IDs.
pub fn path_to_map(path: &Path) -> Value {
    let element_id = |node: Option<&Node>| {
        node.map(|n| Value::String(n.element_id.clone()))
            .unwrap_or(Value::Null)
    };

    let mut map = BTreeMap::new();
    map.insert(
        START_NODE_ELEMENT_ID.to_string(),
        element_id(path.start_node()),
    );
    map.insert(
        NODES.to_string(),
        Value::List(path.nodes.iter().map(node_to_map).collect()),
    );
    map.insert(
        RELATIONSHIPS.to_string(),
        Value::List(path.relationships.iter().map(relationship_to_map).collect()),
    );
    map.insert(END_NODE_ELEMENT_ID.to_string(), element_id(path.end_node()));
    Value::Map(map)
}

/// Convert a single record value.
///
/// Graph entities become maps. Everything else is returned unchanged unless
/// `expand_nested` is set, in which case lists and maps are walked and any
/// graph entity inside them is converted too.
pub fn convert_value(value: &Value, expand_nested: bool) -> Value {
    match value {
        Value::Node(node) => node_to_map(node),
        Value::Relationship(rel) => relationship_to_map(rel),
        Value::Path(path) => path_to_map(path),
        Value::List(items) if expand_nested => Value::List(
            items
                .iter()
                .map(|item| convert_value(item, true))
                .collect(),
        ),
        Value::Map(map) if expand_nested => Value::Map(
            map.iter()
                .map(|(k, v)| (k.clone(), convert_value(v, true)))
                .collect(),
        ),
        other => other.clone(),
    }
}

fn node_fields(node: &Node) -> BTreeMap<String, Value> {
    let mut map = BTreeMap::new();
    map.insert(
        ELEMENT_ID.to_string(),
        Value::String(node.element_id.clone()),
    );
    map.insert(
        LABELS.to_string(),
        Value::List(node.labels.iter().cloned().map(Value::String).collect()),
    );
    map.insert(
        PROPERTIES.to_string(),
        Value::Map(node.properties.clone()),
    );
    map
}

fn mismatch(expected: &'static str, actual: &Value) -> ShapeError {
    ShapeError::TypeMismatch {
        expected,
        actual: actual.type_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Node {
        Node::new("4:db:1")
            .with_labels(["Person", "Employee"])
            .with_property("name", "Alice")
            .with_property("age", 30i64)
    }

    fn bob() -> Node {
        Node::new("4:db:2")
            .with_label("Person")
            .with_property("name", "Bob")
    }

    fn knows() -> Relationship {
        Relationship::new("5:db:7", "KNOWS", alice(), bob()).with_property("since", 2019i64)
    }

    #[test]
    fn test_convert_node() {
        let map = convert_node(&Value::Node(alice())).unwrap();

        assert_eq!(map.get(ELEMENT_ID), Some(&Value::from("4:db:1")));
        assert_eq!(
            map.get(LABELS),
            Some(&Value::List(vec![
                Value::from("Employee"),
                Value::from("Person")
            ]))
        );
        let props = map.get(PROPERTIES).and_then(Value::as_map).unwrap();
        assert_eq!(props.get("age"), Some(&Value::Int(30)));
        assert_eq!(map.as_map().unwrap().len(), 3);
    }

    #[test]
    fn test_convert_node_rejects_map() {
        let err = convert_node(&Value::Map(BTreeMap::new())).unwrap_err();
        assert!(matches!(
            err,
            ShapeError::TypeMismatch {
                expected: "Node",
                actual: "Map"
            }
        ));
    }

    #[test]
    fn test_convert_node_rejects_relationship() {
        let err = convert_node(&Value::Relationship(knows())).unwrap_err();
        assert!(err.to_string().contains("Relationship"));
    }

    #[test]
    fn test_convert_relationship() {
        let map = convert_relationship(&Value::Relationship(knows())).unwrap();

        assert_eq!(map.get(ELEMENT_ID), Some(&Value::from("5:db:7")));
        assert_eq!(map.get(TYPE), Some(&Value::from("KNOWS")));
        assert_eq!(
            map.get(START_NODE).and_then(|n| n.get(ELEMENT_ID)),
            Some(&Value::from("4:db:1"))
        );
        assert_eq!(
            map.get(END_NODE).and_then(|n| n.get(ELEMENT_ID)),
            Some(&Value::from("4:db:2"))
        );
        assert_eq!(
            map.get(PROPERTIES).and_then(|p| p.get("since")),
            Some(&Value::Int(2019))
        );
    }

    #[test]
    fn test_relationship_endpoints_match_node_conversion() {
        let map = relationship_to_map(&knows());
        assert_eq!(map.get(START_NODE), Some(&node_to_map(&alice())));
        assert_eq!(map.get(END_NODE), Some(&node_to_map(&bob())));
    }

    #[test]
    fn test_convert_relationship_rejects_path() {
        let err = convert_relationship(&Value::Path(Path::new(alice()))).unwrap_err();
        assert!(matches!(
            err,
            ShapeError::TypeMismatch {
                expected: "Relationship",
                actual: "Path"
            }
        ));
    }

    #[test]
    fn test_convert_path() {
        let path = Path::new(alice()).then(knows(), bob());
        let map = convert_path(&Value::Path(path)).unwrap();

        assert_eq!(map.get(START_NODE_ELEMENT_ID), Some(&Value::from("4:db:1")));
        assert_eq!(map.get(END_NODE_ELEMENT_ID), Some(&Value::from("4:db:2")));
        assert_eq!(map.get(NODES).and_then(Value::as_list).map(|l| l.len()), Some(2));
        assert_eq!(
            map.get(RELATIONSHIPS).and_then(Value::as_list).map(|l| l.len()),
            Some(1)
        );
    }

    #[test]
    fn test_convert_zero_length_path() {
        let map = path_to_map(&Path::new(bob()));
        assert_eq!(map.get(START_NODE_ELEMENT_ID), Some(&Value::from("4:db:2")));
        assert_eq!(map.get(END_NODE_ELEMENT_ID), Some(&Value::from("4:db:2")));
        assert_eq!(map.get(NODES).and_then(Value::as_list).map(|l| l.len()), Some(1));
        assert_eq!(
            map.get(RELATIONSHIPS).and_then(Value::as_list),
            Some(&[][..])
        );
    }

    #[test]
    fn test_path_without_nodes_has_null_endpoints() {
        let path = Path {
            nodes: vec![],
            relationships: vec![],
        };
        let map = path_to_map(&path);
        assert_eq!(map.get(START_NODE_ELEMENT_ID), Some(&Value::Null));
        assert_eq!(map.get(END_NODE_ELEMENT_ID), Some(&Value::Null));
    }

    #[test]
    fn test_convert_path_rejects_node() {
        assert!(convert_path(&Value::Node(alice())).is_err());
    }

    #[test]
    fn test_convert_value_passes_scalars_through() {
        assert_eq!(convert_value(&Value::Int(5), false), Value::Int(5));
        assert_eq!(convert_value(&Value::Null, true), Value::Null);
    }

    #[test]
    fn test_convert_value_leaves_nested_entities_by_default() {
        let list = Value::List(vec![Value::Node(alice())]);
        assert_eq!(convert_value(&list, false), list);
    }

    #[test]
    fn test_convert_value_expands_nested_entities() {
        let list = Value::List(vec![Value::Node(alice()), Value::Int(1)]);
        let converted = convert_value(&list, true);
        assert_eq!(
            converted,
            Value::List(vec![node_to_map(&alice()), Value::Int(1)])
        );
    }

    #[test]
    fn test_conversion_copies_properties() {
        let node = alice();
        let mut map = node_to_map(&node);
        if let Value::Map(m) = &mut map {
            m.insert(PROPERTIES.to_string(), Value::Null);
        }
        assert_eq!(node.get_property("name"), Some(&Value::from("Alice")));
    }
}
