// Neoform - Graph Result Normalization
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

//! Batch extraction of relationship and node lists.
//!
//! A list-valued result field (e.g. the relationships of a variable-length
//! match) is projected element by element. Absent, null or empty input gives
//! an empty batch. Elements of the wrong shape are skipped with a warning.

use tracing::warn;

use crate::classify::{classify, Shape};
use crate::project::{project_node, project_relationship, ExtractedNode, ExtractedRelationship};
use crate::record::ResultRecord;
use crate::value::{Members, Value};

fn extract_shaped<T>(value: Option<&Value>, shape: Shape, project: fn(&Value) -> T) -> Vec<T> {
    let value = match value {
        Some(value) if !value.is_null() => value,
        _ => return Vec::new(),
    };

    let items = match value.members() {
        Members::Ordered(items) => items,
        _ => {
            warn!(kind = %value.kind(), expected = ?shape, "expected a list, extracting nothing");
            return Vec::new();
        }
    };

    items
        .iter()
        .enumerate()
        .filter_map(|(index, item)| match classify(item) {
            found if found == shape => Some(project(item)),
            found => {
                warn!(index, ?found, expected = ?shape, "skipping list element");
                None
            }
        })
        .collect()
}

/// Extract every relationship of a list value, preserving order.
///
/// # Examples
///
/// ```
/// use neoform_core::{extract_all, Relationship, Value};
///
/// let list = Value::from(vec![
///     Value::from(Relationship::new(1, 10, "R", 11).with_property("uuid", "r1")),
///     Value::from("not a relationship"),
///     Value::from(Relationship::new(2, 11, "R", 12).with_property("uuid", "r2")),
/// ]);
/// let rels = extract_all(Some(&list));
/// assert_eq!(rels.len(), 2);
/// assert_eq!(rels[0].uuid, "r1");
/// assert_eq!(rels[1].uuid, "r2");
///
/// assert!(extract_all(None).is_empty());
/// ```
pub fn extract_all(value: Option<&Value>) -> Vec<ExtractedRelationship> {
    extract_shaped(value, Shape::Relationship, project_relationship)
}

/// Extract every node of a list value, preserving order.
pub fn extract_nodes(value: Option<&Value>) -> Vec<ExtractedNode> {
    extract_shaped(value, Shape::Node, project_node)
}

/// Extract the relationships held in one column of a result record.
pub fn extract_field<R>(record: &R, key: &str) -> Vec<ExtractedRelationship>
where
    R: ResultRecord + ?Sized,
{
    extract_all(record.get(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use crate::value::{Node, Relationship};

    fn rel(uuid: &str) -> Value {
        Value::from(Relationship::new(0, 1, "R", 2).with_property("uuid", uuid))
    }

    #[test]
    fn test_extract_all_skips_mismatches_in_order() {
        let list = Value::from(vec![rel("r1"), Value::from(Node::new(9)), rel("r3")]);
        let uuids: Vec<String> = extract_all(Some(&list)).into_iter().map(|r| r.uuid).collect();
        assert_eq!(uuids, vec!["r1", "r3"]);
    }

    #[test]
    fn test_extract_all_empty_inputs() {
        assert!(extract_all(None).is_empty());
        assert!(extract_all(Some(&Value::Null)).is_empty());
        assert!(extract_all(Some(&Value::List(vec![]))).is_empty());
    }

    #[test]
    fn test_extract_all_non_list_is_empty() {
        assert!(extract_all(Some(&rel("r1"))).is_empty());
        assert!(extract_all(Some(&Value::from(5))).is_empty());
    }

    #[test]
    fn test_extract_nodes() {
        let list = Value::from(vec![
            Value::from(Node::new(1).with_property("uuid", "n1")),
            rel("r1"),
            Value::from(Node::new(2).with_property("uuid", "n2")),
        ]);
        let nodes = extract_nodes(Some(&list));
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[1].uuid, "n2");
    }

    #[test]
    fn test_extract_field() {
        let record = Record::from_pairs(vec![("rels", Value::from(vec![rel("a"), rel("b")]))]).unwrap();
        assert_eq!(extract_field(&record, "rels").len(), 2);
        assert!(extract_field(&record, "missing").is_empty());
    }
}
