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

//! Fixtures for node and relationship records, result records and dumps.

use neoform_core::{Node, QueryResult, Record, Relationship, Temporal, Value};

/// Node carrying the three reserved keys plus a `title` property.
pub fn term_node() -> Value {
    Value::Node(
        Node::new(1)
            .with_label("Term")
            .with_property("uuid", "u1")
            .with_property("create_time", "t1")
            .with_property("update_time", "t2")
            .with_property("title", "Alpha"),
    )
}

/// Node whose free-form properties are not strings.
pub fn typed_property_node() -> Value {
    Value::Node(
        Node::new(2)
            .with_label("Definition")
            .with_property("uuid", "u2")
            .with_property("create_time", Temporal::date_time("2024-05-01T10:00:00Z"))
            .with_property("update_time", "2024-05-02 09:00:00")
            .with_property("rank", 7)
            .with_property("active", true)
            .with_property("score", 0.5)
            .with_property("aliases", vec!["a", "b"]),
    )
}

/// Graph node with title and description.
pub fn graph_node() -> Value {
    Value::Node(
        Node::new(3)
            .with_label("Graph")
            .with_property("uuid", "g1")
            .with_property("title", "Categories")
            .with_property("description", "Aristotle's ten categories")
            .with_property("create_time", "2024-01-01 00:00:00")
            .with_property("update_time", "2024-01-01 00:00:00"),
    )
}

/// Relationship between two nodes with every reserved key set.
pub fn relationship(uuid: &str, source: &str, target: &str) -> Value {
    Value::Relationship(
        Relationship::new(100, 1, "RELATE", 2)
            .with_property("name", format!("{}->{}", source, target))
            .with_property("create_time", "t1")
            .with_property("update_time", "t2")
            .with_property("uuid", uuid)
            .with_property("sourceNode", source)
            .with_property("targetNode", target),
    )
}

/// Relationship `r1` from `u1` to `u2`, with one extra non-reserved key.
pub fn link_relationship() -> Value {
    match relationship("r1", "u1", "u2") {
        Value::Relationship(rel) => Value::Relationship(rel.with_property("weight", 3)),
        other => other,
    }
}

/// Three relationships `r1`, `r2`, `r3` in path order.
pub fn relationship_batch() -> Value {
    Value::List(vec![
        relationship("r1", "u1", "u2"),
        relationship("r2", "u2", "u3"),
        relationship("r3", "u3", "u4"),
    ])
}

/// Three elements where the second is a node, not a relationship.
pub fn relationship_batch_with_gap() -> Value {
    Value::List(vec![
        relationship("r1", "u1", "u2"),
        term_node(),
        relationship("r3", "u3", "u4"),
    ])
}

/// Term/definition rows as returned by a vocabulary query.
pub fn vocabulary_result() -> QueryResult {
    let rows = [
        ("λόγος", "word, reason"),
        ("ἦθος", "character"),
        ("πάθος", "emotion"),
    ];
    QueryResult::new(
        rows.iter()
            .map(|(term, definition)| {
                Record::from_pairs(vec![("term", *term), ("definition", *definition)])
                    .expect("fixture keys are unique")
            })
            .collect(),
    )
}

/// [`vocabulary_result`] encoded as a result dump.
pub fn vocabulary_dump_json() -> String {
    vocabulary_result()
        .to_json()
        .expect("fixture serializes")
}

/// One row holding a node and its outgoing relationships.
pub fn graph_result() -> QueryResult {
    let record = Record::from_pairs(vec![
        ("n", term_node()),
        ("rels", relationship_batch_with_gap()),
        ("g", graph_node()),
    ])
    .expect("fixture keys are unique");
    QueryResult::new(vec![record])
}

/// [`graph_result`] encoded as a result dump.
pub fn graph_dump_json() -> String {
    graph_result().to_json().expect("fixture serializes")
}
