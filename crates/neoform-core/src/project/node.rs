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

//! Projection of node records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

use super::{coerce_property, reserved_text, CREATE_TIME, UPDATE_TIME, UUID};
use crate::classify::{classify, Shape};
use crate::value::Value;

/// Reserved node keys: engine name → external field name.
///
/// Reserved keys are lifted into typed fields and never appear in
/// [`ExtractedNode::properties`].
pub const NODE_RESERVED_KEYS: [(&str, &str); 3] = [
    (UUID, "uuid"),
    (CREATE_TIME, "createTime"),
    (UPDATE_TIME, "updateTime"),
];

/// Engine key of a graph's title.
pub const TITLE: &str = "title";
/// Engine key of a graph's description.
pub const DESCRIPTION: &str = "description";

/// A node projected onto the fixed node schema.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtractedNode {
    /// Stable identifier.
    pub uuid: String,
    /// Creation timestamp.
    #[serde(rename = "createTime")]
    pub create_time: String,
    /// Last update timestamp.
    #[serde(rename = "updateTime")]
    pub update_time: String,
    /// Every non-reserved property, coerced to string.
    pub properties: BTreeMap<String, String>,
}

/// The summary of a graph node: identifier, timestamps, title and description.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtractedGraph {
    /// Stable identifier.
    pub uuid: String,
    /// Graph title, if set.
    pub title: Option<String>,
    /// Graph description, if set.
    pub description: Option<String>,
    /// Creation timestamp.
    #[serde(rename = "createTime")]
    pub create_time: String,
    /// Last update timestamp.
    #[serde(rename = "updateTime")]
    pub update_time: String,
}

fn is_reserved(key: &str) -> bool {
    NODE_RESERVED_KEYS.iter().any(|(engine, _)| *engine == key)
}

fn node_properties(value: &Value) -> Option<&BTreeMap<String, Value>> {
    match classify(value) {
        Shape::Node => value.properties(),
        shape => {
            debug!(?shape, kind = %value.kind(), "not a node, projecting empty record");
            None
        }
    }
}

/// Project a node record onto [`ExtractedNode`].
///
/// Any value not classified as a node yields `ExtractedNode::default()`.
///
/// # Examples
///
/// ```
/// use neoform_core::{project_node, Node, Value};
///
/// let node = Value::from(
///     Node::new(1)
///         .with_property("uuid", "u1")
///         .with_property("create_time", "t1")
///         .with_property("update_time", "t2")
///         .with_property("title", "Alpha"),
/// );
/// let extracted = project_node(&node);
/// assert_eq!(extracted.uuid, "u1");
/// assert_eq!(extracted.create_time, "t1");
/// assert_eq!(extracted.properties.len(), 1);
/// ```
pub fn project_node(value: &Value) -> ExtractedNode {
    let Some(properties) = node_properties(value) else {
        return ExtractedNode::default();
    };

    ExtractedNode {
        uuid: reserved_text(properties, UUID),
        create_time: reserved_text(properties, CREATE_TIME),
        update_time: reserved_text(properties, UPDATE_TIME),
        properties: properties
            .iter()
            .filter(|(key, _)| !is_reserved(key))
            .filter_map(|(key, value)| coerce_property(value).map(|text| (key.clone(), text)))
            .collect(),
    }
}

/// Project a graph node onto [`ExtractedGraph`].
///
/// Any value not classified as a node yields `ExtractedGraph::default()`.
pub fn project_graph(value: &Value) -> ExtractedGraph {
    let Some(properties) = node_properties(value) else {
        return ExtractedGraph::default();
    };

    ExtractedGraph {
        uuid: reserved_text(properties, UUID),
        title: properties.get(TITLE).and_then(coerce_property),
        description: properties.get(DESCRIPTION).and_then(coerce_property),
        create_time: reserved_text(properties, CREATE_TIME),
        update_time: reserved_text(properties, UPDATE_TIME),
    }
}
