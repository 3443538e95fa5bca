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

//! Projection of relationship records.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::{reserved_text, CREATE_TIME, UPDATE_TIME, UUID};
use crate::classify::{classify, Shape};
use crate::value::Value;

/// Engine key of the relationship name.
pub const NAME: &str = "name";
/// Engine key of the source node identifier.
pub const SOURCE_NODE: &str = "sourceNode";
/// Engine key of the target node identifier.
pub const TARGET_NODE: &str = "targetNode";

/// Reserved relationship keys: engine name → external field name.
///
/// Relationships have no free-form properties; keys outside this table are
/// dropped.
pub const RELATIONSHIP_RESERVED_KEYS: [(&str, &str); 6] = [
    (NAME, "name"),
    (CREATE_TIME, "createTime"),
    (UPDATE_TIME, "updateTime"),
    (UUID, "uuid"),
    (SOURCE_NODE, "sourceNode"),
    (TARGET_NODE, "targetNode"),
];

/// A relationship projected onto the fixed relationship schema.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ExtractedRelationship {
    /// Relationship name.
    pub name: String,
    /// Creation timestamp.
    #[serde(rename = "createTime")]
    pub create_time: String,
    /// Last update timestamp.
    #[serde(rename = "updateTime")]
    pub update_time: String,
    /// Stable identifier.
    pub uuid: String,
    /// Identifier of the source node.
    #[serde(rename = "sourceNode")]
    pub source_node: String,
    /// Identifier of the target node.
    #[serde(rename = "targetNode")]
    pub target_node: String,
}

/// Project a relationship record onto [`ExtractedRelationship`].
///
/// Any value not classified as a relationship yields
/// `ExtractedRelationship::default()`.
pub fn project_relationship(value: &Value) -> ExtractedRelationship {
    let properties = match (classify(value), value.properties()) {
        (Shape::Relationship, Some(properties)) => properties,
        (shape, _) => {
            debug!(?shape, kind = %value.kind(), "not a relationship, projecting empty record");
            return ExtractedRelationship::default();
        }
    };

    ExtractedRelationship {
        name: reserved_text(properties, NAME),
        create_time: reserved_text(properties, CREATE_TIME),
        update_time: reserved_text(properties, UPDATE_TIME),
        uuid: reserved_text(properties, UUID),
        source_node: reserved_text(properties, SOURCE_NODE),
        target_node: reserved_text(properties, TARGET_NODE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Node, Relationship};
    use serde_json::json;

    fn link() -> Value {
        Value::from(
            Relationship::new(10, 1, "RELATED", 2)
                .with_property("name", "derives")
                .with_property("create_time", "t1")
                .with_property("update_time", "t2")
                .with_property("uuid", "r1")
                .with_property("sourceNode", "u1")
                .with_property("targetNode", "u2")
                .with_property("weight", 3),
        )
    }

    #[test]
    fn test_project_relationship() {
        let rel = project_relationship(&link());
        assert_eq!(
            rel,
            ExtractedRelationship {
                name: "derives".to_string(),
                create_time: "t1".to_string(),
                update_time: "t2".to_string(),
                uuid: "r1".to_string(),
                source_node: "u1".to_string(),
                target_node: "u2".to_string(),
            }
        );
    }

    #[test]
    fn test_extracted_relationship_is_flat() {
        let json = serde_json::to_value(project_relationship(&link())).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), RELATIONSHIP_RESERVED_KEYS.len());
        assert!(object.get("weight").is_none());
        assert!(object.get("properties").is_none());
        for (_, external) in RELATIONSHIP_RESERVED_KEYS {
            assert!(object.contains_key(external));
        }
        assert_eq!(json["sourceNode"], json!("u1"));
    }

    #[test]
    fn test_project_relationship_mismatch_defaults() {
        assert_eq!(
            project_relationship(&Value::from(Node::new(1).with_property("name", "n"))),
            ExtractedRelationship::default()
        );
        assert_eq!(project_relationship(&Value::Null), ExtractedRelationship::default());
    }

    #[test]
    fn test_project_relationship_is_deterministic() {
        assert_eq!(project_relationship(&link()), project_relationship(&link()));
    }
}
