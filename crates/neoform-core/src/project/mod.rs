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

//! Fixed-schema projection of node and relationship records.
//!
//! Projection is permissive: a value of the wrong shape projects to an empty
//! record and a debug event, never an error. Query results legitimately carry
//! nulls for unmatched optional patterns.
//!
//! Engine keys are mapped onto external field names through explicit rename
//! tables ([`NODE_RESERVED_KEYS`], [`RELATIONSHIP_RESERVED_KEYS`]).

pub mod node;
pub mod relationship;

pub use node::{project_graph, project_node, ExtractedGraph, ExtractedNode, NODE_RESERVED_KEYS};
pub use relationship::{
    project_relationship, ExtractedRelationship, RELATIONSHIP_RESERVED_KEYS,
};

use std::collections::BTreeMap;
use tracing::warn;

use crate::expand::expand;
use crate::value::Value;

/// Engine key of the stable identifier.
pub const UUID: &str = "uuid";
/// Engine key of the creation timestamp.
pub const CREATE_TIME: &str = "create_time";
/// Engine key of the update timestamp.
pub const UPDATE_TIME: &str = "update_time";

/// Coerce a property value to its string form.
///
/// Strings pass through, integers are decimal, booleans `true`/`false`,
/// floats and temporals use [`Value::scalar_text`]. Lists and maps become
/// compact JSON text of their generic expansion. Null has no string form.
pub fn coerce_property(value: &Value) -> Option<String> {
    if value.is_null() {
        return None;
    }
    if let Some(text) = value.scalar_text() {
        return Some(text);
    }
    match expand(value) {
        Ok(json) => Some(json.to_string()),
        Err(err) => {
            warn!(%err, kind = %value.kind(), "property value could not be rendered");
            None
        }
    }
}

fn reserved_text(properties: &BTreeMap<String, Value>, key: &str) -> String {
    properties
        .get(key)
        .and_then(coerce_property)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Temporal;

    #[test]
    fn test_coerce_scalars() {
        assert_eq!(coerce_property(&Value::from("x")).as_deref(), Some("x"));
        assert_eq!(coerce_property(&Value::from(7)).as_deref(), Some("7"));
        assert_eq!(coerce_property(&Value::from(false)).as_deref(), Some("false"));
        assert_eq!(coerce_property(&Value::from(1.0)).as_deref(), Some("1.0"));
        assert_eq!(
            coerce_property(&Value::from(Temporal::date_time("2024-05-01T10:00:00Z"))).as_deref(),
            Some("2024-05-01T10:00:00Z")
        );
    }

    #[test]
    fn test_coerce_null_has_no_text() {
        assert_eq!(coerce_property(&Value::Null), None);
    }

    #[test]
    fn test_coerce_list_as_json_text() {
        let list = Value::from(vec![Value::from("a"), Value::from(2)]);
        assert_eq!(coerce_property(&list).as_deref(), Some(r#"["a",2]"#));
    }

    #[test]
    fn test_reserved_text_defaults_to_empty() {
        let mut props = BTreeMap::new();
        props.insert(UUID.to_string(), Value::from(12));
        assert_eq!(reserved_text(&props, UUID), "12");
        assert_eq!(reserved_text(&props, CREATE_TIME), "");
    }
}
