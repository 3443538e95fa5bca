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

//! Shared test fixtures for neoform crates.
//!
//! This crate provides canonical result values, records and result dumps so
//! that the core library and the CLI test against the same data.
//!
//! # Quick Start
//!
//! ```rust
//! use neoform_test::fixtures;
//!
//! let node = fixtures::term_node();                   // Node with reserved keys + title
//! let batch = fixtures::relationship_batch_with_gap(); // r1, <node>, r3
//! let deep = fixtures::nested_lists(100);             // Past the default depth ceiling
//! let dump = fixtures::vocabulary_dump_json();        // Result dump for CLI tests
//! ```

pub mod fixtures;

use neoform_core::Value;

/// Type alias for a list of fixture functions (name, generator).
pub type FixtureList = Vec<(&'static str, fn() -> Value)>;

/// Count the values in a tree, the root included.
///
/// Node and relationship records count their properties.
pub fn count_values(value: &Value) -> usize {
    use neoform_core::Members;

    1 + match value.members() {
        Members::Keyed(entries) => entries.iter().map(|(_, v)| count_values(v)).sum(),
        Members::Ordered(items) => items.iter().map(count_values).sum(),
        Members::Opaque => 0,
    }
}

/// Count the leaves of an expanded JSON tree.
pub fn count_json_leaves(json: &serde_json::Value) -> usize {
    match json {
        serde_json::Value::Array(items) => items.iter().map(count_json_leaves).sum(),
        serde_json::Value::Object(map) => map.values().map(count_json_leaves).sum(),
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_values() {
        assert_eq!(count_values(&fixtures::nested_lists(3)), 4);
        assert_eq!(count_values(&Value::Null), 1);
    }

    #[test]
    fn test_count_json_leaves() {
        let json = serde_json::json!({"a": [1, 2], "b": {"c": null}});
        assert_eq!(count_json_leaves(&json), 3);
    }

    #[test]
    fn test_all_fixtures_are_named_uniquely() {
        let all = fixtures::all();
        let mut names: Vec<&str> = all.iter().map(|(name, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), all.len());
    }
}
