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

//! Normalization of graph query results into JSON-safe structures.
//!
//! This crate takes the values a graph database hands back for a query
//! (scalars, lists, maps, node and relationship records) and provides:
//! - Generic expansion of any value into a `serde_json::Value` tree
//! - Projection of node and relationship records onto fixed schemas
//! - Batch extraction of relationship lists with per-element tolerance
//!
//! The crate never talks to a database. The query layer supplies records
//! through [`ResultRecord`] and serializes whatever comes out.
//!
//! # Shapes
//!
//! | Engine kind | [`Shape`] | Expansion |
//! |-------------|-----------|-----------|
//! | INTEGER, BOOLEAN, STRING | `Terminal` | Native JSON number/bool/string |
//! | NODE | `Node` | Property map |
//! | RELATIONSHIP | `Relationship` | Property map |
//! | LIST | `Composite` | Array, order preserved |
//! | MAP | `Composite` | Object, keys sorted |
//! | FLOAT, DATE, TIME, DURATION, ... | `Composite` | Canonical text |
//! | NULL | `Composite` | `null` |
//!
//! # Example: Generic expansion
//!
//! ```rust
//! use neoform_core::{expand_record, ExpandConfig, Record, Value};
//!
//! fn example() -> Result<(), neoform_core::ExtractError> {
//!     let record = Record::from_pairs(vec![
//!         ("term", Value::from("λόγος")),
//!         ("definition", Value::from("word, reason")),
//!     ])?;
//!
//!     let row = expand_record(&record, &ExpandConfig::default())?;
//!     assert_eq!(row["term"], "λόγος");
//!     Ok(())
//! }
//! # example().unwrap();
//! ```
//!
//! # Example: Schema projection
//!
//! ```rust
//! use neoform_core::{extract_all, project_node, Node, Relationship, Value};
//!
//! let node = Value::from(
//!     Node::new(1)
//!         .with_label("Term")
//!         .with_property("uuid", "u1")
//!         .with_property("create_time", "2024-01-01 10:00:00")
//!         .with_property("update_time", "2024-01-02 10:00:00")
//!         .with_property("title", "Alpha"),
//! );
//! let extracted = project_node(&node);
//! assert_eq!(extracted.create_time, "2024-01-01 10:00:00");
//! assert_eq!(extracted.properties["title"], "Alpha");
//!
//! let rels = Value::from(vec![Relationship::new(7, 1, "LINKS", 2)
//!     .with_property("uuid", "r1")
//!     .with_property("sourceNode", "u1")
//!     .with_property("targetNode", "u2")]);
//! let extracted = extract_all(Some(&rels));
//! assert_eq!(extracted[0].target_node, "u2");
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod batch;
pub mod classify;
pub mod config;
pub mod error;
pub mod expand;
pub mod project;
pub mod record;
pub mod value;

// Re-export main types at crate root for convenience
pub use batch::{extract_all, extract_field, extract_nodes};
pub use classify::{classify, is_node, is_relationship, is_terminal, Shape};
pub use config::{ExpandConfig, ExpandConfigBuilder, DEFAULT_MAX_DEPTH};
pub use error::{ExtractError, Result};
pub use expand::{expand, expand_record, expand_records, expand_with_config, JsonRow};
pub use project::{
    coerce_property, project_graph, project_node, project_relationship, ExtractedGraph,
    ExtractedNode, ExtractedRelationship, NODE_RESERVED_KEYS, RELATIONSHIP_RESERVED_KEYS,
};
pub use record::{QueryResult, Record, ResultRecord};
pub use value::{Members, Node, Relationship, Scalar, Temporal, TemporalKind, Value, ValueKind};
