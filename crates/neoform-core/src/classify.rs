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

//! Shape classification of result values.
//!
//! Everything downstream (expansion, projection, batch extraction) decides
//! what to do from the [`Shape`] alone. This is the one place that looks at
//! the engine's type tag.

use crate::value::{Value, ValueKind};

/// The shape of a result value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Integer, boolean or string leaf.
    Terminal,
    /// Node record.
    Node,
    /// Relationship record.
    Relationship,
    /// Anything else, including null and non-terminal scalars.
    Composite,
}

/// Classify a value by its engine type tag.
///
/// Only integers, booleans and strings are terminal. Floats, temporals and
/// nulls are classified as composites and take the generic path.
pub fn classify(value: &Value) -> Shape {
    match value.kind() {
        ValueKind::Integer | ValueKind::Boolean | ValueKind::String => Shape::Terminal,
        ValueKind::Node => Shape::Node,
        ValueKind::Relationship => Shape::Relationship,
        _ => Shape::Composite,
    }
}

/// Whether the value is an integer, boolean or string leaf.
pub fn is_terminal(value: &Value) -> bool {
    classify(value) == Shape::Terminal
}

/// Whether the value is tagged as a node record.
pub fn is_node(value: &Value) -> bool {
    classify(value) == Shape::Node
}

/// Whether the value is tagged as a relationship record.
pub fn is_relationship(value: &Value) -> bool {
    classify(value) == Shape::Relationship
}
