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

//! Canonical test fixtures.
//!
//! - **values**: scalars, non-terminal scalars, nested composites
//! - **records**: node and relationship records, result records and dumps
//! - **errors**: malformed result dumps

pub mod errors;
mod records;
mod values;

pub use records::*;
pub use values::*;
pub use errors::*;

use crate::FixtureList;

/// Returns all value fixtures for iteration.
///
/// Useful for running the same test across every fixture. Every entry
/// expands successfully under the default configuration.
pub fn all() -> FixtureList {
    vec![
        ("terminals", terminals),
        ("non_terminal_scalars", non_terminal_scalars),
        ("mixed_composite", mixed_composite),
        ("term_node", term_node),
        ("typed_property_node", typed_property_node),
        ("link_relationship", link_relationship),
        ("relationship_batch", relationship_batch),
        ("relationship_batch_with_gap", relationship_batch_with_gap),
        ("shallow_nesting", shallow_nesting),
        ("empty_list", empty_list),
    ]
}
