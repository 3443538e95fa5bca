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

//! Schema projection of a single result column.

use super::{load_result, render_json, write_output};
use crate::error::CliError;
use neoform_core::{extract_field, project_node, ExtractedNode, ResultRecord};

/// Project the `field` column of every record as a node.
///
/// Records where the column is missing or holds something other than a node
/// contribute an empty node, keeping the output aligned with the input rows.
pub fn nodes(file: &str, field: &str, output: Option<&str>, pretty: bool) -> Result<(), CliError> {
    let result = load_result(file)?;
    let nodes: Vec<ExtractedNode> = result
        .records
        .iter()
        .map(|record| match record.get(field) {
            Some(value) => project_node(value),
            None => ExtractedNode::default(),
        })
        .collect();
    write_output(&render_json(&nodes, pretty)?, output)
}

/// Extract the relationship list in the `field` column of every record.
///
/// Produces one array per record; records without the column give an empty
/// array.
pub fn relationships(
    file: &str,
    field: &str,
    output: Option<&str>,
    pretty: bool,
) -> Result<(), CliError> {
    let result = load_result(file)?;
    let batches: Vec<_> = result
        .records
        .iter()
        .map(|record| extract_field(record, field))
        .collect();
    write_output(&render_json(&batches, pretty)?, output)
}
