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

//! Error types for graph result extraction.

use thiserror::Error;

/// Error type for extraction operations.
///
/// Missing or mismatched input is never an error at this layer: projections
/// fall back to empty records and batches skip offending elements. The only
/// failure raised while walking a value is [`ExtractError::MalformedResult`].
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Nesting depth ceiling exceeded during generic expansion.
    #[error("malformed result: nesting depth {depth} exceeds maximum allowed depth {max_depth}")]
    MalformedResult {
        /// Depth at which the ceiling was hit.
        depth: usize,
        /// Maximum allowed depth.
        max_depth: usize,
    },

    /// A result record whose keys and values do not line up.
    #[error("invalid record: {0}")]
    RecordShape(String),

    /// A result dump that could not be decoded.
    #[error("invalid result dump: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractError>;
