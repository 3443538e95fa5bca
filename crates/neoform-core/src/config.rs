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

//! Configuration for generic expansion.

use serde::{Deserialize, Serialize};

/// Default nesting depth ceiling for generic expansion.
///
/// Query results are bounded trees and rarely nest beyond a handful of
/// levels. The ceiling only exists so that pathological engine data fails
/// with [`ExtractError::MalformedResult`](crate::ExtractError::MalformedResult)
/// instead of exhausting the call stack.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Depth ceiling used by [`ExpandConfig::for_untrusted_input`].
pub const UNTRUSTED_MAX_DEPTH: usize = 32;

/// Configuration for expanding result values into JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpandConfig {
    /// Maximum nesting depth (default: 64, None = unlimited).
    ///
    /// The top-level value sits at depth 0; every step into a list element,
    /// map entry or record property adds one.
    pub max_depth: Option<usize>,
}

impl Default for ExpandConfig {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl ExpandConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for ExpandConfig.
    ///
    /// # Examples
    ///
    /// ```
    /// # use neoform_core::ExpandConfig;
    /// let config = ExpandConfig::builder()
    ///     .max_depth(16)
    ///     .build();
    /// assert_eq!(config.max_depth, Some(16));
    /// ```
    pub fn builder() -> ExpandConfigBuilder {
        ExpandConfigBuilder::default()
    }

    /// Set the maximum nesting depth.
    pub fn with_max_depth(mut self, max: usize) -> Self {
        self.max_depth = Some(max);
        self
    }

    /// Remove the depth ceiling (use with caution).
    ///
    /// Only use this for trusted engines: a deep enough value will overflow
    /// the stack.
    pub fn without_depth_limit(mut self) -> Self {
        self.max_depth = None;
        self
    }

    /// Create a configuration suitable for untrusted input.
    ///
    /// Halves the default depth ceiling.
    ///
    /// # Examples
    ///
    /// ```
    /// # use neoform_core::ExpandConfig;
    /// let config = ExpandConfig::for_untrusted_input();
    /// assert_eq!(config.max_depth, Some(32));
    /// ```
    pub fn for_untrusted_input() -> Self {
        Self {
            max_depth: Some(UNTRUSTED_MAX_DEPTH),
        }
    }
}

/// Builder for ExpandConfig.
///
/// All unset fields fall back to their defaults.
///
/// # Examples
///
/// ```
/// # use neoform_core::ExpandConfig;
/// let config = ExpandConfig::builder()
///     .unlimited_depth()
///     .build();
/// assert_eq!(config.max_depth, None);
/// ```
#[derive(Debug, Default)]
pub struct ExpandConfigBuilder {
    max_depth: Option<Option<usize>>,
}

impl ExpandConfigBuilder {
    /// Create a new builder with no values set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum nesting depth.
    pub fn max_depth(mut self, max: usize) -> Self {
        self.max_depth = Some(Some(max));
        self
    }

    /// Remove the depth ceiling (use with caution).
    pub fn unlimited_depth(mut self) -> Self {
        self.max_depth = Some(None);
        self
    }

    /// Build the ExpandConfig instance.
    pub fn build(self) -> ExpandConfig {
        let defaults = ExpandConfig::default();
        ExpandConfig {
            max_depth: self.max_depth.unwrap_or(defaults.max_depth),
        }
    }
}
