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

//! CLI command implementations

mod expand;
mod project;

pub use expand::expand;
pub use project::{nodes, relationships};

use crate::error::CliError;
use neoform_core::QueryResult;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use tracing::debug;

/// Default maximum input size (1 GB).
/// Can be overridden via the NEOFORM_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("NEOFORM_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// The size is checked against `NEOFORM_MAX_FILE_SIZE` before anything is
/// allocated.
///
/// # Errors
///
/// Returns `Err` if the metadata cannot be read, the file is over the limit,
/// or the contents are not valid UTF-8.
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Read and decode a query result dump.
pub fn load_result(path: &str) -> Result<QueryResult, CliError> {
    let content = read_file(path)?;
    let result = QueryResult::from_json(&content)?;
    debug!(path, records = result.len(), "loaded result dump");
    Ok(result)
}

/// Render any serializable output as compact or pretty JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String, CliError> {
    let mut text = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
    .map_err(CliError::json_format)?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_render_json_compact_and_pretty() {
        let value = json!({"a": [1, 2]});
        assert_eq!(render_json(&value, false).unwrap(), "{\"a\":[1,2]}\n");
        let pretty = render_json(&value, true).unwrap();
        assert!(pretty.contains("\n  \"a\""));
        assert!(pretty.ends_with('\n'));
    }

    #[test]
    fn test_read_file_missing() {
        match read_file("/nonexistent/dump.json") {
            Err(CliError::Io { path, .. }) => {
                assert_eq!(path.to_str(), Some("/nonexistent/dump.json"))
            }
            other => panic!("Expected Io error, got {:?}", other),
        }
    }
}
