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

//! Structured error types for the Neoform CLI.
//!
//! All command handlers return `Result<T, CliError>`; `main` prints the
//! message and exits with status 1.

use neoform_core::ExtractError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for Neoform CLI operations.
#[derive(Error, Debug)]
pub enum CliError {
    /// I/O operation failed (file read, write, or metadata access).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file path that caused the error
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// File size exceeds the configured limit.
    #[error(
        "File '{path}' is too large ({actual} bytes). Maximum allowed: {max} bytes ({max_mb} MB).\n\
         To process larger files, set NEOFORM_MAX_FILE_SIZE (in bytes)."
    )]
    FileTooLarge {
        /// The file path that exceeded the limit
        path: PathBuf,
        /// The actual file size in bytes
        actual: u64,
        /// The maximum allowed file size in bytes
        max: u64,
        /// The maximum allowed file size in MB (for display)
        max_mb: u64,
    },

    /// Decoding the dump or expanding its values failed.
    #[error(transparent)]
    Extract(#[from] ExtractError),

    /// Rendering the output as JSON failed.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },
}

impl CliError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a file-too-large error.
    pub fn file_too_large(path: impl Into<PathBuf>, actual: u64, max: u64) -> Self {
        Self::FileTooLarge {
            path: path.into(),
            actual,
            max,
            max_mb: max / (1024 * 1024),
        }
    }

    /// Create a JSON formatting error.
    pub fn json_format(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_names_path() {
        let err = CliError::io_error(
            "dump.json",
            io::Error::new(io::ErrorKind::NotFound, "missing"),
        );
        let msg = err.to_string();
        assert!(msg.contains("dump.json"));
        assert!(msg.contains("missing"));
    }

    #[test]
    fn test_file_too_large_reports_megabytes() {
        let err = CliError::file_too_large("big.json", 5 * 1024 * 1024, 2 * 1024 * 1024);
        match &err {
            CliError::FileTooLarge { max_mb, .. } => assert_eq!(*max_mb, 2),
            other => panic!("Expected FileTooLarge, got {:?}", other),
        }
        assert!(err.to_string().contains("NEOFORM_MAX_FILE_SIZE"));
    }

    #[test]
    fn test_extract_error_is_transparent() {
        let err: CliError = ExtractError::MalformedResult {
            depth: 3,
            max_depth: 2,
        }
        .into();
        assert_eq!(
            err.to_string(),
            ExtractError::MalformedResult {
                depth: 3,
                max_depth: 2
            }
            .to_string()
        );
    }
}
