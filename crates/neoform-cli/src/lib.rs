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

//! Neoform CLI library for command-line parsing and execution.
//!
//! The `neoform` binary reads a JSON-encoded query result dump and writes
//! one of three normalized views of it:
//!
//! - **expand**: every record as a JSON row object
//! - **nodes**: one column of every record projected as a node
//! - **relationships**: one column of every record extracted as a
//!   relationship batch
//!
//! # Examples
//!
//! ```no_run
//! use neoform_cli::commands::{expand, relationships};
//! use neoform_core::ExpandConfig;
//!
//! # fn main() -> Result<(), neoform_cli::error::CliError> {
//! expand("result.json", Some("rows.json"), false, &ExpandConfig::default())?;
//! relationships("result.json", "rels", None, true)?;
//! # Ok(())
//! # }
//! ```

#![deny(missing_docs)]

pub mod cli;
pub mod commands;
pub mod error;
