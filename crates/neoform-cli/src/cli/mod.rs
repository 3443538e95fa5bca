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

//! CLI command definitions and argument parsing.

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use neoform_core::{ExpandConfig, DEFAULT_MAX_DEPTH};

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use neoform_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Expand every record of a result dump into JSON rows
    ///
    /// Terminals keep their JSON type; lists, maps, nodes and relationships
    /// are walked recursively.
    Expand {
        /// Input result dump (JSON)
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty print JSON
        #[arg(short, long)]
        pretty: bool,

        /// Maximum nesting depth before the result is rejected
        #[arg(long, value_name = "N", default_value_t = DEFAULT_MAX_DEPTH, conflicts_with = "unbounded")]
        max_depth: usize,

        /// Disable the nesting depth ceiling
        #[arg(long)]
        unbounded: bool,
    },

    /// Project one column of every record as a node
    Nodes {
        /// Input result dump (JSON)
        #[arg(value_name = "FILE")]
        file: String,

        /// Column holding the node
        #[arg(short, long, value_name = "KEY")]
        field: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty print JSON
        #[arg(short, long)]
        pretty: bool,
    },

    /// Extract the relationship list in one column of every record
    Relationships {
        /// Input result dump (JSON)
        #[arg(value_name = "FILE")]
        file: String,

        /// Column holding the relationship list
        #[arg(short, long, value_name = "KEY")]
        field: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Pretty print JSON
        #[arg(short, long)]
        pretty: bool,
    },
}

impl Commands {
    /// Execute the command with the provided arguments.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the dump cannot be read or decoded, a value exceeds
    /// the depth ceiling, or the output cannot be written.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Expand {
                file,
                output,
                pretty,
                max_depth,
                unbounded,
            } => {
                let config = if unbounded {
                    ExpandConfig::builder().unlimited_depth().build()
                } else {
                    ExpandConfig::builder().max_depth(max_depth).build()
                };
                commands::expand(&file, output.as_deref(), pretty, &config)
            }
            Commands::Nodes {
                file,
                field,
                output,
                pretty,
            } => commands::nodes(&file, &field, output.as_deref(), pretty),
            Commands::Relationships {
                file,
                field,
                output,
                pretty,
            } => commands::relationships(&file, &field, output.as_deref(), pretty),
        }
    }
}
