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

//! Generic row expansion of a result dump.

use super::{load_result, render_json, write_output};
use crate::error::CliError;
use neoform_core::{expand_records, ExpandConfig};

/// Expand every record of a dump into a JSON row object.
///
/// The output is a JSON array with one object per record, keyed by the
/// record's column names. The first value that exceeds the depth ceiling
/// aborts the whole command; nothing is written in that case.
///
/// # Examples
///
/// ```no_run
/// use neoform_cli::commands::expand;
/// use neoform_core::ExpandConfig;
///
/// # fn main() -> Result<(), neoform_cli::error::CliError> {
/// expand("result.json", None, true, &ExpandConfig::default())?;
/// # Ok(())
/// # }
/// ```
pub fn expand(
    file: &str,
    output: Option<&str>,
    pretty: bool,
    config: &ExpandConfig,
) -> Result<(), CliError> {
    let result = load_result(file)?;
    let rows = expand_records(&result.records, config)?;
    write_output(&render_json(&rows, pretty)?, output)
}
