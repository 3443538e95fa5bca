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

//! Malformed result dumps for error-path testing.

/// Result dumps that must fail to decode.
///
/// Each tuple contains (name, json_text).
pub fn invalid_dump_samples() -> Vec<(&'static str, &'static str)> {
    vec![
        ("empty", ""),
        ("not_json", "records: []"),
        ("records_not_list", r#"{"records": {}}"#),
        ("missing_values", r#"{"records": [{"keys": ["a"]}]}"#),
        (
            "mismatched_columns",
            r#"{"records": [{"keys": ["a", "b"], "values": [{"kind": "null"}]}]}"#,
        ),
        (
            "duplicate_key",
            r#"{"records": [{"keys": ["a", "a"], "values": [{"kind": "null"}, {"kind": "null"}]}]}"#,
        ),
        (
            "unknown_kind",
            r#"{"records": [{"keys": ["a"], "values": [{"kind": "point", "value": {}}]}]}"#,
        ),
        (
            "wrong_payload",
            r#"{"records": [{"keys": ["a"], "values": [{"kind": "integer", "value": "1"}]}]}"#,
        ),
    ]
}

/// A dump whose single value nests `levels` lists deep.
pub fn deep_dump_json(levels: usize) -> String {
    let mut value = r#"{"kind": "integer", "value": 1}"#.to_string();
    for _ in 0..levels {
        value = format!(r#"{{"kind": "list", "value": [{}]}}"#, value);
    }
    format!(r#"{{"records": [{{"keys": ["deep"], "values": [{}]}}]}}"#, value)
}
