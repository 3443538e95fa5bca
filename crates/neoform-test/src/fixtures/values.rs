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

//! Fixtures for scalar values and nested composites.

use neoform_core::{Temporal, TemporalKind, Value};

/// Map of every terminal kind: integers, booleans and strings.
pub fn terminals() -> Value {
    vec![
        ("int_positive", Value::Integer(42)),
        ("int_negative", Value::Integer(-17)),
        ("int_zero", Value::Integer(0)),
        ("bool_true", Value::Boolean(true)),
        ("bool_false", Value::Boolean(false)),
        ("string_simple", Value::String("hello world".to_string())),
        ("string_empty", Value::String(String::new())),
        ("string_numeric", Value::String("42".to_string())),
        ("string_greek", Value::String("Ὁμώνυμα λέγεται".to_string())),
    ]
    .into_iter()
    .collect()
}

/// Map of scalar kinds that are not terminal: null, floats and temporals.
pub fn non_terminal_scalars() -> Value {
    vec![
        ("null_val", Value::Null),
        ("float_half", Value::Float(2.5)),
        ("float_whole", Value::Float(3.0)),
        ("date", Value::Temporal(Temporal::date("2024-01-02"))),
        (
            "local_time",
            Value::Temporal(Temporal::new(TemporalKind::LocalTime, "12:30:00")),
        ),
        ("duration", Value::Temporal(Temporal::duration("P1DT2H"))),
    ]
    .into_iter()
    .collect()
}

/// Map mixing lists, maps and terminals two levels deep.
pub fn mixed_composite() -> Value {
    let inner: Value = vec![
        ("language", Value::from("Ancient Greek")),
        ("count", Value::from(3)),
    ]
    .into_iter()
    .collect();

    vec![
        ("meta", inner),
        ("terms", Value::from(vec!["λόγος", "ἦθος", "πάθος"])),
        ("ranks", Value::from(vec![3, 1, 2])),
        ("empty", Value::List(Vec::new())),
    ]
    .into_iter()
    .collect()
}

/// A list nested `levels` deep around the integer `1`.
///
/// The innermost integer sits at depth `levels`.
pub fn nested_lists(levels: usize) -> Value {
    let mut value = Value::Integer(1);
    for _ in 0..levels {
        value = Value::List(vec![value]);
    }
    value
}

/// Eight levels of lists, well inside the default depth ceiling.
pub fn shallow_nesting() -> Value {
    nested_lists(8)
}

/// An empty list.
pub fn empty_list() -> Value {
    Value::List(Vec::new())
}

/// A map nested `levels` deep, each level keyed `"next"`.
pub fn nested_maps(levels: usize) -> Value {
    let mut value = Value::String("leaf".to_string());
    for _ in 0..levels {
        value = vec![("next", value)].into_iter().collect();
    }
    value
}
