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

//! Generic expansion of result values into JSON trees.
//!
//! Terminals keep their native JSON type. Everything else is walked through
//! its composite view: keyed members become objects, ordered members become
//! arrays. Nodes and relationships met along the way expand to their property
//! maps; schema projection lives in [`crate::project`] and is never applied
//! here.
//!
//! Values without a composite view cannot be dropped silently: null becomes
//! JSON `null`, floats and temporals become their canonical text.

use serde_json::{Map, Number, Value as JsonValue};
use tracing::debug;

use crate::classify::{classify, Shape};
use crate::config::ExpandConfig;
use crate::error::{ExtractError, Result};
use crate::record::ResultRecord;
use crate::value::{Members, Scalar, Value};

/// One expanded result row, keyed by column name.
pub type JsonRow = Map<String, JsonValue>;

/// Expand a value using the default configuration.
///
/// # Errors
///
/// Returns `ExtractError::MalformedResult` if the value nests deeper than
/// [`DEFAULT_MAX_DEPTH`](crate::DEFAULT_MAX_DEPTH).
///
/// # Examples
///
/// ```
/// use neoform_core::{expand, Value};
///
/// let value = Value::from(vec![Value::from(1), Value::from("two")]);
/// assert_eq!(expand(&value).unwrap(), serde_json::json!([1, "two"]));
/// ```
pub fn expand(value: &Value) -> Result<JsonValue> {
    expand_with_config(value, &ExpandConfig::default())
}

/// Expand a value into a JSON tree.
///
/// # Errors
///
/// Returns `ExtractError::MalformedResult` if the value nests deeper than
/// `config.max_depth`. No partial output is produced.
pub fn expand_with_config(value: &Value, config: &ExpandConfig) -> Result<JsonValue> {
    expand_at(value, 0, config)
}

fn expand_at(value: &Value, depth: usize, config: &ExpandConfig) -> Result<JsonValue> {
    if let Some(max_depth) = config.max_depth {
        if depth > max_depth {
            return Err(ExtractError::MalformedResult { depth, max_depth });
        }
    }

    match classify(value) {
        Shape::Terminal => Ok(terminal_to_json(value)),
        Shape::Node | Shape::Relationship | Shape::Composite => {
            composite_to_json(value, depth, config)
        }
    }
}

fn terminal_to_json(value: &Value) -> JsonValue {
    match value.as_scalar() {
        Some(Scalar::Integer(i)) => JsonValue::Number(Number::from(i)),
        Some(Scalar::Boolean(b)) => JsonValue::Bool(b),
        Some(Scalar::String(s)) => JsonValue::String(s.to_string()),
        None => opaque_to_json(value),
    }
}

fn composite_to_json(value: &Value, depth: usize, config: &ExpandConfig) -> Result<JsonValue> {
    match value.members() {
        Members::Keyed(entries) => {
            let mut map = Map::new();
            for (key, member) in entries {
                map.insert(key.to_string(), expand_at(member, depth + 1, config)?);
            }
            Ok(JsonValue::Object(map))
        }
        Members::Ordered(items) => {
            let mut array = Vec::with_capacity(items.len());
            for item in items {
                array.push(expand_at(item, depth + 1, config)?);
            }
            Ok(JsonValue::Array(array))
        }
        Members::Opaque => Ok(opaque_to_json(value)),
    }
}

fn opaque_to_json(value: &Value) -> JsonValue {
    value
        .scalar_text()
        .map(JsonValue::String)
        .unwrap_or(JsonValue::Null)
}

/// Expand every column of a result record.
///
/// Columns absent from the record expand to `null`. The row is a
/// `serde_json::Map`, so its columns come out sorted by name rather than in
/// the record's column order.
///
/// # Errors
///
/// Returns the first `ExtractError::MalformedResult` met in any column.
pub fn expand_record<R>(record: &R, config: &ExpandConfig) -> Result<JsonRow>
where
    R: ResultRecord + ?Sized,
{
    let keys = record.keys();
    let mut row = Map::new();
    for key in keys {
        let json = match record.get(key) {
            Some(value) => expand_with_config(value, config)?,
            None => JsonValue::Null,
        };
        row.insert(key.to_string(), json);
    }
    Ok(row)
}

/// Expand a stream of result records into rows.
///
/// The first failing record aborts the whole extraction.
pub fn expand_records<'a, R, I>(records: I, config: &ExpandConfig) -> Result<Vec<JsonRow>>
where
    R: ResultRecord + 'a,
    I: IntoIterator<Item = &'a R>,
{
    let rows = records
        .into_iter()
        .map(|record| expand_record(record, config))
        .collect::<Result<Vec<_>>>()?;
    debug!(rows = rows.len(), "expanded result records");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;
    use crate::value::{Node, Relationship, Temporal};
    use serde_json::json;

    fn nested(levels: usize) -> Value {
        let mut value = Value::from(1);
        for _ in 0..levels {
            value = Value::List(vec![value]);
        }
        value
    }

    #[test]
    fn test_terminals_keep_native_type() {
        assert_eq!(expand(&Value::from(42)).unwrap(), json!(42));
        assert_eq!(expand(&Value::from(-7)).unwrap(), json!(-7));
        assert_eq!(expand(&Value::from(true)).unwrap(), json!(true));
        assert_eq!(expand(&Value::from("42")).unwrap(), json!("42"));
    }

    #[test]
    fn test_non_terminal_scalars_surface_as_text() {
        assert_eq!(expand(&Value::from(2.5)).unwrap(), json!("2.5"));
        assert_eq!(expand(&Value::from(3.0)).unwrap(), json!("3.0"));
        assert_eq!(
            expand(&Value::from(Temporal::date("2024-01-02"))).unwrap(),
            json!("2024-01-02")
        );
        assert_eq!(expand(&Value::Null).unwrap(), JsonValue::Null);
    }

    #[test]
    fn test_map_keys_preserved() {
        let value: Value = vec![
            ("name", Value::from("Alpha")),
            ("count", Value::from(3)),
            ("tags", Value::from(vec!["a", "b"])),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            expand(&value).unwrap(),
            json!({"name": "Alpha", "count": 3, "tags": ["a", "b"]})
        );
    }

    #[test]
    fn test_list_order_preserved() {
        let value = Value::from(vec![Value::from(3), Value::from(1), Value::from(2)]);
        assert_eq!(expand(&value).unwrap(), json!([3, 1, 2]));
    }

    #[test]
    fn test_empty_composites() {
        assert_eq!(expand(&Value::List(vec![])).unwrap(), json!([]));
        let empty: Value = Vec::<(String, Value)>::new().into_iter().collect();
        assert_eq!(expand(&empty).unwrap(), json!({}));
    }

    #[test]
    fn test_records_expand_generically() {
        let node = Value::from(
            Node::new(5)
                .with_label("Term")
                .with_property("uuid", "u1")
                .with_property("create_time", "t1"),
        );
        assert_eq!(
            expand(&node).unwrap(),
            json!({"uuid": "u1", "create_time": "t1"})
        );

        let rel = Value::from(Relationship::new(9, 1, "LINKS", 2).with_property("weight", 1.5));
        assert_eq!(expand(&rel).unwrap(), json!({"weight": "1.5"}));
    }

    #[test]
    fn test_depth_at_ceiling_expands() {
        let config = ExpandConfig::new().with_max_depth(3);
        assert_eq!(
            expand_with_config(&nested(3), &config).unwrap(),
            json!([[[1]]])
        );
    }

    #[test]
    fn test_depth_past_ceiling_fails() {
        let config = ExpandConfig::new().with_max_depth(3);
        match expand_with_config(&nested(4), &config) {
            Err(ExtractError::MalformedResult { depth, max_depth }) => {
                assert_eq!(depth, 4);
                assert_eq!(max_depth, 3);
            }
            other => panic!("Expected MalformedResult, got {:?}", other),
        }
    }

    #[test]
    fn test_default_ceiling_rejects_100_levels() {
        assert!(matches!(
            expand(&nested(100)),
            Err(ExtractError::MalformedResult { max_depth: 64, .. })
        ));
        assert!(expand(&nested(64)).is_ok());
    }

    #[test]
    fn test_unlimited_depth() {
        let config = ExpandConfig::new().without_depth_limit();
        assert!(expand_with_config(&nested(100), &config).is_ok());
    }

    #[test]
    fn test_expand_record_keeps_every_column() {
        let record = Record::from_pairs(vec![
            ("term", Value::from("Alpha")),
            ("definition", Value::from("First letter")),
            ("rank", Value::from(1)),
        ])
        .unwrap();
        let row = expand_record(&record, &ExpandConfig::default()).unwrap();
        assert_eq!(
            JsonValue::Object(row),
            json!({"term": "Alpha", "definition": "First letter", "rank": 1})
        );
    }

    #[test]
    fn test_expand_records_aborts_on_failure() {
        let good = Record::from_pairs(vec![("v", Value::from(1))]).unwrap();
        let bad = Record::from_pairs(vec![("v", nested(10))]).unwrap();
        let config = ExpandConfig::new().with_max_depth(5);

        assert_eq!(expand_records(&[good.clone()], &config).unwrap().len(), 1);
        assert!(expand_records(&[good, bad], &config).is_err());
    }
}
