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

//! Query result records.
//!
//! The query layer hands the core one [`ResultRecord`] per result row. The
//! owned [`Record`] and [`QueryResult`] types double as the on-disk format of
//! result dumps.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::error::{ExtractError, Result};
use crate::value::Value;

/// A row of a query result: named values in column order.
pub trait ResultRecord {
    /// Column names in result order.
    fn keys(&self) -> Vec<&str>;

    /// Value of a column, if present.
    fn get(&self, key: &str) -> Option<&Value>;
}

impl ResultRecord for BTreeMap<String, Value> {
    fn keys(&self) -> Vec<&str> {
        BTreeMap::keys(self).map(String::as_str).collect()
    }

    fn get(&self, key: &str) -> Option<&Value> {
        BTreeMap::get(self, key)
    }
}

/// An owned result record.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "RecordRepr", into = "RecordRepr")]
pub struct Record {
    keys: Vec<String>,
    values: Vec<Value>,
}

#[derive(Serialize, Deserialize)]
struct RecordRepr {
    keys: Vec<String>,
    values: Vec<Value>,
}

impl TryFrom<RecordRepr> for Record {
    type Error = ExtractError;

    fn try_from(repr: RecordRepr) -> Result<Self> {
        Record::new(repr.keys, repr.values)
    }
}

impl From<Record> for RecordRepr {
    fn from(record: Record) -> Self {
        RecordRepr {
            keys: record.keys,
            values: record.values,
        }
    }
}

impl Record {
    /// Create a record from parallel key and value columns.
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::RecordShape` if the columns differ in length or
    /// a key appears twice.
    pub fn new(keys: Vec<String>, values: Vec<Value>) -> Result<Self> {
        if keys.len() != values.len() {
            return Err(ExtractError::RecordShape(format!(
                "{} keys but {} values",
                keys.len(),
                values.len()
            )));
        }

        let mut seen = BTreeSet::new();
        for key in &keys {
            if !seen.insert(key.as_str()) {
                return Err(ExtractError::RecordShape(format!("duplicate key '{}'", key)));
            }
        }

        Ok(Self { keys, values })
    }

    /// Create a record from `(key, value)` pairs.
    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Self>
    where
        K: Into<String>,
        V: Into<Value>,
    {
        let (keys, values): (Vec<String>, Vec<Value>) = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .unzip();
        Self::new(keys, values)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether the record has no columns.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl ResultRecord for Record {
    fn keys(&self) -> Vec<&str> {
        self.keys.iter().map(String::as_str).collect()
    }

    fn get(&self, key: &str) -> Option<&Value> {
        self.keys
            .iter()
            .position(|k| k == key)
            .map(|i| &self.values[i])
    }
}

/// A complete query result: every record in stream order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct QueryResult {
    /// Result records.
    #[serde(default)]
    pub records: Vec<Record>,
}

impl QueryResult {
    /// Create a result from records.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Decode a result dump.
    ///
    /// Decoding itself puts no limit on nesting depth; the stack grows on
    /// the heap as needed. The depth ceiling is enforced when the values are
    /// expanded, where it surfaces as `ExtractError::MalformedResult`.
    ///
    /// # Errors
    ///
    /// Returns `ExtractError::Json` for malformed JSON or records whose keys
    /// and values do not line up.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut deserializer = serde_json::Deserializer::from_str(json);
        deserializer.disable_recursion_limit();
        let result = Self::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
        deserializer.end()?;
        Ok(result)
    }

    /// Encode as a result dump.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the result has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_get_and_keys() {
        let record = Record::from_pairs(vec![("term", "Alpha"), ("definition", "First")]).unwrap();
        assert_eq!(record.keys(), vec!["term", "definition"]);
        assert_eq!(record.get("definition"), Some(&Value::from("First")));
        assert_eq!(record.get("missing"), None);
        assert_eq!(record.len(), 2);
    }

    #[test]
    fn test_record_rejects_mismatched_columns() {
        let result = Record::new(vec!["a".to_string()], vec![]);
        assert!(matches!(result, Err(ExtractError::RecordShape(_))));
    }

    #[test]
    fn test_record_rejects_duplicate_keys() {
        let result = Record::from_pairs(vec![("a", 1), ("a", 2)]);
        match result {
            Err(ExtractError::RecordShape(msg)) => assert!(msg.contains("'a'")),
            other => panic!("Expected RecordShape error, got {:?}", other),
        }
    }

    #[test]
    fn test_map_is_a_result_record() {
        let mut map = BTreeMap::new();
        map.insert("z".to_string(), Value::from(1));
        map.insert("a".to_string(), Value::from(2));
        assert_eq!(ResultRecord::keys(&map), vec!["a", "z"]);
        assert_eq!(ResultRecord::get(&map, "z"), Some(&Value::from(1)));
    }

    #[test]
    fn test_query_result_from_json() {
        let json = r#"{"records": [{"keys": ["n"], "values": [{"kind": "integer", "value": 1}]}]}"#;
        let result = QueryResult::from_json(json).unwrap();
        assert_eq!(result.len(), 1);
        assert_eq!(result.records[0].get("n"), Some(&Value::from(1)));
    }

    #[test]
    fn test_query_result_rejects_bad_record() {
        let json = r#"{"records": [{"keys": ["n", "m"], "values": []}]}"#;
        let err = QueryResult::from_json(json).unwrap_err();
        assert!(matches!(err, ExtractError::Json(_)));
        assert!(err.to_string().contains("2 keys but 0 values"));
    }

    #[test]
    fn test_query_result_rejects_trailing_input() {
        let json = r#"{"records": []} {"records": []}"#;
        assert!(matches!(
            QueryResult::from_json(json),
            Err(ExtractError::Json(_))
        ));
    }

    #[test]
    fn test_query_result_decodes_past_json_nesting_limit() {
        let mut value = r#"{"kind": "integer", "value": 1}"#.to_string();
        for _ in 0..200 {
            value = format!(r#"{{"kind": "list", "value": [{}]}}"#, value);
        }
        let json = format!(r#"{{"records": [{{"keys": ["deep"], "values": [{}]}}]}}"#, value);

        let result = QueryResult::from_json(&json).unwrap();
        let mut depth = 0;
        let mut current = result.records[0].get("deep").unwrap();
        while let Value::List(items) = current {
            depth += 1;
            current = &items[0];
        }
        assert_eq!(depth, 200);
        assert_eq!(current, &Value::from(1));
    }

    #[test]
    fn test_query_result_json_round_trip() {
        let result = QueryResult::new(vec![Record::from_pairs(vec![("x", true)]).unwrap()]);
        let back = QueryResult::from_json(&result.to_json().unwrap()).unwrap();
        assert_eq!(back, result);
    }
}
