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

//! Graph query result values.
//!
//! [`Value`] mirrors the type system of the graph engine's client: a closed
//! set of scalar kinds, lists, maps and the two structural records (nodes and
//! relationships). Values are trees; nothing in here can form a cycle.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Engine type tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueKind {
    /// NULL.
    Null,
    /// BOOLEAN.
    Boolean,
    /// INTEGER.
    Integer,
    /// FLOAT.
    Float,
    /// STRING.
    String,
    /// DATE.
    Date,
    /// TIME.
    Time,
    /// LOCAL_TIME.
    LocalTime,
    /// DATE_TIME.
    DateTime,
    /// LOCAL_DATE_TIME.
    LocalDateTime,
    /// DURATION.
    Duration,
    /// LIST.
    List,
    /// MAP.
    Map,
    /// NODE.
    Node,
    /// RELATIONSHIP.
    Relationship,
}

impl ValueKind {
    /// The engine's name for this kind.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Null => "NULL",
            ValueKind::Boolean => "BOOLEAN",
            ValueKind::Integer => "INTEGER",
            ValueKind::Float => "FLOAT",
            ValueKind::String => "STRING",
            ValueKind::Date => "DATE",
            ValueKind::Time => "TIME",
            ValueKind::LocalTime => "LOCAL_TIME",
            ValueKind::DateTime => "DATE_TIME",
            ValueKind::LocalDateTime => "LOCAL_DATE_TIME",
            ValueKind::Duration => "DURATION",
            ValueKind::List => "LIST",
            ValueKind::Map => "MAP",
            ValueKind::Node => "NODE",
            ValueKind::Relationship => "RELATIONSHIP",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Kind of a temporal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemporalKind {
    /// Calendar date.
    Date,
    /// Time of day with offset.
    Time,
    /// Time of day without offset.
    LocalTime,
    /// Date and time with zone or offset.
    DateTime,
    /// Date and time without zone.
    LocalDateTime,
    /// Temporal amount.
    Duration,
}

/// A temporal value, kept in the ISO-8601 text form the engine reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Temporal {
    /// Which temporal type this is.
    pub kind: TemporalKind,
    /// ISO-8601 rendering, e.g. `2024-05-01` or `P1DT2H`.
    pub text: String,
}

impl Temporal {
    /// Create a temporal value.
    pub fn new(kind: TemporalKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Create a `DATE` value.
    pub fn date(text: impl Into<String>) -> Self {
        Self::new(TemporalKind::Date, text)
    }

    /// Create a `DATE_TIME` value.
    pub fn date_time(text: impl Into<String>) -> Self {
        Self::new(TemporalKind::DateTime, text)
    }

    /// Create a `DURATION` value.
    pub fn duration(text: impl Into<String>) -> Self {
        Self::new(TemporalKind::Duration, text)
    }
}

/// A node record: engine id, labels and a property map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    /// Engine-internal id.
    #[serde(default)]
    pub id: i64,
    /// Node labels.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Node properties.
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
}

impl Node {
    /// Create a node with no labels and no properties.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Add a label to the node.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.labels.push(label.into());
        self
    }

    /// Add a property to the node.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Add multiple properties to the node.
    pub fn with_properties(mut self, props: impl IntoIterator<Item = (String, Value)>) -> Self {
        self.properties.extend(props);
        self
    }

    /// Get a property value.
    pub fn get_property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

/// A relationship record: engine ids of both ends, type and a property map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Relationship {
    /// Engine-internal id.
    #[serde(default)]
    pub id: i64,
    /// Engine id of the start node.
    #[serde(default)]
    pub start_id: i64,
    /// Engine id of the end node.
    #[serde(default)]
    pub end_id: i64,
    /// Relationship type.
    #[serde(rename = "type", default)]
    pub rel_type: String,
    /// Relationship properties.
    #[serde(default)]
    pub properties: BTreeMap<String, Value>,
}

impl Relationship {
    /// Create a relationship between two engine node ids.
    pub fn new(id: i64, start_id: i64, rel_type: impl Into<String>, end_id: i64) -> Self {
        Self {
            id,
            start_id,
            end_id,
            rel_type: rel_type.into(),
            properties: BTreeMap::new(),
        }
    }

    /// Add a property to the relationship.
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    /// Get a property value.
    pub fn get_property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }
}

/// One value of a query result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
    /// Null value.
    Null,
    /// Boolean value.
    Boolean(bool),
    /// Integer value.
    Integer(i64),
    /// Floating-point value.
    Float(f64),
    /// String value.
    String(String),
    /// Date, time or duration value.
    Temporal(Temporal),
    /// Ordered list of values.
    List(Vec<Value>),
    /// String-keyed map of values.
    Map(BTreeMap<String, Value>),
    /// Node record.
    Node(Node),
    /// Relationship record.
    Relationship(Relationship),
}

/// A terminal scalar borrowed from a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scalar<'a> {
    /// Boolean scalar.
    Boolean(bool),
    /// Integer scalar.
    Integer(i64),
    /// String scalar.
    String(&'a str),
}

/// The composite view of a [`Value`].
#[derive(Debug, Clone, PartialEq)]
pub enum Members<'a> {
    /// Keyed entries in key order.
    Keyed(Vec<(&'a str, &'a Value)>),
    /// Ordered elements.
    Ordered(&'a [Value]),
    /// No composite view (null and non-terminal scalars).
    Opaque,
}

impl Value {
    /// Engine type tag of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Boolean(_) => ValueKind::Boolean,
            Value::Integer(_) => ValueKind::Integer,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
            Value::Temporal(t) => match t.kind {
                TemporalKind::Date => ValueKind::Date,
                TemporalKind::Time => ValueKind::Time,
                TemporalKind::LocalTime => ValueKind::LocalTime,
                TemporalKind::DateTime => ValueKind::DateTime,
                TemporalKind::LocalDateTime => ValueKind::LocalDateTime,
                TemporalKind::Duration => ValueKind::Duration,
            },
            Value::List(_) => ValueKind::List,
            Value::Map(_) => ValueKind::Map,
            Value::Node(_) => ValueKind::Node,
            Value::Relationship(_) => ValueKind::Relationship,
        }
    }

    /// Borrow this value as a terminal scalar (integer, boolean or string).
    pub fn as_scalar(&self) -> Option<Scalar<'_>> {
        match self {
            Value::Boolean(b) => Some(Scalar::Boolean(*b)),
            Value::Integer(i) => Some(Scalar::Integer(*i)),
            Value::String(s) => Some(Scalar::String(s)),
            _ => None,
        }
    }

    /// Composite view of this value.
    ///
    /// Nodes and relationships expose their property maps.
    pub fn members(&self) -> Members<'_> {
        match self {
            Value::List(items) => Members::Ordered(items),
            Value::Map(map) => Members::Keyed(keyed(map)),
            Value::Node(node) => Members::Keyed(keyed(&node.properties)),
            Value::Relationship(rel) => Members::Keyed(keyed(&rel.properties)),
            _ => Members::Opaque,
        }
    }

    /// Property map of a node or relationship record.
    pub fn properties(&self) -> Option<&BTreeMap<String, Value>> {
        match self {
            Value::Node(node) => Some(&node.properties),
            Value::Relationship(rel) => Some(&rel.properties),
            _ => None,
        }
    }

    /// Canonical text of a scalar value.
    ///
    /// Integers are decimal, booleans `true`/`false`, floats always carry a
    /// fractional part (`2.0`, `NaN`, `Infinity`), temporals use their
    /// ISO-8601 form. Returns `None` for null and composites.
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            Value::Boolean(b) => Some(b.to_string()),
            Value::Integer(i) => Some(i.to_string()),
            Value::Float(f) => Some(float_text(*f)),
            Value::String(s) => Some(s.clone()),
            Value::Temporal(t) => Some(t.text.clone()),
            _ => None,
        }
    }

    /// Check if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Try to get as a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }
}

fn keyed(map: &BTreeMap<String, Value>) -> Vec<(&str, &Value)> {
    map.iter().map(|(k, v)| (k.as_str(), v)).collect()
}

fn float_text(f: f64) -> String {
    if f.is_nan() {
        "NaN".to_string()
    } else if f.is_infinite() {
        let text = if f > 0.0 { "Infinity" } else { "-Infinity" };
        text.to_string()
    } else {
        let s = f.to_string();
        if s.contains('.') || s.contains('e') || s.contains('E') {
            s
        } else {
            format!("{}.0", s)
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Temporal> for Value {
    fn from(v: Temporal) -> Self {
        Value::Temporal(v)
    }
}

impl From<Node> for Value {
    fn from(v: Node) -> Self {
        Value::Node(v)
    }
}

impl From<Relationship> for Value {
    fn from(v: Relationship) -> Self {
        Value::Relationship(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(|x| x.into()).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(x) => x.into(),
            None => Value::Null,
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_of_scalars() {
        assert_eq!(Value::Null.kind(), ValueKind::Null);
        assert_eq!(Value::from(true).kind(), ValueKind::Boolean);
        assert_eq!(Value::from(7).kind(), ValueKind::Integer);
        assert_eq!(Value::from(1.5).kind(), ValueKind::Float);
        assert_eq!(Value::from("x").kind(), ValueKind::String);
        assert_eq!(
            Value::from(Temporal::duration("P1D")).kind(),
            ValueKind::Duration
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(ValueKind::LocalDateTime.to_string(), "LOCAL_DATE_TIME");
        assert_eq!(ValueKind::Relationship.to_string(), "RELATIONSHIP");
    }

    #[test]
    fn test_as_scalar_only_for_terminals() {
        assert_eq!(Value::from(3).as_scalar(), Some(Scalar::Integer(3)));
        assert_eq!(Value::from(false).as_scalar(), Some(Scalar::Boolean(false)));
        assert_eq!(Value::from("a").as_scalar(), Some(Scalar::String("a")));
        assert_eq!(Value::from(3.0).as_scalar(), None);
        assert_eq!(Value::Null.as_scalar(), None);
    }

    #[test]
    fn test_members_of_node_is_property_map() {
        let node = Value::from(
            Node::new(1)
                .with_label("Term")
                .with_property("b", 2)
                .with_property("a", 1),
        );
        match node.members() {
            Members::Keyed(entries) => {
                let keys: Vec<&str> = entries.iter().map(|(k, _)| *k).collect();
                assert_eq!(keys, vec!["a", "b"]);
            }
            other => panic!("Expected keyed members, got {:?}", other),
        }
    }

    #[test]
    fn test_members_of_list_and_scalars() {
        let list = Value::from(vec![1, 2, 3]);
        assert!(matches!(list.members(), Members::Ordered(items) if items.len() == 3));
        assert_eq!(Value::from(2.5).members(), Members::Opaque);
        assert_eq!(Value::Null.members(), Members::Opaque);
    }

    #[test]
    fn test_scalar_text() {
        assert_eq!(Value::from(42).scalar_text().as_deref(), Some("42"));
        assert_eq!(Value::from(true).scalar_text().as_deref(), Some("true"));
        assert_eq!(Value::from(2.0).scalar_text().as_deref(), Some("2.0"));
        assert_eq!(Value::from(0.25).scalar_text().as_deref(), Some("0.25"));
        assert_eq!(Value::from(f64::NAN).scalar_text().as_deref(), Some("NaN"));
        assert_eq!(
            Value::from(f64::NEG_INFINITY).scalar_text().as_deref(),
            Some("-Infinity")
        );
        assert_eq!(
            Value::from(Temporal::date("2024-05-01")).scalar_text().as_deref(),
            Some("2024-05-01")
        );
        assert_eq!(Value::Null.scalar_text(), None);
        assert_eq!(Value::from(vec![1]).scalar_text(), None);
    }

    #[test]
    fn test_from_option_and_iter() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::String("x".to_string()));

        let map: Value = vec![("k", 1)].into_iter().collect();
        assert_eq!(map.members(), Members::Keyed(vec![("k", &Value::Integer(1))]));
    }

    #[test]
    fn test_wire_format_is_adjacently_tagged() {
        let json = serde_json::to_value(Value::from(42)).unwrap();
        assert_eq!(json, serde_json::json!({"kind": "integer", "value": 42}));

        let null: Value = serde_json::from_str(r#"{"kind": "null"}"#).unwrap();
        assert!(null.is_null());

        let rel: Value = serde_json::from_str(
            r#"{"kind": "relationship", "value": {"id": 3, "start_id": 1, "end_id": 2, "type": "LINKS", "properties": {"name": {"kind": "string", "value": "r"}}}}"#,
        )
        .unwrap();
        match rel {
            Value::Relationship(r) => {
                assert_eq!(r.rel_type, "LINKS");
                assert_eq!(r.get_property("name"), Some(&Value::from("r")));
            }
            other => panic!("Expected relationship, got {:?}", other),
        }
    }
}
