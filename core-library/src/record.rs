//! Records produced by media queries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One media index row: field name to string value (`None` for NULL).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaRecord(BTreeMap<String, Option<String>>);

impl MediaRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `value` under `field`, returning the previous value if the
    /// field was already present.
    pub fn insert(
        &mut self,
        field: impl Into<String>,
        value: Option<String>,
    ) -> Option<Option<String>> {
        self.0.insert(field.into(), value)
    }

    /// Value of `field`; `None` when the field is absent or NULL.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).and_then(|value| value.as_deref())
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Whether any field of this record already holds `value`.
    pub fn contains_value(&self, value: &Option<String>) -> bool {
        self.0.values().any(|existing| existing == value)
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Option<String>)> for MediaRecord {
    fn from_iter<I: IntoIterator<Item = (K, Option<String>)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(field, value)| (field.into(), value))
                .collect(),
        )
    }
}

impl From<MediaRecord> for Value {
    fn from(record: MediaRecord) -> Self {
        let object: Map<String, Value> = record
            .0
            .into_iter()
            .map(|(field, value)| (field, value.map_or(Value::Null, Value::String)))
            .collect();
        Value::Object(object)
    }
}

/// Ordered rows of one query, in the order the index returned them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResultSet(Vec<MediaRecord>);

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: MediaRecord) {
        self.0.push(record);
    }

    pub fn records(&self) -> &[MediaRecord] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MediaRecord> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether every record carries exactly the fields in `fields`.
    pub fn has_fields(&self, fields: &[&str]) -> bool {
        self.0.iter().all(|record| {
            record.len() == fields.len() && fields.iter().all(|field| record.contains_field(field))
        })
    }

    /// Values of `field` across all records, in order.
    pub fn column(&self, field: &str) -> Vec<Option<&str>> {
        self.0.iter().map(|record| record.get(field)).collect()
    }

    pub fn into_records(self) -> Vec<MediaRecord> {
        self.0
    }
}

impl FromIterator<MediaRecord> for ResultSet {
    fn from_iter<I: IntoIterator<Item = MediaRecord>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ResultSet {
    type Item = MediaRecord;
    type IntoIter = std::vec::IntoIter<MediaRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<ResultSet> for Value {
    fn from(records: ResultSet) -> Self {
        Value::Array(records.0.into_iter().map(Value::from).collect())
    }
}
