use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::RecordError;
use crate::schema;
use crate::value::FieldValue;
use crate::variant::Variant;

/// One header, machine, or item entry from a DAT.
///
/// Keys are restricted to the variant's schema and stored under their
/// canonical (lowercase) spelling. A key may be present with a null value;
/// every lookup helper treats that the same as an absent key, but it still
/// counts towards [`Record::len`] and structural equality.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRecord", into = "RawRecord")]
pub struct Record {
    variant: Variant,
    fields: BTreeMap<&'static str, Option<FieldValue>>,
}

impl Record {
    pub fn new(variant: Variant) -> Self {
        Self {
            variant,
            fields: BTreeMap::new(),
        }
    }

    /// Build a record from `(field, value)` pairs, validating every name.
    pub fn try_from_fields<'a, I>(variant: Variant, fields: I) -> Result<Self, RecordError>
    where
        I: IntoIterator<Item = (&'a str, Option<FieldValue>)>,
    {
        let mut record = Self::new(variant);
        for (field, value) in fields {
            record.insert(field, value)?;
        }
        Ok(record)
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Set `field` to `value`, adding the key if needed.
    pub fn insert(&mut self, field: &str, value: Option<FieldValue>) -> Result<(), RecordError> {
        let key = self.key(field)?;
        self.fields.insert(key, value);
        Ok(())
    }

    /// Builder form of [`Record::insert`] for a non-null value.
    pub fn with(mut self, field: &str, value: impl Into<FieldValue>) -> Result<Self, RecordError> {
        self.insert(field, Some(value.into()))?;
        Ok(self)
    }

    /// Builder form of [`Record::insert`] for a present-but-null key.
    pub fn with_null(mut self, field: &str) -> Result<Self, RecordError> {
        self.insert(field, None)?;
        Ok(self)
    }

    /// The value of `field`, or `None` when absent or null.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        let key = schema::canonical_field(self.variant, field)?;
        self.fields.get(key)?.as_ref()
    }

    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get(field).and_then(FieldValue::as_str)
    }

    pub fn get_i64(&self, field: &str) -> Option<i64> {
        self.get(field).and_then(FieldValue::as_i64)
    }

    pub fn get_bool(&self, field: &str) -> Option<bool> {
        self.get(field).and_then(FieldValue::as_bool)
    }

    /// The value of `field` rendered as a string, whatever its type.
    pub fn get_string(&self, field: &str) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    /// Whether the key is present, even if it holds null.
    pub fn contains(&self, field: &str) -> bool {
        schema::canonical_field(self.variant, field)
            .is_some_and(|key| self.fields.contains_key(key))
    }

    /// Remove `field`. Returns whether the key was present.
    pub fn remove(&mut self, field: &str) -> bool {
        match schema::canonical_field(self.variant, field) {
            Some(key) => self.fields.remove(key).is_some(),
            None => false,
        }
    }

    /// Number of keys, null-valued ones included.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Keys and values in canonical key order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, Option<&FieldValue>)> + '_ {
        self.fields.iter().map(|(key, value)| (*key, value.as_ref()))
    }

    pub fn name(&self) -> Option<&str> {
        self.get_str("name")
    }

    fn key(&self, field: &str) -> Result<&'static str, RecordError> {
        schema::canonical_field(self.variant, field)
            .ok_or_else(|| RecordError::unknown_field(self.variant, field))
    }
}

/// Serialized shape of a [`Record`]: `{"type": "rom", "fields": {...}}`.
#[derive(Serialize, Deserialize)]
struct RawRecord {
    #[serde(rename = "type")]
    variant: String,
    #[serde(default)]
    fields: BTreeMap<String, Option<FieldValue>>,
}

impl TryFrom<RawRecord> for Record {
    type Error = RecordError;

    fn try_from(raw: RawRecord) -> Result<Self, Self::Error> {
        let variant: Variant = raw
            .variant
            .parse()
            .map_err(|_| RecordError::UnknownVariant(raw.variant.clone()))?;
        Record::try_from_fields(
            variant,
            raw.fields
                .iter()
                .map(|(field, value)| (field.as_str(), value.clone())),
        )
    }
}

impl From<Record> for RawRecord {
    fn from(record: Record) -> Self {
        RawRecord {
            variant: record.variant.short_name().to_string(),
            fields: record
                .fields
                .into_iter()
                .map(|(key, value)| (key.to_string(), value))
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "tests/record_tests.rs"]
mod tests;
