//! Raw field records as delivered by the schema API.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{FormError, Result};

/// Attribute names read from a field record.
pub mod attr {
    pub const ID: &str = "ID";
    pub const TYPE: &str = "Type";
    pub const TITLE: &str = "Title";
    pub const IS_REQUIRED: &str = "IsRequired";
    pub const CLASS_NAMES: &str = "ClassNames";
    pub const HTML_ID: &str = "HTMLID";
    pub const LABEL: &str = "Label";
    pub const SUB_FIELDS: &str = "SubFields";
    pub const CHOICES: &str = "Choices";
}

/// Placeholder used in errors when a record has no usable `ID`.
pub const UNKNOWN_FIELD: &str = "<unknown>";

/// One entry of the `Fields` array, kept as the raw attribute mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRecord(Map<String, Value>);

impl FieldRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set an attribute.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Returns the raw value of an attribute.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The record's `ID`, or a placeholder for error reporting.
    #[must_use]
    pub fn id(&self) -> &str {
        self.0
            .get(attr::ID)
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_FIELD)
    }

    /// Reads a mandatory string attribute.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MalformedFieldRecord`] if the attribute is absent
    /// or not a string.
    pub fn require_str(&self, attribute: &str) -> Result<&str> {
        self.opt_str(attribute)?
            .ok_or_else(|| FormError::malformed(self.id(), attribute))
    }

    /// Reads an optional string attribute. `null` counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MalformedFieldRecord`] if the attribute is
    /// present with a non-string value.
    pub fn opt_str(&self, attribute: &str) -> Result<Option<&str>> {
        match self.0.get(attribute) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s)),
            Some(_) => Err(FormError::malformed(self.id(), attribute)),
        }
    }

    /// Reads a sub-field collection such as `SubFields` or `Choices`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::MalformedFieldRecord`] unless the attribute is an
    /// array of objects.
    pub fn entries(&self, attribute: &str) -> Result<Vec<Self>> {
        let Some(Value::Array(items)) = self.0.get(attribute) else {
            return Err(FormError::malformed(self.id(), attribute));
        };

        items
            .iter()
            .map(|item| match item {
                Value::Object(map) => Ok(Self(map.clone())),
                _ => Err(FormError::malformed(self.id(), attribute)),
            })
            .collect()
    }

    /// Returns a copy of this record with every attribute of `overlay`
    /// written over it.
    #[must_use]
    pub fn overlaid(&self, overlay: &Self) -> Self {
        let mut merged = self.clone();
        for (key, value) in &overlay.0 {
            merged.0.insert(key.clone(), value.clone());
        }
        merged
    }
}

impl From<Map<String, Value>> for FieldRecord {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// Body of the `forms/{hash}/fields` endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FieldsResponse {
    /// Field records in form order.
    #[serde(rename = "Fields")]
    pub fields: Vec<FieldRecord>,
}
