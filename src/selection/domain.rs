//! Core option and identifier types.

use std::fmt::Display;

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use serde_json::Value;

/// A normalised option identifier.
///
/// The backend is inconsistent about how it carries identifiers: the same id
/// may arrive as a raw string, a bare number, or embedded in an object under
/// `_id` or `id`, depending on the endpoint. All of these collapse into this
/// single trimmed string form when a response is parsed, so code downstream
/// of the API boundary never compares mixed shapes.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct OptionId(String);

impl OptionId {
    /// Create an id from its raw string form.
    ///
    /// Leading and trailing whitespace is stripped so that ids compare equal
    /// regardless of which endpoint produced them.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_owned())
    }

    /// The id's canonical string form.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn from_json(value: &Value) -> Result<Self, String> {
        match value {
            Value::String(raw) => Ok(Self::new(raw)),
            Value::Number(number) => Ok(Self::new(number.to_string())),
            Value::Object(fields) => fields
                .get("_id")
                .or_else(|| fields.get("id"))
                .ok_or_else(|| "expected an object with an '_id' or 'id' field".to_owned())
                .and_then(Self::from_json),
            other => Err(format!("cannot read an identifier from {other}")),
        }
    }
}

impl AsRef<str> for OptionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Display for OptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for OptionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for OptionId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;

        OptionId::from_json(&value).map_err(de::Error::custom)
    }
}

/// A selectable named record (region, branch, centre, ...).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SelectOption {
    /// The record's identifier, normalised at the API boundary.
    #[serde(alias = "_id")]
    pub id: OptionId,
    /// The display name shown in pickers and chips.
    pub name: String,
}

impl SelectOption {
    /// Convenience constructor, mostly for building fixtures.
    pub fn new(id: impl AsRef<str>, name: impl Into<String>) -> Self {
        Self {
            id: OptionId::new(id),
            name: name.into(),
        }
    }
}

/// A display row in a single-select filter list.
///
/// `id = None` is the synthesised "All X" sentinel meaning no filter is
/// applied. It is built fresh on every render and never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterRow {
    /// The option's id, or `None` for the sentinel row.
    pub id: Option<OptionId>,
    /// The label to render.
    pub name: String,
}
