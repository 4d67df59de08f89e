//! Customer identity payload.
//!
//! A JSON object: `email` is required, arbitrary extra fields (`return_to`,
//! `first_name`, tags, nested objects, ...) round-trip untouched. At
//! generation time a copy of the fields is stamped with `created_at` so the
//! storefront can reject stale tokens.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::MultipassError;

/// Field the storefront requires in every payload.
const EMAIL_FIELD: &str = "email";

/// Timestamp field stamped into the payload at generation time.
const CREATED_AT_FIELD: &str = "created_at";

/// Customer identity fields for the token payload.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct CustomerData(Map<String, Value>);

impl CustomerData {
    /// Create a payload with the required `email` field.
    pub fn new(email: impl Into<String>) -> Self {
        let mut fields = Map::new();
        fields.insert(EMAIL_FIELD.to_owned(), Value::String(email.into()));
        Self(fields)
    }

    /// Builder-style field insert.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }

    /// Insert or replace a field.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), value.into());
    }

    /// Accept any JSON value, rejecting everything that is not an object.
    pub fn from_value(value: Value) -> Result<Self, MultipassError> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(MultipassError::NotAnObject(json_type_name(&other))),
        }
    }

    /// The payload fields, without the generation timestamp.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    /// `email` must be present and truthy: absent, `null`, `false`, and the
    /// empty string all fail. No other field is validated.
    pub(crate) fn validate(&self) -> Result<(), MultipassError> {
        match self.0.get(EMAIL_FIELD) {
            None | Some(Value::Null) | Some(Value::Bool(false)) => {
                Err(MultipassError::EmailRequired)
            }
            Some(Value::String(s)) if s.is_empty() => Err(MultipassError::EmailRequired),
            Some(_) => Ok(()),
        }
    }

    /// Serialize a copy of the fields with `created_at` stamped in.
    ///
    /// The original map is never mutated. A caller-supplied `created_at`
    /// field is overwritten by the generation timestamp.
    pub(crate) fn payload_json(&self, created_at: DateTime<Utc>) -> Result<String, MultipassError> {
        let mut payload = self.0.clone();
        payload.insert(
            CREATED_AT_FIELD.to_owned(),
            Value::String(created_at.to_rfc3339_opts(SecondsFormat::Secs, true)),
        );
        Ok(serde_json::to_string(&payload)?)
    }
}

impl From<Map<String, Value>> for CustomerData {
    fn from(fields: Map<String, Value>) -> Self {
        Self(fields)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
