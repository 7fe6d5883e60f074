use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::core::classify::{Severity, Status};
use crate::core::error::{DevRadarError, Result};

/// Response of the `check` endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompatibilityResult {
    #[serde(deserialize_with = "status_from_str")]
    pub status: Status,
    #[serde(default, deserialize_with = "non_empty")]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "non_empty_severity")]
    pub severity: Option<Severity>,
    #[serde(default, deserialize_with = "non_empty")]
    pub workaround: Option<String>,
    #[serde(default, deserialize_with = "non_empty")]
    pub docs_url: Option<String>,
    #[serde(skip)]
    fields: Map<String, Value>,
}

impl CompatibilityResult {
    pub fn from_value(value: Value) -> Result<Self> {
        let fields = match value {
            Value::Object(map) => map,
            other => {
                return Err(DevRadarError::invalid_response(format!(
                    "expected an object, got {}",
                    json_kind(&other)
                )))
            }
        };
        let mut result: Self = serde_json::from_value(Value::Object(fields.clone()))
            .map_err(|e| DevRadarError::invalid_response(e.to_string()))?;
        result.fields = fields;
        Ok(result)
    }

    /// Every field of the response, in the order the server sent them.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// Response of the `scan` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ScanResult {
    pub stack: StackReport,
    #[serde(default)]
    pub metadata: ScanMetadata,
    #[serde(skip)]
    document: Value,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StackReport {
    pub score: f64,
    #[serde(default)]
    pub detected: Vec<String>,
    #[serde(default)]
    pub issues: Vec<StackIssue>,
    #[serde(default)]
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StackIssue {
    pub pair: String,
    #[serde(deserialize_with = "severity_from_str")]
    pub severity: Severity,
    #[serde(default)]
    pub message: String,
}

impl StackIssue {
    /// Split `pair` at the first hyphen. Names that themselves contain a
    /// hyphen cannot be told apart from the separator.
    pub fn technologies(&self) -> (&str, Option<&str>) {
        match self.pair.split_once('-') {
            Some((a, b)) => (a, Some(b)),
            None => (self.pair.as_str(), None),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Suggestion {
    pub message: String,
    #[serde(default, deserialize_with = "non_empty")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanMetadata {
    #[serde(default)]
    pub dependency_count: u64,
}

impl ScanResult {
    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(DevRadarError::invalid_response(format!(
                "expected an object, got {}",
                json_kind(&value)
            )));
        }
        let mut result: Self = serde_json::from_value(value.clone())
            .map_err(|e| DevRadarError::invalid_response(e.to_string()))?;
        result.document = value;
        Ok(result)
    }

    /// The response document exactly as received.
    pub fn document(&self) -> &Value {
        &self.document
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn status_from_str<'de, D>(deserializer: D) -> std::result::Result<Status, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Status::from)
}

fn severity_from_str<'de, D>(deserializer: D) -> std::result::Result<Severity, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Severity::from)
}

// Null and empty strings both count as absent.
fn non_empty<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

fn non_empty_severity<'de, D>(deserializer: D) -> std::result::Result<Option<Severity>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(non_empty(deserializer)?.map(Severity::from))
}
