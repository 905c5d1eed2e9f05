//! API security value objects

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use std::cmp::Ordering;
use std::fmt;

/// HTTP methods that name an operation inside a path item
pub const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// API vulnerability categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApiVulnerabilityType {
    #[serde(rename = "Authentication")]
    Authentication,
    #[serde(rename = "Data Exposure")]
    DataExposure,
    #[serde(rename = "Rate Limiting")]
    RateLimiting,
    #[serde(rename = "Input Validation")]
    InputValidation,
}

impl ApiVulnerabilityType {
    pub fn label(&self) -> &'static str {
        match self {
            ApiVulnerabilityType::Authentication => "Authentication",
            ApiVulnerabilityType::DataExposure => "Data Exposure",
            ApiVulnerabilityType::RateLimiting => "Rate Limiting",
            ApiVulnerabilityType::InputValidation => "Input Validation",
        }
    }
}

impl fmt::Display for ApiVulnerabilityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parsed API description.
///
/// No schema is enforced here; rules navigate it through [`SpecNode`], where a
/// missing key is `Absent` rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecDocument {
    root: JsonValue,
}

impl SpecDocument {
    pub fn new(root: JsonValue) -> Self {
        Self { root }
    }

    pub fn root(&self) -> SpecNode<'_> {
        SpecNode::from_value(&self.root)
    }

    pub fn as_value(&self) -> &JsonValue {
        &self.root
    }

    pub fn into_value(self) -> JsonValue {
        self.root
    }

    /// Compact JSON text of the whole document
    pub fn to_compact_string(&self) -> String {
        self.root.to_string()
    }

    /// Every operation under `paths`, in document order
    pub fn operations(&self) -> Vec<Operation<'_>> {
        let mut operations = Vec::new();
        for (path, path_item) in self.root().get("paths").entries() {
            for (method, node) in path_item.entries() {
                if HTTP_METHODS
                    .iter()
                    .any(|known| known.eq_ignore_ascii_case(method))
                {
                    operations.push(Operation { path, method, node });
                }
            }
        }
        operations
    }
}

impl From<JsonValue> for SpecDocument {
    fn from(root: JsonValue) -> Self {
        Self::new(root)
    }
}

/// Borrowed view of one node of a [`SpecDocument`]
#[derive(Debug, Clone, Copy)]
pub enum SpecNode<'a> {
    Mapping(&'a Map<String, JsonValue>),
    Sequence(&'a [JsonValue]),
    Scalar(&'a JsonValue),
    Absent,
}

impl<'a> SpecNode<'a> {
    pub fn from_value(value: &'a JsonValue) -> Self {
        match value {
            JsonValue::Object(map) => SpecNode::Mapping(map),
            JsonValue::Array(items) => SpecNode::Sequence(items),
            scalar => SpecNode::Scalar(scalar),
        }
    }

    /// Child under `key`; `Absent` unless this node is a mapping holding it
    pub fn get(self, key: &str) -> SpecNode<'a> {
        match self {
            SpecNode::Mapping(map) => map
                .get(key)
                .map(SpecNode::from_value)
                .unwrap_or(SpecNode::Absent),
            _ => SpecNode::Absent,
        }
    }

    /// Key/value pairs of a mapping, empty for any other node.
    ///
    /// Array-index keys (`"200"`, `"404"`) come first in ascending numeric
    /// order, then every other key in document order, as JavaScript object
    /// enumeration does.
    pub fn entries(self) -> Vec<(&'a str, SpecNode<'a>)> {
        match self {
            SpecNode::Mapping(map) => {
                let mut entries: Vec<(&'a str, SpecNode<'a>)> = map
                    .iter()
                    .map(|(key, value)| (key.as_str(), SpecNode::from_value(value)))
                    .collect();
                // stable, so non-index keys keep document order
                entries.sort_by(|(a, _), (b, _)| match (array_index(a), array_index(b)) {
                    (Some(a), Some(b)) => a.cmp(&b),
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                });
                entries
            }
            _ => Vec::new(),
        }
    }

    /// Items of a sequence, empty for any other node
    pub fn items(self) -> Vec<SpecNode<'a>> {
        match self {
            SpecNode::Sequence(items) => items.iter().map(SpecNode::from_value).collect(),
            _ => Vec::new(),
        }
    }

    /// Truthiness as the rules see it.
    ///
    /// `Absent`, `null`, `false`, zero and the empty string are falsy; any
    /// mapping or sequence is truthy, even when empty.
    pub fn is_truthy(self) -> bool {
        match self {
            SpecNode::Absent => false,
            SpecNode::Mapping(_) | SpecNode::Sequence(_) => true,
            SpecNode::Scalar(value) => match value {
                JsonValue::Null => false,
                JsonValue::Bool(flag) => *flag,
                JsonValue::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
                JsonValue::String(text) => !text.is_empty(),
                JsonValue::Array(_) | JsonValue::Object(_) => true,
            },
        }
    }

    pub fn is_absent(self) -> bool {
        matches!(self, SpecNode::Absent)
    }

    pub fn is_mapping(self) -> bool {
        matches!(self, SpecNode::Mapping(_))
    }

    pub fn as_str(self) -> Option<&'a str> {
        match self {
            SpecNode::Scalar(JsonValue::String(text)) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Compact JSON text of this node; empty for `Absent`
    pub fn to_compact_string(self) -> String {
        match self {
            SpecNode::Mapping(map) => serde_json::to_string(map).unwrap_or_default(),
            SpecNode::Sequence(items) => serde_json::to_string(items).unwrap_or_default(),
            SpecNode::Scalar(value) => value.to_string(),
            SpecNode::Absent => String::new(),
        }
    }
}

/// Canonical array index: decimal without leading zeros, below 2^32 - 1
fn array_index(key: &str) -> Option<u32> {
    let index: u32 = key.parse().ok()?;
    (index != u32::MAX && index.to_string() == key).then_some(index)
}

/// One operation (path + method pair) of a specification
#[derive(Debug, Clone, Copy)]
pub struct Operation<'a> {
    pub path: &'a str,
    pub method: &'a str,
    pub node: SpecNode<'a>,
}

impl Operation<'_> {
    /// Dot-delimited locator, e.g. `paths./users.get`
    pub fn locator(&self) -> String {
        format!("paths.{}.{}", self.path, self.method)
    }

    /// `GET /users` style label used in finding descriptions
    pub fn display_name(&self) -> String {
        format!("{} {}", self.method.to_uppercase(), self.path)
    }
}
