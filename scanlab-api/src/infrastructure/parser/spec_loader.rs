//! JSON/YAML loader for API descriptions

use serde_json::{Map, Number, Value as JsonValue};
use serde_yml::Value as YamlValue;
use tracing::{debug, instrument, warn};

use crate::domain::value_objects::SpecDocument;

/// Loader error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoadError {
    #[error("Specification content is empty")]
    Empty,

    /// Message of the last parser tried (YAML)
    #[error("{0}")]
    Syntax(String),
}

/// Parses raw text into a [`SpecDocument`], JSON first and YAML as fallback
pub struct SpecLoader;

impl SpecLoader {
    #[instrument(skip_all, fields(content_len = content.len()))]
    pub fn load(content: &str) -> Result<SpecDocument, LoadError> {
        if content.trim().is_empty() {
            return Err(LoadError::Empty);
        }

        match serde_json::from_str::<JsonValue>(content) {
            Ok(value) => {
                debug!("Parsed specification as JSON");
                return Ok(SpecDocument::new(value));
            }
            Err(e) => debug!(error = %e, "JSON parse failed, trying YAML"),
        }

        let yaml: YamlValue = serde_yml::from_str(content).map_err(|e| {
            warn!(error = %e, "Failed to parse specification as JSON or YAML");
            LoadError::Syntax(e.to_string())
        })?;

        debug!("Parsed specification as YAML");
        Ok(SpecDocument::new(yaml_to_json(yaml)))
    }
}

/// Convert a YAML tree to JSON, stringifying non-string mapping keys
fn yaml_to_json(value: YamlValue) -> JsonValue {
    match value {
        YamlValue::Null => JsonValue::Null,
        YamlValue::Bool(flag) => JsonValue::Bool(flag),
        YamlValue::Number(number) => {
            if let Some(n) = number.as_u64() {
                JsonValue::Number(n.into())
            } else if let Some(n) = number.as_i64() {
                JsonValue::Number(n.into())
            } else {
                number
                    .as_f64()
                    .and_then(Number::from_f64)
                    .map(JsonValue::Number)
                    .unwrap_or(JsonValue::Null)
            }
        }
        YamlValue::String(text) => JsonValue::String(text),
        YamlValue::Sequence(items) => {
            JsonValue::Array(items.into_iter().map(yaml_to_json).collect())
        }
        YamlValue::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (key, value) in mapping {
                map.insert(yaml_key(key), yaml_to_json(value));
            }
            JsonValue::Object(map)
        }
        YamlValue::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_key(key: YamlValue) -> String {
    match key {
        YamlValue::String(text) => text,
        YamlValue::Number(number) => number.to_string(),
        YamlValue::Bool(flag) => flag.to_string(),
        YamlValue::Null => "null".to_string(),
        other => yaml_to_json(other).to_string(),
    }
}
