//! Structural validation of OpenAPI 3.x and Swagger 2.0 documents

use serde_json::Value as JsonValue;
use tracing::{debug, instrument, warn};

use crate::domain::traits::{SpecValidator, ValidationFailure};
use crate::domain::value_objects::{SpecDocument, SpecNode};

/// Version family of a document that passed the version check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecVersion {
    Swagger2,
    OpenApi30,
    OpenApi31,
}

/// Default validator: required fields, version, path keys, local `$ref`
/// resolution, and for 3.1 documents the typed model from `oas3`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StructuralValidator;

impl StructuralValidator {
    pub fn new() -> Self {
        Self
    }

    fn detect_version(root: SpecNode<'_>) -> Result<SpecVersion, ValidationFailure> {
        if let Some(swagger) = root.get("swagger").as_str() {
            return if swagger == "2.0" {
                Ok(SpecVersion::Swagger2)
            } else {
                Err(ValidationFailure::new(format!(
                    "Unsupported Swagger version: {}. Supported versions are 2.0, 3.0.x and 3.1.x",
                    swagger
                )))
            };
        }

        match root.get("openapi") {
            SpecNode::Absent => Err(ValidationFailure::new(
                "Document is not a valid API definition: missing 'openapi' or 'swagger' version field",
            )),
            node => match node.as_str() {
                Some(version) if version.starts_with("3.0.") => Ok(SpecVersion::OpenApi30),
                Some(version) if version.starts_with("3.1.") => Ok(SpecVersion::OpenApi31),
                Some(version) => Err(ValidationFailure::new(format!(
                    "Unsupported OpenAPI version: {}. Supported versions are 2.0, 3.0.x and 3.1.x",
                    version
                ))),
                None => Err(ValidationFailure::new(
                    "OpenAPI version number must be a string",
                )),
            },
        }
    }

    fn check_info(root: SpecNode<'_>) -> Result<(), ValidationFailure> {
        let info = root.get("info");
        if !info.is_mapping() {
            return Err(ValidationFailure::new(
                "Missing required property 'info' at root",
            ));
        }
        for field in ["title", "version"] {
            if info.get(field).as_str().is_none() {
                return Err(ValidationFailure::new(format!(
                    "Missing required property '{}' at info",
                    field
                )));
            }
        }
        Ok(())
    }

    fn check_paths(root: SpecNode<'_>, version: SpecVersion) -> Result<(), ValidationFailure> {
        let paths = root.get("paths");
        match paths {
            SpecNode::Absent if version == SpecVersion::OpenApi31 => return Ok(()),
            SpecNode::Mapping(_) => {}
            SpecNode::Absent => {
                return Err(ValidationFailure::new(
                    "Missing required property 'paths' at root",
                ));
            }
            _ => return Err(ValidationFailure::new("'paths' must be an object")),
        }

        for (path, item) in paths.entries() {
            if !path.starts_with('/') {
                return Err(ValidationFailure::new(format!(
                    "Path '{}' must begin with a forward slash",
                    path
                )));
            }
            if !item.is_mapping() {
                return Err(ValidationFailure::new(format!(
                    "Path item '{}' must be an object",
                    path
                )));
            }
        }
        Ok(())
    }

    fn check_references(doc: &SpecDocument) -> Result<(), ValidationFailure> {
        let mut references = Vec::new();
        collect_references(doc.as_value(), &mut references);
        debug!(reference_count = references.len(), "Resolving $ref pointers");

        for reference in references {
            let Some(pointer) = reference.strip_prefix('#') else {
                return Err(ValidationFailure::new(format!(
                    "Error resolving $ref pointer \"{}\": external references are not supported",
                    reference
                )));
            };
            if doc.as_value().pointer(pointer).is_none() {
                return Err(ValidationFailure::new(format!(
                    "Error resolving $ref pointer \"{}\": target does not exist",
                    reference
                )));
            }
        }
        Ok(())
    }

    /// `oas3` models 3.1 only; 3.0 keywords such as boolean `exclusiveMinimum` do not fit it
    fn check_openapi31_model(doc: &SpecDocument) -> Result<(), ValidationFailure> {
        oas3::from_json(&doc.to_compact_string())
            .map(|_| ())
            .map_err(|e| ValidationFailure::new(format!("Invalid OpenAPI 3.1 document: {}", e)))
    }
}

impl SpecValidator for StructuralValidator {
    #[instrument(skip_all)]
    fn validate(&self, doc: &SpecDocument) -> Result<(), ValidationFailure> {
        let root = doc.root();
        if !root.is_mapping() {
            warn!("Specification root is not an object");
            return Err(ValidationFailure::new(
                "Document is not a valid API definition: root must be an object",
            ));
        }

        let version = Self::detect_version(root)?;
        debug!(?version, "Detected specification version");

        Self::check_info(root)?;
        Self::check_paths(root, version)?;
        Self::check_references(doc)?;

        if version == SpecVersion::OpenApi31 {
            Self::check_openapi31_model(doc)?;
        }

        Ok(())
    }
}

fn collect_references<'a>(value: &'a JsonValue, out: &mut Vec<&'a str>) {
    match value {
        JsonValue::Object(map) => {
            for (key, child) in map {
                match child {
                    JsonValue::String(target) if key == "$ref" => out.push(target.as_str()),
                    _ => collect_references(child, out),
                }
            }
        }
        JsonValue::Array(items) => {
            for item in items {
                collect_references(item, out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn validate(value: JsonValue) -> Result<(), ValidationFailure> {
        StructuralValidator::new().validate(&SpecDocument::new(value))
    }

    #[test]
    fn test_accepts_minimal_openapi3() {
        let result = validate(json!({
            "openapi": "3.0.3",
            "info": { "title": "Test API", "version": "1.0.0" },
            "paths": {}
        }));
        assert!(result.is_ok(), "{:?}", result);
    }

    #[test]
    fn test_accepts_openapi30_boolean_exclusive_minimum() {
        let result = validate(json!({
            "openapi": "3.0.3",
            "info": { "title": "Test API", "version": "1.0.0" },
            "paths": {
                "/items": {
                    "get": {
                        "parameters": [{
                            "name": "limit",
                            "in": "query",
                            "schema": {
                                "type": "integer",
                                "minimum": 0,
                                "exclusiveMinimum": true,
                                "nullable": true
                            }
                        }],
                        "responses": { "200": { "description": "ok" } }
                    }
                }
            }
        }));
        assert!(result.is_ok(), "{:?}", result);
    }

    #[test]
    fn test_accepts_minimal_swagger2() {
        let result = validate(json!({
            "swagger": "2.0",
            "info": { "title": "Legacy API", "version": "1.0" },
            "paths": {
                "/pets": { "get": { "responses": { "200": { "description": "ok" } } } }
            }
        }));
        assert!(result.is_ok(), "{:?}", result);
    }

    #[test]
    fn test_rejects_empty_object() {
        let err = validate(json!({})).unwrap_err();
        assert!(err.message.contains("version"));
    }

    #[test]
    fn test_rejects_non_object_root() {
        assert!(validate(json!("just a string")).is_err());
        assert!(validate(json!([1, 2, 3])).is_err());
    }

    #[test]
    fn test_rejects_unsupported_version() {
        let err = validate(json!({
            "openapi": "4.0.0",
            "info": { "title": "x", "version": "1" },
            "paths": {}
        }))
        .unwrap_err();
        assert!(err.message.contains("4.0.0"));
    }

    #[test]
    fn test_rejects_missing_info_title() {
        let err = validate(json!({
            "openapi": "3.0.0",
            "info": { "version": "1" },
            "paths": {}
        }))
        .unwrap_err();
        assert!(err.message.contains("title"));
    }

    #[test]
    fn test_paths_optional_only_for_31() {
        let base = |version: &str| {
            json!({
                "openapi": version,
                "info": { "title": "x", "version": "1" }
            })
        };
        assert!(validate(base("3.0.0")).is_err());
        assert!(validate(base("3.1.0")).is_ok());
    }

    #[test]
    fn test_rejects_path_without_leading_slash() {
        let err = validate(json!({
            "openapi": "3.0.0",
            "info": { "title": "x", "version": "1" },
            "paths": { "users": {} }
        }))
        .unwrap_err();
        assert!(err.message.contains("forward slash"));
    }

    #[test]
    fn test_rejects_dangling_reference() {
        let err = validate(json!({
            "openapi": "3.0.0",
            "info": { "title": "x", "version": "1" },
            "paths": {
                "/users": {
                    "get": {
                        "responses": {
                            "200": {
                                "description": "ok",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/Missing" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }))
        .unwrap_err();
        assert!(err.message.contains("#/components/schemas/Missing"));
    }

    #[test]
    fn test_resolves_existing_reference() {
        let result = validate(json!({
            "openapi": "3.0.0",
            "info": { "title": "x", "version": "1" },
            "paths": {
                "/users": {
                    "get": {
                        "responses": {
                            "200": {
                                "description": "ok",
                                "content": {
                                    "application/json": {
                                        "schema": { "$ref": "#/components/schemas/User" }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "components": {
                "schemas": {
                    "User": { "type": "object", "properties": { "name": { "type": "string" } } }
                }
            }
        }));
        assert!(result.is_ok(), "{:?}", result);
    }
}
