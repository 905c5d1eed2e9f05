//! Local `$ref` dereferencing
//!
//! Produces a copy of a validated document in which every resolvable local
//! reference object is replaced by its (recursively dereferenced) target, so
//! rules see parameters, request bodies and schemas defined under
//! `components` or `definitions`.

use std::collections::{HashMap, HashSet};

use serde_json::{Map, Value as JsonValue};
use tracing::{debug, instrument, warn};

use crate::domain::value_objects::SpecDocument;

/// Maximum nesting of references followed from one reference object
const MAX_RESOLUTION_DEPTH: usize = 50;

/// Resolver for `#/...` references inside one document
pub struct RefResolver<'a> {
    root: &'a JsonValue,
    /// Resolved targets by reference
    cache: HashMap<String, JsonValue>,
    /// References currently being expanded, for cycle detection
    resolving: HashSet<String>,
    depth: usize,
}

impl<'a> RefResolver<'a> {
    pub fn new(root: &'a JsonValue) -> Self {
        Self {
            root,
            cache: HashMap::new(),
            resolving: HashSet::new(),
            depth: 0,
        }
    }

    /// Dereferenced copy of `doc`.
    ///
    /// Circular, external and dangling references are left as `$ref` objects.
    #[instrument(skip_all)]
    pub fn dereference(doc: &SpecDocument) -> SpecDocument {
        let mut resolver = RefResolver::new(doc.as_value());
        let resolved = resolver.resolve_value(doc.as_value());
        debug!(resolved_refs = resolver.cache.len(), "Dereferenced document");
        SpecDocument::new(resolved)
    }

    fn resolve_value(&mut self, value: &JsonValue) -> JsonValue {
        match value {
            JsonValue::Object(map) => {
                if let Some(JsonValue::String(reference)) = map.get("$ref")
                    && let Some(target) = self.resolve_ref(reference)
                {
                    return target;
                }
                let resolved: Map<String, JsonValue> = map
                    .iter()
                    .map(|(key, child)| (key.clone(), self.resolve_value(child)))
                    .collect();
                JsonValue::Object(resolved)
            }
            JsonValue::Array(items) => {
                JsonValue::Array(items.iter().map(|item| self.resolve_value(item)).collect())
            }
            scalar => scalar.clone(),
        }
    }

    fn resolve_ref(&mut self, reference: &str) -> Option<JsonValue> {
        if self.depth >= MAX_RESOLUTION_DEPTH {
            warn!(
                reference,
                max_depth = MAX_RESOLUTION_DEPTH,
                "Maximum $ref resolution depth exceeded"
            );
            return None;
        }

        if self.resolving.contains(reference) {
            debug!(reference, "Circular $ref left unresolved");
            return None;
        }

        if let Some(cached) = self.cache.get(reference) {
            return Some(cached.clone());
        }

        let root = self.root;
        let target = reference
            .strip_prefix('#')
            .and_then(|pointer| root.pointer(pointer))?;

        self.resolving.insert(reference.to_string());
        self.depth += 1;

        let resolved = self.resolve_value(target);

        self.depth -= 1;
        self.resolving.remove(reference);

        self.cache.insert(reference.to_string(), resolved.clone());
        Some(resolved)
    }
}
