use crate::template::Template;
use serde_json::{Map, Value};
use tracing::{debug, trace, warn};

/// One parameter declared by a template.
///
/// Every declared property (`type`, `defaultValue`, `metadata`, ...) is kept
/// as-is; only `name` and `defaultValue` drive classification.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterDescriptor {
    name: String,
    properties: Map<String, Value>,
}

impl ParameterDescriptor {
    pub fn new(name: impl Into<String>, properties: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            properties,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn properties(&self) -> &Map<String, Value> {
        &self.properties
    }

    /// The declared `defaultValue`. An explicit `null` counts as not set.
    pub fn default_value(&self) -> Option<&Value> {
        self.properties
            .get("defaultValue")
            .filter(|value| !value.is_null())
    }

    pub fn parameter_type(&self) -> Option<&str> {
        self.properties.get("type").and_then(Value::as_str)
    }
}

/// Walks the template's `parameters` object in declaration order.
///
/// A template without a `parameters` object yields no parameters.
pub fn extract_parameters(template: &Template) -> Vec<ParameterDescriptor> {
    let Some(parameters) = template.parameters().and_then(Value::as_object) else {
        debug!("Template declares no parameters object");
        return Vec::new();
    };

    let descriptors: Vec<ParameterDescriptor> = parameters
        .iter()
        .map(|(name, declaration)| {
            let properties = match declaration {
                Value::Object(properties) => properties.clone(),
                other => {
                    warn!("Parameter '{name}' is declared as {other}, expected an object");
                    Map::new()
                }
            };
            trace!("Extracted parameter '{name}'");
            ParameterDescriptor::new(name.clone(), properties)
        })
        .collect();

    debug!("Extracted {} parameters", descriptors.len());
    descriptors
}
