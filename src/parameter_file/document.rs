use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

pub const PARAMETER_FILE_SCHEMA: &str =
    "https://schema.management.azure.com/schemas/2019-04-01/deploymentParameters.json#";
pub const CONTENT_VERSION: &str = "1.0.0.0";

/// A deployment parameter file: parameter name to an unfilled value slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterFileDocument {
    #[serde(rename = "$schema")]
    pub schema: String,
    pub content_version: String,
    pub parameters: IndexMap<String, ParameterValue>,
}

impl ParameterFileDocument {
    pub fn new() -> Self {
        Self {
            schema: PARAMETER_FILE_SCHEMA.to_string(),
            content_version: CONTENT_VERSION.to_string(),
            parameters: IndexMap::new(),
        }
    }

    pub fn parameter_names(&self) -> impl Iterator<Item = &str> {
        self.parameters.keys().map(String::as_str)
    }
}

impl Default for ParameterFileDocument {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ParameterValue {
    pub value: String,
}

impl ParameterValue {
    pub fn empty() -> Self {
        Self::default()
    }
}
