use crate::template::TemplateError;
use serde_json::Value;
use std::fmt;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// File name looked up next to the executable when no template path is given.
pub const DEFAULT_TEMPLATE_NAME: &str = "azuredeploy.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TemplateFormat {
    /// Detect from the content
    #[default]
    Auto,
    Json,
    Yaml,
}

impl fmt::Display for TemplateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateFormat::Auto => write!(f, "auto"),
            TemplateFormat::Json => write!(f, "JSON"),
            TemplateFormat::Yaml => write!(f, "YAML"),
        }
    }
}

/// A parsed infrastructure template. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    root: Value,
}

impl Template {
    /// Wraps an already parsed document. The root must be an object.
    pub fn from_value(root: Value) -> Result<Self, TemplateError> {
        if !root.is_object() {
            return Err(TemplateError::InvalidShape {
                found: value_kind(&root).to_string(),
            });
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Value {
        &self.root
    }

    /// The top-level `parameters` member, if present.
    pub fn parameters(&self) -> Option<&Value> {
        self.root.get("parameters")
    }
}

pub struct TemplateLoader {
    format: TemplateFormat,
}

impl TemplateLoader {
    pub fn new() -> Self {
        Self {
            format: TemplateFormat::Auto,
        }
    }

    pub fn with_format(format: TemplateFormat) -> Self {
        Self { format }
    }

    pub fn load(&self, path: impl AsRef<Path>) -> Result<Template, TemplateError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(TemplateError::NotFound {
                path: path.display().to_string(),
            });
        }

        debug!("Loading template from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| TemplateError::Io {
            path: path.display().to_string(),
            source,
        })?;

        self.parse(&content, self.format)
    }

    pub fn load_from_reader<R: Read>(&self, mut reader: R) -> Result<Template, TemplateError> {
        let mut content = String::new();
        reader
            .read_to_string(&mut content)
            .map_err(|source| TemplateError::Io {
                path: "<stdin>".to_string(),
                source,
            })?;

        self.parse(&content, self.format)
    }

    pub fn parse(&self, content: &str, format: TemplateFormat) -> Result<Template, TemplateError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);
        let detected_format = match format {
            TemplateFormat::Auto => self.detect_format(content)?,
            format => format,
        };

        let root: Value = match detected_format {
            TemplateFormat::Json => {
                serde_json::from_str(content).map_err(|e| TemplateError::Parse {
                    format: TemplateFormat::Json,
                    reason: e.to_string(),
                })?
            }
            TemplateFormat::Yaml => {
                let yaml: serde_yaml::Value =
                    serde_yaml::from_str(content).map_err(|e| TemplateError::Parse {
                        format: TemplateFormat::Yaml,
                        reason: e.to_string(),
                    })?;
                serde_json::to_value(yaml).map_err(|e| TemplateError::Parse {
                    format: TemplateFormat::Yaml,
                    reason: e.to_string(),
                })?
            }
            TemplateFormat::Auto => unreachable!("Auto format should be resolved by now"),
        };

        Template::from_value(root)
    }

    fn detect_format(&self, content: &str) -> Result<TemplateFormat, TemplateError> {
        let trimmed = content.trim();

        if trimmed.starts_with('{') {
            Ok(TemplateFormat::Json)
        } else if trimmed.starts_with("---") {
            Ok(TemplateFormat::Yaml)
        } else if serde_json::from_str::<Value>(content).is_ok() {
            Ok(TemplateFormat::Json)
        } else if serde_yaml::from_str::<serde_yaml::Value>(content).is_ok() {
            Ok(TemplateFormat::Yaml)
        } else {
            Err(TemplateError::UnknownFormat)
        }
    }
}

impl Default for TemplateLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// `azuredeploy.json` in the directory of the running executable, or in the
/// working directory when the executable location is unavailable.
pub fn default_template_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_TEMPLATE_NAME)
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_json() {
        let loader = TemplateLoader::new();
        let template = loader
            .parse(r#"{"parameters": {"a": {}}}"#, TemplateFormat::Auto)
            .unwrap();
        assert!(template.parameters().is_some());
    }

    #[test]
    fn test_detects_yaml() {
        let loader = TemplateLoader::new();
        let content = "---\nparameters:\n  sku:\n    type: string\n";
        let template = loader.parse(content, TemplateFormat::Auto).unwrap();
        assert_eq!(template.root()["parameters"]["sku"]["type"], "string");
    }

    #[test]
    fn test_json_with_bom() {
        let loader = TemplateLoader::new();
        let template = loader
            .parse("\u{feff}{\"parameters\": {}}", TemplateFormat::Auto)
            .unwrap();
        assert_eq!(template.parameters(), Some(&serde_json::json!({})));
    }

    #[test]
    fn test_invalid_json() {
        let loader = TemplateLoader::new();
        match loader.parse("{ invalid json", TemplateFormat::Json) {
            Err(TemplateError::Parse { format, .. }) => assert_eq!(format, TemplateFormat::Json),
            other => panic!("Expected Parse error, got: {other:?}"),
        }
    }

    #[test]
    fn test_non_object_root_rejected() {
        let loader = TemplateLoader::new();
        match loader.parse("[1, 2, 3]", TemplateFormat::Json) {
            Err(TemplateError::InvalidShape { found }) => assert_eq!(found, "array"),
            other => panic!("Expected InvalidShape error, got: {other:?}"),
        }
    }

    #[test]
    fn test_default_template_path_name() {
        let path = default_template_path();
        assert_eq!(path.file_name().unwrap(), DEFAULT_TEMPLATE_NAME);
    }
}
