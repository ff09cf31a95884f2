use crate::parameter_file::{ParameterFileDocument, SerializeError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputStyle {
    #[default]
    Pretty,
    Compact,
}

/// Renders the document as JSON. serde_json imposes no nesting depth limit.
pub fn serialize(
    document: &ParameterFileDocument,
    style: OutputStyle,
) -> Result<String, SerializeError> {
    let text = match style {
        OutputStyle::Pretty => serde_json::to_string_pretty(document)?,
        OutputStyle::Compact => serde_json::to_string(document)?,
    };
    Ok(text)
}
