use crate::template::ParameterDescriptor;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::debug;

// Defaults shaped like `fn(args)` are template expressions, e.g.
// `[resourceGroup().location]`. This is a heuristic, not a parser.
static CALL_EXPRESSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(.*\)").expect("call expression pattern is valid"));

/// True when the parameter has no usable default: `defaultValue` is unset or
/// the empty string.
pub fn is_mandatory(parameter: &ParameterDescriptor) -> bool {
    match parameter.default_value() {
        None => true,
        Some(Value::String(s)) => s.is_empty(),
        Some(_) => false,
    }
}

/// True when the default is absent, empty, or a literal rather than a call
/// expression. Non-string defaults never count as expressions.
pub fn is_non_referenced(parameter: &ParameterDescriptor) -> bool {
    if is_mandatory(parameter) {
        return true;
    }
    match parameter.default_value() {
        Some(Value::String(s)) => !CALL_EXPRESSION.is_match(s),
        _ => true,
    }
}

pub fn mandatory(all: &[ParameterDescriptor]) -> Vec<ParameterDescriptor> {
    all.iter().filter(|p| is_mandatory(p)).cloned().collect()
}

pub fn non_referenced(all: &[ParameterDescriptor]) -> Vec<ParameterDescriptor> {
    all.iter().filter(|p| is_non_referenced(p)).cloned().collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassificationSummary {
    pub total: usize,
    pub mandatory: usize,
    pub non_referenced: usize,
}

/// The All, Mandatory and NonReferenced sets of one template, computed once.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSets {
    all: Vec<ParameterDescriptor>,
    mandatory: Vec<ParameterDescriptor>,
    non_referenced: Vec<ParameterDescriptor>,
}

impl ParameterSets {
    pub fn classify(all: Vec<ParameterDescriptor>) -> Self {
        let sets = Self {
            mandatory: mandatory(&all),
            non_referenced: non_referenced(&all),
            all,
        };

        let summary = sets.summary();
        debug!(
            "Classified {} parameters: {} mandatory, {} non-referenced",
            summary.total, summary.mandatory, summary.non_referenced
        );
        sets
    }

    pub fn all(&self) -> &[ParameterDescriptor] {
        &self.all
    }

    pub fn mandatory(&self) -> &[ParameterDescriptor] {
        &self.mandatory
    }

    pub fn non_referenced(&self) -> &[ParameterDescriptor] {
        &self.non_referenced
    }

    pub fn summary(&self) -> ClassificationSummary {
        ClassificationSummary {
            total: self.all.len(),
            mandatory: self.mandatory.len(),
            non_referenced: self.non_referenced.len(),
        }
    }
}
