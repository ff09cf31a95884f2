use crate::parameter_file::{GenerateError, ParameterFileDocument, ParameterValue};
use crate::template::{
    extract_parameters, ParameterDescriptor, ParameterSets, Template, TemplateLoader,
};
use std::path::Path;
use tracing::{debug, info};

/// Which parameters end up in the generated file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParameterSelection {
    #[default]
    All,
    Mandatory,
    NonReferenced,
}

impl ParameterSelection {
    /// `only_mandatory` wins when both flags are set.
    pub fn from_flags(only_mandatory: bool, only_non_referenced: bool) -> Self {
        if only_mandatory {
            ParameterSelection::Mandatory
        } else if only_non_referenced {
            ParameterSelection::NonReferenced
        } else {
            ParameterSelection::All
        }
    }
}

/// Builds a parameter file with an empty value slot per parameter.
/// Later entries with the same name overwrite earlier ones.
pub fn build(parameters: &[ParameterDescriptor]) -> ParameterFileDocument {
    let mut document = ParameterFileDocument::new();
    for parameter in parameters {
        document
            .parameters
            .insert(parameter.name().to_string(), ParameterValue::empty());
    }
    document
}

/// Parameter file generator for one template. Classification happens once, at
/// construction; every `generate` call builds a fresh document from it.
#[derive(Debug, Clone)]
pub struct ParameterFileGenerator {
    sets: ParameterSets,
}

impl ParameterFileGenerator {
    pub fn from_template(template: &Template) -> Self {
        Self {
            sets: ParameterSets::classify(extract_parameters(template)),
        }
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, GenerateError> {
        let template = TemplateLoader::new().load(path)?;
        Ok(Self::from_template(&template))
    }

    pub fn parameter_sets(&self) -> &ParameterSets {
        &self.sets
    }

    pub fn all_parameters(&self) -> &[ParameterDescriptor] {
        self.sets.all()
    }

    pub fn mandatory_parameters(&self) -> &[ParameterDescriptor] {
        self.sets.mandatory()
    }

    pub fn non_referenced_parameters(&self) -> &[ParameterDescriptor] {
        self.sets.non_referenced()
    }

    pub fn generate(
        &self,
        only_mandatory: bool,
        only_non_referenced: bool,
    ) -> ParameterFileDocument {
        self.generate_for(ParameterSelection::from_flags(
            only_mandatory,
            only_non_referenced,
        ))
    }

    pub fn generate_for(&self, selection: ParameterSelection) -> ParameterFileDocument {
        let parameters = match selection {
            ParameterSelection::All => self.sets.all(),
            ParameterSelection::Mandatory => self.sets.mandatory(),
            ParameterSelection::NonReferenced => self.sets.non_referenced(),
        };

        debug!("Building parameter file from {selection:?} selection");
        let document = build(parameters);
        info!(
            "Generated parameter file with {} of {} parameters",
            document.parameters.len(),
            self.sets.all().len()
        );
        document
    }
}
