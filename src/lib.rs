//! paramfile-gen - ARM deployment parameter file scaffolding
//!
//! Reads an infrastructure template, classifies its declared parameters and
//! produces a parameter file with an empty value slot for each selected one.

pub mod cli;
pub mod parameter_file;
pub mod template;

pub use parameter_file::{
    build, serialize, GenerateError, OutputStyle, ParameterFileDocument, ParameterFileGenerator,
    ParameterSelection, ParameterValue, SerializeError, CONTENT_VERSION, PARAMETER_FILE_SCHEMA,
};
pub use template::{
    extract_parameters, ParameterDescriptor, ParameterSets, Template, TemplateError,
    TemplateFormat, TemplateLoader,
};
