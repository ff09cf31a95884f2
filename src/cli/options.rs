use crate::parameter_file::{OutputStyle, ParameterSelection};
use crate::template::{default_template_path, TemplateFormat};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Generate an ARM deployment parameter file from a template
#[derive(Parser, Debug)]
#[command(name = "paramfile-gen")]
#[command(about = "Scaffold an ARM deployment parameter file from a template")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct ParamFileCli {
    /// Template file (azuredeploy.json next to the executable if omitted, - for stdin)
    pub path: Option<PathBuf>,

    /// Only include parameters without a default value
    #[arg(long, visible_alias = "only-mandatory")]
    pub only_mandatory_parameter: bool,

    /// Only include parameters whose default is not an expression call.
    /// Ignored when --only-mandatory-parameter is set
    #[arg(long, visible_alias = "only-non-referenced")]
    pub only_non_referenced_parameter: bool,

    /// Template input format
    #[arg(long, value_enum, default_value = "auto")]
    pub format: TemplateFormat,

    /// Emit single-line JSON
    #[arg(long)]
    pub compact: bool,

    /// Enable verbose output on stderr
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateSource {
    File(PathBuf),
    Stdin,
}

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub source: TemplateSource,
    pub format: TemplateFormat,
    pub selection: ParameterSelection,
    pub style: OutputStyle,
    pub verbose: u8,
}

impl From<&ParamFileCli> for GenerateOptions {
    fn from(cli: &ParamFileCli) -> Self {
        let source = match &cli.path {
            Some(path) if path.as_path() == Path::new("-") => TemplateSource::Stdin,
            Some(path) => TemplateSource::File(path.clone()),
            None => TemplateSource::File(default_template_path()),
        };

        Self {
            source,
            format: cli.format,
            selection: ParameterSelection::from_flags(
                cli.only_mandatory_parameter,
                cli.only_non_referenced_parameter,
            ),
            style: if cli.compact {
                OutputStyle::Compact
            } else {
                OutputStyle::Pretty
            },
            verbose: cli.verbose,
        }
    }
}
