use crate::cli::options::{GenerateOptions, TemplateSource};
use crate::parameter_file::{serialize, GenerateError, ParameterFileGenerator};
use crate::template::TemplateLoader;
use tracing::info;

/// Load the template, build the selected parameter file and render it.
pub fn generate(options: &GenerateOptions) -> Result<String, GenerateError> {
    let loader = TemplateLoader::with_format(options.format);

    let template = match &options.source {
        TemplateSource::File(path) => {
            info!("Reading template {}", path.display());
            loader.load(path)?
        }
        TemplateSource::Stdin => {
            info!("Reading template from <stdin>");
            loader.load_from_reader(std::io::stdin().lock())?
        }
    };

    let generator = ParameterFileGenerator::from_template(&template);
    let document = generator.generate_for(options.selection);
    Ok(serialize(&document, options.style)?)
}
