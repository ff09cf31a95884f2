use anyhow::{Context, Result};
use clap::Parser;
use paramfile_gen::cli::{generate, init_tracing, GenerateOptions, ParamFileCli, TemplateSource};
use tracing::debug;

fn main() -> Result<()> {
    let cli = ParamFileCli::parse();
    init_tracing(cli.verbose);

    debug!("Starting paramfile-gen v{}", env!("CARGO_PKG_VERSION"));

    let options = GenerateOptions::from(&cli);
    let source = match &options.source {
        TemplateSource::File(path) => path.display().to_string(),
        TemplateSource::Stdin => "<stdin>".to_string(),
    };

    let text = generate(&options)
        .with_context(|| format!("Failed to generate parameter file from {source}"))?;
    println!("{text}");

    Ok(())
}
