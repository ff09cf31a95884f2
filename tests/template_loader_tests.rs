use paramfile_gen::{
    extract_parameters, GenerateError, ParameterFileGenerator, TemplateError, TemplateFormat,
    TemplateLoader,
};
use std::io::{Cursor, Write};

#[test]
fn test_load_missing_file() {
    let loader = TemplateLoader::new();
    let result = loader.load("tests/fixtures/templates/does_not_exist.json");

    match result.unwrap_err() {
        TemplateError::NotFound { path } => assert!(path.ends_with("does_not_exist.json")),
        other => panic!("Expected NotFound error, got: {other:?}"),
    }
}

#[test]
fn test_load_truncated_json() {
    let loader = TemplateLoader::new();
    let result = loader.load("tests/fixtures/templates/invalid.json");

    match result.unwrap_err() {
        TemplateError::Parse { format, .. } => assert_eq!(format, TemplateFormat::Json),
        other => panic!("Expected Parse error, got: {other:?}"),
    }
}

#[test]
fn test_generator_surfaces_not_found() {
    let result = ParameterFileGenerator::from_path("tests/fixtures/templates/missing.json");
    assert!(matches!(
        result,
        Err(GenerateError::Template(TemplateError::NotFound { .. }))
    ));
}

#[test]
fn test_load_from_temp_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"{{"parameters": {{"first": {{"type": "string"}}, "second": {{"type": "int"}}}}}}"#
    )
    .unwrap();

    let template = TemplateLoader::new().load(file.path()).unwrap();
    let names: Vec<_> = extract_parameters(&template)
        .iter()
        .map(|p| p.name().to_string())
        .collect();
    assert_eq!(names, vec!["first", "second"]);
}

#[test]
fn test_load_from_reader() {
    let content = r#"{"parameters": {"sku": {"type": "string", "defaultValue": "Basic"}}}"#;
    let template = TemplateLoader::new()
        .load_from_reader(Cursor::new(content))
        .unwrap();

    let params = extract_parameters(&template);
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].name(), "sku");
}

#[test]
fn test_forced_json_rejects_yaml() {
    let loader = TemplateLoader::with_format(TemplateFormat::Json);
    let result = loader.load("tests/fixtures/templates/azuredeploy.yaml");
    assert!(matches!(result, Err(TemplateError::Parse { .. })));
}

#[test]
fn test_unknown_format() {
    let loader = TemplateLoader::new();
    let result = loader.parse("key: [unterminated", TemplateFormat::Auto);
    assert!(matches!(result, Err(TemplateError::UnknownFormat)));
}

#[test]
fn test_duplicate_keys_last_wins() {
    let content = r#"{"parameters": {"p": {"defaultValue": "a"}, "p": {"type": "string"}}}"#;
    let template = TemplateLoader::new()
        .parse(content, TemplateFormat::Json)
        .unwrap();

    let params = extract_parameters(&template);
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].default_value(), None);
}
