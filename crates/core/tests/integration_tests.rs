//! Integration tests for choice-prompt-core
//!
//! These tests exercise the style file loading and process execution
//! workflows end-to-end through the public API.

use choice_prompt_core::{
    config::get_style_path,
    error::Error,
    file_handling::get_style_definition,
    style_definitions::{ColorDefinition, StyleDefinition},
};
use std::io::Write;
use tempfile::NamedTempFile;

/// Test loading a complete style configuration
#[test]
fn test_complete_style_configuration_workflow() {
    let yaml_content = r#"
highlight:
  foreground_color:
    name: "green"
  attributes: ["bold"]

normal:
  foreground_color:
    ansi: 240

prompt:
  attributes: ["bold", "underlined"]

help:
  foreground_color:
    rgb: [128, 128, 128]
  background_color:
    name: "black"
  attributes: ["dim"]
"#;

    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{yaml_content}").unwrap();
    let temp_path = get_style_path(&Some(temp_file.path().to_str().unwrap().to_string()));

    let style = get_style_definition(&temp_path).unwrap().unwrap();

    assert_eq!(
        style.highlight,
        Some(StyleDefinition {
            foreground_color: Some(ColorDefinition {
                name: Some("green".to_string()),
                ..Default::default()
            }),
            background_color: None,
            attributes: Some(vec!["bold".to_string()]),
        })
    );

    let normal = style.normal.unwrap();
    assert_eq!(normal.foreground_color.unwrap().ansi, Some(240));
    assert!(normal.attributes.is_none());

    let prompt = style.prompt.unwrap();
    assert!(prompt.foreground_color.is_none());
    assert_eq!(
        prompt.attributes,
        Some(vec!["bold".to_string(), "underlined".to_string()])
    );

    let help = style.help.unwrap();
    assert_eq!(help.foreground_color.unwrap().rgb, Some((128, 128, 128)));
    assert_eq!(
        help.background_color.unwrap().name,
        Some("black".to_string())
    );
}

/// Test that a style file with the wrong shape is reported with its path
#[test]
fn test_wrong_shape_reports_path() {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "highlight:\n  foreground_color: 12\n").unwrap();
    let temp_path = temp_file.path().to_str().unwrap().to_string();

    let error = get_style_definition(&temp_path).unwrap_err();
    match &error {
        Error::Yaml { path, action, .. } => {
            assert_eq!(path, &temp_path);
            assert_eq!(action, "reading");
        }
        other => panic!("Expected a YAML error, got {other:?}"),
    }
    assert!(error.to_string().contains(&temp_path));
}

#[cfg(unix)]
#[test]
fn test_prefixed_execution_reports_exit_code() {
    use choice_prompt_core::execution::execute_with_prefix;
    use std::process::Command;

    let mut ok = Command::new("sh");
    ok.args(["-c", "printf 'line one\\nline two\\n'"]);
    assert!(execute_with_prefix(ok, "  Copilot> ").is_ok());

    let mut failing = Command::new("sh");
    failing.args(["-c", "echo oops >&2; exit 1"]);
    let error = execute_with_prefix(failing, "  Copilot> ").unwrap_err();
    assert!(matches!(
        error,
        Error::SubProcessExit { ref status, .. } if status.code() == Some(1)
    ));
}
