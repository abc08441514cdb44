//! Reading of the choice-prompt style file.

use std::fs::File;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::style_definitions::StyleConfigDefinition;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Reads the style definition from disk.
///
/// Returns `None` if the file doesn't exist, so callers fall back to the
/// built-in style.
///
/// # Errors
///
/// Returns an error if:
/// - The file exists but cannot be read
/// - The file contains invalid YAML
/// - The YAML doesn't match the expected structure
pub fn get_style_definition(style_path: &str) -> Result<Option<StyleConfigDefinition>> {
    if !Path::exists(Path::new(style_path)) {
        debug!("No style file at `{}`", style_path);
        return Ok(None);
    }

    let reader = get_reader("style", style_path)?;

    // An empty file is valid YAML for "no overrides" but serde_yaml rejects it as a struct
    let metadata = reader
        .metadata()
        .map_err(|e| Error::io_error("style".to_string(), style_path.to_string(), e))?;
    if metadata.len() == 0 {
        return Ok(Some(StyleConfigDefinition::default()));
    }

    let parsed: serde_yaml::Result<StyleConfigDefinition> = serde_yaml::from_reader(reader);

    match parsed {
        Ok(parsed) => Ok(Some(parsed)),
        Err(e) => Err(Error::yaml_error(
            "reading".to_string(),
            "style".to_string(),
            style_path.to_string(),
            e,
        )),
    }
}
