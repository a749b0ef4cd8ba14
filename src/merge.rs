use crate::error::{CliError, Result};
use serde_json::Value;
use std::path::Path;

/// Injects the generated mapping root into `.templates[0].mappings.things`
/// of an existing document, or passes the root through unchanged when no
/// base is given. The base document must contain exactly one template whose
/// `mappings.things` list is empty.
pub fn merge_into_base(base_path: Option<&Path>, generated: Value) -> Result<Value> {
    let Some(path) = base_path else {
        return Ok(generated);
    };

    if !path.is_file() {
        return Err(CliError::BaseFile("Base file does not exist".into()));
    }

    let content = std::fs::read_to_string(path)?;
    let mut document: Value = serde_json::from_str(&content)?;

    if !document.is_object() {
        return Err(CliError::BaseFile("Bad JSON content file".into()));
    }

    let templates = match document.get_mut("templates") {
        Some(Value::Array(templates)) if templates.len() == 1 => templates,
        _ => {
            return Err(CliError::BaseFile(
                "'.templates' is not present or badly formatted".into(),
            ))
        }
    };

    let template = match templates.first_mut() {
        Some(Value::Object(template)) => template,
        _ => return Err(CliError::BaseFile("'.templates[0]' is badly formatted".into())),
    };

    let mappings = match template.get_mut("mappings") {
        Some(Value::Object(mappings)) => mappings,
        _ => {
            return Err(CliError::BaseFile(
                "'.templates[0].mappings' is badly formatted".into(),
            ))
        }
    };

    let things = match mappings.get_mut("things") {
        Some(Value::Array(things)) if things.is_empty() => things,
        _ => {
            return Err(CliError::BaseFile(
                "'.templates[0].mappings.things' is not present or badly formatted".into(),
            ))
        }
    };

    things.push(generated);
    Ok(document)
}
