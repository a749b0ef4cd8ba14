use crate::error::Result;
use colored::Colorize;
use serde_json::Value;
use std::path::Path;

/// Serializes the final document with 2-space indentation, to the given
/// file or to stdout.
pub fn write_document(document: &Value, path: Option<&Path>) -> Result<()> {
    let content = serde_json::to_string_pretty(document)?;

    match path {
        Some(path) => {
            std::fs::write(path, content)?;
            print_success(&format!(
                "The JSON has been saved under the name: {}",
                path.display()
            ));
        }
        None => println!("{content}"),
    }

    Ok(())
}

pub fn print_success(msg: &str) {
    eprintln!("{} {}", "OK".green().bold(), msg);
}

pub fn print_warning(msg: &str) {
    eprintln!("{} {}", "WARN".yellow().bold(), msg);
}

pub fn print_error(msg: &str) {
    eprintln!("{} {}", "ERROR".red().bold(), msg);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_write_document_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mapping.json");
        let document = json!({"id": "DeviceMapping", "things": []});

        write_document(&document, Some(&path)).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let parsed: Value = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, document);
        // Pretty output, not a single line.
        assert!(content.contains('\n'));
    }

    #[test]
    fn test_write_document_into_missing_directory_fails() {
        let document = json!({});
        let result = write_document(&document, Some(Path::new("/nonexistent/dir/out.json")));
        assert!(result.is_err());
    }
}
