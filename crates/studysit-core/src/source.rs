use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;

/// Load a JSON or YAML document from disk.
/// Detects format by file extension; unknown extensions try YAML, then JSON.
pub fn load_document<T: DeserializeOwned>(path: &Path, kind: &str) -> Result<T> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}: {}", kind, path.display()))?;

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("");

    let document = match ext {
        "yaml" | "yml" => serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse YAML {}", kind))?,
        "json" => serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse JSON {}", kind))?,
        _ => serde_yaml::from_str(&content)
            .or_else(|_| serde_json::from_str(&content))
            .with_context(|| format!("Failed to parse {} (tried YAML and JSON)", kind))?,
    };

    tracing::debug!("Loaded {} from {}", kind, path.display());
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use std::io::Write;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Doc {
        title: String,
    }

    fn write_temp(suffix: &str, body: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(body.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_by_extension() {
        let json = write_temp(".json", r#"{"title": "Quiet Room"}"#);
        let doc: Doc = load_document(json.path(), "document").unwrap();
        assert_eq!(doc.title, "Quiet Room");

        let yaml = write_temp(".yml", "title: Loud Hall\n");
        let doc: Doc = load_document(yaml.path(), "document").unwrap();
        assert_eq!(doc.title, "Loud Hall");
    }

    #[test]
    fn unknown_extension_falls_back() {
        let file = write_temp(".txt", r#"{"title": "Garden Desk"}"#);
        let doc: Doc = load_document(file.path(), "document").unwrap();
        assert_eq!(doc.title, "Garden Desk");
    }

    #[test]
    fn reports_missing_file() {
        let err = load_document::<Doc>(Path::new("/nonexistent/catalog.json"), "catalog")
            .unwrap_err();
        assert!(err.to_string().contains("Failed to read catalog"));
    }

    #[test]
    fn reports_malformed_json() {
        let file = write_temp(".json", "{ not json");
        let err = load_document::<Doc>(file.path(), "submission").unwrap_err();
        assert!(err.to_string().contains("Failed to parse JSON submission"));
    }
}
