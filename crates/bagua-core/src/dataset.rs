//! JSON dataset loader.
//!
//! Loads palace datasets from JSON files, provides the bundled Eight
//! Palaces data, and validates datasets for common issues.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::Dataset;

/// The Jing Fang Eight Palaces, shipped with the binary.
const BUNDLED_JSON: &str = include_str!("../data/palaces.json");

/// The bundled Eight Palaces dataset.
pub fn bundled() -> Result<Dataset> {
    parse_dataset_str(BUNDLED_JSON, Path::new("<bundled>"))
}

/// The bundled dataset as raw JSON, for `bagua init`.
pub fn bundled_json() -> &'static str {
    BUNDLED_JSON
}

/// Parse a dataset file.
pub fn parse_dataset(path: &Path) -> Result<Dataset> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset file: {}", path.display()))?;

    parse_dataset_str(&content, path)
}

/// Parse a JSON string into a `Dataset` (useful for testing).
pub fn parse_dataset_str(content: &str, source_path: &Path) -> Result<Dataset> {
    let dataset: Dataset = serde_json::from_str(content)
        .with_context(|| format!("failed to parse dataset JSON: {}", source_path.display()))?;

    tracing::debug!(
        source = %source_path.display(),
        palaces = dataset.palaces.len(),
        hexagrams = dataset.hexagram_count(),
        "loaded dataset"
    );

    Ok(dataset)
}

/// Load the dataset at `path`, or the bundled one when no path is given.
pub fn load(path: Option<&Path>) -> Result<Dataset> {
    match path {
        Some(p) => parse_dataset(p),
        None => bundled(),
    }
}

/// A warning from dataset validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The palace the warning is about (if applicable).
    pub palace: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a dataset for issues that break lookup or testing.
pub fn validate_dataset(dataset: &Dataset) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Palace names are lookup keys
    let mut seen = HashSet::new();
    for palace in &dataset.palaces {
        if !seen.insert(palace.name.as_str()) {
            warnings.push(ValidationWarning {
                palace: Some(palace.name.clone()),
                message: format!("duplicate palace name: {}", palace.name),
            });
        }
    }

    for palace in &dataset.palaces {
        if palace.name.trim().is_empty() {
            warnings.push(ValidationWarning {
                palace: None,
                message: "palace name is empty".into(),
            });
        }
        if palace.hexagrams.is_empty() {
            warnings.push(ValidationWarning {
                palace: Some(palace.name.clone()),
                message: "palace has no hexagrams".into(),
            });
        }
    }

    if let Some(expected) = dataset.line_count() {
        for palace in &dataset.palaces {
            for hexagram in &palace.hexagrams {
                if hexagram.lines.len() != expected {
                    warnings.push(ValidationWarning {
                        palace: Some(palace.name.clone()),
                        message: format!(
                            "hexagram {} has {} lines, expected {expected}",
                            hexagram.name,
                            hexagram.lines.len()
                        ),
                    });
                }
            }
        }
    }

    let mut seen_hexagrams = HashSet::new();
    for palace in &dataset.palaces {
        for hexagram in &palace.hexagrams {
            if !seen_hexagrams.insert(hexagram.name.as_str()) {
                warnings.push(ValidationWarning {
                    palace: Some(palace.name.clone()),
                    message: format!("hexagram {} appears more than once", hexagram.name),
                });
            }
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Line;
    use std::path::PathBuf;

    const SMALL_JSON: &str = r#"
{
  "palaces": [
    {
      "name": "乾宫",
      "hexagrams": [
        { "name": "乾为天", "lines": [1, 1, 1, 1, 1, 1] },
        { "name": "天风姤", "lines": [0, 1, 1, 1, 1, 1] }
      ]
    }
  ]
}
"#;

    #[test]
    fn parse_valid_json() {
        let dataset = parse_dataset_str(SMALL_JSON, &PathBuf::from("small.json")).unwrap();
        assert_eq!(dataset.palaces.len(), 1);
        assert_eq!(dataset.palaces[0].name, "乾宫");
        assert_eq!(dataset.palaces[0].hexagrams[1].lines[0], Line::Yin);
        assert!(validate_dataset(&dataset).is_empty());
    }

    #[test]
    fn parse_malformed_json() {
        let result = parse_dataset_str("{ \"palaces\": [ ", &PathBuf::from("bad.json"));
        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("bad.json"));
    }

    #[test]
    fn parse_rejects_non_binary_lines() {
        let json = r#"{"palaces":[{"name":"x","hexagrams":[{"name":"y","lines":[1,2]}]}]}"#;
        assert!(parse_dataset_str(json, &PathBuf::from("x.json")).is_err());
    }

    #[test]
    fn parse_empty_dataset() {
        let dataset = parse_dataset_str(r#"{"palaces": []}"#, &PathBuf::from("e.json")).unwrap();
        assert!(dataset.is_empty());
        assert!(validate_dataset(&dataset).is_empty());
    }

    #[test]
    fn bundled_has_eight_palaces_of_eight() {
        let dataset = bundled().unwrap();
        assert_eq!(dataset.palaces.len(), 8);
        assert!(dataset.palaces.iter().all(|p| p.hexagrams.len() == 8));
        assert_eq!(dataset.line_count(), Some(6));
        assert!(validate_dataset(&dataset).is_empty());

        let qian = dataset.find("乾宫").unwrap();
        assert_eq!(qian.hexagrams[0].name, "乾为天");
        assert!(qian.hexagrams[0].lines.iter().all(|l| l.is_yang()));
    }

    #[test]
    fn validate_duplicate_palace_names() {
        let json = r#"{"palaces":[
            {"name":"乾宫","hexagrams":[{"name":"a","lines":[1]}]},
            {"name":"乾宫","hexagrams":[{"name":"b","lines":[0]}]}
        ]}"#;
        let dataset = parse_dataset_str(json, &PathBuf::from("d.json")).unwrap();
        let warnings = validate_dataset(&dataset);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate palace")));
    }

    #[test]
    fn validate_line_count_mismatch_and_empty_palace() {
        let json = r#"{"palaces":[
            {"name":"a","hexagrams":[{"name":"x","lines":[1,1,1]},{"name":"y","lines":[1,0]}]},
            {"name":"b","hexagrams":[]}
        ]}"#;
        let dataset = parse_dataset_str(json, &PathBuf::from("d.json")).unwrap();
        let warnings = validate_dataset(&dataset);
        assert!(warnings
            .iter()
            .any(|w| w.message == "hexagram y has 2 lines, expected 3"));
        assert!(warnings
            .iter()
            .any(|w| w.palace.as_deref() == Some("b") && w.message.contains("no hexagrams")));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("palaces.json");
        std::fs::write(&path, SMALL_JSON).unwrap();

        let dataset = load(Some(&path)).unwrap();
        assert_eq!(dataset.hexagram_count(), 2);
        assert!(load(Some(&dir.path().join("missing.json"))).is_err());
    }
}
