use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Optional TOML configuration. Every key is optional, values present in
/// the file override whatever came in on the command line.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    pub data_dir: Option<String>,
    pub snapshot_file: Option<String>,
    pub text_file: Option<String>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config(
            r#"
            data_dir = "/tmp/cds"
            snapshot_file = "collection.dat"
            text_file = "collection.txt"
            "#,
        );

        let config = FileConfig::load(file.path()).unwrap();

        assert_eq!(config.data_dir, Some("/tmp/cds".to_string()));
        assert_eq!(config.snapshot_file, Some("collection.dat".to_string()));
        assert_eq!(config.text_file, Some("collection.txt".to_string()));
    }

    #[test]
    fn test_load_partial_config() {
        let file = write_config("snapshot_file = \"collection.dat\"\n");

        let config = FileConfig::load(file.path()).unwrap();

        assert_eq!(config.data_dir, None);
        assert_eq!(config.snapshot_file, Some("collection.dat".to_string()));
        assert_eq!(config.text_file, None);
    }

    #[test]
    fn test_load_empty_config() {
        let file = write_config("");

        let config = FileConfig::load(file.path()).unwrap();

        assert_eq!(config.data_dir, None);
        assert_eq!(config.snapshot_file, None);
        assert_eq!(config.text_file, None);
    }

    #[test]
    fn test_load_missing_file_fails() {
        let result = FileConfig::load(Path::new("/nonexistent/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_toml_fails() {
        let file = write_config("snapshot_file = [not toml");
        assert!(FileConfig::load(file.path()).is_err());
    }
}
