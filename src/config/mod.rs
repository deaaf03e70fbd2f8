mod file_config;

pub use file_config::FileConfig;

use anyhow::{bail, Result};
use std::path::PathBuf;

pub const DEFAULT_SNAPSHOT_FILE: &str = "CDInventory.dat";
pub const DEFAULT_TEXT_FILE: &str = "CDInventory.txt";

/// The command line arguments that take part in config resolution.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub data_dir: Option<PathBuf>,
    pub snapshot_file: Option<String>,
    pub text_file: Option<String>,
}

/// Resolved configuration for one session.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub snapshot_file: String,
    pub text_file: String,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional file config.
    /// File config values override CLI values where present, the defaults
    /// fill whatever is left.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let data_dir = file
            .data_dir
            .map(PathBuf::from)
            .or_else(|| cli.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from("."));

        if !data_dir.exists() {
            bail!("Data directory does not exist: {:?}", data_dir);
        }
        if !data_dir.is_dir() {
            bail!("data_dir is not a directory: {:?}", data_dir);
        }

        let snapshot_file = file
            .snapshot_file
            .or_else(|| cli.snapshot_file.clone())
            .unwrap_or_else(|| DEFAULT_SNAPSHOT_FILE.to_string());

        let text_file = file
            .text_file
            .or_else(|| cli.text_file.clone())
            .unwrap_or_else(|| DEFAULT_TEXT_FILE.to_string());

        if snapshot_file.is_empty() || text_file.is_empty() {
            bail!("Inventory file names must not be empty");
        }
        if snapshot_file == text_file {
            bail!(
                "The snapshot and the text fallback must be different files, both are {:?}",
                snapshot_file
            );
        }

        Ok(Self {
            data_dir,
            snapshot_file,
            text_file,
        })
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.data_dir.join(&self.snapshot_file)
    }

    pub fn text_path(&self) -> PathBuf {
        self.data_dir.join(&self.text_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_defaults() {
        let config = AppConfig::resolve(&CliConfig::default(), None).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("."));
        assert_eq!(config.snapshot_file, DEFAULT_SNAPSHOT_FILE);
        assert_eq!(config.text_file, DEFAULT_TEXT_FILE);
    }

    #[test]
    fn test_resolve_cli_values() {
        let dir = TempDir::new().unwrap();
        let cli = CliConfig {
            data_dir: Some(dir.path().to_path_buf()),
            snapshot_file: Some("collection.dat".to_string()),
            text_file: Some("collection.txt".to_string()),
        };

        let config = AppConfig::resolve(&cli, None).unwrap();

        assert_eq!(config.data_dir, dir.path());
        assert_eq!(config.snapshot_file, "collection.dat");
        assert_eq!(config.text_file, "collection.txt");
    }

    #[test]
    fn test_resolve_file_config_overrides_cli() {
        let cli_dir = TempDir::new().unwrap();
        let file_dir = TempDir::new().unwrap();
        let cli = CliConfig {
            data_dir: Some(cli_dir.path().to_path_buf()),
            snapshot_file: Some("cli.dat".to_string()),
            text_file: None,
        };
        let file = FileConfig {
            data_dir: Some(file_dir.path().to_string_lossy().to_string()),
            snapshot_file: Some("file.dat".to_string()),
            text_file: None,
        };

        let config = AppConfig::resolve(&cli, Some(file)).unwrap();

        assert_eq!(config.data_dir, file_dir.path());
        assert_eq!(config.snapshot_file, "file.dat");
        assert_eq!(config.text_file, DEFAULT_TEXT_FILE);
    }

    #[test]
    fn test_resolve_nonexistent_data_dir_error() {
        let cli = CliConfig {
            data_dir: Some(PathBuf::from("/nonexistent/inventory/dir")),
            ..Default::default()
        };

        let result = AppConfig::resolve(&cli, None);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("does not exist"));
    }

    #[test]
    fn test_resolve_data_dir_not_directory_error() {
        let temp_file = tempfile::NamedTempFile::new().unwrap();
        let cli = CliConfig {
            data_dir: Some(temp_file.path().to_path_buf()),
            ..Default::default()
        };

        let result = AppConfig::resolve(&cli, None);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a directory"));
    }

    #[test]
    fn test_resolve_equal_file_names_error() {
        let cli = CliConfig {
            snapshot_file: Some("same.dat".to_string()),
            text_file: Some("same.dat".to_string()),
            ..Default::default()
        };

        let result = AppConfig::resolve(&cli, None);

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("different files"));
    }

    #[test]
    fn test_resolve_empty_file_name_error() {
        let cli = CliConfig {
            snapshot_file: Some(String::new()),
            ..Default::default()
        };

        assert!(AppConfig::resolve(&cli, None).is_err());
    }

    #[test]
    fn test_path_helpers() {
        let dir = TempDir::new().unwrap();
        let cli = CliConfig {
            data_dir: Some(dir.path().to_path_buf()),
            ..Default::default()
        };

        let config = AppConfig::resolve(&cli, None).unwrap();

        assert_eq!(config.snapshot_path(), dir.path().join(DEFAULT_SNAPSHOT_FILE));
        assert_eq!(config.text_path(), dir.path().join(DEFAULT_TEXT_FILE));
    }
}
