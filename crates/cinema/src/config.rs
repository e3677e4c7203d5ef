use crate::{
    auditorium::Auditorium,
    constants::{
        DEFAULT_AUDITORIUM_NAME, DEFAULT_OUTPUT_DIR, DEFAULT_ROWS, ENV_LAYOUT_FILE, ENV_OUTPUT_DIR,
    },
    error::{CinemaError, Result},
};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    env,
    path::{Path, PathBuf},
};

/// Layout and export settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    pub auditorium: AuditoriumConfig,
    #[serde(default)]
    pub export: ExportConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AuditoriumConfig {
    #[serde(default = "default_name")]
    pub name: String,
    /// Seats per row, front to back. Signed so that bad input can be reported.
    pub rows: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ExportConfig {
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

fn default_name() -> String {
    DEFAULT_AUDITORIUM_NAME.to_string()
}

fn default_output_dir() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_DIR)
}

impl Default for AuditoriumConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            rows: DEFAULT_ROWS.to_vec(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Reads a TOML layout file and validates it
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CinemaError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| CinemaError::Config {
            path: path.to_path_buf(),
            message: format!("TOML parse error: {e}"),
        })?;

        config.validate()?;
        debug!(
            "Loaded layout '{}' with {} rows from {}",
            config.auditorium.name,
            config.auditorium.rows.len(),
            path.display()
        );
        Ok(config)
    }

    /// Layout file from `CINEMA_LAYOUT_FILE` (built-in layout when unset),
    /// export directory overridden by `CINEMA_OUTPUT_DIR`.
    pub fn from_env() -> Result<Self> {
        let mut config = match env::var(ENV_LAYOUT_FILE) {
            Ok(path) if !path.trim().is_empty() => Self::load_from_file(path.trim())?,
            _ => Self::default(),
        };

        if let Ok(output_dir) = env::var(ENV_OUTPUT_DIR)
            && !output_dir.trim().is_empty()
        {
            let path = PathBuf::from(output_dir);

            // If the path already exists but is not a directory, reject early.
            if path.exists() && !path.is_dir() {
                return Err(CinemaError::InvalidConfiguration(format!(
                    "Output path is not a directory: {}",
                    path.display()
                )));
            }
            config.export.output_dir = path;
        }
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some((row, len)) = self
            .auditorium
            .rows
            .iter()
            .enumerate()
            .find(|(_, len)| **len < 0)
        {
            return Err(CinemaError::InvalidConfiguration(format!(
                "row {row} has invalid length {len}"
            )));
        }
        if self.auditorium.name.trim().is_empty() {
            return Err(CinemaError::InvalidConfiguration(
                "auditorium name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    pub fn build_auditorium(&self) -> Result<Auditorium> {
        Auditorium::from_lengths(&self.auditorium.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use tempfile::TempDir;

    // Environment variables are process wide; tests touching them run one at a time.
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn write_layout(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("layout.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    fn clear_env() {
        unsafe {
            env::remove_var(ENV_LAYOUT_FILE);
            env::remove_var(ENV_OUTPUT_DIR);
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.auditorium.name, "auditorium");
        assert_eq!(config.auditorium.rows, DEFAULT_ROWS.to_vec());
        assert_eq!(config.export.output_dir, PathBuf::from("seatmaps"));

        let auditorium = config.build_auditorium().unwrap();
        assert_eq!(auditorium.row_count(), 6);
        assert_eq!(auditorium.count_available_seats(), 78);
    }

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = write_layout(
            &dir,
            r#"
[auditorium]
name = "Sala 1"
rows = [3, 5, 0]

[export]
output_dir = "out"
"#,
        );

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.auditorium.name, "Sala 1");
        assert_eq!(config.auditorium.rows, vec![3, 5, 0]);
        assert_eq!(config.export.output_dir, PathBuf::from("out"));
        assert_eq!(config.build_auditorium().unwrap().total_seats(), 8);
    }

    #[test]
    fn test_load_from_file_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_layout(&dir, "[auditorium]\nrows = [2, 2]\n");

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.auditorium.name, "auditorium");
        assert_eq!(config.export.output_dir, PathBuf::from("seatmaps"));
    }

    #[test]
    fn test_load_from_file_negative_row() {
        let dir = TempDir::new().unwrap();
        let path = write_layout(&dir, "[auditorium]\nrows = [4, -2]\n");

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, CinemaError::InvalidConfiguration(_)));
        assert!(err.to_string().contains("row 1 has invalid length -2"));
    }

    #[test]
    fn test_load_from_file_missing() {
        let dir = TempDir::new().unwrap();
        let err = Config::load_from_file(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, CinemaError::Config { .. }));
    }

    #[test]
    fn test_load_from_file_malformed() {
        let dir = TempDir::new().unwrap();
        let path = write_layout(&dir, "[auditorium]\nrows = \"three\"\n");

        let err = Config::load_from_file(&path).unwrap_err();
        match err {
            CinemaError::Config { path: p, message } => {
                assert_eq!(p, path);
                assert!(message.starts_with("TOML parse error"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_validate_empty_name() {
        let mut config = Config::default();
        config.auditorium.name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_from_env_default() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        clear_env();

        let config = Config::from_env().unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_from_env_with_layout_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        clear_env();

        let dir = TempDir::new().unwrap();
        let path = write_layout(&dir, "[auditorium]\nrows = [1, 2, 3]\n");
        unsafe {
            env::set_var(ENV_LAYOUT_FILE, &path);
        }

        let config = Config::from_env();
        clear_env();
        assert_eq!(config.unwrap().auditorium.rows, vec![1, 2, 3]);
    }

    #[test]
    fn test_from_env_with_whitespace_only() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        clear_env();

        unsafe {
            env::set_var(ENV_LAYOUT_FILE, "   \t\n   ");
            env::set_var(ENV_OUTPUT_DIR, "  ");
        }

        let config = Config::from_env();
        clear_env();
        assert_eq!(config.unwrap(), Config::default());
    }

    #[test]
    fn test_from_env_with_valid_output_dir() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        clear_env();

        let dir = TempDir::new().unwrap();
        unsafe {
            env::set_var(ENV_OUTPUT_DIR, dir.path());
        }

        let config = Config::from_env();
        clear_env();
        assert_eq!(config.unwrap().export.output_dir, dir.path().to_path_buf());
    }

    #[test]
    fn test_from_env_output_path_is_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|p| p.into_inner());
        clear_env();

        let dir = TempDir::new().unwrap();
        let file = write_layout(&dir, "not a directory");
        unsafe {
            env::set_var(ENV_OUTPUT_DIR, &file);
        }

        let result = Config::from_env();
        clear_env();
        assert!(matches!(
            result,
            Err(CinemaError::InvalidConfiguration(_))
        ));
    }
}
