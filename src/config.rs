use std::path::{Path, PathBuf};

use tracing::warn;

use crate::error::Error;
use crate::error::Error::MissingServerUrl;

/// Environment variable holding the root url of the sampleinfo service.
pub const SERVER_URL_VAR: &str = "SAMPLEINFO_CLI_URL";

const ENV_FILES: [&str; 2] = [".flaskenv", ".env"];

/// Loads `.flaskenv` and `.env` from the working directory into the process environment
/// and returns the files that were read.
pub fn load_env_files() -> Vec<PathBuf> {
    match std::env::current_dir() {
        Ok(dir) => load_env_files_from(&dir),
        Err(e) => {
            warn!(error = %e, "could not determine the working directory, env files skipped");
            vec![]
        }
    }
}

/// Loads `.flaskenv` then `.env` from `dir` only, parent directories are never searched.
///
/// Missing files are skipped and variables already set in the environment are kept.
pub fn load_env_files_from(dir: &Path) -> Vec<PathBuf> {
    ENV_FILES
        .iter()
        .map(|file| dir.join(file))
        .filter_map(|path| match dotenvy::from_path(&path) {
            Ok(()) => Some(path),
            Err(e) if e.not_found() => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not load env file");
                None
            }
        })
        .collect()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub server_url: String,
}

impl Config {
    pub fn new(server_url: Option<String>) -> Result<Config, Error> {
        let server_url = server_url
            .as_deref()
            .map(|url| url.trim().trim_end_matches('/'))
            .filter(|url| !url.is_empty())
            .ok_or_else(|| {
                MissingServerUrl(format!(
                    "No server url configured. Provide --server-url or set {SERVER_URL_VAR} (also read from .flaskenv or .env)."
                ))
            })?;

        Ok(Config {
            server_url: server_url.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::env;
    use std::fs;

    use tempfile::TempDir;

    use crate::config::{load_env_files_from, Config};
    use crate::error::Error;

    #[test]
    fn given_url_with_trailing_slash_when_new_config_then_slash_removed() {
        let config = Config::new(Some(" http://sampleinfo.local/ ".to_string())).unwrap();

        assert_eq!(config.server_url, "http://sampleinfo.local");
    }

    #[test]
    fn given_no_or_blank_url_when_new_config_then_missing_server_url() {
        assert!(matches!(Config::new(None), Err(Error::MissingServerUrl(_))));
        assert!(matches!(
            Config::new(Some("  ".to_string())),
            Err(Error::MissingServerUrl(_))
        ));
    }

    #[test]
    fn given_no_env_files_when_load_then_nothing_loaded() {
        let dir = TempDir::new().unwrap();

        assert!(load_env_files_from(dir.path()).is_empty());
    }

    #[test]
    fn given_both_env_files_when_load_then_flaskenv_read_first() {
        // Given
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".flaskenv"), "SAMPLEINFO_TEST_ORDER=flaskenv\n").unwrap();
        fs::write(
            dir.path().join(".env"),
            "SAMPLEINFO_TEST_ORDER=env\nSAMPLEINFO_TEST_ENV_ONLY=env\n",
        )
        .unwrap();

        // When
        let loaded = load_env_files_from(dir.path());

        // Then
        assert_eq!(loaded, vec![dir.path().join(".flaskenv"), dir.path().join(".env")]);
        assert_eq!(env::var("SAMPLEINFO_TEST_ORDER").unwrap(), "flaskenv");
        assert_eq!(env::var("SAMPLEINFO_TEST_ENV_ONLY").unwrap(), "env");
    }

    #[test]
    fn given_variable_already_set_when_load_then_process_value_kept() {
        // Given
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env"), "SAMPLEINFO_TEST_PRESET=from_file\n").unwrap();
        env::set_var("SAMPLEINFO_TEST_PRESET", "from_process");

        // When
        load_env_files_from(dir.path());

        // Then
        assert_eq!(env::var("SAMPLEINFO_TEST_PRESET").unwrap(), "from_process");
    }

    #[test]
    fn given_env_file_in_parent_directory_when_load_then_it_is_ignored() {
        // Given
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(".env"), "SAMPLEINFO_TEST_PARENT=from_parent\n").unwrap();
        let work = dir.path().join("work");
        fs::create_dir(&work).unwrap();

        // When
        let loaded = load_env_files_from(&work);

        // Then
        assert!(loaded.is_empty());
        assert!(env::var("SAMPLEINFO_TEST_PARENT").is_err());
    }
}
