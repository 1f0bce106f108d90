//! Local `.env` file loading.
//!
//! Standard dotenv semantics: the file fills gaps in the environment and
//! never overrides a variable that is already present, even one set to an
//! empty string. A missing file is tolerated.

use std::path::Path;

use tracing::warn;

use crate::env::EnvSource;

const ENV_FILE: &str = ".env";

/// Loads `.env` from the working directory into `env`.
///
/// Returns whether the file was found. Absence only logs a warning; the
/// loader treats either outcome the same.
pub fn load_env_file(env: &mut impl EnvSource) -> bool {
    load_env_file_from(Path::new(ENV_FILE), env)
}

/// Loads an environment file at an explicit path into `env`.
pub fn load_env_file_from(path: &Path, env: &mut impl EnvSource) -> bool {
    let iter = match dotenvy::from_path_iter(path) {
        Ok(iter) => iter,
        Err(_) => {
            warn!(".env file not found, using environment variables");
            return false;
        }
    };

    for item in iter {
        match item {
            Ok((key, value)) => {
                if env.get(&key).is_none() {
                    env.set(&key, &value);
                }
            }
            Err(e) => warn!("skipping malformed line in {}: {e}", path.display()),
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnv;
    use std::fs;
    use tempfile::TempDir;

    fn write_env_file(dir: &TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join(".env");
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn file_fills_missing_variables() {
        let dir = TempDir::new().unwrap();
        let path = write_env_file(&dir, "SERVER_PORT=1111\nLOG_LEVEL=debug\n");

        let mut env = MapEnv::new();
        assert!(load_env_file_from(&path, &mut env));

        assert_eq!(env.get("SERVER_PORT").as_deref(), Some("1111"));
        assert_eq!(env.get("LOG_LEVEL").as_deref(), Some("debug"));
    }

    #[test]
    fn file_never_overrides_present_variables() {
        let dir = TempDir::new().unwrap();
        let path = write_env_file(&dir, "SERVER_PORT=1111\n");

        let mut env = MapEnv::new().with_var("SERVER_PORT", "9999");
        assert!(load_env_file_from(&path, &mut env));

        assert_eq!(env.get("SERVER_PORT").as_deref(), Some("9999"));
    }

    #[test]
    fn present_but_empty_variables_are_kept() {
        let dir = TempDir::new().unwrap();
        let path = write_env_file(&dir, "LOG_LEVEL=debug\n");

        let mut env = MapEnv::new().with_var("LOG_LEVEL", "");
        assert!(load_env_file_from(&path, &mut env));

        assert_eq!(env.get("LOG_LEVEL").as_deref(), Some(""));
    }

    #[test]
    fn missing_file_is_tolerated() {
        let dir = TempDir::new().unwrap();

        let mut env = MapEnv::new();
        assert!(!load_env_file_from(&dir.path().join(".env"), &mut env));
        assert!(env.get("SERVER_PORT").is_none());
    }

    #[test]
    fn comments_and_blank_lines_are_ignored() {
        let dir = TempDir::new().unwrap();
        let path = write_env_file(
            &dir,
            "# local overrides\n\nSERVER_PORT=1111\n# LOG_LEVEL=trace\n",
        );

        let mut env = MapEnv::new();
        assert!(load_env_file_from(&path, &mut env));

        assert_eq!(env.get("SERVER_PORT").as_deref(), Some("1111"));
        assert!(env.get("LOG_LEVEL").is_none());
    }
}
