//! Loading of the optional local environment file.

use std::path::Path;

use crate::error::AppError;

/// Name of the environment file looked up in the working directory.
pub const ENV_FILE_NAME: &str = ".env";

/// Merges `KEY=value` pairs from `path` into the process environment.
///
/// Variables that are already set are left untouched. Returns `Ok(false)`
/// when the file does not exist.
///
/// # Errors
///
/// Returns [`AppError::EnvFile`] if the file exists but cannot be read or parsed.
pub fn load_env_file(path: &Path) -> Result<bool, AppError> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(true),
        Err(err) if err.not_found() => Ok(false),
        Err(source) => Err(AppError::EnvFile {
            path: path.to_path_buf(),
            source,
        }),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    #[serial]
    fn test_load_env_file_sets_variables() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(ENV_FILE_NAME);
        fs::write(&path, "T_TEST_ENV_FILE_LANGUAGE=italian\n# comment\n").unwrap();

        // SAFETY: serialized test, only touches a test-specific variable
        unsafe { std::env::remove_var("T_TEST_ENV_FILE_LANGUAGE") };

        assert!(load_env_file(&path).unwrap());
        assert_eq!(
            std::env::var("T_TEST_ENV_FILE_LANGUAGE").unwrap(),
            "italian"
        );

        // SAFETY: cleanup of the test-specific variable
        unsafe { std::env::remove_var("T_TEST_ENV_FILE_LANGUAGE") };
    }

    #[test]
    #[serial]
    fn test_load_env_file_keeps_existing_variables() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(ENV_FILE_NAME);
        fs::write(&path, "T_TEST_ENV_FILE_EXISTING=from_file\n").unwrap();

        // SAFETY: serialized test, only touches a test-specific variable
        unsafe { std::env::set_var("T_TEST_ENV_FILE_EXISTING", "from_process") };

        load_env_file(&path).unwrap();
        assert_eq!(
            std::env::var("T_TEST_ENV_FILE_EXISTING").unwrap(),
            "from_process"
        );

        // SAFETY: cleanup of the test-specific variable
        unsafe { std::env::remove_var("T_TEST_ENV_FILE_EXISTING") };
    }

    #[test]
    fn test_load_env_file_missing_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(ENV_FILE_NAME);

        assert!(!load_env_file(&path).unwrap());
    }

    #[test]
    fn test_load_env_file_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(ENV_FILE_NAME);
        fs::write(&path, "this is not valid\n").unwrap();

        let result = load_env_file(&path);
        assert!(matches!(result, Err(AppError::EnvFile { .. })));
    }
}
