//! Configuration loading and environment variable interpolation

use crate::error::{Error, Result};
use regex::Regex;
use std::env;
use std::fs;
use std::path::Path;

use super::Config;

const CONFIG_FILENAME: &str = "keygate.toml";

/// Load configuration from keygate.toml
pub fn load_config() -> Result<Config> {
    let config_path = find_config_file()?;
    load_config_from_path(&config_path)
}

/// Load configuration from a specific path
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|_| Error::ConfigNotFound)?;
    let content = interpolate_env_vars(&content);
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Find the configuration file, searching upward from current directory
fn find_config_file() -> Result<std::path::PathBuf> {
    let mut current = env::current_dir().map_err(|e| Error::Config(e.to_string()))?;

    loop {
        let config_path = current.join(CONFIG_FILENAME);
        if config_path.exists() {
            return Ok(config_path);
        }

        if !current.pop() {
            return Err(Error::ConfigNotFound);
        }
    }
}

/// Interpolate environment variables in the format ${VAR_NAME} or ${VAR_NAME:-default}
fn interpolate_env_vars(content: &str) -> String {
    // This regex is a compile-time constant, panicking is acceptable here
    // as it indicates a programming error in the codebase, not a runtime issue
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)(?::-([^}]*))?\}")
        .expect("Invalid regex pattern - this is a bug in the codebase");

    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        let default = caps.get(2).map(|m| m.as_str()).unwrap_or("");

        env::var(var_name).unwrap_or_else(|_| default.to_string())
    })
    .to_string()
}

/// Generate a default configuration file content
pub fn default_config_content() -> &'static str {
    r#"# Keygate Configuration

[auth]
# HMAC secret used to sign access tokens. Set KEYGATE_SIGNING_KEY in the
# environment rather than committing a real secret here.
signing_key = "${KEYGATE_SIGNING_KEY:-change-me-in-production}"
# How long issued tokens stay valid
token_ttl_minutes = 30

# Registered users. Generate password hashes with 'keygate hash'.
[[users]]
email = "user@example.com"
# password: testpassword
password_hash = "$2b$12$rIuY.3R1QWuN1uq2QxuT8e1yxtI5oTNU5VDDcfNsY/xxT8ujW21U6"
disabled = false
"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_interpolate_env_var_with_default() {
        let content = r#"signing_key = "${KEYGATE_TEST_MISSING_VAR:-fallback}""#;
        let result = interpolate_env_vars(content);
        assert_eq!(result, r#"signing_key = "fallback""#);
    }

    #[test]
    fn test_interpolate_env_var_set() {
        env::set_var("KEYGATE_TEST_SET_VAR", "from-env");
        let content = r#"signing_key = "${KEYGATE_TEST_SET_VAR:-fallback}""#;
        let result = interpolate_env_vars(content);
        assert_eq!(result, r#"signing_key = "from-env""#);
        env::remove_var("KEYGATE_TEST_SET_VAR");
    }

    #[test]
    fn test_bcrypt_digests_survive_interpolation() {
        // Bcrypt digests are full of '$' but never '${', so they pass through.
        let content = r#"password_hash = "$2b$12$rIuY.3R1QWuN1uq2QxuT8e""#;
        assert_eq!(interpolate_env_vars(content), content);
    }

    #[test]
    fn test_default_config_parses() {
        let content = interpolate_env_vars(default_config_content());
        let config: Config = toml::from_str(&content).unwrap();
        assert_eq!(config.auth.token_ttl_minutes, 30);
        assert_eq!(config.users.len(), 1);
        assert_eq!(config.users[0].email, "user@example.com");
    }

    #[test]
    fn test_load_config_from_path() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [auth]
            signing_key = "s3cret"
            token_ttl_minutes = 5

            [[users]]
            email = "alice@example.com"
            password_hash = "$2b$12$hash"
            "#
        )
        .unwrap();

        let config = load_config_from_path(file.path()).unwrap();
        assert_eq!(config.auth.signing_key, "s3cret");
        assert_eq!(config.auth.token_ttl_minutes, 5);
        assert_eq!(config.users.len(), 1);
    }

    #[test]
    fn test_missing_config_file() {
        let result = load_config_from_path(Path::new("/nonexistent/keygate.toml"));
        assert!(matches!(result, Err(Error::ConfigNotFound)));
    }
}
