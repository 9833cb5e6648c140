//! Organization configuration loader
//!
//! Loads [`OrgConfig`] from environment variables or files. Library
//! callers and test fixtures are expected to construct the struct
//! directly; this loader exists for tools that want the conventional
//! lookup.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports TOML and JSON formats
//!
//! ## Environment Variables
//! - `EDGEKIT_ORG`: Organization name
//! - `EDGEKIT_ENDPOINT`: Management API root URL
//! - `EDGEKIT_USERNAME`: Org administrator user
//! - `EDGEKIT_PASSWORD`: Password for the administrator user
//! - `EDGEKIT_TIMEOUT_SECS`: Optional per-request timeout in seconds

use std::path::{Path, PathBuf};

use edgekit_domain::constants::DEFAULT_TIMEOUT_SECS;
use edgekit_domain::{EdgeError, OrgConfig, Result};

const ENV_KEYS: [&str; 4] =
    ["EDGEKIT_ORG", "EDGEKIT_ENDPOINT", "EDGEKIT_USERNAME", "EDGEKIT_PASSWORD"];

/// File names probed, in order, when no explicit path is given.
const CONFIG_FILE_NAMES: [&str; 4] = ["config.toml", "config.json", "edgekit.toml", "edgekit.json"];

/// Load configuration with automatic fallback strategy.
///
/// # Errors
/// Returns `EdgeError::Config` if neither source yields a complete
/// configuration.
pub fn load() -> Result<OrgConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "environment incomplete, trying config file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables.
///
/// All required variables must be present; missing ones are reported by
/// name in a single error.
pub fn load_from_env() -> Result<OrgConfig> {
    let mut missing = Vec::new();
    let mut lookup = |key: &'static str| match std::env::var(key) {
        Ok(value) => Some(value),
        Err(_) => {
            missing.push(key);
            None
        }
    };

    let org_name = lookup("EDGEKIT_ORG");
    let endpoint = lookup("EDGEKIT_ENDPOINT");
    let username = lookup("EDGEKIT_USERNAME");
    let password = lookup("EDGEKIT_PASSWORD");

    if !missing.is_empty() {
        return Err(EdgeError::Config(format!(
            "required configuration key(s) missing: {}",
            missing.join(", ")
        )));
    }

    let timeout_seconds = match std::env::var("EDGEKIT_TIMEOUT_SECS") {
        Ok(raw) => raw
            .parse::<u64>()
            .map_err(|err| EdgeError::Config(format!("invalid EDGEKIT_TIMEOUT_SECS: {err}")))?,
        Err(_) => DEFAULT_TIMEOUT_SECS,
    };

    match (org_name, endpoint, username, password) {
        (Some(org_name), Some(endpoint), Some(username), Some(password)) => {
            Ok(OrgConfig { org_name, endpoint, username, password, timeout_seconds })
        }
        _ => Err(EdgeError::Internal("environment lookup lost a value".into())),
    }
}

/// Load configuration from a file.
///
/// If `path` is `None`, probes the conventional file names in the
/// current directory. Format is detected by extension.
pub fn load_from_file(path: Option<&Path>) -> Result<OrgConfig> {
    let path = match path {
        Some(path) => {
            if !path.exists() {
                return Err(EdgeError::Config(format!(
                    "config file not found: {}",
                    path.display()
                )));
            }
            path.to_path_buf()
        }
        None => probe_config_paths().ok_or_else(|| {
            EdgeError::Config(format!(
                "no config file found (looked for {})",
                CONFIG_FILE_NAMES.join(", ")
            ))
        })?,
    };

    let contents = std::fs::read_to_string(&path)
        .map_err(|err| EdgeError::Config(format!("cannot read {}: {err}", path.display())))?;

    let config = match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&contents)
            .map_err(|err| EdgeError::Config(format!("invalid TOML in {}: {err}", path.display())))?,
        Some("json") => serde_json::from_str(&contents)
            .map_err(|err| EdgeError::Config(format!("invalid JSON in {}: {err}", path.display())))?,
        _ => {
            return Err(EdgeError::Config(format!(
                "unsupported config format: {}",
                path.display()
            )))
        }
    };

    tracing::info!(path = %path.display(), "configuration loaded from file");
    Ok(config)
}

fn probe_config_paths() -> Option<PathBuf> {
    CONFIG_FILE_NAMES.iter().map(PathBuf::from).find(|candidate| candidate.exists())
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;
    use std::sync::Mutex;

    use once_cell::sync::Lazy;

    use super::*;

    /// Serializes tests that mutate process environment variables.
    static ENV_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

    fn clear_env() {
        for key in ENV_KEYS {
            std::env::remove_var(key);
        }
        std::env::remove_var("EDGEKIT_TIMEOUT_SECS");
    }

    #[test]
    fn env_loading_reports_missing_keys_by_name() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        clear_env();
        std::env::set_var("EDGEKIT_ORG", "acme");

        let err = load_from_env().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("EDGEKIT_ENDPOINT"));
        assert!(message.contains("EDGEKIT_USERNAME"));
        assert!(message.contains("EDGEKIT_PASSWORD"));
        assert!(!message.contains("EDGEKIT_ORG,"));
        clear_env();
    }

    #[test]
    fn env_loading_builds_complete_config() {
        let _guard = ENV_LOCK.lock().expect("env lock");
        clear_env();
        std::env::set_var("EDGEKIT_ORG", "acme");
        std::env::set_var("EDGEKIT_ENDPOINT", "https://edge.example.com/v1");
        std::env::set_var("EDGEKIT_USERNAME", "admin@acme.com");
        std::env::set_var("EDGEKIT_PASSWORD", "secret");
        std::env::set_var("EDGEKIT_TIMEOUT_SECS", "10");

        let config = load_from_env().expect("config should load");
        assert_eq!(config.org_name, "acme");
        assert_eq!(config.endpoint, "https://edge.example.com/v1");
        assert_eq!(config.timeout_seconds, 10);
        clear_env();
    }

    #[test]
    fn toml_file_loads_with_default_timeout() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        let mut file = std::fs::File::create(&path).expect("config file");
        writeln!(
            file,
            "org_name = \"acme\"\nendpoint = \"https://edge.example.com/v1\"\nusername = \"admin@acme.com\"\npassword = \"secret\"\n"
        )
        .expect("write config");

        let config = load_from_file(Some(&path)).expect("config should load");
        assert_eq!(config.org_name, "acme");
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = load_from_file(Some(Path::new("/nonexistent/edgekit.toml"))).unwrap_err();
        assert!(matches!(err, EdgeError::Config(_)));
    }

    #[test]
    fn unsupported_extension_is_a_config_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.yml");
        std::fs::write(&path, "org: acme").expect("write config");
        let err = load_from_file(Some(&path)).unwrap_err();
        assert!(matches!(err, EdgeError::Config(_)));
    }
}
