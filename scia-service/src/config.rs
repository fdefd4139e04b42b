use std::path::{Path, PathBuf};
use std::time::Duration;

/// Default command line tool that runs an analysis from XML input
pub const DEFAULT_RUNNER: &str = "esa_xml";
pub const DEFAULT_TEMPLATE_PATH: &str = "scia/model.esa";
pub const DEFAULT_PORT: u16 = 8085;
/// Upper bound on a single engine run
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Service settings, read from the environment at startup
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    pub runner_path: PathBuf,
    pub template_path: PathBuf,
    pub timeout: Duration,
    pub debug_export: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            runner_path: PathBuf::from(DEFAULT_RUNNER),
            template_path: PathBuf::from(DEFAULT_TEMPLATE_PATH),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            debug_export: None,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unparsable numbers fall back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(raw) => raw.parse().unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid PORT {:?}", raw);
                defaults.port
            }),
            None => defaults.port,
        };

        let timeout = match lookup("SCIA_TIMEOUT_SECS") {
            Some(raw) => raw.parse().map(Duration::from_secs).unwrap_or_else(|_| {
                tracing::warn!("Ignoring invalid SCIA_TIMEOUT_SECS {:?}", raw);
                defaults.timeout
            }),
            None => defaults.timeout,
        };

        // The runner is started from a temp working directory, so relative
        // paths would break
        let runner_path = lookup("SCIA_RUNNER_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.runner_path);
        let runner_path = resolve_path(&runner_path);

        Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            runner_path,
            template_path: lookup("SCIA_TEMPLATE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.template_path),
            timeout,
            debug_export: lookup("SCIA_DEBUG_EXPORT").map(PathBuf::from),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Absolute path when the file exists, otherwise unchanged (looked up on PATH)
fn resolve_path(path: &Path) -> PathBuf {
    std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_environment() {
        let config = ServiceConfig::from_lookup(lookup(&[]));
        assert_eq!(config.port, 8085);
        assert_eq!(config.timeout, Duration::from_secs(300));
        assert_eq!(config.runner_path, PathBuf::from("esa_xml"));
        assert_eq!(config.template_path, PathBuf::from("scia/model.esa"));
        assert!(config.debug_export.is_none());
        assert_eq!(config.bind_address(), "0.0.0.0:8085");
    }

    #[test]
    fn test_overrides_and_invalid_numbers() {
        let config = ServiceConfig::from_lookup(lookup(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "not-a-port"),
            ("SCIA_TIMEOUT_SECS", "12"),
            ("SCIA_TEMPLATE_PATH", "/data/empty.esa"),
            ("SCIA_DEBUG_EXPORT", "/tmp/scia-debug"),
        ]));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8085);
        assert_eq!(config.timeout, Duration::from_secs(12));
        assert_eq!(config.template_path, PathBuf::from("/data/empty.esa"));
        assert_eq!(config.debug_export, Some(PathBuf::from("/tmp/scia-debug")));
    }

    #[test]
    fn test_existing_runner_is_made_absolute() {
        let dir = tempfile::tempdir().unwrap();
        let runner = dir.path().join("esa_xml");
        std::fs::write(&runner, "").unwrap();

        let config = ServiceConfig::from_lookup(lookup(&[(
            "SCIA_RUNNER_PATH",
            runner.to_str().unwrap(),
        )]));
        assert!(config.runner_path.is_absolute());
        assert_eq!(config.runner_path, std::fs::canonicalize(&runner).unwrap());
    }
}
