//! Configuration for manifold.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variables (MANIFOLD_CONTENT)
//! 2. Config file (.manifold/config.yaml)
//! 3. Defaults (bundled snapshot, built-in attribution rules)
//!
//! Config file discovery:
//! - Searches current directory and parents for .manifold/config.yaml
//! - Falls back to ~/.manifold/config.yaml
//! - Paths in config file are relative to the directory containing .manifold/

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::views::AttributionRules;

/// Environment variable naming a snapshot file
pub const CONTENT_ENV: &str = "MANIFOLD_CONTENT";

/// Default favicon service; `{host}` is replaced by the hostname
pub const DEFAULT_FAVICON_SERVICE: &str = "https://www.google.com/s2/favicons?domain={host}&sz=64";

/// Global cached configuration (stores Result to handle init errors)
static CONFIG: OnceLock<Result<ResolvedConfig, String>> = OnceLock::new();

/// Raw config file schema (matches YAML structure)
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigFile {
    pub version: String,
    #[serde(default)]
    pub content: ContentConfig,
    #[serde(default)]
    pub attribution: Option<AttributionConfig>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContentConfig {
    /// Snapshot file (relative to the project root)
    pub path: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AttributionConfig {
    pub min_count: Option<usize>,
    pub blocklist: Option<Vec<String>>,
    pub favicon_service: Option<String>,
}

/// Resolved configuration with absolute paths
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// Snapshot file to load; `None` means the bundled snapshot
    pub content_path: Option<PathBuf>,
    /// Path to config file (if found)
    pub config_file: Option<PathBuf>,
    /// Domain attribution rules
    pub attribution: AttributionRules,
    /// Favicon service template
    pub favicon_service: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            content_path: None,
            config_file: None,
            attribution: AttributionRules::default(),
            favicon_service: DEFAULT_FAVICON_SERVICE.to_string(),
        }
    }
}

/// Find config file by searching current directory and parents
fn find_config_file() -> Option<PathBuf> {
    if let Ok(mut current) = std::env::current_dir() {
        loop {
            let config_path = current.join(".manifold").join("config.yaml");
            if config_path.exists() {
                return Some(config_path);
            }

            if !current.pop() {
                break;
            }
        }
    }

    let home_config = dirs::home_dir()?.join(".manifold").join("config.yaml");
    home_config.exists().then_some(home_config)
}

/// Load and parse config file
fn load_config_file(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    serde_yaml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Resolve a path that may be relative to the config file's project root
fn resolve_path(base: &Path, path_str: &str) -> PathBuf {
    let path = PathBuf::from(path_str);
    if path.is_absolute() {
        path
    } else {
        base.join(path)
            .canonicalize()
            .unwrap_or_else(|_| base.join(path_str))
    }
}

/// Combine a config file (if any) with an environment override
fn resolve(config_file: Option<PathBuf>, env_content: Option<String>) -> Result<ResolvedConfig> {
    let mut resolved = ResolvedConfig::default();

    if let Some(ref config_path) = config_file {
        let config = load_config_file(config_path)?;

        // Project root is the parent of .manifold/
        let base_dir = config_path
            .parent()
            .and_then(|p| p.parent())
            .unwrap_or(Path::new("."));

        resolved.content_path = config
            .content
            .path
            .as_deref()
            .map(|p| resolve_path(base_dir, p));

        if let Some(attribution) = config.attribution {
            if let Some(min_count) = attribution.min_count {
                resolved.attribution.min_count = min_count;
            }
            if let Some(blocklist) = attribution.blocklist {
                resolved.attribution.blocklist = blocklist;
            }
            if let Some(favicon_service) = attribution.favicon_service {
                resolved.favicon_service = favicon_service;
            }
        }
    }

    if let Some(env_content) = env_content.filter(|v| !v.trim().is_empty()) {
        resolved.content_path = Some(PathBuf::from(env_content));
    }

    resolved.config_file = config_file;
    Ok(resolved)
}

/// Load configuration from all sources
fn load_config() -> Result<ResolvedConfig> {
    resolve(find_config_file(), std::env::var(CONTENT_ENV).ok())
}

/// Get the global configuration (loads once, then cached)
pub fn config() -> Result<&'static ResolvedConfig> {
    let result = CONFIG.get_or_init(|| load_config().map_err(|e| e.to_string()));

    match result {
        Ok(config) => Ok(config),
        Err(e) => anyhow::bail!("{}", e),
    }
}

/// Force reload configuration (useful for testing)
pub fn reload_config() -> Result<ResolvedConfig> {
    load_config()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn write_config(temp: &TempDir, body: &str) -> PathBuf {
        let dir = temp.path().join(".manifold");
        std::fs::create_dir_all(&dir).unwrap();

        let config_path = dir.join("config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "{}", body).unwrap();
        config_path
    }

    #[test]
    fn test_defaults_without_file() {
        let config = resolve(None, None).unwrap();

        assert!(config.content_path.is_none());
        assert!(config.config_file.is_none());
        assert_eq!(config.attribution, AttributionRules::default());
        assert_eq!(config.favicon_service, DEFAULT_FAVICON_SERVICE);
    }

    #[test]
    fn test_config_file_parsing() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(
            &temp,
            r#"
version: "1.0"
content:
  path: data/content.json
attribution:
  min_count: 3
  blocklist:
    - "*.archive.org"
    - "archive.ph"
"#,
        );

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.version, "1.0");
        assert_eq!(config.content.path, Some("data/content.json".to_string()));

        let resolved = resolve(Some(config_path.clone()), None).unwrap();
        assert_eq!(
            resolved.content_path,
            Some(temp.path().join("data/content.json"))
        );
        assert_eq!(resolved.attribution.min_count, 3);
        assert!(resolved.attribution.is_blocklisted("archive.ph"));
        assert!(!resolved.attribution.is_blocklisted("archive.org"));
        assert_eq!(resolved.favicon_service, DEFAULT_FAVICON_SERVICE);
        assert_eq!(resolved.config_file, Some(config_path));
    }

    #[test]
    fn test_env_overrides_file() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(
            &temp,
            r#"
version: "1.0"
content:
  path: data/content.json
"#,
        );

        let resolved = resolve(Some(config_path), Some("/srv/snapshot.json".to_string())).unwrap();
        assert_eq!(resolved.content_path, Some(PathBuf::from("/srv/snapshot.json")));

        // Blank env values are ignored
        let resolved = resolve(None, Some("  ".to_string())).unwrap();
        assert!(resolved.content_path.is_none());
    }

    #[test]
    fn test_invalid_yaml_is_error() {
        let temp = TempDir::new().unwrap();
        let config_path = write_config(&temp, "version: [unterminated");

        assert!(resolve(Some(config_path), None).is_err());
    }

    #[test]
    fn test_resolve_relative_path() {
        let base = PathBuf::from("/home/user/project");

        assert_eq!(
            resolve_path(&base, "./subdir"),
            PathBuf::from("/home/user/project/./subdir")
        );
        assert_eq!(
            resolve_path(&base, "/absolute/path"),
            PathBuf::from("/absolute/path")
        );
    }
}
