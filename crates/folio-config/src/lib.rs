//! Configuration management for folio.
//!
//! Parses `folio.toml` with serde and discovers it in the current directory
//! or its parents. Without a config file, defaults are rooted at the current
//! directory. CLI settings can be applied during load via [`CliSettings`].
//!
//! ## Environment Variable Expansion
//!
//! String values support `${VAR}` (error if unset) and `${VAR:-default}`.
//!
//! Expanded fields:
//! - `docs.content_dir`
//! - `docs.routes`
//! - `remote.repo_base`
//! - `search.output_dir`

mod expand;

use std::path::{Path, PathBuf};
use std::time::Duration;

use folio_markup::mdx::DEFAULT_DENYLIST;
use folio_search::DOCUMENTS_FILENAME;
use serde::Deserialize;

/// CLI settings that override configuration file values.
///
/// Only non-None values override the loaded config.
#[derive(Debug, Default)]
pub struct CliSettings {
    /// Override the content directory.
    pub content_dir: Option<PathBuf>,
    /// Override remote mode.
    pub remote_enabled: Option<bool>,
}

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "folio.toml";

const DEFAULT_CONTENT_DIR: &str = "contents/docs";
const DEFAULT_ROUTES: &str = "routes.yaml";
const DEFAULT_OUTPUT_DIR: &str = "public/search-data";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Raw docs section (paths as written in TOML).
    docs: DocsConfigRaw,
    /// Remote content source.
    pub remote: RemoteConfig,
    /// Raw search section.
    search: SearchConfigRaw,

    /// Resolved docs configuration (set after loading).
    #[serde(skip)]
    pub docs_resolved: DocsConfig,
    /// Resolved search configuration (set after loading).
    #[serde(skip)]
    pub search_resolved: SearchConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct DocsConfigRaw {
    content_dir: Option<String>,
    extension: Option<String>,
    index_name: Option<String>,
    routes: Option<String>,
}

/// Resolved documentation layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocsConfig {
    /// Content directory holding one folder per page.
    pub content_dir: PathBuf,
    /// Content directory as written, relative to the project root. Used to
    /// build repository paths in remote mode.
    pub content_path: String,
    /// Content file extension, without the dot.
    pub extension: String,
    /// Stem of the file that holds a page (`index` in `intro/index.mdx`).
    pub index_name: String,
    /// Route tree file.
    pub routes: PathBuf,
}

impl DocsConfig {
    fn with_base(base: &Path) -> Self {
        Self {
            content_dir: base.join(DEFAULT_CONTENT_DIR),
            content_path: DEFAULT_CONTENT_DIR.to_owned(),
            extension: "mdx".to_owned(),
            index_name: "index".to_owned(),
            routes: base.join(DEFAULT_ROUTES),
        }
    }

    /// File name of a page file, e.g. `index.mdx`.
    #[must_use]
    pub fn page_file_name(&self) -> String {
        format!("{}.{}", self.index_name, self.extension)
    }
}

/// Remote content source configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RemoteConfig {
    /// Fetch pages from the repository instead of the local checkout.
    pub enabled: bool,
    /// Repository base URL, e.g. `https://github.com/acme/docs`.
    pub repo_base: String,
    /// Branch that raw files are served from.
    pub branch: String,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            repo_base: String::new(),
            branch: "main".to_owned(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl RemoteConfig {
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct SearchConfigRaw {
    output_dir: Option<String>,
    denylist: Option<Vec<String>>,
}

/// Resolved search corpus configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Directory the artifact is written to.
    pub output_dir: PathBuf,
    /// Component names stripped from page bodies.
    pub denylist: Vec<String>,
}

impl SearchConfig {
    fn with_base(base: &Path) -> Self {
        Self {
            output_dir: base.join(DEFAULT_OUTPUT_DIR),
            denylist: default_denylist(),
        }
    }

    /// Full path of `documents.json`.
    #[must_use]
    pub fn documents_path(&self) -> PathBuf {
        self.output_dir.join(DOCUMENTS_FILENAME)
    }
}

/// Repository-relative form of a content directory: separators unified to
/// `/`, with empty and `.` segments dropped.
fn repo_path(path: &str) -> String {
    path.split(['/', '\\'])
        .filter(|segment| !segment.is_empty() && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

fn default_denylist() -> Vec<String> {
    DEFAULT_DENYLIST.iter().map(|&s| s.to_owned()).collect()
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
    /// Environment variable error during expansion.
    #[error("Environment variable error in {field}: {message}")]
    EnvVar {
        /// Config field path (e.g., "`remote.repo_base`").
        field: String,
        /// Error message (e.g., "${`DOCS_REPO`} not set").
        message: String,
    },
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

/// Require a URL field to use http:// or https:// scheme.
fn require_http_url(url: &str, field: &str) -> Result<(), ConfigError> {
    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ConfigError::Validation(format!(
            "{field} must start with http:// or https://"
        )));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file with optional CLI settings.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise searches
    /// for `folio.toml` in the current directory and parents.
    ///
    /// # Errors
    ///
    /// Returns error if explicit `config_path` doesn't exist, parsing fails,
    /// or the result does not validate.
    pub fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)?
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)?
        } else {
            Self::default_with_cwd()
        };

        if let Some(settings) = cli_settings {
            config.apply_cli_settings(settings);
            config.validate()?;
        }

        Ok(config)
    }

    fn apply_cli_settings(&mut self, settings: &CliSettings) {
        if let Some(content_dir) = &settings.content_dir {
            self.docs_resolved.content_dir.clone_from(content_dir);
            // An absolute override has no repository counterpart
            if content_dir.is_relative() {
                self.docs_resolved.content_path = repo_path(&content_dir.to_string_lossy());
            }
        }
        if let Some(enabled) = settings.remote_enabled {
            self.remote.enabled = enabled;
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    #[must_use]
    pub fn default_with_base(base: &Path) -> Self {
        Self {
            docs: DocsConfigRaw::default(),
            remote: RemoteConfig::default(),
            search: SearchConfigRaw::default(),
            docs_resolved: DocsConfig::with_base(base),
            search_resolved: SearchConfig::with_base(base),
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        // Expand environment variables before path resolution
        config.expand_env_vars()?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_docs()?;
        self.validate_remote()?;
        Ok(())
    }

    fn validate_docs(&self) -> Result<(), ConfigError> {
        require_non_empty(&self.docs_resolved.extension, "docs.extension")?;
        require_non_empty(&self.docs_resolved.index_name, "docs.index_name")?;
        if self.docs_resolved.extension.starts_with('.') {
            return Err(ConfigError::Validation(
                "docs.extension must not start with a dot".to_owned(),
            ));
        }
        Ok(())
    }

    fn validate_remote(&self) -> Result<(), ConfigError> {
        if self.remote.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "remote.timeout_secs must be greater than 0".to_owned(),
            ));
        }
        // repo_base only matters when remote mode is on
        if self.remote.enabled {
            require_non_empty(&self.remote.repo_base, "remote.repo_base")?;
            require_http_url(&self.remote.repo_base, "remote.repo_base")?;
            require_non_empty(&self.remote.branch, "remote.branch")?;
        }
        Ok(())
    }

    fn expand_env_vars(&mut self) -> Result<(), ConfigError> {
        if let Some(ref dir) = self.docs.content_dir {
            self.docs.content_dir = Some(expand::expand_env(dir, "docs.content_dir")?);
        }
        if let Some(ref routes) = self.docs.routes {
            self.docs.routes = Some(expand::expand_env(routes, "docs.routes")?);
        }
        self.remote.repo_base = expand::expand_env(&self.remote.repo_base, "remote.repo_base")?;
        if let Some(ref dir) = self.search.output_dir {
            self.search.output_dir = Some(expand::expand_env(dir, "search.output_dir")?);
        }
        Ok(())
    }

    /// Resolve relative paths against the config directory.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let content_path = self
            .docs
            .content_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_CONTENT_DIR.to_owned());

        self.docs_resolved = DocsConfig {
            content_dir: config_dir.join(&content_path),
            content_path: repo_path(&content_path),
            extension: self.docs.extension.clone().unwrap_or_else(|| "mdx".to_owned()),
            index_name: self
                .docs
                .index_name
                .clone()
                .unwrap_or_else(|| "index".to_owned()),
            routes: config_dir.join(self.docs.routes.as_deref().unwrap_or(DEFAULT_ROUTES)),
        };

        self.search_resolved = SearchConfig {
            output_dir: config_dir.join(
                self.search
                    .output_dir
                    .as_deref()
                    .unwrap_or(DEFAULT_OUTPUT_DIR),
            ),
            denylist: self.search.denylist.clone().unwrap_or_else(default_denylist),
        };
    }
}
