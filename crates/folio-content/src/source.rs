//! Raw content retrieval.
//!
//! A [`ContentSource`] knows how to map a slug to a [`ContentLocation`] and
//! how to retrieve the text stored there. [`LocalSource`] reads the content
//! directory; [`RemoteSource`] fetches raw files from the repository host.

use std::path::{Component, Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::{DateTime, SecondsFormat, Utc};
use ureq::Agent;

use crate::error::LoadError;
use crate::location::ContentLocation;

/// Raw page text with its modification time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawContent {
    pub text: String,
    /// ISO-8601 timestamp (local) or `Last-Modified` header (remote).
    pub last_updated: Option<String>,
}

/// Backend that stores page source text.
pub trait ContentSource: Send + Sync {
    /// Location of the page identified by a normalized, non-empty slug.
    fn locate(&self, slug: &str) -> ContentLocation;

    /// Retrieve the text stored at `location`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::ReadFailed`] or [`LoadError::FetchFailed`] when the
    /// text cannot be retrieved.
    fn fetch(&self, location: &ContentLocation) -> Result<RawContent, LoadError>;
}

/// Reads pages from `<content_dir>/<slug>/<file_name>`.
#[derive(Clone, Debug)]
pub struct LocalSource {
    content_dir: PathBuf,
    file_name: String,
}

impl LocalSource {
    pub fn new(content_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
        Self {
            content_dir: content_dir.into(),
            file_name: file_name.into(),
        }
    }

    /// Refuse paths that leave the content directory.
    fn check_within_root(&self, path: &Path) -> Result<(), LoadError> {
        let inside = path
            .strip_prefix(&self.content_dir)
            .is_ok_and(|rest| rest.components().all(|c| matches!(c, Component::Normal(_))));
        if inside {
            return Ok(());
        }
        Err(LoadError::read(
            path,
            std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "path is outside the content directory",
            ),
        ))
    }

    fn read(path: &Path) -> Result<RawContent, LoadError> {
        let text = std::fs::read_to_string(path).map_err(|e| LoadError::read(path, e))?;
        let modified = std::fs::metadata(path)
            .and_then(|meta| meta.modified())
            .map_err(|e| LoadError::read(path, e))?;
        Ok(RawContent {
            text,
            last_updated: Some(iso_timestamp(modified)),
        })
    }
}

impl ContentSource for LocalSource {
    fn locate(&self, slug: &str) -> ContentLocation {
        let mut path = self.content_dir.clone();
        path.extend(slug.split('/'));
        path.push(&self.file_name);
        ContentLocation::Path(path)
    }

    fn fetch(&self, location: &ContentLocation) -> Result<RawContent, LoadError> {
        match location {
            ContentLocation::Path(path) => {
                self.check_within_root(path)?;
                Self::read(path)
            }
            ContentLocation::Url(url) => Err(LoadError::FetchFailed {
                url: url.clone(),
                status: None,
                message: "local source cannot fetch URLs".to_owned(),
            }),
        }
    }
}

/// Format a filesystem timestamp as UTC with millisecond precision,
/// e.g. `2024-05-01T10:00:00.000Z`.
pub(crate) fn iso_timestamp(time: SystemTime) -> String {
    let dt: DateTime<Utc> = time.into();
    dt.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Fetches pages from `{repo_base}/raw/{branch}/{content_path}/{slug}/{file_name}`.
pub struct RemoteSource {
    agent: Agent,
    base_url: String,
    file_name: String,
}

impl RemoteSource {
    /// Create a source for a repository.
    ///
    /// `timeout` bounds each whole request, including reading the body.
    pub fn new(
        repo_base: &str,
        branch: &str,
        content_path: &str,
        file_name: impl Into<String>,
        timeout: Duration,
    ) -> Self {
        let agent = Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build()
            .into();

        let mut base_url = format!("{}/raw/{branch}", repo_base.trim_end_matches('/'));
        let content_path = content_path.trim_matches('/');
        if !content_path.is_empty() {
            base_url.push('/');
            base_url.push_str(content_path);
        }

        Self {
            agent,
            base_url,
            file_name: file_name.into(),
        }
    }

    fn get(&self, url: &str) -> Result<RawContent, LoadError> {
        let fetch_failed = |status: Option<u16>, message: String| LoadError::FetchFailed {
            url: url.to_owned(),
            status,
            message,
        };

        tracing::debug!(url, "Fetching remote content");
        let response = self
            .agent
            .get(url)
            .call()
            .map_err(|e| fetch_failed(None, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("Unknown Status");
            return Err(fetch_failed(
                Some(status.as_u16()),
                format!("{} {reason}", status.as_u16()),
            ));
        }

        let last_updated = response
            .headers()
            .get("last-modified")
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let text = response
            .into_body()
            .read_to_string()
            .map_err(|e| fetch_failed(Some(status.as_u16()), e.to_string()))?;

        Ok(RawContent { text, last_updated })
    }
}

impl ContentSource for RemoteSource {
    fn locate(&self, slug: &str) -> ContentLocation {
        ContentLocation::Url(format!("{}/{slug}/{}", self.base_url, self.file_name))
    }

    fn fetch(&self, location: &ContentLocation) -> Result<RawContent, LoadError> {
        match location {
            ContentLocation::Url(url) => self.get(url),
            ContentLocation::Path(path) => Err(LoadError::read(
                path,
                std::io::Error::new(
                    std::io::ErrorKind::Unsupported,
                    "remote source cannot read local paths",
                ),
            )),
        }
    }
}
