//! Configuration management for the SendGrid connector

use std::path::PathBuf;

use log::warn;
use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Global SendGrid API endpoint
pub const GLOBAL_BASE_URL: &str = "https://api.sendgrid.com/";

/// EU-regional SendGrid API endpoint
pub const EU_BASE_URL: &str = "https://api.eu.sendgrid.com/";

/// Default number of concurrent teammate detail fetches during a cache build
pub const DEFAULT_DETAIL_CONCURRENCY: usize = 8;

/// SendGrid data-residency region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    #[default]
    Global,
    Eu,
}

impl Region {
    /// Parse a configured region, falling back to `Global` for unknown values.
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "" | "global" => Region::Global,
            "eu" => Region::Eu,
            other => {
                warn!(
                    "invalid sendgrid region {:?}, using the default global URL",
                    other
                );
                Region::Global
            }
        }
    }

    pub fn base_url(&self) -> &'static str {
        match self {
            Region::Global => GLOBAL_BASE_URL,
            Region::Eu => EU_BASE_URL,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Global => "global",
            Region::Eu => "eu",
        }
    }
}

/// Connector configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// SendGrid API key
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Region selector (`global` or `eu`), kept as text so unknown values degrade gracefully
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,

    /// Skip subuser sync entirely (subusers are an upgraded SendGrid feature)
    #[serde(default)]
    pub ignore_subusers: bool,

    /// Custom API host, overrides the region endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_host: Option<String>,

    /// Width of the teammate detail fetch pool
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_concurrency: Option<usize>,
}

impl Config {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".sendgrid-connector").join("config.yaml"))
    }

    /// Resolve an optional override to a concrete config path
    pub fn resolve_path(path: Option<&str>) -> Result<PathBuf> {
        match path {
            Some(p) => Ok(PathBuf::from(p)),
            None => Self::default_path(),
        }
    }

    /// Load configuration from an optional path (defaults to ~/.sendgrid-connector/config.yaml)
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        Self::load_from(Self::resolve_path(path)?)
    }

    /// Load configuration, treating a missing file as an empty config
    pub fn load_or_default_at(path: Option<&str>) -> Result<Self> {
        match Self::load_at(path) {
            Err(crate::error::Error::Config(ConfigError::NotFound)) => Ok(Self::default()),
            other => other,
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound.into());
        }

        let contents = std::fs::read_to_string(&path)?;
        let config: Config = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;

        Ok(config)
    }

    /// Save configuration to an optional path
    pub fn save_at(&self, path: Option<&str>) -> Result<()> {
        self.save_to(Self::resolve_path(path)?)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents =
            serde_yaml::to_string(self).map_err(|e| ConfigError::SaveError(e.to_string()))?;

        std::fs::write(&path, contents)?;

        // The file holds a secret
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path)?.permissions();
            perms.set_mode(0o600);
            std::fs::set_permissions(&path, perms)?;
        }

        Ok(())
    }

    /// Resolved region, unknown values fall back to global
    pub fn region(&self) -> Region {
        self.region
            .as_deref()
            .map(Region::parse_lenient)
            .unwrap_or_default()
    }

    /// The configured API key, rejecting missing and blank values
    pub fn require_api_key(&self) -> Result<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => Err(ConfigError::MissingApiKey.into()),
        }
    }

    /// Base URL for upstream requests, always ending in `/`
    pub fn base_url(&self) -> Result<Url> {
        match self.api_host.as_deref() {
            Some(host) => parse_base_url(host),
            None => self.base_url_for(self.region()),
        }
    }

    /// Base URL for an already-resolved region; `api_host` still wins.
    pub fn base_url_for(&self, region: Region) -> Result<Url> {
        parse_base_url(self.api_host.as_deref().unwrap_or(region.base_url()))
    }

    pub fn detail_concurrency(&self) -> usize {
        self.detail_concurrency
            .unwrap_or(DEFAULT_DETAIL_CONCURRENCY)
            .max(1)
    }

    /// Validate everything needed to talk to the upstream, returning the
    /// resolved base URL.
    pub fn validate(&self) -> Result<Url> {
        self.require_api_key()?;
        self.base_url()
    }
}

/// Parse a base URL so that relative endpoint paths join beneath it.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw.trim())
        .map_err(|e| ConfigError::InvalidBaseUrl(format!("{}: {}", raw, e)))?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidBaseUrl(raw.to_string()).into());
    }

    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }

    Ok(url)
}
