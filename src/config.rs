//! Server endpoint configuration.
//!
//! The base URL of the server that receives card details comes from the
//! `CARD_FORM_SERVER_URL` environment variable, either baked in at build
//! time or read at run time.

use thiserror::Error;
use url::Url;

/// Environment variable holding the server base URL.
pub const SERVER_URL_VAR: &str = "CARD_FORM_SERVER_URL";

/// Path of the save endpoint, relative to the server base URL.
pub const SAVE_PATH: &str = "credits/savecreditinfo";

/// Server URL captured when the crate was compiled.
const BUILD_SERVER_URL: Option<&str> = option_env!("CARD_FORM_SERVER_URL");

/// Configuration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No server URL was configured.
    #[error("CARD_FORM_SERVER_URL is not set")]
    Missing,

    /// The server URL could not be parsed.
    #[error("invalid server URL '{url}': {source}")]
    InvalidUrl {
        /// The URL as configured.
        url: String,
        /// Parser error.
        source: url::ParseError,
    },

    /// The server URL uses a scheme other than http or https.
    #[error("unsupported URL scheme '{0}' (expected http or https)")]
    UnsupportedScheme(String),
}

/// Where submissions are sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    server_url: Url,
    endpoint: Url,
}

impl ClientConfig {
    /// Builds a configuration from a base URL such as `https://api.example.com`.
    ///
    /// A trailing slash is accepted, and so is a base path
    /// (`https://example.com/api`).
    ///
    /// # Example
    ///
    /// ```
    /// use card_form::config::ClientConfig;
    ///
    /// let config = ClientConfig::new("http://localhost:8080/").unwrap();
    /// assert_eq!(
    ///     config.endpoint().as_str(),
    ///     "http://localhost:8080/credits/savecreditinfo"
    /// );
    /// ```
    pub fn new(server_url: &str) -> Result<Self, ConfigError> {
        let trimmed = server_url.trim();
        if trimmed.is_empty() {
            return Err(ConfigError::Missing);
        }

        let mut url = Url::parse(trimmed).map_err(|source| ConfigError::InvalidUrl {
            url: trimmed.to_string(),
            source,
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => return Err(ConfigError::UnsupportedScheme(other.to_string())),
        }

        // Joining relative paths replaces the last segment unless the base
        // ends with a slash.
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }

        let endpoint = url.join(SAVE_PATH).map_err(|source| ConfigError::InvalidUrl {
            url: trimmed.to_string(),
            source,
        })?;

        Ok(Self {
            server_url: url,
            endpoint,
        })
    }

    /// Uses the server URL compiled into the binary.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(BUILD_SERVER_URL.ok_or(ConfigError::Missing)?)
    }

    /// Uses the run-time environment variable, falling back to the build-time value.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(SERVER_URL_VAR) {
            Ok(value) if !value.trim().is_empty() => Self::new(&value),
            _ => Self::from_build_env(),
        }
    }

    /// The server base URL, always ending with `/`.
    #[inline]
    pub fn server_url(&self) -> &Url {
        &self.server_url
    }

    /// The full URL of the save endpoint.
    #[inline]
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}
