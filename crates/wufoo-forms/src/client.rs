//! Schema client for the Wufoo REST API.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{FormError, Result};
use crate::record::{FieldRecord, FieldsResponse};

/// API version segment of every endpoint.
pub const API_VERSION: &str = "v3";
/// Response format suffix appended to endpoint paths.
pub const API_FORMAT: &str = "json";

/// Returns the API root for an account subdomain.
#[must_use]
pub fn api_url(domain: &str) -> String {
    format!("https://{domain}.wufoo.com/api/{API_VERSION}")
}

/// Anything that can supply the field records of a form.
pub trait SchemaSource {
    /// Returns the raw field records of `form_hash`, in form order.
    ///
    /// # Errors
    ///
    /// Implementations report transport, authentication and decoding
    /// failures through [`FormError`].
    fn get_fields(&self, form_hash: &str) -> Result<Vec<FieldRecord>>;
}

impl<T: SchemaSource + ?Sized> SchemaSource for &T {
    fn get_fields(&self, form_hash: &str) -> Result<Vec<FieldRecord>> {
        (**self).get_fields(form_hash)
    }
}

/// Connection settings for [`SchemaClient`].
#[derive(Clone, Deserialize)]
pub struct ClientConfig {
    /// Account subdomain, e.g. `acme` for `acme.wufoo.com`.
    pub domain: String,
    /// API key, sent as the basic-auth user name.
    pub api_key: String,
    /// Overrides the API root derived from `domain`.
    #[serde(default)]
    pub api_base: Option<String>,
    /// Request timeout in seconds.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("domain", &self.domain)
            .field("api_base", &self.api_base)
            .field("timeout_secs", &self.timeout_secs)
            .finish_non_exhaustive()
    }
}

impl ClientConfig {
    /// Creates a configuration for the given account.
    #[must_use]
    pub fn new(domain: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            api_key: api_key.into(),
            api_base: None,
            timeout_secs: None,
        }
    }

    /// Sets the API root.
    #[must_use]
    pub fn api_base(mut self, base: impl Into<String>) -> Self {
        self.api_base = Some(base.into());
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// Blocking HTTP client authenticated with an API key.
#[derive(Debug)]
pub struct SchemaClient {
    http: Client,
    api_url: String,
    domain: String,
    api_key: String,
}

impl SchemaClient {
    /// Creates a client from its configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            api_url: config
                .api_base
                .clone()
                .unwrap_or_else(|| api_url(&config.domain)),
            domain: config.domain.clone(),
            api_key: config.api_key.clone(),
        })
    }

    #[must_use]
    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// Joins path parts under the API root and appends the format suffix.
    #[must_use]
    pub fn url(&self, parts: &[&str]) -> String {
        let mut path = self.api_url.trim_end_matches('/').to_string();
        for part in parts {
            path.push('/');
            path.push_str(part.trim_matches('/'));
        }
        format!("{}.{API_FORMAT}", path.trim_end_matches('/'))
    }
}

impl SchemaSource for SchemaClient {
    fn get_fields(&self, form_hash: &str) -> Result<Vec<FieldRecord>> {
        let url = self.url(&["forms", form_hash, "fields"]);
        debug!(%url, "fetching form fields");

        let response = self
            .http
            .get(&url)
            .basic_auth(&self.api_key, Some(""))
            .send()?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            warn!(%url, status = status.as_u16(), "API key rejected");
            return Err(FormError::Auth {
                status: status.as_u16(),
            });
        }
        if !status.is_success() {
            let body = response.text().unwrap_or_else(|err| {
                debug!(%url, %err, "failed to read error body");
                String::new()
            });
            return Err(FormError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text()?;
        let schema: FieldsResponse = serde_json::from_str(&body)?;
        debug!(fields = schema.fields.len(), "fetched form fields");
        Ok(schema.fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url() {
        assert_eq!(api_url("acme"), "https://acme.wufoo.com/api/v3");
    }

    #[test]
    fn test_endpoint_url() {
        let config = ClientConfig::new("acme", "KEY");
        let client = SchemaClient::new(&config).unwrap();
        assert_eq!(
            client.url(&["forms", "z7x4m1", "fields"]),
            "https://acme.wufoo.com/api/v3/forms/z7x4m1/fields.json"
        );
        assert_eq!(client.domain(), "acme");
    }

    #[test]
    fn test_endpoint_url_strips_slashes() {
        let config = ClientConfig::new("acme", "KEY")
            .api_base("http://127.0.0.1:8080/api/v3/");
        let client = SchemaClient::new(&config).unwrap();
        assert_eq!(
            client.url(&["forms", "z7x4m1/"]),
            "http://127.0.0.1:8080/api/v3/forms/z7x4m1.json"
        );
    }

    #[test]
    fn test_config_debug_hides_key() {
        let config = ClientConfig::new("acme", "SECRET-KEY").timeout_secs(5);
        let debug = format!("{config:?}");
        assert!(debug.contains("acme"));
        assert!(!debug.contains("SECRET-KEY"));
    }

    #[test]
    fn test_config_deserialize() {
        let body = r#"{"domain": "acme", "api_key": "KEY"}"#;
        let config: ClientConfig = serde_json::from_str(body).unwrap();
        assert_eq!(config.domain, "acme");
        assert_eq!(config.api_base, None);
        assert_eq!(config.timeout_secs, None);
    }
}
