use std::env;
use std::fmt::Debug;
use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use http::Uri;
use http::uri::{PathAndQuery, Scheme};
use tracing::debug;
use url::Url;

use super::auth::{Authentication, SecureString};
use super::{ApiClient, ApiClientError};

/// Base path of the Petstore API.
pub const DEFAULT_BASE_PATH: &str = "/api/v3";

/// Environment variable holding the full base URL.
pub const BASE_URL_VAR: &str = "PETSTORE_BASE_URL";
/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "PETSTORE_API_KEY";
/// Environment variable holding the bearer access token.
pub const ACCESS_TOKEN_VAR: &str = "PETSTORE_ACCESS_TOKEN";

/// Builder for [`ApiClient`].
///
/// # Default Configuration
///
/// - **Scheme**: HTTP
/// - **Host**: 127.0.0.1
/// - **Port**: 80
/// - **Base path**: `/api/v3`
/// - **Transport**: a fresh `reqwest::Client`
/// - **Credentials**: none
///
/// # Example
///
/// ```rust
/// use std::time::Duration;
/// use petstore_client::ApiClient;
///
/// # fn example() -> Result<(), petstore_client::ApiClientError> {
/// let client = ApiClient::builder()
///     .with_host("petstore.example.com")
///     .with_port(8080)
///     .with_timeout(Duration::from_secs(5))
///     .with_api_key("special-key")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClientBuilder {
    client: Option<reqwest::Client>,
    scheme: Scheme,
    host: String,
    port: u16,
    base_path: PathAndQuery,
    base_url: Option<Url>,
    timeout: Option<Duration>,
    authentications: Vec<Authentication>,
}

impl ApiClientBuilder {
    /// Builds the client.
    ///
    /// # Errors
    ///
    /// Fails if the base URL cannot be built from the configured parts.
    pub fn build(self) -> Result<ApiClient, ApiClientError> {
        let Self {
            client,
            scheme,
            host,
            port,
            base_path,
            base_url,
            timeout,
            authentications,
        } = self;

        let base_uri = match base_url {
            Some(url) => url,
            None => {
                let uri = Uri::builder()
                    .scheme(scheme)
                    .authority(format!("{host}:{port}"))
                    .path_and_query(base_path.path())
                    .build()?;
                Url::parse(&uri.to_string())?
            }
        };
        debug!(%base_uri, "building Petstore client");

        Ok(ApiClient {
            client: client.unwrap_or_default(),
            base_uri,
            authentications,
            timeout,
        })
    }

    /// Reads the configuration from the environment.
    ///
    /// - `PETSTORE_BASE_URL`: the full base URL (e.g. `http://localhost:8080/api/v3`)
    /// - `PETSTORE_API_KEY`: sent in the `api_key` header
    /// - `PETSTORE_ACCESS_TOKEN`: sent as a bearer token
    ///
    /// Unset variables keep the defaults.
    ///
    /// # Errors
    ///
    /// Fails if `PETSTORE_BASE_URL` is not a valid base URL.
    pub fn from_env() -> Result<Self, ApiClientError> {
        Self::from_vars(|name| env::var(name).ok())
    }

    fn from_vars<F>(var: F) -> Result<Self, ApiClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut result = Self::default();
        if let Some(base_url) = var(BASE_URL_VAR) {
            result = result.with_base_url(&base_url)?;
        }
        if let Some(key) = var(API_KEY_VAR) {
            result = result.with_api_key(key);
        }
        if let Some(token) = var(ACCESS_TOKEN_VAR) {
            result = result.with_bearer_token(token);
        }
        Ok(result)
    }

    /// Sets the HTTP scheme.
    pub fn with_scheme(mut self, scheme: Scheme) -> Self {
        self.scheme = scheme;
        self
    }

    /// Sets the host name or IP address.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Sets the port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the base path prepended to every operation path.
    ///
    /// # Errors
    ///
    /// Returns `ApiClientError::InvalidBaseUrl` if the path is not a valid URI path.
    pub fn with_base_path<P>(mut self, base_path: P) -> Result<Self, ApiClientError>
    where
        P: TryInto<PathAndQuery>,
        P::Error: Debug + 'static,
    {
        let base_path = base_path
            .try_into()
            .map_err(|err| ApiClientError::InvalidBaseUrl {
                error: format!("{err:?}"),
            })?;
        self.base_path = base_path;
        Ok(self)
    }

    /// Sets the full base URL, overriding scheme, host, port and base path.
    ///
    /// # Errors
    ///
    /// Returns `ApiClientError::InvalidBaseUrl` if the URL is not an absolute
    /// `http` or `https` URL.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, ApiClientError> {
        let url = Url::parse(base_url).map_err(|err| ApiClientError::InvalidBaseUrl {
            error: format!("{base_url}: {err}"),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiClientError::InvalidBaseUrl {
                error: format!("{base_url}: unsupported scheme '{}'", url.scheme()),
            });
        }
        self.base_url = Some(url);
        Ok(self)
    }

    /// Uses a shared `reqwest::Client` (connection pool, proxies, TLS settings).
    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Sets a timeout applied to every request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Adds credentials, sent to operations declaring the matching scheme.
    ///
    /// A credential of the same scheme replaces the previous one.
    pub fn with_authentication(mut self, authentication: Authentication) -> Self {
        let scheme = authentication.scheme();
        self.authentications.retain(|auth| auth.scheme() != scheme);
        self.authentications.push(authentication);
        self
    }

    /// Sends `key` in the `api_key` header.
    pub fn with_api_key(self, key: impl Into<SecureString>) -> Self {
        self.with_authentication(Authentication::api_key(key))
    }

    /// Sends `token` as `Authorization: Bearer <token>`.
    pub fn with_bearer_token(self, token: impl Into<SecureString>) -> Self {
        self.with_authentication(Authentication::Bearer(token.into()))
    }
}

impl Default for ApiClientBuilder {
    fn default() -> Self {
        Self {
            client: None,
            scheme: Scheme::HTTP,
            host: IpAddr::V4(Ipv4Addr::LOCALHOST).to_string(),
            port: 80,
            base_path: PathAndQuery::from_static(DEFAULT_BASE_PATH),
            base_url: None,
            timeout: None,
            authentications: Vec::new(),
        }
    }
}
