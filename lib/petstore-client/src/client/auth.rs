use std::fmt;

use http::HeaderValue;
use reqwest::header::{AUTHORIZATION, HeaderName};
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::operation::SecurityScheme;

/// Header carrying the Petstore API key.
pub const API_KEY_HEADER: &str = "api_key";

/// Errors raised while turning credentials into headers.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Error, derive_more::Display)]
pub enum AuthenticationError {
    /// Bearer token contains invalid characters for HTTP headers.
    #[display("Bearer token contains invalid characters: {message}")]
    InvalidBearerToken {
        /// Description of the invalid characters or format issue.
        message: String,
    },

    /// API key header name is invalid.
    #[display("Invalid API key header name '{header_name}': {message}")]
    InvalidHeaderName {
        /// The invalid header name that was provided.
        header_name: String,
        /// Description of why the header name is invalid.
        message: String,
    },

    /// API key value contains invalid characters for HTTP headers.
    #[display("API key contains invalid characters: {message}")]
    InvalidApiKey {
        /// Description of the invalid characters or format issue.
        message: String,
    },
}

/// A credential string, zeroed on drop and masked when printed.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecureString(String);

impl SecureString {
    /// Creates a new secure string from the provided value.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Returns a reference to the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn masked(&self) -> String {
        let count = self.0.chars().count();
        if count <= 8 {
            return "***".to_string();
        }
        let head = self.0.chars().take(4).collect::<String>();
        let tail = self.0.chars().skip(count - 4).collect::<String>();
        format!("{head}...{tail}")
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecureString")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl From<String> for SecureString {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for SecureString {
    fn from(value: &str) -> Self {
        Self::new(value.to_string())
    }
}

/// Credentials attached to requests of secured operations.
///
/// A credential is only sent when the operation lists the matching
/// [`SecurityScheme`]; the client does not negotiate or refresh anything.
///
/// ```rust
/// use petstore_client::Authentication;
///
/// let auth = Authentication::api_key("special-key");
/// let auth = Authentication::Bearer("my-access-token".into());
/// ```
#[derive(Clone)]
pub enum Authentication {
    /// API key sent as `<header_name>: <key>`.
    ApiKey {
        /// The header name for the API key.
        header_name: String,
        /// The API key value.
        key: SecureString,
    },

    /// Access token sent as `Authorization: Bearer <token>`.
    Bearer(SecureString),
}

impl Authentication {
    /// An API key sent in the standard `api_key` header.
    pub fn api_key(key: impl Into<SecureString>) -> Self {
        Self::ApiKey {
            header_name: API_KEY_HEADER.to_string(),
            key: key.into(),
        }
    }

    /// The security scheme this credential satisfies.
    pub fn scheme(&self) -> SecurityScheme {
        match self {
            Self::ApiKey { .. } => SecurityScheme::ApiKey,
            Self::Bearer(_) => SecurityScheme::PetstoreAuth,
        }
    }

    /// Converts the credential into a header.
    ///
    /// # Errors
    ///
    /// Returns `AuthenticationError` if the credential contains characters
    /// not allowed in HTTP headers.
    pub fn to_header(&self) -> Result<(HeaderName, HeaderValue), AuthenticationError> {
        match self {
            Self::ApiKey { header_name, key } => {
                let header = HeaderName::from_bytes(header_name.as_bytes()).map_err(|err| {
                    AuthenticationError::InvalidHeaderName {
                        header_name: header_name.clone(),
                        message: err.to_string(),
                    }
                })?;
                let mut value = HeaderValue::from_str(key.as_str()).map_err(|err| {
                    AuthenticationError::InvalidApiKey {
                        message: err.to_string(),
                    }
                })?;
                value.set_sensitive(true);
                Ok((header, value))
            }
            Self::Bearer(token) => {
                let mut value =
                    HeaderValue::from_str(&format!("Bearer {}", token.as_str())).map_err(|err| {
                        AuthenticationError::InvalidBearerToken {
                            message: err.to_string(),
                        }
                    })?;
                value.set_sensitive(true);
                Ok((AUTHORIZATION, value))
            }
        }
    }
}

impl fmt::Debug for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey { header_name, .. } => f
                .debug_struct("ApiKey")
                .field("header_name", header_name)
                .field("key", &"[REDACTED]")
                .finish(),
            Self::Bearer(_) => f.debug_tuple("Bearer").field(&"[REDACTED]").finish(),
        }
    }
}

impl fmt::Display for Authentication {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ApiKey { header_name, key } => write!(f, "ApiKey ({header_name}: {key})"),
            Self::Bearer(token) => write!(f, "Bearer {token}"),
        }
    }
}
