use http::Method;

use super::media::MediaType;

/// Where a parameter value is placed in the HTTP request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamLocation {
    /// Substituted into the path template.
    Path,
    /// Appended to the query string.
    Query,
    /// Sent as a request header.
    Header,
    /// Sent in the `Cookie` header.
    Cookie,
    /// Sent as a form field (`application/x-www-form-urlencoded`).
    Form,
    /// Sent as the request body.
    Body,
}

/// How a collection value is written for query and header parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CollectionFormat {
    /// A single key with comma-separated values: `tags=a,b`.
    #[default]
    Csv,
    /// The key repeated once per value: `tags=a&tags=b`.
    Multi,
}

/// Security schemes declared by Petstore operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecurityScheme {
    /// The `api_key` header.
    ApiKey,
    /// The `petstore_auth` OAuth2 scheme, sent as a bearer token.
    PetstoreAuth,
}

/// Declaration of a single operation parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParameterSpec {
    /// The wire name.
    pub name: &'static str,
    /// The placement.
    pub location: ParamLocation,
    /// Whether the parameter must be supplied.
    pub required: bool,
    /// Serialization rule for collection values.
    pub format: CollectionFormat,
}

impl ParameterSpec {
    const fn new(name: &'static str, location: ParamLocation) -> Self {
        Self {
            name,
            location,
            required: false,
            format: CollectionFormat::Csv,
        }
    }

    /// A path parameter; path parameters are always required.
    pub const fn path(name: &'static str) -> Self {
        Self::new(name, ParamLocation::Path).required()
    }

    /// An optional query parameter.
    pub const fn query(name: &'static str) -> Self {
        Self::new(name, ParamLocation::Query)
    }

    /// An optional header parameter.
    pub const fn header(name: &'static str) -> Self {
        Self::new(name, ParamLocation::Header)
    }

    /// An optional cookie parameter.
    pub const fn cookie(name: &'static str) -> Self {
        Self::new(name, ParamLocation::Cookie)
    }

    /// An optional form field.
    pub const fn form(name: &'static str) -> Self {
        Self::new(name, ParamLocation::Form)
    }

    /// An optional request body.
    pub const fn body(name: &'static str) -> Self {
        Self::new(name, ParamLocation::Body)
    }

    /// Marks the parameter as required.
    #[must_use]
    pub const fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Uses the [`CollectionFormat::Multi`] serialization.
    #[must_use]
    pub const fn multi(mut self) -> Self {
        self.format = CollectionFormat::Multi;
        self
    }
}

/// Static description of a Petstore endpoint.
///
/// One `static` descriptor exists per operation; it fixes everything the
/// caller cannot choose per call: the method, the path template, the media
/// types, the parameter placements and the security schemes.
#[derive(Debug, Clone)]
pub struct OperationDescriptor {
    /// The operation id, used in error messages.
    pub operation_id: &'static str,
    /// The HTTP method.
    pub method: Method,
    /// The path template with `{name}` placeholders.
    pub path: &'static str,
    /// Response media types, in preference order.
    pub produces: &'static [MediaType],
    /// Request media types, in preference order.
    pub consumes: &'static [MediaType],
    /// Declared parameters.
    pub parameters: &'static [ParameterSpec],
    /// Security schemes accepted by the operation.
    pub security: &'static [SecurityScheme],
}

impl OperationDescriptor {
    /// Finds the declaration of a parameter by name and location.
    pub fn parameter(&self, name: &str, location: ParamLocation) -> Option<&'static ParameterSpec> {
        self.parameters
            .iter()
            .find(|spec| spec.location == location && spec.name == name)
    }

    /// Required parameters declared for a location.
    pub fn required(&self, location: ParamLocation) -> impl Iterator<Item = &'static ParameterSpec> {
        self.parameters
            .iter()
            .filter(move |spec| spec.required && spec.location == location)
    }

    /// Returns `true` if the operation accepts the given scheme.
    pub fn accepts_scheme(&self, scheme: SecurityScheme) -> bool {
        self.security.contains(&scheme)
    }
}
