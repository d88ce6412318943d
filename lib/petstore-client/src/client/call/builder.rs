use std::time::Duration;

use super::ApiCall;
use crate::client::parameters::{ParameterValue, RequestBody};
use crate::client::{ApiClientError, CallBody, CallCookies, CallForm, CallHeaders, CallQuery};

impl ApiCall {
    // =============================================================================
    // Parameter Methods
    // =============================================================================

    /// Sets a path parameter.
    pub fn with_path_param<T>(mut self, name: impl Into<String>, value: T) -> Self
    where
        T: ParameterValue,
    {
        self.path.set(name, &value);
        self
    }

    /// Sets a query parameter.
    ///
    /// The collection format comes from the operation descriptor.
    ///
    /// ```rust
    /// use petstore_client::api::pet::FIND_PETS_BY_TAGS;
    /// use petstore_client::ApiClient;
    ///
    /// # fn example() -> Result<(), petstore_client::ApiClientError> {
    /// let client = ApiClient::builder().build()?;
    /// let request = client
    ///     .call(&FIND_PETS_BY_TAGS)
    ///     .with_query_param("tags", ["tag1", "tag2"])
    ///     .into_request()?;
    /// assert_eq!(request.url().query(), Some("tags=tag1&tags=tag2"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_query_param<T>(mut self, name: impl Into<String>, value: T) -> Self
    where
        T: ParameterValue,
    {
        self.query.set(name, &value);
        self
    }

    /// Replaces all query parameters.
    pub fn with_query(mut self, query: CallQuery) -> Self {
        self.query = query;
        self
    }

    /// Sets a header parameter.
    pub fn with_header<T>(mut self, name: impl Into<String>, value: T) -> Self
    where
        T: ParameterValue,
    {
        self.headers.set(name, &value);
        self
    }

    /// Replaces all header parameters.
    pub fn with_headers(mut self, headers: CallHeaders) -> Self {
        self.headers = headers;
        self
    }

    /// Sets a cookie parameter.
    pub fn with_cookie<T>(mut self, name: impl Into<String>, value: T) -> Self
    where
        T: ParameterValue,
    {
        self.cookies.set(name, &value);
        self
    }

    /// Replaces all cookie parameters.
    pub fn with_cookies(mut self, cookies: CallCookies) -> Self {
        self.cookies = cookies;
        self
    }

    /// Sets a form field.
    pub fn with_form_field<T>(mut self, name: impl Into<String>, value: T) -> Self
    where
        T: ParameterValue,
    {
        self.form.set(name, &value);
        self
    }

    /// Replaces all form fields.
    pub fn with_form(mut self, form: CallForm) -> Self {
        self.form = form;
        self
    }

    // =============================================================================
    // Request Body Methods
    // =============================================================================

    /// Sets the request body.
    ///
    /// The content type is the first media type of the operation that the
    /// body supports.
    ///
    /// # Errors
    ///
    /// Fails if no media type matches or if the body cannot be encoded.
    pub fn with_body<B>(mut self, body: &B) -> Result<Self, ApiClientError>
    where
        B: RequestBody + ?Sized,
    {
        self.body = Some(CallBody::encode(self.operation, body)?);
        Ok(self)
    }

    /// Sets an optional request body; `None` sends no body and no `Content-Type`.
    ///
    /// # Errors
    ///
    /// Fails if no media type matches or if the body cannot be encoded.
    pub fn with_optional_body<B>(self, body: Option<&B>) -> Result<Self, ApiClientError>
    where
        B: RequestBody + ?Sized,
    {
        match body {
            Some(body) => self.with_body(body),
            None => Ok(Self { body: None, ..self }),
        }
    }

    // =============================================================================
    // Transport Methods
    // =============================================================================

    /// Sets a timeout for this call only.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Does not send the client credentials with this call.
    pub fn without_authentication(mut self) -> Self {
        self.authentications.clear();
        self
    }
}
