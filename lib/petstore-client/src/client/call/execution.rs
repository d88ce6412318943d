use std::future::{Future, IntoFuture};
use std::pin::Pin;

use headers::HeaderMapExt;
use http::header::{ACCEPT, COOKIE};
use reqwest::{Body, Request, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};
use url::Url;

use super::ApiCall;
use crate::client::media::{MediaType, accept_header, select_accepts};
use crate::client::operation::ParamLocation;
use crate::client::parameters::PathResolved;
use crate::client::response::stream::{from_items, json_items};
use crate::client::response::{ItemStream, Output};
use crate::client::{ApiClientError, CallBody, CallResult};

impl ApiCall {
    /// Builds the HTTP request without sending it.
    ///
    /// All parameter checks happen here: nothing is sent when this fails.
    ///
    /// # Errors
    ///
    /// - [`ApiClientError::MissingParameter`] if a required parameter is absent
    /// - an encoding error if a parameter value cannot be written in its placement
    pub fn into_request(&self) -> Result<Request, ApiClientError> {
        let operation = self.operation;

        let path = PathResolved::resolve(&self.path, operation)?;
        let query = self.query.to_query_string(operation)?;
        let headers = self.headers.to_header_map(operation)?;
        let cookie = self.cookies.to_cookie_header(operation)?;
        let body = self.request_body()?;

        let url = Self::build_url(&self.base_uri, &path, &query)?;
        let mut request = Request::new(operation.method.clone(), url);
        *request.timeout_mut() = self.timeout;

        let req_headers = request.headers_mut();
        for authentication in &self.authentications {
            if operation.accepts_scheme(authentication.scheme()) {
                let (name, value) = authentication.to_header()?;
                req_headers.insert(name, value);
            }
        }
        if let Some(accept) = accept_header(&select_accepts(operation.produces))? {
            req_headers.insert(ACCEPT, accept);
        }
        for (name, value) in &headers {
            req_headers.insert(name, value.clone());
        }
        if let Some(cookie) = cookie {
            req_headers.insert(COOKIE, cookie);
        }

        if let Some(body) = body {
            req_headers.typed_insert(body.content_type());
            *request.body_mut() = Some(Body::from(body.data));
        }

        Ok(request)
    }

    /// The body to send: the explicit body, or the encoded form fields.
    fn request_body(&self) -> Result<Option<CallBody>, ApiClientError> {
        let operation = self.operation;
        let form = self.form.encode(operation)?;

        let body = match (&self.body, form) {
            (Some(body), Some(_)) => {
                warn!(
                    operation = operation.operation_id,
                    "both body and form fields set, form fields are ignored"
                );
                Some(body.clone())
            }
            (Some(body), None) => Some(body.clone()),
            (None, Some(form)) => Some(CallBody::form(form)),
            (None, None) => None,
        };

        if body.is_none()
            && let Some(spec) = operation.required(ParamLocation::Body).next()
        {
            return Err(ApiClientError::MissingParameter {
                operation: operation.operation_id,
                parameter: spec.name.to_string(),
            });
        }
        Ok(body)
    }

    pub(super) fn build_url(
        base_uri: &Url,
        path: &PathResolved,
        query: &str,
    ) -> Result<Url, ApiClientError> {
        let url = format!(
            "{}/{}",
            base_uri.as_str().trim_end_matches('/'),
            path.path.trim_start_matches('/')
        );
        let mut url = url.parse::<Url>()?;
        if !query.is_empty() {
            url.set_query(Some(query));
        }
        Ok(url)
    }

    async fn send(self) -> Result<Response, ApiClientError> {
        let request = self.into_request()?;

        debug!(?request, "sending...");
        let response = self.client.execute(request).await?;
        debug!(?response, "...receiving");

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let headers = response.headers().clone();
        let body = response
            .text()
            .await
            .unwrap_or_else(|err| format!("<unable to read response body: {err}>"));
        Err(ApiClientError::http_status_failure(status, headers, body))
    }

    /// Sends the request and reads the whole response.
    ///
    /// # Errors
    ///
    /// - [`ApiClientError::MissingParameter`] and encoding errors, before sending
    /// - [`ApiClientError::TransportFailure`] if no response was received
    /// - [`ApiClientError::HttpStatusFailure`] for a non-2xx status
    pub async fn exchange(self) -> Result<CallResult, ApiClientError> {
        let operation = self.operation;
        let response = self.send().await?;
        CallResult::new(operation, response).await
    }

    /// Sends the request and decodes the collection body element by element.
    ///
    /// A JSON array is decoded while bytes arrive; other media types are read
    /// whole first. Each stream issues its own request; errors while reading
    /// the body are yielded as the last item.
    ///
    /// # Errors
    ///
    /// Same as [`exchange`](Self::exchange) for everything happening before
    /// the body is read.
    pub async fn stream<T>(self) -> Result<ItemStream<T>, ApiClientError>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let operation = self.operation;
        let response = self.send().await?;

        let media_type = CallResult::response_media_type(operation, response.headers())?;
        if media_type == Some(MediaType::Json) {
            return Ok(json_items(Box::pin(response.bytes_stream())));
        }

        let data = response.bytes().await?;
        let items = Output::new(media_type, data.to_vec()).decode_items()?;
        Ok(from_items(items))
    }
}

impl IntoFuture for ApiCall {
    type Output = Result<CallResult, ApiClientError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.exchange())
    }
}
