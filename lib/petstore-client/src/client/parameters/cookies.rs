use http::HeaderValue;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

use super::param::{ParamValues, ParameterValue};
use crate::client::error::ApiClientError;
use crate::client::operation::{OperationDescriptor, ParamLocation};

/// Bytes outside the cookie value grammar, plus `%`.
const COOKIE_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b',')
    .add(b';')
    .add(b'\\')
    .add(b'%');

/// Cookie parameters of an API call, sent in a single `Cookie` header.
#[derive(Debug, Clone)]
pub struct CallCookies {
    cookies: ParamValues,
}

impl Default for CallCookies {
    fn default() -> Self {
        Self::new()
    }
}

impl CallCookies {
    /// Creates an empty cookie set.
    pub fn new() -> Self {
        Self {
            cookies: ParamValues::new(ParamLocation::Cookie),
        }
    }

    /// Adds a cookie; `None` leaves the cookie unset.
    #[must_use]
    pub fn add_cookie<T>(mut self, name: impl Into<String>, value: T) -> Self
    where
        T: ParameterValue,
    {
        self.cookies.insert(name, &value);
        self
    }

    pub(in crate::client) fn set<T>(&mut self, name: impl Into<String>, value: &T)
    where
        T: ParameterValue + ?Sized,
    {
        self.cookies.insert(name, value);
    }

    /// Returns `true` if no cookie is set.
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }

    /// The `Cookie` header value, `name=value` pairs joined by `; `.
    pub(in crate::client) fn to_cookie_header(
        &self,
        operation: &OperationDescriptor,
    ) -> Result<Option<HeaderValue>, ApiClientError> {
        self.cookies.check_required(operation)?;
        if self.cookies.is_empty() {
            return Ok(None);
        }
        let mut pairs = Vec::new();
        for (name, resolved) in self.cookies.resolve(operation) {
            let value = resolved.to_string_value()?;
            pairs.push(format!("{name}={}", utf8_percent_encode(&value, COOKIE_VALUE)));
        }
        let value = HeaderValue::from_str(&pairs.join("; "))?;
        Ok(Some(value))
    }
}

#[cfg(test)]
mod tests {
    use http::Method;

    use super::*;
    use crate::client::operation::ParameterSpec;

    static OPERATION: OperationDescriptor = OperationDescriptor {
        operation_id: "getInventory",
        method: Method::GET,
        path: "/store/inventory",
        produces: &[],
        consumes: &[],
        parameters: &[ParameterSpec::cookie("session"), ParameterSpec::cookie("lang")],
        security: &[],
    };

    #[test]
    fn should_join_cookies_in_insertion_order() {
        let cookies = CallCookies::new()
            .add_cookie("session", "abc123")
            .add_cookie("lang", "en");

        let header = cookies
            .to_cookie_header(&OPERATION)
            .expect("valid")
            .expect("some cookies");

        insta::assert_snapshot!(header.to_str().expect("ascii"), @"session=abc123; lang=en");
    }

    #[test]
    fn should_encode_cookie_value() {
        let cookies = CallCookies::new().add_cookie("session", "a b;c=d%");

        let header = cookies
            .to_cookie_header(&OPERATION)
            .expect("valid")
            .expect("some cookies");

        insta::assert_snapshot!(header.to_str().expect("ascii"), @"session=a%20b%3Bc=d%25");
    }

    #[test]
    fn should_not_send_cookie_header_when_empty() {
        let cookies = CallCookies::new().add_cookie("session", None::<String>);

        let header = cookies.to_cookie_header(&OPERATION).expect("valid");

        assert!(header.is_none());
    }
}
