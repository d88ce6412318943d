use http::{HeaderMap, HeaderName, HeaderValue};

use super::param::{ParamValues, ParameterValue};
use crate::client::error::ApiClientError;
use crate::client::operation::{OperationDescriptor, ParamLocation};

/// Header parameters of an API call.
///
/// A header is never repeated: collection values are always joined with commas.
#[derive(Debug, Clone)]
pub struct CallHeaders {
    headers: ParamValues,
}

impl Default for CallHeaders {
    fn default() -> Self {
        Self::new()
    }
}

impl CallHeaders {
    /// Creates an empty header set.
    pub fn new() -> Self {
        Self {
            headers: ParamValues::new(ParamLocation::Header),
        }
    }

    /// Adds a header parameter; `None` leaves the header unset.
    #[must_use]
    pub fn add_header<T>(mut self, name: impl Into<String>, value: T) -> Self
    where
        T: ParameterValue,
    {
        self.headers.insert(name, &value);
        self
    }

    pub(in crate::client) fn set<T>(&mut self, name: impl Into<String>, value: &T)
    where
        T: ParameterValue + ?Sized,
    {
        self.headers.insert(name, value);
    }

    /// Returns `true` if no header is set.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub(in crate::client) fn to_header_map(
        &self,
        operation: &OperationDescriptor,
    ) -> Result<HeaderMap, ApiClientError> {
        self.headers.check_required(operation)?;
        let mut result = HeaderMap::new();
        for (name, resolved) in self.headers.resolve(operation) {
            let name = HeaderName::from_bytes(name.as_bytes())?;
            for value in resolved.to_multi_values()? {
                result.append(name.clone(), HeaderValue::from_str(&value)?);
            }
        }
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use http::Method;

    use super::*;
    use crate::client::operation::ParameterSpec;

    static DELETE_PET: OperationDescriptor = OperationDescriptor {
        operation_id: "deletePet",
        method: Method::DELETE,
        path: "/pet/{petId}",
        produces: &[],
        consumes: &[],
        parameters: &[ParameterSpec::path("petId"), ParameterSpec::header("api_key")],
        security: &[],
    };

    static TAGGED: OperationDescriptor = OperationDescriptor {
        operation_id: "tagged",
        method: Method::GET,
        path: "/tagged",
        produces: &[],
        consumes: &[],
        parameters: &[ParameterSpec::header("X-Tag").multi()],
        security: &[],
    };

    #[test]
    fn should_build_header_map() {
        let headers = CallHeaders::new()
            .add_header("api_key", "special-key")
            .add_header("X-Request-Id", 42);

        let map = headers.to_header_map(&DELETE_PET).expect("headers");

        insta::assert_debug_snapshot!(map, @r#"
        {
            "api_key": "special-key",
            "x-request-id": "42",
        }
        "#);
    }

    #[test]
    fn should_join_collection_header_with_commas() {
        let headers = CallHeaders::new().add_header("api_key", vec!["a", "b"]);

        let map = headers.to_header_map(&DELETE_PET).expect("headers");

        assert_eq!(map.get("api_key").expect("set"), "a,b");
    }

    #[test]
    fn should_repeat_multi_header() {
        let headers = CallHeaders::new().add_header("X-Tag", vec!["a", "b"]);

        let map = headers.to_header_map(&TAGGED).expect("headers");

        let values = map
            .get_all("x-tag")
            .iter()
            .map(|value| value.to_str().expect("ascii"))
            .collect::<Vec<_>>();
        assert_eq!(values, ["a", "b"]);
    }

    #[test]
    fn should_skip_absent_header() {
        let headers = CallHeaders::new().add_header("api_key", None::<&str>);

        let map = headers.to_header_map(&DELETE_PET).expect("headers");

        assert!(headers.is_empty());
        assert!(map.is_empty());
    }

    #[test]
    fn should_reject_invalid_header_value() {
        let headers = CallHeaders::new().add_header("api_key", "line\nbreak");

        let result = headers.to_header_map(&DELETE_PET);

        assert!(matches!(
            result,
            Err(ApiClientError::InvalidHeaderValue(_))
        ));
    }
}
