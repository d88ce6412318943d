use std::collections::HashSet;
use std::sync::LazyLock;

use percent_encoding::{NON_ALPHANUMERIC, utf8_percent_encode};
use regex::Regex;
use tracing::warn;

use super::param::{ParamValues, ParameterValue};
use crate::client::error::ApiClientError;
use crate::client::operation::{OperationDescriptor, ParamLocation};

/// Regular expression for matching path parameters in the format `{param_name}`.
static RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{(?<name>\w+)}").expect("a valid regex"));

fn replace_path_param(path: &str, param_name: &str, value: &str) -> String {
    let pattern = ["{", param_name, "}"].concat();
    path.replace(&pattern, value)
}

fn encode_path_param_value(value: &str) -> String {
    utf8_percent_encode(value, NON_ALPHANUMERIC).to_string()
}

/// Path parameters substituted into the operation's path template.
///
/// ```rust
/// use petstore_client::CallPath;
///
/// let path = CallPath::new("/pet/{petId}").add_param("petId", 1);
/// # let _ = path;
/// ```
#[derive(Debug, Clone, derive_more::Display)]
#[display("{path}")]
pub struct CallPath {
    path: String,
    args: ParamValues,
}

impl CallPath {
    /// Creates a path for a template with `{name}` placeholders.
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            args: ParamValues::new(ParamLocation::Path),
        }
    }

    /// Adds a path parameter; `None` leaves the parameter unset.
    #[must_use]
    pub fn add_param<T>(mut self, name: impl Into<String>, value: T) -> Self
    where
        T: ParameterValue,
    {
        self.args.insert(name, &value);
        self
    }

    pub(in crate::client) fn set<T>(&mut self, name: impl Into<String>, value: &T)
    where
        T: ParameterValue + ?Sized,
    {
        self.args.insert(name, value);
    }

    /// The path template.
    pub fn template(&self) -> &str {
        &self.path
    }
}

/// A path with every placeholder substituted and percent-encoded.
#[derive(Debug)]
pub(in crate::client) struct PathResolved {
    pub(in crate::client) path: String,
}

impl PathResolved {
    pub(in crate::client) fn resolve(
        value: &CallPath,
        operation: &OperationDescriptor,
    ) -> Result<Self, ApiClientError> {
        value.args.check_required(operation)?;

        let mut path = value.path.clone();
        let mut names: HashSet<String> = RE
            .captures_iter(&path)
            .filter_map(|caps| caps.name("name"))
            .map(|name| name.as_str().to_string())
            .collect();

        for (name, resolved) in value.args.resolve(operation) {
            if !names.remove(name) {
                warn!(%name, path = %value.path, "argument name not found");
                continue;
            }
            let path_value = resolved.to_string_value()?;
            let encoded_value = encode_path_param_value(&path_value);
            path = replace_path_param(&path, name, &encoded_value);
        }

        if !names.is_empty() {
            let mut missings = names.into_iter().collect::<Vec<_>>();
            missings.sort();
            return Err(ApiClientError::PathUnresolved { path, missings });
        }

        Ok(Self { path })
    }
}

#[cfg(test)]
mod tests {
    use http::Method;

    use super::*;
    use crate::client::operation::ParameterSpec;

    static GET_USER: OperationDescriptor = OperationDescriptor {
        operation_id: "getUserByName",
        method: Method::GET,
        path: "/user/{username}",
        produces: &[],
        consumes: &[],
        parameters: &[ParameterSpec::path("username")],
        security: &[],
    };

    static UNDECLARED: OperationDescriptor = OperationDescriptor {
        operation_id: "getOrderById",
        method: Method::GET,
        path: "/store/order/{orderId}",
        produces: &[],
        consumes: &[],
        parameters: &[],
        security: &[],
    };

    #[test]
    fn should_substitute_path_parameter() {
        let path = CallPath::new(GET_USER.path).add_param("username", "user1");

        let resolved = PathResolved::resolve(&path, &GET_USER).expect("resolved");

        insta::assert_snapshot!(resolved.path, @"/user/user1");
    }

    #[test]
    fn should_percent_encode_path_value() {
        let path = CallPath::new(GET_USER.path).add_param("username", "john doe/42");

        let resolved = PathResolved::resolve(&path, &GET_USER).expect("resolved");

        insta::assert_snapshot!(resolved.path, @"/user/john%20doe%2F42");
    }

    #[test]
    fn should_fail_on_missing_required_path_parameter() {
        let path = CallPath::new(GET_USER.path).add_param("username", None::<String>);

        let result = PathResolved::resolve(&path, &GET_USER);

        assert!(matches!(
            result,
            Err(ApiClientError::MissingParameter {
                operation: "getUserByName",
                ..
            })
        ));
    }

    #[test]
    fn should_fail_on_unbound_placeholder() {
        let path = CallPath::new(UNDECLARED.path).add_param("id", 1);

        let result = PathResolved::resolve(&path, &UNDECLARED);

        insta::assert_snapshot!(
            result.expect_err("unresolved"),
            @r#"Path '/store/order/{orderId}' is missing required arguments: ["orderId"]"#
        );
    }

    #[test]
    fn should_replace_repeated_placeholder() {
        assert_eq!(replace_path_param("/a/{id}/{id}", "id", "7"), "/a/7/7");
    }
}
