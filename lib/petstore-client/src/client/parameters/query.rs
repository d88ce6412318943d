use super::param::{ParamValues, ParameterValue};
use crate::client::error::ApiClientError;
use crate::client::operation::{OperationDescriptor, ParamLocation};

/// Query parameters of an API call.
///
/// Collection values use the format declared by the operation:
/// `tags=a&tags=b` for `multi`, `tags=a,b` for `csv`.
#[derive(Debug, Clone)]
pub struct CallQuery {
    params: ParamValues,
}

impl Default for CallQuery {
    fn default() -> Self {
        Self::new()
    }
}

impl CallQuery {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self {
            params: ParamValues::new(ParamLocation::Query),
        }
    }

    /// Adds a query parameter; `None` leaves the parameter unset.
    #[must_use]
    pub fn add_param<T>(mut self, name: impl Into<String>, value: T) -> Self
    where
        T: ParameterValue,
    {
        self.params.insert(name, &value);
        self
    }

    pub(in crate::client) fn set<T>(&mut self, name: impl Into<String>, value: &T)
    where
        T: ParameterValue + ?Sized,
    {
        self.params.insert(name, value);
    }

    /// Returns `true` if no query parameter is set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Key/value pairs in caller order, repeated keys for `multi` collections.
    pub(in crate::client) fn to_pairs(
        &self,
        operation: &OperationDescriptor,
    ) -> Result<Vec<(String, String)>, ApiClientError> {
        self.params.check_required(operation)?;
        let mut result = Vec::new();
        for (name, resolved) in self.params.resolve(operation) {
            for value in resolved.to_multi_values()? {
                result.push((name.to_string(), value));
            }
        }
        Ok(result)
    }

    /// The encoded query string.
    pub(in crate::client) fn to_query_string(
        &self,
        operation: &OperationDescriptor,
    ) -> Result<String, ApiClientError> {
        let pairs = self.to_pairs(operation)?;
        serde_urlencoded::to_string(&pairs).map_err(|err| ApiClientError::SerializationError {
            message: format!("Failed to encode query parameters: {err}"),
        })
    }
}
