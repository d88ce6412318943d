use super::param::{ParamValues, ParameterValue};
use crate::client::error::ApiClientError;
use crate::client::operation::{OperationDescriptor, ParamLocation};

/// Form fields of an API call, sent as `application/x-www-form-urlencoded`.
#[derive(Debug, Clone)]
pub struct CallForm {
    fields: ParamValues,
}

impl Default for CallForm {
    fn default() -> Self {
        Self::new()
    }
}

impl CallForm {
    /// Creates an empty form.
    pub fn new() -> Self {
        Self {
            fields: ParamValues::new(ParamLocation::Form),
        }
    }

    /// Adds a form field; `None` leaves the field unset.
    #[must_use]
    pub fn add_field<T>(mut self, name: impl Into<String>, value: T) -> Self
    where
        T: ParameterValue,
    {
        self.fields.insert(name, &value);
        self
    }

    pub(in crate::client) fn set<T>(&mut self, name: impl Into<String>, value: &T)
    where
        T: ParameterValue + ?Sized,
    {
        self.fields.insert(name, value);
    }

    /// Returns `true` if no field is set.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// The encoded form, `None` when no field is set.
    pub(in crate::client) fn encode(
        &self,
        operation: &OperationDescriptor,
    ) -> Result<Option<Vec<u8>>, ApiClientError> {
        self.fields.check_required(operation)?;
        if self.fields.is_empty() {
            return Ok(None);
        }
        let mut pairs = Vec::new();
        for (name, resolved) in self.fields.resolve(operation) {
            for value in resolved.to_multi_values()? {
                pairs.push((name.to_string(), value));
            }
        }
        let data = serde_urlencoded::to_string(&pairs).map_err(|err| {
            ApiClientError::SerializationError {
                message: format!("Failed to serialize form data: {err}"),
            }
        })?;
        Ok(Some(data.into_bytes()))
    }
}
