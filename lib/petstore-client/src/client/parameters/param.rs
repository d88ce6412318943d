use std::fmt::Debug;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::warn;

use crate::client::error::ApiClientError;
use crate::client::operation::{CollectionFormat, OperationDescriptor, ParamLocation};

/// A trait alias for types that can be used as parameter values.
///
/// Values are serialized to JSON first; a value serializing to `null`
/// (typically `None`) is treated as absent.
pub trait ParameterValue: Serialize + Debug + Send + Sync {}

impl<T> ParameterValue for T where T: Serialize + Debug + Send + Sync {}

/// Parameter values of a single placement, in insertion order.
#[derive(Debug, Clone)]
pub(in crate::client) struct ParamValues {
    location: ParamLocation,
    args: IndexMap<String, serde_json::Value>,
}

impl ParamValues {
    pub(in crate::client) fn new(location: ParamLocation) -> Self {
        Self {
            location,
            args: IndexMap::new(),
        }
    }

    /// Sets a value; an absent value removes a previous one.
    pub(in crate::client) fn insert<T>(&mut self, name: impl Into<String>, value: &T)
    where
        T: ParameterValue + ?Sized,
    {
        let name = name.into();
        match serde_json::to_value(value) {
            Ok(serde_json::Value::Null) => {
                self.args.shift_remove(&name);
            }
            Ok(value) => {
                self.args.insert(name, value);
            }
            Err(error) => {
                warn!(%name, %error, "skip parameter that cannot be serialized");
                self.args.shift_remove(&name);
            }
        }
    }

    pub(in crate::client) fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub(in crate::client) fn contains(&self, name: &str) -> bool {
        self.args.contains_key(name)
    }

    /// Fails on the first required parameter of this placement that is absent.
    pub(in crate::client) fn check_required(
        &self,
        operation: &OperationDescriptor,
    ) -> Result<(), ApiClientError> {
        if let Some(spec) = operation
            .required(self.location)
            .find(|spec| !self.contains(spec.name))
        {
            return Err(ApiClientError::MissingParameter {
                operation: operation.operation_id,
                parameter: spec.name.to_string(),
            });
        }
        Ok(())
    }

    /// Pairs each value with the collection format declared by the operation.
    ///
    /// Undeclared parameters are still sent, using the `csv` format.
    pub(in crate::client) fn resolve(
        &self,
        operation: &OperationDescriptor,
    ) -> impl Iterator<Item = (&str, ResolvedParamValue)> {
        let location = self.location;
        self.args.iter().map(move |(name, value)| {
            let format = match operation.parameter(name, location) {
                Some(spec) => spec.format,
                None => {
                    warn!(
                        operation = operation.operation_id,
                        ?location,
                        %name,
                        "parameter not declared by the operation"
                    );
                    CollectionFormat::Csv
                }
            };
            let resolved = ResolvedParamValue {
                value: value.clone(),
                format,
            };
            (name.as_str(), resolved)
        })
    }
}

/// A parameter value with its serialization rule.
#[derive(Debug, Clone)]
pub(in crate::client) struct ResolvedParamValue {
    /// The serialized JSON value of the parameter
    pub value: serde_json::Value,
    /// How collections are written
    pub format: CollectionFormat,
}

impl ResolvedParamValue {
    fn json_value_to_string(value: &serde_json::Value) -> Result<String, ApiClientError> {
        match value {
            serde_json::Value::String(text) => Ok(text.clone()),
            serde_json::Value::Number(number) => Ok(number.to_string()),
            serde_json::Value::Bool(flag) => Ok(flag.to_string()),
            serde_json::Value::Null => Ok(String::new()),
            serde_json::Value::Array(_) | serde_json::Value::Object(_) => {
                Err(ApiClientError::UnsupportedParameterValue {
                    message: "nested complex values not supported in parameters".to_string(),
                    value: value.clone(),
                })
            }
        }
    }

    fn array_to_string_values(arr: &[serde_json::Value]) -> Result<Vec<String>, ApiClientError> {
        arr.iter().map(Self::json_value_to_string).collect()
    }

    /// The single string form, collections joined with commas.
    pub(in crate::client) fn to_string_value(&self) -> Result<String, ApiClientError> {
        match &self.value {
            serde_json::Value::Array(arr) => Ok(Self::array_to_string_values(arr)?.join(",")),
            serde_json::Value::Object(_) => Err(ApiClientError::UnsupportedParameterValue {
                message: "object values not supported in parameters".to_string(),
                value: self.value.clone(),
            }),
            value => Self::json_value_to_string(value),
        }
    }

    /// The string forms for a repeatable key.
    ///
    /// With the `multi` format each collection item is its own value,
    /// in caller order; otherwise a single joined value is returned.
    pub(in crate::client) fn to_multi_values(&self) -> Result<Vec<String>, ApiClientError> {
        match (&self.value, self.format) {
            (serde_json::Value::Array(arr), CollectionFormat::Multi) => {
                Self::array_to_string_values(arr)
            }
            _ => self.to_string_value().map(|value| vec![value]),
        }
    }
}
