//! Parameter sets and their mapping onto requests.
//!
//! Every endpoint declares its parameters as a serializable struct whose
//! optional fields are skipped when absent. That struct is the endpoint's
//! mapping table: nothing outside it can reach the request.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::rest::ResourceError;

/// A parameter set accepted by an endpoint.
///
/// `validate` runs before the request is built; the default accepts
/// everything.
pub trait RequestParams: Serialize {
    /// Checks local preconditions for the named method.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingParameter`] when a required
    /// alternative is absent.
    fn validate(&self, _operation: &'static str) -> Result<(), ResourceError> {
        Ok(())
    }
}

impl RequestParams for () {}

impl RequestParams for Value {}

/// A parameter value that can be blank.
///
/// Blank values do not satisfy [`require_one_of`], but are still sent when
/// present.
pub trait Presence {
    /// Returns `true` unless the value is blank.
    fn is_present(&self) -> bool;
}

impl Presence for str {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_present)
    }
}

/// Fails unless at least one of the alternatives is present.
///
/// `values` must be given in the same order as `one_of`.
///
/// # Errors
///
/// Returns [`ResourceError::MissingParameter`] if every value is absent or blank.
pub fn require_one_of(
    operation: &'static str,
    one_of: &'static [&'static str],
    values: &[&dyn Presence],
) -> Result<(), ResourceError> {
    if values.iter().any(|value| value.is_present()) {
        return Ok(());
    }
    Err(ResourceError::MissingParameter { operation, one_of })
}

/// Serializes a parameter set into a JSON body.
///
/// # Errors
///
/// Returns [`ResourceError::Serialization`] if serialization fails.
pub fn serialize_to_body<T: Serialize + ?Sized>(params: &T) -> Result<Value, ResourceError> {
    serde_json::to_value(params).map_err(|e| ResourceError::Serialization {
        message: e.to_string(),
    })
}

/// Serializes a parameter set into a query map.
///
/// Absent (`null`) values are dropped; falsy but present values are kept.
/// Booleans become `"true"`/`"false"`, arrays are comma-joined (an empty
/// array sends an empty value), and nested objects are sent as JSON text.
///
/// # Errors
///
/// Returns [`ResourceError::Serialization`] if serialization fails or an
/// array holds a null, array or object element.
pub fn serialize_to_query<T: Serialize + ?Sized>(
    params: &T,
) -> Result<HashMap<String, String>, ResourceError> {
    let value = serialize_to_body(params)?;

    let mut query = HashMap::new();

    if let Value::Object(map) = value {
        for (key, val) in map {
            match val {
                Value::Null => {}
                Value::String(s) => {
                    query.insert(key, s);
                }
                Value::Number(n) => {
                    query.insert(key, n.to_string());
                }
                Value::Bool(b) => {
                    query.insert(key, b.to_string());
                }
                Value::Array(arr) => {
                    let values = arr
                        .iter()
                        .map(|v| match v {
                            Value::String(s) => Ok(s.clone()),
                            Value::Number(n) => Ok(n.to_string()),
                            Value::Bool(b) => Ok(b.to_string()),
                            _ => Err(ResourceError::Serialization {
                                message: format!("query list `{key}` holds a non-scalar element"),
                            }),
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    query.insert(key, values.join(","));
                }
                Value::Object(_) => {
                    query.insert(key, val.to_string());
                }
            }
        }
    }

    Ok(query)
}
