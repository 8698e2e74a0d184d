use serde_json::Value;

use crate::{graphql::ResponseEnvelope, CustomerError, Result};

/// Reads the value at a dotted `path` out of the hydrated model
///
/// A missing final segment reads as `null`. Top level `errors` only surface
/// when the path itself can't be walked.
pub fn extract_field(path: &str, envelope: &ResponseEnvelope) -> Result<Value> {
    let segments: Vec<&str> = path.split('.').collect();
    let (last, parents) = segments
        .split_last()
        .ok_or_else(|| CustomerError::MissingField(path.to_owned()))?;

    let mut current = &envelope.model;
    for segment in parents {
        current = match current.get(*segment) {
            Some(Value::Object(next)) => next,
            _ => {
                if envelope.errors.is_empty() {
                    return Err(CustomerError::MissingField(path.to_owned()));
                }
                return Err(envelope.protocol_error());
            }
        };
    }

    Ok(current.get(*last).cloned().unwrap_or(Value::Null))
}
