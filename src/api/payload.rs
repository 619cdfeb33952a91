//! Wire format of the `/actors` listing
//!
//! The API answers with a bare JSON array of actors. Some deployments wrap
//! the list in an envelope `{"data": [...]}`; both are accepted here and
//! nowhere else, so the rest of the crate only ever sees `Vec<Actor>`.

use serde::Deserialize;

use crate::api::errors::ApiError;
use crate::models::Actor;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ActorListPayload {
    Bare(Vec<Actor>),
    Envelope {
        #[serde(default)]
        data: Option<Vec<Actor>>,
    },
}

impl From<ActorListPayload> for Vec<Actor> {
    fn from(payload: ActorListPayload) -> Self {
        match payload {
            ActorListPayload::Bare(actors) => actors,
            ActorListPayload::Envelope { data } => data.unwrap_or_default(),
        }
    }
}

/// Decode a listing body in either accepted shape
pub fn decode_actor_list(body: &[u8]) -> Result<Vec<Actor>, ApiError> {
    // Parse to a Value first so a malformed record reports a real serde error
    // instead of the opaque untagged-enum mismatch.
    let value: serde_json::Value = serde_json::from_slice(body)?;
    let payload = match value {
        serde_json::Value::Array(_) => ActorListPayload::Bare(serde_json::from_value(value)?),
        serde_json::Value::Object(_) => serde_json::from_value(value)?,
        other => {
            return Err(ApiError::Decode(serde::de::Error::custom(format!(
                "expected an array or an object, got {}",
                json_kind(&other)
            ))))
        }
    };
    Ok(payload.into())
}

/// Decode a single actor body
pub fn decode_actor(body: &[u8]) -> Result<Actor, ApiError> {
    Ok(serde_json::from_slice(body)?)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
