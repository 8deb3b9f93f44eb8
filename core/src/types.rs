//! Domain DTOs for the users API.
//!
//! # Design
//! Defined independently from the mock-server crate. Remote records carry
//! extra fields (`first_name`, `avatar`, ...) which decode silently drops.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::ApiError;

/// A user as held in the cache.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserRecord {
    pub id: u64,
    pub email: String,
}

impl UserRecord {
    /// The record `create_one` fabricates for `id`.
    pub fn dummy(id: u64) -> Self {
        Self {
            id,
            email: format!("dummy_email_{id}"),
        }
    }
}

/// Query / body parameters: a JSON object of primitive values.
pub type Params = Map<String, Value>;

/// Turn any serializable struct into `Params`.
pub fn params_of<T: Serialize>(value: &T) -> Result<Params, ApiError> {
    match serde_json::to_value(value).map_err(|e| ApiError::Serialization(e.to_string()))? {
        Value::Object(map) => Ok(map),
        other => Err(ApiError::Serialization(format!(
            "expected an object, got {other}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dummy_email_embeds_id() {
        let record = UserRecord::dummy(731);
        assert_eq!(record.id, 731);
        assert_eq!(record.email, "dummy_email_731");
    }

    #[test]
    fn decode_ignores_extra_remote_fields() {
        let record: UserRecord = serde_json::from_str(
            r#"{"id":2,"email":"janet.weaver@reqres.in","first_name":"Janet","avatar":"x"}"#,
        )
        .unwrap();
        assert_eq!(record, UserRecord { id: 2, email: "janet.weaver@reqres.in".to_string() });
    }

    #[test]
    fn params_of_record_has_both_fields() {
        let params = params_of(&UserRecord::dummy(5)).unwrap();
        assert_eq!(params["id"], 5);
        assert_eq!(params["email"], "dummy_email_5");
    }

    #[test]
    fn params_of_non_object_fails() {
        let err = params_of(&vec![1, 2]).unwrap_err();
        assert!(matches!(err, ApiError::Serialization(_)));
    }
}
