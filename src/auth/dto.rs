//! Authentication Data Transfer Objects

use crate::user::models::PublicUser;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of a successful signup or login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub message: String,
    pub user: PublicUser,
}

/// Read a request body as a JSON object.
///
/// Bodies not sent as JSON, not valid JSON, or not an object count as an
/// empty object so that they fail validation with the first missing field.
pub fn parse_payload(content_type: &str, body: &[u8]) -> Map<String, Value> {
    if !is_json_content_type(content_type) {
        return Map::new();
    }
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

/// `application/json` or any `application/*+json` media type.
pub fn is_json_content_type(content_type: &str) -> bool {
    let essence = content_type.trim().to_ascii_lowercase();
    essence == "application/json" || (essence.starts_with("application/") && essence.ends_with("+json"))
}
