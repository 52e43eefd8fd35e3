//! Signup and login payload validation.
//!
//! Checks run in a fixed order and the first failure is reported on its own:
//! required fields, email shape, password length.

use crate::types::ApiError;
use serde_json::{Map, Value};

pub const MIN_PASSWORD_LENGTH: usize = 8;

const INVALID_EMAIL_MESSAGE: &str = "올바른 이메일 형식을 입력해주세요.";
const SHORT_PASSWORD_MESSAGE: &str = "비밀번호는 최소 8자 이상이어야 합니다.";

/// Which endpoint the payload was sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Signup,
    Login,
}

impl AuthMode {
    fn required_fields(self) -> &'static [&'static str] {
        match self {
            AuthMode::Signup => &["email", "password", "name"],
            AuthMode::Login => &["email", "password"],
        }
    }
}

/// Credentials that passed validation, as sent (not yet normalized)
#[derive(Debug, Clone, PartialEq)]
pub struct AuthCredentials {
    /// Present for signups only
    pub name: Option<String>,
    pub email: String,
    pub password: String,
}

pub fn missing_field_message(field: &str) -> String {
    format!("{field} 필드를 입력해주세요.")
}

/// Validate a signup or login payload.
pub fn validate_auth_payload(
    payload: &Map<String, Value>,
    mode: AuthMode,
) -> Result<AuthCredentials, ApiError> {
    let mut name = None;
    let mut email = String::new();
    let mut password = String::new();

    for &field in mode.required_fields() {
        let value = field_text(payload.get(field));
        if value.trim().is_empty() {
            return Err(ApiError::Validation(missing_field_message(field)));
        }
        match field {
            "email" => email = value,
            "password" => password = value,
            _ => name = Some(value),
        }
    }

    if !email.contains('@') {
        return Err(ApiError::Validation(INVALID_EMAIL_MESSAGE.to_string()));
    }

    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ApiError::Validation(SHORT_PASSWORD_MESSAGE.to_string()));
    }

    Ok(AuthCredentials {
        name,
        email,
        password,
    })
}

/// Text of a payload field. Absent and falsy values (`null`, `false`, zero,
/// empty string/array/object) read as empty; other non-strings render as
/// display text (`True`, `['a@b']`, `{'k': None}`).
fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) | Some(Value::Bool(false)) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.as_f64() == Some(0.0) => String::new(),
        Some(Value::Array(items)) if items.is_empty() => String::new(),
        Some(Value::Object(map)) if map.is_empty() => String::new(),
        Some(other) => {
            let mut out = String::new();
            write_value(&mut out, other, false);
            out
        },
    }
}

/// Render `value`; strings are quoted only when nested in a container.
fn write_value(out: &mut String, value: &Value, nested: bool) {
    match value {
        Value::Null => out.push_str("None"),
        Value::Bool(true) => out.push_str("True"),
        Value::Bool(false) => out.push_str("False"),
        Value::Number(n) => out.push_str(&n.to_string()),
        Value::String(s) if nested => write_quoted(out, s),
        Value::String(s) => out.push_str(s),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_value(out, item, true);
            }
            out.push(']');
        },
        Value::Object(map) => {
            out.push('{');
            for (i, (key, item)) in map.iter().enumerate() {
                if i > 0 {
                    out.push_str(", ");
                }
                write_quoted(out, key);
                out.push_str(": ");
                write_value(out, item, true);
            }
            out.push('}');
        },
    }
}

/// Single quotes unless the text holds a `'` and no `"`.
fn write_quoted(out: &mut String, s: &str) {
    let quote = if s.contains('\'') && !s.contains('"') { '"' } else { '\'' };
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            },
            c => out.push(c),
        }
    }
    out.push(quote);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn payload(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("test payload must be an object"),
        }
    }

    fn message(result: Result<AuthCredentials, ApiError>) -> String {
        match result {
            Err(ApiError::Validation(message)) => message,
            other => panic!("expected a validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_signup() {
        let body = payload(json!({
            "name": "김수원",
            "email": "suwon@example.com",
            "password": "password123"
        }));

        let credentials = validate_auth_payload(&body, AuthMode::Signup).unwrap();
        assert_eq!(credentials.name.as_deref(), Some("김수원"));
        assert_eq!(credentials.email, "suwon@example.com");
        assert_eq!(credentials.password, "password123");
    }

    #[test]
    fn test_login_ignores_name() {
        let body = payload(json!({ "email": "a@b.c", "password": "password123" }));

        let credentials = validate_auth_payload(&body, AuthMode::Login).unwrap();
        assert_eq!(credentials.name, None);
    }

    #[test]
    fn test_missing_fields_in_order() {
        let body = payload(json!({}));
        assert_eq!(
            message(validate_auth_payload(&body, AuthMode::Signup)),
            "email 필드를 입력해주세요."
        );

        let body = payload(json!({ "email": "a@b.c" }));
        assert_eq!(
            message(validate_auth_payload(&body, AuthMode::Signup)),
            "password 필드를 입력해주세요."
        );

        let body = payload(json!({ "email": "a@b.c", "password": "password123" }));
        assert_eq!(
            message(validate_auth_payload(&body, AuthMode::Signup)),
            "name 필드를 입력해주세요."
        );
    }

    #[test]
    fn test_blank_field_counts_as_missing() {
        let body = payload(json!({ "email": "   ", "password": "password123" }));
        assert_eq!(
            message(validate_auth_payload(&body, AuthMode::Login)),
            "email 필드를 입력해주세요."
        );

        let body = payload(json!({ "email": "a@b.c", "password": null }));
        assert_eq!(
            message(validate_auth_payload(&body, AuthMode::Login)),
            "password 필드를 입력해주세요."
        );
    }

    #[test]
    fn test_missing_field_beats_bad_email() {
        let body = payload(json!({ "email": "not-an-email", "password": "" }));
        assert_eq!(
            message(validate_auth_payload(&body, AuthMode::Login)),
            "password 필드를 입력해주세요."
        );
    }

    #[test]
    fn test_email_needs_at_sign() {
        let body = payload(json!({ "email": "suwon.example.com", "password": "password123" }));
        assert_eq!(message(validate_auth_payload(&body, AuthMode::Login)), INVALID_EMAIL_MESSAGE);
    }

    #[test]
    fn test_short_password() {
        let body = payload(json!({ "name": "Kim", "email": "a@b.c", "password": "1234567" }));
        assert_eq!(message(validate_auth_payload(&body, AuthMode::Signup)), SHORT_PASSWORD_MESSAGE);
    }

    #[test]
    fn test_password_length_counts_characters() {
        // Eight Hangul syllables are 24 bytes but eight characters.
        let body = payload(json!({ "email": "a@b.c", "password": "가나다라마바사아" }));
        assert!(validate_auth_payload(&body, AuthMode::Login).is_ok());

        let body = payload(json!({ "email": "a@b.c", "password": "가나다라마바사" }));
        assert_eq!(message(validate_auth_payload(&body, AuthMode::Login)), SHORT_PASSWORD_MESSAGE);
    }

    #[test]
    fn test_non_string_values_are_coerced() {
        let body = payload(json!({ "email": "a@b.c", "password": 12345678 }));
        let credentials = validate_auth_payload(&body, AuthMode::Login).unwrap();
        assert_eq!(credentials.password, "12345678");

        let body = payload(json!({ "email": "a@b.c", "password": 0 }));
        assert_eq!(
            message(validate_auth_payload(&body, AuthMode::Login)),
            "password 필드를 입력해주세요."
        );

        let body = payload(json!({ "email": false, "password": "password123" }));
        assert_eq!(
            message(validate_auth_payload(&body, AuthMode::Login)),
            "email 필드를 입력해주세요."
        );
    }

    #[test]
    fn test_non_string_values_render_like_form_text() {
        let body = payload(json!({ "name": true, "email": ["a@b"], "password": "password123" }));
        let credentials = validate_auth_payload(&body, AuthMode::Signup).unwrap();
        assert_eq!(credentials.name.as_deref(), Some("True"));
        assert_eq!(credentials.email, "['a@b']");

        assert_eq!(field_text(Some(&json!([null, false, 1.5, "it's"]))), r#"[None, False, 1.5, "it's"]"#);
        assert_eq!(field_text(Some(&json!({ "k": [true] }))), "{'k': [True]}");
        assert_eq!(field_text(Some(&json!(["a\\b\n"]))), r"['a\\b\n']");
    }
}
