//! Authentication HTTP handlers

use crate::auth::dto::{parse_payload, AuthResponse};
use crate::auth::service::{AuthService, LOGIN_SUCCESS_MESSAGE, SIGNUP_SUCCESS_MESSAGE};
use crate::auth::validator::{validate_auth_payload, AuthMode};
use crate::types::ApiError;
use actix_web::{web, HttpMessage, HttpRequest, HttpResponse};

/// `POST /api/auth/signup`
pub async fn signup(
    req: HttpRequest,
    body: web::Bytes,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    let payload = parse_payload(req.content_type(), &body);
    let credentials = validate_auth_payload(&payload, AuthMode::Signup)?;

    let user = auth_service.signup(credentials).await?;

    Ok(HttpResponse::Created().json(AuthResponse {
        message: SIGNUP_SUCCESS_MESSAGE.to_string(),
        user,
    }))
}

/// `POST /api/auth/login`
pub async fn login(
    req: HttpRequest,
    body: web::Bytes,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, ApiError> {
    let payload = parse_payload(req.content_type(), &body);
    let credentials = validate_auth_payload(&payload, AuthMode::Login)?;

    let user = auth_service.login(credentials).await?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        message: LOGIN_SUCCESS_MESSAGE.to_string(),
        user,
    }))
}
