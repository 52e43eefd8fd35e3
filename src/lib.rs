//! Suwon Redevelopment Map API
//!
//! Backend for the redevelopment map: a health check, the static zone list,
//! and email/password signup and login stored in a single `users` table.
//! Built with Actix-web and sqlx (SQLite by default, PostgreSQL when configured).

pub mod auth;
pub mod config;
pub mod database;
pub mod health;
pub mod types;
pub mod user;
pub mod zones;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::web;
use std::sync::Arc;

pub use auth::AuthService;
pub use database::Database;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const SERVICE_NAME: &str = "suwon-redev-api";

/// Register every route of the service.
///
/// Handlers expect a `web::Data<AuthService>` in the app data.
pub fn configure_app(cfg: &mut web::ServiceConfig) {
    cfg.service(health::configure_health_routes())
        .service(zones::configure_zone_routes())
        .service(auth::routes::configure_auth_routes());
}

/// Build the auth service on top of the SQL user repository.
pub fn auth_service(db: &Database) -> AuthService {
    AuthService::new(Arc::new(user::repository::SqlUserRepository::new(db.clone())))
}

/// CORS policy for the configured origins; `*` allows any origin.
pub fn build_cors(origins: &[String]) -> Cors {
    let cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_header(header::CONTENT_TYPE)
        .max_age(3600);

    if origins.iter().any(|origin| origin == "*") {
        cors.allow_any_origin()
    } else {
        origins.iter().fold(cors, |cors, origin| cors.allowed_origin(origin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};

    async fn preflight(origins: &[String], origin: &str) -> Option<String> {
        let app = test::init_service(
            App::new().wrap(build_cors(origins)).service(zones::configure_zone_routes()),
        )
        .await;

        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/api/zones")
            .insert_header((header::ORIGIN, origin))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        resp.headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string)
    }

    #[actix_web::test]
    async fn test_cors_any_origin() {
        let allowed = preflight(&["*".to_string()], "http://localhost:5173").await;
        assert!(allowed.is_some());
    }

    #[actix_web::test]
    async fn test_cors_listed_origin() {
        let origins = vec!["https://map.example.com".to_string()];

        let allowed = preflight(&origins, "https://map.example.com").await;
        assert_eq!(allowed.as_deref(), Some("https://map.example.com"));
    }
}
