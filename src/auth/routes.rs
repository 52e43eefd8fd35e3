//! Authentication routes

use crate::auth::handlers;
use actix_web::{web, Scope};

/// Configure the `/api/auth` scope
pub fn configure_auth_routes() -> Scope {
    web::scope("/api/auth")
        .service(web::resource("/signup").route(web::post().to(handlers::signup)))
        .service(web::resource("/login").route(web::post().to(handlers::login)))
}
