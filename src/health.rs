//! Health Check Handler

use actix_web::{web, HttpResponse, Resource};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthStatus {
    pub status: String,
}

/// `GET /health`
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthStatus {
        status: "ok".to_string(),
    })
}

/// Configure the `/health` resource
pub fn configure_health_routes() -> Resource {
    web::resource("/health").route(web::get().to(health_check))
}
