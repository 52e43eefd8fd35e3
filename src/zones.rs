//! Redevelopment zones
//!
//! The zone list is a fixed table compiled into the binary.

use actix_web::{web, HttpResponse, Resource};
use serde::Serialize;

/// A redevelopment zone shown on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Zone {
    pub id: &'static str,
    pub name: &'static str,
    pub units: u32,
}

pub const ZONES: [Zone; 3] = [
    Zone {
        id: "wooman1",
        name: "우만1구역",
        units: 2800,
    },
    Zone {
        id: "wooman2",
        name: "우만2구역",
        units: 2700,
    },
    Zone {
        id: "worldcup1",
        name: "월드컵1구역",
        units: 1500,
    },
];

/// `GET /api/zones`
pub async fn list_zones() -> HttpResponse {
    HttpResponse::Ok().json(ZONES)
}

/// Configure the `/api/zones` resource
pub fn configure_zone_routes() -> Resource {
    web::resource("/api/zones").route(web::get().to(list_zones))
}
