use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use suwon_redev_api::config::{get_bind_address, load_config, log_config};
use suwon_redev_api::types::StartupError;
use suwon_redev_api::{auth_service, build_cors, configure_app, Database, SERVICE_NAME, VERSION};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(e) = run().await {
        log::error!("{e}");
        return Err(std::io::Error::other(e.to_string()));
    }

    Ok(())
}

async fn run() -> Result<(), StartupError> {
    log::info!("Starting {SERVICE_NAME} v{VERSION}");

    let config = load_config().map_err(|e| StartupError::Config(e.to_string()))?;
    log_config(&config);

    let db = Database::connect(&config.database)
        .await
        .map_err(|e| StartupError::Database(e.to_string()))?;
    db.migrate().await.map_err(|e| StartupError::Database(e.to_string()))?;

    let auth_service = web::Data::new(auth_service(&db));
    let cors_origins = config.cors_origins.clone();
    let bind_address = get_bind_address(&config);

    log::info!("Listening on {bind_address}");

    let result = HttpServer::new(move || {
        App::new()
            .wrap(build_cors(&cors_origins))
            .wrap(Logger::default())
            .app_data(auth_service.clone())
            .configure(configure_app)
    })
    .workers(config.server.workers)
    .keep_alive(config.server.keep_alive)
    .bind(&bind_address)
    .map_err(|e| StartupError::ServerBind(format!("{bind_address}: {e}")))?
    .run()
    .await;

    db.close().await;

    result.map_err(|e| StartupError::Server(e.to_string()))
}
