//! HTTP server setup

use std::sync::Arc;

use actix_web::{App, HttpServer, dev::Server, middleware::Logger, web};

use crate::{api, model::app_state::AppState};

/// Creates and binds the HTTP server.
///
/// Registers the save/list endpoint pair for every backend in the registry
/// plus the health endpoint. Each worker shares the same read-only state.
pub fn server(
    app_state: Arc<AppState>,
    address: String,
    port: u16,
) -> Result<Server, std::io::Error> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::from(app_state.clone()))
            .configure(|cfg| api::user::configure(cfg, app_state.registry()))
            .service(api::health::health_check)
    })
    .bind((address, port))?
    .run())
}
