//! User save/list endpoints
//!
//! One handler pair serves every backend. At route-registration time each
//! `/save{name}` and `/getall{name}` resource gets a `UserEndpoint` binding
//! it to one adapter for the process lifetime; no handler ever touches more
//! than one backend.

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, web};
use multidb_persistence::{BackendRegistry, UserStore};
use serde::Deserialize;
use tracing::error;

use crate::model::response::ErrorResult;

/// Per-route binding of the generic handlers to one backend.
#[derive(Clone)]
pub struct UserEndpoint {
    pub display_name: String,
    pub store: Arc<dyn UserStore>,
}

#[derive(Debug, Deserialize)]
pub struct SaveUserParam {
    pub name: Option<String>,
}

async fn save_user(
    req: HttpRequest,
    endpoint: web::Data<UserEndpoint>,
    param: web::Json<SaveUserParam>,
) -> HttpResponse {
    let name = match param.into_inner().name {
        Some(name) => name,
        None => return ErrorResult::bad_request("name is required", req.path()),
    };

    match endpoint.store.save(&name).await {
        // The generated id is intentionally not returned; only the listing
        // endpoint exposes ids.
        Ok(_) => HttpResponse::Ok().body(format!("User saved in {}", endpoint.display_name)),
        Err(e) => {
            error!("save to {} failed: {}", endpoint.display_name, e);
            ErrorResult::internal_error(&e.to_string(), req.path())
        }
    }
}

async fn get_all(req: HttpRequest, endpoint: web::Data<UserEndpoint>) -> HttpResponse {
    match endpoint.store.list_all().await {
        Ok(records) => HttpResponse::Ok().json(records),
        Err(e) => {
            error!("list from {} failed: {}", endpoint.display_name, e);
            ErrorResult::internal_error(&e.to_string(), req.path())
        }
    }
}

/// Registers the save/list pair for every backend in the registry.
pub fn configure(cfg: &mut web::ServiceConfig, registry: &BackendRegistry) {
    for handle in registry.iter() {
        let endpoint = web::Data::new(UserEndpoint {
            display_name: handle.display_name.clone(),
            store: handle.store.clone(),
        });

        cfg.service(
            web::resource(format!("/save{}", handle.name))
                .app_data(endpoint.clone())
                .route(web::post().to(save_user)),
        );
        cfg.service(
            web::resource(format!("/getall{}", handle.name))
                .app_data(endpoint)
                .route(web::get().to(get_all)),
        );
    }
}
