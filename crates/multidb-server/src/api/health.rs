//! Health endpoint probing every registered backend

use actix_web::{HttpResponse, Responder, get, web};
use serde::Serialize;

use crate::model::app_state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub backends: Vec<BackendStatus>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BackendStatus {
    pub name: String,
    pub kind: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl BackendStatus {
    fn up(name: &str, kind: String) -> Self {
        Self {
            name: name.to_string(),
            kind,
            status: "UP".to_string(),
            message: None,
        }
    }

    fn down(name: &str, kind: String, message: String) -> Self {
        Self {
            name: name.to_string(),
            kind,
            status: "DOWN".to_string(),
            message: Some(message),
        }
    }
}

#[get("/health")]
pub async fn health_check(data: web::Data<AppState>) -> impl Responder {
    let mut backends = Vec::new();
    let mut all_up = true;

    for handle in data.registry().iter() {
        let kind = handle.store.kind().to_string();
        match handle.store.health_check().await {
            Ok(()) => backends.push(BackendStatus::up(&handle.name, kind)),
            Err(e) => {
                all_up = false;
                backends.push(BackendStatus::down(&handle.name, kind, e.to_string()));
            }
        }
    }

    let health_status = HealthStatus {
        status: if all_up { "UP" } else { "DOWN" }.to_string(),
        backends,
    };

    if all_up {
        HttpResponse::Ok().json(health_status)
    } else {
        HttpResponse::ServiceUnavailable().json(health_status)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use actix_web::{App, test, web};
    use multidb_persistence::BackendRegistry;

    use super::*;
    use crate::api::test_support::MemoryStore;
    use crate::model::config::Configuration;

    fn app_state(registry: BackendRegistry) -> Arc<AppState> {
        Arc::new(AppState {
            configuration: Configuration::default(),
            registry: Arc::new(registry),
        })
    }

    #[actix_web::test]
    async fn test_health_up_when_all_backends_reachable() {
        let mut registry = BackendRegistry::new();
        registry
            .register("db1", "Database 1", Arc::new(MemoryStore::new()))
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(app_state(registry)))
                .service(health_check),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);
    }

    #[actix_web::test]
    async fn test_health_degrades_when_one_backend_down() {
        let mut registry = BackendRegistry::new();
        registry
            .register("db1", "Database 1", Arc::new(MemoryStore::new()))
            .unwrap();
        registry
            .register("db2", "Database 2", Arc::new(MemoryStore::unhealthy()))
            .unwrap();

        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(app_state(registry)))
                .service(health_check),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 503);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "DOWN");
        assert_eq!(body["backends"][0]["status"], "UP");
        assert_eq!(body["backends"][1]["status"], "DOWN");
    }
}
