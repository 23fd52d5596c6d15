// src/handlers/health.rs
// DOCUMENTATION: Liveness and health check handlers
// PURPOSE: Simple endpoints to verify service status

use crate::services::PlacesProvider;
use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

pub const LIVENESS_MESSAGE: &str = "Korsika Brain Online 🧠";

/// GET /
pub async fn home() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(LIVENESS_MESSAGE)
}

pub async fn health_check(provider: web::Data<PlacesProvider>) -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "korsika-brain",
        "version": env!("CARGO_PKG_VERSION"),
        "places_configured": provider.is_configured()
    }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .route("/health", web::get().to(health_check));
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;

    #[actix_web::test]
    async fn test_home_is_plain_text() {
        let app = test::init_service(App::new().configure(config)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let body = test::read_body(resp).await;
        assert_eq!(body, LIVENESS_MESSAGE.as_bytes());
    }

    #[actix_web::test]
    async fn test_health_reports_unconfigured_places() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(PlacesProvider::unconfigured()))
                .configure(config),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["places_configured"], false);
    }
}
