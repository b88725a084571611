//! HTTP 라우트 설정
//!
//! 사용자 엔드포인트는 기존 클라이언트와 같은 경로(`/user`, `/users`, `/insert`,
//! `/update`, `/delete`)를 루트에 그대로 노출합니다.
//! 핸들러가 사용하는 `web::Data<dyn UserServices>`는 `main`에서 등록합니다.

use crate::config::{Environment, StorageBackend};
use crate::handlers;
use actix_web::web;
use serde_json::json;

pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::users::get_user_by_id)
        .service(handlers::users::get_users)
        .service(handlers::users::post_user)
        .service(handlers::users::update_user)
        .service(handlers::users::delete_user);
}

#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_crud_service",
        "version": env!("CARGO_PKG_VERSION"),
        "environment": format!("{:?}", Environment::current()),
        "storage": format!("{:?}", StorageBackend::current()),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
