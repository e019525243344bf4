use actix_web::{HttpResponse, Result, web};
use serde_json::json;

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "服务存活")
    )
)]
pub async fn health() -> Result<HttpResponse> {
    // 存活探针，不触达存储等任何依赖
    Ok(HttpResponse::Ok().json(json!({ "status": "ok" })))
}

pub fn health_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
