use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::password::create_password,
        handlers::password::verify_password,
        handlers::health::health,
    ),
    components(
        schemas(
            CreatePasswordRequest,
            AccessRecordResponse,
            VerifyRequest,
            VerifyResponse,
        )
    ),
    tags(
        (name = "passwords", description = "Access password issuance API"),
        (name = "verify", description = "Access password verification API"),
        (name = "health", description = "Liveness probe")
    ),
    info(
        title = "BoxKey Backend API",
        version = "1.0.0",
        description = "Property access password backend REST API documentation"
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}
