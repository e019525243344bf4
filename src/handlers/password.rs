use actix_web::{HttpResponse, ResponseError, Result, web};

use crate::error::AppError;
use crate::models::{AccessRecordResponse, CreatePasswordRequest, VerifyRequest, VerifyResponse};
use crate::services::{IssuanceService, VerificationService};

#[utoipa::path(
    post,
    path = "/api/passwords",
    tag = "passwords",
    request_body = CreatePasswordRequest,
    responses(
        (status = 201, description = "访问码已保存", body = AccessRecordResponse),
        (status = 400, description = "缺少必填字段"),
        (status = 409, description = "访问码与未过期的激活记录冲突"),
        (status = 500, description = "存储失败")
    )
)]
pub async fn create_password(
    issuance_service: web::Data<IssuanceService>,
    request: web::Json<CreatePasswordRequest>,
) -> Result<HttpResponse> {
    let request = request.into_inner();

    // 与原有移动端约定一致：任一字段缺失或为空值都按缺字段处理
    let (Some(password), Some(client_id), Some(expiry_hours)) = (
        request.password.filter(|p| !p.is_empty()),
        request.client_id.filter(|c| !c.is_empty()),
        request.expiry_hours.filter(|h| *h != 0),
    ) else {
        return Ok(
            AppError::ValidationError("Missing required fields".to_string()).error_response(),
        );
    };

    match issuance_service
        .issue_code(&password, &client_id, expiry_hours)
        .await
    {
        Ok(record) => Ok(HttpResponse::Created().json(AccessRecordResponse::from(record))),
        Err(e) => Ok(e.error_response()),
    }
}

#[utoipa::path(
    post,
    path = "/api/verify",
    tag = "verify",
    request_body = VerifyRequest,
    responses(
        (status = 200, description = "校验结果，valid=false 属于正常业务结果", body = VerifyResponse),
        (status = 400, description = "请求缺少 password 字段"),
        (status = 500, description = "存储失败")
    )
)]
pub async fn verify_password(
    verification_service: web::Data<VerificationService>,
    request: web::Json<VerifyRequest>,
) -> Result<HttpResponse> {
    let Some(password) = request.into_inner().password.filter(|p| !p.is_empty()) else {
        return Ok(AppError::ValidationError("Password is required".to_string()).error_response());
    };

    match verification_service.verify(&password).await {
        Ok(outcome) => Ok(HttpResponse::Ok().json(outcome)),
        Err(e) => Ok(e.error_response()),
    }
}

pub fn password_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/passwords", web::post().to(create_password))
        .route("/verify", web::post().to(verify_password));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::AccessRecordStore;
    use actix_web::http::StatusCode;
    use actix_web::{App, test};
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};
    use serde_json::json;

    async fn setup_services() -> (IssuanceService, VerificationService) {
        let mut opts = ConnectOptions::new("sqlite::memory:".to_string());
        opts.max_connections(1);
        let db = Database::connect(opts).await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        let store = AccessRecordStore::new(db);
        (
            IssuanceService::new(store.clone()),
            VerificationService::new(store),
        )
    }

    #[actix_web::test]
    async fn test_create_password_returns_created_record() {
        let (issuance, verification) = setup_services().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(issuance))
                .app_data(web::Data::new(verification))
                .service(web::scope("/api").configure(password_config)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/passwords")
            .set_json(json!({
                "password": "482913",
                "clientId": "c1",
                "expiryHours": 24
            }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["password"], "482913");
        assert_eq!(body["clientId"], "c1");
        assert_eq!(body["isActive"], true);
        assert!(body["expiryDate"].is_string());
        assert!(body["createdAt"].is_string());
    }

    #[actix_web::test]
    async fn test_create_password_missing_fields() {
        let (issuance, verification) = setup_services().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(issuance))
                .app_data(web::Data::new(verification))
                .service(web::scope("/api").configure(password_config)),
        )
        .await;

        // clientId 缺失、password 为空串都按缺字段处理
        for payload in [
            json!({ "password": "482913", "expiryHours": 24 }),
            json!({ "password": "", "clientId": "c1", "expiryHours": 24 }),
            json!({ "password": "482913", "clientId": "c1", "expiryHours": 0 }),
        ] {
            let req = test::TestRequest::post()
                .uri("/api/passwords")
                .set_json(payload)
                .to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

            let body: serde_json::Value = test::read_body_json(resp).await;
            assert_eq!(body["error"], "Missing required fields");
        }
    }

    #[actix_web::test]
    async fn test_verify_round_trip() {
        let (issuance, verification) = setup_services().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(issuance))
                .app_data(web::Data::new(verification))
                .service(web::scope("/api").configure(password_config)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/passwords")
            .set_json(json!({
                "password": "482913",
                "clientId": "c1",
                "expiryHours": 24
            }))
            .to_request();
        assert_eq!(
            test::call_service(&app, req).await.status(),
            StatusCode::CREATED
        );

        // 首次校验成功并消费
        let req = test::TestRequest::post()
            .uri("/api/verify")
            .set_json(json!({ "password": "482913" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["valid"], true);
        assert_eq!(body["message"], "Password is valid");

        // 重复提交返回业务失败，状态码仍是 200
        let req = test::TestRequest::post()
            .uri("/api/verify")
            .set_json(json!({ "password": "482913" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["valid"], false);
        assert_eq!(body["message"], "Invalid or expired password");
    }

    #[actix_web::test]
    async fn test_verify_requires_password() {
        let (issuance, verification) = setup_services().await;
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(issuance))
                .app_data(web::Data::new(verification))
                .service(web::scope("/api").configure(password_config)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/verify")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"], "Password is required");
    }
}
