use chrono::{Duration, Utc};

use crate::entities::access_records;
use crate::error::{AppError, AppResult};
use crate::models::NewAccessRecord;
use crate::services::AccessRecordStore;
use crate::utils::generate_access_code;

#[derive(Clone)]
pub struct IssuanceService {
    store: AccessRecordStore,
}

impl IssuanceService {
    pub fn new(store: AccessRecordStore) -> Self {
        Self { store }
    }

    /// 服务端生成访问码并落库，返回持久化后的记录
    pub async fn issue(
        &self,
        client_id: &str,
        expiry_hours: i64,
    ) -> AppResult<access_records::Model> {
        validate_issue_input(client_id, expiry_hours)?;

        // 与仍然有效的记录撞码时重新生成
        let code = loop {
            let candidate = generate_access_code();
            if self.store.find_active_valid(&candidate).await?.is_none() {
                break candidate;
            }
        };

        self.persist(code, client_id, expiry_hours).await
    }

    /// 管理端在本地生成访问码后提交，此处校验后落库。
    /// 与仍然有效的记录撞码时拒绝，保证同一 code 至多一条有效记录
    pub async fn issue_code(
        &self,
        code: &str,
        client_id: &str,
        expiry_hours: i64,
    ) -> AppResult<access_records::Model> {
        validate_issue_input(client_id, expiry_hours)?;

        if self.store.find_active_valid(code).await?.is_some() {
            return Err(AppError::CodeConflict(
                "An active password with this value already exists".to_string(),
            ));
        }

        self.persist(code.to_string(), client_id, expiry_hours).await
    }

    async fn persist(
        &self,
        code: String,
        client_id: &str,
        expiry_hours: i64,
    ) -> AppResult<access_records::Model> {
        let now = Utc::now();
        self.store
            .insert(NewAccessRecord {
                code,
                client_id: client_id.trim().to_string(),
                expiry_date: now + Duration::hours(expiry_hours),
                created_at: now,
            })
            .await
    }
}

// 校验先于任何生成与写入，失败时存储不发生变化
fn validate_issue_input(client_id: &str, expiry_hours: i64) -> AppResult<()> {
    if client_id.trim().is_empty() {
        return Err(AppError::ValidationError(
            "Missing required fields".to_string(),
        ));
    }
    if expiry_hours < 1 {
        return Err(AppError::ValidationError(
            "expiryHours must be a positive integer".to_string(),
        ));
    }
    Ok(())
}
