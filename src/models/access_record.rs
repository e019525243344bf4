use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::entities::access_records;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePasswordRequest {
    // 移动端在本地生成访问码后提交，字段名沿用 password
    pub password: Option<String>,
    pub client_id: Option<String>,
    pub expiry_hours: Option<i64>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AccessRecordResponse {
    pub password: String,
    pub client_id: String,
    pub expiry_date: DateTime<Utc>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifyRequest {
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VerifyResponse {
    pub valid: bool,
    pub message: String,
}

/// 待插入的访问记录，id 由存储层分配
#[derive(Debug, Clone)]
pub struct NewAccessRecord {
    pub code: String,
    pub client_id: String,
    pub expiry_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<access_records::Model> for AccessRecordResponse {
    fn from(record: access_records::Model) -> Self {
        Self {
            password: record.code,
            client_id: record.client_id,
            expiry_date: record.expiry_date,
            is_active: record.is_active,
            created_at: record.created_at,
        }
    }
}
