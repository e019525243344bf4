use crate::error::AppResult;
use crate::models::VerifyResponse;
use crate::services::AccessRecordStore;

#[derive(Clone)]
pub struct VerificationService {
    store: AccessRecordStore,
}

impl VerificationService {
    pub fn new(store: AccessRecordStore) -> Self {
        Self { store }
    }

    /// 校验提交的访问码，命中则原子消费。
    /// 未签发、已过期、已消费三种情况返回同一条失败消息，
    /// 调用方无法借此探测某个码是否存在过
    pub async fn verify(&self, submitted_code: &str) -> AppResult<VerifyResponse> {
        if submitted_code.is_empty() {
            return Ok(VerifyResponse {
                valid: false,
                message: "Password is required".to_string(),
            });
        }

        let Some(record) = self.store.find_active_valid(submitted_code).await? else {
            return Ok(invalid_outcome());
        };

        // 条件更新失败说明刚被并发请求消费，按未命中处理
        if !self.store.mark_consumed(record.id).await? {
            return Ok(invalid_outcome());
        }

        Ok(VerifyResponse {
            valid: true,
            message: "Password is valid".to_string(),
        })
    }
}

fn invalid_outcome() -> VerifyResponse {
    VerifyResponse {
        valid: false,
        message: "Invalid or expired password".to_string(),
    }
}
