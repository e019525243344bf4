use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::entities::access_records;
use crate::error::AppResult;
use crate::models::NewAccessRecord;

/// 访问记录的持久化入口。连接句柄在 main 中建立一次，
/// 随服务克隆注入，不做模块级单例
#[derive(Clone)]
pub struct AccessRecordStore {
    db: DatabaseConnection,
}

impl AccessRecordStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn insert(&self, record: NewAccessRecord) -> AppResult<access_records::Model> {
        let model = access_records::ActiveModel {
            code: Set(record.code),
            client_id: Set(record.client_id),
            expiry_date: Set(record.expiry_date),
            is_active: Set(true),
            created_at: Set(record.created_at),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        Ok(model)
    }

    /// 查找当前仍然有效的记录（激活且未过期）。
    /// 同一 code 理论上至多一条有效记录，防御性处理重复时取最新创建的一条
    pub async fn find_active_valid(&self, code: &str) -> AppResult<Option<access_records::Model>> {
        let now = Utc::now();
        let record = access_records::Entity::find()
            .filter(access_records::Column::Code.eq(code))
            .filter(access_records::Column::IsActive.eq(true))
            .filter(access_records::Column::ExpiryDate.gt(now))
            .order_by_desc(access_records::Column::CreatedAt)
            .order_by_desc(access_records::Column::Id)
            .one(&self.db)
            .await?;

        Ok(record)
    }

    /// 条件更新：仅当记录仍处于激活状态时置为已消费。
    /// 返回 false 表示已被并发的另一次验证抢先消费
    pub async fn mark_consumed(&self, id: i64) -> AppResult<bool> {
        let result = access_records::Entity::update_many()
            .col_expr(access_records::Column::IsActive, Expr::value(false))
            .filter(access_records::Column::Id.eq(id))
            .filter(access_records::Column::IsActive.eq(true))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected == 1)
    }

    pub async fn list_by_client(&self, client_id: &str) -> AppResult<Vec<access_records::Model>> {
        let records = access_records::Entity::find()
            .filter(access_records::Column::ClientId.eq(client_id))
            .order_by_desc(access_records::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(records)
    }

    /// 客户被删除时级联清理其名下所有记录，返回删除数量
    pub async fn delete_by_client(&self, client_id: &str) -> AppResult<u64> {
        let result = access_records::Entity::delete_many()
            .filter(access_records::Column::ClientId.eq(client_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected)
    }
}
