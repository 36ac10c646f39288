//! 存储抽象层。业务代码只依赖 Storage trait，
//! 具体数据库由连接 URL 的 scheme 决定

pub mod sea_orm_storage;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::models::clearances::{ClearanceRecord, ClearanceSet};
use crate::models::faculties::{CreateFacultyRequest, Faculty};
use crate::models::files::StoredFile;
use crate::models::requests::{
    DocumentKind, RelievingRequest, RequestStatus, RequestWithRelations, SubmitRequestData,
};
use crate::models::users::{CreateUserRequest, User};

#[async_trait]
pub trait Storage: Send + Sync {
    // 用户
    async fn create_user(&self, request: CreateUserRequest) -> Result<User>;
    async fn get_user_by_id(&self, user_id: i64) -> Result<Option<User>>;
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    async fn update_last_login(&self, user_id: i64) -> Result<()>;
    async fn count_users(&self) -> Result<u64>;

    // 教职工档案
    async fn create_faculty(&self, request: CreateFacultyRequest) -> Result<Faculty>;
    async fn get_faculty_by_id(&self, faculty_id: i64) -> Result<Option<Faculty>>;
    async fn get_faculty_by_user_id(&self, user_id: i64) -> Result<Option<Faculty>>;

    // 离职申请
    /// 提交或重新提交申请。已有记录时更新并重置为 SUBMITTED
    async fn submit_request(
        &self,
        faculty_id: i64,
        data: SubmitRequestData,
    ) -> Result<RelievingRequest>;
    async fn get_request_by_id(&self, request_id: i64) -> Result<Option<RelievingRequest>>;
    async fn get_request_by_faculty_id(&self, faculty_id: i64)
    -> Result<Option<RelievingRequest>>;
    async fn update_request_status(
        &self,
        request_id: i64,
        status: RequestStatus,
        remarks: Option<String>,
        approved_last_working_day: Option<String>,
    ) -> Result<RelievingRequest>;
    async fn set_document_flag(
        &self,
        request_id: i64,
        kind: DocumentKind,
    ) -> Result<RelievingRequest>;
    /// 联表查询全部申请及档案与清算记录
    async fn list_requests_with_relations(&self) -> Result<Vec<RequestWithRelations>>;
    /// 降级查询，只带教职工档案
    async fn list_requests_with_faculty(
        &self,
    ) -> Result<Vec<(RelievingRequest, Option<Faculty>)>>;

    // 清算
    async fn get_clearance_set(&self, request_id: i64) -> Result<ClearanceSet>;
    /// 按 request_id 插入或整体覆盖对应模块的记录
    async fn upsert_clearance(&self, record: ClearanceRecord) -> Result<()>;

    // 文件
    async fn store_file_record(&self, file: StoredFile) -> Result<StoredFile>;
    async fn get_file_by_token(&self, letter_token: &str) -> Result<Option<StoredFile>>;
}

/// 按配置建立存储后端并执行迁移
pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::connect(&AppConfig::get().database).await?;
    Ok(Arc::new(storage))
}
