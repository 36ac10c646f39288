//! SeaORM 存储实现，支持 SQLite、PostgreSQL 与 MySQL

mod clearances;
mod faculties;
mod files;
mod requests;
mod users;

use std::time::Duration;

use async_trait::async_trait;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::errors::{RelievingSystemError, Result};
use crate::models::clearances::{ClearanceRecord, ClearanceSet};
use crate::models::faculties::{CreateFacultyRequest, Faculty};
use crate::models::files::StoredFile;
use crate::models::requests::{
    DocumentKind, RelievingRequest, RequestStatus, RequestWithRelations, SubmitRequestData,
};
use crate::models::users::{CreateUserRequest, User};
use crate::storage::Storage;

pub struct SeaOrmStorage {
    db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 连接数据库并执行未应用的迁移
    pub async fn connect(config: &DatabaseConfig) -> Result<Self> {
        let db = if config.url.starts_with("sqlite:") {
            Self::connect_sqlite(config).await?
        } else if config.url.starts_with("postgres:")
            || config.url.starts_with("postgresql:")
            || config.url.starts_with("mysql:")
        {
            Self::connect_generic(config).await?
        } else {
            return Err(RelievingSystemError::database_config(format!(
                "unsupported database url: {}",
                config.url
            )));
        };

        Migrator::up(&db, None)
            .await
            .map_err(|e| RelievingSystemError::database_operation(e.to_string()))?;
        info!("Database connected and migrations applied");

        Ok(Self { db })
    }

    async fn connect_sqlite(config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut options = ConnectOptions::new(&config.url);
        // SQLite 写并发有限，连接池保持小规模
        options
            .max_connections(config.pool_size.min(4))
            .connect_timeout(Duration::from_secs(config.timeout))
            .sqlx_logging(false);

        let db = Database::connect(options)
            .await
            .map_err(|e| RelievingSystemError::database_connection(e.to_string()))?;

        // WAL 模式改善读写并发
        use sea_orm::ConnectionTrait;
        db.execute_unprepared("PRAGMA journal_mode = WAL;")
            .await
            .map_err(|e| RelievingSystemError::database_operation(e.to_string()))?;
        db.execute_unprepared("PRAGMA synchronous = NORMAL;")
            .await
            .map_err(|e| RelievingSystemError::database_operation(e.to_string()))?;
        db.execute_unprepared("PRAGMA foreign_keys = ON;")
            .await
            .map_err(|e| RelievingSystemError::database_operation(e.to_string()))?;

        Ok(db)
    }

    async fn connect_generic(config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut options = ConnectOptions::new(&config.url);
        options
            .max_connections(config.pool_size)
            .connect_timeout(Duration::from_secs(config.timeout))
            .sqlx_logging(false);

        Database::connect(options)
            .await
            .map_err(|e| RelievingSystemError::database_connection(e.to_string()))
    }
}

#[async_trait]
impl Storage for SeaOrmStorage {
    async fn create_user(&self, request: CreateUserRequest) -> Result<User> {
        self.create_user_impl(request).await
    }

    async fn get_user_by_id(&self, user_id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(user_id).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn update_last_login(&self, user_id: i64) -> Result<()> {
        self.update_last_login_impl(user_id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn create_faculty(&self, request: CreateFacultyRequest) -> Result<Faculty> {
        self.create_faculty_impl(request).await
    }

    async fn get_faculty_by_id(&self, faculty_id: i64) -> Result<Option<Faculty>> {
        self.get_faculty_by_id_impl(faculty_id).await
    }

    async fn get_faculty_by_user_id(&self, user_id: i64) -> Result<Option<Faculty>> {
        self.get_faculty_by_user_id_impl(user_id).await
    }

    async fn submit_request(
        &self,
        faculty_id: i64,
        data: SubmitRequestData,
    ) -> Result<RelievingRequest> {
        self.submit_request_impl(faculty_id, data).await
    }

    async fn get_request_by_id(&self, request_id: i64) -> Result<Option<RelievingRequest>> {
        self.get_request_by_id_impl(request_id).await
    }

    async fn get_request_by_faculty_id(
        &self,
        faculty_id: i64,
    ) -> Result<Option<RelievingRequest>> {
        self.get_request_by_faculty_id_impl(faculty_id).await
    }

    async fn update_request_status(
        &self,
        request_id: i64,
        status: RequestStatus,
        remarks: Option<String>,
        approved_last_working_day: Option<String>,
    ) -> Result<RelievingRequest> {
        self.update_request_status_impl(request_id, status, remarks, approved_last_working_day)
            .await
    }

    async fn set_document_flag(
        &self,
        request_id: i64,
        kind: DocumentKind,
    ) -> Result<RelievingRequest> {
        self.set_document_flag_impl(request_id, kind).await
    }

    async fn list_requests_with_relations(&self) -> Result<Vec<RequestWithRelations>> {
        self.list_requests_with_relations_impl().await
    }

    async fn list_requests_with_faculty(
        &self,
    ) -> Result<Vec<(RelievingRequest, Option<Faculty>)>> {
        self.list_requests_with_faculty_impl().await
    }

    async fn get_clearance_set(&self, request_id: i64) -> Result<ClearanceSet> {
        self.get_clearance_set_impl(request_id).await
    }

    async fn upsert_clearance(&self, record: ClearanceRecord) -> Result<()> {
        self.upsert_clearance_impl(record).await
    }

    async fn store_file_record(&self, file: StoredFile) -> Result<StoredFile> {
        self.store_file_record_impl(file).await
    }

    async fn get_file_by_token(&self, letter_token: &str) -> Result<Option<StoredFile>> {
        self.get_file_by_token_impl(letter_token).await
    }
}
