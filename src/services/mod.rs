//! 业务服务层，一个操作一个文件

pub mod auth;
pub mod clearances;
pub mod documents;
pub mod files;
pub mod requests;

use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, web};
use tracing::error;

use crate::cache::ObjectCache;
use crate::errors::RelievingSystemError;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 从应用数据取存储句柄。应用启动时一定注入，取不到属编程错误
pub(crate) fn get_storage(req: &HttpRequest) -> Arc<dyn Storage> {
    req.app_data::<web::Data<Arc<dyn Storage>>>()
        .expect("Storage not configured in app data")
        .get_ref()
        .clone()
}

pub(crate) fn get_cache(req: &HttpRequest) -> Arc<dyn ObjectCache> {
    req.app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .expect("Cache not configured in app data")
        .get_ref()
        .clone()
}

/// 存储层错误统一按内部错误返回，细节只进日志
pub(crate) fn internal_error(context: &str, err: RelievingSystemError) -> HttpResponse {
    error!("{}: {}", context, err.format_simple());
    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
        ErrorCode::InternalServerError,
        "Internal server error",
    ))
}
