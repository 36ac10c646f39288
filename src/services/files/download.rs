use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, web};

use super::FileService;
use crate::config::AppConfig;
use crate::middlewares::require_jwt::extract_user;
use crate::models::users::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{get_storage, internal_error};

fn content_type_for(ext: &str) -> &'static str {
    match ext {
        ".pdf" => "application/pdf",
        ".jpg" | ".jpeg" => "image/jpeg",
        ".png" => "image/png",
        _ => "application/octet-stream",
    }
}

impl FileService {
    /// 按令牌下载辞职信。管理员或文件归属人可下载
    pub async fn download(&self, req: HttpRequest, path: web::Path<String>) -> HttpResponse {
        let token = path.into_inner();
        let Some(user) = extract_user(&req) else {
            return HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            ));
        };

        let storage = get_storage(&req);
        let file = match storage.get_file_by_token(&token).await {
            Ok(Some(f)) => f,
            Ok(None) => {
                return HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::FileNotFound,
                    "File not found",
                ));
            }
            Err(e) => return internal_error("file lookup failed", e),
        };

        if user.role != UserRole::Admin {
            let owns = match storage.get_faculty_by_user_id(user.id).await {
                Ok(Some(f)) => f.id == file.faculty_id,
                Ok(None) => false,
                Err(e) => return internal_error("faculty lookup failed", e),
            };
            if !owns {
                return HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "Insufficient permissions",
                ));
            }
        }

        let path = format!(
            "{}/{}/{}{}",
            AppConfig::get().upload.dir,
            file.faculty_id,
            file.letter_token,
            file.file_type
        );
        let bytes = match tokio::fs::read(&path).await {
            Ok(b) => b,
            Err(_) => {
                return HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::FileNotFound,
                    "File is missing from storage",
                ));
            }
        };

        HttpResponse::Ok()
            .content_type(content_type_for(&file.file_type))
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file.file_name),
            ))
            .body(bytes)
    }
}
