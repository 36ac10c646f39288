use actix_web::{HttpRequest, HttpResponse, web};

use super::{ClearanceService, engine};
use crate::middlewares::require_jwt::extract_user;
use crate::models::users::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{get_storage, internal_error};

impl ClearanceService {
    /// 清算总览。管理员可看所有申请，教职工只能看本人的
    pub async fn overview(&self, req: HttpRequest, path: web::Path<i64>) -> HttpResponse {
        let request_id = path.into_inner();
        let Some(user) = extract_user(&req) else {
            return HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            ));
        };

        let storage = get_storage(&req);
        let request = match storage.get_request_by_id(request_id).await {
            Ok(Some(r)) => r,
            Ok(None) => {
                return HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::RequestNotFound,
                    "Relieving request not found",
                ));
            }
            Err(e) => return internal_error("clearance overview lookup failed", e),
        };

        if user.role != UserRole::Admin {
            let owns = match storage.get_faculty_by_user_id(user.id).await {
                Ok(Some(f)) => f.id == request.faculty_id,
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

        let set = match storage.get_clearance_set(request_id).await {
            Ok(s) => s,
            Err(e) => return internal_error("clearance overview fetch failed", e),
        };

        HttpResponse::Ok().json(ApiResponse::success(
            engine::evaluate(&set),
            "Clearance overview",
        ))
    }
}
