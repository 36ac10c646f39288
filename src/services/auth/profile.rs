use actix_web::{HttpRequest, HttpResponse};

use super::AuthService;
use crate::middlewares::require_jwt::extract_user;
use crate::models::auth::ProfileResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{get_storage, internal_error};

impl AuthService {
    pub async fn profile(&self, req: HttpRequest) -> HttpResponse {
        let Some(user) = extract_user(&req) else {
            return HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            ));
        };

        let storage = get_storage(&req);
        let faculty = match storage.get_faculty_by_user_id(user.id).await {
            Ok(f) => f,
            Err(e) => return internal_error("profile lookup failed", e),
        };

        HttpResponse::Ok().json(ApiResponse::success(
            ProfileResponse { user, faculty },
            "Profile fetched",
        ))
    }
}
