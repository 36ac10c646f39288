use actix_web::{HttpRequest, HttpResponse};

use super::{AuthService, REFRESH_COOKIE};
use crate::models::auth::RefreshResponse;
use crate::models::users::UserStatus;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{get_storage, internal_error};
use crate::utils::jwt::{self, TOKEN_TYPE_REFRESH};

impl AuthService {
    /// 用刷新 Cookie 换新的访问令牌
    pub async fn refresh_token(&self, req: HttpRequest) -> HttpResponse {
        let Some(cookie) = req.cookie(REFRESH_COOKIE) else {
            return HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Missing refresh token",
            ));
        };

        let claims = match jwt::verify_token(cookie.value(), TOKEN_TYPE_REFRESH) {
            Ok(c) => c,
            Err(_) => {
                return HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::InvalidToken,
                    "Invalid or expired refresh token",
                ));
            }
        };

        let storage = get_storage(&req);
        let user = match storage.get_user_by_id(claims.sub).await {
            Ok(Some(u)) if u.status == UserStatus::Active => u,
            Ok(_) => {
                return HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    "User not found or inactive",
                ));
            }
            Err(e) => return internal_error("refresh lookup failed", e),
        };

        let access_token = match user.generate_access_token() {
            Ok(t) => t,
            Err(e) => return internal_error("token generation failed", e),
        };

        HttpResponse::Ok().json(ApiResponse::success(
            RefreshResponse {
                access_token,
                expires_in: jwt::access_token_ttl_secs(),
            },
            "Token refreshed",
        ))
    }
}
