use std::time::Duration;

use actix_web::cookie::{Cookie, SameSite, time};
use actix_web::{HttpRequest, HttpResponse, web};
use tracing::{info, warn};

use super::{AuthService, REFRESH_COOKIE, REFRESH_COOKIE_PATH};
use crate::cache;
use crate::config::AppConfig;
use crate::models::auth::{LoginRequest, LoginResponse};
use crate::models::users::UserStatus;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{get_cache, get_storage, internal_error};
use crate::utils::jwt;

impl AuthService {
    pub async fn login(&self, req: HttpRequest, payload: web::Json<LoginRequest>) -> HttpResponse {
        let storage = get_storage(&req);
        let payload = payload.into_inner();

        let user = match storage
            .get_user_by_username_or_email(&payload.username)
            .await
        {
            Ok(Some(user)) => user,
            Ok(None) => {
                return HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    "Invalid username or password",
                ));
            }
            Err(e) => return internal_error("login lookup failed", e),
        };

        match crate::utils::password::verify_password(&payload.password, &user.password_hash) {
            Ok(true) => {}
            Ok(false) => {
                warn!("Failed login attempt for user {}", user.username);
                return HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                    ErrorCode::AuthFailed,
                    "Invalid username or password",
                ));
            }
            Err(e) => return internal_error("password verification failed", e),
        }

        if user.status != UserStatus::Active {
            return HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "Account is inactive",
            ));
        }

        let pair = match user.generate_token_pair(payload.remember_me) {
            Ok(p) => p,
            Err(e) => return internal_error("token generation failed", e),
        };

        if let Err(e) = storage.update_last_login(user.id).await {
            warn!("Failed to record last login: {}", e.format_simple());
        }

        // 预热会话缓存，后续请求认证不再查库
        let cache = get_cache(&req);
        let _ = cache::insert_typed(
            cache.as_ref(),
            &format!("user:{}", pair.access_token),
            &user,
            Some(Duration::from_secs(300)),
        )
        .await;

        info!("User {} logged in", user.username);

        let refresh_ttl = jwt::refresh_token_ttl_secs(payload.remember_me);
        let cookie = Cookie::build(REFRESH_COOKIE, pair.refresh_token)
            .path(REFRESH_COOKIE_PATH)
            .http_only(true)
            .secure(AppConfig::get().is_production())
            .same_site(SameSite::Strict)
            .max_age(time::Duration::seconds(refresh_ttl))
            .finish();

        let body = LoginResponse {
            access_token: pair.access_token,
            expires_in: jwt::access_token_ttl_secs(),
            user,
            created_at: chrono::Utc::now(),
        };

        HttpResponse::Ok()
            .cookie(cookie)
            .json(ApiResponse::success(body, "Login successful"))
    }
}
