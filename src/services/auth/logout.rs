use actix_web::cookie::{Cookie, time};
use actix_web::{HttpRequest, HttpResponse};

use super::{AuthService, REFRESH_COOKIE, REFRESH_COOKIE_PATH};
use crate::models::ApiResponse;
use crate::services::get_cache;

impl AuthService {
    /// 注销。清掉会话缓存并让刷新 Cookie 立即过期
    pub async fn logout(&self, req: HttpRequest) -> HttpResponse {
        if let Some(token) = req
            .headers()
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
        {
            let cache = get_cache(&req);
            let _ = cache.remove(&format!("user:{token}")).await;
        }

        let expired = Cookie::build(REFRESH_COOKIE, "")
            .path(REFRESH_COOKIE_PATH)
            .http_only(true)
            .max_age(time::Duration::ZERO)
            .finish();

        HttpResponse::Ok()
            .cookie(expired)
            .json(ApiResponse::success_empty("Logged out"))
    }
}
