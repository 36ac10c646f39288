//! JWT 认证中间件。校验访问令牌，将用户注入请求扩展，
//! 会话上下文优先走缓存

use std::future::{Ready, ready};
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use actix_service::{Service, Transform};
use actix_web::body::EitherBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{Error, HttpMessage, HttpRequest, web};
use futures_util::future::LocalBoxFuture;
use tracing::debug;

use super::create_error_response;
use crate::cache::{self, CacheResult, ObjectCache};
use crate::models::ErrorCode;
use crate::models::users::{User, UserStatus};
use crate::storage::Storage;
use crate::utils::jwt::{self, TOKEN_TYPE_ACCESS};

pub struct RequireJWT;

impl<S, B> Transform<S, ServiceRequest> for RequireJWT
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RequireJWTMiddleware<S>;
    type InitError = ();
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireJWTMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireJWTMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireJWTMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    actix_service::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let token = match extract_bearer_token(req.request()) {
                Some(t) => t,
                None => {
                    let response = create_error_response(
                        StatusCode::UNAUTHORIZED,
                        ErrorCode::Unauthorized,
                        "Missing access token",
                    );
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            let claims = match jwt::verify_token(&token, TOKEN_TYPE_ACCESS) {
                Ok(c) => c,
                Err(e) => {
                    debug!("Token verification failed: {}", e);
                    let response = create_error_response(
                        StatusCode::UNAUTHORIZED,
                        ErrorCode::InvalidToken,
                        "Invalid or expired access token",
                    );
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            let user = match load_user(req.request(), &token, claims.sub).await {
                Some(u) => u,
                None => {
                    let response = create_error_response(
                        StatusCode::UNAUTHORIZED,
                        ErrorCode::AuthFailed,
                        "User not found or inactive",
                    );
                    return Ok(req.into_response(response).map_into_right_body());
                }
            };

            req.extensions_mut().insert(user);
            service
                .call(req)
                .await
                .map(ServiceResponse::map_into_left_body)
        })
    }
}

fn extract_bearer_token(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("Authorization")?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::to_string)
}

/// 先查会话缓存，未命中回落到存储并写回
async fn load_user(req: &HttpRequest, token: &str, user_id: i64) -> Option<User> {
    let cache = req
        .app_data::<web::Data<Arc<dyn ObjectCache>>>()
        .map(|c| c.get_ref().clone());
    let cache_key = format!("user:{token}");

    if let Some(ref cache) = cache
        && let Ok(CacheResult::Found(user)) = cache::get_typed::<User>(cache.as_ref(), &cache_key).await
        && user.status == UserStatus::Active
    {
        return Some(user);
    }

    let storage = req
        .app_data::<web::Data<Arc<dyn Storage>>>()?
        .get_ref()
        .clone();
    let user = storage.get_user_by_id(user_id).await.ok()??;
    if user.status != UserStatus::Active {
        return None;
    }

    if let Some(ref cache) = cache {
        let _ = cache::insert_typed(
            cache.as_ref(),
            &cache_key,
            &user,
            Some(Duration::from_secs(300)),
        )
        .await;
    }
    Some(user)
}

/// 从请求扩展读取认证后的用户
pub fn extract_user(req: &HttpRequest) -> Option<User> {
    req.extensions().get::<User>().cloned()
}
