//! JWT 令牌签发与校验。访问令牌走 Authorization 头，
//! 刷新令牌放 HttpOnly Cookie

use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::errors::{RelievingSystemError, Result};

pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const TOKEN_TYPE_REFRESH: &str = "refresh";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 用户 ID
    pub sub: i64,
    pub role: String,
    pub token_type: String,
    pub exp: i64,
    pub iat: i64,
}

#[derive(Debug, Clone)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
}

/// 访问令牌有效期，秒
pub fn access_token_ttl_secs() -> i64 {
    AppConfig::get().jwt.access_token_expiry * 60
}

/// 刷新令牌有效期，秒
pub fn refresh_token_ttl_secs(remember_me: bool) -> i64 {
    let cfg = &AppConfig::get().jwt;
    let days = if remember_me {
        cfg.refresh_token_remember_me_expiry
    } else {
        cfg.refresh_token_expiry
    };
    days * 24 * 3600
}

fn generate_token(user_id: i64, role: &str, token_type: &str, ttl_secs: i64) -> Result<String> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        role: role.to_string(),
        token_type: token_type.to_string(),
        exp: now + ttl_secs,
        iat: now,
    };
    let secret = AppConfig::get().jwt.secret.as_bytes();
    encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))
        .map_err(|e| RelievingSystemError::authentication(format!("failed to sign token: {e}")))
}

pub fn generate_access_token(user_id: i64, role: &str) -> Result<String> {
    generate_token(user_id, role, TOKEN_TYPE_ACCESS, access_token_ttl_secs())
}

pub fn generate_refresh_token(user_id: i64, role: &str, remember_me: bool) -> Result<String> {
    generate_token(
        user_id,
        role,
        TOKEN_TYPE_REFRESH,
        refresh_token_ttl_secs(remember_me),
    )
}

/// 校验令牌并返回声明，过期或签名错误返回认证错误
pub fn verify_token(token: &str, expected_type: &str) -> Result<Claims> {
    let secret = AppConfig::get().jwt.secret.as_bytes();
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret),
        &Validation::default(),
    )
    .map_err(|e| RelievingSystemError::authentication(format!("invalid token: {e}")))?;

    if data.claims.token_type != expected_type {
        return Err(RelievingSystemError::authentication(format!(
            "expected {expected_type} token"
        )));
    }
    Ok(data.claims)
}
