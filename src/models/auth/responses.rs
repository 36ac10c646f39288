use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::faculties::Faculty;
use crate::models::users::User;

/// 登录成功响应，刷新令牌写入 HttpOnly Cookie 不出现在响应体
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/auth.ts")]
pub struct LoginResponse {
    pub access_token: String,
    /// 访问令牌有效期，秒
    pub expires_in: i64,
    pub user: User,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// 刷新令牌响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/auth.ts")]
pub struct RefreshResponse {
    pub access_token: String,
    pub expires_in: i64,
}

/// 当前用户信息
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/auth.ts")]
pub struct ProfileResponse {
    pub user: User,
    /// 管理员账号没有教职工档案
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty: Option<Faculty>,
}
