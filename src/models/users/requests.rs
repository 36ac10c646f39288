use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::UserRole;

/// 创建用户请求，存储层使用
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/users.ts")]
pub struct CreateUserRequest {
    pub username: String,
    pub email: String,
    /// 明文密码，入库前由调用方哈希
    #[ts(skip)]
    #[serde(skip_serializing)]
    pub password: String,
    pub role: UserRole,
}
