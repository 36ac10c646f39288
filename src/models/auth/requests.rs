use serde::{Deserialize, Serialize};
use ts_rs::TS;

fn default_false() -> bool {
    false
}

/// 登录请求，username 字段也接受邮箱
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/auth.ts")]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
    #[serde(default = "default_false")]
    pub remember_me: bool,
}

/// 教职工自助注册请求，账号与档案一次建立
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/auth.ts")]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub full_name: String,
    pub employee_id: String,
    pub department: String,
    pub designation: String,
    /// 入职日期，格式 YYYY-MM-DD
    pub joining_date: String,
}
