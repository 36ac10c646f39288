use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 教职工档案，与用户账号一对一
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/faculties.ts")]
pub struct Faculty {
    pub id: i64,
    pub user_id: i64,
    pub full_name: String,
    pub employee_id: String,
    pub department: String,
    pub designation: String,
    /// 入职日期，格式 YYYY-MM-DD
    pub joining_date: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
