use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 创建教职工档案请求
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/faculties.ts")]
pub struct CreateFacultyRequest {
    pub user_id: i64,
    pub full_name: String,
    pub employee_id: String,
    pub department: String,
    pub designation: String,
    pub joining_date: String,
}
