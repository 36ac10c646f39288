use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 已上传的辞职信文件记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/files.ts")]
pub struct StoredFile {
    /// 下载令牌，同时是存储文件名
    pub letter_token: String,
    pub file_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub faculty_id: i64,
    pub uploaded_at: chrono::DateTime<chrono::Utc>,
}
