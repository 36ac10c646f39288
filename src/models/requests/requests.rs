use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::RequestStatus;

/// 管理员裁决请求
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/requests.ts")]
pub struct DecisionRequest {
    pub status: RequestStatus,
    /// 驳回时必填
    #[serde(default)]
    pub remarks: Option<String>,
    /// 批准时可改写最后工作日
    #[serde(default)]
    pub approved_last_working_day: Option<String>,
}

/// 存储层的申请写入数据，提交与重新提交共用
#[derive(Debug, Clone)]
pub struct SubmitRequestData {
    pub last_working_day: String,
    pub reason: String,
    pub letter_token: Option<String>,
}
