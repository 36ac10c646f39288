use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{DocumentKind, RelievingRequest};
use crate::models::clearances::{ClearanceOverview, ClearanceSet};
use crate::models::faculties::Faculty;

/// 申请与关联数据，存储层联表查询结果
#[derive(Debug, Clone)]
pub struct RequestWithRelations {
    pub request: RelievingRequest,
    pub faculty: Option<Faculty>,
    pub clearances: ClearanceSet,
}

/// 管理员审核列表中的一条
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/requests.ts")]
pub struct RequestReviewItem {
    pub request: RelievingRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faculty: Option<Faculty>,
    pub clearance: ClearanceOverview,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/requests.ts")]
pub struct RequestListResponse {
    pub items: Vec<RequestReviewItem>,
}

/// 文档签发状态
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/requests.ts")]
pub struct DocumentState {
    pub kind: DocumentKind,
    pub label: String,
    pub ready: bool,
}

/// 教职工查看本人申请的聚合视图
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/requests.ts")]
pub struct MyRequestResponse {
    pub faculty: Faculty,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request: Option<RelievingRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clearance: Option<ClearanceOverview>,
    pub documents: Vec<DocumentState>,
    /// 任期字符串，如 "3Y, 1M, 23D"，仅在有申请时计算
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenure: Option<String>,
}

/// 签发文档后的响应
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/requests.ts")]
pub struct IssueDocumentResponse {
    pub request: RelievingRequest,
    pub tenure: String,
}
