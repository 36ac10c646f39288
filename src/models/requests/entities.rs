use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 离职申请状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/requests.ts")]
#[serde(rename_all = "UPPERCASE")]
pub enum RequestStatus {
    Submitted,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub const SUBMITTED: &'static str = "SUBMITTED";
    pub const APPROVED: &'static str = "APPROVED";
    pub const REJECTED: &'static str = "REJECTED";

    pub fn as_str(&self) -> &'static str {
        match self {
            RequestStatus::Submitted => Self::SUBMITTED,
            RequestStatus::Approved => Self::APPROVED,
            RequestStatus::Rejected => Self::REJECTED,
        }
    }
}

impl fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            Self::SUBMITTED => Ok(RequestStatus::Submitted),
            Self::APPROVED => Ok(RequestStatus::Approved),
            Self::REJECTED => Ok(RequestStatus::Rejected),
            other => Err(format!("unknown request status: {other}")),
        }
    }
}

impl Default for RequestStatus {
    fn default() -> Self {
        RequestStatus::Submitted
    }
}

/// 可签发的离职文档种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/requests.ts")]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    RelievingLetter,
    ExperienceCertificate,
    ServiceCertificate,
    SettlementStatement,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 4] = [
        DocumentKind::RelievingLetter,
        DocumentKind::ExperienceCertificate,
        DocumentKind::ServiceCertificate,
        DocumentKind::SettlementStatement,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::RelievingLetter => "relieving_letter",
            DocumentKind::ExperienceCertificate => "experience_certificate",
            DocumentKind::ServiceCertificate => "service_certificate",
            DocumentKind::SettlementStatement => "settlement_statement",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DocumentKind::RelievingLetter => "Relieving Letter",
            DocumentKind::ExperienceCertificate => "Experience Certificate",
            DocumentKind::ServiceCertificate => "Service Certificate",
            DocumentKind::SettlementStatement => "Final Settlement Statement",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "relieving_letter" => Ok(DocumentKind::RelievingLetter),
            "experience_certificate" => Ok(DocumentKind::ExperienceCertificate),
            "service_certificate" => Ok(DocumentKind::ServiceCertificate),
            "settlement_statement" => Ok(DocumentKind::SettlementStatement),
            other => Err(format!("unknown document kind: {other}")),
        }
    }
}

/// 离职申请，每位教职工至多一条
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/requests.ts")]
pub struct RelievingRequest {
    pub id: i64,
    pub faculty_id: i64,
    /// 教职工提议的最后工作日，格式 YYYY-MM-DD
    pub proposed_last_working_day: String,
    /// 管理员批准时可改写的最后工作日
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approved_last_working_day: Option<String>,
    pub reason: String,
    /// 辞职信文件令牌
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resignation_letter_token: Option<String>,
    pub status: RequestStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_remarks: Option<String>,
    pub relieving_letter_ready: bool,
    pub experience_cert_ready: bool,
    pub service_cert_ready: bool,
    pub settlement_ready: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl RelievingRequest {
    /// 实际采用的最后工作日，批准值优先
    pub fn effective_last_working_day(&self) -> &str {
        self.approved_last_working_day
            .as_deref()
            .unwrap_or(&self.proposed_last_working_day)
    }

    pub fn document_ready(&self, kind: DocumentKind) -> bool {
        match kind {
            DocumentKind::RelievingLetter => self.relieving_letter_ready,
            DocumentKind::ExperienceCertificate => self.experience_cert_ready,
            DocumentKind::ServiceCertificate => self.service_cert_ready,
            DocumentKind::SettlementStatement => self.settlement_ready,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_round_trip() {
        for s in [
            RequestStatus::Submitted,
            RequestStatus::Approved,
            RequestStatus::Rejected,
        ] {
            assert_eq!(s.as_str().parse::<RequestStatus>().unwrap(), s);
        }
        assert!("PENDING".parse::<RequestStatus>().is_err());
    }

    #[test]
    fn document_kind_from_path_segment() {
        assert_eq!(
            "experience_certificate".parse::<DocumentKind>().unwrap(),
            DocumentKind::ExperienceCertificate
        );
        assert!("transcript".parse::<DocumentKind>().is_err());
    }
}
