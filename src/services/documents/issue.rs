use actix_web::{HttpRequest, HttpResponse, web};
use tracing::info;

use super::DocumentService;
use crate::models::requests::{
    DocumentKind, IssueDocumentResponse, RelievingRequest, RequestStatus,
};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{get_storage, internal_error};
use crate::utils::tenure;

impl DocumentService {
    /// 标记某类文档已签发。只有已批准的申请可签发，重复签发幂等
    pub async fn issue(&self, req: HttpRequest, path: web::Path<(i64, String)>) -> HttpResponse {
        let (request_id, kind_str) = path.into_inner();
        let Ok(kind) = kind_str.parse::<DocumentKind>() else {
            return HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::DocumentKindInvalid,
                format!("Unknown document kind: {kind_str}"),
            ));
        };

        let storage = get_storage(&req);
        let request = match storage.get_request_by_id(request_id).await {
            Ok(Some(r)) => r,
            Ok(None) => {
                return HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::RequestNotFound,
                    "Relieving request not found",
                ));
            }
            Err(e) => return internal_error("document request lookup failed", e),
        };

        let needs_write = match validate_issue(&request, kind) {
            Ok(n) => n,
            Err((code, message)) => {
                return HttpResponse::UnprocessableEntity()
                    .json(ApiResponse::error_empty(code, message));
            }
        };

        let updated = if needs_write {
            match storage.set_document_flag(request_id, kind).await {
                Ok(r) => r,
                Err(e) => return internal_error("document flag update failed", e),
            }
        } else {
            request
        };

        let faculty = match storage.get_faculty_by_id(updated.faculty_id).await {
            Ok(Some(f)) => f,
            Ok(None) => {
                return HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::FacultyNotFound,
                    "Faculty profile not found",
                ));
            }
            Err(e) => return internal_error("faculty lookup failed", e),
        };

        let tenure_str = match tenure::calculate_tenure(
            &faculty.joining_date,
            updated.effective_last_working_day(),
        ) {
            Ok(t) => t.to_string(),
            Err(e) => return internal_error("tenure calculation failed", e),
        };

        info!(
            "Document {} issued for request {}",
            kind, request_id
        );

        HttpResponse::Ok().json(ApiResponse::success(
            IssueDocumentResponse {
                request: updated,
                tenure: tenure_str,
            },
            format!("{} marked as issued", kind.label()),
        ))
    }
}

/// 签发前置检查，纯函数。返回是否需要落库；已签发的文档跳过写入，
/// 重复调用因此幂等
fn validate_issue(
    request: &RelievingRequest,
    kind: DocumentKind,
) -> std::result::Result<bool, (ErrorCode, &'static str)> {
    if request.status != RequestStatus::Approved {
        return Err((
            ErrorCode::DocumentNotIssuable,
            "Documents can only be issued for approved requests",
        ));
    }
    Ok(!request.document_ready(kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(status: RequestStatus, settlement_ready: bool) -> RelievingRequest {
        RelievingRequest {
            id: 1,
            faculty_id: 2,
            proposed_last_working_day: "2026-03-31".into(),
            approved_last_working_day: None,
            reason: "Relocation".into(),
            resignation_letter_token: None,
            status,
            admin_remarks: None,
            relieving_letter_ready: false,
            experience_cert_ready: false,
            service_cert_ready: false,
            settlement_ready,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn only_approved_requests_are_issuable() {
        for status in [RequestStatus::Submitted, RequestStatus::Rejected] {
            let result = validate_issue(&request(status, false), DocumentKind::RelievingLetter);
            assert_eq!(result.unwrap_err().0, ErrorCode::DocumentNotIssuable);
        }
    }

    #[test]
    fn repeated_issuance_skips_flag_write() {
        let req = request(RequestStatus::Approved, true);
        assert_eq!(
            validate_issue(&req, DocumentKind::SettlementStatement),
            Ok(false)
        );
        // 其他文档不受已签发标志影响
        assert_eq!(
            validate_issue(&req, DocumentKind::ExperienceCertificate),
            Ok(true)
        );
    }
}
