use actix_web::{HttpRequest, HttpResponse, web};
use tracing::info;

use super::RequestService;
use crate::models::requests::{DecisionRequest, RequestStatus};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::clearances::engine;
use crate::services::{get_storage, internal_error};
use crate::utils::validate;

impl RequestService {
    /// 管理员裁决。批准要求四个清算模块全部通过，
    /// 驳回必须写明理由
    pub async fn decision(
        &self,
        req: HttpRequest,
        path: web::Path<i64>,
        payload: web::Json<DecisionRequest>,
    ) -> HttpResponse {
        let request_id = path.into_inner();
        let payload = payload.into_inner();

        let storage = get_storage(&req);
        let request = match storage.get_request_by_id(request_id).await {
            Ok(Some(r)) => r,
            Ok(None) => {
                return HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::RequestNotFound,
                    "Relieving request not found",
                ));
            }
            Err(e) => return internal_error("decision lookup failed", e),
        };

        if let Some(ref day) = payload.approved_last_working_day
            && validate::validate_date_str(day).is_err()
        {
            return HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "approved_last_working_day must be in YYYY-MM-DD format",
            ));
        }

        let set = match storage.get_clearance_set(request_id).await {
            Ok(s) => s,
            Err(e) => return internal_error("clearance fetch failed", e),
        };
        let fully_cleared = engine::evaluate(&set).fully_cleared;

        if let Err((code, msg)) =
            validate_decision(request.status, payload.status, &payload.remarks, fully_cleared)
        {
            return HttpResponse::UnprocessableEntity()
                .json(ApiResponse::error_empty(code, msg));
        }

        let updated = match storage
            .update_request_status(
                request_id,
                payload.status,
                payload.remarks,
                payload.approved_last_working_day,
            )
            .await
        {
            Ok(r) => r,
            Err(e) => return internal_error("decision update failed", e),
        };

        info!(
            "Request {} decided: {}",
            request_id,
            updated.status
        );

        HttpResponse::Ok().json(ApiResponse::success(updated, "Decision recorded"))
    }
}

/// 裁决规则，纯函数
fn validate_decision(
    current: RequestStatus,
    target: RequestStatus,
    remarks: &Option<String>,
    fully_cleared: bool,
) -> std::result::Result<(), (ErrorCode, &'static str)> {
    if current != RequestStatus::Submitted {
        return Err((
            ErrorCode::InvalidStatusTransition,
            "Only submitted requests can be decided",
        ));
    }
    match target {
        RequestStatus::Submitted => Err((
            ErrorCode::InvalidStatusTransition,
            "Decision must approve or reject the request",
        )),
        RequestStatus::Rejected => {
            if remarks.as_deref().map(str::trim).unwrap_or("").is_empty() {
                Err((
                    ErrorCode::RemarksRequired,
                    "Remarks are required when rejecting a request",
                ))
            } else {
                Ok(())
            }
        }
        RequestStatus::Approved => {
            if fully_cleared {
                Ok(())
            } else {
                Err((
                    ErrorCode::NotFullyCleared,
                    "All clearance modules must be approved before approval",
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approve_requires_full_clearance() {
        assert!(validate_decision(
            RequestStatus::Submitted,
            RequestStatus::Approved,
            &None,
            true
        )
        .is_ok());

        let err = validate_decision(
            RequestStatus::Submitted,
            RequestStatus::Approved,
            &None,
            false,
        )
        .unwrap_err();
        assert_eq!(err.0, ErrorCode::NotFullyCleared);
    }

    #[test]
    fn reject_requires_remarks() {
        let err = validate_decision(
            RequestStatus::Submitted,
            RequestStatus::Rejected,
            &None,
            true,
        )
        .unwrap_err();
        assert_eq!(err.0, ErrorCode::RemarksRequired);

        let err = validate_decision(
            RequestStatus::Submitted,
            RequestStatus::Rejected,
            &Some("   ".to_string()),
            true,
        )
        .unwrap_err();
        assert_eq!(err.0, ErrorCode::RemarksRequired);

        assert!(validate_decision(
            RequestStatus::Submitted,
            RequestStatus::Rejected,
            &Some("Incomplete handover".to_string()),
            false
        )
        .is_ok());
    }

    #[test]
    fn only_submitted_requests_are_decidable() {
        for current in [RequestStatus::Approved, RequestStatus::Rejected] {
            let err = validate_decision(
                current,
                RequestStatus::Approved,
                &None,
                true,
            )
            .unwrap_err();
            assert_eq!(err.0, ErrorCode::InvalidStatusTransition);
        }
    }

    #[test]
    fn decision_target_cannot_be_submitted() {
        let err = validate_decision(
            RequestStatus::Submitted,
            RequestStatus::Submitted,
            &None,
            true,
        )
        .unwrap_err();
        assert_eq!(err.0, ErrorCode::InvalidStatusTransition);
    }
}
