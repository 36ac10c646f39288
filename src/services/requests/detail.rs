use actix_web::{HttpRequest, HttpResponse, web};
use tracing::warn;

use super::RequestService;
use crate::middlewares::require_jwt::extract_user;
use crate::models::requests::{DocumentKind, DocumentState, MyRequestResponse, RelievingRequest};
use crate::models::users::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::clearances::engine;
use crate::services::{get_storage, internal_error};
use crate::utils::tenure;

impl RequestService {
    /// 教职工查看本人申请的聚合视图
    pub async fn my_request(&self, req: HttpRequest) -> HttpResponse {
        let Some(user) = extract_user(&req) else {
            return HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            ));
        };

        let storage = get_storage(&req);
        let faculty = match storage.get_faculty_by_user_id(user.id).await {
            Ok(Some(f)) => f,
            Ok(None) => {
                return HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::FacultyNotFound,
                    "Faculty profile not found",
                ));
            }
            Err(e) => return internal_error("faculty lookup failed", e),
        };

        let request = match storage.get_request_by_faculty_id(faculty.id).await {
            Ok(r) => r,
            Err(e) => return internal_error("request lookup failed", e),
        };

        let (clearance, documents, tenure_str) = match &request {
            Some(r) => {
                let set = match storage.get_clearance_set(r.id).await {
                    Ok(s) => s,
                    Err(e) => return internal_error("clearance fetch failed", e),
                };
                let tenure_str =
                    match tenure::calculate_tenure(&faculty.joining_date, r.effective_last_working_day())
                    {
                        Ok(t) => Some(t.to_string()),
                        Err(e) => {
                            warn!("Tenure calculation failed: {}", e.format_simple());
                            None
                        }
                    };
                (
                    Some(engine::evaluate(&set)),
                    document_states(r),
                    tenure_str,
                )
            }
            None => (None, Vec::new(), None),
        };

        HttpResponse::Ok().json(ApiResponse::success(
            MyRequestResponse {
                faculty,
                request,
                clearance,
                documents,
                tenure: tenure_str,
            },
            "Request fetched",
        ))
    }

    /// 单条申请详情。管理员或本人可见
    pub async fn detail(&self, req: HttpRequest, path: web::Path<i64>) -> HttpResponse {
        let request_id = path.into_inner();
        let Some(user) = extract_user(&req) else {
            return HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
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
            Err(e) => return internal_error("request lookup failed", e),
        };

        if user.role != UserRole::Admin {
            let owns = match storage.get_faculty_by_user_id(user.id).await {
                Ok(Some(f)) => f.id == request.faculty_id,
                Ok(None) => false,
                Err(e) => return internal_error("faculty lookup failed", e),
            };
            if !owns {
                return HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::Forbidden,
                    "Insufficient permissions",
                ));
            }
        }

        HttpResponse::Ok().json(ApiResponse::success(request, "Request fetched"))
    }
}

pub(super) fn document_states(request: &RelievingRequest) -> Vec<DocumentState> {
    DocumentKind::ALL
        .into_iter()
        .map(|kind| DocumentState {
            kind,
            label: kind.label().to_string(),
            ready: request.document_ready(kind),
        })
        .collect()
}
