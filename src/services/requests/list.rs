use actix_web::{HttpRequest, HttpResponse};
use tracing::warn;

use super::RequestService;
use crate::middlewares::require_jwt::extract_user;
use crate::models::clearances::ClearanceSet;
use crate::models::requests::{RequestListResponse, RequestReviewItem, RequestWithRelations};
use crate::models::users::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::clearances::engine;
use crate::services::{get_storage, internal_error};

impl RequestService {
    /// 管理员审核列表。联表查询失败时降级为只带档案的查询,
    /// 清算一律显示待定
    pub async fn list(&self, req: HttpRequest) -> HttpResponse {
        let Some(user) = extract_user(&req) else {
            return HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            ));
        };
        if user.role != UserRole::Admin {
            return HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "Administrator access required",
            ));
        }

        let storage = get_storage(&req);
        let rows = match storage.list_requests_with_relations().await {
            Ok(rows) => rows,
            Err(e) => {
                warn!(
                    "Relational request listing failed, falling back: {}",
                    e.format_simple()
                );
                match storage.list_requests_with_faculty().await {
                    Ok(rows) => rows
                        .into_iter()
                        .map(|(request, faculty)| RequestWithRelations {
                            request,
                            faculty,
                            clearances: ClearanceSet::default(),
                        })
                        .collect(),
                    Err(e) => return internal_error("request listing failed", e),
                }
            }
        };

        let items: Vec<RequestReviewItem> = rows
            .into_iter()
            .map(|row| RequestReviewItem {
                clearance: engine::evaluate(&row.clearances),
                request: row.request,
                faculty: row.faculty,
            })
            .collect();

        HttpResponse::Ok().json(ApiResponse::success(
            RequestListResponse { items },
            "Requests fetched",
        ))
    }
}
