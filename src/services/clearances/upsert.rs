use actix_web::{HttpRequest, HttpResponse, web};
use tracing::info;

use super::{ClearanceService, engine};
use crate::middlewares::require_jwt::extract_user;
use crate::models::clearances::{
    AcademicClearance, AcademicClearanceRequest, AssetClearance, AssetClearanceRequest,
    ClearanceModule, ClearanceRecord, FinancialClearance, FinancialClearanceRequest,
    LibraryClearance, LibraryClearanceRequest,
};
use crate::models::users::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{get_storage, internal_error};

impl ClearanceService {
    /// 登记某模块的清算记录。学术模块由教职工本人申报，
    /// 其余模块由管理员登记
    pub async fn upsert(
        &self,
        req: HttpRequest,
        path: web::Path<(i64, String)>,
        payload: web::Json<serde_json::Value>,
    ) -> HttpResponse {
        let (request_id, module_str) = path.into_inner();
        let Ok(module) = module_str.parse::<ClearanceModule>() else {
            return HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClearanceModuleInvalid,
                format!("Unknown clearance module: {module_str}"),
            ));
        };

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
            Err(e) => return internal_error("clearance request lookup failed", e),
        };

        let record = match module {
            ClearanceModule::Academic => {
                // 本人申报，先核对归属
                let faculty = match storage.get_faculty_by_user_id(user.id).await {
                    Ok(Some(f)) => f,
                    Ok(None) => {
                        return HttpResponse::Forbidden().json(ApiResponse::error_empty(
                            ErrorCode::ClearancePermissionDenied,
                            "Academic clearance is self-declared by the faculty member",
                        ));
                    }
                    Err(e) => return internal_error("faculty lookup failed", e),
                };
                if faculty.id != request.faculty_id {
                    return HttpResponse::Forbidden().json(ApiResponse::error_empty(
                        ErrorCode::ClearancePermissionDenied,
                        "Academic clearance is self-declared by the faculty member",
                    ));
                }

                let data: AcademicClearanceRequest =
                    match serde_json::from_value(payload.into_inner()) {
                        Ok(d) => d,
                        Err(e) => {
                            return HttpResponse::BadRequest().json(ApiResponse::error_empty(
                                ErrorCode::BadRequest,
                                format!("Invalid academic clearance payload: {e}"),
                            ));
                        }
                    };
                if !(data.syllabus_completed.is_set()
                    && data.internal_marks_uploaded.is_set()
                    && data.lab_records_submitted.is_set())
                {
                    return HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::ClearanceDeclarationIncomplete,
                        "All academic declaration items must be confirmed",
                    ));
                }
                if data.remarks.as_deref().map(str::trim).unwrap_or("").is_empty() {
                    return HttpResponse::BadRequest().json(ApiResponse::error_empty(
                        ErrorCode::ClearanceDeclarationIncomplete,
                        "Handover remarks are required",
                    ));
                }

                ClearanceRecord::Academic(AcademicClearance {
                    id: 0,
                    request_id,
                    faculty_id: request.faculty_id,
                    status: "APPROVED".to_string(),
                    syllabus_completed: data.syllabus_completed,
                    internal_marks_uploaded: data.internal_marks_uploaded,
                    lab_records_submitted: data.lab_records_submitted,
                    remarks: data.remarks,
                    updated_at: chrono::Utc::now(),
                })
            }
            other => {
                if user.role != UserRole::Admin {
                    return HttpResponse::Forbidden().json(ApiResponse::error_empty(
                        ErrorCode::ClearancePermissionDenied,
                        format!("Only administrators can record {other} clearance"),
                    ));
                }
                match build_admin_record(other, request_id, request.faculty_id, payload.into_inner())
                {
                    Ok(r) => r,
                    Err(msg) => {
                        return HttpResponse::BadRequest()
                            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg));
                    }
                }
            }
        };

        if let Err(e) = storage.upsert_clearance(record).await {
            return internal_error("clearance upsert failed", e);
        }

        info!(
            "Clearance {} recorded for request {}",
            module, request_id
        );

        let set = match storage.get_clearance_set(request_id).await {
            Ok(s) => s,
            Err(e) => return internal_error("clearance reload failed", e),
        };

        HttpResponse::Ok().json(ApiResponse::success(
            engine::evaluate(&set),
            "Clearance recorded",
        ))
    }
}

fn build_admin_record(
    module: ClearanceModule,
    request_id: i64,
    faculty_id: i64,
    payload: serde_json::Value,
) -> std::result::Result<ClearanceRecord, String> {
    let now = chrono::Utc::now();
    match module {
        ClearanceModule::Library => {
            let data: LibraryClearanceRequest = serde_json::from_value(payload)
                .map_err(|e| format!("Invalid library clearance payload: {e}"))?;
            Ok(ClearanceRecord::Library(LibraryClearance {
                id: 0,
                request_id,
                faculty_id,
                status: "APPROVED".to_string(),
                books_returned: data.books_returned,
                fines_paid: data.fines_paid,
                updated_at: now,
            }))
        }
        ClearanceModule::Financial => {
            let data: FinancialClearanceRequest = serde_json::from_value(payload)
                .map_err(|e| format!("Invalid financial clearance payload: {e}"))?;
            Ok(ClearanceRecord::Financial(FinancialClearance {
                id: 0,
                request_id,
                faculty_id,
                status: "APPROVED".to_string(),
                advance_settled: data.advance_settled,
                salary_processed: data.salary_processed,
                updated_at: now,
            }))
        }
        ClearanceModule::Asset => {
            let data: AssetClearanceRequest = serde_json::from_value(payload)
                .map_err(|e| format!("Invalid asset clearance payload: {e}"))?;
            Ok(ClearanceRecord::Asset(AssetClearance {
                id: 0,
                request_id,
                faculty_id,
                status: "APPROVED".to_string(),
                laptop_returned: data.laptop_returned,
                id_card_returned: data.id_card_returned,
                updated_at: now,
            }))
        }
        ClearanceModule::Academic => Err("Academic clearance is self-declared".to_string()),
    }
}
