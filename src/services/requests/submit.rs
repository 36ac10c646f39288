use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse};
use futures_util::StreamExt as _;
use tracing::info;
use uuid::Uuid;

use super::RequestService;
use crate::config::AppConfig;
use crate::middlewares::require_jwt::extract_user;
use crate::models::files::StoredFile;
use crate::models::requests::{RequestStatus, SubmitRequestData};
use crate::models::users::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{get_storage, internal_error};
use crate::utils::{file_magic, validate};

struct UploadedFile {
    file_name: String,
    bytes: Vec<u8>,
}

#[derive(Default)]
struct SubmitForm {
    last_working_day: Option<String>,
    reason: Option<String>,
    file: Option<UploadedFile>,
}

impl RequestService {
    /// 提交离职申请。首次提交必须附辞职信，
    /// 被驳回后重新提交可沿用原件
    pub async fn submit(&self, req: HttpRequest, payload: Multipart) -> HttpResponse {
        let Some(user) = extract_user(&req) else {
            return HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            ));
        };
        if user.role != UserRole::Faculty {
            return HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "Only faculty members can submit relieving requests",
            ));
        }

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

        let form = match read_form(payload).await {
            Ok(f) => f,
            Err((code, msg)) => {
                return HttpResponse::BadRequest().json(ApiResponse::error_empty(code, msg));
            }
        };

        let Some(last_working_day) = form.last_working_day else {
            return HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "last_working_day is required",
            ));
        };
        if let Err(e) = validate::validate_date_str(&last_working_day) {
            return HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                e.message().to_string(),
            ));
        }
        let reason = form.reason.unwrap_or_default();
        if reason.trim().is_empty() {
            return HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "reason is required",
            ));
        }

        let existing = match storage.get_request_by_faculty_id(faculty.id).await {
            Ok(r) => r,
            Err(e) => return internal_error("request lookup failed", e),
        };
        if let Some(ref prior) = existing
            && prior.status != RequestStatus::Rejected
        {
            return HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::RequestNotEditable,
                "An active relieving request already exists",
            ));
        }

        // 文件落盘并登记，之后申请行才引用令牌
        let uploaded_token = match form.file {
            Some(file) => match save_letter(&storage, faculty.id, file).await {
                Ok(token) => Some(token),
                Err(response) => return *response,
            },
            None => None,
        };

        let existing_token = existing
            .as_ref()
            .and_then(|r| r.resignation_letter_token.clone());
        let letter_token = match resolve_letter_token(existing_token, uploaded_token) {
            Ok(t) => t,
            Err(()) => {
                return HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::ResignationLetterRequired,
                    "A resignation letter file is required",
                ));
            }
        };

        let request = match storage
            .submit_request(
                faculty.id,
                SubmitRequestData {
                    last_working_day,
                    reason,
                    letter_token: Some(letter_token),
                },
            )
            .await
        {
            Ok(r) => r,
            Err(e) => return internal_error("request submit failed", e),
        };

        info!(
            "Relieving request {} submitted by faculty {}",
            request.id, faculty.employee_id
        );

        HttpResponse::Created().json(ApiResponse::success(request, "Request submitted"))
    }
}

/// 新提交必须带文件，重新提交允许沿用原令牌
fn resolve_letter_token(
    existing: Option<String>,
    uploaded: Option<String>,
) -> std::result::Result<String, ()> {
    uploaded.or(existing).ok_or(())
}

async fn read_form(mut payload: Multipart) -> std::result::Result<SubmitForm, (ErrorCode, String)> {
    let max_size = AppConfig::get().upload.max_size;
    let mut form = SubmitForm::default();

    while let Some(item) = payload.next().await {
        let mut field =
            item.map_err(|e| (ErrorCode::BadRequest, format!("Malformed multipart: {e}")))?;
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "last_working_day" | "reason" => {
                let mut value = Vec::new();
                while let Some(chunk) = field.next().await {
                    let chunk = chunk
                        .map_err(|e| (ErrorCode::BadRequest, format!("Malformed multipart: {e}")))?;
                    value.extend_from_slice(&chunk);
                }
                let text = String::from_utf8(value)
                    .map_err(|_| (ErrorCode::BadRequest, format!("Field {name} is not UTF-8")))?;
                if name == "last_working_day" {
                    form.last_working_day = Some(text);
                } else {
                    form.reason = Some(text);
                }
            }
            "file" => {
                if form.file.is_some() {
                    return Err((
                        ErrorCode::MultifileUploadNotAllowed,
                        "Only one resignation letter may be uploaded".to_string(),
                    ));
                }
                let file_name = field
                    .content_disposition()
                    .and_then(|cd| cd.get_filename())
                    .unwrap_or("letter")
                    .to_string();
                let mut bytes = Vec::new();
                while let Some(chunk) = field.next().await {
                    let chunk = chunk
                        .map_err(|e| (ErrorCode::BadRequest, format!("Malformed multipart: {e}")))?;
                    bytes.extend_from_slice(&chunk);
                    if bytes.len() > max_size {
                        return Err((
                            ErrorCode::FileSizeExceeded,
                            format!("File exceeds the {max_size} byte limit"),
                        ));
                    }
                }
                form.file = Some(UploadedFile { file_name, bytes });
            }
            // 未知字段直接忽略
            _ => {
                while let Some(chunk) = field.next().await {
                    chunk.map_err(|e| {
                        (ErrorCode::BadRequest, format!("Malformed multipart: {e}"))
                    })?;
                }
            }
        }
    }

    Ok(form)
}

/// 校验文件内容并写入上传目录，返回下载令牌
async fn save_letter(
    storage: &std::sync::Arc<dyn crate::storage::Storage>,
    faculty_id: i64,
    file: UploadedFile,
) -> std::result::Result<String, Box<HttpResponse>> {
    let upload = &AppConfig::get().upload;

    let ext = file
        .file_name
        .rfind('.')
        .map(|i| file.file_name[i..].to_ascii_lowercase())
        .unwrap_or_default();
    if !upload.allowed_types.contains(&ext) {
        return Err(Box::new(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(
                ErrorCode::FileTypeNotAllowed,
                format!(
                    "File type not allowed, accepted: {}",
                    upload.allowed_types.join(", ")
                ),
            ),
        )));
    }

    // 扩展名不可信，按文件头复核
    let Some(detected) = file_magic::detect_file_type(&file.bytes) else {
        return Err(Box::new(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(
                ErrorCode::FileTypeNotAllowed,
                "File content does not match an accepted format",
            ),
        )));
    };
    if !file_magic::extension_matches(&ext, detected) {
        return Err(Box::new(HttpResponse::BadRequest().json(
            ApiResponse::error_empty(
                ErrorCode::FileTypeNotAllowed,
                "File extension does not match its content",
            ),
        )));
    }

    let token = Uuid::new_v4().simple().to_string();
    let dir = format!("{}/{}", upload.dir, faculty_id);
    let path = format!("{dir}/{token}{ext}");

    if let Err(e) = tokio::fs::create_dir_all(&dir).await {
        return Err(Box::new(internal_error(
            "upload directory creation failed",
            e.into(),
        )));
    }
    let size = file.bytes.len() as i64;
    if let Err(e) = tokio::fs::write(&path, &file.bytes).await {
        return Err(Box::new(internal_error("letter write failed", e.into())));
    }

    let record = StoredFile {
        letter_token: token.clone(),
        file_name: file.file_name,
        file_size: size,
        file_type: ext,
        faculty_id,
        uploaded_at: chrono::Utc::now(),
    };
    if let Err(e) = storage.store_file_record(record).await {
        return Err(Box::new(internal_error("file record insert failed", e)));
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use super::resolve_letter_token;

    #[test]
    fn new_submission_requires_file() {
        assert!(resolve_letter_token(None, None).is_err());
        assert_eq!(
            resolve_letter_token(None, Some("t1".into())).unwrap(),
            "t1"
        );
    }

    #[test]
    fn resubmission_keeps_or_replaces_letter() {
        // 不传新文件时沿用原件
        assert_eq!(
            resolve_letter_token(Some("old".into()), None).unwrap(),
            "old"
        );
        // 新文件优先
        assert_eq!(
            resolve_letter_token(Some("old".into()), Some("new".into())).unwrap(),
            "new"
        );
    }
}
