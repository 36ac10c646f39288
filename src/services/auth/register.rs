use actix_web::{HttpRequest, HttpResponse, web};
use tracing::info;

use super::AuthService;
use crate::models::auth::{ProfileResponse, RegisterRequest};
use crate::models::faculties::CreateFacultyRequest;
use crate::models::users::{CreateUserRequest, UserRole};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{get_storage, internal_error};
use crate::utils::validate;

impl AuthService {
    /// 教职工自助注册，账号与档案一起建立。管理员账号由启动播种产生
    pub async fn register(
        &self,
        req: HttpRequest,
        payload: web::Json<RegisterRequest>,
    ) -> HttpResponse {
        let payload = payload.into_inner();

        if let Err(e) = validate::validate_username(&payload.username)
            .and_then(|_| validate::validate_email(&payload.email))
            .and_then(|_| validate::validate_password(&payload.password))
            .and_then(|_| validate::validate_employee_id(&payload.employee_id))
            .and_then(|_| validate::validate_date_str(&payload.joining_date))
        {
            return HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                e.message().to_string(),
            ));
        }
        if payload.full_name.trim().is_empty()
            || payload.department.trim().is_empty()
            || payload.designation.trim().is_empty()
        {
            return HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "Full name, department and designation are required",
            ));
        }

        let storage = get_storage(&req);

        match storage
            .get_user_by_username_or_email(&payload.username)
            .await
        {
            Ok(Some(_)) => {
                return HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserAlreadyExists,
                    "Username already taken",
                ));
            }
            Ok(None) => {}
            Err(e) => return internal_error("register lookup failed", e),
        }

        let user = match storage
            .create_user(CreateUserRequest {
                username: payload.username,
                email: payload.email,
                password: payload.password,
                role: UserRole::Faculty,
            })
            .await
        {
            Ok(u) => u,
            Err(e) => {
                return HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserAlreadyExists,
                    e.message().to_string(),
                ));
            }
        };

        let faculty = match storage
            .create_faculty(CreateFacultyRequest {
                user_id: user.id,
                full_name: payload.full_name,
                employee_id: payload.employee_id,
                department: payload.department,
                designation: payload.designation,
                joining_date: payload.joining_date,
            })
            .await
        {
            Ok(f) => f,
            Err(e) => {
                return HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UserAlreadyExists,
                    e.message().to_string(),
                ));
            }
        };

        info!("Registered faculty account {}", user.username);

        HttpResponse::Created().json(ApiResponse::success(
            ProfileResponse {
                user,
                faculty: Some(faculty),
            },
            "Registration successful",
        ))
    }
}
