//! 角色守卫中间件，须挂在 RequireJWT 之后

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_service::{Service, Transform};
use actix_web::body::EitherBody;
use actix_web::dev::{ServiceRequest, ServiceResponse};
use actix_web::http::StatusCode;
use actix_web::{Error, HttpMessage};
use futures_util::future::LocalBoxFuture;

use super::create_error_response;
use crate::models::ErrorCode;
use crate::models::users::{User, UserRole};

pub struct RequireRole {
    allowed: Rc<Vec<UserRole>>,
}

impl RequireRole {
    pub fn new(role: UserRole) -> Self {
        Self {
            allowed: Rc::new(vec![role]),
        }
    }

    /// 允许多个角色中的任意一个
    pub fn new_any(roles: Vec<UserRole>) -> Self {
        Self {
            allowed: Rc::new(roles),
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RequireRoleMiddleware<S>;
    type InitError = ();
    type Future = Ready<std::result::Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireRoleMiddleware {
            service: Rc::new(service),
            allowed: Rc::clone(&self.allowed),
        }))
    }
}

pub struct RequireRoleMiddleware<S> {
    service: Rc<S>,
    allowed: Rc<Vec<UserRole>>,
}

impl<S, B> Service<ServiceRequest> for RequireRoleMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, std::result::Result<Self::Response, Self::Error>>;

    actix_service::forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let allowed = Rc::clone(&self.allowed);

        Box::pin(async move {
            let role = req.extensions().get::<User>().map(|u| u.role);
            match role {
                Some(role) if allowed.contains(&role) => service
                    .call(req)
                    .await
                    .map(ServiceResponse::map_into_left_body),
                Some(_) => {
                    let response = create_error_response(
                        StatusCode::FORBIDDEN,
                        ErrorCode::Forbidden,
                        "Insufficient permissions",
                    );
                    Ok(req.into_response(response).map_into_right_body())
                }
                None => {
                    let response = create_error_response(
                        StatusCode::UNAUTHORIZED,
                        ErrorCode::Unauthorized,
                        "Authentication required",
                    );
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}
