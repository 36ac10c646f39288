use actix_web::{HttpRequest, HttpResponse, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequireJWT;
use crate::models::auth::{LoginRequest, RegisterRequest};
use crate::services::auth::AuthService;

static AUTH_SERVICE: Lazy<AuthService> = Lazy::new(AuthService::new_lazy);

async fn login(req: HttpRequest, payload: web::Json<LoginRequest>) -> HttpResponse {
    AUTH_SERVICE.login(req, payload).await
}

async fn register(req: HttpRequest, payload: web::Json<RegisterRequest>) -> HttpResponse {
    AUTH_SERVICE.register(req, payload).await
}

async fn refresh(req: HttpRequest) -> HttpResponse {
    AUTH_SERVICE.refresh_token(req).await
}

async fn logout(req: HttpRequest) -> HttpResponse {
    AUTH_SERVICE.logout(req).await
}

async fn profile(req: HttpRequest) -> HttpResponse {
    AUTH_SERVICE.profile(req).await
}

pub fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/auth")
            .route("/login", web::post().to(login))
            .route("/register", web::post().to(register))
            .route("/refresh", web::post().to(refresh))
            .route("/logout", web::post().to(logout))
            .service(
                web::resource("/profile")
                    .wrap(RequireJWT)
                    .route(web::get().to(profile)),
            ),
    );
}
