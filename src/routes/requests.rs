use actix_multipart::Multipart;
use actix_web::{HttpRequest, HttpResponse, web};
use once_cell::sync::Lazy;

use crate::middlewares::{RequireJWT, RequireRole};
use crate::models::requests::DecisionRequest;
use crate::models::users::UserRole;
use crate::services::clearances::ClearanceService;
use crate::services::documents::DocumentService;
use crate::services::requests::RequestService;

static REQUEST_SERVICE: Lazy<RequestService> = Lazy::new(RequestService::new_lazy);
static CLEARANCE_SERVICE: Lazy<ClearanceService> = Lazy::new(ClearanceService::new_lazy);
static DOCUMENT_SERVICE: Lazy<DocumentService> = Lazy::new(DocumentService::new_lazy);

async fn list(req: HttpRequest) -> HttpResponse {
    REQUEST_SERVICE.list(req).await
}

async fn submit(req: HttpRequest, payload: Multipart) -> HttpResponse {
    REQUEST_SERVICE.submit(req, payload).await
}

async fn my_request(req: HttpRequest) -> HttpResponse {
    REQUEST_SERVICE.my_request(req).await
}

async fn detail(req: HttpRequest, path: web::Path<i64>) -> HttpResponse {
    REQUEST_SERVICE.detail(req, path).await
}

async fn decision(
    req: HttpRequest,
    path: web::Path<i64>,
    payload: web::Json<DecisionRequest>,
) -> HttpResponse {
    REQUEST_SERVICE.decision(req, path, payload).await
}

async fn clearance_overview(req: HttpRequest, path: web::Path<i64>) -> HttpResponse {
    CLEARANCE_SERVICE.overview(req, path).await
}

async fn clearance_upsert(
    req: HttpRequest,
    path: web::Path<(i64, String)>,
    payload: web::Json<serde_json::Value>,
) -> HttpResponse {
    CLEARANCE_SERVICE.upsert(req, path, payload).await
}

async fn issue_document(req: HttpRequest, path: web::Path<(i64, String)>) -> HttpResponse {
    DOCUMENT_SERVICE.issue(req, path).await
}

pub fn configure_request_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/requests")
            .wrap(RequireJWT)
            .route("", web::get().to(list))
            .route("", web::post().to(submit))
            .route("/my", web::get().to(my_request))
            .route("/{id}", web::get().to(detail))
            .service(
                web::resource("/{id}/decision")
                    .wrap(RequireRole::new(UserRole::Admin))
                    .route(web::post().to(decision)),
            )
            .route("/{id}/clearances", web::get().to(clearance_overview))
            .route("/{id}/clearances/{module}", web::put().to(clearance_upsert))
            .service(
                web::resource("/{id}/documents/{kind}")
                    .wrap(RequireRole::new(UserRole::Admin))
                    .route(web::post().to(issue_document)),
            ),
    );
}
