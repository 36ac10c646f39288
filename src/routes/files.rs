use actix_web::{HttpRequest, HttpResponse, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequireJWT;
use crate::services::files::FileService;

static FILE_SERVICE: Lazy<FileService> = Lazy::new(FileService::new_lazy);

async fn download(req: HttpRequest, path: web::Path<String>) -> HttpResponse {
    FILE_SERVICE.download(req, path).await
}

pub fn configure_file_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/files")
            .wrap(RequireJWT)
            .route("/{token}", web::get().to(download)),
    );
}
