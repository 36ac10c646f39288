//! 路由注册

pub mod auth;
pub mod files;
pub mod requests;

pub use auth::configure_auth_routes;
pub use files::configure_file_routes;
pub use requests::configure_request_routes;
