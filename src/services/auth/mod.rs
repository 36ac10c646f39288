//! 认证服务：登录、注册、令牌刷新、注销与个人信息

mod login;
mod logout;
mod profile;
mod register;
mod token;

pub struct AuthService;

impl AuthService {
    pub fn new_lazy() -> Self {
        Self
    }
}

/// 刷新令牌 Cookie 名
pub(crate) const REFRESH_COOKIE: &str = "refresh_token";
/// 刷新接口路径，Cookie 限定在此路径下
pub(crate) const REFRESH_COOKIE_PATH: &str = "/api/v1/auth";
