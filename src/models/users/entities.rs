use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::errors::Result;
use crate::utils::jwt::{self, TokenPair};

/// 用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export, export_to = "bindings/users.ts")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Faculty,
    Admin,
}

impl UserRole {
    pub const FACULTY: &'static str = "faculty";
    pub const ADMIN: &'static str = "admin";

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Faculty => Self::FACULTY,
            UserRole::Admin => Self::ADMIN,
        }
    }

}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            Self::FACULTY => Ok(UserRole::Faculty),
            Self::ADMIN => Ok(UserRole::Admin),
            other => Err(format!("unknown user role: {other}")),
        }
    }
}

impl<'de> Deserialize<'de> for UserRole {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        UserRole::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// 用户状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/users.ts")]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub const ACTIVE: &'static str = "active";
    pub const INACTIVE: &'static str = "inactive";

    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => Self::ACTIVE,
            UserStatus::Inactive => Self::INACTIVE,
        }
    }
}

impl FromStr for UserStatus {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            Self::ACTIVE => Ok(UserStatus::Active),
            Self::INACTIVE => Ok(UserStatus::Inactive),
            other => Err(format!("unknown user status: {other}")),
        }
    }
}

/// 用户账号
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/users.ts")]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    #[ts(skip)]
    pub password_hash: String,
    pub role: UserRole,
    pub status: UserStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl User {
    /// 签发访问令牌
    pub fn generate_access_token(&self) -> Result<String> {
        jwt::generate_access_token(self.id, self.role.as_str())
    }

    /// 签发刷新令牌，remember_me 决定有效期
    pub fn generate_refresh_token(&self, remember_me: bool) -> Result<String> {
        jwt::generate_refresh_token(self.id, self.role.as_str(), remember_me)
    }

    pub fn generate_token_pair(&self, remember_me: bool) -> Result<TokenPair> {
        Ok(TokenPair {
            access_token: self.generate_access_token()?,
            refresh_token: self.generate_refresh_token(remember_me)?,
        })
    }
}
