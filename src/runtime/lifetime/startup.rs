use std::sync::Arc;

use tracing::{info, warn};

use crate::cache::ObjectCache;
use crate::cache::memory::MemoryObjectCache;
use crate::errors::Result;
use crate::models::users::{CreateUserRequest, UserRole};
use crate::storage::{Storage, create_storage};
use crate::utils::password;

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
    pub cache: Arc<dyn ObjectCache>,
}

/// 启动准备：TLS provider、存储连接与迁移、管理员播种、会话缓存
pub async fn prepare() -> Result<StartupContext> {
    if rustls::crypto::ring::default_provider()
        .install_default()
        .is_err()
    {
        warn!("Default rustls crypto provider was already installed");
    }

    let storage = create_storage().await?;
    seed_admin(&storage).await?;

    let cache: Arc<dyn ObjectCache> = Arc::new(MemoryObjectCache::new());

    Ok(StartupContext { storage, cache })
}

/// 空库首次启动时建立管理员账号。密码来自 ADMIN_PASSWORD
/// 环境变量，未设置则随机生成并打印一次
async fn seed_admin(storage: &Arc<dyn Storage>) -> Result<()> {
    if storage.count_users().await? > 0 {
        return Ok(());
    }

    let (admin_password, generated) = match std::env::var("ADMIN_PASSWORD") {
        Ok(p) if !p.is_empty() => (p, false),
        _ => (password::generate_random_password(16), true),
    };

    let admin = storage
        .create_user(CreateUserRequest {
            username: "admin".to_string(),
            email: "admin@localhost".to_string(),
            password: admin_password.clone(),
            role: UserRole::Admin,
        })
        .await?;

    if generated {
        warn!("==========================================================");
        warn!("Seeded administrator account '{}'", admin.username);
        warn!("Generated password: {}", admin_password);
        warn!("Change it after first login.");
        warn!("==========================================================");
    } else {
        info!("Seeded administrator account '{}'", admin.username);
    }

    Ok(())
}
