//! 清算服务：状态引擎、记录登记与总览

pub mod engine;
mod overview;
mod upsert;

pub struct ClearanceService;

impl ClearanceService {
    pub fn new_lazy() -> Self {
        Self
    }
}
