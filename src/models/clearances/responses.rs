use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::{ClearanceModule, ModuleStatus};

/// 单个模块的聚合状态
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/clearances.ts")]
pub struct ModuleState {
    pub module: ClearanceModule,
    pub label: String,
    pub status: ModuleStatus,
}

/// 清算总览，modules 固定按学术、图书馆、财务、资产排列
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/clearances.ts")]
pub struct ClearanceOverview {
    pub modules: Vec<ModuleState>,
    pub fully_cleared: bool,
}
