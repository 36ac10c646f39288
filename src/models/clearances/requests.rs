use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Flag;

/// 学术清算申报，教职工本人提交，三项缺一不可
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/clearances.ts")]
pub struct AcademicClearanceRequest {
    #[serde(default)]
    pub syllabus_completed: Flag,
    #[serde(default)]
    pub internal_marks_uploaded: Flag,
    #[serde(default)]
    pub lab_records_submitted: Flag,
    #[serde(default)]
    pub remarks: Option<String>,
}

/// 图书馆清算登记
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/clearances.ts")]
pub struct LibraryClearanceRequest {
    #[serde(default)]
    pub books_returned: Flag,
    #[serde(default)]
    pub fines_paid: Flag,
}

/// 财务清算登记
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/clearances.ts")]
pub struct FinancialClearanceRequest {
    #[serde(default)]
    pub advance_settled: Flag,
    #[serde(default)]
    pub salary_processed: Flag,
}

/// 资产清算登记
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/clearances.ts")]
pub struct AssetClearanceRequest {
    #[serde(default)]
    pub laptop_returned: Flag,
    #[serde(default)]
    pub id_card_returned: Flag,
}
