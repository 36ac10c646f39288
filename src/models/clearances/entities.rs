use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// 清算标志位。历史数据既有布尔值也有 "true"/"false" 字符串，
/// 反序列化时两者都接受，落库时统一为字符串
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, TS)]
#[ts(export, export_to = "bindings/clearances.ts")]
pub struct Flag(pub bool);

impl Flag {
    pub fn from_stored(s: &str) -> Self {
        Flag(s == "true")
    }

    pub fn as_stored(&self) -> &'static str {
        if self.0 { "true" } else { "false" }
    }

    pub fn is_set(&self) -> bool {
        self.0
    }
}

impl<'de> Deserialize<'de> for Flag {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct FlagVisitor;

        impl serde::de::Visitor<'_> for FlagVisitor {
            type Value = Flag;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a boolean or the string \"true\"/\"false\"")
            }

            fn visit_bool<E>(self, v: bool) -> std::result::Result<Flag, E> {
                Ok(Flag(v))
            }

            fn visit_str<E>(self, v: &str) -> std::result::Result<Flag, E> {
                Ok(Flag(v == "true"))
            }
        }

        deserializer.deserialize_any(FlagVisitor)
    }
}

/// 四个清算模块
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/clearances.ts")]
#[serde(rename_all = "lowercase")]
pub enum ClearanceModule {
    Academic,
    Library,
    Financial,
    Asset,
}

impl ClearanceModule {
    pub const ALL: [ClearanceModule; 4] = [
        ClearanceModule::Academic,
        ClearanceModule::Library,
        ClearanceModule::Financial,
        ClearanceModule::Asset,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ClearanceModule::Academic => "academic",
            ClearanceModule::Library => "library",
            ClearanceModule::Financial => "financial",
            ClearanceModule::Asset => "asset",
        }
    }

    /// 前端展示名
    pub fn label(&self) -> &'static str {
        match self {
            ClearanceModule::Academic => "Academic",
            ClearanceModule::Library => "Library",
            ClearanceModule::Financial => "Financial",
            ClearanceModule::Asset => "IT / Assets",
        }
    }
}

impl fmt::Display for ClearanceModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClearanceModule {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "academic" => Ok(ClearanceModule::Academic),
            "library" => Ok(ClearanceModule::Library),
            "financial" => Ok(ClearanceModule::Financial),
            "asset" => Ok(ClearanceModule::Asset),
            other => Err(format!("unknown clearance module: {other}")),
        }
    }
}

/// 模块聚合状态，只有通过与待定两种
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/clearances.ts")]
#[serde(rename_all = "UPPERCASE")]
pub enum ModuleStatus {
    Approved,
    Pending,
}

impl ModuleStatus {
    pub fn is_approved(&self) -> bool {
        matches!(self, ModuleStatus::Approved)
    }
}

/// 学术清算记录，由教职工本人自我申报
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/clearances.ts")]
pub struct AcademicClearance {
    pub id: i64,
    pub request_id: i64,
    pub faculty_id: i64,
    /// 原始状态串，如 "APPROVED"。历史记录可能存 "true"
    pub status: String,
    pub syllabus_completed: Flag,
    pub internal_marks_uploaded: Flag,
    pub lab_records_submitted: Flag,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 图书馆清算记录，管理员登记
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/clearances.ts")]
pub struct LibraryClearance {
    pub id: i64,
    pub request_id: i64,
    pub faculty_id: i64,
    pub status: String,
    pub books_returned: Flag,
    pub fines_paid: Flag,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 财务清算记录，管理员登记
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/clearances.ts")]
pub struct FinancialClearance {
    pub id: i64,
    pub request_id: i64,
    pub faculty_id: i64,
    pub status: String,
    pub advance_settled: Flag,
    pub salary_processed: Flag,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 资产清算记录，管理员登记
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/clearances.ts")]
pub struct AssetClearance {
    pub id: i64,
    pub request_id: i64,
    pub faculty_id: i64,
    pub status: String,
    pub laptop_returned: Flag,
    pub id_card_returned: Flag,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 任一模块的清算记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/clearances.ts")]
#[serde(tag = "module", rename_all = "lowercase")]
pub enum ClearanceRecord {
    Academic(AcademicClearance),
    Library(LibraryClearance),
    Financial(FinancialClearance),
    Asset(AssetClearance),
}

/// 一份申请关联的全部清算记录。每个模块最多一条，
/// 保留 Vec 形态与联表查询结果一致
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/clearances.ts")]
pub struct ClearanceSet {
    pub academic: Vec<AcademicClearance>,
    pub library: Vec<LibraryClearance>,
    pub financial: Vec<FinancialClearance>,
    pub asset: Vec<AssetClearance>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_accepts_bool_and_string() {
        let f: Flag = serde_json::from_str("true").unwrap();
        assert!(f.is_set());
        let f: Flag = serde_json::from_str("\"true\"").unwrap();
        assert!(f.is_set());
        let f: Flag = serde_json::from_str("false").unwrap();
        assert!(!f.is_set());
        let f: Flag = serde_json::from_str("\"false\"").unwrap();
        assert!(!f.is_set());
        // 其它字符串一律视为未完成
        let f: Flag = serde_json::from_str("\"TRUE\"").unwrap();
        assert!(!f.is_set());
    }

    #[test]
    fn flag_storage_round_trip() {
        assert_eq!(Flag(true).as_stored(), "true");
        assert_eq!(Flag(false).as_stored(), "false");
        assert!(Flag::from_stored("true").is_set());
        assert!(!Flag::from_stored("1").is_set());
    }

    #[test]
    fn module_from_path_segment() {
        assert_eq!(
            "library".parse::<ClearanceModule>().unwrap(),
            ClearanceModule::Library
        );
        assert!("payroll".parse::<ClearanceModule>().is_err());
    }
}
