//! 清算状态引擎。纯函数，对数据库内容零假设：
//! 记录缺失视为待定，状态串与标志位按历史格式宽容解析

use crate::models::clearances::{
    ClearanceModule, ClearanceOverview, ClearanceRecord, ClearanceSet, ModuleState, ModuleStatus,
};

/// 单条记录的聚合状态
pub fn module_status(record: &ClearanceRecord) -> ModuleStatus {
    let approved = match record {
        // 学术模块看状态串，历史数据存过布尔字符串
        ClearanceRecord::Academic(c) => c.status == "APPROVED" || c.status == "true",
        ClearanceRecord::Library(c) => c.books_returned.is_set() && c.fines_paid.is_set(),
        ClearanceRecord::Financial(c) => c.advance_settled.is_set() && c.salary_processed.is_set(),
        ClearanceRecord::Asset(c) => c.laptop_returned.is_set() && c.id_card_returned.is_set(),
    };
    if approved {
        ModuleStatus::Approved
    } else {
        ModuleStatus::Pending
    }
}

/// 汇总四个模块。全部通过才算完全清算
pub fn evaluate(set: &ClearanceSet) -> ClearanceOverview {
    let statuses = [
        (
            ClearanceModule::Academic,
            set.academic
                .first()
                .map(|c| module_status(&ClearanceRecord::Academic(c.clone()))),
        ),
        (
            ClearanceModule::Library,
            set.library
                .first()
                .map(|c| module_status(&ClearanceRecord::Library(c.clone()))),
        ),
        (
            ClearanceModule::Financial,
            set.financial
                .first()
                .map(|c| module_status(&ClearanceRecord::Financial(c.clone()))),
        ),
        (
            ClearanceModule::Asset,
            set.asset
                .first()
                .map(|c| module_status(&ClearanceRecord::Asset(c.clone()))),
        ),
    ];

    let modules: Vec<ModuleState> = statuses
        .into_iter()
        .map(|(module, status)| ModuleState {
            module,
            label: module.label().to_string(),
            status: status.unwrap_or(ModuleStatus::Pending),
        })
        .collect();

    let fully_cleared = modules.iter().all(|m| m.status.is_approved());

    ClearanceOverview {
        modules,
        fully_cleared,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::clearances::{
        AcademicClearance, AssetClearance, FinancialClearance, Flag, LibraryClearance,
    };

    fn academic(status: &str) -> AcademicClearance {
        AcademicClearance {
            id: 1,
            request_id: 1,
            faculty_id: 1,
            status: status.to_string(),
            syllabus_completed: Flag(true),
            internal_marks_uploaded: Flag(true),
            lab_records_submitted: Flag(true),
            remarks: None,
            updated_at: chrono::Utc::now(),
        }
    }

    fn library(books: bool, fines: bool) -> LibraryClearance {
        LibraryClearance {
            id: 2,
            request_id: 1,
            faculty_id: 1,
            status: "APPROVED".to_string(),
            books_returned: Flag(books),
            fines_paid: Flag(fines),
            updated_at: chrono::Utc::now(),
        }
    }

    fn financial(advance: bool, salary: bool) -> FinancialClearance {
        FinancialClearance {
            id: 3,
            request_id: 1,
            faculty_id: 1,
            status: "APPROVED".to_string(),
            advance_settled: Flag(advance),
            salary_processed: Flag(salary),
            updated_at: chrono::Utc::now(),
        }
    }

    fn asset(laptop: bool, id_card: bool) -> AssetClearance {
        AssetClearance {
            id: 4,
            request_id: 1,
            faculty_id: 1,
            status: "APPROVED".to_string(),
            laptop_returned: Flag(laptop),
            id_card_returned: Flag(id_card),
            updated_at: chrono::Utc::now(),
        }
    }

    fn full_set() -> ClearanceSet {
        ClearanceSet {
            academic: vec![academic("APPROVED")],
            library: vec![library(true, true)],
            financial: vec![financial(true, true)],
            asset: vec![asset(true, true)],
        }
    }

    #[test]
    fn empty_set_is_all_pending() {
        let overview = evaluate(&ClearanceSet::default());
        assert_eq!(overview.modules.len(), 4);
        assert!(overview.modules.iter().all(|m| m.status == ModuleStatus::Pending));
        assert!(!overview.fully_cleared);
    }

    #[test]
    fn full_set_is_fully_cleared() {
        let overview = evaluate(&full_set());
        assert!(overview.fully_cleared);
        assert!(overview.modules.iter().all(|m| m.status.is_approved()));
    }

    #[test]
    fn academic_accepts_legacy_true_status() {
        assert_eq!(
            module_status(&ClearanceRecord::Academic(academic("true"))),
            ModuleStatus::Approved
        );
        assert_eq!(
            module_status(&ClearanceRecord::Academic(academic("PENDING"))),
            ModuleStatus::Pending
        );
        // 大小写敏感
        assert_eq!(
            module_status(&ClearanceRecord::Academic(academic("approved"))),
            ModuleStatus::Pending
        );
    }

    #[test]
    fn paired_flags_require_both() {
        assert_eq!(
            module_status(&ClearanceRecord::Library(library(true, false))),
            ModuleStatus::Pending
        );
        assert_eq!(
            module_status(&ClearanceRecord::Financial(financial(false, true))),
            ModuleStatus::Pending
        );
        assert_eq!(
            module_status(&ClearanceRecord::Asset(asset(true, true))),
            ModuleStatus::Approved
        );
    }

    #[test]
    fn one_pending_module_blocks_full_clearance() {
        let mut set = full_set();
        set.asset = vec![asset(true, false)];
        let overview = evaluate(&set);
        assert!(!overview.fully_cleared);
        assert_eq!(overview.modules[3].status, ModuleStatus::Pending);
    }

    #[test]
    fn module_order_is_stable() {
        let overview = evaluate(&full_set());
        let labels: Vec<&str> = overview.modules.iter().map(|m| m.label.as_str()).collect();
        assert_eq!(labels, ["Academic", "Library", "Financial", "IT / Assets"]);
    }

    #[test]
    fn missing_single_module_reported_pending() {
        let mut set = full_set();
        set.library = vec![];
        let overview = evaluate(&set);
        assert_eq!(overview.modules[1].module, ClearanceModule::Library);
        assert_eq!(overview.modules[1].status, ModuleStatus::Pending);
        assert!(!overview.fully_cleared);
    }
}
