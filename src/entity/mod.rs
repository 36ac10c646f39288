//! SeaORM 实体定义，与 migration 中的表结构一一对应

pub mod academic_clearance;
pub mod asset_clearance;
pub mod faculties;
pub mod files;
pub mod financial_clearance;
pub mod library_clearance;
pub mod prelude;
pub mod relieving_requests;
pub mod users;
