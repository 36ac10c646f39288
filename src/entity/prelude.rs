pub use super::academic_clearance::Entity as AcademicClearances;
pub use super::asset_clearance::Entity as AssetClearances;
pub use super::faculties::Entity as Faculties;
pub use super::files::Entity as Files;
pub use super::financial_clearance::Entity as FinancialClearances;
pub use super::library_clearance::Entity as LibraryClearances;
pub use super::relieving_requests::Entity as RelievingRequests;
pub use super::users::Entity as Users;
