use sea_orm::entity::prelude::*;

use crate::models::requests::{RelievingRequest, RequestStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "relieving_requests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub faculty_id: i64,
    pub proposed_last_working_day: String,
    pub approved_last_working_day: Option<String>,
    pub reason: String,
    pub resignation_letter_token: Option<String>,
    pub status: String,
    pub admin_remarks: Option<String>,
    pub relieving_letter_ready: bool,
    pub experience_cert_ready: bool,
    pub service_cert_ready: bool,
    pub settlement_ready: bool,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::faculties::Entity",
        from = "Column::FacultyId",
        to = "super::faculties::Column::Id"
    )]
    Faculties,
    #[sea_orm(has_one = "super::academic_clearance::Entity")]
    AcademicClearance,
    #[sea_orm(has_one = "super::library_clearance::Entity")]
    LibraryClearance,
    #[sea_orm(has_one = "super::financial_clearance::Entity")]
    FinancialClearance,
    #[sea_orm(has_one = "super::asset_clearance::Entity")]
    AssetClearance,
}

impl Related<super::faculties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faculties.def()
    }
}

impl Related<super::academic_clearance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AcademicClearance.def()
    }
}

impl Related<super::library_clearance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::LibraryClearance.def()
    }
}

impl Related<super::financial_clearance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FinancialClearance.def()
    }
}

impl Related<super::asset_clearance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssetClearance.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_relieving_request(self) -> RelievingRequest {
        RelievingRequest {
            id: self.id,
            faculty_id: self.faculty_id,
            proposed_last_working_day: self.proposed_last_working_day,
            approved_last_working_day: self.approved_last_working_day,
            reason: self.reason,
            resignation_letter_token: self.resignation_letter_token,
            status: self.status.parse().unwrap_or(RequestStatus::Submitted),
            admin_remarks: self.admin_remarks,
            relieving_letter_ready: self.relieving_letter_ready,
            experience_cert_ready: self.experience_cert_ready,
            service_cert_ready: self.service_cert_ready,
            settlement_ready: self.settlement_ready,
            created_at: chrono::DateTime::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: chrono::DateTime::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
