use sea_orm::entity::prelude::*;

use crate::models::clearances::{FinancialClearance, Flag};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "financial_clearance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub request_id: i64,
    pub faculty_id: i64,
    pub status: String,
    pub advance_settled: String,
    pub salary_processed: String,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::relieving_requests::Entity",
        from = "Column::RequestId",
        to = "super::relieving_requests::Column::Id"
    )]
    RelievingRequests,
}

impl Related<super::relieving_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RelievingRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_financial_clearance(self) -> FinancialClearance {
        FinancialClearance {
            id: self.id,
            request_id: self.request_id,
            faculty_id: self.faculty_id,
            status: self.status,
            advance_settled: Flag::from_stored(&self.advance_settled),
            salary_processed: Flag::from_stored(&self.salary_processed),
            updated_at: chrono::DateTime::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
