use sea_orm::entity::prelude::*;

use crate::models::clearances::{AcademicClearance, Flag};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "academic_clearance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub request_id: i64,
    pub faculty_id: i64,
    pub status: String,
    pub syllabus_completed: String,
    pub internal_marks_uploaded: String,
    pub lab_records_submitted: String,
    pub remarks: Option<String>,
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
    pub fn into_academic_clearance(self) -> AcademicClearance {
        AcademicClearance {
            id: self.id,
            request_id: self.request_id,
            faculty_id: self.faculty_id,
            status: self.status,
            syllabus_completed: Flag::from_stored(&self.syllabus_completed),
            internal_marks_uploaded: Flag::from_stored(&self.internal_marks_uploaded),
            lab_records_submitted: Flag::from_stored(&self.lab_records_submitted),
            remarks: self.remarks,
            updated_at: chrono::DateTime::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
