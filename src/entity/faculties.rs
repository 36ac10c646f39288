use sea_orm::entity::prelude::*;

use crate::models::faculties::Faculty;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "faculties")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub user_id: i64,
    pub full_name: String,
    #[sea_orm(unique)]
    pub employee_id: String,
    pub department: String,
    pub designation: String,
    pub joining_date: String,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    Users,
    #[sea_orm(has_one = "super::relieving_requests::Entity")]
    RelievingRequests,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Users.def()
    }
}

impl Related<super::relieving_requests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RelievingRequests.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_faculty(self) -> Faculty {
        Faculty {
            id: self.id,
            user_id: self.user_id,
            full_name: self.full_name,
            employee_id: self.employee_id,
            department: self.department,
            designation: self.designation,
            joining_date: self.joining_date,
            created_at: chrono::DateTime::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: chrono::DateTime::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
