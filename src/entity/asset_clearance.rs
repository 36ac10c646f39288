use sea_orm::entity::prelude::*;

use crate::models::clearances::{AssetClearance, Flag};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "asset_clearance")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub request_id: i64,
    pub faculty_id: i64,
    pub status: String,
    pub laptop_returned: String,
    pub id_card_returned: String,
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
    pub fn into_asset_clearance(self) -> AssetClearance {
        AssetClearance {
            id: self.id,
            request_id: self.request_id,
            faculty_id: self.faculty_id,
            status: self.status,
            laptop_returned: Flag::from_stored(&self.laptop_returned),
            id_card_returned: Flag::from_stored(&self.id_card_returned),
            updated_at: chrono::DateTime::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
