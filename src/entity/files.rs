use sea_orm::entity::prelude::*;

use crate::models::files::StoredFile;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "files")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub letter_token: String,
    pub file_name: String,
    pub file_size: i64,
    pub file_type: String,
    pub faculty_id: i64,
    pub uploaded_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::faculties::Entity",
        from = "Column::FacultyId",
        to = "super::faculties::Column::Id"
    )]
    Faculties,
}

impl Related<super::faculties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Faculties.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_stored_file(self) -> StoredFile {
        StoredFile {
            letter_token: self.letter_token,
            file_name: self.file_name,
            file_size: self.file_size,
            file_type: self.file_type,
            faculty_id: self.faculty_id,
            uploaded_at: chrono::DateTime::from_timestamp(self.uploaded_at, 0).unwrap_or_default(),
        }
    }
}
