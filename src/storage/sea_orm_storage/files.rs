use sea_orm::{ActiveModelTrait, EntityTrait, Set};

use super::SeaOrmStorage;
use crate::entity::files;
use crate::entity::prelude::Files;
use crate::errors::Result;
use crate::models::files::StoredFile;

impl SeaOrmStorage {
    pub(super) async fn store_file_record_impl(&self, file: StoredFile) -> Result<StoredFile> {
        let model = files::ActiveModel {
            letter_token: Set(file.letter_token),
            file_name: Set(file.file_name),
            file_size: Set(file.file_size),
            file_type: Set(file.file_type),
            faculty_id: Set(file.faculty_id),
            uploaded_at: Set(file.uploaded_at.timestamp()),
        };
        Ok(model.insert(&self.db).await?.into_stored_file())
    }

    pub(super) async fn get_file_by_token_impl(
        &self,
        letter_token: &str,
    ) -> Result<Option<StoredFile>> {
        Ok(Files::find_by_id(letter_token.to_string())
            .one(&self.db)
            .await?
            .map(files::Model::into_stored_file))
    }
}
