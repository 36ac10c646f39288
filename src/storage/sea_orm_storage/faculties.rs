use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, ExprTrait, QueryFilter, Set};

use super::SeaOrmStorage;
use crate::entity::faculties;
use crate::entity::prelude::Faculties;
use crate::errors::{RelievingSystemError, Result};
use crate::models::faculties::{CreateFacultyRequest, Faculty};

impl SeaOrmStorage {
    pub(super) async fn create_faculty_impl(
        &self,
        request: CreateFacultyRequest,
    ) -> Result<Faculty> {
        let existing = Faculties::find()
            .filter(
                faculties::Column::UserId
                    .eq(request.user_id)
                    .or(faculties::Column::EmployeeId.eq(&request.employee_id)),
            )
            .one(&self.db)
            .await?;
        if existing.is_some() {
            return Err(RelievingSystemError::validation(
                "Faculty profile or employee ID already exists",
            ));
        }

        let now = chrono::Utc::now().timestamp();
        let model = faculties::ActiveModel {
            user_id: Set(request.user_id),
            full_name: Set(request.full_name),
            employee_id: Set(request.employee_id),
            department: Set(request.department),
            designation: Set(request.designation),
            joining_date: Set(request.joining_date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(model.insert(&self.db).await?.into_faculty())
    }

    pub(super) async fn get_faculty_by_id_impl(&self, faculty_id: i64) -> Result<Option<Faculty>> {
        Ok(Faculties::find_by_id(faculty_id)
            .one(&self.db)
            .await?
            .map(faculties::Model::into_faculty))
    }

    pub(super) async fn get_faculty_by_user_id_impl(
        &self,
        user_id: i64,
    ) -> Result<Option<Faculty>> {
        Ok(Faculties::find()
            .filter(faculties::Column::UserId.eq(user_id))
            .one(&self.db)
            .await?
            .map(faculties::Model::into_faculty))
    }
}
