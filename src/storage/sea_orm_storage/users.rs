use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, ExprTrait, PaginatorTrait, QueryFilter, Set,
};

use super::SeaOrmStorage;
use crate::entity::prelude::Users;
use crate::entity::users;
use crate::errors::{RelievingSystemError, Result};
use crate::models::users::{CreateUserRequest, User, UserStatus};
use crate::utils::password;

impl SeaOrmStorage {
    pub(super) async fn create_user_impl(&self, request: CreateUserRequest) -> Result<User> {
        let existing = Users::find()
            .filter(
                users::Column::Username
                    .eq(&request.username)
                    .or(users::Column::Email.eq(&request.email)),
            )
            .one(&self.db)
            .await?;
        if existing.is_some() {
            return Err(RelievingSystemError::validation(
                "Username or email already exists",
            ));
        }

        let now = chrono::Utc::now().timestamp();
        let model = users::ActiveModel {
            username: Set(request.username),
            email: Set(request.email),
            password_hash: Set(password::hash_password(&request.password)?),
            role: Set(request.role.to_string()),
            status: Set(UserStatus::Active.as_str().to_string()),
            last_login: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Ok(model.insert(&self.db).await?.into_user())
    }

    pub(super) async fn get_user_by_id_impl(&self, user_id: i64) -> Result<Option<User>> {
        Ok(Users::find_by_id(user_id)
            .one(&self.db)
            .await?
            .map(users::Model::into_user))
    }

    pub(super) async fn get_user_by_username_or_email_impl(
        &self,
        identifier: &str,
    ) -> Result<Option<User>> {
        Ok(Users::find()
            .filter(
                users::Column::Username
                    .eq(identifier)
                    .or(users::Column::Email.eq(identifier)),
            )
            .one(&self.db)
            .await?
            .map(users::Model::into_user))
    }

    pub(super) async fn update_last_login_impl(&self, user_id: i64) -> Result<()> {
        let user = Users::find_by_id(user_id)
            .one(&self.db)
            .await?
            .ok_or_else(|| RelievingSystemError::not_found("User not found"))?;

        let now = chrono::Utc::now().timestamp();
        let mut model: users::ActiveModel = user.into();
        model.last_login = Set(Some(now));
        model.updated_at = Set(now);
        model.update(&self.db).await?;
        Ok(())
    }

    pub(super) async fn count_users_impl(&self) -> Result<u64> {
        Ok(Users::find().count(&self.db).await?)
    }
}
