use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user(&self) -> UserFixtures<'_> {
        UserFixtures { context: self }
    }
}

pub struct UserFixtures<'a> {
    context: &'a TestContext,
}

impl<'a> UserFixtures<'a> {
    /// Insert a user with placeholder profile fields and the provided email
    pub async fn insert_user(&self, email: &str) -> Result<UserModel, TestError> {
        Ok(entity::prelude::User::insert(entity::user::ActiveModel {
            username: ActiveValue::Set(Some("username".to_string())),
            name: ActiveValue::Set(Some("name".to_string())),
            lastname: ActiveValue::Set(Some("lastname".to_string())),
            password: ActiveValue::Set("password".to_string()),
            email: ActiveValue::Set(email.to_string()),
            ..Default::default()
        })
        .exec_with_returning(&self.context.db)
        .await?)
    }
}
