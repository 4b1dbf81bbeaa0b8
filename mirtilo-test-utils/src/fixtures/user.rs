use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::UserModel, TestContext};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> UserFixtures<'a> {
    pub async fn insert_user(
        &self,
        auth_subject: &str,
        email: &str,
    ) -> Result<UserModel, TestError> {
        let now = Utc::now().naive_utc();

        Ok(
            entity::prelude::AppUser::insert(entity::app_user::ActiveModel {
                auth_subject: ActiveValue::Set(auth_subject.to_string()),
                email: ActiveValue::Set(email.to_string()),
                created_at: ActiveValue::Set(now),
                last_login_at: ActiveValue::Set(now),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
