use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

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
        username: &str,
    ) -> Result<entity::touchline_user::Model, TestError> {
        self.insert(username, false).await
    }

    pub async fn insert_admin(
        &self,
        username: &str,
    ) -> Result<entity::touchline_user::Model, TestError> {
        self.insert(username, true).await
    }

    async fn insert(
        &self,
        username: &str,
        is_admin: bool,
    ) -> Result<entity::touchline_user::Model, TestError> {
        Ok(
            entity::prelude::TouchlineUser::insert(entity::touchline_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                is_admin: ActiveValue::Set(is_admin),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}
