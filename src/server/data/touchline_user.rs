use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new user
    pub async fn create(
        &self,
        username: &str,
        is_admin: bool,
    ) -> Result<entity::touchline_user::Model, DbErr> {
        let user = entity::touchline_user::ActiveModel {
            username: ActiveValue::Set(username.to_string()),
            is_admin: ActiveValue::Set(is_admin),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::touchline_user::Model>, DbErr> {
        entity::prelude::TouchlineUser::find_by_id(user_id)
            .one(self.db)
            .await
    }
}

#[cfg(test)]
mod tests {

    mod create {
        use touchline_test_utils::prelude::*;

        use crate::server::data::touchline_user::UserRepository;

        /// Expect success when creating a new user
        #[tokio::test]
        async fn creates_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;

            let user_repository = UserRepository::new(&test.db);
            let result = user_repository.create("contributor", false).await;

            assert!(result.is_ok());
            let user = result.unwrap();
            assert_eq!(user.username, "contributor");
            assert!(!user.is_admin);

            Ok(())
        }

        /// Expect Error when creating a user with a username already taken
        #[tokio::test]
        async fn fails_for_duplicate_username() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_mock_user("contributor")
                .build()
                .await?;

            let user_repository = UserRepository::new(&test.db);
            let result = user_repository.create("contributor", true).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get {
        use touchline_test_utils::prelude::*;

        use crate::server::data::touchline_user::UserRepository;

        /// Expect Some when user exists in database
        #[tokio::test]
        async fn finds_existing_user() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_user_tables().build().await?;
            let admin = test.user().insert_admin("admin").await?;

            let user_repository = UserRepository::new(&test.db);
            let result = user_repository.get(admin.id).await;

            assert!(result.is_ok());
            let user = result.unwrap();
            assert!(user.is_some_and(|user| user.is_admin));

            Ok(())
        }

        /// Expect None when user does not exist in database
        #[tokio::test]
        async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_user_tables().build().await?;

            let user_repository = UserRepository::new(&test.db);
            let result = user_repository.get(1).await;

            assert!(result.is_ok());
            assert!(result.unwrap().is_none());

            Ok(())
        }
    }
}
