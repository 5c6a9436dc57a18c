//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, DbBackend, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,
    include_submission_tables: bool,
    include_football_tables: bool,

    // (username, is_admin)
    users: Vec<(String, bool)>,
    teams: Vec<String>,
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            include_submission_tables: false,
            include_football_tables: false,
            users: Vec::new(),
            teams: Vec::new(),
        }
    }

    /// Add the user table to the test database.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add user, submission and review tables to the test database.
    pub fn with_submission_tables(mut self) -> Self {
        self.include_user_tables = true;
        self.include_submission_tables = true;
        self
    }

    /// Add every football data table to the test database.
    ///
    /// Creates teams, leagues, players, matches and all tables which reference them so
    /// that any submission target type can be applied.
    pub fn with_football_tables(mut self) -> Self {
        self.include_football_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`
    /// after the table groups above.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use touchline_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), touchline_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Team)
    ///     .with_table(League)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a regular user into the database.
    ///
    /// Users are inserted in the order they are queued, the first user receives ID 1.
    pub fn with_mock_user(mut self, username: impl Into<String>) -> Self {
        self.include_user_tables = true;
        self.users.push((username.into(), false));
        self
    }

    /// Insert an administrator into the database.
    pub fn with_mock_admin(mut self, username: impl Into<String>) -> Self {
        self.include_user_tables = true;
        self.users.push((username.into(), true));
        self
    }

    /// Insert a team into the database.
    pub fn with_mock_team(mut self, name: impl Into<String>) -> Self {
        self.include_football_tables = true;
        self.teams.push(name.into());
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;
        let schema = Schema::new(DbBackend::Sqlite);

        let mut all_tables = Vec::new();

        if self.include_user_tables {
            all_tables.push(schema.create_table_from_entity(entity::prelude::TouchlineUser));
        }

        if self.include_submission_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Submission),
                schema.create_table_from_entity(entity::prelude::Review),
            ]);
        }

        if self.include_football_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Team),
                schema.create_table_from_entity(entity::prelude::League),
                schema.create_table_from_entity(entity::prelude::Player),
                schema.create_table_from_entity(entity::prelude::FootballMatch),
                schema.create_table_from_entity(entity::prelude::MatchEvent),
                schema.create_table_from_entity(entity::prelude::PlayerMatchStats),
                schema.create_table_from_entity(entity::prelude::PlayerSeasonStats),
                schema.create_table_from_entity(entity::prelude::Transfer),
                schema.create_table_from_entity(entity::prelude::Trophy),
                schema.create_table_from_entity(entity::prelude::PlayerTrophy),
                schema.create_table_from_entity(entity::prelude::Odd),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        for (username, is_admin) in self.users {
            if is_admin {
                setup.user().insert_admin(&username).await?;
            } else {
                setup.user().insert_user(&username).await?;
            }
        }

        for name in self.teams {
            setup.football().insert_team(&name).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
