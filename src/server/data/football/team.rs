use std::collections::HashMap;

use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct TeamRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> TeamRepository<'a, C> {
    /// Creates a new instance of [`TeamRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all teams ordered by name
    pub async fn get_all(&self) -> Result<Vec<entity::team::Model>, DbErr> {
        entity::prelude::Team::find()
            .order_by_asc(entity::team::Column::Name)
            .order_by_asc(entity::team::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn get(&self, team_id: i32) -> Result<Option<entity::team::Model>, DbErr> {
        entity::prelude::Team::find_by_id(team_id).one(self.db).await
    }

    /// Gets team names keyed by team ID
    ///
    /// IDs with no matching team are absent from the returned map.
    pub async fn get_names_by_ids(&self, team_ids: &[i32]) -> Result<HashMap<i32, String>, DbErr> {
        if team_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let teams = entity::prelude::Team::find()
            .filter(entity::team::Column::Id.is_in(team_ids.iter().copied()))
            .all(self.db)
            .await?;

        Ok(teams.into_iter().map(|team| (team.id, team.name)).collect())
    }
}
