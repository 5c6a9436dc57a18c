use sea_orm::{ConnectionTrait, DbErr, EntityTrait, QueryOrder};

pub struct LeagueRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LeagueRepository<'a, C> {
    /// Creates a new instance of [`LeagueRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all leagues ordered by name then season
    pub async fn get_all(&self) -> Result<Vec<entity::league::Model>, DbErr> {
        entity::prelude::League::find()
            .order_by_asc(entity::league::Column::Name)
            .order_by_asc(entity::league::Column::Season)
            .all(self.db)
            .await
    }

    pub async fn get(&self, league_id: i32) -> Result<Option<entity::league::Model>, DbErr> {
        entity::prelude::League::find_by_id(league_id)
            .one(self.db)
            .await
    }
}
