use entity::sea_orm_active_enums::MatchStatus;
use sea_orm::{
    ColumnTrait, Condition, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

pub struct MatchRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MatchRepository<'a, C> {
    /// Creates a new instance of [`MatchRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets every match of a league in kickoff order
    pub async fn get_by_league(
        &self,
        league_id: i32,
    ) -> Result<Vec<entity::football_match::Model>, DbErr> {
        entity::prelude::FootballMatch::find()
            .filter(entity::football_match::Column::LeagueId.eq(league_id))
            .order_by_asc(entity::football_match::Column::KickoffAt)
            .order_by_asc(entity::football_match::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets the finished matches of a league in kickoff order
    ///
    /// Ties on kickoff are broken by match ID so standings aggregation sees teams in a
    /// deterministic order.
    pub async fn get_finished_by_league(
        &self,
        league_id: i32,
    ) -> Result<Vec<entity::football_match::Model>, DbErr> {
        entity::prelude::FootballMatch::find()
            .filter(entity::football_match::Column::LeagueId.eq(league_id))
            .filter(entity::football_match::Column::Status.eq(MatchStatus::Finished))
            .order_by_asc(entity::football_match::Column::KickoffAt)
            .order_by_asc(entity::football_match::Column::Id)
            .all(self.db)
            .await
    }

    /// Gets a team's most recent finished matches, home or away, newest first
    pub async fn get_recent_finished_by_team(
        &self,
        team_id: i32,
        limit: u64,
    ) -> Result<Vec<entity::football_match::Model>, DbErr> {
        entity::prelude::FootballMatch::find()
            .filter(
                Condition::any()
                    .add(entity::football_match::Column::HomeTeamId.eq(team_id))
                    .add(entity::football_match::Column::AwayTeamId.eq(team_id)),
            )
            .filter(entity::football_match::Column::Status.eq(MatchStatus::Finished))
            .order_by_desc(entity::football_match::Column::KickoffAt)
            .order_by_desc(entity::football_match::Column::Id)
            .limit(limit)
            .all(self.db)
            .await
    }
}
