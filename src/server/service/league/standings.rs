//! League table aggregation over finished matches.

use std::collections::HashMap;

use crate::{model::football::StandingsRowDto, server::model::db::MatchModel};

const POINTS_FOR_WIN: u32 = 3;
const POINTS_FOR_DRAW: u32 = 1;

#[derive(Default)]
struct TeamRecord {
    team_id: i32,
    played: u32,
    wins: u32,
    draws: u32,
    losses: u32,
    goals_for: i32,
    goals_against: i32,
}

impl TeamRecord {
    fn record(&mut self, goals_for: i32, goals_against: i32) {
        self.played += 1;
        self.goals_for += goals_for;
        self.goals_against += goals_against;

        match goals_for.cmp(&goals_against) {
            std::cmp::Ordering::Greater => self.wins += 1,
            std::cmp::Ordering::Equal => self.draws += 1,
            std::cmp::Ordering::Less => self.losses += 1,
        }
    }

    fn points(&self) -> u32 {
        self.wins * POINTS_FOR_WIN + self.draws * POINTS_FOR_DRAW
    }

    fn goal_difference(&self) -> i32 {
        self.goals_for - self.goals_against
    }
}

/// Compute a ranked table from finished matches.
///
/// Teams are ranked by points, then goal difference, then goals scored, all descending.
/// Remaining ties keep the order in which teams were first encountered in `matches`.
/// Only teams with at least one match appear.
///
/// # Arguments
/// - `matches` - Finished matches of one league
/// - `team_names` - Names keyed by team ID, missing names render as empty
pub fn compute_standings(
    matches: &[MatchModel],
    team_names: &HashMap<i32, String>,
) -> Vec<StandingsRowDto> {
    let mut records: Vec<TeamRecord> = Vec::new();
    let mut index: HashMap<i32, usize> = HashMap::new();

    let mut record_for = |team_id: i32, records: &mut Vec<TeamRecord>| -> usize {
        *index.entry(team_id).or_insert_with(|| {
            records.push(TeamRecord {
                team_id,
                ..Default::default()
            });
            records.len() - 1
        })
    };

    for m in matches {
        let home = record_for(m.home_team_id, &mut records);
        let away = record_for(m.away_team_id, &mut records);

        records[home].record(m.home_score, m.away_score);
        records[away].record(m.away_score, m.home_score);
    }

    // Stable sort keeps encounter order for full ties
    records.sort_by(|a, b| {
        b.points()
            .cmp(&a.points())
            .then_with(|| b.goal_difference().cmp(&a.goal_difference()))
            .then_with(|| b.goals_for.cmp(&a.goals_for))
    });

    records
        .into_iter()
        .enumerate()
        .map(|(rank, record)| StandingsRowDto {
            position: rank as u32 + 1,
            team_id: record.team_id,
            team_name: team_names
                .get(&record.team_id)
                .cloned()
                .unwrap_or_default(),
            played: record.played,
            wins: record.wins,
            draws: record.draws,
            losses: record.losses,
            goals_for: record.goals_for,
            goals_against: record.goals_against,
            goal_difference: record.goal_difference(),
            points: record.points(),
        })
        .collect()
}
