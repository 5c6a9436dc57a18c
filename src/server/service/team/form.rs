//! Recent results of a single team.

use std::collections::HashMap;

use crate::{
    model::football::{FormEntryDto, MatchResult},
    server::model::db::MatchModel,
};

/// Build form entries for `team_id`, one per match, preserving the order of `matches`.
///
/// Goals are taken from whichever side the team played on. Opponent names missing from
/// `team_names` render as empty.
pub fn compute_form(
    team_id: i32,
    matches: &[MatchModel],
    team_names: &HashMap<i32, String>,
) -> Vec<FormEntryDto> {
    matches
        .iter()
        .map(|m| {
            let home = m.home_team_id == team_id;
            let (goals_for, goals_against, opponent_id) = if home {
                (m.home_score, m.away_score, m.away_team_id)
            } else {
                (m.away_score, m.home_score, m.home_team_id)
            };

            let result = match goals_for.cmp(&goals_against) {
                std::cmp::Ordering::Greater => MatchResult::Win,
                std::cmp::Ordering::Equal => MatchResult::Draw,
                std::cmp::Ordering::Less => MatchResult::Loss,
            };

            FormEntryDto {
                match_id: m.id,
                date: m.kickoff_at,
                result,
                opponent_name: team_names.get(&opponent_id).cloned().unwrap_or_default(),
                goals_for,
                goals_against,
                home,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use touchline_test_utils::prelude::*;

    use super::*;

    fn names() -> HashMap<i32, String> {
        HashMap::from([
            (1, "Rovers".to_string()),
            (2, "United".to_string()),
            (3, "City".to_string()),
        ])
    }

    /// Expect goals to be attributed from the side the team played on
    #[test]
    fn attributes_goals_by_side() {
        let matches = vec![
            factory::mock_finished_match(3, 2, 1, (0, 2), factory::kickoff(14)),
            factory::mock_finished_match(2, 1, 3, (1, 1), factory::kickoff(7)),
            factory::mock_finished_match(1, 1, 2, (0, 3), factory::kickoff(0)),
        ];

        let form = compute_form(1, &matches, &names());

        assert_eq!(form.len(), 3);

        assert_eq!(form[0].match_id, 3);
        assert_eq!(form[0].result, MatchResult::Win);
        assert_eq!((form[0].goals_for, form[0].goals_against), (2, 0));
        assert_eq!(form[0].opponent_name, "United");
        assert!(!form[0].home);

        assert_eq!(form[1].result, MatchResult::Draw);
        assert_eq!(form[1].opponent_name, "City");
        assert!(form[1].home);

        assert_eq!(form[2].result, MatchResult::Loss);
        assert_eq!((form[2].goals_for, form[2].goals_against), (0, 3));
        assert_eq!(form[2].date, factory::kickoff(0));
    }

    /// Expect an unknown opponent to render with an empty name
    #[test]
    fn renders_missing_opponent_as_empty() {
        let matches = vec![factory::mock_finished_match(
            1,
            1,
            9,
            (1, 0),
            factory::kickoff(0),
        )];

        let form = compute_form(1, &matches, &HashMap::new());

        assert_eq!(form[0].opponent_name, "");
    }
}
