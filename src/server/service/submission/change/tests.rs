use entity::sea_orm_active_enums::{MatchStatus, SubmissionOperation, TargetType};
use serde_json::{json, Value};

use super::*;

fn parse(
    target_type: TargetType,
    operation: SubmissionOperation,
    target_id: Option<i32>,
    changes: Value,
) -> Result<EntityChange, String> {
    EntityChange::parse(target_type, operation, target_id, Some(&changes))
}

/// Expect a complete team record to parse into a typed create
#[test]
fn parses_team_create() {
    let change = parse(
        TargetType::Team,
        SubmissionOperation::Create,
        None,
        json!({ "name": "FC X", "country": "Y" }),
    )
    .unwrap();

    assert_eq!(
        change,
        EntityChange::Team(ChangeSet::Create(NewTeam {
            name: "FC X".to_string(),
            short_name: None,
            country: "Y".to_string(),
            founded: None,
            stadium: None,
        }))
    );
    assert_eq!(change.target_type(), TargetType::Team);
}

/// Expect match creation to default to a scheduled 0-0
#[test]
fn defaults_new_match_status_and_score() {
    let change = parse(
        TargetType::Match,
        SubmissionOperation::Create,
        None,
        json!({
            "leagueId": 1,
            "homeTeamId": 1,
            "awayTeamId": 2,
            "kickoffAt": "2025-08-16T15:00:00"
        }),
    )
    .unwrap();

    let EntityChange::Match(ChangeSet::Create(new_match)) = change else {
        panic!("expected match create");
    };
    assert_eq!(new_match.status, None);
    assert_eq!((new_match.home_score, new_match.away_score), (0, 0));

    let mut active_model = <entity::football_match::ActiveModel as std::default::Default>::default();
    new_match.write_to(&mut active_model);
    assert_eq!(
        active_model.status,
        sea_orm::ActiveValue::Set(MatchStatus::Scheduled)
    );
}

/// Expect a patch to carry its target ID
#[test]
fn parses_player_update() {
    let change = parse(
        TargetType::Player,
        SubmissionOperation::Update,
        Some(9),
        json!({ "shirtNumber": 10 }),
    )
    .unwrap();

    let EntityChange::Player(ChangeSet::Update { target_id, patch }) = change else {
        panic!("expected player update");
    };
    assert_eq!(target_id, 9);
    assert_eq!(patch.shirt_number, Some(10));
    assert_eq!(patch.name, None);
}

/// Expect DELETE to accept an absent or explicit null payload
#[test]
fn parses_delete_without_changes() {
    let absent = EntityChange::parse(TargetType::Odd, SubmissionOperation::Delete, Some(3), None);
    let null = parse(
        TargetType::Odd,
        SubmissionOperation::Delete,
        Some(3),
        Value::Null,
    );

    assert_eq!(
        absent.unwrap(),
        EntityChange::Odd(ChangeSet::Delete { target_id: 3 })
    );
    assert_eq!(
        null.unwrap(),
        EntityChange::Odd(ChangeSet::Delete { target_id: 3 })
    );
}

/// Expect UPDATE and DELETE without a target ID to be rejected
#[test]
fn rejects_missing_target_id() {
    let update = parse(
        TargetType::Team,
        SubmissionOperation::Update,
        None,
        json!({ "name": "FC Z" }),
    );
    let delete = EntityChange::parse(TargetType::Team, SubmissionOperation::Delete, None, None);

    assert!(update.unwrap_err().contains("targetId"));
    assert!(delete.unwrap_err().contains("targetId"));
}

/// Expect CREATE carrying a target ID to be rejected
#[test]
fn rejects_create_with_target_id() {
    let result = parse(
        TargetType::League,
        SubmissionOperation::Create,
        Some(1),
        json!({ "name": "Premier", "country": "England", "season": "2025/26" }),
    );

    assert!(result.is_err());
}

/// Expect unknown and missing fields to be rejected
#[test]
fn rejects_payload_not_matching_schema() {
    let unknown_field = parse(
        TargetType::Team,
        SubmissionOperation::Create,
        None,
        json!({ "name": "FC X", "country": "Y", "colour": "red" }),
    );
    let missing_field = parse(
        TargetType::Team,
        SubmissionOperation::Create,
        None,
        json!({ "name": "FC X" }),
    );
    let wrong_type = parse(
        TargetType::PlayerTrophy,
        SubmissionOperation::Create,
        None,
        json!({ "playerId": "one", "trophyId": 1 }),
    );

    assert!(unknown_field.is_err());
    assert!(missing_field.is_err());
    assert!(wrong_type.is_err());
}

/// Expect CREATE with a null or non-object payload to be rejected
#[test]
fn rejects_create_without_object_payload() {
    let null = parse(
        TargetType::Trophy,
        SubmissionOperation::Create,
        None,
        Value::Null,
    );
    let array = parse(TargetType::Trophy, SubmissionOperation::Create, None, json!([]));
    let absent = EntityChange::parse(TargetType::Trophy, SubmissionOperation::Create, None, None);

    assert!(null.is_err());
    assert!(array.is_err());
    assert!(absent.is_err());
}

/// Expect UPDATE with no non-null field to be rejected
#[test]
fn rejects_empty_patch() {
    let empty = parse(
        TargetType::Team,
        SubmissionOperation::Update,
        Some(1),
        json!({}),
    );
    let only_nulls = parse(
        TargetType::Team,
        SubmissionOperation::Update,
        Some(1),
        json!({ "name": null }),
    );

    assert!(empty.is_err());
    assert!(only_nulls.is_err());
}

/// Expect DELETE with a payload to be rejected
#[test]
fn rejects_delete_with_changes() {
    let result = parse(
        TargetType::Team,
        SubmissionOperation::Delete,
        Some(1),
        json!({ "name": "FC X" }),
    );

    assert!(result.is_err());
}

/// Expect value constraints beyond the JSON shape to be enforced
#[test]
fn rejects_invalid_values() {
    let same_teams = parse(
        TargetType::Match,
        SubmissionOperation::Create,
        None,
        json!({
            "leagueId": 1,
            "homeTeamId": 4,
            "awayTeamId": 4,
            "kickoffAt": "2025-08-16T15:00:00"
        }),
    );
    let blank_name = parse(
        TargetType::Team,
        SubmissionOperation::Update,
        Some(1),
        json!({ "name": "  " }),
    );
    let short_odds = parse(
        TargetType::Odd,
        SubmissionOperation::Create,
        None,
        json!({ "matchId": 1, "bookmaker": "Book", "homeWin": 0.9, "draw": 3.2, "awayWin": 2.5 }),
    );
    let negative_goals = parse(
        TargetType::PlayerSeasonStats,
        SubmissionOperation::Update,
        Some(1),
        json!({ "goals": -1 }),
    );

    assert!(same_teams.is_err());
    assert!(blank_name.is_err());
    assert!(short_odds.is_err());
    assert!(negative_goals.is_err());
}

/// Expect a patch to only overwrite the fields it carries
#[test]
fn patch_leaves_unset_fields_untouched() {
    let patch = TeamPatch {
        name: None,
        short_name: None,
        country: None,
        founded: Some(1900),
        stadium: None,
    };
    let mut active_model = <entity::team::ActiveModel as std::default::Default>::default();

    patch.write_to(&mut active_model);

    assert_eq!(active_model.founded, sea_orm::ActiveValue::Set(Some(1900)));
    assert_eq!(active_model.name, sea_orm::ActiveValue::NotSet);
}
