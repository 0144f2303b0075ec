use hashbrown::HashMap;
use serde::Serialize;

use super::Record;
use crate::models::DbMatch;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoachRecord {
    pub team_id: i64,
    pub team_name: String,
    pub matches_directed: i64,
    pub wins: i64,
    pub draws: i64,
    pub losses: i64,
}

/// Results per team the coach directed. A coach is credited with the side
/// they were listed on, so one match only ever counts for that team.
pub fn coach_records(
    coach_id: i64,
    matches: &[DbMatch],
    team_names: &HashMap<i64, String>,
) -> Vec<CoachRecord> {
    let mut records: HashMap<i64, Record> = HashMap::new();

    for m in matches.iter().filter(|m| m.is_completed()) {
        if m.home_coach_id == Some(coach_id) {
            records.entry(m.home_team_id).or_default().add_match(m.home_team_id, m);
        }
        if m.away_coach_id == Some(coach_id) {
            records.entry(m.away_team_id).or_default().add_match(m.away_team_id, m);
        }
    }

    let mut result = records
        .into_iter()
        .map(|(team_id, record)| CoachRecord {
            team_id,
            team_name: team_names.get(&team_id).cloned().unwrap_or_default(),
            matches_directed: record.played,
            wins: record.wins,
            draws: record.draws,
            losses: record.losses,
        })
        .collect::<Vec<_>>();

    result.sort_by(|a, b| {
        b.matches_directed
            .cmp(&a.matches_directed)
            .then_with(|| a.team_id.cmp(&b.team_id))
    });
    result
}
