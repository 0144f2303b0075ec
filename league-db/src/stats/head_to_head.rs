use serde::Serialize;

use crate::models::DbMatch;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HeadToHead {
    pub total_matches: i64,
    pub team1_wins: i64,
    pub draws: i64,
    pub team2_wins: i64,
    pub team1_goals: i64,
    pub team2_goals: i64,
}

/// Aggregates the completed meetings between `team1` and `team2`. Matches
/// involving any other team are skipped, as is everything when both ids are
/// the same.
pub fn head_to_head(team1: i64, team2: i64, matches: &[DbMatch]) -> HeadToHead {
    let mut summary = HeadToHead::default();
    if team1 == team2 {
        return summary;
    }

    for m in matches
        .iter()
        .filter(|m| m.is_completed() && m.is_between(team1, team2))
    {
        let Some((team1_score, team2_score)) = m.score_for(team1) else {
            continue;
        };

        summary.total_matches += 1;
        summary.team1_goals += team1_score as i64;
        summary.team2_goals += team2_score as i64;
        if team1_score > team2_score {
            summary.team1_wins += 1;
        } else if team1_score < team2_score {
            summary.team2_wins += 1;
        } else {
            summary.draws += 1;
        }
    }

    summary
}
