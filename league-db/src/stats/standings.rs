use std::cmp::Ordering;

use diesel::Queryable;
use hashbrown::HashMap;
use serde::Serialize;

use super::Record;
use crate::models::DbMatch;

/// A team registered in a championship, as stored in `team_championships`.
#[derive(Debug, Clone, Queryable)]
pub struct RegisteredTeam {
    pub team_id: i64,
    pub name: String,
    pub short_name: Option<String>,
    pub finish_position: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Standing {
    pub id: i64,
    pub name: String,
    pub short_name: Option<String>,
    pub points: i64,
    pub wins: i64,
    pub draws: i64,
    pub losses: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    pub goal_difference: i64,
    pub finish_position: Option<i32>,
}

impl Standing {
    fn new(team: RegisteredTeam, record: Record) -> Self {
        Self {
            id: team.team_id,
            name: team.name,
            short_name: team.short_name,
            points: record.points(),
            wins: record.wins,
            draws: record.draws,
            losses: record.losses,
            goals_for: record.goals_for,
            goals_against: record.goals_against,
            goal_difference: record.goal_difference(),
            finish_position: team.finish_position,
        }
    }
}

/// Table order: stored finish position first (unset positions last), then
/// points, then goal difference. Team id only breaks exact ties so the output
/// is deterministic.
pub fn standings_order(a: &Standing, b: &Standing) -> Ordering {
    let position = match (a.finish_position, b.finish_position) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    position
        .then_with(|| b.points.cmp(&a.points))
        .then_with(|| b.goal_difference.cmp(&a.goal_difference))
        .then_with(|| a.id.cmp(&b.id))
}

/// Builds the table for one championship. `matches` should be that
/// championship's matches; results involving unregistered teams are dropped
/// and only completed matches count.
pub fn compute_standings(teams: Vec<RegisteredTeam>, matches: &[DbMatch]) -> Vec<Standing> {
    let mut records: HashMap<i64, Record> = teams
        .iter()
        .map(|team| (team.team_id, Record::default()))
        .collect();

    for m in matches.iter().filter(|m| m.is_completed()) {
        if let Some(record) = records.get_mut(&m.home_team_id) {
            record.add_result(m.home_score, m.away_score);
        }
        if let Some(record) = records.get_mut(&m.away_team_id) {
            record.add_result(m.away_score, m.home_score);
        }
    }

    let mut standings: Vec<Standing> = teams
        .into_iter()
        .map(|team| {
            let record = records.get(&team.team_id).copied().unwrap_or_default();
            Standing::new(team, record)
        })
        .collect();

    standings.sort_by(standings_order);
    standings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::test_support::*;

    fn team(team_id: i64, finish_position: Option<i32>) -> RegisteredTeam {
        RegisteredTeam {
            team_id,
            name: format!("Team {team_id}"),
            short_name: None,
            finish_position,
        }
    }

    fn ids(standings: &[Standing]) -> Vec<i64> {
        standings.iter().map(|s| s.id).collect()
    }

    #[test]
    fn records_are_derived_from_completed_results() {
        let matches = [
            game(1, 1, 2, 3, 1),
            game(2, 2, 3, 2, 2),
            game(3, 3, 1, 0, 1),
            scheduled(4, 2, 1),
        ];

        let standings = compute_standings(vec![team(1, None), team(2, None), team(3, None)], &matches);

        assert_eq!(ids(&standings), [1, 3, 2]);
        let first = &standings[0];
        assert_eq!((first.points, first.wins, first.draws, first.losses), (6, 2, 0, 0));
        assert_eq!((first.goals_for, first.goals_against, first.goal_difference), (4, 1, 3));

        let second = &standings[1];
        assert_eq!((second.points, second.goal_difference), (1, -1));
        let third = &standings[2];
        assert_eq!((third.points, third.goal_difference), (1, -2));
    }

    #[test]
    fn finish_position_outranks_points() {
        // Team 2 has more points but team 3 won the playoff.
        let matches = [game(1, 2, 3, 4, 0), game(2, 2, 4, 1, 0)];

        let standings = compute_standings(
            vec![team(2, Some(2)), team(3, Some(1)), team(4, None)],
            &matches,
        );

        assert_eq!(ids(&standings), [3, 2, 4]);
        assert_eq!(standings[0].finish_position, Some(1));
        assert_eq!(standings[0].points, 0);
    }

    #[test]
    fn unset_positions_sort_after_set_ones_by_points_then_goal_difference() {
        let matches = [
            game(1, 1, 2, 1, 0),
            game(2, 3, 4, 5, 0),
            game(3, 5, 6, 0, 0),
        ];

        let standings = compute_standings(
            vec![team(1, None), team(2, None), team(3, None), team(4, None), team(5, Some(9)), team(6, None)],
            &matches,
        );

        // 5 has a position; then 3 (3 pts, +5), 1 (3 pts, +1), 6 (1 pt), 2 (-1), 4 (-5)
        assert_eq!(ids(&standings), [5, 3, 1, 6, 2, 4]);

        // Within the unpositioned tier points never increase.
        let unpositioned = standings.iter().filter(|s| s.finish_position.is_none()).collect::<Vec<_>>();
        assert!(unpositioned.windows(2).all(|w| w[0].points >= w[1].points));
    }

    #[test]
    fn unregistered_teams_are_left_out() {
        let standings = compute_standings(vec![team(1, None)], &[game(1, 1, 99, 2, 0)]);

        assert_eq!(ids(&standings), [1]);
        assert_eq!(standings[0].wins, 1);
    }

    #[test]
    fn no_registered_teams_means_an_empty_table() {
        assert!(compute_standings(Vec::new(), &[game(1, 1, 2, 2, 0)]).is_empty());
    }
}
