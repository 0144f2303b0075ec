use diesel::Queryable;
use hashbrown::{HashMap, HashSet};
use serde::Serialize;

use super::{Record, TEAM_TOP_SCORERS_LIMIT};
use crate::enums::{ChampionshipFormat, GoalType};
use crate::models::DbMatch;

/// A championship the team is registered in.
#[derive(Debug, Clone, Queryable)]
pub struct Registration {
    pub championship_id: i64,
    pub name: String,
    pub year: i32,
    pub format: ChampionshipFormat,
    pub finish_position: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamSeason {
    pub id: i64,
    pub name: String,
    pub year: i32,
    pub format: ChampionshipFormat,
    pub finish_position: Option<i32>,
    pub points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title {
    pub id: i64,
    pub name: String,
    pub year: i32,
    pub format: ChampionshipFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamChampionshipRecord {
    pub championship_name: String,
    pub year: i32,
    pub finish_position: Option<i32>,
    pub points: i64,
    pub wins: i64,
    pub draws: i64,
    pub losses: i64,
    pub goals_for: i64,
    pub goals_against: i64,
    pub goal_difference: i64,
}

fn records_by_championship(team_id: i64, matches: &[DbMatch]) -> HashMap<i64, Record> {
    let mut records: HashMap<i64, Record> = HashMap::new();
    for m in matches {
        records
            .entry(m.championship_id)
            .or_default()
            .add_match(team_id, m);
    }
    records
}

fn newest_first(a: (i32, i64), b: (i32, i64)) -> std::cmp::Ordering {
    b.0.cmp(&a.0).then_with(|| b.1.cmp(&a.1))
}

/// Every championship the team entered with the points it earned there.
/// `matches` may span championships; each is credited to its own.
pub fn team_seasons(team_id: i64, registrations: Vec<Registration>, matches: &[DbMatch]) -> Vec<TeamSeason> {
    let records = records_by_championship(team_id, matches);

    let mut seasons = registrations
        .into_iter()
        .map(|r| TeamSeason {
            points: records
                .get(&r.championship_id)
                .map(Record::points)
                .unwrap_or_default(),
            id: r.championship_id,
            name: r.name,
            year: r.year,
            format: r.format,
            finish_position: r.finish_position,
        })
        .collect::<Vec<_>>();

    seasons.sort_by(|a, b| newest_first((a.year, a.id), (b.year, b.id)));
    seasons
}

/// Championships the team finished first in, newest first.
pub fn titles(registrations: Vec<Registration>) -> Vec<Title> {
    let mut titles = registrations
        .into_iter()
        .filter(|r| r.finish_position == Some(1))
        .map(|r| Title {
            id: r.championship_id,
            name: r.name,
            year: r.year,
            format: r.format,
        })
        .collect::<Vec<_>>();

    titles.sort_by(|a, b| newest_first((a.year, a.id), (b.year, b.id)));
    titles
}

/// The team's record within one championship. Matches from other
/// championships are ignored.
pub fn team_championship_record(
    team_id: i64,
    registration: Registration,
    matches: &[DbMatch],
) -> TeamChampionshipRecord {
    let record = records_by_championship(team_id, matches)
        .remove(&registration.championship_id)
        .unwrap_or_default();

    TeamChampionshipRecord {
        championship_name: registration.name,
        year: registration.year,
        finish_position: registration.finish_position,
        points: record.points(),
        wins: record.wins,
        draws: record.draws,
        losses: record.losses,
        goals_for: record.goals_for,
        goals_against: record.goals_against,
        goal_difference: record.goal_difference(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Queryable)]
pub struct TeamGoal {
    pub player_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub match_id: i64,
    pub goal_type: GoalType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamScorer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub total_goals: i64,
    pub matches_played: i64,
}

/// The team's leading scorers. `appearances` are (player, match) pairs for
/// the team; a match the player scored in counts as played even without one.
pub fn team_top_scorers(goals: Vec<TeamGoal>, appearances: &[(i64, i64)]) -> Vec<TeamScorer> {
    let mut played: HashMap<i64, HashSet<i64>> = HashMap::new();
    for &(player_id, match_id) in appearances {
        played.entry(player_id).or_default().insert(match_id);
    }

    let mut order: Vec<i64> = Vec::new();
    let mut scorers: HashMap<i64, TeamScorer> = HashMap::new();
    for goal in goals {
        played.entry(goal.player_id).or_default().insert(goal.match_id);
        if !goal.goal_type.counts_for_scorer() {
            continue;
        }

        scorers
            .entry(goal.player_id)
            .or_insert_with(|| {
                order.push(goal.player_id);
                TeamScorer {
                    id: goal.player_id,
                    first_name: goal.first_name,
                    last_name: goal.last_name,
                    total_goals: 0,
                    matches_played: 0,
                }
            })
            .total_goals += 1;
    }

    let mut result = order
        .into_iter()
        .filter_map(|player_id| {
            let mut scorer = scorers.remove(&player_id)?;
            scorer.matches_played = played.get(&player_id).map_or(0, |m| m.len() as i64);
            Some(scorer)
        })
        .collect::<Vec<_>>();

    result.sort_by(|a, b| b.total_goals.cmp(&a.total_goals));
    result.truncate(TEAM_TOP_SCORERS_LIMIT);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DbMatch;
    use crate::stats::test_support::*;

    fn registration(championship_id: i64, year: i32, finish_position: Option<i32>) -> Registration {
        Registration {
            championship_id,
            name: format!("Championship {championship_id}"),
            year,
            format: ChampionshipFormat::League,
            finish_position,
        }
    }

    fn in_championship(championship_id: i64, m: DbMatch) -> DbMatch {
        DbMatch { championship_id, ..m }
    }

    fn goal(player_id: i64, match_id: i64, goal_type: GoalType) -> TeamGoal {
        TeamGoal {
            player_id,
            first_name: format!("First{player_id}"),
            last_name: format!("Last{player_id}"),
            match_id,
            goal_type,
        }
    }

    #[test]
    fn seasons_carry_points_earned_in_each_championship() {
        let matches = [
            in_championship(1, game(1, 1, 2, 2, 0)),
            in_championship(1, game(2, 3, 1, 1, 1)),
            in_championship(2, game(3, 1, 2, 0, 1)),
            in_championship(3, scheduled(4, 1, 2)),
        ];

        let seasons = team_seasons(
            1,
            vec![registration(1, 2023, Some(1)), registration(2, 2024, None), registration(3, 2024, None)],
            &matches,
        );

        let summary = seasons.iter().map(|s| (s.id, s.points)).collect::<Vec<_>>();
        assert_eq!(summary, [(3, 0), (2, 0), (1, 4)]);
    }

    #[test]
    fn titles_are_first_place_finishes() {
        let won = titles(vec![
            registration(1, 2022, Some(1)),
            registration(2, 2023, Some(2)),
            registration(3, 2024, Some(1)),
            registration(4, 2025, None),
        ]);

        let ids = won.iter().map(|t| t.id).collect::<Vec<_>>();
        assert_eq!(ids, [3, 1]);
    }

    #[test]
    fn single_championship_record() {
        let matches = [
            in_championship(5, game(1, 1, 2, 3, 1)),
            in_championship(5, game(2, 2, 1, 2, 2)),
            in_championship(6, game(3, 1, 2, 9, 0)),
        ];

        let record = team_championship_record(1, registration(5, 2024, Some(2)), &matches);

        assert_eq!(
            record,
            TeamChampionshipRecord {
                championship_name: "Championship 5".to_string(),
                year: 2024,
                finish_position: Some(2),
                points: 4,
                wins: 1,
                draws: 1,
                losses: 0,
                goals_for: 5,
                goals_against: 3,
                goal_difference: 2,
            }
        );
    }

    #[test]
    fn top_scorers_count_distinct_matches_and_skip_own_goals() {
        let goals = vec![
            goal(1, 10, GoalType::Regular),
            goal(1, 10, GoalType::Penalty),
            goal(1, 11, GoalType::Regular),
            goal(2, 10, GoalType::OwnGoal),
            goal(3, 12, GoalType::FreeKick),
        ];
        let appearances = [(1, 10), (1, 11), (1, 13), (3, 12), (3, 14), (2, 10)];

        let scorers = team_top_scorers(goals, &appearances);

        let summary = scorers
            .iter()
            .map(|s| (s.id, s.total_goals, s.matches_played))
            .collect::<Vec<_>>();
        assert_eq!(summary, [(1, 3, 3), (3, 1, 2)]);
    }

    #[test]
    fn top_scorers_are_capped() {
        let goals = (1..=15).map(|id| goal(id, id, GoalType::Regular)).collect();

        let scorers = team_top_scorers(goals, &[]);

        assert_eq!(scorers.len(), TEAM_TOP_SCORERS_LIMIT);
        assert!(scorers.iter().all(|s| s.total_goals == 1 && s.matches_played == 1));
    }
}
