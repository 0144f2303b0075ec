use diesel::Queryable;
use hashbrown::HashMap;
use serde::Serialize;

use super::LEADERBOARD_LIMIT;
use crate::enums::{CardType, GoalType};

/// The player an event is credited to and the team they represented when it
/// happened. Leaderboards are keyed on this pair, so a player who moved
/// during a championship shows up once per team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Queryable)]
pub struct PlayerForTeam {
    #[serde(rename = "id")]
    pub player_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub team_id: i64,
    pub team_name: String,
}

impl PlayerForTeam {
    fn key(&self) -> (i64, i64) {
        (self.player_id, self.team_id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScorerEntry {
    #[serde(flatten)]
    pub player: PlayerForTeam,
    pub total_goals: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AssisterEntry {
    #[serde(flatten)]
    pub player: PlayerForTeam,
    pub total_assists: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardsEntry {
    #[serde(flatten)]
    pub player: PlayerForTeam,
    pub yellow_cards: i64,
    pub red_cards: i64,
}

/// Groups `rows` by (player, team), keeping first-seen order so that a
/// stable sort afterwards leaves ties in storage order.
fn group_by_player_team<T, A: Default>(
    rows: impl IntoIterator<Item = (PlayerForTeam, T)>,
    mut accumulate: impl FnMut(&mut A, T),
) -> Vec<(PlayerForTeam, A)> {
    let mut index: HashMap<(i64, i64), usize> = HashMap::new();
    let mut groups: Vec<(PlayerForTeam, A)> = Vec::new();

    for (player, item) in rows {
        let i = *index.entry(player.key()).or_insert_with(|| {
            groups.push((player, A::default()));
            groups.len() - 1
        });
        accumulate(&mut groups[i].1, item);
    }

    groups
}

/// Goals per (player, team). Own goals are not credited to the scorer.
pub fn top_scorers(goals: impl IntoIterator<Item = (PlayerForTeam, GoalType)>) -> Vec<ScorerEntry> {
    let mut entries = group_by_player_team(goals, |total: &mut i64, goal_type: GoalType| {
        if goal_type.counts_for_scorer() {
            *total += 1;
        }
    })
    .into_iter()
    .filter(|(_, total)| *total > 0)
    .map(|(player, total_goals)| ScorerEntry { player, total_goals })
    .collect::<Vec<_>>();

    entries.sort_by(|a, b| b.total_goals.cmp(&a.total_goals));
    entries.truncate(LEADERBOARD_LIMIT);
    entries
}

/// Assists per (player, team). Each input row is one goal the player set up,
/// stamped with the team that scored it.
pub fn top_assisters(assists: impl IntoIterator<Item = PlayerForTeam>) -> Vec<AssisterEntry> {
    let mut entries = group_by_player_team(
        assists.into_iter().map(|player| (player, ())),
        |total: &mut i64, ()| *total += 1,
    )
    .into_iter()
    .map(|(player, total_assists)| AssisterEntry { player, total_assists })
    .collect::<Vec<_>>();

    entries.sort_by(|a, b| b.total_assists.cmp(&a.total_assists));
    entries.truncate(LEADERBOARD_LIMIT);
    entries
}

/// Card tallies per (player, team), reds first then yellows.
pub fn card_leaders(cards: impl IntoIterator<Item = (PlayerForTeam, CardType)>) -> Vec<CardsEntry> {
    let mut entries = group_by_player_team(cards, |(yellow, red): &mut (i64, i64), card| match card {
        CardType::Yellow => *yellow += 1,
        CardType::Red => *red += 1,
    })
    .into_iter()
    .map(|(player, (yellow_cards, red_cards))| CardsEntry {
        player,
        yellow_cards,
        red_cards,
    })
    .collect::<Vec<_>>();

    entries.sort_by(|a, b| {
        b.red_cards
            .cmp(&a.red_cards)
            .then_with(|| b.yellow_cards.cmp(&a.yellow_cards))
    });
    entries.truncate(LEADERBOARD_LIMIT);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(player_id: i64, team_id: i64) -> PlayerForTeam {
        PlayerForTeam {
            player_id,
            first_name: format!("First{player_id}"),
            last_name: format!("Last{player_id}"),
            team_id,
            team_name: format!("Team {team_id}"),
        }
    }

    #[test]
    fn scorers_are_ranked_by_goals() {
        let goals = vec![
            (player(1, 10), GoalType::Regular),
            (player(2, 10), GoalType::Penalty),
            (player(2, 10), GoalType::FreeKick),
            (player(3, 20), GoalType::Regular),
            (player(2, 10), GoalType::Regular),
        ];

        let board = top_scorers(goals);

        let summary = board.iter().map(|e| (e.player.player_id, e.total_goals)).collect::<Vec<_>>();
        // 1 and 3 tie and keep the order they were first seen in
        assert_eq!(summary, [(2, 3), (1, 1), (3, 1)]);
    }

    #[test]
    fn own_goals_do_not_put_a_player_on_the_scorer_board() {
        let goals = vec![
            (player(1, 10), GoalType::OwnGoal),
            (player(2, 10), GoalType::Regular),
            (player(2, 10), GoalType::OwnGoal),
        ];

        let board = top_scorers(goals);

        assert_eq!(board.len(), 1);
        assert_eq!((board[0].player.player_id, board[0].total_goals), (2, 1));
    }

    #[test]
    fn a_transferred_player_appears_once_per_team() {
        let goals = vec![
            (player(1, 10), GoalType::Regular),
            (player(1, 20), GoalType::Regular),
            (player(1, 20), GoalType::Regular),
        ];

        let board = top_scorers(goals);

        let summary = board.iter().map(|e| (e.player.team_id, e.total_goals)).collect::<Vec<_>>();
        assert_eq!(summary, [(20, 2), (10, 1)]);
    }

    #[test]
    fn leaderboards_are_capped_and_never_contain_zero_counts() {
        let goals = (1..=30)
            .flat_map(|id| {
                let goal_type = if id % 5 == 0 { GoalType::OwnGoal } else { GoalType::Regular };
                std::iter::repeat_n((player(id, 1), goal_type), id as usize)
            })
            .collect::<Vec<_>>();
        let assists = (1..=25).map(|id| player(id, 1)).collect::<Vec<_>>();

        let scorers = top_scorers(goals);
        let assisters = top_assisters(assists);

        assert_eq!(scorers.len(), LEADERBOARD_LIMIT);
        assert!(scorers.iter().all(|e| e.total_goals > 0));
        assert!(scorers.windows(2).all(|w| w[0].total_goals >= w[1].total_goals));
        assert_eq!(scorers[0].player.player_id, 29);

        assert_eq!(assisters.len(), LEADERBOARD_LIMIT);
        assert!(assisters.iter().all(|e| e.total_assists > 0));
    }

    #[test]
    fn reds_outrank_yellows_on_the_card_board() {
        let cards = vec![
            (player(2, 10), CardType::Yellow),
            (player(2, 10), CardType::Yellow),
            (player(2, 10), CardType::Yellow),
            (player(2, 10), CardType::Yellow),
            (player(1, 10), CardType::Yellow),
            (player(1, 10), CardType::Yellow),
            (player(1, 10), CardType::Yellow),
            (player(1, 10), CardType::Red),
            (player(3, 20), CardType::Red),
        ];

        let board = card_leaders(cards);

        let summary = board
            .iter()
            .map(|e| (e.player.player_id, e.yellow_cards, e.red_cards))
            .collect::<Vec<_>>();
        assert_eq!(summary, [(1, 3, 1), (3, 0, 1), (2, 4, 0)]);
    }

    #[test]
    fn players_without_cards_are_absent() {
        // Player Y has no card events at all, so never reaches the board.
        let board = card_leaders(vec![
            (player(1, 10), CardType::Yellow),
            (player(1, 10), CardType::Yellow),
            (player(1, 10), CardType::Yellow),
            (player(1, 10), CardType::Red),
        ]);

        assert_eq!(board.len(), 1);
        assert_eq!((board[0].yellow_cards, board[0].red_cards), (3, 1));
    }

    #[test]
    fn entries_serialize_with_player_fields_inline() {
        let board = top_assisters(vec![player(7, 3)]);
        let json = serde_json::to_value(&board).expect("serializes");

        assert_eq!(
            json,
            serde_json::json!([{
                "id": 7,
                "first_name": "First7",
                "last_name": "Last7",
                "team_id": 3,
                "team_name": "Team 3",
                "total_assists": 1,
            }])
        );
    }
}
