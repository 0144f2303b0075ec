use serde::Serialize;

use crate::enums::{CardType, GoalType};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RefereeStats {
    pub matches_refereed: i64,
    pub yellow_cards_issued: i64,
    pub red_cards_issued: i64,
    pub penalties_awarded: i64,
}

/// Tallies for a referee. Callers pass only data from completed matches the
/// referee officiated: the number of such matches, the cards shown in them
/// and the types of the goals scored in them.
pub fn referee_stats(
    matches_refereed: usize,
    cards: impl IntoIterator<Item = CardType>,
    goals: impl IntoIterator<Item = GoalType>,
) -> RefereeStats {
    let mut stats = RefereeStats {
        matches_refereed: matches_refereed as i64,
        ..RefereeStats::default()
    };

    for card in cards {
        match card {
            CardType::Yellow => stats.yellow_cards_issued += 1,
            CardType::Red => stats.red_cards_issued += 1,
        }
    }

    stats.penalties_awarded = goals
        .into_iter()
        .filter(|goal_type| *goal_type == GoalType::Penalty)
        .count() as i64;

    stats
}
