use diesel::Queryable;
use hashbrown::{HashMap, HashSet};
use serde::Serialize;

use crate::enums::{CardType, GoalType};
use crate::models::MatchListing;

/// One thing a player did in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contribution {
    Appearance { minutes: i32 },
    Goal(GoalType),
    Assist,
    Card(CardType),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerEvent {
    pub match_id: i64,
    pub championship_id: i64,
    pub contribution: Contribution,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub matches: i64,
    pub minutes: i64,
    pub goals: i64,
    pub assists: i64,
    pub yellow_cards: i64,
    pub red_cards: i64,
}

#[derive(Default)]
struct TotalsBuilder {
    totals: Totals,
    seen_matches: HashSet<i64>,
}

impl TotalsBuilder {
    fn add(&mut self, event: &PlayerEvent) {
        if self.seen_matches.insert(event.match_id) {
            self.totals.matches += 1;
        }

        match event.contribution {
            Contribution::Appearance { minutes } => self.totals.minutes += minutes as i64,
            Contribution::Goal(goal_type) if goal_type.counts_for_scorer() => self.totals.goals += 1,
            Contribution::Goal(_) => {}
            Contribution::Assist => self.totals.assists += 1,
            Contribution::Card(CardType::Yellow) => self.totals.yellow_cards += 1,
            Contribution::Card(CardType::Red) => self.totals.red_cards += 1,
        }
    }
}

fn totals<'a>(events: impl IntoIterator<Item = &'a PlayerEvent>) -> Totals {
    let mut builder = TotalsBuilder::default();
    for event in events {
        builder.add(event);
    }
    builder.totals
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CareerStats {
    pub total_matches: i64,
    pub total_minutes: i64,
    pub total_goals: i64,
    pub total_assists: i64,
    pub total_yellow_cards: i64,
    pub total_red_cards: i64,
}

impl From<Totals> for CareerStats {
    fn from(t: Totals) -> Self {
        Self {
            total_matches: t.matches,
            total_minutes: t.minutes,
            total_goals: t.goals,
            total_assists: t.assists,
            total_yellow_cards: t.yellow_cards,
            total_red_cards: t.red_cards,
        }
    }
}

/// All-time totals over every event involving the player. Any event in a
/// match counts that match as played, even without a recorded appearance.
pub fn career_stats(events: &[PlayerEvent]) -> CareerStats {
    totals(events).into()
}

#[derive(Debug, Clone, Queryable)]
pub struct ChampionshipInfo {
    pub id: i64,
    pub name: String,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChampionshipStats {
    pub id: i64,
    pub championship_name: String,
    pub year: i32,
    #[serde(flatten)]
    pub totals: Totals,
}

/// The player's totals split per championship, most recent year first.
/// Events whose championship isn't in `championships` are dropped.
pub fn stats_by_championship(
    events: &[PlayerEvent],
    championships: &[ChampionshipInfo],
) -> Vec<ChampionshipStats> {
    let mut builders: HashMap<i64, TotalsBuilder> = HashMap::new();
    for event in events {
        builders.entry(event.championship_id).or_default().add(event);
    }

    let mut stats = championships
        .iter()
        .filter_map(|championship| {
            let builder = builders.remove(&championship.id)?;
            Some(ChampionshipStats {
                id: championship.id,
                championship_name: championship.name.clone(),
                year: championship.year,
                totals: builder.totals,
            })
        })
        .collect::<Vec<_>>();

    stats.sort_by(|a, b| b.year.cmp(&a.year).then_with(|| b.id.cmp(&a.id)));
    stats
}

/// A goal the player scored, with enough of its match to work out who it
/// was scored against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Queryable)]
pub struct RivalGoal {
    pub team_id: i64,
    pub goal_type: GoalType,
    pub home_team_id: i64,
    pub away_team_id: i64,
}

impl RivalGoal {
    fn opponent(&self) -> i64 {
        if self.team_id == self.home_team_id {
            self.away_team_id
        } else {
            self.home_team_id
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RivalGoals {
    pub id: i64,
    pub team_name: String,
    pub goals_scored: i64,
}

/// Goals per opposing team, most goals first. Every goal the player is
/// credited with counts, own goals included. Teams missing from `team_names`
/// are reported with an empty name.
pub fn goals_by_rival(goals: &[RivalGoal], team_names: &HashMap<i64, String>) -> Vec<RivalGoals> {
    let mut counts: HashMap<i64, i64> = HashMap::new();
    for goal in goals {
        *counts.entry(goal.opponent()).or_default() += 1;
    }

    let mut rivals = counts
        .into_iter()
        .map(|(id, goals_scored)| RivalGoals {
            id,
            team_name: team_names.get(&id).cloned().unwrap_or_default(),
            goals_scored,
        })
        .collect::<Vec<_>>();

    rivals.sort_by(|a, b| b.goals_scored.cmp(&a.goals_scored).then_with(|| a.id.cmp(&b.id)));
    rivals
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerMatch {
    #[serde(flatten)]
    pub listing: MatchListing,
    pub minutes_played: i64,
    pub goals: i64,
    pub assists: i64,
    pub yellow_cards: i64,
    pub red_cards: i64,
}

/// Per-match lines for every listed match the player took part in, newest
/// first, cut to `limit` rows when a non-zero one is given.
pub fn player_matches(
    events: &[PlayerEvent],
    listings: Vec<MatchListing>,
    limit: Option<usize>,
) -> Vec<PlayerMatch> {
    let mut builders: HashMap<i64, TotalsBuilder> = HashMap::new();
    for event in events {
        builders.entry(event.match_id).or_default().add(event);
    }

    let mut lines = listings
        .into_iter()
        .filter_map(|listing| {
            let t = builders.remove(&listing.game.id)?.totals;
            Some(PlayerMatch {
                listing,
                minutes_played: t.minutes,
                goals: t.goals,
                assists: t.assists,
                yellow_cards: t.yellow_cards,
                red_cards: t.red_cards,
            })
        })
        .collect::<Vec<_>>();

    lines.sort_by(|a, b| {
        let (a, b) = (&a.listing.game, &b.listing.game);
        b.match_date
            .cmp(&a.match_date)
            .then_with(|| b.match_time.cmp(&a.match_time))
            .then_with(|| b.id.cmp(&a.id))
    });
    if let Some(limit) = limit.filter(|&limit| limit > 0) {
        lines.truncate(limit);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stats::test_support::*;

    fn event(match_id: i64, championship_id: i64, contribution: Contribution) -> PlayerEvent {
        PlayerEvent {
            match_id,
            championship_id,
            contribution,
        }
    }

    fn listing(id: i64) -> MatchListing {
        MatchListing {
            game: game(id, 1, 2, 1, 0),
            home_team_name: "Home".to_string(),
            away_team_name: "Away".to_string(),
            championship_name: "League".to_string(),
            referee_name: None,
        }
    }

    #[test]
    fn a_player_with_no_events_has_zero_totals() {
        assert_eq!(career_stats(&[]), CareerStats::default());
        assert!(stats_by_championship(&[], &[]).is_empty());
        assert!(goals_by_rival(&[], &HashMap::new()).is_empty());
        assert!(player_matches(&[], vec![listing(1)], None).is_empty());
    }

    #[test]
    fn career_counts_each_match_once() {
        let events = [
            event(1, 1, Contribution::Appearance { minutes: 90 }),
            event(1, 1, Contribution::Goal(GoalType::Regular)),
            event(1, 1, Contribution::Goal(GoalType::Penalty)),
            event(1, 1, Contribution::Card(CardType::Yellow)),
            event(2, 1, Contribution::Appearance { minutes: 45 }),
            event(2, 1, Contribution::Goal(GoalType::OwnGoal)),
            // Assisted without a recorded appearance.
            event(3, 2, Contribution::Assist),
            event(4, 2, Contribution::Card(CardType::Red)),
        ];

        assert_eq!(
            career_stats(&events),
            CareerStats {
                total_matches: 4,
                total_minutes: 135,
                total_goals: 2,
                total_assists: 1,
                total_yellow_cards: 1,
                total_red_cards: 1,
            }
        );
    }

    #[test]
    fn championship_breakdown_is_newest_first() {
        let championships = [
            ChampionshipInfo { id: 1, name: "Spring".to_string(), year: 2023 },
            ChampionshipInfo { id: 2, name: "Cup".to_string(), year: 2024 },
            ChampionshipInfo { id: 3, name: "League".to_string(), year: 2024 },
            ChampionshipInfo { id: 4, name: "Unplayed".to_string(), year: 2025 },
        ];
        let events = [
            event(1, 1, Contribution::Goal(GoalType::Regular)),
            event(2, 2, Contribution::Appearance { minutes: 30 }),
            event(3, 3, Contribution::Assist),
            event(4, 3, Contribution::Assist),
        ];

        let stats = stats_by_championship(&events, &championships);

        let order = stats.iter().map(|s| s.id).collect::<Vec<_>>();
        assert_eq!(order, [3, 2, 1]);
        assert_eq!((stats[0].totals.matches, stats[0].totals.assists), (2, 2));
        assert_eq!(stats[1].totals.minutes, 30);
        assert_eq!(stats[2].totals.goals, 1);
    }

    #[test]
    fn goals_are_credited_against_the_opposing_side() {
        // Player's team is 1. Two goals against team 2 (home and away), one
        // against team 3, and an own goal that still counts against team 3.
        let goals = [
            RivalGoal { team_id: 1, goal_type: GoalType::Regular, home_team_id: 1, away_team_id: 2 },
            RivalGoal { team_id: 1, goal_type: GoalType::Penalty, home_team_id: 2, away_team_id: 1 },
            RivalGoal { team_id: 1, goal_type: GoalType::FreeKick, home_team_id: 3, away_team_id: 1 },
            RivalGoal { team_id: 1, goal_type: GoalType::OwnGoal, home_team_id: 1, away_team_id: 3 },
        ];
        let names = [(2, "B".to_string()), (3, "C".to_string())].into_iter().collect();

        assert_eq!(
            goals_by_rival(&goals, &names),
            [
                RivalGoals { id: 2, team_name: "B".to_string(), goals_scored: 2 },
                RivalGoals { id: 3, team_name: "C".to_string(), goals_scored: 2 },
            ]
        );
    }

    #[test]
    fn own_goals_count_against_the_rival() {
        let goals = [
            RivalGoal { team_id: 1, goal_type: GoalType::Regular, home_team_id: 1, away_team_id: 2 },
            RivalGoal { team_id: 1, goal_type: GoalType::OwnGoal, home_team_id: 2, away_team_id: 1 },
        ];
        let names = [(2, "B".to_string())].into_iter().collect();

        assert_eq!(
            goals_by_rival(&goals, &names),
            [RivalGoals { id: 2, team_name: "B".to_string(), goals_scored: 2 }]
        );
    }

    #[test]
    fn player_matches_are_newest_first_and_limited() {
        let events = [
            event(1, 1, Contribution::Appearance { minutes: 90 }),
            event(2, 1, Contribution::Appearance { minutes: 60 }),
            event(2, 1, Contribution::Goal(GoalType::Regular)),
            event(3, 1, Contribution::Card(CardType::Red)),
        ];
        let listings = vec![listing(1), listing(2), listing(3), listing(4)];

        let all = player_matches(&events, listings.clone(), None);
        let ids = all.iter().map(|m| m.listing.game.id).collect::<Vec<_>>();
        assert_eq!(ids, [3, 2, 1]);
        assert_eq!((all[1].minutes_played, all[1].goals), (60, 1));
        assert_eq!(all[0].red_cards, 1);

        let limited = player_matches(&events, listings.clone(), Some(2));
        assert_eq!(limited.len(), 2);
        assert_eq!(limited[0].listing.game.id, 3);

        // Zero means no limit.
        let unlimited = player_matches(&events, listings, Some(0));
        assert_eq!(unlimited.len(), 3);
    }
}
