//! Read models derived from the match and event tables.
//!
//! Nothing in here talks to the database. The loaders in [`crate::db`] fetch
//! the relevant rows and hand them to these functions, which keeps every
//! aggregate a pure function of the authoritative event data.

mod career;
mod coach;
mod head_to_head;
mod leaderboard;
mod referee;
mod standings;
mod team;

pub use career::*;
pub use coach::*;
pub use head_to_head::*;
pub use leaderboard::*;
pub use referee::*;
pub use standings::*;
pub use team::*;

use serde::Serialize;

use crate::models::DbMatch;

pub const POINTS_FOR_WIN: i64 = 3;
pub const POINTS_FOR_DRAW: i64 = 1;

/// Maximum number of rows in a championship leaderboard.
pub const LEADERBOARD_LIMIT: usize = 20;

/// Maximum number of rows in a team's scorer list.
pub const TEAM_TOP_SCORERS_LIMIT: usize = 10;

/// Win/draw/loss record of one side over a set of completed matches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Record {
    pub played: i64,
    pub wins: i64,
    pub draws: i64,
    pub losses: i64,
    pub goals_for: i64,
    pub goals_against: i64,
}

impl Record {
    pub fn add_result(&mut self, scored: i32, conceded: i32) {
        self.played += 1;
        self.goals_for += scored as i64;
        self.goals_against += conceded as i64;

        if scored > conceded {
            self.wins += 1;
        } else if scored == conceded {
            self.draws += 1;
        } else {
            self.losses += 1;
        }
    }

    /// Adds `m` from `team_id`'s point of view. Matches that aren't completed
    /// or that `team_id` didn't play in are ignored.
    pub fn add_match(&mut self, team_id: i64, m: &DbMatch) {
        if !m.is_completed() {
            return;
        }

        if let Some((scored, conceded)) = m.score_for(team_id) {
            self.add_result(scored, conceded);
        }
    }

    pub fn points(&self) -> i64 {
        self.wins * POINTS_FOR_WIN + self.draws * POINTS_FOR_DRAW
    }

    pub fn goal_difference(&self) -> i64 {
        self.goals_for - self.goals_against
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;

    #[test]
    fn record_accumulates_points_and_goals() {
        let mut record = Record::default();
        record.add_result(3, 1);
        record.add_result(0, 0);
        record.add_result(1, 2);

        assert_eq!(record.played, 3);
        assert_eq!((record.wins, record.draws, record.losses), (1, 1, 1));
        assert_eq!(record.points(), 4);
        assert_eq!((record.goals_for, record.goals_against), (4, 3));
        assert_eq!(record.goal_difference(), 1);
    }

    #[test]
    fn record_reads_the_match_from_the_given_side() {
        let m = game(1, 10, 20, 2, 5);

        let mut home = Record::default();
        home.add_match(10, &m);
        let mut away = Record::default();
        away.add_match(20, &m);
        let mut bystander = Record::default();
        bystander.add_match(30, &m);

        assert_eq!((home.losses, home.goals_for, home.goals_against), (1, 2, 5));
        assert_eq!((away.wins, away.goals_for, away.goals_against), (1, 5, 2));
        assert_eq!(bystander, Record::default());
    }

    #[test]
    fn unfinished_matches_are_ignored() {
        let mut record = Record::default();
        record.add_match(10, &scheduled(1, 10, 20));

        assert_eq!(record, Record::default());
    }
}
