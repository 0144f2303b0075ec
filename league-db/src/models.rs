use chrono::{NaiveDate, NaiveTime};
use diesel::prelude::*;
use diesel::sql_types::{Int4, Int8, Nullable, Text};
use serde::{Deserialize, Serialize};

use crate::enums::{CardType, ChampionshipFormat, GoalType, MatchStatus};

// Every `New*` struct doubles as the request body for create and for full
// replacement on update, so `None` must be written as NULL in both paths.

#[derive(Debug, Clone, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::championships)]
#[diesel(treat_none_as_default_value = false, treat_none_as_null = true)]
pub struct NewChampionship {
    pub name: String,
    #[serde(default)]
    pub format: ChampionshipFormat,
    pub year: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub country: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Identifiable, Queryable, Selectable, QueryableByName)]
#[diesel(table_name = crate::schema::championships)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DbChampionship {
    pub id: i64,
    pub name: String,
    pub format: ChampionshipFormat,
    pub year: i32,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub country: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::teams)]
#[diesel(treat_none_as_default_value = false, treat_none_as_null = true)]
pub struct NewTeam {
    pub name: String,
    pub short_name: Option<String>,
    pub founded_year: Option<i32>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub stadium_home: Option<String>,
    pub logo_url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Identifiable, Queryable, Selectable, QueryableByName)]
#[diesel(table_name = crate::schema::teams)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DbTeam {
    pub id: i64,
    pub name: String,
    pub short_name: Option<String>,
    pub founded_year: Option<i32>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub stadium_home: Option<String>,
    pub logo_url: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::players)]
#[diesel(treat_none_as_default_value = false, treat_none_as_null = true)]
pub struct NewPlayer {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub position: Option<String>,
    pub jersey_number: Option<i32>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub current_team_id: Option<i64>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Identifiable, Queryable, Selectable, QueryableByName)]
#[diesel(table_name = crate::schema::players)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DbPlayer {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub position: Option<String>,
    pub jersey_number: Option<i32>,
    pub height: Option<i32>,
    pub weight: Option<i32>,
    pub current_team_id: Option<i64>,
    pub photo_url: Option<String>,
}

/// A player together with the name of the team they currently play for.
#[derive(Debug, Clone, Serialize, QueryableByName)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PlayerWithTeam {
    #[diesel(embed)]
    #[serde(flatten)]
    pub player: DbPlayer,
    #[diesel(sql_type = Nullable<Text>)]
    pub team_name: Option<String>,
}

// Coaches and referees share a shape but not a table.

#[derive(Debug, Clone, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::coaches)]
#[diesel(treat_none_as_default_value = false, treat_none_as_null = true)]
pub struct NewCoach {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Identifiable, Queryable, Selectable, QueryableByName)]
#[diesel(table_name = crate::schema::coaches)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DbCoach {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::referees)]
#[diesel(treat_none_as_default_value = false, treat_none_as_null = true)]
pub struct NewReferee {
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Identifiable, Queryable, Selectable, QueryableByName)]
#[diesel(table_name = crate::schema::referees)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DbReferee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birth_date: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub photo_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Insertable, AsChangeset)]
#[diesel(table_name = crate::schema::matches)]
#[diesel(treat_none_as_default_value = false, treat_none_as_null = true)]
pub struct NewMatch {
    pub championship_id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub match_date: NaiveDate,
    pub match_time: Option<NaiveTime>,
    pub stadium: Option<String>,
    pub referee_id: Option<i64>,
    pub home_coach_id: Option<i64>,
    pub away_coach_id: Option<i64>,
    #[serde(default)]
    pub home_score: i32,
    #[serde(default)]
    pub away_score: i32,
    #[serde(default)]
    pub match_status: MatchStatus,
    pub round: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Identifiable, Queryable, Selectable, QueryableByName)]
#[diesel(table_name = crate::schema::matches)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DbMatch {
    pub id: i64,
    pub championship_id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub match_date: NaiveDate,
    pub match_time: Option<NaiveTime>,
    pub stadium: Option<String>,
    pub referee_id: Option<i64>,
    pub home_coach_id: Option<i64>,
    pub away_coach_id: Option<i64>,
    pub home_score: i32,
    pub away_score: i32,
    pub match_status: MatchStatus,
    pub round: Option<String>,
    pub notes: Option<String>,
}

impl DbMatch {
    pub fn is_completed(&self) -> bool {
        self.match_status == MatchStatus::Completed
    }

    /// `(scored, conceded)` for `team_id`, or `None` if it didn't play.
    pub fn score_for(&self, team_id: i64) -> Option<(i32, i32)> {
        if self.home_team_id == team_id {
            Some((self.home_score, self.away_score))
        } else if self.away_team_id == team_id {
            Some((self.away_score, self.home_score))
        } else {
            None
        }
    }

    /// True when the two sides of this match are exactly `a` and `b`, in
    /// either orientation.
    pub fn is_between(&self, a: i64, b: i64) -> bool {
        (self.home_team_id == a && self.away_team_id == b)
            || (self.home_team_id == b && self.away_team_id == a)
    }
}

/// A match with the names of everything it refers to, as shown in lists.
#[derive(Debug, Clone, Serialize, QueryableByName)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MatchListing {
    #[diesel(embed)]
    #[serde(flatten)]
    pub game: DbMatch,
    #[diesel(sql_type = Text)]
    pub home_team_name: String,
    #[diesel(sql_type = Text)]
    pub away_team_name: String,
    #[diesel(sql_type = Text)]
    pub championship_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub referee_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, QueryableByName)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct MatchDetail {
    #[diesel(embed)]
    #[serde(flatten)]
    pub listing: MatchListing,
    #[diesel(sql_type = Nullable<Text>)]
    pub home_team_short: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub away_team_short: Option<String>,
    #[diesel(sql_type = Int4)]
    pub championship_year: i32,
    #[diesel(sql_type = Nullable<Text>)]
    pub home_coach_name: Option<String>,
    #[diesel(sql_type = Nullable<Text>)]
    pub away_coach_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Insertable)]
#[diesel(table_name = crate::schema::match_goals)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewMatchGoal {
    pub match_id: i64,
    pub player_id: i64,
    pub team_id: i64,
    pub minute: i32,
    #[serde(default)]
    pub goal_type: GoalType,
    pub assist_player_id: Option<i64>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Insertable)]
#[diesel(table_name = crate::schema::match_cards)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewMatchCard {
    pub match_id: i64,
    pub player_id: i64,
    pub team_id: i64,
    pub card_type: CardType,
    pub minute: i32,
    pub reason: Option<String>,
}

fn default_starter() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Insertable)]
#[diesel(table_name = crate::schema::match_lineups)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewLineupEntry {
    pub match_id: i64,
    pub player_id: i64,
    pub team_id: i64,
    pub position: Option<String>,
    pub jersey_number: Option<i32>,
    #[serde(default = "default_starter")]
    pub is_starter: bool,
}

#[derive(Debug, Clone, Deserialize, Insertable)]
#[diesel(table_name = crate::schema::player_match_stats)]
pub struct NewAppearance {
    pub player_id: i64,
    pub match_id: i64,
    pub team_id: i64,
    #[serde(default)]
    pub minutes_played: i32,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::team_championships)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewTeamChampionship {
    pub team_id: i64,
    pub championship_id: i64,
    pub finish_position: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Identifiable, Queryable, Selectable, QueryableByName)]
#[diesel(table_name = crate::schema::match_goals)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DbMatchGoal {
    pub id: i64,
    pub match_id: i64,
    pub player_id: i64,
    pub team_id: i64,
    pub minute: i32,
    pub goal_type: GoalType,
    pub assist_player_id: Option<i64>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, QueryableByName)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct GoalListing {
    #[diesel(embed)]
    #[serde(flatten)]
    pub goal: DbMatchGoal,
    #[diesel(sql_type = Text)]
    pub scorer_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub assist_name: Option<String>,
    #[diesel(sql_type = Text)]
    pub team_name: String,
}

#[derive(Debug, Clone, Serialize, Identifiable, Queryable, Selectable, QueryableByName)]
#[diesel(table_name = crate::schema::match_cards)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DbMatchCard {
    pub id: i64,
    pub match_id: i64,
    pub player_id: i64,
    pub team_id: i64,
    pub card_type: CardType,
    pub minute: i32,
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, QueryableByName)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct CardListing {
    #[diesel(embed)]
    #[serde(flatten)]
    pub card: DbMatchCard,
    #[diesel(sql_type = Text)]
    pub player_name: String,
    #[diesel(sql_type = Text)]
    pub team_name: String,
}

#[derive(Debug, Clone, Serialize, Identifiable, Queryable, Selectable, QueryableByName)]
#[diesel(table_name = crate::schema::match_lineups)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DbLineupEntry {
    pub id: i64,
    pub match_id: i64,
    pub player_id: i64,
    pub team_id: i64,
    pub position: Option<String>,
    pub jersey_number: Option<i32>,
    pub is_starter: bool,
}

#[derive(Debug, Clone, Serialize, QueryableByName)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct LineupListing {
    #[diesel(embed)]
    #[serde(flatten)]
    pub entry: DbLineupEntry,
    #[diesel(sql_type = Text)]
    pub player_name: String,
    #[diesel(sql_type = Nullable<Text>)]
    pub player_position: Option<String>,
    #[diesel(sql_type = Text)]
    pub team_name: String,
}

/// A refereed match with the cards shown in it.
#[derive(Debug, Clone, Serialize, QueryableByName)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RefereedMatch {
    #[diesel(embed)]
    #[serde(flatten)]
    pub listing: MatchListing,
    #[diesel(sql_type = Int8)]
    pub yellow_cards: i64,
    #[diesel(sql_type = Int8)]
    pub red_cards: i64,
}
