use diesel::deserialize::{self, FromSql, FromSqlRow};
use diesel::expression::AsExpression;
use diesel::pg::{Pg, PgValue};
use diesel::serialize::{self, IsNull, Output, ToSql};
use diesel::sql_types::Text;
use serde::{Deserialize, Serialize};
use std::io::Write;
use strum::{AsRefStr, EnumIter, EnumString};

// Enumerations are stored as snake_case text, guarded by check constraints
// in the migration. This wires the strum string forms into diesel.
macro_rules! text_enum {
    ($name:ident) => {
        impl ToSql<Text, Pg> for $name {
            fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
                out.write_all(self.as_ref().as_bytes())?;
                Ok(IsNull::No)
            }
        }

        impl FromSql<Text, Pg> for $name {
            fn from_sql(bytes: PgValue<'_>) -> deserialize::Result<Self> {
                let text = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
                Ok(text.parse()?)
            }
        }
    };
}

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash,
    Serialize, Deserialize, AsRefStr, EnumString, EnumIter, AsExpression, FromSqlRow,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ChampionshipFormat {
    #[default]
    League,
    Cup,
    Tournament,
}
text_enum!(ChampionshipFormat);

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash,
    Serialize, Deserialize, AsRefStr, EnumString, EnumIter, AsExpression, FromSqlRow,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
    Postponed,
    Cancelled,
}
text_enum!(MatchStatus);

#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash,
    Serialize, Deserialize, AsRefStr, EnumString, EnumIter, AsExpression, FromSqlRow,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum GoalType {
    #[default]
    Regular,
    Penalty,
    OwnGoal,
    FreeKick,
}
text_enum!(GoalType);

impl GoalType {
    /// Own goals are credited to the match score but never to the player
    /// who put the ball in the net.
    pub fn counts_for_scorer(self) -> bool {
        self != GoalType::OwnGoal
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash,
    Serialize, Deserialize, AsRefStr, EnumString, EnumIter, AsExpression, FromSqlRow,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CardType {
    Yellow,
    Red,
}
text_enum!(CardType);

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn text_forms_match_the_check_constraints() {
        let statuses = MatchStatus::iter().map(|s| s.as_ref().to_string()).collect::<Vec<_>>();
        assert_eq!(
            statuses,
            ["scheduled", "in_progress", "completed", "postponed", "cancelled"]
        );

        let goal_types = GoalType::iter().map(|g| g.as_ref().to_string()).collect::<Vec<_>>();
        assert_eq!(goal_types, ["regular", "penalty", "own_goal", "free_kick"]);

        assert_eq!(ChampionshipFormat::Tournament.as_ref(), "tournament");
        assert_eq!(CardType::Yellow.as_ref(), "yellow");
    }

    #[test]
    fn serde_and_strum_agree() {
        for status in MatchStatus::iter() {
            let json = serde_json_string(&status);
            assert_eq!(json, format!("\"{}\"", status.as_ref()));
            assert_eq!(status.as_ref().parse::<MatchStatus>().ok(), Some(status));
        }
    }

    #[test]
    fn unknown_text_is_rejected() {
        assert!("abandoned".parse::<MatchStatus>().is_err());
        assert!("Yellow".parse::<CardType>().is_err());
    }

    #[test]
    fn own_goals_do_not_count_for_the_scorer() {
        assert!(GoalType::Regular.counts_for_scorer());
        assert!(GoalType::Penalty.counts_for_scorer());
        assert!(GoalType::FreeKick.counts_for_scorer());
        assert!(!GoalType::OwnGoal.counts_for_scorer());
    }

    fn serde_json_string<T: Serialize>(value: &T) -> String {
        serde_json::to_string(value).expect("enum serializes")
    }
}
