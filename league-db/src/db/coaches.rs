use diesel::{PgConnection, prelude::*};

use super::{crud_fns, team_names};
use crate::enums::MatchStatus;
use crate::models::{DbCoach, DbMatch, NewCoach};
use crate::schema::{coaches, matches};
use crate::stats::{self, CoachRecord};

crud_fns!(
    coaches, NewCoach, DbCoach,
    get: get_coach,
    create: create_coach,
    update: update_coach,
    delete: delete_coach,
);

pub fn list_coaches(conn: &mut PgConnection) -> QueryResult<Vec<DbCoach>> {
    coaches::table
        .select(DbCoach::as_select())
        .order_by((coaches::last_name, coaches::first_name, coaches::id))
        .load(conn)
}

pub fn coach_records(conn: &mut PgConnection, coach_id: i64) -> QueryResult<Vec<CoachRecord>> {
    let directed = matches::table
        .filter(matches::match_status.eq(MatchStatus::Completed))
        .filter(
            matches::home_coach_id
                .eq(coach_id)
                .or(matches::away_coach_id.eq(coach_id)),
        )
        .select(DbMatch::as_select())
        .load(conn)?;

    if directed.is_empty() {
        return Ok(Vec::new());
    }

    let names = team_names(conn)?;
    Ok(stats::coach_records(coach_id, &directed, &names))
}
