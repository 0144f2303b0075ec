use diesel::{PgConnection, prelude::*, sql_query, sql_types::*};

use super::{crud_fns, match_listing_sql};
use crate::enums::{CardType, GoalType, MatchStatus};
use crate::models::{DbReferee, NewReferee, RefereedMatch};
use crate::schema::{match_cards, match_goals, matches, referees};
use crate::stats::{self, RefereeStats};

crud_fns!(
    referees, NewReferee, DbReferee,
    get: get_referee,
    create: create_referee,
    update: update_referee,
    delete: delete_referee,
);

pub fn list_referees(conn: &mut PgConnection) -> QueryResult<Vec<DbReferee>> {
    referees::table
        .select(DbReferee::as_select())
        .order_by((referees::last_name, referees::first_name, referees::id))
        .load(conn)
}

/// Tallies over the completed matches the referee officiated.
pub fn referee_stats(conn: &mut PgConnection, referee_id: i64) -> QueryResult<RefereeStats> {
    let officiated = matches::table
        .filter(matches::referee_id.eq(referee_id))
        .filter(matches::match_status.eq(MatchStatus::Completed));

    let match_ids = officiated.select(matches::id).load::<i64>(conn)?;
    if match_ids.is_empty() {
        return Ok(RefereeStats::default());
    }

    let cards = match_cards::table
        .filter(match_cards::match_id.eq_any(&match_ids))
        .select(match_cards::card_type)
        .load::<CardType>(conn)?;

    let goals = match_goals::table
        .filter(match_goals::match_id.eq_any(&match_ids))
        .select(match_goals::goal_type)
        .load::<GoalType>(conn)?;

    Ok(stats::referee_stats(match_ids.len(), cards, goals))
}

/// Every match the referee was assigned to, whatever its status, with the
/// cards shown in each.
pub fn referee_matches(conn: &mut PgConnection, referee_id: i64) -> QueryResult<Vec<RefereedMatch>> {
    let listing = match_listing_sql("where m.referee_id = $1", "");

    sql_query(format!(
        "
        with listing as ({listing}),
        card_counts as (
            select
                mc.match_id,
                count(*) filter (where mc.card_type = 'yellow') as yellow_cards,
                count(*) filter (where mc.card_type = 'red') as red_cards
            from match_cards mc
            group by mc.match_id
        )
        select
            listing.*,
            coalesce(card_counts.yellow_cards, 0) as yellow_cards,
            coalesce(card_counts.red_cards, 0) as red_cards
        from listing
            left join card_counts on card_counts.match_id = listing.id
        order by listing.match_date desc, listing.match_time desc nulls last, listing.id desc
    "
    ))
    .bind::<Int8, _>(referee_id)
    .load(conn)
}
