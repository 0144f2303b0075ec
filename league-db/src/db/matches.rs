use diesel::pg::upsert::excluded;
use diesel::{PgConnection, prelude::*, sql_query, sql_types::*};

use super::crud_fns;
use crate::models::{
    CardListing, DbMatch, GoalListing, LineupListing, MatchDetail, MatchListing, NewAppearance,
    NewLineupEntry, NewMatch, NewMatchCard, NewMatchGoal,
};
use crate::schema::{match_cards, match_goals, match_lineups, player_match_stats};

crud_fns!(
    matches, NewMatch, DbMatch,
    get: get_match,
    create: create_match,
    update: update_match,
    delete: delete_match,
);

const MATCH_LISTING_COLUMNS: &str = "
    select
        m.*,
        home_team.name as home_team_name,
        away_team.name as away_team_name,
        c.name as championship_name,
        r.first_name || ' ' || r.last_name as referee_name
";

const MATCH_LISTING_FROM: &str = "
    from matches m
        join teams home_team on home_team.id = m.home_team_id
        join teams away_team on away_team.id = m.away_team_id
        join championships c on c.id = m.championship_id
        left join referees r on r.id = m.referee_id
";

const NEWEST_FIRST: &str = "order by m.match_date desc, m.match_time desc nulls last, m.id desc";

pub(crate) fn match_listing_sql(filter: &str, order: &str) -> String {
    format!("{MATCH_LISTING_COLUMNS} {MATCH_LISTING_FROM} {filter} {order}")
}

/// Every match, newest first, optionally only those of one championship.
pub fn list_matches(conn: &mut PgConnection, championship_id: Option<i64>) -> QueryResult<Vec<MatchListing>> {
    match championship_id {
        Some(championship_id) => sql_query(match_listing_sql("where m.championship_id = $1", NEWEST_FIRST))
            .bind::<Int8, _>(championship_id)
            .load(conn),
        None => sql_query(match_listing_sql("", NEWEST_FIRST)).load(conn),
    }
}

pub(crate) fn match_listings_by_id(conn: &mut PgConnection, match_ids: Vec<i64>) -> QueryResult<Vec<MatchListing>> {
    sql_query(match_listing_sql("where m.id = any($1)", NEWEST_FIRST))
        .bind::<Array<Int8>, _>(match_ids)
        .load(conn)
}

pub fn get_match_detail(conn: &mut PgConnection, match_id: i64) -> QueryResult<Option<MatchDetail>> {
    sql_query(format!(
        "{MATCH_LISTING_COLUMNS},
            home_team.short_name as home_team_short,
            away_team.short_name as away_team_short,
            c.year as championship_year,
            hc.first_name || ' ' || hc.last_name as home_coach_name,
            ac.first_name || ' ' || ac.last_name as away_coach_name
        {MATCH_LISTING_FROM}
            left join coaches hc on hc.id = m.home_coach_id
            left join coaches ac on ac.id = m.away_coach_id
        where m.id = $1"
    ))
    .bind::<Int8, _>(match_id)
    .get_result(conn)
    .optional()
}

pub fn lineup_for_match(conn: &mut PgConnection, match_id: i64) -> QueryResult<Vec<LineupListing>> {
    sql_query(
        "
        select
            ml.*,
            p.first_name || ' ' || p.last_name as player_name,
            p.position as player_position,
            t.name as team_name
        from match_lineups ml
            join players p on p.id = ml.player_id
            join teams t on t.id = ml.team_id
        where ml.match_id = $1
        order by t.id, ml.is_starter desc, ml.position nulls last, ml.id
    ",
    )
    .bind::<Int8, _>(match_id)
    .load(conn)
}

pub fn goals_for_match(conn: &mut PgConnection, match_id: i64) -> QueryResult<Vec<GoalListing>> {
    sql_query(
        "
        select
            mg.*,
            p.first_name || ' ' || p.last_name as scorer_name,
            a.first_name || ' ' || a.last_name as assist_name,
            t.name as team_name
        from match_goals mg
            join players p on p.id = mg.player_id
            left join players a on a.id = mg.assist_player_id
            join teams t on t.id = mg.team_id
        where mg.match_id = $1
        order by mg.minute, mg.id
    ",
    )
    .bind::<Int8, _>(match_id)
    .load(conn)
}

pub fn cards_for_match(conn: &mut PgConnection, match_id: i64) -> QueryResult<Vec<CardListing>> {
    sql_query(
        "
        select
            mc.*,
            p.first_name || ' ' || p.last_name as player_name,
            t.name as team_name
        from match_cards mc
            join players p on p.id = mc.player_id
            join teams t on t.id = mc.team_id
        where mc.match_id = $1
        order by mc.minute, mc.id
    ",
    )
    .bind::<Int8, _>(match_id)
    .load(conn)
}

pub fn add_goal(conn: &mut PgConnection, goal: &NewMatchGoal) -> QueryResult<i64> {
    diesel::insert_into(match_goals::table)
        .values(goal)
        .returning(match_goals::id)
        .get_result(conn)
}

pub fn add_card(conn: &mut PgConnection, card: &NewMatchCard) -> QueryResult<i64> {
    diesel::insert_into(match_cards::table)
        .values(card)
        .returning(match_cards::id)
        .get_result(conn)
}

/// Adds the player to the match lineup. A player already in the lineup has
/// their entry replaced.
pub fn add_lineup_entry(conn: &mut PgConnection, entry: &NewLineupEntry) -> QueryResult<i64> {
    use match_lineups::dsl;

    diesel::insert_into(dsl::match_lineups)
        .values(entry)
        .on_conflict((dsl::match_id, dsl::player_id))
        .do_update()
        .set((
            dsl::team_id.eq(excluded(dsl::team_id)),
            dsl::position.eq(excluded(dsl::position)),
            dsl::jersey_number.eq(excluded(dsl::jersey_number)),
            dsl::is_starter.eq(excluded(dsl::is_starter)),
        ))
        .returning(dsl::id)
        .get_result(conn)
}

/// Records the minutes a player spent on the pitch, replacing any earlier
/// figure for the same match.
pub fn record_appearance(conn: &mut PgConnection, appearance: &NewAppearance) -> QueryResult<usize> {
    use player_match_stats::dsl;

    diesel::insert_into(dsl::player_match_stats)
        .values(appearance)
        .on_conflict((dsl::player_id, dsl::match_id))
        .do_update()
        .set((
            dsl::team_id.eq(excluded(dsl::team_id)),
            dsl::minutes_played.eq(excluded(dsl::minutes_played)),
        ))
        .execute(conn)
}
