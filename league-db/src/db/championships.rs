use diesel::pg::upsert::excluded;
use diesel::{PgConnection, prelude::*};

use super::crud_fns;
use crate::enums::{CardType, GoalType};
use crate::models::{DbChampionship, DbMatch, NewChampionship, NewTeamChampionship};
use crate::schema::{championships, match_cards, match_goals, matches, players, team_championships, teams};
use crate::stats::{
    self, AssisterEntry, CardsEntry, PlayerForTeam, RegisteredTeam, ScorerEntry, Standing,
};

crud_fns!(
    championships, NewChampionship, DbChampionship,
    get: get_championship,
    create: create_championship,
    update: update_championship,
    delete: delete_championship,
);

pub fn list_championships(conn: &mut PgConnection) -> QueryResult<Vec<DbChampionship>> {
    championships::table
        .select(DbChampionship::as_select())
        .order_by((
            championships::year.desc(),
            championships::start_date.desc().nulls_last(),
            championships::id,
        ))
        .load(conn)
}

pub fn championship_matches(conn: &mut PgConnection, championship_id: i64) -> QueryResult<Vec<DbMatch>> {
    matches::table
        .filter(matches::championship_id.eq(championship_id))
        .select(DbMatch::as_select())
        .order_by(matches::id)
        .load(conn)
}

/// The league table. A championship nobody is registered in, or one that
/// doesn't exist, has an empty table.
pub fn championship_standings(conn: &mut PgConnection, championship_id: i64) -> QueryResult<Vec<Standing>> {
    let registered = team_championships::table
        .inner_join(teams::table)
        .filter(team_championships::championship_id.eq(championship_id))
        .select((
            teams::id,
            teams::name,
            teams::short_name,
            team_championships::finish_position,
        ))
        .load::<RegisteredTeam>(conn)?;

    if registered.is_empty() {
        return Ok(Vec::new());
    }

    let results = championship_matches(conn, championship_id)?;
    Ok(stats::compute_standings(registered, &results))
}

pub fn championship_top_scorers(conn: &mut PgConnection, championship_id: i64) -> QueryResult<Vec<ScorerEntry>> {
    let goals = match_goals::table
        .inner_join(matches::table)
        .inner_join(teams::table)
        .inner_join(players::table.on(players::id.eq(match_goals::player_id)))
        .filter(matches::championship_id.eq(championship_id))
        .select((
            (players::id, players::first_name, players::last_name, teams::id, teams::name),
            match_goals::goal_type,
        ))
        .order_by(match_goals::id)
        .load::<(PlayerForTeam, GoalType)>(conn)?;

    Ok(stats::top_scorers(goals))
}

pub fn championship_top_assisters(
    conn: &mut PgConnection,
    championship_id: i64,
) -> QueryResult<Vec<AssisterEntry>> {
    let assists = match_goals::table
        .inner_join(matches::table)
        .inner_join(teams::table)
        .inner_join(players::table.on(players::id.nullable().eq(match_goals::assist_player_id)))
        .filter(matches::championship_id.eq(championship_id))
        .select((players::id, players::first_name, players::last_name, teams::id, teams::name))
        .order_by(match_goals::id)
        .load::<PlayerForTeam>(conn)?;

    Ok(stats::top_assisters(assists))
}

pub fn championship_card_leaders(conn: &mut PgConnection, championship_id: i64) -> QueryResult<Vec<CardsEntry>> {
    let cards = match_cards::table
        .inner_join(matches::table)
        .inner_join(players::table)
        .inner_join(teams::table)
        .filter(matches::championship_id.eq(championship_id))
        .select((
            (players::id, players::first_name, players::last_name, teams::id, teams::name),
            match_cards::card_type,
        ))
        .order_by(match_cards::id)
        .load::<(PlayerForTeam, CardType)>(conn)?;

    Ok(stats::card_leaders(cards))
}

/// Registers the team in the championship, or updates its finish position if
/// it already is.
pub fn register_team(conn: &mut PgConnection, registration: &NewTeamChampionship) -> QueryResult<usize> {
    diesel::insert_into(team_championships::table)
        .values(registration)
        .on_conflict((team_championships::team_id, team_championships::championship_id))
        .do_update()
        .set(team_championships::finish_position.eq(excluded(team_championships::finish_position)))
        .execute(conn)
}

pub fn unregister_team(conn: &mut PgConnection, championship_id: i64, team_id: i64) -> QueryResult<usize> {
    diesel::delete(team_championships::table.find((team_id, championship_id))).execute(conn)
}
