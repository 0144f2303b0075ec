use diesel::{PgConnection, prelude::*};

use super::crud_fns;
use crate::enums::MatchStatus;
use crate::models::{DbMatch, DbTeam, NewTeam};
use crate::schema::{championships, match_goals, matches, player_match_stats, players, team_championships, teams};
use crate::stats::{
    self, HeadToHead, Registration, TeamChampionshipRecord, TeamGoal, TeamScorer, TeamSeason, Title,
};

crud_fns!(
    teams, NewTeam, DbTeam,
    get: get_team,
    create: create_team,
    update: update_team,
    delete: delete_team,
);

pub fn list_teams(conn: &mut PgConnection) -> QueryResult<Vec<DbTeam>> {
    teams::table
        .select(DbTeam::as_select())
        .order_by((teams::name, teams::id))
        .load(conn)
}

pub fn head_to_head(conn: &mut PgConnection, team1: i64, team2: i64) -> QueryResult<HeadToHead> {
    if team1 == team2 {
        return Ok(HeadToHead::default());
    }

    let meetings = matches::table
        .filter(matches::match_status.eq(MatchStatus::Completed))
        .filter(
            (matches::home_team_id.eq(team1).and(matches::away_team_id.eq(team2)))
                .or(matches::home_team_id.eq(team2).and(matches::away_team_id.eq(team1))),
        )
        .select(DbMatch::as_select())
        .load(conn)?;

    Ok(stats::head_to_head(team1, team2, &meetings))
}

fn registrations(conn: &mut PgConnection, team_id: i64) -> QueryResult<Vec<Registration>> {
    team_championships::table
        .inner_join(championships::table)
        .filter(team_championships::team_id.eq(team_id))
        .select((
            championships::id,
            championships::name,
            championships::year,
            championships::format,
            team_championships::finish_position,
        ))
        .load(conn)
}

fn completed_matches_of(conn: &mut PgConnection, team_id: i64) -> QueryResult<Vec<DbMatch>> {
    matches::table
        .filter(matches::match_status.eq(MatchStatus::Completed))
        .filter(matches::home_team_id.eq(team_id).or(matches::away_team_id.eq(team_id)))
        .select(DbMatch::as_select())
        .load(conn)
}

pub fn team_seasons(conn: &mut PgConnection, team_id: i64) -> QueryResult<Vec<TeamSeason>> {
    let registrations = registrations(conn, team_id)?;
    let played = completed_matches_of(conn, team_id)?;

    Ok(stats::team_seasons(team_id, registrations, &played))
}

/// `None` when the team isn't registered in the championship.
pub fn team_championship_record(
    conn: &mut PgConnection,
    team_id: i64,
    championship_id: i64,
) -> QueryResult<Option<TeamChampionshipRecord>> {
    let Some(registration) = registrations(conn, team_id)?
        .into_iter()
        .find(|r| r.championship_id == championship_id)
    else {
        return Ok(None);
    };

    let played = completed_matches_of(conn, team_id)?;
    Ok(Some(stats::team_championship_record(team_id, registration, &played)))
}

pub fn team_titles(conn: &mut PgConnection, team_id: i64) -> QueryResult<Vec<Title>> {
    Ok(stats::titles(registrations(conn, team_id)?))
}

pub fn team_top_scorers(conn: &mut PgConnection, team_id: i64) -> QueryResult<Vec<TeamScorer>> {
    let goals = match_goals::table
        .inner_join(players::table.on(players::id.eq(match_goals::player_id)))
        .filter(match_goals::team_id.eq(team_id))
        .select((
            players::id,
            players::first_name,
            players::last_name,
            match_goals::match_id,
            match_goals::goal_type,
        ))
        .order_by(match_goals::id)
        .load::<TeamGoal>(conn)?;

    let appearances = player_match_stats::table
        .filter(player_match_stats::team_id.eq(team_id))
        .select((player_match_stats::player_id, player_match_stats::match_id))
        .load::<(i64, i64)>(conn)?;

    Ok(stats::team_top_scorers(goals, &appearances))
}
