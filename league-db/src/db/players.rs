use diesel::{PgConnection, prelude::*, sql_query, sql_types::*};
use itertools::Itertools;

use super::{crud_fns, team_names};
use crate::enums::{CardType, GoalType};
use crate::models::{DbPlayer, NewPlayer, PlayerWithTeam};
use crate::schema::{championships, match_cards, match_goals, matches, player_match_stats};
use crate::stats::{
    self, CareerStats, ChampionshipInfo, ChampionshipStats, Contribution, PlayerEvent, PlayerMatch,
    RivalGoal, RivalGoals,
};

crud_fns!(
    players, NewPlayer, DbPlayer,
    get: get_player,
    create: create_player,
    update: update_player,
    delete: delete_player,
);

const PLAYER_WITH_TEAM: &str = "
    select p.*, t.name as team_name
    from players p
        left join teams t on t.id = p.current_team_id
";

pub fn list_players(conn: &mut PgConnection) -> QueryResult<Vec<PlayerWithTeam>> {
    sql_query(format!("{PLAYER_WITH_TEAM} order by p.last_name, p.first_name, p.id"))
        .load::<PlayerWithTeam>(conn)
}

pub fn get_player_with_team(conn: &mut PgConnection, player_id: i64) -> QueryResult<Option<PlayerWithTeam>> {
    sql_query(format!("{PLAYER_WITH_TEAM} where p.id = $1"))
        .bind::<Int8, _>(player_id)
        .get_result::<PlayerWithTeam>(conn)
        .optional()
}

/// Everything the player did, as seen by the aggregates: appearances, goals
/// scored, goals assisted and cards received.
pub fn player_events(conn: &mut PgConnection, player_id: i64) -> QueryResult<Vec<PlayerEvent>> {
    let appearances = player_match_stats::table
        .inner_join(matches::table)
        .filter(player_match_stats::player_id.eq(player_id))
        .select((
            player_match_stats::match_id,
            matches::championship_id,
            player_match_stats::minutes_played,
        ))
        .load::<(i64, i64, i32)>(conn)?;

    let goals = match_goals::table
        .inner_join(matches::table)
        .filter(match_goals::player_id.eq(player_id))
        .select((match_goals::match_id, matches::championship_id, match_goals::goal_type))
        .load::<(i64, i64, GoalType)>(conn)?;

    let assists = match_goals::table
        .inner_join(matches::table)
        .filter(match_goals::assist_player_id.eq(player_id))
        .select((match_goals::match_id, matches::championship_id))
        .load::<(i64, i64)>(conn)?;

    let cards = match_cards::table
        .inner_join(matches::table)
        .filter(match_cards::player_id.eq(player_id))
        .select((match_cards::match_id, matches::championship_id, match_cards::card_type))
        .load::<(i64, i64, CardType)>(conn)?;

    let event = |match_id, championship_id, contribution| PlayerEvent {
        match_id,
        championship_id,
        contribution,
    };

    let events = appearances
        .into_iter()
        .map(|(m, c, minutes)| event(m, c, Contribution::Appearance { minutes }))
        .chain(goals.into_iter().map(|(m, c, goal_type)| event(m, c, Contribution::Goal(goal_type))))
        .chain(assists.into_iter().map(|(m, c)| event(m, c, Contribution::Assist)))
        .chain(cards.into_iter().map(|(m, c, card_type)| event(m, c, Contribution::Card(card_type))))
        .collect();

    Ok(events)
}

pub fn player_career_stats(conn: &mut PgConnection, player_id: i64) -> QueryResult<CareerStats> {
    Ok(stats::career_stats(&player_events(conn, player_id)?))
}

pub fn player_stats_by_championship(
    conn: &mut PgConnection,
    player_id: i64,
) -> QueryResult<Vec<ChampionshipStats>> {
    let events = player_events(conn, player_id)?;
    if events.is_empty() {
        return Ok(Vec::new());
    }

    let championship_ids = events.iter().map(|e| e.championship_id).unique().collect_vec();
    let infos = championships::table
        .filter(championships::id.eq_any(championship_ids))
        .select((championships::id, championships::name, championships::year))
        .load::<ChampionshipInfo>(conn)?;

    Ok(stats::stats_by_championship(&events, &infos))
}

pub fn player_goals_by_rival(conn: &mut PgConnection, player_id: i64) -> QueryResult<Vec<RivalGoals>> {
    let goals = match_goals::table
        .inner_join(matches::table)
        .filter(match_goals::player_id.eq(player_id))
        .select((
            match_goals::team_id,
            match_goals::goal_type,
            matches::home_team_id,
            matches::away_team_id,
        ))
        .load::<RivalGoal>(conn)?;

    if goals.is_empty() {
        return Ok(Vec::new());
    }

    let names = team_names(conn)?;
    Ok(stats::goals_by_rival(&goals, &names))
}

pub fn player_matches(
    conn: &mut PgConnection,
    player_id: i64,
    limit: Option<usize>,
) -> QueryResult<Vec<PlayerMatch>> {
    let events = player_events(conn, player_id)?;
    if events.is_empty() {
        return Ok(Vec::new());
    }

    let match_ids = events.iter().map(|e| e.match_id).unique().collect_vec();
    let listings = super::match_listings_by_id(conn, match_ids)?;

    Ok(stats::player_matches(&events, listings, limit))
}

