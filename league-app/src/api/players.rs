use league_db::models::{NewPlayer, PlayerWithTeam};
use league_db::stats::{CareerStats, ChampionshipStats, PlayerMatch, RivalGoals};
use rocket::serde::json::Json;
use rocket::{delete, get, post, put};

use super::{ApiError, ApiResult, Confirmation, created, touched};
use crate::Db;

#[get("/players")]
pub async fn list(db: Db) -> ApiResult<Vec<PlayerWithTeam>> {
    Ok(Json(db.run(|conn| league_db::db::list_players(conn)).await?))
}

#[get("/players/<id>")]
pub async fn show(db: Db, id: i64) -> ApiResult<PlayerWithTeam> {
    db.run(move |conn| league_db::db::get_player_with_team(conn, id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Player"))
}

#[post("/players", data = "<body>")]
pub async fn create(db: Db, body: Json<NewPlayer>) -> Confirmation {
    let id = db.run(move |conn| league_db::db::create_player(conn, &body)).await?;
    created("Player created", id)
}

#[put("/players/<id>", data = "<body>")]
pub async fn update(db: Db, id: i64, body: Json<NewPlayer>) -> Confirmation {
    let rows = db.run(move |conn| league_db::db::update_player(conn, id, &body)).await?;
    touched(rows, "Player", "Player updated")
}

#[delete("/players/<id>")]
pub async fn remove(db: Db, id: i64) -> Confirmation {
    let rows = db.run(move |conn| league_db::db::delete_player(conn, id)).await?;
    touched(rows, "Player", "Player deleted")
}

// Ranked below the static `/players/<action>/<id>` routes, which would
// otherwise collide with it.
#[get("/players/<id>/stats", rank = 2)]
pub async fn career(db: Db, id: i64) -> ApiResult<CareerStats> {
    Ok(Json(db.run(move |conn| league_db::db::player_career_stats(conn, id)).await?))
}

#[get("/players/stats/<id>")]
pub async fn career_alias(db: Db, id: i64) -> ApiResult<CareerStats> {
    career(db, id).await
}

#[get("/players/by-championship/<id>")]
pub async fn by_championship(db: Db, id: i64) -> ApiResult<Vec<ChampionshipStats>> {
    Ok(Json(db.run(move |conn| league_db::db::player_stats_by_championship(conn, id)).await?))
}

#[get("/players/goals-by-rival/<id>")]
pub async fn goals_by_rival(db: Db, id: i64) -> ApiResult<Vec<RivalGoals>> {
    Ok(Json(db.run(move |conn| league_db::db::player_goals_by_rival(conn, id)).await?))
}

#[get("/players/matches/<id>?<limit>")]
pub async fn matches(db: Db, id: i64, limit: Option<usize>) -> ApiResult<Vec<PlayerMatch>> {
    Ok(Json(db.run(move |conn| league_db::db::player_matches(conn, id, limit)).await?))
}

pub fn routes() -> Vec<rocket::Route> {
    rocket::routes![
        list,
        show,
        create,
        update,
        remove,
        career,
        career_alias,
        by_championship,
        goals_by_rival,
        matches,
    ]
}
