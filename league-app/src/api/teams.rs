use league_db::models::{DbTeam, NewTeam};
use league_db::stats::{HeadToHead, TeamChampionshipRecord, TeamScorer, TeamSeason, Title};
use rocket::serde::json::Json;
use rocket::{delete, get, post, put};

use super::{ApiError, ApiResult, Confirmation, created, touched};
use crate::Db;

#[get("/teams")]
pub async fn list(db: Db) -> ApiResult<Vec<DbTeam>> {
    Ok(Json(db.run(|conn| league_db::db::list_teams(conn)).await?))
}

#[get("/teams/<id>")]
pub async fn show(db: Db, id: i64) -> ApiResult<DbTeam> {
    db.run(move |conn| league_db::db::get_team(conn, id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Team"))
}

#[post("/teams", data = "<body>")]
pub async fn create(db: Db, body: Json<NewTeam>) -> Confirmation {
    let id = db.run(move |conn| league_db::db::create_team(conn, &body)).await?;
    created("Team created", id)
}

#[put("/teams/<id>", data = "<body>")]
pub async fn update(db: Db, id: i64, body: Json<NewTeam>) -> Confirmation {
    let rows = db.run(move |conn| league_db::db::update_team(conn, id, &body)).await?;
    touched(rows, "Team", "Team updated")
}

#[delete("/teams/<id>")]
pub async fn remove(db: Db, id: i64) -> Confirmation {
    let rows = db.run(move |conn| league_db::db::delete_team(conn, id)).await?;
    touched(rows, "Team", "Team deleted")
}

#[get("/teams/head-to-head/<team1>/<team2>")]
pub async fn head_to_head(db: Db, team1: i64, team2: i64) -> ApiResult<HeadToHead> {
    Ok(Json(db.run(move |conn| league_db::db::head_to_head(conn, team1, team2)).await?))
}

#[get("/teams/stats/<id>")]
pub async fn seasons(db: Db, id: i64) -> ApiResult<Vec<TeamSeason>> {
    Ok(Json(db.run(move |conn| league_db::db::team_seasons(conn, id)).await?))
}

#[get("/teams/stats/<id>/<championship_id>")]
pub async fn championship_record(db: Db, id: i64, championship_id: i64) -> ApiResult<TeamChampionshipRecord> {
    db.run(move |conn| league_db::db::team_championship_record(conn, id, championship_id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Team registration"))
}

#[get("/teams/titles/<id>")]
pub async fn titles(db: Db, id: i64) -> ApiResult<Vec<Title>> {
    Ok(Json(db.run(move |conn| league_db::db::team_titles(conn, id)).await?))
}

#[get("/teams/top-scorers/<id>")]
pub async fn top_scorers(db: Db, id: i64) -> ApiResult<Vec<TeamScorer>> {
    Ok(Json(db.run(move |conn| league_db::db::team_top_scorers(conn, id)).await?))
}

pub fn routes() -> Vec<rocket::Route> {
    rocket::routes![
        list,
        show,
        create,
        update,
        remove,
        head_to_head,
        seasons,
        championship_record,
        titles,
        top_scorers,
    ]
}
