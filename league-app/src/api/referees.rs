use league_db::models::{DbReferee, NewReferee, RefereedMatch};
use league_db::stats::RefereeStats;
use rocket::serde::json::Json;
use rocket::{delete, get, post, put};

use super::{ApiError, ApiResult, Confirmation, created, touched};
use crate::Db;

#[get("/referees")]
pub async fn list(db: Db) -> ApiResult<Vec<DbReferee>> {
    Ok(Json(db.run(|conn| league_db::db::list_referees(conn)).await?))
}

#[get("/referees/<id>")]
pub async fn show(db: Db, id: i64) -> ApiResult<DbReferee> {
    db.run(move |conn| league_db::db::get_referee(conn, id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Referee"))
}

#[post("/referees", data = "<body>")]
pub async fn create(db: Db, body: Json<NewReferee>) -> Confirmation {
    let id = db.run(move |conn| league_db::db::create_referee(conn, &body)).await?;
    created("Referee created", id)
}

#[put("/referees/<id>", data = "<body>")]
pub async fn update(db: Db, id: i64, body: Json<NewReferee>) -> Confirmation {
    let rows = db.run(move |conn| league_db::db::update_referee(conn, id, &body)).await?;
    touched(rows, "Referee", "Referee updated")
}

#[delete("/referees/<id>")]
pub async fn remove(db: Db, id: i64) -> Confirmation {
    let rows = db.run(move |conn| league_db::db::delete_referee(conn, id)).await?;
    touched(rows, "Referee", "Referee deleted")
}

#[get("/referees/stats/<id>")]
pub async fn stats(db: Db, id: i64) -> ApiResult<RefereeStats> {
    Ok(Json(db.run(move |conn| league_db::db::referee_stats(conn, id)).await?))
}

#[get("/referees/matches/<id>")]
pub async fn matches(db: Db, id: i64) -> ApiResult<Vec<RefereedMatch>> {
    Ok(Json(db.run(move |conn| league_db::db::referee_matches(conn, id)).await?))
}

pub fn routes() -> Vec<rocket::Route> {
    rocket::routes![list, show, create, update, remove, stats, matches]
}
