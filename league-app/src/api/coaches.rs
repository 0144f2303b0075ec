use league_db::models::{DbCoach, NewCoach};
use league_db::stats::CoachRecord;
use rocket::serde::json::Json;
use rocket::{delete, get, post, put};

use super::{ApiError, ApiResult, Confirmation, created, touched};
use crate::Db;

#[get("/coaches")]
pub async fn list(db: Db) -> ApiResult<Vec<DbCoach>> {
    Ok(Json(db.run(|conn| league_db::db::list_coaches(conn)).await?))
}

#[get("/coaches/<id>")]
pub async fn show(db: Db, id: i64) -> ApiResult<DbCoach> {
    db.run(move |conn| league_db::db::get_coach(conn, id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Coach"))
}

#[post("/coaches", data = "<body>")]
pub async fn create(db: Db, body: Json<NewCoach>) -> Confirmation {
    let id = db.run(move |conn| league_db::db::create_coach(conn, &body)).await?;
    created("Coach created", id)
}

#[put("/coaches/<id>", data = "<body>")]
pub async fn update(db: Db, id: i64, body: Json<NewCoach>) -> Confirmation {
    let rows = db.run(move |conn| league_db::db::update_coach(conn, id, &body)).await?;
    touched(rows, "Coach", "Coach updated")
}

#[delete("/coaches/<id>")]
pub async fn remove(db: Db, id: i64) -> Confirmation {
    let rows = db.run(move |conn| league_db::db::delete_coach(conn, id)).await?;
    touched(rows, "Coach", "Coach deleted")
}

#[get("/coaches/stats/<id>")]
pub async fn records(db: Db, id: i64) -> ApiResult<Vec<CoachRecord>> {
    Ok(Json(db.run(move |conn| league_db::db::coach_records(conn, id)).await?))
}

pub fn routes() -> Vec<rocket::Route> {
    rocket::routes![list, show, create, update, remove, records]
}
