use league_db::models::{
    CardListing, GoalListing, LineupListing, MatchDetail, MatchListing, NewAppearance, NewLineupEntry,
    NewMatch, NewMatchCard, NewMatchGoal,
};
use rocket::serde::json::Json;
use rocket::{delete, get, post, put};

use super::{ApiError, ApiResult, Confirmation, added, created, touched};
use crate::Db;

#[get("/matches?<championship_id>")]
pub async fn list(db: Db, championship_id: Option<i64>) -> ApiResult<Vec<MatchListing>> {
    Ok(Json(db.run(move |conn| league_db::db::list_matches(conn, championship_id)).await?))
}

#[get("/matches/<id>")]
pub async fn show(db: Db, id: i64) -> ApiResult<MatchDetail> {
    db.run(move |conn| league_db::db::get_match_detail(conn, id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Match"))
}

#[post("/matches", data = "<body>")]
pub async fn create(db: Db, body: Json<NewMatch>) -> Confirmation {
    let id = db.run(move |conn| league_db::db::create_match(conn, &body)).await?;
    created("Match created", id)
}

#[put("/matches/<id>", data = "<body>")]
pub async fn update(db: Db, id: i64, body: Json<NewMatch>) -> Confirmation {
    let rows = db.run(move |conn| league_db::db::update_match(conn, id, &body)).await?;
    touched(rows, "Match", "Match updated")
}

#[delete("/matches/<id>")]
pub async fn remove(db: Db, id: i64) -> Confirmation {
    let rows = db.run(move |conn| league_db::db::delete_match(conn, id)).await?;
    touched(rows, "Match", "Match deleted")
}

#[get("/matches/lineup/<id>")]
pub async fn lineup(db: Db, id: i64) -> ApiResult<Vec<LineupListing>> {
    Ok(Json(db.run(move |conn| league_db::db::lineup_for_match(conn, id)).await?))
}

#[get("/matches/goals/<id>")]
pub async fn goals(db: Db, id: i64) -> ApiResult<Vec<GoalListing>> {
    Ok(Json(db.run(move |conn| league_db::db::goals_for_match(conn, id)).await?))
}

#[get("/matches/cards/<id>")]
pub async fn cards(db: Db, id: i64) -> ApiResult<Vec<CardListing>> {
    Ok(Json(db.run(move |conn| league_db::db::cards_for_match(conn, id)).await?))
}

#[post("/matches/goal", data = "<body>")]
pub async fn add_goal(db: Db, body: Json<NewMatchGoal>) -> Confirmation {
    db.run(move |conn| league_db::db::add_goal(conn, &body)).await?;
    added("Goal added")
}

#[post("/matches/card", data = "<body>")]
pub async fn add_card(db: Db, body: Json<NewMatchCard>) -> Confirmation {
    db.run(move |conn| league_db::db::add_card(conn, &body)).await?;
    added("Card added")
}

#[post("/matches/lineup", data = "<body>")]
pub async fn add_lineup_entry(db: Db, body: Json<NewLineupEntry>) -> Confirmation {
    db.run(move |conn| league_db::db::add_lineup_entry(conn, &body)).await?;
    added("Player added to lineup")
}

#[post("/matches/appearance", data = "<body>")]
pub async fn record_appearance(db: Db, body: Json<NewAppearance>) -> Confirmation {
    db.run(move |conn| league_db::db::record_appearance(conn, &body)).await?;
    added("Appearance recorded")
}

pub fn routes() -> Vec<rocket::Route> {
    rocket::routes![
        list,
        show,
        create,
        update,
        remove,
        lineup,
        goals,
        cards,
        add_goal,
        add_card,
        add_lineup_entry,
        record_appearance,
    ]
}
