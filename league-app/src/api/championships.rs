use league_db::models::{DbChampionship, NewChampionship, NewTeamChampionship};
use league_db::stats::{AssisterEntry, CardsEntry, ScorerEntry, Standing};
use rocket::serde::json::Json;
use rocket::{delete, get, post, put};
use serde::Deserialize;

use super::{ApiError, ApiResult, Confirmation, created, done, touched};
use crate::Db;

#[get("/championships")]
pub async fn list(db: Db) -> ApiResult<Vec<DbChampionship>> {
    Ok(Json(db.run(|conn| league_db::db::list_championships(conn)).await?))
}

#[get("/championships/<id>")]
pub async fn show(db: Db, id: i64) -> ApiResult<DbChampionship> {
    db.run(move |conn| league_db::db::get_championship(conn, id))
        .await?
        .map(Json)
        .ok_or(ApiError::NotFound("Championship"))
}

#[post("/championships", data = "<body>")]
pub async fn create(db: Db, body: Json<NewChampionship>) -> Confirmation {
    let id = db.run(move |conn| league_db::db::create_championship(conn, &body)).await?;
    created("Championship created", id)
}

#[put("/championships/<id>", data = "<body>")]
pub async fn update(db: Db, id: i64, body: Json<NewChampionship>) -> Confirmation {
    let rows = db.run(move |conn| league_db::db::update_championship(conn, id, &body)).await?;
    touched(rows, "Championship", "Championship updated")
}

#[delete("/championships/<id>")]
pub async fn remove(db: Db, id: i64) -> Confirmation {
    let rows = db.run(move |conn| league_db::db::delete_championship(conn, id)).await?;
    touched(rows, "Championship", "Championship deleted")
}

#[get("/championships/standings/<id>")]
pub async fn standings(db: Db, id: i64) -> ApiResult<Vec<Standing>> {
    Ok(Json(db.run(move |conn| league_db::db::championship_standings(conn, id)).await?))
}

#[get("/championships/scorers/<id>")]
pub async fn scorers(db: Db, id: i64) -> ApiResult<Vec<ScorerEntry>> {
    Ok(Json(db.run(move |conn| league_db::db::championship_top_scorers(conn, id)).await?))
}

#[get("/championships/assisters/<id>")]
pub async fn assisters(db: Db, id: i64) -> ApiResult<Vec<AssisterEntry>> {
    Ok(Json(db.run(move |conn| league_db::db::championship_top_assisters(conn, id)).await?))
}

#[get("/championships/cards/<id>")]
pub async fn cards(db: Db, id: i64) -> ApiResult<Vec<CardsEntry>> {
    Ok(Json(db.run(move |conn| league_db::db::championship_card_leaders(conn, id)).await?))
}

#[derive(Debug, Default, Deserialize)]
pub struct RegistrationBody {
    pub finish_position: Option<i32>,
}

#[put("/championships/<id>/teams/<team_id>", data = "<body>")]
pub async fn register_team(db: Db, id: i64, team_id: i64, body: Option<Json<RegistrationBody>>) -> Confirmation {
    let registration = NewTeamChampionship {
        team_id,
        championship_id: id,
        finish_position: body.map(|b| b.into_inner()).unwrap_or_default().finish_position,
    };
    db.run(move |conn| league_db::db::register_team(conn, &registration)).await?;
    done("Team registered")
}

#[delete("/championships/<id>/teams/<team_id>")]
pub async fn unregister_team(db: Db, id: i64, team_id: i64) -> Confirmation {
    let rows = db.run(move |conn| league_db::db::unregister_team(conn, id, team_id)).await?;
    touched(rows, "Registration", "Team unregistered")
}

pub fn routes() -> Vec<rocket::Route> {
    rocket::routes![
        list,
        show,
        create,
        update,
        remove,
        standings,
        scorers,
        assisters,
        cards,
        register_team,
        unregister_team,
    ]
}
