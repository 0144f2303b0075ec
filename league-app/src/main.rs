mod api;
mod config;

use config::LeagueConfig;
use log::{error, info};
use miette::Diagnostic;
use rocket::fairing::{self, AdHoc};
use rocket::{Build, Rocket};
use rocket_sync_db_pools::database as sync_database;
use rocket_sync_db_pools::diesel::PgConnection;
use thiserror::Error;

#[sync_database("league")]
pub struct Db(PgConnection);

#[derive(Debug, Error, Diagnostic)]
enum StartupError {
    #[error("invalid service configuration")]
    Config(#[source] figment::Error),

    #[error(transparent)]
    #[diagnostic(transparent)]
    DatabaseUrl(#[from] league_db::UrlError),

    #[error("invalid CORS configuration")]
    Cors(#[source] rocket_cors::Error),
}

async fn run_migrations(rocket: Rocket<Build>) -> fairing::Result {
    let config: rocket_sync_db_pools::Config = match rocket.figment().extract_inner("databases.league") {
        Ok(config) => config,
        Err(e) => {
            error!("league database connection information is missing: {e}");
            return Err(rocket);
        }
    };

    let result = tokio::task::spawn_blocking(move || league_db::migrations::run_migrations(&config.url)).await;

    match result {
        Ok(Ok(())) => Ok(rocket),
        Ok(Err(e)) => {
            error!("{:?}", miette::Report::new(e));
            Err(rocket)
        }
        Err(e) => {
            error!("Migrations task failed: {e}");
            Err(rocket)
        }
    }
}

fn rocket_figment(config: &LeagueConfig, database_url: String) -> figment::Figment {
    rocket::Config::figment()
        .merge(("databases.league.url", database_url))
        .merge(("databases.league.pool_size", config.db_pool_size))
}

/// CORS and the JSON catchers. Routes are mounted by the caller, because
/// any route taking `Db` refuses to launch without the database fairing.
fn base_rocket(config: &LeagueConfig, figment: figment::Figment) -> Result<Rocket<Build>, StartupError> {
    let cors = config.cors().map_err(StartupError::Cors)?;

    Ok(rocket::custom(figment)
        .attach(cors)
        .register("/", api::catchers()))
}

fn build_rocket() -> Result<Rocket<Build>, StartupError> {
    let config = LeagueConfig::load().map_err(StartupError::Config)?;
    let database_url = league_db::postgres_url_from_environment()?;

    let mut rocket = base_rocket(&config, rocket_figment(&config, database_url))?
        .mount("/api", api::routes())
        .attach(Db::fairing());
    if config.run_migrations {
        rocket = rocket.attach(AdHoc::try_on_ignite("Migrations", run_migrations));
    } else {
        info!("Skipping migrations");
    }

    Ok(rocket)
}

#[rocket::main]
async fn main() -> miette::Result<()> {
    let rocket = build_rocket()?;

    rocket
        .launch()
        .await
        .map_err(|e| miette::miette!("server failed: {e}"))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::ApiError;
    use rocket::http::{Header, Status};
    use rocket::local::blocking::Client;
    use serde_json::{Value, json};

    #[rocket::get("/missing")]
    fn missing() -> Result<&'static str, ApiError> {
        Err(ApiError::NotFound("Team"))
    }

    #[rocket::get("/gone")]
    fn gone() -> Result<&'static str, ApiError> {
        Err(ApiError::DbError(diesel::result::Error::NotFound))
    }

    #[rocket::get("/broken")]
    fn broken() -> Result<&'static str, ApiError> {
        Err(ApiError::DbError(diesel::result::Error::RollbackTransaction))
    }

    fn client() -> Client {
        let figment = rocket::Config::figment().merge(("log_level", "off"));
        let rocket = base_rocket(&LeagueConfig::default(), figment)
            .expect("valid configuration")
            .mount("/api", rocket::routes![api::index])
            .mount("/test", rocket::routes![missing, gone, broken]);

        Client::tracked(rocket).expect("valid rocket instance")
    }

    fn body(response: rocket::local::blocking::LocalResponse) -> Value {
        response.into_json::<Value>().expect("JSON body")
    }

    #[test]
    fn index_responds() {
        let client = client();
        let response = client.get("/api").dispatch();

        assert_eq!(response.status(), Status::Ok);
        assert_eq!(response.into_string().as_deref(), Some("This is the football league API."));
    }

    #[test]
    fn unknown_routes_get_a_json_404() {
        let client = client();
        let response = client.get("/api/stadiums").dispatch();

        assert_eq!(response.status(), Status::NotFound);
        assert_eq!(body(response), json!({ "message": "Endpoint not found" }));
    }

    #[test]
    fn errors_render_as_messages() {
        let client = client();

        let response = client.get("/test/missing").dispatch();
        assert_eq!(response.status(), Status::NotFound);
        assert_eq!(body(response), json!({ "message": "Team not found" }));

        let response = client.get("/test/gone").dispatch();
        assert_eq!(response.status(), Status::NotFound);
        assert_eq!(body(response), json!({ "message": "Resource not found" }));

        let response = client.get("/test/broken").dispatch();
        assert_eq!(response.status(), Status::InternalServerError);
        assert_eq!(body(response), json!({ "message": "Operation failed" }));
    }

    #[test]
    fn any_origin_is_allowed() {
        let client = client();
        let response = client
            .get("/api")
            .header(Header::new("Origin", "https://fans.example"))
            .dispatch();

        assert_eq!(response.status(), Status::Ok);
        assert_eq!(
            response.headers().get_one("Access-Control-Allow-Origin"),
            Some("https://fans.example")
        );
    }

    #[test]
    fn confirmations_carry_an_id_only_on_create() {
        let created = serde_json::to_value(api::Message::with_id("Team created", 4)).expect("serializes");
        assert_eq!(created, json!({ "message": "Team created", "id": 4 }));

        let updated = serde_json::to_value(api::Message::new("Team updated")).expect("serializes");
        assert_eq!(updated, json!({ "message": "Team updated" }));
    }
}
