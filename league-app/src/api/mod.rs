mod championships;
mod coaches;
mod error;
mod matches;
mod players;
mod referees;
mod teams;

pub use error::ApiError;

use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{Catcher, Request, Route};
use serde::Serialize;

/// The body of every non-data response: confirmations and errors alike.
#[derive(Debug, Serialize)]
pub struct Message {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl Message {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            id: None,
        }
    }

    pub fn with_id(message: impl Into<String>, id: i64) -> Self {
        Self {
            message: message.into(),
            id: Some(id),
        }
    }
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;
pub type Confirmation = Result<(Status, Json<Message>), ApiError>;

pub(crate) fn created(message: &str, id: i64) -> Confirmation {
    Ok((Status::Created, Json(Message::with_id(message, id))))
}

pub(crate) fn added(message: &str) -> Confirmation {
    Ok((Status::Created, Json(Message::new(message))))
}

pub(crate) fn done(message: &str) -> Confirmation {
    Ok((Status::Ok, Json(Message::new(message))))
}

/// `Ok` when at least one row was touched, otherwise a 404 naming `what`.
pub(crate) fn touched(rows: usize, what: &'static str, message: &str) -> Confirmation {
    if rows == 0 {
        Err(ApiError::NotFound(what))
    } else {
        done(message)
    }
}

#[rocket::get("/")]
pub async fn index() -> &'static str {
    "This is the football league API."
}

pub fn routes() -> Vec<Route> {
    let mut routes = rocket::routes![index];
    routes.extend(championships::routes());
    routes.extend(teams::routes());
    routes.extend(players::routes());
    routes.extend(coaches::routes());
    routes.extend(referees::routes());
    routes.extend(matches::routes());
    routes
}

#[rocket::catch(default)]
fn default_catcher(status: Status, _req: &Request) -> (Status, Json<Message>) {
    let message = match status.code {
        404 => "Endpoint not found",
        400 => "Malformed request",
        422 => "Invalid or incomplete data",
        500 => "Operation failed",
        _ => status.reason().unwrap_or("Request failed"),
    };

    (status, Json(Message::new(message)))
}

pub fn catchers() -> Vec<Catcher> {
    rocket::catchers![default_catcher]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_no_rows_is_not_found() {
        let result = touched(0, "Team", "Team updated");

        let Err(err) = result else {
            panic!("expected an error, got {result:?}");
        };
        assert!(matches!(err, ApiError::NotFound("Team")));
        assert_eq!(err.status(), Status::NotFound);
    }

    #[test]
    fn touching_a_row_confirms() {
        let (status, Json(message)) = touched(1, "Team", "Team deleted").expect("confirmation");

        assert_eq!(status, Status::Ok);
        assert_eq!(message.message, "Team deleted");
        assert_eq!(message.id, None);
    }
}
