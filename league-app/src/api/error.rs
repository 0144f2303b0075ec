use log::{error, info};
use miette::Diagnostic;
use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use rocket::Request;
use thiserror::Error;

use crate::api::Message;

#[derive(Debug, Error, Diagnostic)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(&'static str),

    #[error(transparent)]
    DbError(#[from] diesel::result::Error),
}

impl ApiError {
    pub fn status(&self) -> Status {
        match self {
            ApiError::NotFound(_) | ApiError::DbError(diesel::result::Error::NotFound) => Status::NotFound,
            ApiError::DbError(_) => Status::InternalServerError,
        }
    }

    /// What the client sees. Database errors are only described in the log.
    fn public_message(&self) -> String {
        match self {
            ApiError::NotFound(_) => self.to_string(),
            ApiError::DbError(diesel::result::Error::NotFound) => "Resource not found".to_string(),
            ApiError::DbError(_) => "Operation failed".to_string(),
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, req: &'r Request<'_>) -> rocket::response::Result<'static> {
        let status = self.status();
        if status == Status::InternalServerError {
            error!("{} {}: {:#?}", req.method(), req.uri(), self);
        } else {
            info!("{} {}: {}", req.method(), req.uri(), self);
        }

        (status, Json(Message::new(self.public_message()))).respond_to(req)
    }
}
