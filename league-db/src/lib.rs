mod url;
mod schema;
pub mod db;
pub mod enums;
pub mod migrations;
pub mod models;
pub mod stats;

pub use url::*;

pub use diesel::{Connection, PgConnection};
pub type QueryError = diesel::result::Error;
