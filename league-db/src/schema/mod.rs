mod league_schema;

pub use league_schema::*;
