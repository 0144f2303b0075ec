mod championships;
mod coaches;
mod matches;
mod players;
mod referees;
mod teams;

// Reexports
pub use championships::*;
pub use coaches::*;
pub use matches::*;
pub use players::*;
pub use referees::*;
pub use teams::*;

// Third-party imports
use diesel::{PgConnection, prelude::*};
use hashbrown::HashMap;

// Every plain entity gets the same four store functions. Update and delete
// report how many rows they touched so callers can tell a missing id apart.
macro_rules! crud_fns {
    (
        $table:ident, $new:ty, $row:ty,
        get: $get:ident,
        create: $create:ident,
        update: $update:ident,
        delete: $delete:ident $(,)?
    ) => {
        pub fn $get(conn: &mut PgConnection, id: i64) -> QueryResult<Option<$row>> {
            use crate::schema::$table::dsl;

            dsl::$table
                .find(id)
                .select(<$row>::as_select())
                .first(conn)
                .optional()
        }

        pub fn $create(conn: &mut PgConnection, new: &$new) -> QueryResult<i64> {
            use crate::schema::$table::dsl;

            diesel::insert_into(dsl::$table)
                .values(new)
                .returning(dsl::id)
                .get_result(conn)
        }

        pub fn $update(conn: &mut PgConnection, id: i64, new: &$new) -> QueryResult<usize> {
            use crate::schema::$table::dsl;

            diesel::update(dsl::$table.find(id)).set(new).execute(conn)
        }

        pub fn $delete(conn: &mut PgConnection, id: i64) -> QueryResult<usize> {
            use crate::schema::$table::dsl;

            diesel::delete(dsl::$table.find(id)).execute(conn)
        }
    };
}
pub(crate) use crud_fns;

/// Id to name for every team. Matches reference teams twice, so names are
/// looked up from this instead of joined in.
pub fn team_names(conn: &mut PgConnection) -> QueryResult<HashMap<i64, String>> {
    use crate::schema::teams::dsl;

    Ok(dsl::teams
        .select((dsl::id, dsl::name))
        .load::<(i64, String)>(conn)?
        .into_iter()
        .collect())
}
