use tracing::info;

use crate::database::{Connection, ErrorExt, Result};

mod user;
pub use user::User;

/// Applied once at process startup. There is no migration story;
/// the table is only created when it does not exist yet.
#[tracing::instrument(skip_all, name = "schema.bootstrap")]
pub async fn bootstrap(conn: &mut Connection) -> Result<()> {
    info!("Preparing database schema...");

    sqlx::query(
        r#"CREATE TABLE IF NOT EXISTS "users" (
            id BIGSERIAL PRIMARY KEY,
            created_at TIMESTAMP NOT NULL DEFAULT now(),
            name TEXT NOT NULL,
            email TEXT NOT NULL UNIQUE,
            updated_at TIMESTAMP
        )"#,
    )
    .execute(conn)
    .await
    .into_db_error()?;

    Ok(())
}
