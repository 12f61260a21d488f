use chrono::NaiveDateTime;
use sqlx::FromRow;

use crate::database::{Connection, ErrorExt, Result};

#[derive(Debug, FromRow, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub created_at: NaiveDateTime,
    pub name: String,
    pub email: String,
    pub updated_at: Option<NaiveDateTime>,
}

impl User {
    /// Inserts a new row and hands back the stored copy with its
    /// generated id. Duplicate emails surface as [`Error::Conflict`].
    ///
    /// [`Error::Conflict`]: crate::database::Error::Conflict
    #[tracing::instrument(skip(name, email), fields(email = "<hidden>"))]
    pub async fn insert(conn: &mut Connection, name: &str, email: &str) -> Result<Self> {
        sqlx::query_as::<_, Self>(
            r#"INSERT INTO "users" (name, email)
               VALUES ($1, $2)
               RETURNING *"#,
        )
        .bind(name)
        .bind(email)
        .fetch_one(conn)
        .await
        .into_db_error()
    }

    #[tracing::instrument(skip(conn))]
    pub async fn by_id(conn: &mut Connection, id: i64) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(r#"SELECT * FROM "users" WHERE id = $1"#)
            .bind(id)
            .fetch_optional(conn)
            .await
            .into_db_error()
    }

    /// Every row in storage order.
    #[tracing::instrument(skip(conn))]
    pub async fn all(conn: &mut Connection) -> Result<Vec<Self>> {
        sqlx::query_as::<_, Self>(r#"SELECT * FROM "users""#)
            .fetch_all(conn)
            .await
            .into_db_error()
    }

    /// Overwrites `name` and `email` in place. `None` means no row
    /// has that id; nothing is written in that case.
    #[tracing::instrument(skip(name, email), fields(email = "<hidden>"))]
    pub async fn update(
        conn: &mut Connection,
        id: i64,
        name: &str,
        email: &str,
    ) -> Result<Option<Self>> {
        sqlx::query_as::<_, Self>(
            r#"UPDATE "users"
               SET name = $2, email = $3, updated_at = now()
               WHERE id = $1
               RETURNING *"#,
        )
        .bind(id)
        .bind(name)
        .bind(email)
        .fetch_optional(conn)
        .await
        .into_db_error()
    }
}
