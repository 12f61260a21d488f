use actix_web::{web, HttpResponse};
use thiserror::Error;

use crate::{
    http::Error as HttpError,
    schema::User,
    types::{form::users::fetch, UserView},
    App,
};

#[tracing::instrument]
pub async fn fetch(
    app: web::Data<App>,
    path: web::Path<i64>,
) -> Result<HttpResponse, HttpError> {
    let id = path.into_inner();

    let mut conn = app.db().await?;
    let Some(user) = User::by_id(&mut *conn, id).await? else {
        #[derive(Debug, Error)]
        #[error("User not found")]
        struct ResourceError;

        return Err(HttpError::from_context(
            crate::types::Error::NotFound,
            ResourceError,
        ));
    };

    Ok(HttpResponse::Ok().json(fetch::Response {
        message: "User retrieved successfully",
        user: UserView::from(user),
    }))
}
