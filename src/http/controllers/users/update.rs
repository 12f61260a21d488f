use actix_web::{
    web::{self, Json},
    HttpResponse,
};
use thiserror::Error;
use validator::Validate;

use crate::{
    database::ErrorExt, http::Error as HttpError, schema::User, types::form::users::update, App,
};

#[tracing::instrument]
pub async fn update(
    app: web::Data<App>,
    form: Json<update::Request>,
) -> Result<HttpResponse, HttpError> {
    form.validate()?;

    let mut tx = app.db_begin().await?;
    let Some(_user) = User::update(&mut *tx, form.id, &form.name, form.email.as_str()).await?
    else {
        // transaction rolls back on drop, nothing was written
        #[derive(Debug, Error)]
        #[error("User not found")]
        struct ResourceError;

        return Err(HttpError::from_context(
            crate::types::Error::NotFound,
            ResourceError,
        ));
    };
    tx.commit().await.into_db_error()?;

    Ok(HttpResponse::Ok().json(update::Response {
        message: "User updated successfully",
        user: form.into_inner(),
    }))
}
