use actix_web::{
    web::{self, Json},
    HttpResponse,
};
use validator::Validate;

use crate::{
    database::ErrorExt, http::Error, schema::User, types::form::users::create, App,
};

#[tracing::instrument]
pub async fn create(
    app: web::Data<App>,
    form: Json<create::Request>,
) -> Result<HttpResponse, Error> {
    form.validate()?;

    let mut tx = app.db_begin().await?;
    let user = User::insert(&mut *tx, &form.name, form.email.as_str()).await?;
    tx.commit().await.into_db_error()?;

    Ok(HttpResponse::Created().json(create::Response {
        message: "User created successfully",
        id: user.id,
    }))
}
