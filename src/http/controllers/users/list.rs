use actix_web::{web, HttpResponse};

use crate::{
    http::Error,
    schema::User,
    types::{form::users::list, UserView},
    App,
};

#[tracing::instrument]
pub async fn list(app: web::Data<App>) -> Result<HttpResponse, Error> {
    let mut conn = app.db().await?;
    let users = User::all(&mut *conn).await?;

    let users = users.into_iter().map(UserView::from).collect::<Vec<_>>();
    Ok(HttpResponse::Ok().json(list::Response {
        message: "Users retrieved successfully",
        users,
    }))
}
