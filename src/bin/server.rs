use actix_web::{web, App, HttpServer};
use tracing_actix_web::TracingLogger;

use roster::config;

#[allow(clippy::unwrap_used)]
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .pretty()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let config = config::Server::load().unwrap();
    let addr = (config.ip, config.port);

    let app = roster::App::new(config).await.unwrap();

    // ensure the users table exists before accepting traffic
    let mut conn = app.db().await.unwrap();
    roster::schema::bootstrap(&mut *conn).await.unwrap();
    drop(conn);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(app.clone()))
            .wrap(TracingLogger::default())
            .configure(roster::http::controllers::configure)
    })
    .bind(addr)
    .unwrap()
    .run()
    .await
    .unwrap();
}
