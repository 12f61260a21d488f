use actix_web::web;

pub mod users;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/write", web::post().to(users::create))
        .route("/read", web::get().to(users::list))
        .route("/read/{user_id}", web::post().to(users::fetch))
        .route("/update", web::post().to(users::update));
}
