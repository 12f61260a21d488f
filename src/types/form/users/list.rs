use serde::Serialize;

use crate::types::UserView;

#[derive(Debug, Serialize)]
pub struct Response {
    pub message: &'static str,
    pub users: Vec<UserView>,
}
