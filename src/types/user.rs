use serde::Serialize;

use crate::schema;

/// Public view of one user row. Built only from trusted rows, never
/// from request input, and always carries the assigned id.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct UserView {
    pub id: i64,
    pub name: String,
    pub email: String,
}

impl From<schema::User> for UserView {
    fn from(user: schema::User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_keeps_row_fields() {
        let row = schema::User {
            id: 7,
            created_at: chrono::NaiveDateTime::default(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            updated_at: None,
        };

        let view = UserView::from(row);
        assert_eq!(view.id, 7);
        assert_eq!(view.name, "Ada");
        assert_eq!(view.email, "ada@example.com");
    }

    #[test]
    fn view_serializes_public_fields_only() {
        let view = UserView {
            id: 1,
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
        };

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "name": "Ada", "email": "ada@example.com"})
        );
    }
}
