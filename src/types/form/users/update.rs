use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateError};

use crate::types::validation::{is_valid_email, is_valid_name};
use crate::util::Sensitive;

/// Full replacement of one user identified by `id`.
#[derive(Debug, Deserialize, Serialize)]
pub struct Request {
    pub id: i64,
    pub name: String,
    pub email: Sensitive<String>,
}

impl Validate for Request {
    fn validate(&self) -> Result<(), ValidateError> {
        let mut fields = ValidateError::field_builder();
        fields.insert("name", {
            let mut error = ValidateError::msg_builder();
            if !is_valid_name(&self.name) {
                error.insert("Invalid name");
            }
            error.build()
        });

        fields.insert("email", {
            let mut error = ValidateError::msg_builder();
            if !is_valid_email(self.email.as_str()) {
                error.insert("Invalid e-mail address");
            }
            error.build()
        });

        fields.build().into_result()
    }
}

/// Echoes the accepted replacement back to the caller.
#[derive(Debug, Serialize)]
pub struct Response {
    pub message: &'static str,
    pub user: Request,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(id: i64, name: &str, email: &str) -> Request {
        Request {
            id,
            name: name.to_string(),
            email: email.to_string().into(),
        }
    }

    #[test]
    fn test_field_rules_match_create() {
        assert!(form(1, "Ada", "ada@example.com").validate().is_ok());
        assert!(form(1, "", "ada@example.com").validate().is_err());
        assert!(form(1, "Ada", "not-an-email").validate().is_err());
    }

    #[test]
    fn response_echoes_the_submitted_user() {
        let body = serde_json::to_value(Response {
            message: "User updated successfully",
            user: form(3, "Ada", "ada@example.com"),
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "message": "User updated successfully",
                "user": {"id": 3, "name": "Ada", "email": "ada@example.com"},
            })
        );
    }
}
