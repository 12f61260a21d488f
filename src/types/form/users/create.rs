use serde::{Deserialize, Serialize};
use validator::{Validate, ValidateError};

use crate::types::validation::{is_valid_email, is_valid_name};
use crate::util::Sensitive;

#[derive(Debug, Deserialize, Serialize)]
pub struct Request {
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

#[derive(Debug, Serialize)]
pub struct Response {
    pub message: &'static str,
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, email: &str) -> Request {
        Request {
            name: name.to_string(),
            email: email.to_string().into(),
        }
    }

    #[test]
    fn test_email_field() {
        assert!(form("Ada", "ada@example.com").validate().is_ok());
        assert!(form("Ada", "not-an-email").validate().is_err());
        assert!(form("Ada", "").validate().is_err());
    }

    #[test]
    fn test_name_field() {
        assert!(form("", "ada@example.com").validate().is_err());
        assert!(form("   ", "ada@example.com").validate().is_err());
    }

    #[test]
    fn rejection_names_the_offending_field() {
        let error = form("Ada", "not-an-email").validate().unwrap_err();
        let json = serde_json::to_value(&error).unwrap();

        assert!(json.get("email").is_some());
        assert!(json.get("name").is_none());
    }

    #[test]
    fn response_shape() {
        let body = serde_json::to_value(Response {
            message: "User created successfully",
            id: 42,
        })
        .unwrap();

        assert_eq!(
            body,
            serde_json::json!({"message": "User created successfully", "id": 42})
        );
    }
}
