use actix_web::{body::BoxBody, http::StatusCode, HttpResponse};
use error_stack::Report;

use super::Error;
use crate::{database, types::Error as ErrorType};

impl actix_web::ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self.error_type {
            ErrorType::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            ErrorType::NotFound => StatusCode::NOT_FOUND,
            ErrorType::EmailExists => StatusCode::BAD_REQUEST,
            ErrorType::InvalidFormBody(..) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code()).json(&self.error_type)
    }
}

impl From<Report<database::Error>> for Error {
    fn from(value: Report<database::Error>) -> Self {
        match value.current_context() {
            database::Error::Conflict => Error::from_report(ErrorType::EmailExists, value),
            _ => {
                let message = value.to_string();
                Error::from_report(ErrorType::Internal { message }, value)
            }
        }
    }
}

impl From<validator::ValidateError> for Error {
    fn from(value: validator::ValidateError) -> Self {
        #[derive(Debug, thiserror::Error)]
        #[error("Validation error occurred")]
        struct ValidateError;
        Error::from_context(ErrorType::InvalidFormBody(value), ValidateError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use validator::ValidateError;

    fn db_report(error: database::Error) -> Report<database::Error> {
        Report::new(error)
    }

    #[test]
    fn conflict_translates_to_duplicate_email() {
        let error = Error::from(db_report(database::Error::Conflict));
        assert_eq!(error.as_type(), &ErrorType::EmailExists);
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn storage_faults_translate_to_server_error() {
        let error = Error::from(db_report(database::Error::UnhealthyPool));

        let ErrorType::Internal { message } = error.as_type() else {
            panic!("expected an internal error");
        };
        assert!(message.contains("unhealthy database pool"));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn validation_failures_are_bad_requests() {
        let mut fields = ValidateError::field_builder();
        fields.insert("email", ValidateError::message("Invalid e-mail address"));

        let error = Error::from(fields.build());
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        #[derive(Debug, thiserror::Error)]
        #[error("user not found")]
        struct ResourceError;

        let error = Error::from_context(ErrorType::NotFound, ResourceError);
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn error_body_carries_the_error_type() {
        let error = Error::from(db_report(database::Error::Conflict));
        let body = serde_json::to_value(error.as_type()).unwrap();
        assert_eq!(body, serde_json::json!({"type": "email_exists"}));
    }
}
