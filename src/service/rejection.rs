use actix_web::HttpResponse;
use actix_web::ResponseError;
use actix_web::http::StatusCode;

/// Why a request was turned away before reaching the decision core.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error("Request body must be a JSON object")]
    NotAnObject,
    #[error("Invalid request body: {0}")]
    Malformed(String),
}

impl ResponseError for Rejection {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNPROCESSABLE_ENTITY
    }
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "detail": self.to_string() }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_rejection_is_unprocessable() {
        for rejection in [
            Rejection::MissingField("team_id"),
            Rejection::NotAnObject,
            Rejection::Malformed(String::from("expected f64")),
        ] {
            assert_eq!(rejection.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(
                rejection.error_response().status(),
                StatusCode::UNPROCESSABLE_ENTITY
            );
        }
    }

    #[test]
    fn missing_field_is_named() {
        assert_eq!(
            Rejection::MissingField("resources").to_string(),
            "Missing required field: resources"
        );
    }
}
