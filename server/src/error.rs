use std::fmt::Display;
use std::process::{ExitCode, Termination};

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use error_stack::Report;
use kernel::KernelError;
use serde::Serialize;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl ErrorStatus {
    /// Wraps an extractor rejection, e.g. an id that is not a number or a body that is not JSON.
    pub fn malformed(rejection: impl Display) -> Self {
        let message = rejection.to_string();
        ErrorStatus(Report::new(KernelError::Malformed).attach_printable(message))
    }
}

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> Response {
        let context = self.0.current_context();
        match context {
            KernelError::Malformed => {
                tracing::debug!("{:?}", self.0);
                ErrorResponse::new(StatusCode::BAD_REQUEST, context)
            }
            KernelError::Invalid(_) | KernelError::NotFound => {
                ErrorResponse::new(StatusCode::NOT_ACCEPTABLE, context)
            }
            KernelError::Timeout | KernelError::Internal => {
                tracing::error!("{:?}", self.0);
                ErrorResponse::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
        .into_response()
    }
}

/// `{"error": "..."}` body sent with every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(skip)]
    status: StatusCode,
    error: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, error: impl ToString) -> Self {
        Self {
            status,
            error: error.to_string(),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status, axum::Json(self)).into_response()
    }
}

#[cfg(test)]
mod test {
    use axum::body::to_bytes;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use error_stack::Report;
    use kernel::interface::validation::BookField;
    use kernel::KernelError;

    use crate::error::ErrorStatus;

    async fn render(error: ErrorStatus) -> (StatusCode, String) {
        let response = error.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn invalid_field_is_not_acceptable() {
        let error = ErrorStatus::from(Report::new(KernelError::Invalid(BookField::Title)));
        let (status, body) = render(error).await;
        assert_eq!(status, StatusCode::NOT_ACCEPTABLE);
        assert_eq!(body, r#"{"error":"Book was invalid because of Title"}"#);
    }

    #[tokio::test]
    async fn not_found_is_not_acceptable() {
        let error = ErrorStatus::from(Report::new(KernelError::NotFound));
        let (status, body) = render(error).await;
        assert_eq!(status, StatusCode::NOT_ACCEPTABLE);
        assert_eq!(
            body,
            r#"{"error":"There was an error, or Book at that ID does not exist"}"#
        );
    }

    #[tokio::test]
    async fn malformed_is_bad_request() {
        let (status, body) = render(ErrorStatus::malformed("expected value at line 1")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, r#"{"error":"Request was malformed"}"#);
    }

    #[tokio::test]
    async fn persistence_failure_hides_detail() {
        for context in [KernelError::Internal, KernelError::Timeout] {
            let error = ErrorStatus::from(
                Report::new(context).attach_printable("relation \"books\" does not exist"),
            );
            let (status, body) = render(error).await;
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, r#"{"error":"Internal server error"}"#);
        }
    }
}
