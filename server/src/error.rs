use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use error_stack::Report;
use kernel::KernelError;
use std::process::{ExitCode, Termination};

use crate::response::Envelope;

const NO_DATA: &str = "No data";
const NOT_FOUND: &str = "Not found";

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

/// A failed request. `not_found` is the message sent when the report is
/// [`KernelError::NotFound`], so each resource can word it its own way.
#[derive(Debug)]
pub struct ErrorStatus {
    report: Report<KernelError>,
    not_found: &'static str,
}

impl ErrorStatus {
    pub fn with_not_found(report: Report<KernelError>, not_found: &'static str) -> Self {
        Self { report, not_found }
    }
}

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        Self::with_not_found(e, NOT_FOUND)
    }
}

impl From<JsonRejection> for ErrorStatus {
    fn from(rejection: JsonRejection) -> Self {
        Report::new(KernelError::BadRequest)
            .attach_printable(rejection.body_text())
            .into()
    }
}

impl IntoResponse for ErrorStatus {
    fn into_response(self) -> axum::response::Response {
        let (status, msg) = match self.report.current_context() {
            KernelError::NotFound => (StatusCode::NOT_FOUND, self.not_found),
            KernelError::BadRequest => (StatusCode::BAD_REQUEST, NO_DATA),
            KernelError::Conflict => (StatusCode::CONFLICT, "Id already exists"),
            KernelError::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error"),
        };
        if status.is_server_error() {
            tracing::error!("{:?}", self.report);
        } else {
            tracing::warn!("{:?}", self.report);
        }
        (status, axum::Json(Envelope::<()>::message(false, msg))).into_response()
    }
}
