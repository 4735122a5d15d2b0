pub mod calendars;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use iimcal_core::IimcalError;

/// Standard API error response
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Convert pipeline errors to HTTP responses
pub struct AppError(IimcalError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            IimcalError::CalendarNotFound(_) => StatusCode::NOT_FOUND,
            IimcalError::Fetch(_) | IimcalError::Http(_) => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        let body = Json(ErrorResponse {
            error: self.0.to_string(),
        });
        (status, body).into_response()
    }
}

impl From<IimcalError> for AppError {
    fn from(err: IimcalError) -> Self {
        Self(err)
    }
}
