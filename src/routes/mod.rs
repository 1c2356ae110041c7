//! HTTP surface of the service.

use actix_web::error::{InternalError, JsonPayloadError, PathError, QueryPayloadError};
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::services::ServiceError;

pub mod clients;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct StandardError {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: &'static str,
    pub message: String,
    pub path: String,
}

/// Builds a [`StandardError`] response for the current request.
pub fn standard_error(
    status: StatusCode,
    error: &'static str,
    message: String,
    req: &HttpRequest,
) -> HttpResponse {
    HttpResponse::build(status).json(StandardError {
        timestamp: Utc::now(),
        status: status.as_u16(),
        error,
        message,
        path: req.path().to_string(),
    })
}

/// Maps a service failure onto a status code and [`StandardError`] body.
pub fn error_response(err: &ServiceError, req: &HttpRequest) -> HttpResponse {
    let (status, error) = match err {
        ServiceError::NotFound => (StatusCode::NOT_FOUND, "Resource not found"),
        ServiceError::DependencyConflict(_) => (StatusCode::BAD_REQUEST, "Database exception"),
        ServiceError::Validation(_) => (StatusCode::UNPROCESSABLE_ENTITY, "Validation exception"),
        ServiceError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal error"),
    };

    standard_error(status, error, err.to_string(), req)
}

/// Unparseable path segments mean no such resource.
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    let response = standard_error(
        StatusCode::NOT_FOUND,
        "Resource not found",
        err.to_string(),
        req,
    );
    InternalError::from_response(err, response).into()
}

pub fn query_error_handler(err: QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    let response = standard_error(StatusCode::BAD_REQUEST, "Bad request", err.to_string(), req);
    InternalError::from_response(err, response).into()
}

pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let response = standard_error(StatusCode::BAD_REQUEST, "Bad request", err.to_string(), req);
    InternalError::from_response(err, response).into()
}
