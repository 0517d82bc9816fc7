use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use marketdash_core::errors::Error as CoreError;
use marketdash_core::instruments::InstrumentError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    NotFound(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: u16,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::Core(e) => match e {
                CoreError::Instrument(InstrumentError::DuplicateSymbol { .. }) => {
                    StatusCode::CONFLICT
                }
                CoreError::Instrument(InstrumentError::NotFound(_)) => StatusCode::NOT_FOUND,
                CoreError::Instrument(InstrumentError::Invalid(_))
                | CoreError::Validation(_)
                | CoreError::InvalidConfigValue(_) => StatusCode::BAD_REQUEST,
                CoreError::MarketData(_) => StatusCode::BAD_GATEWAY,
            },
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        let body = Json(ErrorBody {
            code: status.as_u16(),
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
