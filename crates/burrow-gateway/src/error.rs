use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use burrow_core::StoreError;
use burrow_service::RegisterError;
use tracing::error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug)]
pub enum AppError {
    Register(RegisterError),
    Store(StoreError),
}

impl From<RegisterError> for AppError {
    fn from(err: RegisterError) -> Self {
        Self::Register(err)
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        Self::Store(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Register(
                err @ (RegisterError::EmptyKey | RegisterError::EmptyDestination),
            ) => (StatusCode::BAD_REQUEST, err.to_string()).into_response(),
            AppError::Register(RegisterError::Store(err)) | AppError::Store(err) => {
                error!(error = %err, "link store operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "link store operation failed",
                )
                    .into_response()
            }
        }
    }
}
