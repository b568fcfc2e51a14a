use crate::error::AppError;

/// Answers a known path requested with a method it does not route.
pub async fn method_not_allowed_handler() -> AppError {
    AppError::MethodNotAllowed
}
