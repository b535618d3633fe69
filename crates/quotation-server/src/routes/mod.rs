pub mod health;
pub mod quotation;

use crate::error::ApiError;

pub async fn not_found() -> ApiError {
    ApiError::NotFound("no such route".to_string())
}
