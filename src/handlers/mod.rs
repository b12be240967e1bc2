pub mod products;
pub mod reports;

use actix_web::web;

use crate::domain::errors::DomainError;
use crate::errors::AppError;

/// Runs a blocking service call on actix's thread pool.
async fn run_blocking<F, T>(f: F) -> Result<T, AppError>
where
    F: FnOnce() -> Result<T, DomainError> + Send + 'static,
    T: Send + 'static,
{
    Ok(web::block(f)
        .await
        .map_err(|e| AppError::Internal(e.to_string()))??)
}

fn require_positive_id(id: i32) -> Result<i32, AppError> {
    if id > 0 {
        Ok(id)
    } else {
        Err(AppError::InvalidInput(vec![format!(
            "Product ID must be a positive integer, got {id}."
        )]))
    }
}
