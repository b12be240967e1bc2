use super::errors::DomainError;
use super::product::{Product, ProductSaveRequest};

pub trait ProductRepository: Send + Sync + 'static {
    /// Products in id order, optionally restricted to names containing
    /// `criteria` case-insensitively.
    fn list(&self, criteria: Option<&str>) -> Result<Vec<Product>, DomainError>;
    fn find_by_id(&self, id: i32) -> Result<Option<Product>, DomainError>;
    fn create(&self, product: &ProductSaveRequest) -> Result<Product, DomainError>;
    /// `None` when no row has `id`.
    fn update(&self, id: i32, product: &ProductSaveRequest)
        -> Result<Option<Product>, DomainError>;
    /// `false` when no row has `id`.
    fn delete(&self, id: i32) -> Result<bool, DomainError>;
}
