use std::sync::Arc;

use validator::Validate;

use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{Product, ProductSaveRequest};

pub type DynProductRepository = Arc<dyn ProductRepository>;

#[derive(Clone)]
pub struct ProductService {
    repo: DynProductRepository,
}

impl ProductService {
    pub fn new(repo: DynProductRepository) -> Self {
        Self { repo }
    }

    /// Returns every product when `criteria` is absent or empty, otherwise the
    /// products whose name contains it, ignoring case.
    pub fn get_products(&self, criteria: Option<&str>) -> Result<Vec<Product>, DomainError> {
        let criteria = criteria.filter(|c| !c.is_empty());
        self.repo.list(criteria)
    }

    pub fn get_product_by_id(&self, id: i32) -> Result<Option<Product>, DomainError> {
        self.repo.find_by_id(id)
    }

    pub fn create_product(&self, request: &ProductSaveRequest) -> Result<Product, DomainError> {
        request.validate()?;
        let product = self.repo.create(request)?;
        log::info!("Created product {} ({})", product.id, product.name);
        Ok(product)
    }

    pub fn update_product(
        &self,
        id: i32,
        request: &ProductSaveRequest,
    ) -> Result<Product, DomainError> {
        request.validate()?;
        match self.repo.update(id, request)? {
            Some(product) => {
                log::info!("Updated product {}", id);
                Ok(product)
            }
            None => {
                log::warn!("Update of missing product {}", id);
                Err(DomainError::NotFound(format!(
                    "Product with ID {id} could not be found. Unable to update product."
                )))
            }
        }
    }

    pub fn delete_product(&self, id: i32) -> Result<(), DomainError> {
        if self.repo.delete(id)? {
            log::info!("Deleted product {}", id);
            Ok(())
        } else {
            log::warn!("Delete of missing product {}", id);
            Err(DomainError::NotFound(format!(
                "Product with ID {id} could not be found. Unable to delete product."
            )))
        }
    }
}
