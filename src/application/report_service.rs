use std::sync::Arc;

use crate::domain::errors::DomainError;
use crate::domain::report::{Report, SalesTable};

use super::product_service::ProductService;

/// Product id whose report nobody may view.
pub const RESTRICTED_PRODUCT_ID: i32 = 999;

#[derive(Clone)]
pub struct ReportService {
    products: ProductService,
    sales: Arc<SalesTable>,
}

impl ReportService {
    pub fn new(products: ProductService, sales: Arc<SalesTable>) -> Self {
        Self { products, sales }
    }

    pub fn generate_report(&self, product_id: i32) -> Result<Report, DomainError> {
        let product = self.products.get_product_by_id(product_id)?;

        // Checked after the lookup, and whether or not the product exists.
        if product_id == RESTRICTED_PRODUCT_ID {
            log::warn!("Rejected report request for restricted product {}", product_id);
            return Err(DomainError::Unauthorized(
                "User is unauthorized for this resource.".to_string(),
            ));
        }

        let Some(product) = product else {
            return Err(DomainError::NotFound(format!(
                "Product with ID {product_id} could not be found. Could not generate report."
            )));
        };

        let total_sales = self.sales.units_sold(product.id).ok_or_else(|| {
            DomainError::NotFound(format!(
                "Sales data for product with ID {product_id} could not be found. Could not generate report."
            ))
        })?;

        Ok(Report::compute(product, total_sales))
    }
}
