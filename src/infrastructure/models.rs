use std::str::FromStr;

use bigdecimal::BigDecimal;
use diesel::prelude::*;

use crate::domain::errors::DomainError;
use crate::domain::product::{Product, ProductSaveRequest};
use crate::schema::products;

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = products)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ProductRow {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Exact decimal text, e.g. "15.99"
    pub price: String,
}

/// Column values written by both insert and update.
#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = products)]
pub struct ProductValuesRow<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub price: String,
}

impl<'a> From<&'a ProductSaveRequest> for ProductValuesRow<'a> {
    fn from(request: &'a ProductSaveRequest) -> Self {
        Self {
            name: &request.name,
            description: &request.description,
            price: request.price.to_string(),
        }
    }
}

impl TryFrom<ProductRow> for Product {
    type Error = DomainError;

    fn try_from(row: ProductRow) -> Result<Self, Self::Error> {
        let price = BigDecimal::from_str(&row.price).map_err(|e| {
            DomainError::Internal(format!(
                "Stored price '{}' for product {} is not a decimal: {}",
                row.price, row.id, e
            ))
        })?;
        Ok(Product {
            id: row.id,
            name: row.name,
            description: row.description,
            price,
        })
    }
}
