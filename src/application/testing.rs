use std::str::FromStr;
use std::sync::Mutex;

use bigdecimal::BigDecimal;

use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{Product, ProductSaveRequest};

/// Vec-backed repository for exercising services without a database.
#[derive(Default)]
pub struct InMemoryProductRepository {
    products: Mutex<Vec<Product>>,
}

impl InMemoryProductRepository {
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            products: Mutex::new(products),
        }
    }

    pub fn seeded() -> Self {
        Self::with_products(vec![
            product(1, "Hammer", "Claw hammer for general purpose use", "15.99"),
            product(2, "Screwdriver Set", "Set of Phillips and flat-head screwdrivers", "9.99"),
            product(3, "Drill", "Cordless drill with rechargeable battery", "49.99"),
        ])
    }

    pub fn len(&self) -> usize {
        self.products.lock().unwrap().len()
    }
}

pub fn product(id: i32, name: &str, description: &str, price: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        description: description.to_string(),
        price: BigDecimal::from_str(price).unwrap(),
    }
}

impl ProductRepository for InMemoryProductRepository {
    fn list(&self, criteria: Option<&str>) -> Result<Vec<Product>, DomainError> {
        let products = self.products.lock().unwrap();
        let needle = criteria.map(str::to_lowercase);
        Ok(products
            .iter()
            .filter(|p| match &needle {
                Some(n) => p.name.to_lowercase().contains(n.as_str()),
                None => true,
            })
            .cloned()
            .collect())
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Product>, DomainError> {
        let products = self.products.lock().unwrap();
        Ok(products.iter().find(|p| p.id == id).cloned())
    }

    fn create(&self, request: &ProductSaveRequest) -> Result<Product, DomainError> {
        let mut products = self.products.lock().unwrap();
        let id = products.iter().map(|p| p.id).max().unwrap_or(0) + 1;
        let created = Product {
            id,
            name: request.name.clone(),
            description: request.description.clone(),
            price: request.price.clone(),
        };
        products.push(created.clone());
        Ok(created)
    }

    fn update(
        &self,
        id: i32,
        request: &ProductSaveRequest,
    ) -> Result<Option<Product>, DomainError> {
        let mut products = self.products.lock().unwrap();
        Ok(products.iter_mut().find(|p| p.id == id).map(|p| {
            p.name = request.name.clone();
            p.description = request.description.clone();
            p.price = request.price.clone();
            p.clone()
        }))
    }

    fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let mut products = self.products.lock().unwrap();
        let before = products.len();
        products.retain(|p| p.id != id);
        Ok(products.len() != before)
    }
}
