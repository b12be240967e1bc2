use diesel::prelude::*;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{Product, ProductSaveRequest};
use crate::schema::products;

use super::models::{ProductRow, ProductValuesRow};

// ── Error conversions (infrastructure concern only) ──────────────────────────

impl From<diesel::result::Error> for DomainError {
    fn from(e: diesel::result::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

impl From<r2d2::Error> for DomainError {
    fn from(e: r2d2::Error) -> Self {
        DomainError::Internal(e.to_string())
    }
}

// ── Repository ────────────────────────────────────────────────────────────────

pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

const LIKE_ESCAPE: char = '\\';

/// Wraps `criteria` in `%` wildcards, escaping any LIKE metacharacters it
/// contains so they match literally.
fn contains_pattern(criteria: &str) -> String {
    let mut pattern = String::with_capacity(criteria.len() + 2);
    pattern.push('%');
    for c in criteria.chars() {
        if matches!(c, '%' | '_') || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

impl ProductRepository for DieselProductRepository {
    fn list(&self, criteria: Option<&str>) -> Result<Vec<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let mut query = products::table
            .select(ProductRow::as_select())
            .order(products::id.asc())
            .into_boxed();

        // SQLite's LIKE ignores ASCII case.
        if let Some(criteria) = criteria {
            query = query.filter(
                products::name
                    .like(contains_pattern(criteria))
                    .escape(LIKE_ESCAPE),
            );
        }

        query
            .load(&mut conn)?
            .into_iter()
            .map(Product::try_from)
            .collect()
    }

    fn find_by_id(&self, id: i32) -> Result<Option<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        products::table
            .find(id)
            .select(ProductRow::as_select())
            .first(&mut conn)
            .optional()?
            .map(Product::try_from)
            .transpose()
    }

    fn create(&self, product: &ProductSaveRequest) -> Result<Product, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::insert_into(products::table)
            .values(&ProductValuesRow::from(product))
            .returning(ProductRow::as_returning())
            .get_result(&mut conn)?;

        Product::try_from(row)
    }

    fn update(
        &self,
        id: i32,
        product: &ProductSaveRequest,
    ) -> Result<Option<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        diesel::update(products::table.find(id))
            .set(&ProductValuesRow::from(product))
            .returning(ProductRow::as_returning())
            .get_result(&mut conn)
            .optional()?
            .map(Product::try_from)
            .transpose()
    }

    fn delete(&self, id: i32) -> Result<bool, DomainError> {
        let mut conn = self.pool.get()?;

        let deleted = diesel::delete(products::table.find(id)).execute(&mut conn)?;
        Ok(deleted > 0)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use tempfile::TempDir;

    use super::{contains_pattern, DieselProductRepository};
    use crate::db::{create_pool, DbPool};
    use crate::domain::ports::ProductRepository;
    use crate::domain::product::ProductSaveRequest;

    fn setup_db() -> (TempDir, DbPool) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let url = dir.path().join("products.db");
        let pool = create_pool(url.to_str().expect("utf-8 path"), 2)
            .expect("Failed to create pool");
        crate::run_migrations(&pool).expect("Failed to run migrations");
        (dir, pool)
    }

    fn save_request(name: &str, price: &str) -> ProductSaveRequest {
        ProductSaveRequest {
            name: name.to_string(),
            description: "Two-foot aluminium spirit level".to_string(),
            price: BigDecimal::from_str(price).expect("valid decimal"),
        }
    }

    #[test]
    fn pattern_escapes_like_metacharacters() {
        assert_eq!(contains_pattern("drill"), "%drill%");
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }

    #[test]
    fn list_returns_seeded_products_in_id_order() {
        let (_dir, pool) = setup_db();
        let repo = DieselProductRepository::new(pool);

        let products = repo.list(None).expect("list failed");

        assert_eq!(products.len(), 20);
        assert_eq!(products[0].name, "Hammer");
        assert_eq!(products[0].price, BigDecimal::from_str("15.99").unwrap());
        assert_eq!(products[19].name, "Stud Finder");
        assert!(products.windows(2).all(|w| w[0].id < w[1].id));
    }

    #[test]
    fn list_filters_by_name_ignoring_case() {
        let (_dir, pool) = setup_db();
        let repo = DieselProductRepository::new(pool);

        let drills = repo.list(Some("DRILL")).expect("list failed");
        assert_eq!(drills.len(), 1);
        assert_eq!(drills[0].name, "Drill");

        let screws: Vec<String> = repo
            .list(Some("screw"))
            .expect("list failed")
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(
            screws,
            vec!["Screwdriver Set", "Screws Assortment", "Cordless Screwdriver"]
        );
    }

    #[test]
    fn list_treats_wildcards_literally() {
        let (_dir, pool) = setup_db();
        let repo = DieselProductRepository::new(pool);

        assert!(repo.list(Some("%")).expect("list failed").is_empty());
        assert!(repo.list(Some("_")).expect("list failed").is_empty());
    }

    #[test]
    fn find_by_id_returns_none_for_unknown_id() {
        let (_dir, pool) = setup_db();
        let repo = DieselProductRepository::new(pool);

        assert!(repo.find_by_id(500).expect("find failed").is_none());
        assert_eq!(
            repo.find_by_id(3).expect("find failed").map(|p| p.name),
            Some("Drill".to_string())
        );
    }

    #[test]
    fn create_assigns_next_id_and_keeps_exact_price() {
        let (_dir, pool) = setup_db();
        let repo = DieselProductRepository::new(pool);

        let created = repo
            .create(&save_request("Level", "21.505"))
            .expect("create failed");

        assert_eq!(created.id, 21);
        let stored = repo
            .find_by_id(created.id)
            .expect("find failed")
            .expect("product should exist");
        assert_eq!(stored.price, BigDecimal::from_str("21.505").unwrap());
        assert_eq!(stored, created);
    }

    #[test]
    fn update_overwrites_existing_row() {
        let (_dir, pool) = setup_db();
        let repo = DieselProductRepository::new(pool);

        let updated = repo
            .update(1, &save_request("Framing Hammer", "22.00"))
            .expect("update failed")
            .expect("product should exist");

        assert_eq!(updated.id, 1);
        assert_eq!(updated.name, "Framing Hammer");
        assert_eq!(repo.find_by_id(1).unwrap(), Some(updated));
    }

    #[test]
    fn update_missing_row_changes_nothing() {
        let (_dir, pool) = setup_db();
        let repo = DieselProductRepository::new(pool);
        let before = repo.list(None).unwrap();

        let result = repo
            .update(500, &save_request("Level", "1.00"))
            .expect("update failed");

        assert!(result.is_none());
        assert_eq!(repo.list(None).unwrap(), before);
    }

    #[test]
    fn delete_reports_whether_a_row_was_removed() {
        let (_dir, pool) = setup_db();
        let repo = DieselProductRepository::new(pool);

        assert!(repo.delete(5).expect("delete failed"));
        assert!(repo.find_by_id(5).unwrap().is_none());
        assert!(!repo.delete(5).expect("delete failed"));
        assert_eq!(repo.list(None).unwrap().len(), 19);
    }
}
