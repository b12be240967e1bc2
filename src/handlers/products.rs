use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::application::product_service::ProductService;
use crate::domain::product::{Product, ProductSaveRequest};
use crate::errors::{AppError, ErrorDetails};

use super::{require_positive_id, run_blocking};

#[derive(Debug, Deserialize)]
pub struct ListProductsParams {
    /// Case-insensitive substring matched against product names.
    pub criteria: Option<String>,
}

/// GET /products
///
/// Lists all products, or only those whose name contains `criteria`.
#[utoipa::path(
    get,
    path = "/products",
    params(
        ("criteria" = Option<String>, Query, description = "Case-insensitive name filter"),
    ),
    responses(
        (status = 200, description = "Matching products", body = Vec<Product>),
        (status = 500, description = "Internal server error", body = ErrorDetails),
    ),
    tag = "products"
)]
pub async fn list_products(
    service: web::Data<ProductService>,
    query: web::Query<ListProductsParams>,
) -> Result<HttpResponse, AppError> {
    let criteria = query.into_inner().criteria;

    let products = run_blocking(move || service.get_products(criteria.as_deref())).await?;

    Ok(HttpResponse::Ok().json(products))
}

/// GET /products/{id}
///
/// Returns the product, or an empty 204 when no product has that id.
#[utoipa::path(
    get,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product id"),
    ),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 204, description = "No product with that id"),
        (status = 400, description = "Id is not a positive integer", body = ErrorDetails),
    ),
    tag = "products"
)]
pub async fn get_product(
    service: web::Data<ProductService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = require_positive_id(path.into_inner())?;

    let product = run_blocking(move || service.get_product_by_id(id)).await?;

    Ok(match product {
        Some(product) => HttpResponse::Ok().json(product),
        None => HttpResponse::NoContent().finish(),
    })
}

/// POST /products
#[utoipa::path(
    post,
    path = "/products",
    request_body = ProductSaveRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 400, description = "Request body failed validation", body = ErrorDetails),
    ),
    tag = "products"
)]
pub async fn create_product(
    service: web::Data<ProductService>,
    body: web::Json<ProductSaveRequest>,
) -> Result<HttpResponse, AppError> {
    let request = body.into_inner();

    let product = run_blocking(move || service.create_product(&request)).await?;

    Ok(HttpResponse::Created().json(product))
}

/// PUT /products/{id}
///
/// Overwrites name, description and price of an existing product.
#[utoipa::path(
    put,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product id"),
    ),
    request_body = ProductSaveRequest,
    responses(
        (status = 204, description = "Product updated"),
        (status = 400, description = "Invalid id or request body", body = ErrorDetails),
        (status = 404, description = "Product not found", body = ErrorDetails),
    ),
    tag = "products"
)]
pub async fn update_product(
    service: web::Data<ProductService>,
    path: web::Path<i32>,
    body: web::Json<ProductSaveRequest>,
) -> Result<HttpResponse, AppError> {
    let id = require_positive_id(path.into_inner())?;
    let request = body.into_inner();

    run_blocking(move || service.update_product(id, &request)).await?;

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /products/{id}
#[utoipa::path(
    delete,
    path = "/products/{id}",
    params(
        ("id" = i32, Path, description = "Product id"),
    ),
    responses(
        (status = 204, description = "Product deleted"),
        (status = 400, description = "Id is not a positive integer", body = ErrorDetails),
        (status = 404, description = "Product not found", body = ErrorDetails),
    ),
    tag = "products"
)]
pub async fn delete_product(
    service: web::Data<ProductService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = require_positive_id(path.into_inner())?;

    run_blocking(move || service.delete_product(id)).await?;

    Ok(HttpResponse::NoContent().finish())
}
