use utoipa::OpenApi;

use crate::domain::product::{Product, ProductSaveRequest};
use crate::domain::report::Report;
use crate::errors::ErrorDetails;
use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::products::list_products,
        handlers::products::get_product,
        handlers::products::create_product,
        handlers::products::update_product,
        handlers::products::delete_product,
        handlers::reports::generate_report,
    ),
    components(schemas(Product, ProductSaveRequest, Report, ErrorDetails)),
    tags(
        (name = "products", description = "Product catalogue"),
        (name = "reports", description = "Per-product sales reports"),
    )
)]
pub struct ApiDoc;
