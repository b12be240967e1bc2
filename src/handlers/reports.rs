use actix_web::{web, HttpResponse};

use crate::application::report_service::ReportService;
use crate::domain::report::Report;
use crate::errors::{AppError, ErrorDetails};

use super::{require_positive_id, run_blocking};

/// GET /products/{id}/reports
///
/// Sales report for one product over the last 30 days.
#[utoipa::path(
    get,
    path = "/products/{id}/reports",
    params(
        ("id" = i32, Path, description = "Product id"),
    ),
    responses(
        (status = 200, description = "Report generated", body = Report),
        (status = 401, description = "Product is restricted", body = ErrorDetails),
        (status = 404, description = "Product or its sales data not found", body = ErrorDetails),
    ),
    tag = "reports"
)]
pub async fn generate_report(
    service: web::Data<ReportService>,
    path: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let id = require_positive_id(path.into_inner())?;

    let report = run_blocking(move || service.generate_report(id)).await?;

    Ok(HttpResponse::Ok().json(report))
}
