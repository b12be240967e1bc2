pub mod product_service;
pub mod report_service;

#[cfg(test)]
pub(crate) mod testing;
