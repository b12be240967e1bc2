use std::collections::HashMap;

use bigdecimal::{BigDecimal, RoundingMode, Zero};
use serde::Serialize;
use utoipa::ToSchema;

use super::product::Product;

/// Length of the sales window, in days.
pub const SALES_WINDOW_DAYS: i32 = 30;

/// Fractional digits kept on computed decimals.
const DECIMAL_SCALE: i64 = 28;

/// Significant digits kept on gross income.
const INCOME_PRECISION: u64 = 28;

/// Units sold per product id over the last 30 days.
const SALES_LAST_30_DAYS: [(i32, i32); 26] = [
    (1, 0),
    (2, 50),
    (3, 20),
    (4, 40),
    (5, 40),
    (6, 0),
    (7, 30),
    (8, 14),
    (9, 55),
    (10, 0),
    (11, 32),
    (12, 23),
    (13, 65),
    (14, 0),
    (15, 41),
    (16, 14),
    (17, 52),
    (18, 33),
    (19, 78),
    (20, 0),
    (21, 22),
    (22, 11),
    (23, 1),
    (24, 1),
    (25, 0),
    (26, 0),
];

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub product: Product,
    pub total_sales_past_thirty_days: i32,
    #[schema(value_type = String, example = "0.6")]
    pub daily_sales_past_thirty_days: BigDecimal,
    #[schema(value_type = String, example = "5.994")]
    pub gross_income: BigDecimal,
}

impl Report {
    /// Builds the report for `product` given the units it sold in the window.
    ///
    /// Zero units sold yields zero daily sales and zero income rather than a
    /// division error.
    pub fn compute(product: Product, total_sales: i32) -> Self {
        let (daily_sales, gross_income) = if total_sales == 0 {
            (BigDecimal::zero(), BigDecimal::zero())
        } else {
            let daily_sales =
                round(BigDecimal::from(SALES_WINDOW_DAYS) / BigDecimal::from(total_sales));
            let gross_income =
                round((&daily_sales * &product.price).with_prec(INCOME_PRECISION));
            (daily_sales, gross_income)
        };

        Self {
            product,
            total_sales_past_thirty_days: total_sales,
            daily_sales_past_thirty_days: daily_sales,
            gross_income,
        }
    }
}

fn round(value: BigDecimal) -> BigDecimal {
    let rounded = value
        .with_scale_round(DECIMAL_SCALE, RoundingMode::HalfEven)
        .normalized();
    // normalized() turns 30 into 3E+1; keep whole numbers in plain notation
    let (_, scale) = rounded.as_bigint_and_exponent();
    if scale < 0 {
        rounded.with_scale(0)
    } else {
        rounded
    }
}

/// Immutable lookup of units sold per product id.
#[derive(Debug, Clone)]
pub struct SalesTable {
    units_sold: HashMap<i32, i32>,
}

impl SalesTable {
    pub fn new(entries: impl IntoIterator<Item = (i32, i32)>) -> Self {
        Self {
            units_sold: entries.into_iter().collect(),
        }
    }

    /// The fixed 30-day sales figures for ids 1 through 26.
    pub fn last_thirty_days() -> Self {
        Self::new(SALES_LAST_30_DAYS)
    }

    pub fn units_sold(&self, product_id: i32) -> Option<i32> {
        self.units_sold.get(&product_id).copied()
    }
}
