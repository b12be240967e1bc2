use std::borrow::Cow;
use std::str::FromStr;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

/// Highest accepted price, inclusive.
pub const MAX_PRICE: &str = "9999999.99";

/// Fractional digits a price may carry once trailing zeros are dropped.
const MAX_PRICE_SCALE: i64 = 2;

/// Raw exponent window accepted before normalizing, so "15.990000" passes
/// but nothing large enough to overflow decimal arithmetic does.
const MIN_PRICE_EXPONENT: i64 = -7;
const MAX_PRICE_EXPONENT: i64 = 28;

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub description: String,
    /// Decimal price rendered as a string, e.g. "15.99"
    #[schema(value_type = String, example = "15.99")]
    pub price: BigDecimal,
}

/// Body accepted by both create and update.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ProductSaveRequest {
    #[validate(length(
        min = 2,
        max = 200,
        message = "Name must be between 2 and 200 characters long."
    ))]
    pub name: String,

    #[validate(length(
        min = 20,
        max = 500,
        message = "Description must be between 20 and 500 characters long."
    ))]
    pub description: String,

    /// Accepts either a JSON number or a decimal string.
    #[serde(deserialize_with = "deserialize_decimal")]
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = String, example = "15.99")]
    pub price: BigDecimal,
}

fn validate_price(price: &BigDecimal) -> Result<(), ValidationError> {
    // Bound the exponent before comparing; "1e-100000" would otherwise be
    // rescaled against MAX_PRICE and later overflow report arithmetic.
    let (_, scale) = price.as_bigint_and_exponent();
    if !(MIN_PRICE_EXPONENT..=MAX_PRICE_EXPONENT).contains(&scale)
        || price.normalized().as_bigint_and_exponent().1 > MAX_PRICE_SCALE
    {
        return Err(ValidationError::new("scale").with_message(Cow::Borrowed(
            "Price must be between 0.00 and 9999999.99 with at most 2 decimal places.",
        )));
    }

    let max = BigDecimal::from_str(MAX_PRICE).map_err(|_| ValidationError::new("range"))?;
    if *price < BigDecimal::from(0) || *price > max {
        return Err(ValidationError::new("range").with_message(Cow::Borrowed(
            "Price must be between 0.00 and 9999999.99.",
        )));
    }
    Ok(())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DecimalRepr {
    Number(serde_json::Number),
    Text(String),
}

/// Parses through the number's textual form so `15.99` stays `15.99` instead
/// of picking up binary floating-point noise.
fn deserialize_decimal<'de, D>(deserializer: D) -> Result<BigDecimal, D::Error>
where
    D: Deserializer<'de>,
{
    let text = match DecimalRepr::deserialize(deserializer)? {
        DecimalRepr::Number(n) => n.to_string(),
        DecimalRepr::Text(s) => s,
    };
    BigDecimal::from_str(text.trim())
        .map_err(|e| serde::de::Error::custom(format!("invalid price '{text}': {e}")))
}
