use crate::domain::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize};

pub const DEFAULT_REORDER_FREQUENCY: i64 = 30;
pub const DEFAULT_BRAND: &str = "Generic";
pub const DEFAULT_SUPPLIER: &str = "Default";

fn default_reorder_frequency() -> i64 {
    DEFAULT_REORDER_FREQUENCY
}

/// Accepts integers and integral floats such as `30.0`; rejects `30.5`.
fn whole_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum WholeNumber {
        Integer(i64),
        Float(f64),
    }

    match WholeNumber::deserialize(deserializer)? {
        WholeNumber::Integer(v) => Ok(v),
        WholeNumber::Float(v) if v.fract() == 0.0 && v.abs() < i64::MAX as f64 => Ok(v as i64),
        WholeNumber::Float(v) => Err(serde::de::Error::custom(format!(
            "expected a whole number, got {}",
            v
        ))),
    }
}

/// One inventory record as submitted by the client.
///
/// `brand` and `supplier` fall back to their defaults when absent or `null`.
/// `product_id` is never used for prediction; it is only echoed back in batch output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default)]
    pub product_id: Option<String>,
    pub cost_price: f64,
    pub selling_price: f64,
    #[serde(default)]
    pub profit_margin: Option<f64>,
    #[serde(
        default = "default_reorder_frequency",
        deserialize_with = "whole_number"
    )]
    pub reorder_frequency: i64,
    #[serde(deserialize_with = "whole_number")]
    pub current_stock: i64,
    #[serde(deserialize_with = "whole_number")]
    pub minimum_stock_level: i64,
    pub category: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub supplier: Option<String>,
}

impl ProductRecord {
    pub fn brand(&self) -> &str {
        self.brand.as_deref().unwrap_or(DEFAULT_BRAND)
    }

    pub fn supplier(&self) -> &str {
        self.supplier.as_deref().unwrap_or(DEFAULT_SUPPLIER)
    }

    /// Range checks applied before a record is normalized.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_positive("cost_price", self.cost_price)?;
        require_positive("selling_price", self.selling_price)?;
        if self.profit_margin.is_some_and(|margin| !margin.is_finite()) {
            return Err(ValidationError::NotFinite {
                field: "profit_margin",
            });
        }
        require_at_least("reorder_frequency", self.reorder_frequency, 1)?;
        require_at_least("current_stock", self.current_stock, 0)?;
        require_at_least("minimum_stock_level", self.minimum_stock_level, 0)?;
        Ok(())
    }
}

fn require_positive(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite { field });
    }
    if value <= 0.0 {
        return Err(ValidationError::NotPositive { field, value });
    }
    Ok(())
}

fn require_at_least(field: &'static str, value: i64, min: i64) -> Result<(), ValidationError> {
    if value < min {
        return Err(ValidationError::BelowMinimum { field, min, value });
    }
    Ok(())
}
