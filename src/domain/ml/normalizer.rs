//! Record normalization.
//!
//! Turns a validated [`ProductRecord`] into the [`FeatureRow`] the model was
//! trained on. The only derived value is the profit margin; everything else is
//! passed through untouched, including the raw categorical strings (the model
//! artifact owns their encoding).

use crate::domain::errors::DerivationError;
use crate::domain::ml::feature_registry::FeatureRow;
use crate::domain::product::ProductRecord;

/// Profit margin in percent: `(selling_price - cost_price) / cost_price * 100`.
pub fn derive_profit_margin(cost_price: f64, selling_price: f64) -> Result<f64, DerivationError> {
    if cost_price.abs() < f64::EPSILON {
        return Err(DerivationError::ZeroCostPrice { cost_price });
    }

    let margin = (selling_price - cost_price) / cost_price * 100.0;
    if !margin.is_finite() {
        return Err(DerivationError::NonFiniteMargin {
            cost_price,
            selling_price,
        });
    }
    Ok(margin)
}

pub fn normalize(record: &ProductRecord) -> Result<FeatureRow, DerivationError> {
    let profit_margin = match record.profit_margin {
        Some(margin) => margin,
        None => derive_profit_margin(record.cost_price, record.selling_price)?,
    };

    Ok(FeatureRow {
        cost_price: record.cost_price,
        selling_price: record.selling_price,
        profit_margin,
        reorder_frequency: record.reorder_frequency,
        current_stock: record.current_stock,
        minimum_stock_level: record.minimum_stock_level,
        category: record.category.clone(),
        brand: record.brand().to_string(),
        supplier: record.supplier().to_string(),
    })
}
