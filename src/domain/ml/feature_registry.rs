/// Column label the model was trained with for the profit margin.
/// Differs from the request field name (`profit_margin`).
pub const PROFIT_MARGIN_COLUMN: &str = "Profit margin";

/// Numerical columns, in training order.
pub const NUMERICAL_FEATURES: [&str; 6] = [
    "cost_price",
    "selling_price",
    PROFIT_MARGIN_COLUMN,
    "reorder_frequency",
    "current_stock",
    "minimum_stock_level",
];

/// Categorical columns, in training order.
pub const CATEGORICAL_FEATURES: [&str; 3] = ["category", "brand", "supplier"];

/// Ordered list of all model input columns.
/// This order MUST match the order used when the model was fitted.
/// Any change here is a breaking change for model artifacts.
pub const FEATURE_COLUMNS: [&str; 9] = [
    NUMERICAL_FEATURES[0],
    NUMERICAL_FEATURES[1],
    NUMERICAL_FEATURES[2],
    NUMERICAL_FEATURES[3],
    NUMERICAL_FEATURES[4],
    NUMERICAL_FEATURES[5],
    CATEGORICAL_FEATURES[0],
    CATEGORICAL_FEATURES[1],
    CATEGORICAL_FEATURES[2],
];

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue<'a> {
    Real(f64),
    Integer(i64),
    Category(&'a str),
}

/// One model input row. Built per record and dropped after inference.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRow {
    pub cost_price: f64,
    pub selling_price: f64,
    pub profit_margin: f64,
    pub reorder_frequency: i64,
    pub current_stock: i64,
    pub minimum_stock_level: i64,
    pub category: String,
    pub brand: String,
    pub supplier: String,
}

impl FeatureRow {
    /// Column/value pairs in `FEATURE_COLUMNS` order
    pub fn columns(&self) -> [(&'static str, FeatureValue<'_>); 9] {
        [
            (FEATURE_COLUMNS[0], FeatureValue::Real(self.cost_price)),
            (FEATURE_COLUMNS[1], FeatureValue::Real(self.selling_price)),
            (FEATURE_COLUMNS[2], FeatureValue::Real(self.profit_margin)),
            (
                FEATURE_COLUMNS[3],
                FeatureValue::Integer(self.reorder_frequency),
            ),
            (FEATURE_COLUMNS[4], FeatureValue::Integer(self.current_stock)),
            (
                FEATURE_COLUMNS[5],
                FeatureValue::Integer(self.minimum_stock_level),
            ),
            (FEATURE_COLUMNS[6], FeatureValue::Category(&self.category)),
            (FEATURE_COLUMNS[7], FeatureValue::Category(&self.brand)),
            (FEATURE_COLUMNS[8], FeatureValue::Category(&self.supplier)),
        ]
    }
}
