pub mod feature_registry;
pub mod normalizer;

pub use feature_registry::{
    CATEGORICAL_FEATURES, FEATURE_COLUMNS, FeatureRow, FeatureValue, NUMERICAL_FEATURES,
    PROFIT_MARGIN_COLUMN,
};
pub use normalizer::{derive_profit_margin, normalize};
