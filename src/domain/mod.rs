// Domain-specific error types
pub mod errors;

// Feature schema and record normalization
pub mod ml;

// Model introspection
pub mod model_info;

// Port interfaces
pub mod ports;

// Prediction outputs
pub mod prediction;

// Inventory input records
pub mod product;
