// Model loading and the prediction pipeline
pub mod ml;

// Startup-built state shared by request handlers
pub mod service_context;
