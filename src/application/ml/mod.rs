pub mod model_loader;
pub mod prediction_service;

pub use model_loader::load_classifier;
pub use prediction_service::PredictionService;
