pub mod logistic_pipeline;

pub use logistic_pipeline::{LogisticPipeline, UnknownCategoryPolicy};
