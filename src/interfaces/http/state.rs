use crate::application::service_context::ServiceContext;
use std::sync::Arc;

pub type AppState = Arc<ServiceContext>;
