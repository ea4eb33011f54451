// HTTP endpoints
pub mod http;
