// file: src/client/mod.rs
// description: HTTP client module exports
// reference: internal module structure

pub mod api;

pub use api::ApiClient;
