//! Device module

mod api;
mod models;

pub use models::Device;
