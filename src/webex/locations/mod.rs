//! Location and floor module

mod api;
mod models;

pub use models::{Address, Floor, Location};
