pub mod app;
pub mod args;
pub mod config;
pub mod error;
pub mod fetch;
pub mod indicator;
pub mod lang;
pub mod log;
pub mod manifest;
pub mod target;
pub mod templates;
pub mod transform;

pub use error::{Error, Result};
