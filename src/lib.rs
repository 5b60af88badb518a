//! Café Directory Service Library

pub mod config;
pub mod directory;
pub mod http;
pub mod lifecycle;
pub mod observability;

pub use config::CafeConfig;
pub use directory::{Cafe, CityDirectory};
pub use http::CafeServer;
pub use lifecycle::Shutdown;
