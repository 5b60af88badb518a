//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware: request ID, trace, timeout)
//!     → handler.rs (GET /cafe)
//!         → request.rs (collect and validate query parameters)
//!         → directory::filter (search + truncation)
//!         → response.rs (comma-joined body, or 400 with error message)
//!     → Send to client
//! ```

pub mod handler;
pub mod request;
pub mod request_id;
pub mod response;
pub mod server;

pub use request::{CafeQuery, RequestError, ValidatedQuery};
pub use request_id::{UuidRequestId, X_REQUEST_ID};
pub use response::format_names;
pub use server::{AppState, CafeServer};
