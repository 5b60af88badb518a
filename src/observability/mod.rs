//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handler and startup code produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request counters and latency histogram)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Request ID flows through every log line of a request (tower-http layers)
//! - Metrics are cheap; with no exporter installed they are no-ops

pub mod logging;
pub mod metrics;
