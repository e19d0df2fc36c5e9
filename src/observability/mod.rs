//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers, store, middleware produce:
//!     → logging.rs (structured log events, request spans)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON lines)
//!     → Prometheus scrape endpoint (optional)
//! ```
//!
//! # Design Decisions
//! - Request ID recorded on every HTTP span
//! - Metrics disabled by default; recording stays cheap when off

pub mod logging;
pub mod metrics;
