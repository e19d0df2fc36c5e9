//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → cors.rs enforce_origin (reject unlisted Origin with 403)
//!     → cors.rs CorsLayer (preflight + CORS response headers)
//!     → handlers
//! ```
//!
//! Body size limits are applied in `http::server` from `SecurityConfig`.

pub mod cors;

pub use cors::{enforce_origin, OriginPolicy};
