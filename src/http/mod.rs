//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, tracing span)
//!     → security::cors (origin policy)
//!     → extract.rs (JSON body → typed submission)
//!     → applications::handlers / health.rs
//!     → error.rs ({message} bodies for failures)
//! ```

pub mod error;
pub mod extract;
pub mod health;
pub mod request;
pub mod server;

pub use error::{ApiError, MessageBody};
pub use extract::JsonBody;
pub use request::{UuidRequestId, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
