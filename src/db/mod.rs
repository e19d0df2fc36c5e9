//! Persistence subsystem.
//!
//! # Data Flow
//! ```text
//! DatabaseConfig
//!     → pool.rs (bounded MySqlPool, lazy connections)
//!     → store.rs (MySqlApplicationStore: one statement per call)
//!     → shared as Arc<dyn ApplicationStore> in the HTTP state
//! ```
//!
//! The table layout lives in `schema/driver_applications.sql`.

pub mod error;
pub mod pool;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use pool::create_pool;
pub use store::{ApplicationStore, MySqlApplicationStore};
