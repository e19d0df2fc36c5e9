//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! .env file (dotenvy, optional)
//!     → config file (TOML, optional)
//!     → loader.rs (parse, then environment overrides)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → passed by reference to the pool, server and observability setup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a restart
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::AppConfig;
pub use schema::CorsConfig;
pub use schema::DatabaseConfig;
pub use schema::ObservabilityConfig;
