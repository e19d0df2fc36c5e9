//! Driver applications API library.
//!
//! A small intake service: web forms post driver job applications, which are
//! validated, normalized and stored in MySQL; staff tooling lists them back.
//!
//! ```text
//!   Client ──▶ http::server (request id, trace, limits, origin policy)
//!                 │
//!                 ├── GET  /              → http::health
//!                 ├── POST /applications  → applications::handlers → validation → db::store
//!                 └── GET  /applications  → applications::handlers → db::store
//!
//!   config ─▶ db::pool (MySqlPool)   observability (tracing, metrics)   lifecycle (shutdown)
//! ```

pub mod applications;
pub mod config;
pub mod db;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::schema::AppConfig;
pub use db::{ApplicationStore, MySqlApplicationStore};
pub use http::HttpServer;
pub use lifecycle::Shutdown;
