//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → FetchConfig (validated, immutable)
//!     → consumed by RequestIssuer, HttpTransport and logging setup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::FetchConfig;
pub use schema::LogFormat;
pub use schema::ObservabilityConfig;
pub use schema::RequestConfig;
pub use schema::TimeoutConfig;
pub use schema::TimeoutPolicy;
