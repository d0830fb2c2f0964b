//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! route table file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → RouterConfig (validated, immutable)
//!     → compiled into a RouteTable at startup
//! ```
//!
//! # Design Decisions
//! - A route table is declared once and never reloaded; there is no
//!   watcher and no hot swap
//! - Validation separates syntactic (serde) from semantic checks
//! - Duplicate route names are reported as warnings, not errors: the
//!   table still resolves them deterministically (document order)

pub mod loader;
pub mod schema;
pub mod validation;

pub use schema::RouteConfig;
pub use schema::RouterConfig;
