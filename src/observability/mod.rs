//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Table compilation, resolution, and navigation produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumers:
//!     → stdout (CLI, headless embedders)
//!     → whatever subscriber the embedding application installs
//! ```
//!
//! # Design Decisions
//! - The library only emits `tracing` events; installing a subscriber is
//!   the embedder's job, with a helper for binaries
//! - Log level configurable via environment (RUST_LOG)

pub mod logging;
