//! History-aware resolution subsystem.
//!
//! # Data Flow
//! ```text
//! Navigation event (user click, programmatic call)
//!     → history.rs (location push/replace/back)
//!     → resolver.rs (match new location against RouteTable)
//!     → ViewHost (unmount outgoing view, mount incoming view)
//!     → Resolver state: "current resolved route"
//! ```
//!
//! # Design Decisions
//! - Resolution is a pure, synchronous lookup; the resolver adds only the
//!   "current route" state on top of the immutable table
//! - Explicit `Resolution::NotFound` instead of a fallback route; what to
//!   render then is the embedding application's call
//! - Activation order: unmount outgoing, then mount incoming
//! - Aliased navigation (same component behind both paths) keeps the
//!   view mounted instead of remounting it
//! - Single-threaded, event-driven: events arrive one at a time, no locks

pub mod history;
pub mod resolver;

pub use history::{History, MemoryHistory};
pub use resolver::{HookHost, NavigationError, Resolution, Resolver, ViewHost};
