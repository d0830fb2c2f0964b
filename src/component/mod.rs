//! View component subsystem.
//!
//! # Data Flow
//! ```text
//! View implementations (application-supplied)
//!     → ComponentRef (shared, identity-compared handle)
//!     → ComponentRegistry (key → component, referenced by config)
//!     → RouteTable entries hold ComponentRefs, never own the views
//! ```
//!
//! # Design Decisions
//! - Components are opaque: the router only needs "mountable, unmountable"
//! - Identity is pointer identity, so two paths aliasing one component
//!   compare equal through either route entry
//! - Single-threaded UI context: no Send/Sync bounds on views

pub mod registry;
pub mod view;

pub use registry::ComponentRegistry;
pub use view::{ComponentRef, StaticView, View};
