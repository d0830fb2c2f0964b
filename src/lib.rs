//! Client-Side SPA Routing Library
//!
//! An immutable route table mapping URL paths to view components, plus a
//! history-aware resolver that matches the current location against the
//! table and drives view activation through a host seam.

pub mod component;
pub mod config;
pub mod navigation;
pub mod observability;
pub mod routing;

pub use component::{ComponentRef, ComponentRegistry, StaticView, View};
pub use config::schema::{RouteConfig, RouterConfig};
pub use navigation::{
    History, HookHost, MemoryHistory, NavigationError, Resolution, Resolver, ViewHost,
};
pub use routing::{RouteEntry, RouteTable, RouteTableBuilder, TableError};
