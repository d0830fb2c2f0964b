//! Route table lookup.
//!
//! # Responsibilities
//! - Store the ordered sequence of route entries
//! - Look up the entry matching a location (first match wins)
//! - Look up entries by symbolic name (document order)
//!
//! # Design Decisions
//! - Immutable after construction (shared freely without locks)
//! - O(n) scan in document order; tables are a handful of entries
//! - Explicit `None` on no match rather than a silent default: fallback
//!   behavior belongs to the embedding application, not the table

use thiserror::Error;

use crate::component::{ComponentRef, ComponentRegistry};
use crate::config::schema::RouterConfig;
use crate::routing::entry::RouteEntry;
use crate::routing::path_of;

/// Errors raised while compiling a route table from its definition.
#[derive(Debug, Error)]
pub enum TableError {
    /// A route references a component key missing from the registry.
    #[error("route {path:?} references unknown component {component:?}")]
    UnknownComponent { path: String, component: String },
}

/// The static, ordered list of path-to-component bindings.
///
/// Constructed once at application start and immutable thereafter.
#[derive(Debug, Clone)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
}

impl RouteTable {
    /// Start a literal table definition.
    pub fn builder() -> RouteTableBuilder {
        RouteTableBuilder::new()
    }

    /// Compile a declarative definition against a component registry.
    ///
    /// Fails on the first dangling component reference; the definition is
    /// expected to have passed [`validate_config`] already.
    ///
    /// [`validate_config`]: crate::config::validation::validate_config
    pub fn from_config(
        config: &RouterConfig,
        registry: &ComponentRegistry,
    ) -> Result<Self, TableError> {
        let mut entries = Vec::with_capacity(config.routes.len());
        for route in &config.routes {
            let component = registry.get(&route.component).cloned().ok_or_else(|| {
                TableError::UnknownComponent {
                    path: route.path.clone(),
                    component: route.component.clone(),
                }
            })?;
            entries.push(RouteEntry::new(&route.path, route.name.clone(), component));
        }

        tracing::debug!(entries = entries.len(), "route table compiled");
        Ok(Self { entries })
    }

    /// Resolve a location to its route entry.
    ///
    /// The query and fragment are ignored; the path must equal an entry's
    /// pattern exactly. The first matching entry in document order wins.
    pub fn resolve(&self, location: &str) -> Option<&RouteEntry> {
        let path = path_of(location);
        self.entries.iter().find(|entry| entry.matches(path))
    }

    /// Resolve a location to its bound component.
    pub fn resolve_component(&self, location: &str) -> Option<&ComponentRef> {
        self.resolve(location).map(RouteEntry::component)
    }

    /// Find the first entry (document order) carrying the given name.
    ///
    /// Duplicate names are legal; the earliest entry shadows later ones.
    pub fn entry_named(&self, name: &str) -> Option<&RouteEntry> {
        self.entries.iter().find(|entry| entry.is_named(name))
    }

    /// Entries in document order.
    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&RouteEntry> {
        self.entries.get(index)
    }

    pub(crate) fn position(&self, location: &str) -> Option<usize> {
        let path = path_of(location);
        self.entries.iter().position(|entry| entry.matches(path))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builder for literal table definitions, mirroring the declarative form.
#[derive(Debug, Default)]
pub struct RouteTableBuilder {
    entries: Vec<RouteEntry>,
}

impl RouteTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a path to a component.
    pub fn route(mut self, path: impl Into<String>, component: ComponentRef) -> Self {
        self.entries.push(RouteEntry::new(path, None, component));
        self
    }

    /// Bind a path to a component under a symbolic name.
    pub fn named_route(
        mut self,
        path: impl Into<String>,
        name: impl Into<String>,
        component: ComponentRef,
    ) -> Self {
        self.entries
            .push(RouteEntry::new(path, Some(name.into()), component));
        self
    }

    /// Freeze the definition into an immutable table.
    pub fn build(self) -> RouteTable {
        RouteTable {
            entries: self.entries,
        }
    }
}
