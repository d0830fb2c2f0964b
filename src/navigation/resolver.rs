//! The history-aware resolver.
//!
//! # Responsibilities
//! - Match the current location against the route table
//! - Track the "current resolved route" state
//! - Drive view activation through the ViewHost seam
//! - Expose navigation primitives: by path, by name, back, forward

use std::sync::Arc;

use thiserror::Error;

use crate::navigation::history::History;
use crate::routing::{RouteEntry, RouteTable};

/// Errors raised by programmatic navigation.
#[derive(Debug, Error)]
pub enum NavigationError {
    /// No entry in the table carries the requested name. This is a
    /// configuration omission: the fix is adding the name to the table.
    #[error("no route named {name:?} in the table")]
    RouteNotFound { name: String },
}

/// Outcome of matching a location against the table.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// A route entry matched the location.
    Matched(RouteEntry),
    /// No entry matched. The table defines no fallback; the embedding
    /// application decides what to render.
    NotFound,
}

impl Resolution {
    pub fn is_matched(&self) -> bool {
        matches!(self, Resolution::Matched(_))
    }

    pub fn entry(&self) -> Option<&RouteEntry> {
        match self {
            Resolution::Matched(entry) => Some(entry),
            Resolution::NotFound => None,
        }
    }
}

/// Rendering engine seam: receives mount/unmount commands as routes
/// activate and deactivate. Rendering itself lives behind this trait.
pub trait ViewHost {
    fn mount(&mut self, entry: &RouteEntry);
    fn unmount(&mut self, entry: &RouteEntry);
}

/// Host that forwards activation straight to the views' lifecycle hooks.
#[derive(Debug, Default)]
pub struct HookHost;

impl ViewHost for HookHost {
    fn mount(&mut self, entry: &RouteEntry) {
        entry.component().mount();
    }

    fn unmount(&mut self, entry: &RouteEntry) {
        entry.component().unmount();
    }
}

/// History-aware resolver over an immutable route table.
///
/// Owns the history provider and the current-route state; the table is
/// shared and never mutated. One resolver per application, constructed at
/// startup and passed by reference to the composition root.
pub struct Resolver<H: History> {
    table: Arc<RouteTable>,
    history: H,
    current: Option<usize>,
}

impl<H: History> Resolver<H> {
    /// Create a resolver over a table and a history provider.
    ///
    /// Nothing is activated until [`sync`](Self::sync) runs the initial
    /// resolution against the history's starting location.
    pub fn new(table: Arc<RouteTable>, history: H) -> Self {
        Self {
            table,
            history,
            current: None,
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    /// The currently activated route entry, if any.
    pub fn current(&self) -> Option<&RouteEntry> {
        self.current.and_then(|index| self.table.get(index))
    }

    /// Pure lookup of a location against the table. No side effects.
    pub fn resolve(&self, location: &str) -> Resolution {
        match self.table.resolve(location) {
            Some(entry) => Resolution::Matched(entry.clone()),
            None => Resolution::NotFound,
        }
    }

    /// Run the initial resolution against the history's current location.
    pub fn sync(&mut self, host: &mut dyn ViewHost) -> Resolution {
        self.activate(host)
    }

    /// Navigate to a path: push it onto the history and activate the
    /// matching view. An unmatched path still navigates; it deactivates
    /// the current view and leaves the resolver in the NotFound state.
    pub fn navigate_to(&mut self, location: &str, host: &mut dyn ViewHost) -> Resolution {
        tracing::info!(to = %location, "navigating");
        self.history.push(location);
        self.activate(host)
    }

    /// Navigate to the route carrying the given name.
    ///
    /// With duplicate names the first entry in document order is selected.
    pub fn navigate_by_name(
        &mut self,
        name: &str,
        host: &mut dyn ViewHost,
    ) -> Result<Resolution, NavigationError> {
        let path = match self.table.entry_named(name) {
            Some(entry) => entry.path().to_string(),
            None => {
                return Err(NavigationError::RouteNotFound {
                    name: name.to_string(),
                })
            }
        };
        Ok(self.navigate_to(&path, host))
    }

    /// Step back in history and re-activate. Returns false if the history
    /// is already at its oldest entry.
    pub fn back(&mut self, host: &mut dyn ViewHost) -> bool {
        if !self.history.back() {
            return false;
        }
        self.activate(host);
        true
    }

    /// Step forward in history and re-activate. Returns false if the
    /// history is already at its newest entry.
    pub fn forward(&mut self, host: &mut dyn ViewHost) -> bool {
        if !self.history.forward() {
            return false;
        }
        self.activate(host);
        true
    }

    /// Match the history's current location and swap views through the
    /// host: unmount outgoing, then mount incoming. Aliased entries bound
    /// to the same component keep the view mounted.
    fn activate(&mut self, host: &mut dyn ViewHost) -> Resolution {
        let table = Arc::clone(&self.table);
        let location = self.history.location();
        let next = table.position(location);

        if next.is_none() {
            tracing::warn!(location = %location, "no route matched; table defines no fallback");
        }

        if next != self.current {
            let outgoing = self.current.and_then(|index| table.get(index));
            let incoming = next.and_then(|index| table.get(index));

            let same_component = match (outgoing, incoming) {
                (Some(out), Some(inc)) => out.component() == inc.component(),
                _ => false,
            };

            if same_component {
                tracing::debug!(location = %location, "aliased route; view stays mounted");
            } else {
                if let Some(out) = outgoing {
                    host.unmount(out);
                }
                if let Some(inc) = incoming {
                    host.mount(inc);
                }
            }

            self.current = next;
        }

        match next.and_then(|index| table.get(index)) {
            Some(entry) => {
                tracing::debug!(location = %location, path = %entry.path(), "route resolved");
                Resolution::Matched(entry.clone())
            }
            None => Resolution::NotFound,
        }
    }
}
