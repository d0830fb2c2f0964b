//! Routing subsystem: the route table itself.
//!
//! # Data Flow
//! ```text
//! Table Construction (at startup):
//!     RouteConfig[] + ComponentRegistry   (declarative definition)
//!         or RouteTableBuilder            (literal definition in code)
//!     → entry.rs (one RouteEntry per binding)
//!     → Freeze as immutable RouteTable
//!
//! Location lookup:
//!     "/milestone?from=map"
//!     → strip query/fragment
//!     → table.rs (scan entries in document order)
//!     → Return: first matching RouteEntry, or None
//! ```
//!
//! # Design Decisions
//! - Table built once at startup, immutable at runtime
//! - Literal path matching only; no parameters, wildcards, or regex
//! - Deterministic: same location always resolves to the same entry
//! - First match wins (document order)

pub mod entry;
pub mod table;

pub use entry::RouteEntry;
pub use table::{RouteTable, RouteTableBuilder, TableError};

/// Strip the query and fragment from a location, leaving the path.
pub(crate) fn path_of(location: &str) -> &str {
    let end = location
        .find(|c| c == '?' || c == '#')
        .unwrap_or(location.len());
    &location[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_of() {
        assert_eq!(path_of("/milestone"), "/milestone");
        assert_eq!(path_of("/milestone?from=map"), "/milestone");
        assert_eq!(path_of("/hello#greeting"), "/hello");
        assert_eq!(path_of("/?a=1#b"), "/");
    }
}
