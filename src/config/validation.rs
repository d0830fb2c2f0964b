//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check path syntax (must be non-empty, rooted at '/')
//! - Detect conflicting routes (each literal path appears once)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Duplicate names are legal (observed in real tables) but logged as a
//!   warning since named lookup then falls back to document order

use std::collections::HashSet;

use crate::config::schema::RouterConfig;

/// A single semantic problem found in a route table definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Path does not start with '/'.
    UnrootedPath { path: String },
    /// The same literal path appears more than once.
    DuplicatePath { path: String },
    /// Route references no component.
    EmptyComponent { path: String },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::UnrootedPath { path } => {
                write!(f, "route path {:?} must start with '/'", path)
            }
            ValidationError::DuplicatePath { path } => {
                write!(f, "route path {:?} is defined more than once", path)
            }
            ValidationError::EmptyComponent { path } => {
                write!(f, "route {:?} has an empty component reference", path)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a route table definition, collecting every error.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut seen_paths = HashSet::new();
    let mut seen_names = HashSet::new();

    for route in &config.routes {
        if !route.path.starts_with('/') {
            errors.push(ValidationError::UnrootedPath {
                path: route.path.clone(),
            });
        }

        if !seen_paths.insert(route.path.as_str()) {
            errors.push(ValidationError::DuplicatePath {
                path: route.path.clone(),
            });
        }

        if route.component.is_empty() {
            errors.push(ValidationError::EmptyComponent {
                path: route.path.clone(),
            });
        }

        if let Some(name) = &route.name {
            if !seen_names.insert(name.as_str()) {
                tracing::warn!(
                    name = %name,
                    path = %route.path,
                    "duplicate route name; named lookup will select the first entry"
                );
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
