//! Configuration schema definitions.
//!
//! This module defines the declarative shape of a route table. All types
//! derive Serde traits for deserialization from config files; the same
//! records can equally be constructed as literals in code.

use serde::{Deserialize, Serialize};

/// Root configuration for a client-side router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Route definitions mapping paths to view components, in match order.
    pub routes: Vec<RouteConfig>,
}

/// A single route definition binding a path pattern to a view component.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Literal path to match (e.g., "/milestone").
    pub path: String,

    /// Optional symbolic identifier for programmatic navigation.
    #[serde(default)]
    pub name: Option<String>,

    /// Registry key of the view component this route activates.
    pub component: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_config_parses() {
        let config: RouterConfig = toml::from_str(
            r#"
            [[routes]]
            path = "/"
            component = "MileStone"

            [[routes]]
            path = "/hello"
            name = "hello"
            component = "HelloWorld"
            "#,
        )
        .unwrap();

        assert_eq!(config.routes.len(), 2);
        assert_eq!(config.routes[0].path, "/");
        assert_eq!(config.routes[0].name, None);
        assert_eq!(config.routes[1].name.as_deref(), Some("hello"));
        assert_eq!(config.routes[1].component, "HelloWorld");
    }

    #[test]
    fn test_empty_config_defaults() {
        let config: RouterConfig = toml::from_str("").unwrap();
        assert!(config.routes.is_empty());
    }
}
