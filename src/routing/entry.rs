//! Route entries: path-to-component bindings.
//!
//! # Responsibilities
//! - Hold one path pattern, optional route name, and bound component
//! - Match a path against the pattern (exact literal, case-sensitive)
//! - Build absolute URLs for an entry against a base
//!
//! # Design Decisions
//! - Path matching is case-sensitive (paths are not host names)
//! - Entries never own the component lifecycle; they hold shared handles

use url::Url;

use crate::component::ComponentRef;

/// One route definition: a literal path bound to a view component, with an
/// optional symbolic name for programmatic navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteEntry {
    path: String,
    name: Option<String>,
    component: ComponentRef,
}

impl RouteEntry {
    pub fn new(path: impl Into<String>, name: Option<String>, component: ComponentRef) -> Self {
        Self {
            path: path.into(),
            name,
            component,
        }
    }

    /// The literal path pattern of this entry.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The symbolic route name, if the entry carries one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The bound view component.
    pub fn component(&self) -> &ComponentRef {
        &self.component
    }

    /// Returns true if the given path equals this entry's pattern.
    pub fn matches(&self, path: &str) -> bool {
        self.path == path
    }

    /// Returns true if this entry carries the given route name.
    pub fn is_named(&self, name: &str) -> bool {
        self.name.as_deref() == Some(name)
    }

    /// Absolute URL for this entry against an application base.
    ///
    /// The base is treated as a directory whether or not it carries a
    /// trailing slash, so a base of `https://host/app` keeps its `/app`
    /// segment.
    pub fn absolute_url(&self, base: &Url) -> Result<Url, url::ParseError> {
        let mut base = base.clone();
        if !base.path().ends_with('/') {
            base.set_path(&format!("{}/", base.path()));
        }
        base.join(self.path.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::StaticView;

    fn entry(path: &str, name: Option<&str>) -> RouteEntry {
        RouteEntry::new(
            path,
            name.map(String::from),
            ComponentRef::new(StaticView::new("MileStone")),
        )
    }

    #[test]
    fn test_exact_match() {
        let e = entry("/milestone", None);

        assert!(e.matches("/milestone"));
        assert!(!e.matches("/milestone/"));
        assert!(!e.matches("/MILESTONE")); // Case sensitive
        assert!(!e.matches("/mile"));
    }

    #[test]
    fn test_named_lookup() {
        let e = entry("/milestone", Some("milestone"));
        assert!(e.is_named("milestone"));
        assert!(!e.is_named("hello"));

        let unnamed = entry("/", None);
        assert!(!unnamed.is_named("milestone"));
    }

    #[test]
    fn test_absolute_url() {
        let base = Url::parse("https://trails.example.com/").unwrap();

        let e = entry("/milestone", None);
        assert_eq!(
            e.absolute_url(&base).unwrap().as_str(),
            "https://trails.example.com/milestone"
        );

        let root = entry("/", None);
        assert_eq!(
            root.absolute_url(&base).unwrap().as_str(),
            "https://trails.example.com/"
        );
    }

    #[test]
    fn test_absolute_url_keeps_base_segment() {
        // A base without a trailing slash is still a directory.
        let base = Url::parse("https://trails.example.com/app").unwrap();

        let e = entry("/milestone", None);
        assert_eq!(
            e.absolute_url(&base).unwrap().as_str(),
            "https://trails.example.com/app/milestone"
        );
    }
}
