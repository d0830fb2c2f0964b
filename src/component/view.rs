//! View component handles.

use std::fmt;
use std::sync::Arc;

/// Contract a view component exposes to the router: it can be mounted
/// into and unmounted from the rendered UI tree. Rendering itself is
/// owned by the component layer.
pub trait View {
    /// Human-readable component label, used in logs and CLI output.
    fn label(&self) -> &str;

    /// Called when the resolver activates a route bound to this view.
    fn mount(&self) {}

    /// Called when the resolver deactivates a route bound to this view.
    fn unmount(&self) {}
}

/// Shared handle to a view component.
///
/// Equality is pointer identity: two refs are equal only if they point at
/// the same component instance. Route aliasing relies on this: `/` and
/// `/milestone` bound to one component yield equal refs.
#[derive(Clone)]
pub struct ComponentRef(Arc<dyn View>);

impl ComponentRef {
    /// Wrap a view in a shared handle.
    pub fn new(view: impl View + 'static) -> Self {
        Self(Arc::new(view))
    }

    pub fn label(&self) -> &str {
        self.0.label()
    }

    pub fn mount(&self) {
        self.0.mount();
    }

    pub fn unmount(&self) {
        self.0.unmount();
    }
}

impl PartialEq for ComponentRef {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for ComponentRef {}

impl fmt::Debug for ComponentRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComponentRef").field(&self.label()).finish()
    }
}

/// Minimal view that only logs its lifecycle.
///
/// Stands in for real components in tests and in the CLI, where the point
/// is route resolution rather than rendering.
#[derive(Debug)]
pub struct StaticView {
    label: String,
}

impl StaticView {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

impl View for StaticView {
    fn label(&self) -> &str {
        &self.label
    }

    fn mount(&self) {
        tracing::debug!(component = %self.label, "view mounted");
    }

    fn unmount(&self) {
        tracing::debug!(component = %self.label, "view unmounted");
    }
}
