//! Eligibility filter for inspection targets.
//!
//! Suppresses noisy highlights: structural layout containers, the
//! application-root wrapper, and the overlay's own DOM. Pure
//! classification over element snapshots; the only configuration is the
//! app-root anchor id.

use blueprint_types::ElementRef;

/// Id attribute of the application-root container. The single well-known
/// wrapper around the whole app is too coarse to be a useful target.
pub const DEFAULT_APP_ROOT_ID: &str = "app";

#[derive(Debug, Clone)]
pub struct IgnoreFilter {
    app_root_id: String,
}

impl Default for IgnoreFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl IgnoreFilter {
    pub fn new() -> Self {
        Self {
            app_root_id: DEFAULT_APP_ROOT_ID.to_string(),
        }
    }

    /// Use a different app-root anchor id.
    pub fn with_app_root(app_root_id: impl Into<String>) -> Self {
        Self {
            app_root_id: app_root_id.into(),
        }
    }

    /// True when `element` must not become an inspection target.
    ///
    /// The explicit label override only exempts the structural-tag rule;
    /// the overlay's own DOM and the app-root wrapper stay ignored even
    /// when annotated.
    pub fn is_ignored(&self, element: &ElementRef) -> bool {
        if element.overlay_member {
            return true;
        }
        if element.dom_id.as_deref() == Some(self.app_root_id.as_str()) {
            return true;
        }
        // Detached elements snapshot as an empty rect
        if element.bounds.is_empty() {
            return true;
        }
        element.tag.is_structural() && element.label.is_none()
    }

    /// True for a hover that means "nothing under the pointer": the
    /// document root or body, rather than a filtered-but-present wrapper.
    pub fn is_void(&self, element: &ElementRef) -> bool {
        element.tag.is_void()
    }
}
