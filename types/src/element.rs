//! Element snapshots delivered by the host binding.
//!
//! The host document owns all elements; the tracker holds only these
//! non-owning snapshots, taken at event-dispatch time. Identity is the
//! host-assigned [`ElementId`]; the descriptive fields carry exactly what
//! the ignore-filter and the label logic need.

use serde::{Deserialize, Serialize};

use crate::geometry::ElementBounds;

/// Opaque identity of a node in the host document tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ElementId(pub u64);

/// Tag classification for filtering and label display.
///
/// Structural layout containers get their own variants; everything else is
/// carried by lowercase tag name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    /// The document root (`<html>`).
    Root,
    Body,
    Header,
    Footer,
    Main,
    Section,
    /// Any other tag, by lowercase name.
    Other(String),
}

impl TagKind {
    /// Classify a tag name (case-insensitive).
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "html" => Self::Root,
            "body" => Self::Body,
            "header" => Self::Header,
            "footer" => Self::Footer,
            "main" => Self::Main,
            "section" => Self::Section,
            other => Self::Other(other.to_string()),
        }
    }

    /// Lowercase tag name, as rendered in labels.
    pub fn name(&self) -> &str {
        match self {
            Self::Root => "html",
            Self::Body => "body",
            Self::Header => "header",
            Self::Footer => "footer",
            Self::Main => "main",
            Self::Section => "section",
            Self::Other(name) => name,
        }
    }

    /// Structural layout containers, too coarse to be useful targets.
    pub fn is_structural(&self) -> bool {
        !matches!(self, Self::Other(_))
    }

    /// The document root or body. Hovering these means the pointer left
    /// every real target, not that a wrapper swallowed the hit.
    pub fn is_void(&self) -> bool {
        matches!(self, Self::Root | Self::Body)
    }
}

/// Snapshot of one document element at event-dispatch time.
///
/// May go stale if the element is removed from the document afterwards;
/// a detached element snapshots with empty [`bounds`](Self::bounds).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementRef {
    pub id: ElementId,
    pub tag: TagKind,
    /// Explicit label override from the opt-in annotation attribute.
    pub label: Option<String>,
    /// The element's id attribute, if present.
    pub dom_id: Option<String>,
    /// First class name, if any.
    pub css_class: Option<String>,
    /// Bounding rect at snapshot time, viewport coordinates.
    pub bounds: ElementBounds,
    /// True when the element lives inside the overlay's own subtree.
    /// Computed by the host, which can see the ancestor chain.
    pub overlay_member: bool,
}

impl ElementRef {
    pub fn new(id: ElementId, tag: TagKind) -> Self {
        Self {
            id,
            tag,
            label: None,
            dom_id: None,
            css_class: None,
            bounds: ElementBounds::default(),
            overlay_member: false,
        }
    }

    pub fn with_bounds(mut self, bounds: ElementBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_dom_id(mut self, dom_id: impl Into<String>) -> Self {
        self.dom_id = Some(dom_id.into());
        self
    }

    pub fn with_css_class(mut self, css_class: impl Into<String>) -> Self {
        self.css_class = Some(css_class.into());
        self
    }

    /// Mark the element as part of the overlay's own subtree.
    pub fn in_overlay(mut self) -> Self {
        self.overlay_member = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_classification() {
        assert_eq!(TagKind::from_name("HTML"), TagKind::Root);
        assert_eq!(TagKind::from_name("body"), TagKind::Body);
        assert_eq!(TagKind::from_name("Section"), TagKind::Section);
        assert_eq!(TagKind::from_name("DIV"), TagKind::Other("div".to_string()));
    }

    #[test]
    fn test_structural_and_void() {
        assert!(TagKind::Header.is_structural());
        assert!(!TagKind::Header.is_void());
        assert!(TagKind::Body.is_void());
        assert!(TagKind::Root.is_void());
        assert!(!TagKind::from_name("button").is_structural());
    }

    #[test]
    fn test_tag_name_roundtrip() {
        assert_eq!(TagKind::from_name("NAV").name(), "nav");
        assert_eq!(TagKind::Main.name(), "main");
    }
}
