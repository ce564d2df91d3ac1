//! Centralized display-text formatting.
//!
//! All label and metrics text goes through this module so the overlay and
//! any host-side mirror of it render identically.

use crate::element::ElementRef;

/// Format the size readout for an element: rounded `{w}px × {h}px`.
///
/// # Examples
/// ```
/// use blueprint_types::formatting::format_metrics;
/// assert_eq!(format_metrics(320.0, 48.0), "320px × 48px");
/// assert_eq!(format_metrics(320.4, 48.5), "320px × 49px");
/// ```
pub fn format_metrics(width: f32, height: f32) -> String {
    format!(
        "{}px × {}px",
        width.round() as i64,
        height.round() as i64
    )
}

/// Short descriptive label for an element.
///
/// An explicit label override replaces everything. Otherwise the lowercase
/// tag name is qualified by `#id` when the element has a stable id, or by
/// the first class name when it has one.
///
/// # Examples
/// ```
/// use blueprint_types::formatting::element_label;
/// use blueprint_types::{ElementId, ElementRef, TagKind};
///
/// let nav = ElementRef::new(ElementId(1), TagKind::from_name("nav")).with_dom_id("menu");
/// assert_eq!(element_label(&nav), "nav#menu");
/// ```
pub fn element_label(element: &ElementRef) -> String {
    if let Some(label) = &element.label {
        return label.clone();
    }

    let tag = element.tag.name();
    if let Some(id) = &element.dom_id {
        format!("{}#{}", tag, id)
    } else if let Some(class) = &element.css_class {
        format!("{}.{}", tag, class)
    } else {
        tag.to_string()
    }
}
