// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The document boundary.
//!
//! The engine never talks to a real DOM. Hosts implement [`Document`] over
//! whatever element tree they have; [`MemoryDocument`](crate::MemoryDocument)
//! is a self-contained implementation for headless use and tests.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Insets, Rect, Size};

/// Kinds of descendant the engine looks up inside item content.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Descendant {
    /// First `h1`..`h6`.
    Heading,
    /// First `p`.
    Paragraph,
    /// First `img`.
    Image,
}

/// Element tree, styling and measurement, as seen by the engine.
///
/// Lookups that search "below" an element visit descendants in document
/// order and never match the element itself. Measurement methods report
/// layout after any inline styles the engine has written.
pub trait Document {
    /// Element handle. Cheap to copy and stable for the element's lifetime.
    type Element: Copy + Eq + Hash + Debug + 'static;

    /// Size of the viewport.
    fn viewport(&self) -> Size;

    /// Children of `element`, in order.
    fn children(&self, element: Self::Element) -> Vec<Self::Element>;

    /// Parent of `element`, if attached.
    fn parent(&self, element: Self::Element) -> Option<Self::Element>;

    /// First descendant of `root` carrying `class`.
    fn find_by_class(&self, root: Self::Element, class: &str) -> Option<Self::Element>;

    /// First descendant of `root` of the given kind.
    fn find_descendant(&self, root: Self::Element, kind: Descendant) -> Option<Self::Element>;

    /// Value of an attribute.
    fn attribute(&self, element: Self::Element, name: &str) -> Option<String>;

    /// Every attribute as `(name, value)` pairs, excluding `class` and `style`.
    fn attributes(&self, element: Self::Element) -> Vec<(String, String)>;

    /// Sets an attribute.
    fn set_attribute(&mut self, element: Self::Element, name: &str, value: &str);

    /// Removes an attribute.
    fn remove_attribute(&mut self, element: Self::Element, name: &str);

    /// Returns `true` if `element` carries `class`.
    fn has_class(&self, element: Self::Element, class: &str) -> bool;

    /// Adds a class (no-op if present).
    fn add_class(&mut self, element: Self::Element, class: &str);

    /// Removes a class (no-op if absent).
    fn remove_class(&mut self, element: Self::Element, class: &str);

    /// Full class list as a space-separated string.
    fn class_name(&self, element: Self::Element) -> String;

    /// Replaces the full class list.
    fn set_class_name(&mut self, element: Self::Element, classes: &str);

    /// Sets an inline style property.
    fn set_style(&mut self, element: Self::Element, property: &str, value: &str);

    /// Reads an inline style property.
    fn style(&self, element: Self::Element, property: &str) -> Option<String>;

    /// Removes an inline style property.
    fn remove_style(&mut self, element: Self::Element, property: &str);

    /// Removes every inline style.
    fn clear_style(&mut self, element: Self::Element);

    /// Concatenated text of `element` and its descendants.
    fn text_content(&self, element: Self::Element) -> String;

    /// Replaces the element's own text.
    fn set_text(&mut self, element: Self::Element, text: &str);

    /// Creates a detached element.
    fn create_element(&mut self, tag: &str) -> Self::Element;

    /// Appends `child` to `parent`, detaching it from any previous parent.
    fn append_child(&mut self, parent: Self::Element, child: Self::Element);

    /// Puts `wrapper` where `element` is and moves `element` inside it.
    fn wrap(&mut self, element: Self::Element, wrapper: Self::Element);

    /// Detaches `element` from the tree.
    fn remove(&mut self, element: Self::Element);

    /// Rendered width, including padding.
    fn offset_width(&self, element: Self::Element) -> f64;

    /// Rendered height, including padding.
    fn offset_height(&self, element: Self::Element) -> f64;

    /// Border box in viewport coordinates.
    fn bounding_rect(&self, element: Self::Element) -> Rect;

    /// Computed padding.
    fn padding(&self, element: Self::Element) -> Insets;

    /// Whether the host can watch elements for viewport intersection.
    ///
    /// When `false`, vertical mode falls back to re-testing items on scroll.
    fn supports_visibility_observer(&self) -> bool {
        true
    }

    /// Drops keyboard focus from `element`.
    fn blur(&mut self, element: Self::Element) {
        let _ = element;
    }
}
