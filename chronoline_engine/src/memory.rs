// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An in-memory [`Document`].

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use kurbo::{Insets, Rect, Size};

use crate::{Descendant, Document};

/// Handle to an element of a [`MemoryDocument`].
///
/// Elements are never freed, so a handle stays valid (possibly detached)
/// for the lifetime of its document.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    const fn idx(self) -> usize {
        self.0 as usize
    }
}

#[derive(Clone, Debug, Default)]
struct Node {
    tag: String,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    attributes: Vec<(String, String)>,
    classes: Vec<String>,
    styles: Vec<(String, String)>,
    text: String,
    natural: Size,
    rect: Rect,
    padding: Insets,
}

/// A small element tree with scripted measurements.
///
/// Layout is not computed. Each element reports the natural size and
/// bounding rectangle the host (or test) assigned to it, except that inline
/// `width`/`height` styles in pixels override the natural size, the way a
/// browser would honour them.
///
/// ```rust
/// use chronoline_engine::{Document, MemoryDocument};
/// use kurbo::Size;
///
/// let mut doc = MemoryDocument::new(Size::new(1024.0, 768.0));
/// let list = doc.element("div", "timeline__items");
/// let item = doc.element("div", "timeline__item");
/// doc.append_child(doc.body(), list);
/// doc.append_child(list, item);
/// doc.set_natural_size(item, Size::new(200.0, 120.0));
///
/// assert_eq!(doc.find_by_class(doc.body(), "timeline__item"), Some(item));
/// doc.set_style(item, "height", "150px");
/// assert_eq!(doc.offset_height(item), 150.0);
/// ```
#[derive(Clone, Debug)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    viewport: Size,
    observer_support: bool,
    blurred: Vec<NodeId>,
}

impl MemoryDocument {
    /// Creates a document containing only a `body` element.
    #[must_use]
    pub fn new(viewport: Size) -> Self {
        Self {
            nodes: vec![Node {
                tag: "body".into(),
                natural: viewport,
                rect: viewport.to_rect(),
                ..Node::default()
            }],
            viewport,
            observer_support: true,
            blurred: Vec::new(),
        }
    }

    /// The root element.
    #[must_use]
    pub fn body(&self) -> NodeId {
        NodeId(0)
    }

    /// Creates a detached element with a space-separated class list.
    pub fn element(&mut self, tag: &str, classes: &str) -> NodeId {
        let id = self.create_element(tag);
        self.set_class_name(id, classes);
        id
    }

    /// Changes the viewport size.
    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    /// Sets the size an element has without inline sizing.
    pub fn set_natural_size(&mut self, element: NodeId, size: Size) {
        self.node_mut(element).natural = size;
    }

    /// Sets the element's bounding rectangle in viewport coordinates.
    pub fn set_rect(&mut self, element: NodeId, rect: Rect) {
        self.node_mut(element).rect = rect;
    }

    /// Sets the element's computed padding.
    pub fn set_padding(&mut self, element: NodeId, padding: Insets) {
        self.node_mut(element).padding = padding;
    }

    /// Toggles visibility observer support.
    pub fn set_observer_support(&mut self, supported: bool) {
        self.observer_support = supported;
    }

    /// Tag name of an element.
    #[must_use]
    pub fn tag(&self, element: NodeId) -> &str {
        &self.node(element).tag
    }

    /// Every descendant of `root` in document order.
    #[must_use]
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.node(root).children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        out
    }

    /// Number of descendants of `root` carrying `class`.
    #[must_use]
    pub fn count_class(&self, root: NodeId, class: &str) -> usize {
        self.descendants(root)
            .into_iter()
            .filter(|id| self.has_class(*id, class))
            .count()
    }

    /// Returns `true` if `element` is the body or descends from it.
    #[must_use]
    pub fn is_connected(&self, element: NodeId) -> bool {
        let mut cur = Some(element);
        while let Some(id) = cur {
            if id == self.body() {
                return true;
            }
            cur = self.node(id).parent;
        }
        false
    }

    /// Number of inline style properties on `element`.
    #[must_use]
    pub fn style_count(&self, element: NodeId) -> usize {
        self.node(element).styles.len()
    }

    /// Elements that have been blurred, oldest first.
    #[must_use]
    pub fn blurred(&self) -> &[NodeId] {
        &self.blurred
    }

    fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.idx()]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.idx()]
    }

    fn detach(&mut self, element: NodeId) {
        if let Some(parent) = self.node_mut(element).parent.take() {
            self.node_mut(parent).children.retain(|c| *c != element);
        }
    }

    fn pixels(&self, element: NodeId, property: &str) -> Option<f64> {
        self.style(element, property)?
            .strip_suffix("px")?
            .trim()
            .parse()
            .ok()
    }
}

impl Document for MemoryDocument {
    type Element = NodeId;

    fn viewport(&self) -> Size {
        self.viewport
    }

    fn children(&self, element: NodeId) -> Vec<NodeId> {
        self.node(element).children.clone()
    }

    fn parent(&self, element: NodeId) -> Option<NodeId> {
        self.node(element).parent
    }

    fn find_by_class(&self, root: NodeId, class: &str) -> Option<NodeId> {
        self.descendants(root)
            .into_iter()
            .find(|id| self.has_class(*id, class))
    }

    fn find_descendant(&self, root: NodeId, kind: Descendant) -> Option<NodeId> {
        self.descendants(root).into_iter().find(|id| {
            let tag = self.tag(*id);
            match kind {
                Descendant::Heading => {
                    matches!(tag, "h1" | "h2" | "h3" | "h4" | "h5" | "h6")
                }
                Descendant::Paragraph => tag == "p",
                Descendant::Image => tag == "img",
            }
        })
    }

    fn attribute(&self, element: NodeId, name: &str) -> Option<String> {
        self.node(element)
            .attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.clone())
    }

    fn attributes(&self, element: NodeId) -> Vec<(String, String)> {
        self.node(element).attributes.clone()
    }

    fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) {
        let attrs = &mut self.node_mut(element).attributes;
        match attrs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => *v = value.into(),
            None => attrs.push((name.into(), value.into())),
        }
    }

    fn remove_attribute(&mut self, element: NodeId, name: &str) {
        self.node_mut(element).attributes.retain(|(n, _)| n != name);
    }

    fn has_class(&self, element: NodeId, class: &str) -> bool {
        self.node(element).classes.iter().any(|c| c == class)
    }

    fn add_class(&mut self, element: NodeId, class: &str) {
        if !self.has_class(element, class) {
            self.node_mut(element).classes.push(class.into());
        }
    }

    fn remove_class(&mut self, element: NodeId, class: &str) {
        self.node_mut(element).classes.retain(|c| c != class);
    }

    fn class_name(&self, element: NodeId) -> String {
        self.node(element).classes.join(" ")
    }

    fn set_class_name(&mut self, element: NodeId, classes: &str) {
        let mut list: Vec<String> = Vec::new();
        for class in classes.split_whitespace() {
            if !list.iter().any(|c| c == class) {
                list.push(class.into());
            }
        }
        self.node_mut(element).classes = list;
    }

    fn set_style(&mut self, element: NodeId, property: &str, value: &str) {
        let styles = &mut self.node_mut(element).styles;
        match styles.iter_mut().find(|(p, _)| p == property) {
            Some((_, v)) => *v = value.into(),
            None => styles.push((property.into(), value.into())),
        }
    }

    fn style(&self, element: NodeId, property: &str) -> Option<String> {
        self.node(element)
            .styles
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.clone())
    }

    fn remove_style(&mut self, element: NodeId, property: &str) {
        self.node_mut(element).styles.retain(|(p, _)| p != property);
    }

    fn clear_style(&mut self, element: NodeId) {
        self.node_mut(element).styles.clear();
    }

    fn text_content(&self, element: NodeId) -> String {
        let mut text = self.node(element).text.clone();
        for id in self.descendants(element) {
            text.push_str(&self.node(id).text);
        }
        text
    }

    fn set_text(&mut self, element: NodeId, text: &str) {
        self.node_mut(element).text = text.to_string();
    }

    fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(Node {
            tag: tag.into(),
            ..Node::default()
        });
        id
    }

    fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.detach(child);
        self.node_mut(child).parent = Some(parent);
        self.node_mut(parent).children.push(child);
    }

    fn wrap(&mut self, element: NodeId, wrapper: NodeId) {
        self.detach(wrapper);
        if let Some(parent) = self.node(element).parent {
            let children = &mut self.node_mut(parent).children;
            if let Some(slot) = children.iter_mut().find(|c| **c == element) {
                *slot = wrapper;
            }
            self.node_mut(wrapper).parent = Some(parent);
            self.node_mut(element).parent = None;
        }
        self.append_child(wrapper, element);
    }

    fn remove(&mut self, element: NodeId) {
        self.detach(element);
    }

    fn offset_width(&self, element: NodeId) -> f64 {
        self.pixels(element, "width")
            .unwrap_or(self.node(element).natural.width)
    }

    fn offset_height(&self, element: NodeId) -> f64 {
        self.pixels(element, "height")
            .unwrap_or(self.node(element).natural.height)
    }

    fn bounding_rect(&self, element: NodeId) -> Rect {
        self.node(element).rect
    }

    fn padding(&self, element: NodeId) -> Insets {
        self.node(element).padding
    }

    fn supports_visibility_observer(&self) -> bool {
        self.observer_support
    }

    fn blur(&mut self, element: NodeId) {
        self.blurred.push(element);
    }
}
