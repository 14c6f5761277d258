// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared fixtures for the engine integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use chronoline_engine::{
    Collaborators, Document, ErrorKind, MemoryDocument, NodeId, Timeline, classes,
};
use chronoline_settings::Colors;
use kurbo::{Rect, Size};

/// Viewport used by most tests: wide, and tall enough for unscaled cards.
pub(crate) const VIEWPORT: Size = Size::new(1024.0, 1000.0);

/// Three 200px cards fit in the wrap.
pub(crate) const WRAP_WIDTH: f64 = 600.0;

/// Handles into a built container.
#[derive(Clone, Debug)]
pub(crate) struct Fixture {
    pub(crate) container: NodeId,
    pub(crate) wrap: NodeId,
    pub(crate) scroller: NodeId,
    pub(crate) items: Vec<NodeId>,
}

/// Builds `.timeline > .timeline__wrap > .timeline__items > .timeline__item*`.
///
/// Each item has a `.timeline__content` with a heading and is stacked
/// 300px below the previous one, starting at the top of the viewport.
pub(crate) fn timeline_markup(doc: &mut MemoryDocument, id: Option<&str>, heights: &[f64]) -> Fixture {
    let container = doc.element("div", "timeline");
    if let Some(id) = id {
        doc.set_attribute(container, "id", id);
    }
    let wrap = doc.element("div", classes::WRAP);
    let scroller = doc.element("div", classes::ITEMS);
    let body = doc.body();
    doc.append_child(body, container);
    doc.append_child(container, wrap);
    doc.append_child(wrap, scroller);
    doc.set_natural_size(wrap, Size::new(WRAP_WIDTH, 400.0));

    let mut items = Vec::new();
    for (i, height) in heights.iter().enumerate() {
        let item = doc.element("div", "timeline__item");
        let content = doc.element("div", classes::CONTENT);
        let heading = doc.element("h3", "");
        doc.set_text(heading, &format!("Event {i}"));
        doc.append_child(item, content);
        doc.append_child(content, heading);
        doc.append_child(scroller, item);
        doc.set_natural_size(item, Size::new(200.0, *height));
        let top = 300.0 * i as f64;
        doc.set_rect(item, Rect::new(0.0, top, 400.0, top + 200.0));
        items.push(item);
    }
    Fixture {
        container,
        wrap,
        scroller,
        items,
    }
}

/// A document with one container of `count` 150px items, id `tl`.
pub(crate) fn single(count: usize) -> (MemoryDocument, Fixture) {
    let mut doc = MemoryDocument::new(VIEWPORT);
    let fixture = timeline_markup(&mut doc, Some("tl"), &vec![150.0; count]);
    (doc, fixture)
}

/// Everything the engine reported.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) errors: Vec<(NodeId, ErrorKind, String)>,
    pub(crate) colors: Vec<(NodeId, Colors)>,
    pub(crate) modals: Vec<NodeId>,
    pub(crate) node_ids: Vec<String>,
}

impl Collaborators<MemoryDocument> for Recorder {
    fn notify_error(
        &mut self,
        _doc: &mut MemoryDocument,
        container: NodeId,
        kind: ErrorKind,
        details: &str,
    ) {
        self.errors.push((container, kind, details.to_owned()));
    }

    fn apply_colors(&mut self, _doc: &mut MemoryDocument, container: NodeId, colors: &Colors) {
        self.colors.push((container, colors.clone()));
    }

    fn open_modal(&mut self, _doc: &mut MemoryDocument, item: NodeId) {
        self.modals.push(item);
    }

    fn active_node_changed(&mut self, _doc: &mut MemoryDocument, _container: NodeId, node_id: &str) {
        self.node_ids.push(node_id.to_owned());
    }
}

/// The previous and next buttons of a horizontal container.
pub(crate) fn nav_buttons<C>(timeline: &Timeline<MemoryDocument, C>, container: NodeId) -> (NodeId, NodeId)
where
    C: Collaborators<MemoryDocument>,
{
    let doc = timeline.document();
    let prev = doc.find_by_class(container, classes::NAV_PREV).expect("previous button");
    let next = doc.find_by_class(container, classes::NAV_NEXT).expect("next button");
    (prev, next)
}

/// Active items of a container, by index.
pub(crate) fn active_items(doc: &MemoryDocument, fixture: &Fixture) -> Vec<usize> {
    fixture
        .items
        .iter()
        .enumerate()
        .filter(|(_, item)| doc.has_class(**item, classes::ACTIVE))
        .map(|(i, _)| i)
        .collect()
}
