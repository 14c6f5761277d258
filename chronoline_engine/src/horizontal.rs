// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Horizontal mode bound to a document.

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use chronoline_layout::{
    Cursor, Direction, HorizontalScale, RowLayout, scroll_offset, translate_x, visible_count,
};
use chronoline_settings::{Orientation, UseSwiper, resolve_side};

use crate::instance::{Binding, HorizontalState, Instance, Phase};
use crate::{CarouselDelegate, CarouselLoader, CarouselOptions, Document, classes};

const PREV_TITLE: &str = "Go to previous items";
const NEXT_TITLE: &str = "Go to next items";
const AT_START_TITLE: &str = "Already at beginning of timeline";
const AT_END_TITLE: &str = "Already at end of timeline";

fn px(value: f64) -> String {
    format!("{value}px")
}

/// Lays out the strip, adds the divider and buttons, binds item clicks,
/// attaches a carousel when requested, then renders the start position.
pub(crate) fn setup<D>(
    doc: &mut D,
    inst: &mut Instance<D::Element>,
    loader: Option<&mut dyn CarouselLoader<D::Element>>,
    carousel_options: &CarouselOptions,
) where
    D: Document,
{
    let viewport = doc.viewport();
    let count = inst.items.len();
    doc.add_class(inst.container, classes::HORIZONTAL);

    let scale = HorizontalScale::for_viewport_height(viewport.height);
    for (name, value) in scale.css_variables() {
        doc.set_style(inst.container, name, &px(value));
    }
    let item_width = scale.node_width;
    let width = px(item_width);
    for item in &inst.items {
        doc.set_style(*item, "width", &width);
        doc.remove_style(*item, "height");
    }
    let strip_width = item_width * count as f64;
    doc.set_style(inst.scroller, "width", &px(strip_width));

    let heights: Vec<f64> = inst.items.iter().map(|i| doc.offset_height(*i)).collect();
    let settings = &inst.settings;
    let side = resolve_side(settings, Orientation::Horizontal, settings.rtl_mode);
    let rows = RowLayout::compute(&heights, settings.horizontal_start(), side);
    for (item, place) in inst.items.iter().zip(rows.items()) {
        doc.set_style(*item, "height", &px(place.height));
        doc.add_class(*item, place.row.class());
        if place.offset_y > 0.0 {
            doc.set_style(*item, "transform", &format!("translateY({}px)", place.offset_y));
        }
        log::trace!("item {item:?} in {:?} row, height {}", place.row, place.height);
    }
    doc.set_style(inst.scroller, "height", &px(rows.scroller_height()));

    let visible = visible_count(doc.offset_width(inst.wrap), item_width);
    let cursor = Cursor::start_at(count, visible, settings.start_index, settings.rtl_mode);
    let top = px(rows.divider_y());

    let divider = doc.create_element("span");
    doc.set_class_name(divider, classes::DIVIDER);
    doc.set_style(divider, "top", &top);
    doc.append_child(inst.container, divider);

    let (prev, next) = if count > visible {
        let prev = nav_button(doc, Direction::Previous, &top);
        let next = nav_button(doc, Direction::Next, &top);
        doc.append_child(inst.container, prev);
        doc.append_child(inst.container, next);
        inst.listeners.push(Binding::NavButton {
            button: prev,
            direction: Direction::Previous,
        });
        inst.listeners.push(Binding::NavButton {
            button: next,
            direction: Direction::Next,
        });
        (Some(prev), Some(next))
    } else {
        (None, None)
    };

    for (index, item) in inst.items.iter().enumerate() {
        inst.listeners.push(Binding::ItemActivate { item: *item, index });
    }

    if inst.settings.use_swiper.is_requested() {
        let url = inst.settings.carousel_url.as_deref();
        match CarouselDelegate::attach(doc, inst.container, url, loader, carousel_options) {
            Ok(adapter) => {
                log::debug!(id = inst.id.as_str(); "carousel attached");
                inst.adapter = Some(adapter);
            }
            Err(err) if inst.settings.use_swiper == UseSwiper::True => {
                log::warn!(id = inst.id.as_str(); "{err}; using native layout");
            }
            Err(err) => {
                log::debug!(id = inst.id.as_str(); "{err}; using native layout");
            }
        }
    }

    log::debug!(
        id = inst.id.as_str(), visible = visible, items = count;
        "horizontal layout"
    );
    inst.phase = Phase::Horizontal(HorizontalState {
        cursor,
        item_width,
        prev,
        next,
        divider,
    });
    render(doc, inst);
}

fn nav_button<D: Document>(doc: &mut D, direction: Direction, top: &str) -> D::Element {
    let (class, text, title, label) = match direction {
        Direction::Previous => (classes::NAV_PREV, "Previous", PREV_TITLE, "Previous timeline items"),
        Direction::Next => (classes::NAV_NEXT, "Next", NEXT_TITLE, "Next timeline items"),
    };
    let button = doc.create_element("button");
    doc.set_class_name(button, classes::NAV_BUTTON);
    doc.add_class(button, class);
    doc.set_text(button, text);
    doc.set_attribute(button, "title", title);
    doc.set_attribute(button, "aria-label", label);
    doc.set_style(button, "top", top);
    button
}

/// Applies the cursor to the document.
///
/// Moves the strip (or the carousel) so the active item is in view,
/// highlights the active item and refreshes the buttons' boundary state.
pub(crate) fn render<D: Document>(doc: &mut D, inst: &mut Instance<D::Element>) {
    let Phase::Horizontal(state) = &inst.phase else {
        return;
    };
    let active = state.cursor.active();
    let current = state.cursor.current();
    let boundary = state.cursor.boundary();
    let item_width = state.item_width;
    let (prev, next) = (state.prev, state.next);

    if let Some(adapter) = inst.adapter.as_mut() {
        adapter.sync(current);
    } else {
        let wrap_width = doc.offset_width(inst.wrap);
        let offset = scroll_offset(active, item_width, wrap_width, doc.padding(inst.wrap));
        doc.set_style(inst.scroller, "transform", &translate_x(offset));
    }

    for (index, item) in inst.items.iter().enumerate() {
        if index == active {
            doc.add_class(*item, classes::ACTIVE);
        } else {
            doc.remove_class(*item, classes::ACTIVE);
        }
    }

    if let Some(prev) = prev {
        mark_button(doc, prev, boundary.at_start, classes::AT_START, AT_START_TITLE, PREV_TITLE);
    }
    if let Some(next) = next {
        mark_button(doc, next, boundary.at_end, classes::AT_END, AT_END_TITLE, NEXT_TITLE);
    }
}

fn mark_button<D: Document>(
    doc: &mut D,
    button: D::Element,
    at_boundary: bool,
    class: &str,
    boundary_title: &str,
    title: &str,
) {
    if at_boundary {
        doc.add_class(button, class);
        doc.set_attribute(button, "title", boundary_title);
        doc.set_attribute(button, "aria-disabled", "true");
    } else {
        doc.remove_class(button, class);
        doc.set_attribute(button, "title", title);
        doc.set_attribute(button, "aria-disabled", "false");
    }
}

/// Handles a navigation button. Returns `true` if the active item moved.
///
/// A button at its boundary does nothing, and neither does a move that
/// lands where it started.
pub(crate) fn navigate<D: Document>(
    doc: &mut D,
    inst: &mut Instance<D::Element>,
    direction: Direction,
) -> bool {
    let step = inst.settings.move_items;
    let Phase::Horizontal(state) = &mut inst.phase else {
        return false;
    };
    let boundary = state.cursor.boundary();
    let blocked = match direction {
        Direction::Previous => boundary.at_start,
        Direction::Next => boundary.at_end,
    };
    if blocked || !state.cursor.advance(direction, step) {
        return false;
    }
    render(doc, inst);
    true
}

/// `data-node-id` of the active item, if any.
pub(crate) fn active_node_id<D: Document>(doc: &D, inst: &Instance<D::Element>) -> Option<String> {
    let state = inst.horizontal()?;
    let item = inst.items.get(state.cursor.active())?;
    doc.attribute(*item, "data-node-id")
}
