// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-container state and reset.

use alloc::string::String;
use alloc::vec::Vec;

use chronoline_layout::{Cursor, Direction, HorizontalScale, Placement, Row};
use chronoline_settings::{Options, Orientation, Settings, VerticalTrigger};
use smallvec::SmallVec;

use crate::{CarouselDelegate, Document, classes, modal};

/// An event handler registered during setup.
///
/// Bindings live until the next reset; dispatch only ever consults the
/// current list, so clearing it is what "removing listeners" means.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Binding<E> {
    /// Click on a navigation button.
    NavButton { button: E, direction: Direction },
    /// Click on a horizontal item makes it active.
    ItemActivate { item: E, index: usize },
    /// Click on an item with modal data opens the modal.
    Modal { item: E },
    /// Window scroll re-tests deferred items.
    WindowScroll,
}

#[derive(Clone, Debug)]
pub(crate) struct HorizontalState<E> {
    pub(crate) cursor: Cursor,
    pub(crate) item_width: f64,
    pub(crate) prev: Option<E>,
    pub(crate) next: Option<E>,
    pub(crate) divider: E,
}

#[derive(Clone, Debug)]
pub(crate) struct VerticalState<E> {
    /// Items still waiting to be revealed.
    pub(crate) observed: Vec<E>,
    /// Trigger resolved against the viewport at setup.
    pub(crate) trigger: VerticalTrigger,
    pub(crate) root_margin: String,
    pub(crate) scroll_fallback: bool,
}

#[derive(Clone, Debug)]
pub(crate) enum Phase<E> {
    /// Reset, no layout applied.
    Built,
    Horizontal(HorizontalState<E>),
    Vertical(VerticalState<E>),
}

/// One managed container.
#[derive(Debug)]
pub(crate) struct Instance<E> {
    pub(crate) id: String,
    pub(crate) container: E,
    pub(crate) wrap: E,
    pub(crate) scroller: E,
    pub(crate) items: Vec<E>,
    pub(crate) options: Options,
    pub(crate) settings: Settings,
    pub(crate) listeners: SmallVec<[Binding<E>; 8]>,
    pub(crate) adapter: Option<CarouselDelegate<E>>,
    pub(crate) phase: Phase<E>,
    pub(crate) generation: u64,
    /// Viewport width of the last setup pass.
    pub(crate) laid_out_width: Option<f64>,
}

impl<E: Copy + PartialEq> Instance<E> {
    pub(crate) fn orientation(&self) -> Option<Orientation> {
        match self.phase {
            Phase::Built => None,
            Phase::Horizontal(_) => Some(Orientation::Horizontal),
            Phase::Vertical(_) => Some(Orientation::Vertical),
        }
    }

    pub(crate) fn horizontal(&self) -> Option<&HorizontalState<E>> {
        match &self.phase {
            Phase::Horizontal(state) => Some(state),
            _ => None,
        }
    }

    pub(crate) fn index_of(&self, item: E) -> Option<usize> {
        self.items.iter().position(|i| *i == item)
    }

    /// Undoes everything a setup pass did.
    ///
    /// Listeners, observations and the carousel are released, injected
    /// elements removed, inline styles stripped from the scroller and items,
    /// and layout classes cleared. Safe to call in any phase, repeatedly.
    pub(crate) fn reset<D>(&mut self, doc: &mut D)
    where
        D: Document<Element = E>,
    {
        self.listeners.clear();
        if let Some(adapter) = self.adapter.take() {
            adapter.destroy(doc);
        }
        if let Phase::Horizontal(state) = &self.phase {
            for button in [state.prev, state.next].into_iter().flatten() {
                doc.remove(button);
            }
            doc.remove(state.divider);
        }
        self.phase = Phase::Built;

        doc.remove_class(self.container, classes::HORIZONTAL);
        doc.remove_class(self.container, classes::MOBILE);
        for name in HorizontalScale::VARIABLES {
            doc.remove_style(self.container, name);
        }
        doc.clear_style(self.scroller);
        for item in &self.items {
            doc.clear_style(*item);
            doc.remove_attribute(*item, modal::BOUND);
            for class in [
                classes::ANIMATED,
                classes::FADE_IN,
                classes::ACTIVE,
                Placement::Left.class(),
                Placement::Right.class(),
                Row::Top.class(),
                Row::Bottom.class(),
            ] {
                doc.remove_class(*item, class);
            }
        }
        log::debug!(id = self.id.as_str(); "instance reset");
    }
}
