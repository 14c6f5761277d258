// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Handing horizontal navigation to a third-party carousel.
//!
//! The engine never links a carousel library. The host installs a
//! [`CarouselLoader`], which is asked for a [`CarouselLibrary`] with each
//! [`ResolveStrategy`] in turn; the first library found constructs a
//! [`Carousel`] over the timeline's wrap element.

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use chronoline_settings::Orientation;

use crate::{CarouselError, Document, classes};

/// Class added to the wrap while a carousel is attached.
pub const CAROUSEL: &str = "carousel";
/// Class added to the scroller while a carousel is attached.
pub const CAROUSEL_WRAPPER: &str = "carousel-wrapper";
/// Class added to each item while a carousel is attached.
pub const CAROUSEL_SLIDE: &str = "carousel-slide";

/// A constructed carousel.
pub trait Carousel {
    /// Index of the slide the carousel considers active.
    fn active_index(&self) -> usize;

    /// Scrolls to a slide. `speed` is the transition time in milliseconds;
    /// `None` uses the library default.
    fn slide_to(&mut self, index: usize, speed: Option<u32>);

    /// Re-measures after layout changes.
    fn update(&mut self);

    /// Tears the carousel down.
    fn destroy(&mut self, delete_instance: bool, clean_styles: bool);
}

/// How many slides are shown at once.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SlidesPerView {
    /// As many as fit, from the slides' own widths.
    Auto,
    /// A fixed count.
    Count(u32),
}

/// Construction options passed to a [`CarouselLibrary`].
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselOptions {
    /// Slides shown at once.
    pub slides_per_view: SlidesPerView,
    /// Free scrolling without snapping.
    pub free_mode: bool,
    /// Gap between slides in pixels.
    pub space_between: f64,
    /// Slide direction.
    pub direction: Orientation,
}

impl Default for CarouselOptions {
    fn default() -> Self {
        Self {
            slides_per_view: SlidesPerView::Auto,
            free_mode: false,
            space_between: 20.0,
            direction: Orientation::Horizontal,
        }
    }
}

/// Where a carousel library may come from, in priority order.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResolveStrategy<'a> {
    /// An explicitly configured URL.
    Url(&'a str),
    /// A package-style import.
    Package,
    /// A global already present in the host.
    Global,
}

/// A resolved carousel library.
pub trait CarouselLibrary<E> {
    /// Builds a carousel over `container`.
    ///
    /// # Errors
    ///
    /// Returns a description of the failure if the library refuses.
    fn construct(
        &mut self,
        container: E,
        options: &CarouselOptions,
    ) -> Result<Box<dyn Carousel>, String>;
}

/// Host hook that locates carousel libraries.
pub trait CarouselLoader<E> {
    /// Looks up a library with one strategy.
    fn resolve(&mut self, strategy: ResolveStrategy<'_>) -> Option<Box<dyn CarouselLibrary<E>>>;
}

/// A carousel attached to one timeline instance.
///
/// Owns the carousel and remembers the class lists it changed so they can
/// be restored on [`destroy`](Self::destroy).
pub struct CarouselDelegate<E> {
    carousel: Box<dyn Carousel>,
    saved: Vec<(E, String)>,
}

impl<E: fmt::Debug> fmt::Debug for CarouselDelegate<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselDelegate")
            .field("active_index", &self.carousel.active_index())
            .field("saved", &self.saved)
            .finish_non_exhaustive()
    }
}

impl<E: Copy> CarouselDelegate<E> {
    /// Resolves a library and attaches a carousel below `container`.
    ///
    /// Strategies are tried in order: `url` (when configured), package,
    /// global. The library constructs the carousel with `options`.
    ///
    /// # Errors
    ///
    /// Fails without side effects when there is no wrap or no library, and
    /// restores every class it touched when construction fails.
    pub fn attach<D>(
        doc: &mut D,
        container: E,
        url: Option<&str>,
        loader: Option<&mut dyn CarouselLoader<E>>,
        options: &CarouselOptions,
    ) -> Result<Self, CarouselError>
    where
        D: Document<Element = E>,
    {
        let wrap = doc
            .find_by_class(container, classes::WRAP)
            .ok_or(CarouselError::MissingContainer)?;

        let mut strategies: Vec<ResolveStrategy<'_>> = Vec::with_capacity(3);
        if let Some(url) = url {
            strategies.push(ResolveStrategy::Url(url));
        }
        strategies.push(ResolveStrategy::Package);
        strategies.push(ResolveStrategy::Global);

        let tried = strategies.len();
        let Some(loader) = loader else {
            return Err(CarouselError::Unavailable { tried: 0 });
        };
        let mut library = strategies
            .into_iter()
            .find_map(|strategy| {
                let found = loader.resolve(strategy);
                if found.is_none() {
                    log::trace!("carousel library not found via {strategy:?}");
                }
                found
            })
            .ok_or(CarouselError::Unavailable { tried })?;

        let mut saved = Vec::new();
        remember(doc, &mut saved, wrap, CAROUSEL);
        if let Some(scroller) = doc.find_by_class(wrap, classes::ITEMS) {
            remember(doc, &mut saved, scroller, CAROUSEL_WRAPPER);
            for item in doc.children(scroller) {
                remember(doc, &mut saved, item, CAROUSEL_SLIDE);
            }
        }

        match library.construct(wrap, options) {
            Ok(carousel) => Ok(Self { carousel, saved }),
            Err(reason) => {
                restore(doc, &saved);
                Err(CarouselError::Construction(reason))
            }
        }
    }

    /// Index the carousel reports as active.
    #[must_use]
    pub fn active_index(&self) -> usize {
        self.carousel.active_index()
    }

    /// Scrolls to `index` with the library's default speed.
    pub fn slide_to(&mut self, index: usize) {
        self.carousel.slide_to(index, None);
    }

    /// Scrolls to `index` and re-measures.
    pub fn sync(&mut self, index: usize) {
        self.carousel.slide_to(index, None);
        self.carousel.update();
    }

    /// Re-measures after layout changes.
    pub fn update(&mut self) {
        self.carousel.update();
    }

    /// Destroys the carousel and restores the original class lists.
    pub fn destroy<D>(mut self, doc: &mut D)
    where
        D: Document<Element = E>,
    {
        self.carousel.destroy(true, true);
        restore(doc, &self.saved);
    }
}

fn remember<D: Document>(
    doc: &mut D,
    saved: &mut Vec<(D::Element, String)>,
    element: D::Element,
    class: &str,
) {
    saved.push((element, doc.class_name(element)));
    doc.add_class(element, class);
}

fn restore<D: Document>(doc: &mut D, saved: &[(D::Element, String)]) {
    for (element, classes) in saved {
        doc.set_class_name(*element, classes);
    }
}
