// Copyright 2025 the Chronoline Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The orchestrator.

use alloc::boxed::Box;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use chronoline_layout::Direction;
use chronoline_settings::{Attributes, Mode, Options, Orientation, Settings, resolve};
use chronoline_timing::{Debouncer, TimerQueue};
use smallvec::SmallVec;

use crate::instance::{Binding, Instance, Phase};
use crate::{
    CarouselLoader, CarouselOptions, Collaborators, Document, EventBus, Initialized, InstanceInfo,
    NavigationApi, NoCollaborators, Registry, StructureError, classes, horizontal, modal, vertical,
};

/// Delay between a setup pass and the fade-in, in milliseconds.
pub const FADE_IN_DELAY: u64 = 500;

/// Quiet period after the last resize before re-laying out, in milliseconds.
pub const RESIZE_DEBOUNCE: u64 = 250;

#[derive(Clone, Debug)]
enum Job<E> {
    Relayout,
    FadeIn { container: E, generation: u64 },
}

/// Deferred items of a vertical layout, for a host-side visibility observer.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Observations<'a, E> {
    /// Elements to watch. Report intersections with
    /// [`Timeline::notify_visible`].
    pub elements: &'a [E],
    /// Observer root margin, such as `15%` or `40px`.
    pub root_margin: &'a str,
}

/// Manages timeline containers in one document.
///
/// The host forwards events into the timeline: clicks through
/// [`dispatch_click`](Self::dispatch_click), window resizes through
/// [`on_resize`](Self::on_resize), window scrolls through
/// [`on_scroll`](Self::on_scroll), observer hits through
/// [`notify_visible`](Self::notify_visible), and the passage of time through
/// [`advance`](Self::advance), ideally at [`next_deadline`](Self::next_deadline).
///
/// Each container moves through these states:
///
/// - built: markup checked, items captured, nothing laid out;
/// - horizontal or vertical: one setup pass applied;
/// - back to built on every reset (each resize that changes the width, or a
///   repeated [`initialize`](Self::initialize));
/// - gone after [`destroy_all`](Self::destroy_all).
pub struct Timeline<D: Document, C = NoCollaborators> {
    pub(crate) doc: D,
    pub(crate) hooks: C,
    pub(crate) instances: Vec<Instance<D::Element>>,
    registry: Registry<D::Element>,
    events: EventBus<D::Element>,
    timers: TimerQueue<Job<D::Element>>,
    resize: Debouncer,
    listening: bool,
    loader: Option<Box<dyn CarouselLoader<D::Element>>>,
    carousel_options: CarouselOptions,
    generated_ids: usize,
}

impl<D: Document, C: fmt::Debug> fmt::Debug for Timeline<D, C>
where
    D: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timeline")
            .field("doc", &self.doc)
            .field("hooks", &self.hooks)
            .field("instances", &self.instances.len())
            .field("registry", &self.registry)
            .field("events", &self.events)
            .field("pending_timers", &self.timers.len())
            .field("listening", &self.listening)
            .field("has_loader", &self.loader.is_some())
            .field("carousel_options", &self.carousel_options)
            .finish_non_exhaustive()
    }
}

impl<D: Document> Timeline<D> {
    /// Creates a timeline over `doc` with no collaborators.
    pub fn new(doc: D) -> Self {
        Self::with_collaborators(doc, NoCollaborators)
    }
}

impl<D: Document, C: Collaborators<D>> Timeline<D, C> {
    /// Creates a timeline over `doc` that calls into `hooks`.
    pub fn with_collaborators(doc: D, hooks: C) -> Self {
        Self {
            doc,
            hooks,
            instances: Vec::new(),
            registry: Registry::default(),
            events: EventBus::default(),
            timers: TimerQueue::new(),
            resize: Debouncer::new(RESIZE_DEBOUNCE),
            listening: false,
            loader: None,
            carousel_options: CarouselOptions::default(),
            generated_ids: 0,
        }
    }

    /// Installs the hook that locates carousel libraries.
    pub fn set_carousel_loader(&mut self, loader: impl CarouselLoader<D::Element> + 'static) {
        self.loader = Some(Box::new(loader));
    }

    /// Options every carousel is constructed with from the next setup on.
    pub fn set_carousel_options(&mut self, options: CarouselOptions) {
        self.carousel_options = options;
    }

    /// Sets up every container in `containers`.
    ///
    /// A container that is already managed is reset and rebuilt; the others
    /// are unaffected. Containers with missing markup are reported to
    /// [`Collaborators::notify_error`] and skipped, as are containers
    /// without items. Starts listening for resizes.
    ///
    /// Returns the number of containers set up.
    pub fn initialize(&mut self, containers: &[D::Element], options: &Options, now: u64) -> usize {
        let mut count = 0;
        for container in containers {
            if let Some(index) = self.adopt(*container, options) {
                self.setup(index, now);
                count += 1;
            }
        }
        self.listening = true;
        count
    }

    /// Window resize. Once resizes stop for [`RESIZE_DEBOUNCE`] milliseconds,
    /// re-lays out every instance last laid out at a different viewport
    /// width.
    pub fn on_resize(&mut self, now: u64) {
        if self.listening {
            self.resize.trigger(&mut self.timers, now, Job::Relayout);
        }
    }

    /// Runs every timer due at `now`.
    pub fn advance(&mut self, now: u64) {
        for (id, job) in self.timers.poll(now) {
            match job {
                Job::Relayout => {
                    if self.resize.fired(id) {
                        self.relayout(now);
                    }
                }
                Job::FadeIn {
                    container,
                    generation,
                } => {
                    let current = self
                        .instances
                        .iter()
                        .any(|i| i.container == container && i.generation == generation);
                    if current {
                        self.doc.set_style(container, "opacity", "1");
                    }
                }
            }
        }
    }

    /// When [`advance`](Self::advance) next has work to do.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    /// A click on `target`.
    ///
    /// Handlers run for the target, then each ancestor in turn, until a
    /// navigation button stops propagation. Returns `true` if any handler
    /// ran.
    pub fn dispatch_click(&mut self, target: D::Element) -> bool {
        let mut handled = false;
        let mut node = Some(target);
        while let Some(element) = node {
            let hits: SmallVec<[(usize, Binding<D::Element>); 4]> = self
                .instances
                .iter()
                .enumerate()
                .flat_map(|(i, inst)| inst.listeners.iter().map(move |b| (i, *b)))
                .filter(|(_, b)| binds(b, element))
                .collect();
            for (index, binding) in hits {
                handled = true;
                match binding {
                    Binding::NavButton { button, direction } => {
                        self.navigate(index, button, direction);
                        return true;
                    }
                    Binding::ItemActivate { index: item, .. } => {
                        let mut api = NavigationApi {
                            timeline: &mut *self,
                            index,
                        };
                        api.set_current_index(item);
                        api.update_position();
                    }
                    Binding::Modal { item } => self.hooks.open_modal(&mut self.doc, item),
                    Binding::WindowScroll => {}
                }
            }
            node = self.doc.parent(element);
        }
        handled
    }

    /// Window scroll. Re-tests deferred items of instances without a
    /// visibility observer. Returns the number of items revealed.
    pub fn on_scroll(&mut self) -> usize {
        let Self { doc, instances, .. } = self;
        instances
            .iter_mut()
            .filter(|inst| inst.listeners.contains(&Binding::WindowScroll))
            .map(|inst| vertical::rescan(doc, inst))
            .sum()
    }

    /// The host's visibility observer saw `element` cross the trigger line.
    /// Returns `true` if it was waiting to be revealed.
    pub fn notify_visible(&mut self, element: D::Element) -> bool {
        let Self { doc, instances, .. } = self;
        instances
            .iter_mut()
            .any(|inst| vertical::reveal(doc, inst, element))
    }

    /// Elements the host should observe for instance `id`.
    ///
    /// `None` unless the instance is in vertical mode with observer support.
    #[must_use]
    pub fn observations(&self, id: &str) -> Option<Observations<'_, D::Element>> {
        match &self.instances.iter().find(|i| i.id == id)?.phase {
            Phase::Vertical(state) if !state.scroll_fallback => Some(Observations {
                elements: &state.observed,
                root_margin: &state.root_margin,
            }),
            _ => None,
        }
    }

    /// Navigation API of the instance registered as `id`.
    pub fn api(&mut self, id: &str) -> Option<NavigationApi<'_, D, C>> {
        let container = self.registry.get(id)?;
        let index = self.instances.iter().position(|i| i.container == container)?;
        Some(NavigationApi {
            timeline: self,
            index,
        })
    }

    /// Read-only view of the instance registered as `id`.
    #[must_use]
    pub fn instance(&self, id: &str) -> Option<InstanceInfo<'_, D::Element>> {
        let container = self.registry.get(id)?;
        let inst = self.instances.iter().find(|i| i.container == container)?;
        Some(InstanceInfo { inst })
    }

    /// Ids of managed instances, sorted.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.registry.ids()
    }

    /// Resets every instance, forgets them, cancels timers and stops
    /// listening for resizes. Safe to call at any time, repeatedly.
    pub fn destroy_all(&mut self) {
        for inst in &mut self.instances {
            inst.reset(&mut self.doc);
            self.doc.remove_style(inst.container, "opacity");
        }
        if !self.instances.is_empty() {
            log::debug!("destroyed {} timeline(s)", self.instances.len());
        }
        self.instances.clear();
        self.registry.clear();
        self.resize.cancel(&mut self.timers);
        self.timers.clear();
        self.listening = false;
    }

    /// Instance registry.
    #[must_use]
    pub fn registry(&self) -> &Registry<D::Element> {
        &self.registry
    }

    /// Subscriptions to [`Initialized`].
    pub fn events_mut(&mut self) -> &mut EventBus<D::Element> {
        &mut self.events
    }

    /// The document.
    #[must_use]
    pub fn document(&self) -> &D {
        &self.doc
    }

    /// The document, for host-side changes such as resizing the viewport.
    pub fn document_mut(&mut self) -> &mut D {
        &mut self.doc
    }

    /// The collaborators.
    #[must_use]
    pub fn collaborators(&self) -> &C {
        &self.hooks
    }

    /// The collaborators, mutably.
    pub fn collaborators_mut(&mut self) -> &mut C {
        &mut self.hooks
    }

    /// Validates `container` and captures its items. Returns the index of
    /// its instance, replacing a previous one for the same container.
    fn adopt(&mut self, container: D::Element, options: &Options) -> Option<usize> {
        let (wrap, scroller) = match self.structure(container) {
            Ok(parts) => parts,
            Err(err) => {
                log::warn!("{err}");
                let details = format!("{err}");
                self.hooks
                    .notify_error(&mut self.doc, container, err.kind(), &details);
                return None;
            }
        };
        let items = self.doc.children(scroller);
        if items.is_empty() {
            log::debug!("skipping {}: no items", describe(&self.doc, container));
            return None;
        }

        if let Some(index) = self.instances.iter().position(|i| i.container == container) {
            let inst = &mut self.instances[index];
            inst.reset(&mut self.doc);
            inst.wrap = wrap;
            inst.scroller = scroller;
            inst.items = items;
            inst.options = options.clone();
            return Some(index);
        }

        let id = self.instance_id(container);
        log::debug!(id = id.as_str(); "instance created");
        self.instances.push(Instance {
            id,
            container,
            wrap,
            scroller,
            items,
            options: options.clone(),
            settings: Settings::default(),
            listeners: SmallVec::new(),
            adapter: None,
            phase: Phase::Built,
            generation: 0,
            laid_out_width: None,
        });
        Some(self.instances.len() - 1)
    }

    fn structure(
        &self,
        container: D::Element,
    ) -> Result<(D::Element, D::Element), StructureError> {
        let wrap = self
            .doc
            .find_by_class(container, classes::WRAP)
            .ok_or_else(|| StructureError::MissingWrap {
                container: describe(&self.doc, container),
            })?;
        let scroller = self
            .doc
            .find_by_class(wrap, classes::ITEMS)
            .ok_or_else(|| StructureError::MissingItems {
                container: describe(&self.doc, container),
            })?;
        Ok((wrap, scroller))
    }

    fn instance_id(&mut self, container: D::Element) -> String {
        if let Some(id) = self.doc.attribute(container, "id").filter(|s| !s.is_empty()) {
            return id;
        }
        if let Some(id) = self
            .doc
            .attribute(container, "data-timeline-id")
            .filter(|s| !s.is_empty())
        {
            return id;
        }
        loop {
            self.generated_ids += 1;
            let id = format!("timeline-{}", self.generated_ids);
            if !self.instances.iter().any(|i| i.id == id) {
                self.doc.set_attribute(container, "data-timeline-id", &id);
                return id;
            }
        }
    }

    /// One setup pass over instance `index`.
    fn setup(&mut self, index: usize, now: u64) {
        let Self {
            doc,
            hooks,
            instances,
            registry,
            events,
            timers,
            loader,
            carousel_options,
            ..
        } = self;
        let inst = &mut instances[index];
        inst.generation += 1;

        doc.set_style(inst.container, "opacity", "0");
        if !doc.has_class(inst.container, classes::LOADED) {
            wrap_content(doc, &inst.items);
        }
        inst.reset(doc);

        let attributes = Attributes::from_pairs(doc.attributes(inst.container));
        let (settings, _) = resolve(&attributes, &inst.options, inst.items.len());
        inst.settings = settings;

        let width = doc.viewport().width;
        inst.laid_out_width = Some(width);
        let mobile = width <= f64::from(inst.settings.min_width);
        if mobile {
            doc.add_class(inst.container, classes::MOBILE);
        }
        if inst.settings.colors.any() {
            hooks.apply_colors(doc, inst.container, &inst.settings.colors);
        }
        for item in &inst.items {
            if modal::prepare(doc, *item) {
                doc.set_attribute(*item, modal::BOUND, "1");
                inst.listeners.push(Binding::Modal { item: *item });
            }
        }

        let use_horizontal = match inst.settings.mode {
            Mode::Horizontal => width > f64::from(inst.settings.min_width),
            Mode::Vertical => width > f64::from(inst.settings.max_width),
        };
        let orientation = if use_horizontal {
            let loader = loader
                .as_mut()
                .map(|l| &mut **l as &mut dyn CarouselLoader<D::Element>);
            horizontal::setup(doc, inst, loader, carousel_options);
            Orientation::Horizontal
        } else {
            vertical::setup(doc, inst, mobile);
            Orientation::Vertical
        };
        doc.add_class(inst.container, classes::LOADED);
        registry.insert(&inst.id, inst.container);
        log::debug!(
            id = inst.id.as_str(), generation = inst.generation;
            "set up as {orientation:?}"
        );

        events.emit(&Initialized {
            id: inst.id.clone(),
            container: inst.container,
            settings: inst.settings.clone(),
            orientation,
            generation: inst.generation,
        });
        timers.schedule(
            now,
            FADE_IN_DELAY,
            Job::FadeIn {
                container: inst.container,
                generation: inst.generation,
            },
        );
    }

    fn relayout(&mut self, now: u64) {
        let width = self.doc.viewport().width;
        for index in 0..self.instances.len() {
            if self.instances[index].laid_out_width == Some(width) {
                log::debug!(
                    id = self.instances[index].id.as_str();
                    "resize ignored: width unchanged at {width}"
                );
                continue;
            }
            self.setup(index, now);
        }
    }

    fn navigate(&mut self, index: usize, button: D::Element, direction: Direction) {
        let Self {
            doc,
            hooks,
            instances,
            ..
        } = self;
        let inst = &mut instances[index];
        if !horizontal::navigate(doc, inst, direction) {
            return;
        }
        if let Some(node_id) = horizontal::active_node_id(doc, inst) {
            hooks.active_node_changed(doc, inst.container, &node_id);
        }
        doc.blur(button);
    }
}

fn binds<E: PartialEq>(binding: &Binding<E>, element: E) -> bool {
    match binding {
        Binding::NavButton { button, .. } => *button == element,
        Binding::ItemActivate { item, .. } | Binding::Modal { item } => *item == element,
        Binding::WindowScroll => false,
    }
}

/// Wraps each item's content in the inner layers, once.
fn wrap_content<D: Document>(doc: &mut D, items: &[D::Element]) {
    for item in items {
        let Some(content) = doc.find_by_class(*item, classes::CONTENT) else {
            continue;
        };
        let content_wrap = doc.create_element("div");
        doc.set_class_name(content_wrap, classes::CONTENT_WRAP);
        doc.wrap(content, content_wrap);
        let inner = doc.create_element("div");
        doc.set_class_name(inner, classes::ITEM_INNER);
        doc.wrap(content_wrap, inner);
    }
}

/// `#id`, or the class list as a selector.
fn describe<D: Document>(doc: &D, container: D::Element) -> String {
    match doc.attribute(container, "id").filter(|s| !s.is_empty()) {
        Some(id) => format!("#{id}"),
        None => {
            let classes: Vec<String> = doc
                .class_name(container)
                .split_whitespace()
                .map(|c| format!(".{c}"))
                .collect();
            classes.concat()
        }
    }
}
