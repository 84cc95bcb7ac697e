//! Carousel engine facade.
//!
//! Owns the authoritative scroll offset and every component derived from
//! it, and exposes the control surface consumed by the rendering layer:
//! programmatic navigation, gesture entry points, auto-play controls,
//! per-item style evaluation and the visible-window query. The host pumps
//! control time through [`CarouselEngine::update`]; per-frame reads go
//! through the [`SharedOffset`]/[`ProgressSampler`] handles, which never
//! lock or allocate.

use std::fmt;

use log::debug;
use uuid::Uuid;

use crate::autoplay::{AutoPlayController, AutoPlayState};
use crate::config::{AutoPlayDirection, CarouselConfig};
use crate::error::CarouselError;
use crate::event::{CarouselEvent, EventDispatcher, EventType};
use crate::gesture::{GesturePhase, PanEvent, PanGestureMachine, SettleAnimation};
use crate::layout::SnapPointTable;
use crate::math::wrap_index;
use crate::offset::SharedOffset;
use crate::plugin::{CarouselPlugin, PluginManager};
use crate::presets::{PresetConfig, PresetRegistry};
use crate::progress::{item_progress, ProgressSampler};
use crate::style::ItemStyle;
use crate::time::CarouselTime;
use crate::virtualization::compute_visible_indices;

/// Custom animation function: progress, index, total items, config
pub type CustomAnimationFn = dyn Fn(f64, usize, usize, &PresetConfig) -> ItemStyle;

/// Per-item animation source
pub enum ItemAnimation {
    /// Items render with no animation style
    None,
    /// Registry preset looked up by name
    Preset {
        name: String,
        config: Option<PresetConfig>,
    },
    /// Caller-supplied animation function
    Custom {
        func: Box<CustomAnimationFn>,
        config: PresetConfig,
    },
}

impl fmt::Debug for ItemAnimation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "None"),
            Self::Preset { name, .. } => f.debug_struct("Preset").field("name", name).finish(),
            Self::Custom { .. } => write!(f, "Custom"),
        }
    }
}

/// Gesture-driven scroll, snap and progress engine for one carousel
pub struct CarouselEngine {
    id: String,
    config: CarouselConfig,
    item_count: usize,
    snap_points: SnapPointTable,
    offset: SharedOffset,
    active_index: usize,
    gesture: PanGestureMachine,
    settle: Option<SettleAnimation>,
    autoplay: AutoPlayController,
    plugins: PluginManager,
    presets: PresetRegistry,
    dispatcher: EventDispatcher,
    animation: ItemAnimation,
    now: CarouselTime,
    alive: bool,
}

impl CarouselEngine {
    /// Create an engine for `item_count` items
    pub fn new(config: CarouselConfig, item_count: usize) -> Result<Self, CarouselError> {
        config.validate()?;

        let snap_points = SnapPointTable::compute(
            item_count,
            config.item_size,
            config.gap,
            config.container_size,
            config.snap_alignment,
        );
        let offset = SharedOffset::new(snap_points.get(0).unwrap_or(0.0));
        let gesture = PanGestureMachine::new(
            config.gesture.clone(),
            config.direction.is_horizontal(),
            config.looping,
        );
        let autoplay = AutoPlayController::new(&config.auto_play);
        let animation = match &config.animation {
            Some(name) => ItemAnimation::Preset {
                name: name.clone(),
                config: None,
            },
            None => ItemAnimation::None,
        };

        let id = Uuid::new_v4().to_string();
        debug!("carousel {id} created with {item_count} items");

        Ok(Self {
            id,
            config,
            item_count,
            snap_points,
            offset,
            active_index: 0,
            gesture,
            settle: None,
            autoplay,
            plugins: PluginManager::new(),
            presets: PresetRegistry::default(),
            dispatcher: EventDispatcher::new(),
            animation,
            now: CarouselTime::zero(),
            alive: true,
        })
    }

    /// Unique instance id
    #[inline]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The configuration this engine was built with
    #[inline]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// Number of items
    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Current active index
    #[inline]
    pub fn current_index(&self) -> usize {
        self.active_index
    }

    /// Current gesture lifecycle phase
    #[inline]
    pub fn phase(&self) -> GesturePhase {
        self.gesture.phase()
    }

    /// Current scroll offset
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset.get()
    }

    /// Handle to the shared offset cell for render-context reads
    #[inline]
    pub fn offset_handle(&self) -> SharedOffset {
        self.offset.clone()
    }

    /// Snap-point geometry
    #[inline]
    pub fn snap_points(&self) -> &SnapPointTable {
        &self.snap_points
    }

    /// Whether `destroy` has not yet been called
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Auto-play state snapshot
    #[inline]
    pub fn auto_play_state(&self) -> AutoPlayState {
        self.autoplay.state()
    }

    /// Live progress of `index`
    #[inline]
    pub fn progress(&self, index: usize) -> f64 {
        item_progress(
            self.offset.get(),
            index,
            self.snap_points.step(),
            self.snap_points.alignment_offset(),
        )
    }

    /// Sampler bound to the shared offset for per-frame progress reads
    pub fn progress_sampler(&self) -> ProgressSampler {
        ProgressSampler::new(
            self.offset.clone(),
            self.snap_points.step(),
            self.snap_points.alignment_offset(),
        )
    }

    /// Indices that must currently be mounted
    pub fn visible_indices(&self) -> Vec<usize> {
        compute_visible_indices(
            self.offset.get() + self.snap_points.alignment_offset(),
            self.item_count,
            self.snap_points.step(),
            self.config.container_size,
            self.config.max_render_items,
            self.config.render_buffer,
        )
    }

    /// Replace the per-item animation source
    pub fn set_animation(&mut self, animation: ItemAnimation) {
        self.animation = animation;
    }

    /// Set a custom animation function
    pub fn set_custom_animation(
        &mut self,
        func: impl Fn(f64, usize, usize, &PresetConfig) -> ItemStyle + 'static,
    ) {
        self.animation = ItemAnimation::Custom {
            func: Box::new(func),
            config: PresetConfig::new(),
        };
    }

    /// Composed style for one item at the current offset: the animation
    /// source's style merged with every plugin's contribution.
    ///
    /// Never fails: an unknown preset or missing function yields an empty
    /// style and the item renders visually inert.
    pub fn item_style(&mut self, index: usize) -> ItemStyle {
        if !self.alive {
            return ItemStyle::default();
        }
        let progress = self.progress(index);
        let mut style = match &self.animation {
            ItemAnimation::None => ItemStyle::default(),
            ItemAnimation::Preset { name, config } => self
                .presets
                .evaluate(name, progress, config.as_ref())
                .unwrap_or_default(),
            ItemAnimation::Custom { func, config } => {
                func(progress, index, self.item_count, config)
            }
        };
        style.merge(self.plugins.animate(progress, index));
        style
    }

    /// Change the item count, recomputing snap geometry
    pub fn set_item_count(&mut self, item_count: usize) {
        self.item_count = item_count;
        self.rebuild_snap_points();
        if item_count == 0 {
            self.active_index = 0;
            self.settle = None;
            self.gesture.finish();
            self.offset.set(0.0);
            return;
        }
        if self.active_index >= item_count {
            self.active_index = item_count - 1;
        }
        self.reseat_if_idle();
    }

    /// Change the measured container size, recomputing snap geometry
    pub fn set_container_size(&mut self, container_size: f64) {
        self.config.container_size = container_size;
        self.rebuild_snap_points();
        self.reseat_if_idle();
    }

    fn rebuild_snap_points(&mut self) {
        self.snap_points = SnapPointTable::compute(
            self.item_count,
            self.config.item_size,
            self.config.gap,
            self.config.container_size,
            self.config.snap_alignment,
        );
    }

    /// Re-seat the offset on the active snap point while nothing animates
    fn reseat_if_idle(&mut self) {
        if self.settle.is_none() && !self.gesture.phase().is_dragging() {
            if let Some(point) = self.snap_points.get(self.active_index) {
                self.offset.set(point);
            }
        }
    }

    // --- control surface ---

    /// Navigate to an index. With `animated`, routes through the same
    /// settle path as a resolved gesture; otherwise jumps instantly.
    /// Ignored while a pointer owns the offset.
    pub fn scroll_to(&mut self, index: usize, animated: bool) {
        if !self.alive || self.item_count == 0 || self.gesture.phase().is_dragging() {
            return;
        }
        let count = self.item_count;
        let target = if self.config.looping {
            wrap_index(index as i64, count)
        } else {
            index.min(count - 1)
        };
        let target_offset = self.navigation_offset(target);

        if animated {
            self.begin_settle(target, target_offset);
            self.gesture.note_settle();
        } else {
            self.settle = None;
            self.gesture.finish();
            self.offset.set(self.snap_points.get(target).unwrap_or(target_offset));
            self.set_active(target);
        }
    }

    /// Navigate to the next item
    pub fn next(&mut self, animated: bool) {
        if !self.alive || self.item_count == 0 {
            return;
        }
        let base = self.navigation_base() as i64;
        if self.config.looping {
            self.scroll_to(wrap_index(base + 1, self.item_count), animated);
        } else {
            let target = ((base + 1).max(0) as usize).min(self.item_count - 1);
            self.scroll_to(target, animated);
        }
    }

    /// Navigate to the previous item
    pub fn prev(&mut self, animated: bool) {
        if !self.alive || self.item_count == 0 {
            return;
        }
        let base = self.navigation_base() as i64;
        if self.config.looping {
            self.scroll_to(wrap_index(base - 1, self.item_count), animated);
        } else {
            let target = (base - 1).max(0) as usize;
            self.scroll_to(target, animated);
        }
    }

    /// Index navigation is relative to: the in-flight settle target when
    /// one exists, the active index otherwise
    fn navigation_base(&self) -> usize {
        self.settle
            .as_ref()
            .map(|settle| settle.target_index())
            .unwrap_or(self.active_index)
    }

    /// Offset to animate to for `target`; in loop mode, shifted by whole
    /// extents so motion takes the shorter path from the current offset
    fn navigation_offset(&self, target: usize) -> f64 {
        let base = self.snap_points.get(target).unwrap_or(0.0);
        if !self.config.looping {
            return base;
        }
        let extent = self.snap_points.extent();
        if extent == 0.0 {
            return base;
        }
        let k = ((self.offset.get() - base) / extent).round();
        base + k * extent
    }

    // --- auto-play ---

    /// Start auto-play
    pub fn start_auto_play(&mut self) {
        if !self.alive {
            return;
        }
        self.autoplay.start();
        self.dispatcher.dispatch(&CarouselEvent::AutoPlayStarted);
    }

    /// Stop auto-play
    pub fn stop_auto_play(&mut self) {
        if !self.alive {
            return;
        }
        self.autoplay.stop();
        self.dispatcher.dispatch(&CarouselEvent::AutoPlayStopped);
    }

    /// Pause auto-play without cancelling its timer
    pub fn pause_auto_play(&mut self) {
        self.autoplay.pause();
    }

    /// Resume a paused auto-play
    pub fn resume_auto_play(&mut self) {
        self.autoplay.resume();
    }

    // --- gesture entry points ---

    /// Pointer down. Cancels any in-flight settle at its mid-flight
    /// offset and re-baselines the drag there.
    pub fn gesture_begin(&mut self) {
        if !self.alive {
            return;
        }
        if let Some(settle) = self.settle.take() {
            self.offset.set(settle.sample(self.now));
            self.gesture.finish();
        }
        self.autoplay.on_interaction(self.now);
        self.gesture.begin(self.offset.get(), self.item_count);
    }

    /// Pointer move with cumulative translations and live velocities
    pub fn gesture_move(
        &mut self,
        translation_x: f64,
        translation_y: f64,
        velocity_x: f64,
        velocity_y: f64,
    ) {
        if !self.alive {
            return;
        }
        match self
            .gesture
            .update(translation_x, translation_y, velocity_x, velocity_y)
        {
            Some(PanEvent::Activated { offset }) => {
                self.offset.set(offset);
                self.dispatcher.dispatch(&CarouselEvent::ScrollStart);
            }
            Some(PanEvent::Moved { offset }) => self.offset.set(offset),
            None => {}
        }
    }

    /// Pointer up. Resolves the release and starts the settle tween.
    pub fn gesture_end(&mut self) {
        if !self.alive {
            return;
        }
        if let Some(result) = self.gesture.end(&self.snap_points) {
            self.begin_settle(result.target_index, result.target_offset);
        }
    }

    fn begin_settle(&mut self, target_index: usize, target_offset: f64) {
        let duration = CarouselTime::from_millis(self.config.settle_duration_ms)
            .unwrap_or_else(|_| CarouselTime::zero());
        match self.settle.as_mut() {
            Some(settle) => settle.retarget(self.now, target_offset, target_index, duration),
            None => {
                self.settle = Some(SettleAnimation::new(
                    self.offset.get(),
                    target_offset,
                    target_index,
                    self.now,
                    duration,
                ));
            }
        }
    }

    // --- update loop ---

    /// Advance control time: drives the settle tween and auto-play
    /// deadlines. Call once per control tick.
    pub fn update(&mut self, now: CarouselTime) {
        if !self.alive {
            return;
        }
        self.now = now;

        if let Some(settle) = self.settle {
            self.offset.set(settle.sample(now));
            if settle.is_done(now) {
                self.settle = None;
                self.gesture.finish();
                self.complete_settle(settle.target_index());
            }
        }

        if let Some(direction) = self.autoplay.update(now) {
            if !self.gesture.phase().is_dragging() && self.item_count > 1 {
                match direction {
                    AutoPlayDirection::Forward => self.next(true),
                    AutoPlayDirection::Backward => self.prev(true),
                }
            }
        }
    }

    fn complete_settle(&mut self, target_index: usize) {
        // Normalize a loop-shifted offset back onto the canonical point
        if let Some(point) = self.snap_points.get(target_index) {
            self.offset.set(point);
        }
        self.set_active(target_index);
        self.dispatcher
            .dispatch(&CarouselEvent::ScrollEnd { index: target_index });
    }

    fn set_active(&mut self, index: usize) {
        if index == self.active_index {
            return;
        }
        self.active_index = index;
        debug!("carousel {} active index -> {index}", self.id);
        self.plugins.notify_index_change(index);
        self.dispatcher
            .dispatch(&CarouselEvent::IndexChanged { index });
    }

    // --- plugins and presets ---

    /// Register a plugin; duplicates by name warn and are ignored
    pub fn register_plugin(&mut self, plugin: Box<dyn CarouselPlugin>) {
        self.plugins.register(plugin);
    }

    /// Unregister a plugin by name; absent names are a no-op
    pub fn unregister_plugin(&mut self, name: &str) {
        self.plugins.unregister(name);
    }

    /// Run every plugin's init hook once
    pub fn init_plugins(&mut self) {
        self.plugins.init();
    }

    /// Number of registered plugins
    #[inline]
    pub fn plugin_count(&self) -> usize {
        self.plugins.count()
    }

    /// The preset registry, for registering custom presets
    #[inline]
    pub fn presets_mut(&mut self) -> &mut PresetRegistry {
        &mut self.presets
    }

    // --- events ---

    /// Subscribe an event listener, optionally filtered by type
    pub fn subscribe(
        &mut self,
        filter: Option<EventType>,
        listener: impl FnMut(&CarouselEvent) + 'static,
    ) -> u64 {
        self.dispatcher.subscribe(filter, listener)
    }

    /// Unsubscribe a listener by id
    pub fn unsubscribe(&mut self, id: u64) -> bool {
        self.dispatcher.unsubscribe(id)
    }

    /// Tear the engine down: cancels the settle tween and every auto-play
    /// deadline, destroys plugins, and turns all later calls into no-ops.
    pub fn destroy(&mut self) {
        if !self.alive {
            return;
        }
        self.settle = None;
        self.gesture.finish();
        self.autoplay.teardown();
        self.plugins.destroy();
        self.dispatcher.dispatch(&CarouselEvent::Destroyed);
        self.dispatcher.clear();
        self.alive = false;
        debug!("carousel {} destroyed", self.id);
    }
}

impl fmt::Debug for CarouselEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselEngine")
            .field("id", &self.id)
            .field("item_count", &self.item_count)
            .field("active_index", &self.active_index)
            .field("phase", &self.gesture.phase())
            .field("offset", &self.offset.get())
            .field("alive", &self.alive)
            .finish()
    }
}

impl Drop for CarouselEngine {
    fn drop(&mut self) {
        if self.alive {
            self.autoplay.teardown();
            self.plugins.destroy();
        }
    }
}
