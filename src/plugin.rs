//! Carousel plugin system: capability trait and lifecycle manager.

use std::fmt;

use log::warn;

use crate::style::ItemStyle;

/// Extension contributing per-frame style fragments and lifecycle hooks.
///
/// Every method except `name` has a default no-op implementation.
/// `on_animate` runs on the render-synchronous path and must stay pure:
/// no blocking, no allocation beyond the returned style.
pub trait CarouselPlugin {
    /// Unique plugin name used as registration identity
    fn name(&self) -> &str;

    /// Called once when the owning carousel initializes
    fn on_init(&mut self) {}

    /// Called per visible item per frame. Return a style fragment to
    /// merge into the item's composed style, or `None` to contribute
    /// nothing this frame.
    fn on_animate(&self, _progress: f64, _index: usize) -> Option<ItemStyle> {
        None
    }

    /// Called when the active index changes
    fn on_index_change(&mut self, _index: usize) {}

    /// Called when the carousel is destroyed or the plugin unregistered
    fn on_destroy(&mut self) {}
}

/// Plugin assembled from optional closures, for one-off extensions that
/// don't warrant a dedicated type.
pub struct FnPlugin {
    name: String,
    animate: Option<Box<dyn Fn(f64, usize) -> Option<ItemStyle>>>,
    init: Option<Box<dyn FnMut()>>,
    index_change: Option<Box<dyn FnMut(usize)>>,
    destroy: Option<Box<dyn FnMut()>>,
}

impl FnPlugin {
    /// Create a plugin with the given name and no hooks
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            animate: None,
            init: None,
            index_change: None,
            destroy: None,
        }
    }

    /// Set the per-frame animate hook
    pub fn with_animate(mut self, animate: impl Fn(f64, usize) -> Option<ItemStyle> + 'static) -> Self {
        self.animate = Some(Box::new(animate));
        self
    }

    /// Set the init hook
    pub fn with_init(mut self, init: impl FnMut() + 'static) -> Self {
        self.init = Some(Box::new(init));
        self
    }

    /// Set the index-change hook
    pub fn with_index_change(mut self, index_change: impl FnMut(usize) + 'static) -> Self {
        self.index_change = Some(Box::new(index_change));
        self
    }

    /// Set the destroy hook
    pub fn with_destroy(mut self, destroy: impl FnMut() + 'static) -> Self {
        self.destroy = Some(Box::new(destroy));
        self
    }
}

impl CarouselPlugin for FnPlugin {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_init(&mut self) {
        if let Some(init) = self.init.as_mut() {
            init();
        }
    }

    fn on_animate(&self, progress: f64, index: usize) -> Option<ItemStyle> {
        self.animate.as_ref().and_then(|animate| animate(progress, index))
    }

    fn on_index_change(&mut self, index: usize) {
        if let Some(index_change) = self.index_change.as_mut() {
            index_change(index);
        }
    }

    fn on_destroy(&mut self) {
        if let Some(destroy) = self.destroy.as_mut() {
            destroy();
        }
    }
}

impl fmt::Debug for FnPlugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnPlugin").field("name", &self.name).finish()
    }
}

/// Owns the plugins of one carousel instance and composes their per-frame
/// style fragments.
pub struct PluginManager {
    plugins: Vec<Box<dyn CarouselPlugin>>,
    initialized: bool,
}

impl PluginManager {
    /// Create an empty manager
    pub fn new() -> Self {
        Self {
            plugins: Vec::new(),
            initialized: false,
        }
    }

    /// Create a manager owning an initial set of plugins
    pub fn with_plugins(plugins: Vec<Box<dyn CarouselPlugin>>) -> Self {
        Self {
            plugins,
            initialized: false,
        }
    }

    /// Register a plugin. A duplicate name warns and leaves the existing
    /// plugin in place.
    pub fn register(&mut self, plugin: Box<dyn CarouselPlugin>) {
        if self.plugins.iter().any(|p| p.name() == plugin.name()) {
            warn!("plugin {:?} is already registered, skipping", plugin.name());
            return;
        }
        self.plugins.push(plugin);
    }

    /// Remove a plugin by name, running its destroy hook. Absent names
    /// are a silent no-op.
    pub fn unregister(&mut self, name: &str) {
        if let Some(position) = self.plugins.iter().position(|p| p.name() == name) {
            let mut plugin = self.plugins.remove(position);
            plugin.on_destroy();
        }
    }

    /// Run every plugin's init hook. Idempotent: a second call invokes
    /// nothing until `destroy` resets the manager.
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        for plugin in &mut self.plugins {
            plugin.on_init();
        }
        self.initialized = true;
    }

    /// Compose the style fragments of every plugin for one item.
    ///
    /// Plugins run in registration order; scalar fields follow
    /// last-writer-wins while transform lists concatenate, earlier
    /// plugins' entries applying first.
    pub fn animate(&self, progress: f64, index: usize) -> ItemStyle {
        let mut merged = ItemStyle::default();
        for plugin in &self.plugins {
            if let Some(style) = plugin.on_animate(progress, index) {
                merged.merge(style);
            }
        }
        merged
    }

    /// Notify every plugin of an index change
    pub fn notify_index_change(&mut self, index: usize) {
        for plugin in &mut self.plugins {
            plugin.on_index_change(index);
        }
    }

    /// Run every plugin's destroy hook exactly once and clear the
    /// registry, enabling reinitialization.
    pub fn destroy(&mut self) {
        for plugin in &mut self.plugins {
            plugin.on_destroy();
        }
        self.plugins.clear();
        self.initialized = false;
    }

    /// Number of registered plugins
    #[inline]
    pub fn count(&self) -> usize {
        self.plugins.len()
    }

    /// Whether a plugin with this name is registered
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p.name() == name)
    }
}

impl Default for PluginManager {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for PluginManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PluginManager")
            .field("plugins", &self.plugins.iter().map(|p| p.name().to_string()).collect::<Vec<_>>())
            .field("initialized", &self.initialized)
            .finish()
    }
}
