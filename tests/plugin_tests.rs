use std::cell::RefCell;
use std::rc::Rc;

use carousel_engine::{
    CarouselConfig, CarouselEngine, CarouselTime, FnPlugin, ItemStyle, PluginManager, TransformOp,
};

fn ms(value: f64) -> CarouselTime {
    CarouselTime::from_millis(value).unwrap()
}

fn scale_plugin(name: &str, opacity: f64) -> FnPlugin {
    FnPlugin::new(name).with_animate(move |_, _| {
        Some(
            ItemStyle::new()
                .with_transform(TransformOp::Scale(0.9))
                .with_opacity(opacity),
        )
    })
}

#[test]
fn test_composition_transform_order_and_opacity_override() {
    let mut manager = PluginManager::new();
    manager.register(Box::new(scale_plugin("first", 0.4)));
    manager.register(Box::new(scale_plugin("second", 0.7)));

    let style = manager.animate(0.0, 0);
    // Both transform entries survive, in registration order
    assert_eq!(
        style.transform,
        vec![TransformOp::Scale(0.9), TransformOp::Scale(0.9)]
    );
    // Opacity comes from the later-registered plugin
    assert_eq!(style.opacity, Some(0.7));
}

#[test]
fn test_init_twice_invokes_each_on_init_once() {
    let mut manager = PluginManager::new();
    let inits = Rc::new(RefCell::new(Vec::new()));

    for name in ["a", "b"] {
        let log = inits.clone();
        manager.register(Box::new(
            FnPlugin::new(name).with_init(move || log.borrow_mut().push(name)),
        ));
    }

    manager.init();
    manager.init();
    assert_eq!(*inits.borrow(), vec!["a", "b"]);
}

#[test]
fn test_destroy_then_count_is_zero() {
    let mut manager = PluginManager::new();
    manager.register(Box::new(FnPlugin::new("a")));
    manager.register(Box::new(FnPlugin::new("b")));

    let destroys = Rc::new(RefCell::new(0));
    let counter = destroys.clone();
    manager.register(Box::new(
        FnPlugin::new("c").with_destroy(move || *counter.borrow_mut() += 1),
    ));

    manager.destroy();
    assert_eq!(manager.count(), 0);
    assert_eq!(*destroys.borrow(), 1);

    // Destroying again runs no teardown a second time
    manager.destroy();
    assert_eq!(*destroys.borrow(), 1);
}

#[test]
fn test_plugins_receive_index_changes_from_engine() {
    let config = CarouselConfig::new()
        .with_item_size(100.0, 0.0)
        .with_container_size(100.0);
    let mut engine = CarouselEngine::new(config, 5).unwrap();

    let indices = Rc::new(RefCell::new(Vec::new()));
    let log = indices.clone();
    engine.register_plugin(Box::new(
        FnPlugin::new("tracker").with_index_change(move |index| log.borrow_mut().push(index)),
    ));
    engine.init_plugins();

    engine.scroll_to(2, false);
    engine.scroll_to(4, true);
    let mut t = 0.0;
    while t <= 500.0 {
        engine.update(ms(t));
        t += 16.0;
    }

    assert_eq!(*indices.borrow(), vec![2, 4]);
}

#[test]
fn test_engine_merges_plugin_styles_into_item_style() {
    let config = CarouselConfig::new()
        .with_item_size(100.0, 0.0)
        .with_container_size(100.0)
        .with_animation("fade");
    let mut engine = CarouselEngine::new(config, 5).unwrap();

    engine.register_plugin(Box::new(FnPlugin::new("dim").with_animate(|_, _| {
        Some(ItemStyle::new().with_opacity(0.33))
    })));

    // The plugin fragment merges after the preset: last writer wins
    let style = engine.item_style(0);
    assert_eq!(style.opacity, Some(0.33));

    engine.unregister_plugin("dim");
    let style = engine.item_style(0);
    assert_eq!(style.opacity, Some(1.0));
}

#[test]
fn test_unregister_unknown_plugin_is_silent() {
    let config = CarouselConfig::new().with_item_size(100.0, 0.0);
    let mut engine = CarouselEngine::new(config, 3).unwrap();
    engine.unregister_plugin("missing");
    assert_eq!(engine.plugin_count(), 0);
}
