use std::cell::{Cell, RefCell};
use std::rc::Rc;

use serde_json::{json, Value};

use tetris_shell::colors::{resolve, SchemeName};
use tetris_shell::core::{
    DisplayManager, EngineConfig, EngineFactory, EventEmitter, GameEngine, LifecycleEvent,
    LifecycleState, SessionState, ShellError, SurfaceContainer, ViewportHost,
};
use tetris_shell::fullscreen::{ApiVariant, FullscreenHost, FullscreenOp};
use tetris_shell::types::{GameConfig, Offset, Rgba, Scale, SurfaceGeometry, ViewportMetrics};

#[derive(Clone, Default)]
struct FakeViewport(Rc<Cell<ViewportMetrics>>);

impl ViewportHost for FakeViewport {
    fn metrics(&self) -> ViewportMetrics {
        self.0.get()
    }
}

#[derive(Debug, Default)]
struct RecordingContainer {
    visible: bool,
    size: Option<SurfaceGeometry>,
    background: Option<Rgba>,
    offset: Offset,
    scale: Scale,
    attached: Vec<(u32, Offset)>,
}

impl SurfaceContainer for RecordingContainer {
    type Drawable = u32;

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_size(&mut self, geometry: SurfaceGeometry) {
        self.size = Some(geometry);
    }

    fn set_background(&mut self, color: Rgba) {
        self.background = Some(color);
    }

    fn set_offset(&mut self, offset: Offset) {
        self.offset = offset;
    }

    fn set_scale(&mut self, scale: Scale) {
        self.scale = scale;
    }

    fn attach(&mut self, drawable: u32, position: Offset) {
        self.attached.push((drawable, position));
    }
}

struct FakeEngine {
    id: u32,
    config: EngineConfig,
    calls: Rc<RefCell<Vec<&'static str>>>,
}

impl GameEngine for FakeEngine {
    type Drawable = u32;

    fn drawable(&self) -> u32 {
        self.id
    }

    fn top_offset(&self) -> f64 {
        3.0
    }

    fn left_offset(&self) -> f64 {
        2.0
    }

    fn pause(&mut self) {
        self.calls.borrow_mut().push("pause");
    }

    fn resume(&mut self) {
        self.calls.borrow_mut().push("resume");
    }

    fn quit(&mut self) {
        self.calls.borrow_mut().push("quit");
    }
}

#[derive(Default)]
struct FakeFactory {
    created: Rc<Cell<u32>>,
    calls: Rc<RefCell<Vec<&'static str>>>,
}

impl EngineFactory for FakeFactory {
    type Engine = FakeEngine;

    fn create(&mut self, config: EngineConfig) -> FakeEngine {
        self.created.set(self.created.get() + 1);
        FakeEngine {
            id: self.created.get(),
            config,
            calls: Rc::clone(&self.calls),
        }
    }
}

#[derive(Default)]
struct FakeFullscreen {
    supported: bool,
    active: bool,
}

impl FullscreenHost for FakeFullscreen {
    fn is_enabled(&self, variant: ApiVariant) -> bool {
        self.supported && variant == ApiVariant::Webkit
    }

    fn provides(&self, variant: ApiVariant, _op: FullscreenOp) -> bool {
        self.supported && variant == ApiVariant::Webkit
    }

    fn invoke(&mut self, _variant: ApiVariant, op: FullscreenOp) -> anyhow::Result<()> {
        self.active = op == FullscreenOp::Request;
        Ok(())
    }

    fn has_fullscreen_element(&self, _variant: ApiVariant) -> bool {
        self.active
    }
}

type Manager = DisplayManager<FakeViewport, RecordingContainer, FakeFullscreen, FakeFactory, EventEmitter>;

struct Harness {
    manager: Manager,
    viewport: Rc<Cell<ViewportMetrics>>,
    created: Rc<Cell<u32>>,
    calls: Rc<RefCell<Vec<&'static str>>>,
    events: Rc<RefCell<Vec<(&'static str, Value)>>>,
}

impl Harness {
    fn new(viewport: ViewportMetrics, fullscreen_supported: bool) -> Self {
        let vp = FakeViewport::default();
        vp.0.set(viewport);
        let factory = FakeFactory::default();
        let created = Rc::clone(&factory.created);
        let calls = Rc::clone(&factory.calls);
        let fullscreen = FakeFullscreen {
            supported: fullscreen_supported,
            active: false,
        };

        let mut manager = DisplayManager::new(
            vp.clone(),
            RecordingContainer::default(),
            fullscreen,
            factory,
            EventEmitter::new(),
        );

        let events = Rc::new(RefCell::new(Vec::new()));
        for event in LifecycleEvent::ALL {
            let events = Rc::clone(&events);
            manager.on(
                event,
                Box::new(move |payload: &Value| events.borrow_mut().push((event.as_str(), payload.clone()))),
            );
        }

        Self {
            manager,
            viewport: vp.0,
            created,
            calls,
            events,
        }
    }

    fn resize(&mut self, metrics: ViewportMetrics) {
        self.viewport.set(metrics);
        self.manager.on_viewport_resized();
    }

    fn event_names(&self) -> Vec<&'static str> {
        self.events.borrow().iter().map(|(name, _)| *name).collect()
    }
}

#[test]
fn new_manager_is_hidden_centered_and_unscaled() {
    let h = Harness::new(ViewportMetrics::new(100.0, 50.0), false);
    assert_eq!(h.manager.lifecycle(), LifecycleState::Hidden);
    assert!(!h.manager.container().visible);
    assert_eq!(h.manager.container().offset, Offset::new(24.0, 49.0));
    assert_eq!(h.manager.container().scale, Scale::Identity);
}

#[test]
fn start_centers_the_bordered_surface() {
    let mut h = Harness::new(ViewportMetrics::new(1920.0, 1080.0), false);
    h.manager.show();
    h.manager.start(&GameConfig::new(800, 600)).unwrap();
    assert_eq!(h.manager.container().offset, Offset::new(239.0, 559.0));
    assert_eq!(h.manager.transform().offset, Offset::new(239.0, 559.0));
}

#[test]
fn start_sizes_colors_and_attaches_engine_drawable() {
    let mut h = Harness::new(ViewportMetrics::new(500.0, 500.0), false);
    h.manager.show();
    h.manager
        .start(&GameConfig::new(10, 20).with_color_scheme("grayscale"))
        .unwrap();

    let c = h.manager.container();
    assert_eq!(c.size, Some(SurfaceGeometry::new(10, 20)));
    assert_eq!(c.background, Some(resolve("grayscale").background()));
    assert_eq!(c.attached, vec![(1, Offset::new(-3.0, -2.0))]);

    let engine = h.manager.engine().unwrap();
    assert_eq!((engine.config.inner_width, engine.config.inner_height), (10, 20));
    assert_eq!(engine.config.colors.name(), SchemeName::Grayscale);
    assert_eq!(h.manager.lifecycle(), LifecycleState::Running);
    assert_eq!(
        h.events.borrow().last().cloned(),
        Some(("start", json!({"width": 10, "height": 20, "colorScheme": "grayscale"})))
    );
}

#[test]
fn unknown_color_scheme_falls_back_to_standard() {
    let mut h = Harness::new(ViewportMetrics::new(500.0, 500.0), false);
    h.manager
        .start(&GameConfig::new(10, 20).with_color_scheme("neon"))
        .unwrap();
    assert_eq!(h.manager.colors().unwrap(), resolve("standard"));
}

#[test]
fn second_start_is_ignored() {
    let mut h = Harness::new(ViewportMetrics::new(500.0, 500.0), false);
    h.manager.show();
    h.manager.start(&GameConfig::new(10, 20)).unwrap();
    h.manager
        .start(&GameConfig::new(30, 40).with_color_scheme("grayscale"))
        .unwrap();

    assert_eq!(h.created.get(), 1);
    assert_eq!(h.manager.geometry(), SurfaceGeometry::new(10, 20));
    assert_eq!(h.manager.container().attached.len(), 1);
    assert_eq!(h.manager.engine().unwrap().config.colors.name(), SchemeName::Standard);
    assert_eq!(h.event_names(), vec!["show", "start"]);
}

#[test]
fn invalid_configuration_is_reported_and_creates_nothing() {
    let mut h = Harness::new(ViewportMetrics::new(500.0, 500.0), false);
    h.manager.show();

    assert_eq!(
        h.manager.start(&GameConfig::new(0, 20)),
        Err(ShellError::InvalidConfiguration {
            field: "width",
            value: 0
        })
    );
    let missing: GameConfig = serde_json::from_str(r#"{"width": 10}"#).unwrap();
    assert_eq!(
        h.manager.start(&missing),
        Err(ShellError::InvalidConfiguration {
            field: "height",
            value: 0
        })
    );
    assert_eq!(h.created.get(), 0);
    assert_eq!(h.manager.lifecycle(), LifecycleState::ShownIdle);

    h.manager.start(&GameConfig::new(10, 20)).unwrap();
    assert_eq!(h.created.get(), 1);
}

#[test]
fn enabling_scaling_with_high_resolution_uses_viewport_fit() {
    let mut h = Harness::new(ViewportMetrics::new(400.0, 400.0).with_density_ratio(2.0), false);
    h.manager.set_high_resolution(true);
    assert_eq!(h.manager.container().scale, Scale::Uniform(0.5));

    h.manager.start(&GameConfig::new(100, 100)).unwrap();
    assert_eq!(h.manager.container().scale, Scale::Uniform(0.5));

    h.manager.set_scaling(true);
    assert_eq!(h.manager.container().scale, Scale::Uniform(4.0));

    h.manager.set_scaling(false);
    assert_eq!(h.manager.container().scale, Scale::Uniform(0.5));
}

#[test]
fn plain_resize_does_not_reapply_density_compensation() {
    let mut h = Harness::new(ViewportMetrics::new(400.0, 400.0).with_density_ratio(2.0), false);
    h.manager.start(&GameConfig::new(100, 100)).unwrap();
    h.manager.set_high_resolution(true);
    assert_eq!(h.manager.container().scale, Scale::Uniform(0.5));

    h.resize(ViewportMetrics::new(800.0, 600.0).with_density_ratio(4.0));
    assert_eq!(h.manager.container().scale, Scale::Uniform(0.5));
    assert_eq!(h.manager.container().offset, Offset::new(249.0, 349.0));

    h.manager.set_high_resolution(true);
    assert_eq!(h.manager.container().scale, Scale::Uniform(0.25));

    h.manager.set_high_resolution(false);
    assert_eq!(h.manager.container().scale, Scale::Identity);
}

#[test]
fn scaling_follows_every_resize() {
    let mut h = Harness::new(ViewportMetrics::new(400.0, 400.0), false);
    h.manager.set_scaling(true);
    h.manager.start(&GameConfig::new(100, 50)).unwrap();
    assert_eq!(h.manager.container().scale, Scale::Uniform(4.0));

    h.resize(ViewportMetrics::new(200.0, 200.0));
    assert_eq!(h.manager.container().scale, Scale::Uniform(2.0));

    h.resize(ViewportMetrics::new(1000.0, 100.0));
    assert_eq!(h.manager.container().scale, Scale::Uniform(2.0));
}

#[test]
fn degenerate_viewport_collapses_to_identity() {
    let mut h = Harness::new(ViewportMetrics::new(400.0, 400.0), false);
    h.manager.set_scaling(true);
    // No session yet: the surface is 0x0.
    assert_eq!(h.manager.container().scale, Scale::Identity);

    h.manager.start(&GameConfig::new(100, 50)).unwrap();
    h.resize(ViewportMetrics::new(0.0, 0.0));
    assert_eq!(h.manager.container().scale, Scale::Identity);
}

#[test]
fn lifecycle_transitions_delegate_to_engine() {
    let mut h = Harness::new(ViewportMetrics::new(400.0, 400.0), false);
    h.manager.show();
    assert_eq!(h.manager.lifecycle(), LifecycleState::ShownIdle);
    h.manager.start(&GameConfig::new(10, 20)).unwrap();

    h.manager.pause();
    h.manager.pause();
    assert_eq!(h.manager.lifecycle(), LifecycleState::Paused);
    h.manager.resume();
    assert_eq!(h.manager.lifecycle(), LifecycleState::Running);

    h.manager.hide();
    assert_eq!(h.manager.lifecycle(), LifecycleState::Hidden);
    assert!(!h.manager.container().visible);
    assert!(h.manager.engine().is_some());

    h.manager.show();
    assert_eq!(h.manager.lifecycle(), LifecycleState::Running);

    h.manager.quit();
    assert_eq!(h.manager.lifecycle(), LifecycleState::Quit);
    h.manager.start(&GameConfig::new(10, 20)).unwrap();

    assert_eq!(h.created.get(), 1);
    assert_eq!(*h.calls.borrow(), vec!["pause", "pause", "resume", "quit"]);
    assert_eq!(
        h.event_names(),
        vec!["show", "start", "pause", "pause", "resume", "hide", "show", "quit"]
    );
}

#[test]
fn every_lifecycle_call_reaches_an_existing_engine() {
    let mut h = Harness::new(ViewportMetrics::new(400.0, 400.0), false);
    h.manager.show();
    h.manager.start(&GameConfig::new(10, 20)).unwrap();

    h.manager.resume();
    assert_eq!(h.manager.lifecycle(), LifecycleState::Running);
    h.manager.quit();
    h.manager.pause();
    h.manager.resume();

    assert_eq!(*h.calls.borrow(), vec!["resume", "quit", "pause", "resume"]);
    assert_eq!(h.manager.session(), SessionState::Quit);
    assert_eq!(h.manager.lifecycle(), LifecycleState::Quit);
}

#[test]
fn session_state_survives_hiding() {
    let mut h = Harness::new(ViewportMetrics::new(400.0, 400.0), false);
    h.manager.show();
    h.manager.start(&GameConfig::new(10, 20)).unwrap();
    h.manager.pause();
    h.manager.hide();

    assert_eq!(h.manager.lifecycle(), LifecycleState::Hidden);
    assert_eq!(h.manager.session(), SessionState::Paused);
    h.manager.resume();
    assert_eq!(h.manager.session(), SessionState::Running);
}

#[test]
fn lifecycle_calls_without_engine_are_noops() {
    let mut h = Harness::new(ViewportMetrics::new(400.0, 400.0), false);
    h.manager.show();
    h.manager.pause();
    h.manager.resume();
    h.manager.quit();
    assert_eq!(h.manager.lifecycle(), LifecycleState::ShownIdle);
    assert!(h.calls.borrow().is_empty());
    assert_eq!(h.event_names(), vec!["show"]);
}

#[test]
fn show_and_hide_are_idempotent() {
    let mut h = Harness::new(ViewportMetrics::new(400.0, 400.0), false);
    h.manager.hide();
    h.manager.show();
    h.manager.show();
    h.manager.hide();
    h.manager.hide();
    assert_eq!(h.event_names(), vec!["show", "hide"]);
}

#[test]
fn start_while_hidden_runs_once_shown() {
    let mut h = Harness::new(ViewportMetrics::new(400.0, 400.0), false);
    h.manager.start(&GameConfig::new(10, 20)).unwrap();
    assert_eq!(h.manager.lifecycle(), LifecycleState::Hidden);
    h.manager.show();
    assert_eq!(h.manager.lifecycle(), LifecycleState::Running);
}

#[test]
fn unsupported_fullscreen_toggle_is_harmless() {
    let mut h = Harness::new(ViewportMetrics::new(400.0, 400.0), false);
    h.manager.toggle_fullscreen();
    assert!(!h.manager.fullscreen().is_supported());
    assert!(!h.manager.display_mode().fullscreen_active);
}

#[test]
fn fullscreen_toggle_reflects_host_state_and_recomputes() {
    let mut h = Harness::new(ViewportMetrics::new(400.0, 400.0).with_density_ratio(2.0), true);
    h.manager.start(&GameConfig::new(100, 100)).unwrap();

    h.manager.toggle_fullscreen();
    assert!(h.manager.display_mode().fullscreen_active);

    // Host changes viewport and density while entering fullscreen; the toggle
    // is a full recompute, so density compensation picks up the new ratio.
    h.manager.set_high_resolution(true);
    h.viewport.set(ViewportMetrics::new(1000.0, 1000.0).with_density_ratio(4.0));
    h.manager.toggle_fullscreen();
    assert!(!h.manager.display_mode().fullscreen_active);
    assert_eq!(h.manager.container().scale, Scale::Uniform(0.25));
    assert_eq!(h.manager.container().offset, Offset::new(449.0, 449.0));

    // Scaling is unaffected by fullscreen state.
    h.manager.set_scaling(true);
    assert!(!h.manager.display_mode().fullscreen_active);
    assert_eq!(h.manager.container().scale, Scale::Uniform(10.0));
}
