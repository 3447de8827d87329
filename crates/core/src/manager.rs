//! DisplayManager: owns the surface container and drives the session lifecycle.
//!
//! All work happens synchronously inside a setter or a resize notification.
//! Geometry comes from the pure functions in [`crate::geometry`]; the manager
//! only snapshots host state, calls them, and pushes the result to the
//! container.

use serde_json::{json, Value};

use crate::colors::{resolve_opt, ColorScheme};
use crate::error::{Result, ShellError};
use crate::events::{EventBus, Listener, ListenerId};
use crate::fullscreen::{FullscreenController, FullscreenHost};
use crate::geometry::compute_transform;
use crate::host::{EngineConfig, EngineFactory, GameEngine, SurfaceContainer, ViewportHost};
use crate::lifecycle::{LifecycleEvent, LifecycleState, SessionState};
use crate::types::{DisplayMode, GameConfig, Offset, Recompute, SurfaceGeometry, Transform};

/// Presentation and lifecycle shell around one game surface.
pub struct DisplayManager<V, C, H, F, B>
where
    F: EngineFactory,
{
    viewport: V,
    container: C,
    fullscreen: FullscreenController<H>,
    factory: F,
    events: B,

    scaling: bool,
    high_resolution: bool,

    geometry: SurfaceGeometry,
    transform: Transform,
    colors: Option<&'static ColorScheme>,

    visible: bool,
    session: SessionState,
    engine: Option<F::Engine>,
}

impl<V, C, H, F, B> DisplayManager<V, C, H, F, B>
where
    V: ViewportHost,
    C: SurfaceContainer,
    H: FullscreenHost,
    F: EngineFactory,
    F::Engine: GameEngine<Drawable = C::Drawable>,
    B: EventBus,
{
    /// Take ownership of the container; it starts hidden, centered and unscaled.
    pub fn new(viewport: V, container: C, fullscreen: H, factory: F, events: B) -> Self {
        let mut manager = Self {
            viewport,
            container,
            fullscreen: FullscreenController::new(fullscreen),
            factory,
            events,
            scaling: false,
            high_resolution: false,
            geometry: SurfaceGeometry::default(),
            transform: Transform::default(),
            colors: None,
            visible: false,
            session: SessionState::Idle,
            engine: None,
        };
        manager.container.set_visible(false);
        manager.refresh(Recompute::Full);
        manager
    }

    pub fn scaling(&self) -> bool {
        self.scaling
    }

    pub fn set_scaling(&mut self, enabled: bool) {
        self.scaling = enabled;
        self.refresh(Recompute::Full);
    }

    pub fn high_resolution(&self) -> bool {
        self.high_resolution
    }

    pub fn set_high_resolution(&mut self, enabled: bool) {
        self.high_resolution = enabled;
        self.refresh(Recompute::Full);
    }

    /// Current flags, with `fullscreen_active` read from the host.
    pub fn display_mode(&self) -> DisplayMode {
        DisplayMode {
            scaling_enabled: self.scaling,
            high_density_enabled: self.high_resolution,
            fullscreen_active: self.fullscreen.is_active(),
        }
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen.toggle();
        self.refresh(Recompute::Full);
    }

    /// Resize notification: recenter, and rescale only if scaling is on.
    pub fn on_viewport_resized(&mut self) {
        self.refresh(Recompute::ResizeOnly);
    }

    pub fn show(&mut self) {
        if self.visible {
            return;
        }
        self.container.set_visible(true);
        self.visible = true;
        self.publish(LifecycleEvent::Show, Value::Null);
    }

    /// Hide the container. The engine, if any, is kept.
    pub fn hide(&mut self) {
        self.container.set_visible(false);
        let was_visible = std::mem::replace(&mut self.visible, false);
        if was_visible {
            self.publish(LifecycleEvent::Hide, Value::Null);
        }
    }

    /// Create the one game session.
    ///
    /// Ignored once an engine exists, whatever `config` says. Fails only when
    /// `width` or `height` is zero.
    pub fn start(&mut self, config: &GameConfig) -> Result<()> {
        if self.engine.is_some() {
            tracing::warn!(
                width = config.width,
                height = config.height,
                "start ignored: a game session already exists"
            );
            return Ok(());
        }
        validate(config)?;

        self.geometry = config.geometry();
        let colors = resolve_opt(config.color_scheme.as_deref());
        self.colors = Some(colors);

        self.container.set_size(self.geometry);
        self.container.set_background(colors.background());
        self.refresh(Recompute::ResizeOnly);

        let engine = self.factory.create(EngineConfig {
            inner_width: self.geometry.width,
            inner_height: self.geometry.height,
            colors,
        });
        let origin = Offset::new(-engine.top_offset(), -engine.left_offset());
        self.container.attach(engine.drawable(), origin);
        self.engine = Some(engine);
        self.session = SessionState::Running;

        tracing::info!(
            width = self.geometry.width,
            height = self.geometry.height,
            scheme = colors.name().as_str(),
            "game session started"
        );
        self.publish(
            LifecycleEvent::Start,
            json!({
                "width": self.geometry.width,
                "height": self.geometry.height,
                "colorScheme": colors.name().as_str(),
            }),
        );
        Ok(())
    }

    /// Forward to the engine, if one exists. The session is marked paused
    /// only when it was running.
    pub fn pause(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        engine.pause();
        if self.session == SessionState::Running {
            self.session = SessionState::Paused;
        }
        self.publish(LifecycleEvent::Pause, Value::Null);
    }

    pub fn resume(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        engine.resume();
        if self.session == SessionState::Paused {
            self.session = SessionState::Running;
        }
        self.publish(LifecycleEvent::Resume, Value::Null);
    }

    /// End the session. The engine is kept and never recreated, so later
    /// lifecycle calls still reach it.
    pub fn quit(&mut self) {
        let Some(engine) = self.engine.as_mut() else {
            return;
        };
        engine.quit();
        self.session = SessionState::Quit;
        self.publish(LifecycleEvent::Quit, Value::Null);
    }

    /// Session progress, independent of visibility.
    pub fn session(&self) -> SessionState {
        self.session
    }

    pub fn lifecycle(&self) -> LifecycleState {
        self.session.observed(self.visible)
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn geometry(&self) -> SurfaceGeometry {
        self.geometry
    }

    /// Resolved scheme of the running session.
    pub fn colors(&self) -> Option<&'static ColorScheme> {
        self.colors
    }

    pub fn engine(&self) -> Option<&F::Engine> {
        self.engine.as_ref()
    }

    pub fn engine_mut(&mut self) -> Option<&mut F::Engine> {
        self.engine.as_mut()
    }

    pub fn container(&self) -> &C {
        &self.container
    }

    pub fn container_mut(&mut self) -> &mut C {
        &mut self.container
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn fullscreen(&self) -> &FullscreenController<H> {
        &self.fullscreen
    }

    pub fn events_mut(&mut self) -> &mut B {
        &mut self.events
    }

    /// Subscribe to a lifecycle event.
    pub fn on(&mut self, event: LifecycleEvent, listener: Listener) -> ListenerId {
        self.events.on(event.as_str(), listener)
    }

    fn refresh(&mut self, recompute: Recompute) {
        let metrics = self.viewport.metrics();
        let mode = self.display_mode();
        let next = compute_transform(&mode, &metrics, &self.geometry, recompute, self.transform.scale);

        tracing::trace!(
            ?recompute,
            viewport_w = metrics.width,
            viewport_h = metrics.height,
            top = next.offset.top,
            left = next.offset.left,
            scale = next.scale.factor(),
            "surface transform recomputed"
        );

        self.container.set_offset(next.offset);
        if next.scale != self.transform.scale || recompute == Recompute::Full {
            self.container.set_scale(next.scale);
        }
        self.transform = next;
    }

    fn publish(&mut self, event: LifecycleEvent, payload: Value) {
        tracing::info!(event = event.as_str(), state = self.lifecycle().as_str(), "lifecycle");
        self.events.emit(event.as_str(), &payload);
    }
}

impl<V, C, H, F, B> std::fmt::Debug for DisplayManager<V, C, H, F, B>
where
    F: EngineFactory,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayManager")
            .field("scaling", &self.scaling)
            .field("high_resolution", &self.high_resolution)
            .field("geometry", &self.geometry)
            .field("transform", &self.transform)
            .field("visible", &self.visible)
            .field("session", &self.session)
            .field("has_engine", &self.engine.is_some())
            .finish()
    }
}

fn validate(config: &GameConfig) -> Result<()> {
    if config.width == 0 {
        return Err(ShellError::InvalidConfiguration {
            field: "width",
            value: config.width,
        });
    }
    if config.height == 0 {
        return Err(ShellError::InvalidConfiguration {
            field: "height",
            value: config.height,
        });
    }
    Ok(())
}
