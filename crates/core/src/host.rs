//! Host collaborator contracts.
//!
//! The manager never reaches for globals; every host facility is injected
//! through one of these traits so tests can substitute fakes.

use crate::colors::ColorScheme;
use crate::types::{Offset, Rgba, Scale, SurfaceGeometry, ViewportMetrics};

/// Current viewport metrics.
///
/// Resize notifications are delivered by the host integration calling
/// [`DisplayManager::on_viewport_resized`](crate::DisplayManager::on_viewport_resized).
pub trait ViewportHost {
    fn metrics(&self) -> ViewportMetrics;
}

/// The element that frames the game surface.
pub trait SurfaceContainer {
    /// Handle to an engine-provided drawable that can be attached.
    type Drawable;

    fn set_visible(&mut self, visible: bool);

    /// Inner size, excluding the border.
    fn set_size(&mut self, geometry: SurfaceGeometry);

    fn set_background(&mut self, color: Rgba);

    /// Top/left of the container's outer box inside the viewport.
    fn set_offset(&mut self, offset: Offset);

    /// Scale about the container's center.
    fn set_scale(&mut self, scale: Scale);

    /// Attach the drawable at `position`, relative to the container's inner top-left.
    fn attach(&mut self, drawable: Self::Drawable, position: Offset);
}

/// Construction parameters handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    pub inner_width: u32,
    pub inner_height: u32,
    pub colors: &'static ColorScheme,
}

/// The game engine collaborator.
///
/// Engine-side pause/resume/quit semantics belong to the engine; the manager
/// only delegates.
pub trait GameEngine {
    type Drawable;

    /// Handle to the surface the engine draws into.
    fn drawable(&self) -> Self::Drawable;

    /// Distance from the drawable's top edge to the engine's coordinate origin.
    fn top_offset(&self) -> f64;

    /// Distance from the drawable's left edge to the engine's coordinate origin.
    fn left_offset(&self) -> f64;

    fn pause(&mut self);

    fn resume(&mut self);

    fn quit(&mut self);
}

/// Builds the engine on the first `start`.
pub trait EngineFactory {
    type Engine: GameEngine;

    fn create(&mut self, config: EngineConfig) -> Self::Engine;
}

impl<F, E> EngineFactory for F
where
    F: FnMut(EngineConfig) -> E,
    E: GameEngine,
{
    type Engine = E;

    fn create(&mut self, config: EngineConfig) -> E {
        self(config)
    }
}
