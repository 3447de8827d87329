//! Display & lifecycle manager for a hosted Tetris surface.
//!
//! This crate keeps the game surface centered and scaled inside whatever
//! viewport the host provides, and gives the rest of the application one
//! lifecycle to drive (show, hide, start, pause, resume, quit).
//!
//! # Module Structure
//!
//! - [`geometry`]: pure centering and scaling math
//! - [`host`]: traits for the injected viewport, container and engine collaborators
//! - [`events`]: publish/subscribe capability and a default in-process emitter
//! - [`lifecycle`]: lifecycle states and event names
//! - [`manager`]: [`DisplayManager`], tying the above together
//! - [`config`]: environment-driven [`ShellConfig`]
//! - [`error`]: [`ShellError`]
//!
//! # Scaling Rules
//!
//! Evaluated in priority order on every recompute:
//!
//! 1. **Scaling on**: fit the surface to the viewport, preserving aspect ratio.
//!    Reacts to every resize.
//! 2. **High resolution on** (mode toggles only): scale by `1 / density_ratio`.
//! 3. Otherwise (mode toggles only): no transform.
//!
//! Non-finite or non-positive factors collapse to no transform.
//!
//! # Example
//!
//! ```
//! use tetris_shell_core::geometry::{center, compute_scale};
//! use tetris_shell_core::types::{DisplayMode, Offset, Recompute, Scale, SurfaceGeometry, ViewportMetrics};
//!
//! let vp = ViewportMetrics::new(1920.0, 1080.0);
//! let surface = SurfaceGeometry::new(800, 600);
//! assert_eq!(center(&vp, &surface), Offset::new(239.0, 559.0));
//!
//! let mode = DisplayMode { scaling_enabled: true, ..Default::default() };
//! assert_eq!(compute_scale(&mode, &vp, &surface, Recompute::ResizeOnly), Some(Scale::Uniform(1.8)));
//! ```

pub mod config;
pub mod error;
pub mod events;
pub mod geometry;
pub mod host;
pub mod lifecycle;
pub mod manager;

pub use tetris_shell_colors as colors;
pub use tetris_shell_fullscreen as fullscreen;
pub use tetris_shell_types as types;

pub use config::ShellConfig;
pub use error::{Result, ShellError};
pub use events::{EventBus, EventEmitter, Listener, ListenerId};
pub use geometry::{center, compute_scale, compute_transform};
pub use host::{EngineConfig, EngineFactory, GameEngine, SurfaceContainer, ViewportHost};
pub use lifecycle::{LifecycleEvent, LifecycleState, SessionState};
pub use manager::DisplayManager;
