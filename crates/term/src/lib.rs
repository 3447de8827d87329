//! Terminal host for the display shell.
//!
//! Implements the host collaborator traits on top of crossterm so the
//! [`DisplayManager`](crate::core::DisplayManager) can drive a real terminal:
//!
//! - [`TermViewport`]: terminal size (in cells) as the viewport
//! - [`TermContainer`]: bordered box composed into a framebuffer
//! - [`AltScreen`]: alternate screen as the only fullscreen variant
//! - [`PreviewEngine`]: stand-in engine painting the active color scheme
//! - [`TerminalRenderer`]: diffing framebuffer flush
//!
//! Everything except the renderer and [`TermViewport::size`] is pure and
//! unit-tested without a terminal.

pub mod fb;
pub mod host;
pub mod input;
pub mod preview;
pub mod renderer;

pub use tetris_shell_colors as colors;
pub use tetris_shell_core as core;
pub use tetris_shell_fullscreen as fullscreen;
pub use tetris_shell_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use host::{AltScreen, SharedFrame, TermContainer, TermViewport};
pub use input::{map_key, ShellCommand};
pub use preview::{PreviewEngine, PREVIEW_MARGIN};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
