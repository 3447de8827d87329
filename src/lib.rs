//! Tetris display shell (workspace facade crate).
//!
//! Re-exports the implementation crates under `crates/` as
//! `tetris_shell::{types,colors,fullscreen,core,term}`.

pub use tetris_shell_colors as colors;
pub use tetris_shell_core as core;
pub use tetris_shell_fullscreen as fullscreen;
pub use tetris_shell_term as term;
pub use tetris_shell_types as types;
