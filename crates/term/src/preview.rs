//! PreviewEngine: a stand-in engine that paints the resolved color scheme.
//!
//! It draws one row per tetromino (fill swatch, then shadow swatch) and a
//! status banner while paused or after quit. Its framebuffer carries a
//! one-cell margin, so the engine origin sits at (1, 1) of the drawable.

use std::cell::RefCell;
use std::rc::Rc;

use crate::colors::ColorScheme;
use crate::core::{EngineConfig, GameEngine};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::host::SharedFrame;
use crate::types::PieceKind;

/// Cells between the drawable's edge and the engine's origin.
pub const PREVIEW_MARGIN: u16 = 1;

const SWATCH_W: u16 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Running,
    Paused,
    Quit,
}

pub struct PreviewEngine {
    frame: SharedFrame,
    colors: &'static ColorScheme,
    status: Status,
}

impl PreviewEngine {
    pub fn new(config: EngineConfig) -> Self {
        let w = clamp_u16(config.inner_width).saturating_add(PREVIEW_MARGIN * 2);
        let h = clamp_u16(config.inner_height).saturating_add(PREVIEW_MARGIN * 2);
        let engine = Self {
            frame: Rc::new(RefCell::new(FrameBuffer::new(w, h))),
            colors: config.colors,
            status: Status::Running,
        };
        engine.redraw();
        engine
    }

    pub fn is_paused(&self) -> bool {
        self.status == Status::Paused
    }

    pub fn has_quit(&self) -> bool {
        self.status == Status::Quit
    }

    fn redraw(&self) {
        let mut fb = self.frame.borrow_mut();
        let bg = Rgb::from(self.colors.background());
        fb.clear(CellStyle::solid(bg).into_cell(' '));

        let m = PREVIEW_MARGIN;
        for (row, kind) in PieceKind::ALL.iter().enumerate() {
            let y = m + 1 + row as u16 * 2;
            let fill = CellStyle::solid(bg.composite(self.colors.fill(*kind)));
            let shadow = CellStyle::solid(bg.composite(self.colors.shadow(*kind)));
            fb.fill_rect(m + 1, y, SWATCH_W, 1, fill.into_cell(' '));
            fb.fill_rect(m + 2 + SWATCH_W, y, SWATCH_W, 1, shadow.into_cell(' '));
        }

        let banner = match self.status {
            Status::Running => return,
            Status::Paused => "PAUSED",
            Status::Quit => "QUIT",
        };
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg,
            bold: true,
        };
        let y = m + 2 + PieceKind::ALL.len() as u16 * 2;
        fb.put_str(m + 1, y, banner, style);
    }
}

impl GameEngine for PreviewEngine {
    type Drawable = SharedFrame;

    fn drawable(&self) -> SharedFrame {
        Rc::clone(&self.frame)
    }

    fn top_offset(&self) -> f64 {
        PREVIEW_MARGIN as f64
    }

    fn left_offset(&self) -> f64 {
        PREVIEW_MARGIN as f64
    }

    fn pause(&mut self) {
        self.status = Status::Paused;
        self.redraw();
    }

    fn resume(&mut self) {
        self.status = Status::Running;
        self.redraw();
    }

    fn quit(&mut self) {
        self.status = Status::Quit;
        self.redraw();
    }
}

fn clamp_u16(v: u32) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}
