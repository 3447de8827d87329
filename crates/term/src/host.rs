//! Terminal implementations of the host collaborator traits.
//!
//! One terminal cell is one surface pixel. The container is composed into a
//! viewport-sized framebuffer each frame; scale transforms are applied about
//! the container's center with nearest-neighbour sampling.

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use anyhow::Result;
use crossterm::{terminal, ExecutableCommand};

use crate::core::{SurfaceContainer, ViewportHost};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::fullscreen::{ApiVariant, FullscreenHost, FullscreenOp};
use crate::types::{Offset, Rgba, Scale, SurfaceGeometry, ViewportMetrics, BORDER_THICKNESS};

/// Framebuffer shared between an engine and the container it is attached to.
pub type SharedFrame = Rc<RefCell<FrameBuffer>>;

const BORDER_COLOR: Rgb = Rgb::new(200, 200, 200);

/// Terminal size as the viewport.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermViewport {
    density_ratio: Option<f64>,
}

impl TermViewport {
    pub fn new(density_ratio: Option<f64>) -> Self {
        Self { density_ratio }
    }

    /// Terminal size in cells, falling back to 80x24 when it cannot be read.
    pub fn size(&self) -> (u16, u16) {
        terminal::size().unwrap_or((80, 24))
    }
}

impl ViewportHost for TermViewport {
    fn metrics(&self) -> ViewportMetrics {
        let (w, h) = self.size();
        ViewportMetrics {
            width: w as f64,
            height: h as f64,
            density_ratio: self.density_ratio,
        }
    }
}

/// Bordered box holding the engine's framebuffer.
#[derive(Debug, Default)]
pub struct TermContainer {
    visible: bool,
    size: SurfaceGeometry,
    background: Rgba,
    offset: Offset,
    scale: Scale,
    drawable: Option<(SharedFrame, Offset)>,
}

impl TermContainer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn offset(&self) -> Offset {
        self.offset
    }

    pub fn scale(&self) -> Scale {
        self.scale
    }

    /// Attach position of the drawable, if one is attached.
    pub fn drawable_position(&self) -> Option<Offset> {
        self.drawable.as_ref().map(|(_, pos)| *pos)
    }

    /// Draw the container into `fb`, which represents the whole viewport.
    pub fn compose_into(&self, fb: &mut FrameBuffer) {
        fb.clear(Cell::default());
        if !self.visible {
            return;
        }

        let k = self.scale.factor();
        let outer_w = self.size.outer_width();
        let outer_h = self.size.outer_height();
        let center_x = self.offset.left + outer_w * 0.5;
        let center_y = self.offset.top + outer_h * 0.5;
        let x0 = center_x - outer_w * k * 0.5;
        let y0 = center_y - outer_h * k * 0.5;

        let background = Rgb::from(self.background);
        let drawable = self.drawable.as_ref().map(|(frame, pos)| (frame.borrow(), *pos));

        for ty in 0..fb.height() {
            let v = (ty as f64 + 0.5 - y0) / k;
            if v < 0.0 || v >= outer_h {
                continue;
            }
            for tx in 0..fb.width() {
                let u = (tx as f64 + 0.5 - x0) / k;
                if u < 0.0 || u >= outer_w {
                    continue;
                }

                let border = BORDER_THICKNESS as f64;
                if u < border || v < border || u >= outer_w - border || v >= outer_h - border {
                    fb.set(tx, ty, CellStyle::solid(BORDER_COLOR).into_cell(' '));
                    continue;
                }

                let (ix, iy) = (u - border, v - border);
                let cell = drawable
                    .as_ref()
                    .and_then(|(frame, pos)| {
                        frame.get_signed((ix - pos.left).floor() as i64, (iy - pos.top).floor() as i64)
                    })
                    .unwrap_or_else(|| CellStyle::solid(background).into_cell(' '));
                fb.set(tx, ty, cell);
            }
        }
    }
}

impl SurfaceContainer for TermContainer {
    type Drawable = SharedFrame;

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_size(&mut self, geometry: SurfaceGeometry) {
        self.size = geometry;
    }

    fn set_background(&mut self, color: Rgba) {
        self.background = color;
    }

    fn set_offset(&mut self, offset: Offset) {
        self.offset = offset;
    }

    fn set_scale(&mut self, scale: Scale) {
        self.scale = scale;
    }

    fn attach(&mut self, drawable: SharedFrame, position: Offset) {
        self.drawable = Some((drawable, position));
    }
}

/// Fullscreen via the terminal's alternate screen.
///
/// Only the unprefixed variant exists.
#[derive(Debug, Default)]
pub struct AltScreen {
    active: bool,
}

impl AltScreen {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FullscreenHost for AltScreen {
    fn is_enabled(&self, variant: ApiVariant) -> bool {
        variant == ApiVariant::Unprefixed
    }

    fn provides(&self, variant: ApiVariant, _op: FullscreenOp) -> bool {
        variant == ApiVariant::Unprefixed
    }

    fn invoke(&mut self, _variant: ApiVariant, op: FullscreenOp) -> Result<()> {
        match op {
            FullscreenOp::Request => {
                io::stdout().execute(terminal::EnterAlternateScreen)?;
                self.active = true;
            }
            FullscreenOp::Exit => {
                io::stdout().execute(terminal::LeaveAlternateScreen)?;
                self.active = false;
            }
            FullscreenOp::Query => {}
        }
        tracing::debug!(?op, active = self.active, "alternate screen switched");
        Ok(())
    }

    fn has_fullscreen_element(&self, _variant: ApiVariant) -> bool {
        self.active
    }
}
