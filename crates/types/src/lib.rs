//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the display shell.
//! All types are plain data with no host bindings, making them usable in any
//! context (geometry math, color schemes, terminal or browser hosts).
//!
//! # Geometry Model
//!
//! | Type | Meaning |
//! |------|---------|
//! | [`ViewportMetrics`] | Snapshot of the host display area (width, height, density ratio) |
//! | [`SurfaceGeometry`] | Fixed size of the game surface for one session |
//! | [`DisplayMode`] | The three independent display flags |
//! | [`Transform`] | Centering offset plus scale applied to the surface container |
//!
//! The surface container carries a border of [`BORDER_THICKNESS`] on both
//! sides of each axis, so its outer box is `width + 2` by `height + 2`.
//!
//! # Examples
//!
//! ```
//! use tetris_shell_types::{PieceKind, Rgba, SurfaceGeometry, ViewportMetrics};
//!
//! // Parse a piece kind (case-insensitive)
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//!
//! // Packed ARGB colors
//! let cyan = Rgba::from_argb(0xFF00FFFF);
//! assert_eq!(cyan.to_css(), "rgba(0, 255, 255, 1)");
//!
//! // Geometry snapshots
//! let vp = ViewportMetrics::new(1920.0, 1080.0);
//! assert_eq!(vp.density_or_default(), 1.0);
//! assert_eq!(SurfaceGeometry::new(800, 600).outer_width(), 802.0);
//! ```

use serde::{Deserialize, Serialize};

/// Border thickness of the surface container, added on both sides of each axis.
pub const BORDER_THICKNESS: u32 = 1;

/// Density ratio assumed when the host does not report a usable one.
pub const DEFAULT_DENSITY_RATIO: f64 = 1.0;

/// The seven tetromino piece kinds
///
/// Every color scheme carries one fill and one shadow color per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All kinds, in color-table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
        PieceKind::T,
    ];

    /// Position of this kind inside [`PieceKind::ALL`].
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::S => 2,
            PieceKind::Z => 3,
            PieceKind::J => 4,
            PieceKind::L => 5,
            PieceKind::T => 6,
        }
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_shell_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::J => "j",
            PieceKind::L => "l",
        }
    }
}

/// 8-bit-per-channel color with independent alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 0xFF)
    }

    /// Decode a packed `0xAARRGGBB` value.
    ///
    /// ```
    /// use tetris_shell_types::Rgba;
    ///
    /// assert_eq!(Rgba::from_argb(0x80FF8000), Rgba::new(0xFF, 0x80, 0x00, 0x80));
    /// ```
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    pub const fn to_argb(&self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 0xFF
    }

    /// CSS `rgba()` notation; alpha is written in `[0, 1]` with at most three decimals.
    pub fn to_css(&self) -> String {
        let alpha = format!("{:.3}", self.a as f64 / 255.0);
        let alpha = alpha.trim_end_matches('0').trim_end_matches('.');
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }

    /// Drop alpha, for back-ends that only know opaque colors.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// Composite this color over `bg`, which is treated as opaque.
    ///
    /// ```
    /// use tetris_shell_types::Rgba;
    ///
    /// let half_white = Rgba::new(255, 255, 255, 0x80);
    /// let out = half_white.blend_over(Rgba::opaque(0, 0, 0));
    /// assert_eq!(out, Rgba::opaque(128, 128, 128));
    /// ```
    pub fn blend_over(&self, bg: Rgba) -> Rgba {
        let a = self.a as u32;
        let mix = |fg: u8, bg: u8| ((fg as u32 * a + bg as u32 * (255 - a) + 127) / 255) as u8;
        Rgba::opaque(mix(self.r, bg.r), mix(self.g, bg.g), mix(self.b, bg.b))
    }
}

/// Read-only snapshot of the host display area.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportMetrics {
    pub width: f64,
    pub height: f64,
    /// Physical-to-logical pixel ratio, `None` when the host does not report one.
    pub density_ratio: Option<f64>,
}

impl ViewportMetrics {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            density_ratio: None,
        }
    }

    pub fn with_density_ratio(mut self, ratio: f64) -> Self {
        self.density_ratio = Some(ratio);
        self
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Reported density ratio, or [`DEFAULT_DENSITY_RATIO`] when missing, zero or not finite.
    pub fn density_or_default(&self) -> f64 {
        match self.density_ratio {
            Some(r) if r.is_finite() && r > 0.0 => r,
            _ => DEFAULT_DENSITY_RATIO,
        }
    }
}

/// Size of the game surface. Fixed once a session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SurfaceGeometry {
    pub width: u32,
    pub height: u32,
}

impl SurfaceGeometry {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Width including the border on both sides.
    pub fn outer_width(&self) -> f64 {
        (self.width + BORDER_THICKNESS * 2) as f64
    }

    /// Height including the border on both sides.
    pub fn outer_height(&self) -> f64 {
        (self.height + BORDER_THICKNESS * 2) as f64
    }
}

/// The three independent display flags.
///
/// `fullscreen_active` mirrors host state; it is only ever read from the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DisplayMode {
    pub scaling_enabled: bool,
    pub high_density_enabled: bool,
    pub fullscreen_active: bool,
}

/// What kind of event triggered a geometry recompute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Recompute {
    /// A deliberate mode toggle: every scale branch is re-evaluated.
    Full,
    /// A plain viewport resize: only viewport-proportional scaling reacts.
    ResizeOnly,
}

/// Scale applied to the surface container.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Scale {
    /// No transform at all.
    #[default]
    Identity,
    /// Uniform scale on both axes. Always finite and strictly positive.
    Uniform(f64),
}

impl Scale {
    /// Uniform scale, collapsing non-finite or non-positive factors to [`Scale::Identity`].
    pub fn uniform(factor: f64) -> Self {
        if factor.is_finite() && factor > 0.0 {
            Scale::Uniform(factor)
        } else {
            Scale::Identity
        }
    }

    pub fn factor(&self) -> f64 {
        match self {
            Scale::Identity => 1.0,
            Scale::Uniform(f) => *f,
        }
    }
}

/// Top/left position of the container inside the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub top: f64,
    pub left: f64,
}

impl Offset {
    pub const fn new(top: f64, left: f64) -> Self {
        Self { top, left }
    }
}

/// Full placement of the surface container. Recomputed, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    pub offset: Offset,
    pub scale: Scale,
}

/// Configuration accepted by `start`.
///
/// Deserializes from camelCase JSON. Missing dimensions become `0`, which
/// `start` rejects.
///
/// ```
/// use tetris_shell_types::GameConfig;
///
/// let cfg: GameConfig = serde_json::from_str(r#"{"width":10,"height":20,"colorScheme":"grayscale"}"#).unwrap();
/// assert_eq!(cfg, GameConfig::new(10, 20).with_color_scheme("grayscale"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<String>,
}

impl GameConfig {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            color_scheme: None,
        }
    }

    pub fn with_color_scheme(mut self, name: impl Into<String>) -> Self {
        self.color_scheme = Some(name.into());
        self
    }

    pub fn geometry(&self) -> SurfaceGeometry {
        SurfaceGeometry::new(self.width, self.height)
    }
}
