//! Color schemes for the game surface.
//!
//! A scheme maps 15 semantic roles to colors: one background, one fill per
//! tetromino and one shadow (ghost projection) per tetromino. Two schemes are
//! built in; [`resolve`] never fails and falls back to `standard`.
//!
//! ```
//! use tetris_shell_colors::{resolve, ColorRole};
//! use tetris_shell_types::PieceKind;
//!
//! let scheme = resolve("grayscale");
//! assert_eq!(scheme.fill(PieceKind::I), scheme.fill(PieceKind::T));
//! assert_eq!(scheme.role(ColorRole::Fill(PieceKind::I)), scheme.fill(PieceKind::I));
//!
//! // Unknown names resolve to the standard scheme.
//! assert_eq!(resolve("nonexistent"), resolve("standard"));
//! ```

pub use tetris_shell_types as types;

use crate::types::{PieceKind, Rgba};

/// Number of roles in every scheme.
pub const ROLE_COUNT: usize = 15;

/// Semantic color roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    Background,
    Fill(PieceKind),
    Shadow(PieceKind),
}

impl ColorRole {
    /// Camel-case role key, e.g. `blockI` or `shadowT`.
    pub fn key(&self) -> &'static str {
        match self {
            ColorRole::Background => "background",
            ColorRole::Fill(kind) => FILL_KEYS[kind.index()],
            ColorRole::Shadow(kind) => SHADOW_KEYS[kind.index()],
        }
    }
}

const FILL_KEYS: [&str; 7] = ["blockI", "blockO", "blockS", "blockZ", "blockJ", "blockL", "blockT"];
const SHADOW_KEYS: [&str; 7] = [
    "shadowI", "shadowO", "shadowS", "shadowZ", "shadowJ", "shadowL", "shadowT",
];

/// Names of the built-in schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SchemeName {
    #[default]
    Standard,
    Grayscale,
}

impl SchemeName {
    /// Parse a scheme name (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "standard" => Some(SchemeName::Standard),
            "grayscale" => Some(SchemeName::Grayscale),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SchemeName::Standard => "standard",
            SchemeName::Grayscale => "grayscale",
        }
    }

    pub fn scheme(&self) -> &'static ColorScheme {
        match self {
            SchemeName::Standard => &STANDARD,
            SchemeName::Grayscale => &GRAYSCALE,
        }
    }
}

/// Immutable role -> color mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorScheme {
    name: SchemeName,
    background: Rgba,
    fills: [Rgba; 7],
    shadows: [Rgba; 7],
}

impl ColorScheme {
    pub fn name(&self) -> SchemeName {
        self.name
    }

    pub fn background(&self) -> Rgba {
        self.background
    }

    pub fn fill(&self, kind: PieceKind) -> Rgba {
        self.fills[kind.index()]
    }

    pub fn shadow(&self, kind: PieceKind) -> Rgba {
        self.shadows[kind.index()]
    }

    pub fn role(&self, role: ColorRole) -> Rgba {
        match role {
            ColorRole::Background => self.background,
            ColorRole::Fill(kind) => self.fill(kind),
            ColorRole::Shadow(kind) => self.shadow(kind),
        }
    }

    /// All `(role, color)` pairs: background, then fills, then shadows.
    pub fn roles(&self) -> impl Iterator<Item = (ColorRole, Rgba)> + '_ {
        std::iter::once(ColorRole::Background)
            .chain(PieceKind::ALL.into_iter().map(ColorRole::Fill))
            .chain(PieceKind::ALL.into_iter().map(ColorRole::Shadow))
            .map(move |role| (role, self.role(role)))
    }
}

const fn argb_table(values: [u32; 7]) -> [Rgba; 7] {
    let mut out = [Rgba::new(0, 0, 0, 0); 7];
    let mut i = 0;
    while i < 7 {
        out[i] = Rgba::from_argb(values[i]);
        i += 1;
    }
    out
}

// Table order: I, O, S, Z, J, L, T.
static STANDARD: ColorScheme = ColorScheme {
    name: SchemeName::Standard,
    background: Rgba::from_argb(0xFF000000),
    fills: argb_table([
        0xFF00FFFF, 0xFFFFFF00, 0xFF00FF00, 0xFFFF8080, 0xFF8080FF, 0xFFFF8000, 0xFFFF00FF,
    ]),
    shadows: argb_table([
        0x8000FFFF, 0x80FFFF00, 0x8000FF00, 0x80FF8080, 0x808080FF, 0x80FF8000, 0x80FF00FF,
    ]),
};

static GRAYSCALE: ColorScheme = ColorScheme {
    name: SchemeName::Grayscale,
    background: Rgba::from_argb(0xFF404040),
    fills: [Rgba::from_argb(0xFFC0C0C0); 7],
    shadows: [Rgba::from_argb(0xFF808080); 7],
};

/// Resolve a scheme by name. Unknown names yield the `standard` scheme.
pub fn resolve(name: &str) -> &'static ColorScheme {
    SchemeName::from_str(name).unwrap_or_default().scheme()
}

/// Like [`resolve`], treating a missing name as `standard`.
pub fn resolve_opt(name: Option<&str>) -> &'static ColorScheme {
    name.map(resolve).unwrap_or(&STANDARD)
}
