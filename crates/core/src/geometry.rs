//! Pure placement math for the surface container.
//!
//! Nothing here touches a host; the manager feeds in snapshots and applies
//! the results.

use crate::types::{DisplayMode, Offset, Recompute, Scale, SurfaceGeometry, Transform, ViewportMetrics};

/// Top/left that centers the bordered container in the viewport.
///
/// Offsets may be negative when the container is larger than the viewport.
pub fn center(viewport: &ViewportMetrics, surface: &SurfaceGeometry) -> Offset {
    Offset::new(
        (viewport.height - surface.outer_height()) * 0.5,
        (viewport.width - surface.outer_width()) * 0.5,
    )
}

/// Scale to apply, or `None` when the current scale must be left untouched.
///
/// Branches, in priority order:
/// 1. scaling enabled: fit the surface to the viewport (always, on any recompute);
/// 2. full recompute with high density enabled: `1 / density_ratio`;
/// 3. full recompute otherwise: identity.
///
/// A resize-only recompute without scaling leaves the scale as it is.
pub fn compute_scale(
    mode: &DisplayMode,
    viewport: &ViewportMetrics,
    surface: &SurfaceGeometry,
    recompute: Recompute,
) -> Option<Scale> {
    if mode.scaling_enabled {
        let factor = if surface.aspect_ratio() >= viewport.aspect_ratio() {
            viewport.width / surface.width as f64
        } else {
            viewport.height / surface.height as f64
        };
        return Some(Scale::uniform(factor));
    }

    match recompute {
        Recompute::Full if mode.high_density_enabled => {
            Some(Scale::uniform(1.0 / viewport.density_or_default()))
        }
        Recompute::Full => Some(Scale::Identity),
        Recompute::ResizeOnly => None,
    }
}

/// Complete transform: fresh centering plus the scale from [`compute_scale`],
/// falling back to `previous` when the scale is left untouched.
pub fn compute_transform(
    mode: &DisplayMode,
    viewport: &ViewportMetrics,
    surface: &SurfaceGeometry,
    recompute: Recompute,
    previous: Scale,
) -> Transform {
    Transform {
        offset: center(viewport, surface),
        scale: compute_scale(mode, viewport, surface, recompute).unwrap_or(previous),
    }
}
