//! Capability-probed fullscreen controller.
//!
//! Hosts ship fullscreen support under several incompatible API variants. A
//! [`FullscreenHost`] reports, per [`ApiVariant`], which capabilities it has;
//! [`FullscreenController::new`] probes them once in [`PROBE_ORDER`] and binds
//! each operation to the first variant that provides it. After construction
//! the controller never re-probes.
//!
//! Unsupported hosts are a normal state, not an error: every operation becomes
//! a no-op and [`FullscreenController::is_active`] reports `false`. Host
//! failures during request/exit are logged and swallowed.
//!
//! ```
//! use tetris_shell_fullscreen::{ApiVariant, FullscreenController, FullscreenHost, FullscreenOp};
//!
//! struct NoFullscreen;
//!
//! impl FullscreenHost for NoFullscreen {
//!     fn is_enabled(&self, _: ApiVariant) -> bool { false }
//!     fn provides(&self, _: ApiVariant, _: FullscreenOp) -> bool { false }
//!     fn invoke(&mut self, _: ApiVariant, _: FullscreenOp) -> anyhow::Result<()> { Ok(()) }
//!     fn has_fullscreen_element(&self, _: ApiVariant) -> bool { false }
//! }
//!
//! let mut fs = FullscreenController::new(NoFullscreen);
//! fs.toggle();
//! assert!(!fs.is_supported());
//! assert!(!fs.is_active());
//! ```

use anyhow::Result;

/// Host API variants, in probe order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiVariant {
    /// The standardized, unprefixed API.
    Unprefixed,
    Moz,
    Webkit,
}

impl ApiVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVariant::Unprefixed => "unprefixed",
            ApiVariant::Moz => "moz",
            ApiVariant::Webkit => "webkit",
        }
    }
}

/// Order in which variants are probed; the first match wins.
pub const PROBE_ORDER: [ApiVariant; 3] = [ApiVariant::Unprefixed, ApiVariant::Moz, ApiVariant::Webkit];

/// Host entry points that can be bound to a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FullscreenOp {
    /// Enter fullscreen.
    Request,
    /// Leave fullscreen.
    Exit,
    /// Read the current fullscreen element.
    Query,
}

/// Host fullscreen bindings.
///
/// Each method is keyed by variant so the controller can probe capabilities
/// independently: a host may expose the unprefixed flag but only a prefixed
/// request method.
pub trait FullscreenHost {
    /// Capability flag for `variant` (e.g. a `fullscreenEnabled` property).
    fn is_enabled(&self, variant: ApiVariant) -> bool;

    /// Whether `variant` has an entry point for `op`.
    fn provides(&self, variant: ApiVariant, op: FullscreenOp) -> bool;

    /// Invoke `op` (`Request` or `Exit`) through `variant`.
    fn invoke(&mut self, variant: ApiVariant, op: FullscreenOp) -> Result<()>;

    /// Whether the `variant` accessor currently reports a fullscreen element.
    fn has_fullscreen_element(&self, variant: ApiVariant) -> bool;
}

impl<H: FullscreenHost + ?Sized> FullscreenHost for Box<H> {
    fn is_enabled(&self, variant: ApiVariant) -> bool {
        (**self).is_enabled(variant)
    }

    fn provides(&self, variant: ApiVariant, op: FullscreenOp) -> bool {
        (**self).provides(variant, op)
    }

    fn invoke(&mut self, variant: ApiVariant, op: FullscreenOp) -> Result<()> {
        (**self).invoke(variant, op)
    }

    fn has_fullscreen_element(&self, variant: ApiVariant) -> bool {
        (**self).has_fullscreen_element(variant)
    }
}

/// Single fullscreen surface over whichever host variant is present.
#[derive(Debug)]
pub struct FullscreenController<H> {
    host: H,
    supported: bool,
    request_via: Option<ApiVariant>,
    exit_via: Option<ApiVariant>,
    query_via: Option<ApiVariant>,
}

impl<H: FullscreenHost> FullscreenController<H> {
    /// Probe `host` once and bind each operation.
    pub fn new(host: H) -> Self {
        let supported = PROBE_ORDER.iter().any(|v| host.is_enabled(*v));
        let first = |op| PROBE_ORDER.iter().copied().find(|v| host.provides(*v, op));
        let request_via = first(FullscreenOp::Request);
        let exit_via = first(FullscreenOp::Exit);
        let query_via = first(FullscreenOp::Query);

        tracing::debug!(
            supported,
            request = request_via.map(|v| v.as_str()),
            exit = exit_via.map(|v| v.as_str()),
            query = query_via.map(|v| v.as_str()),
            "fullscreen capabilities probed"
        );

        Self {
            host,
            supported,
            request_via,
            exit_via,
            query_via,
        }
    }

    pub fn is_supported(&self) -> bool {
        self.supported
    }

    /// Variant bound to `op`, if any.
    pub fn binding(&self, op: FullscreenOp) -> Option<ApiVariant> {
        match op {
            FullscreenOp::Request => self.request_via,
            FullscreenOp::Exit => self.exit_via,
            FullscreenOp::Query => self.query_via,
        }
    }

    pub fn is_active(&self) -> bool {
        if !self.supported {
            return false;
        }
        self.query_via
            .map(|v| self.host.has_fullscreen_element(v))
            .unwrap_or(false)
    }

    pub fn request(&mut self) {
        self.invoke(FullscreenOp::Request);
    }

    pub fn exit(&mut self) {
        self.invoke(FullscreenOp::Exit);
    }

    pub fn toggle(&mut self) {
        if !self.supported {
            return;
        }
        if self.is_active() {
            self.exit();
        } else {
            self.request();
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    fn invoke(&mut self, op: FullscreenOp) {
        if !self.supported {
            return;
        }
        let Some(variant) = self.binding(op) else {
            return;
        };
        if let Err(err) = self.host.invoke(variant, op) {
            tracing::warn!(?op, variant = variant.as_str(), error = %err, "fullscreen call failed");
        }
    }
}
