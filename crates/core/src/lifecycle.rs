//! Lifecycle states of the game surface.
//!
//! Visibility and session progress are tracked separately; the public
//! [`LifecycleState`] is derived from both, so hiding and re-showing the
//! surface returns to wherever the session was.

/// Observable lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleState {
    Hidden,
    ShownIdle,
    Running,
    Paused,
    Quit,
}

impl LifecycleState {
    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleState::Hidden => "hidden",
            LifecycleState::ShownIdle => "shown-idle",
            LifecycleState::Running => "running",
            LifecycleState::Paused => "paused",
            LifecycleState::Quit => "quit",
        }
    }
}

/// Progress of the (at most one) game session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SessionState {
    /// No engine has been created yet.
    #[default]
    Idle,
    Running,
    Paused,
    Quit,
}

impl SessionState {
    /// Combine with container visibility.
    pub fn observed(self, visible: bool) -> LifecycleState {
        if !visible {
            return LifecycleState::Hidden;
        }
        match self {
            SessionState::Idle => LifecycleState::ShownIdle,
            SessionState::Running => LifecycleState::Running,
            SessionState::Paused => LifecycleState::Paused,
            SessionState::Quit => LifecycleState::Quit,
        }
    }
}

/// Events published on the manager's event bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LifecycleEvent {
    Show,
    Hide,
    Start,
    Pause,
    Resume,
    Quit,
}

impl LifecycleEvent {
    pub const ALL: [LifecycleEvent; 6] = [
        LifecycleEvent::Show,
        LifecycleEvent::Hide,
        LifecycleEvent::Start,
        LifecycleEvent::Pause,
        LifecycleEvent::Resume,
        LifecycleEvent::Quit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LifecycleEvent::Show => "show",
            LifecycleEvent::Hide => "hide",
            LifecycleEvent::Start => "start",
            LifecycleEvent::Pause => "pause",
            LifecycleEvent::Resume => "resume",
            LifecycleEvent::Quit => "quit",
        }
    }
}
