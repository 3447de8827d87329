//! Terminal host for the display shell (default binary).
//!
//! Usage: `tetris-shell [game-config.json]`. Without a config file the
//! surface size and scheme come from `TETRIS_SHELL_*` environment variables.
//!
//! Keys: `s` scaling, `h` high resolution, `f` fullscreen, `p` pause/resume,
//! `v` show/hide, `q` quit.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing_subscriber::EnvFilter;

use tetris_shell::core::{
    DisplayManager, EventEmitter, LifecycleEvent, LifecycleState, SessionState, ShellConfig,
};
use tetris_shell::term::{
    map_key, AltScreen, FrameBuffer, PreviewEngine, ShellCommand, TermContainer, TermViewport,
    TerminalRenderer,
};
use tetris_shell::types::GameConfig;

fn main() -> Result<()> {
    let config = ShellConfig::from_env();
    init_logging(&config)?;

    let game_config = match std::env::args().nth(1) {
        Some(path) => load_game_config(&path)?,
        None => config.game_config(),
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &game_config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn init_logging(config: &ShellConfig) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("creating log file {path}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

fn load_game_config(path: &str) -> Result<GameConfig> {
    let text = std::fs::read_to_string(path).with_context(|| format!("reading {path}"))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {path}"))
}

fn run(term: &mut TerminalRenderer, config: &ShellConfig, game_config: &GameConfig) -> Result<()> {
    let mut manager = DisplayManager::new(
        TermViewport::new(config.density_ratio),
        TermContainer::new(),
        AltScreen::new(),
        PreviewEngine::new,
        EventEmitter::new(),
    );
    for event in LifecycleEvent::ALL {
        manager.on(
            event,
            Box::new(move |payload: &serde_json::Value| {
                tracing::debug!(event = event.as_str(), %payload, "lifecycle event");
            }),
        );
    }

    manager.set_scaling(config.scaling);
    manager.set_high_resolution(config.high_resolution);
    manager.show();
    manager.start(game_config)?;

    let mut fb = FrameBuffer::new(0, 0);
    loop {
        let (w, h) = manager.viewport().size();
        fb.resize(w, h);
        manager.container().compose_into(&mut fb);
        term.present(&fb)?;

        match event::read()? {
            Event::Resize(_, _) => {
                manager.on_viewport_resized();
                term.invalidate();
            }
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(command) = map_key(key) else {
                    continue;
                };
                match command {
                    ShellCommand::ToggleScaling => manager.set_scaling(!manager.scaling()),
                    ShellCommand::ToggleHighResolution => {
                        manager.set_high_resolution(!manager.high_resolution())
                    }
                    ShellCommand::ToggleFullscreen => {
                        manager.toggle_fullscreen();
                        term.invalidate();
                    }
                    ShellCommand::TogglePause => match manager.session() {
                        SessionState::Paused => manager.resume(),
                        _ => manager.pause(),
                    },
                    ShellCommand::ToggleVisibility => match manager.lifecycle() {
                        LifecycleState::Hidden => manager.show(),
                        _ => manager.hide(),
                    },
                    ShellCommand::Quit => {
                        manager.quit();
                        return Ok(());
                    }
                }
            }
            _ => {}
        }
    }
}
