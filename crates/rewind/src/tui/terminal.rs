//! Terminal mode setup and teardown.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, info, warn};

/// A terminal mode switched on while the game runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalMode {
    /// Unbuffered key input without echo.
    RawMode,
    /// Separate screen buffer.
    AlternateScreen,
    /// Mouse events reported as input.
    MouseCapture,
}

impl TerminalMode {
    /// Modes in the order they are switched on.
    pub const SETUP: [TerminalMode; 3] = [
        TerminalMode::RawMode,
        TerminalMode::AlternateScreen,
        TerminalMode::MouseCapture,
    ];

    fn enable(self) -> io::Result<()> {
        match self {
            TerminalMode::RawMode => enable_raw_mode(),
            TerminalMode::AlternateScreen => execute!(io::stdout(), EnterAlternateScreen),
            TerminalMode::MouseCapture => execute!(io::stdout(), EnableMouseCapture),
        }
    }

    fn disable(self) -> io::Result<()> {
        match self {
            TerminalMode::RawMode => disable_raw_mode(),
            TerminalMode::AlternateScreen => execute!(io::stdout(), LeaveAlternateScreen, Show),
            TerminalMode::MouseCapture => execute!(io::stdout(), DisableMouseCapture),
        }
    }
}

/// Guard for terminal modes. Undoes every mode it switched on when dropped.
#[derive(Debug, Default)]
pub struct TerminalGuard {
    enabled: Vec<TerminalMode>,
}

impl TerminalGuard {
    /// Switches on every mode in [`TerminalMode::SETUP`].
    ///
    /// If one fails, the modes already on are undone before the error returns.
    pub fn enter() -> io::Result<Self> {
        let mut guard = Self::default();
        for mode in TerminalMode::SETUP {
            mode.enable()?;
            debug!(?mode, "Terminal mode on");
            guard.enabled.push(mode);
        }
        Ok(guard)
    }

    /// Modes still on, in the order [`restore`](Self::restore) undoes them.
    pub fn pending(&self) -> Vec<TerminalMode> {
        self.enabled.iter().rev().copied().collect()
    }

    /// Undoes every mode, newest first, and reports the first failure.
    pub fn restore(&mut self) -> io::Result<()> {
        self.restore_with(TerminalMode::disable)
    }

    fn restore_with(
        &mut self,
        mut disable: impl FnMut(TerminalMode) -> io::Result<()>,
    ) -> io::Result<()> {
        let mut first_error = None;
        while let Some(mode) = self.enabled.pop() {
            if let Err(e) = disable(mode) {
                warn!(?mode, error = %e, "Failed to restore terminal mode");
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if !self.enabled.is_empty() {
            info!("Restoring terminal");
            let _ = self.restore();
        }
    }
}

/// Restores the terminal before the previous panic hook prints its message.
pub fn install_panic_hook() {
    let hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        for mode in TerminalMode::SETUP.iter().rev() {
            let _ = mode.disable();
        }
        hook(panic_info);
    }));
}
