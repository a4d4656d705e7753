use std::{
    io::{Stdout, Write},
    sync::Once,
};

use crossterm::{
    cursor, queue,
    terminal::{self, ClearType},
};

static PANIC_HOOK: Once = Once::new();

/// Raw mode plus the alternate screen for as long as the session lives.
///
/// The terminal is restored when the session is dropped, on error returns as well as
/// on normal exit, and by a panic hook if any thread panics first.
pub struct TerminalSession {
    stdout: Stdout,
}

impl TerminalSession {
    pub fn enter() -> std::io::Result<Self> {
        PANIC_HOOK.call_once(|| {
            let hook = std::panic::take_hook();
            std::panic::set_hook(Box::new(move |panic_info| {
                // Already failing, a restore error would only hide the panic message
                let _ = restore(&mut std::io::stdout());
                hook(panic_info);
            }));
        });

        let mut stdout = std::io::stdout();
        terminal::enable_raw_mode()?;
        queue!(
            stdout,
            terminal::EnterAlternateScreen,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(0, 0)
        )?;
        stdout.flush()?;
        tracing::debug!("[terminal] entered raw mode");
        Ok(Self { stdout })
    }

    pub fn stdout(&mut self) -> &mut Stdout {
        &mut self.stdout
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(err) = restore(&mut self.stdout) {
            tracing::warn!("[terminal] failed to restore terminal: {}", err);
        }
    }
}

/// Leaves the alternate screen and raw mode.
fn restore(stdout: &mut Stdout) -> std::io::Result<()> {
    queue!(stdout, terminal::LeaveAlternateScreen, cursor::Show)?;
    stdout.flush()?;
    terminal::disable_raw_mode()
}
