//! Terminal setup that undoes itself.

use crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;
use tracing::{debug, warn};

/// Runs a cleanup closure when dropped, including during a panic unwind.
pub struct RestoreGuard<F: FnOnce()> {
    restore: Option<F>,
}

impl<F: FnOnce()> RestoreGuard<F> {
    /// Arms the guard with `restore`.
    pub fn new(restore: F) -> Self {
        Self {
            restore: Some(restore),
        }
    }
}

impl<F: FnOnce()> Drop for RestoreGuard<F> {
    fn drop(&mut self) {
        if let Some(restore) = self.restore.take() {
            restore();
        }
    }
}

/// Enters raw mode on the alternate screen.
///
/// The returned guard leaves both when dropped.
pub fn enter() -> io::Result<RestoreGuard<impl FnOnce()>> {
    enable_raw_mode()?;
    let guard = RestoreGuard::new(restore);
    execute!(io::stdout(), EnterAlternateScreen)?;
    debug!("Terminal in raw mode");
    Ok(guard)
}

fn restore() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to leave raw mode");
    }
    if let Err(e) = execute!(io::stdout(), LeaveAlternateScreen, Show) {
        warn!(error = %e, "Failed to leave alternate screen");
    }
    debug!("Terminal restored");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::panic::{AssertUnwindSafe, catch_unwind};

    #[test]
    fn test_guard_restores_on_normal_drop() {
        let restored = Cell::new(false);
        {
            let _guard = RestoreGuard::new(|| restored.set(true));
            assert!(!restored.get());
        }
        assert!(restored.get());
    }

    #[test]
    fn test_guard_restores_when_loop_panics() {
        let restored = Cell::new(false);
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _guard = RestoreGuard::new(|| restored.set(true));
            panic!("event loop failed");
        }));
        assert!(result.is_err());
        assert!(restored.get());
    }
}
