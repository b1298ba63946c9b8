//! Console output for a run.
//!
//! Every line goes through [`emit`], which honours the quiet/verbose switches and,
//! while a directory's progress bar is attached, clears the bar for the duration
//! of the write so lines never interleave with it.

use crate::constants::{ERROR_PREFIX, SUCCESS_PREFIX, VERBOSE_PREFIX, WARNING_PREFIX};
use indicatif::{ProgressBar, ProgressDrawTarget};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

static QUIET_MODE: AtomicBool = AtomicBool::new(false);
static VERBOSE_MODE: AtomicBool = AtomicBool::new(false);
static ACTIVE_PROGRESS: Mutex<Option<ProgressBar>> = Mutex::new(None);

pub fn set_quiet_mode(quiet: bool) {
    QUIET_MODE.store(quiet, Ordering::Relaxed);
}

pub fn set_verbose_mode(verbose: bool) {
    VERBOSE_MODE.store(verbose, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET_MODE.load(Ordering::Relaxed)
}

pub fn is_verbose() -> bool {
    VERBOSE_MODE.load(Ordering::Relaxed)
}

/// How a console line is routed and marked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Verbose,
    Warning,
    Failure,
}

impl Level {
    pub fn prefix(&self) -> Option<&'static str> {
        match self {
            Level::Info => None,
            Level::Success => Some(SUCCESS_PREFIX),
            Level::Verbose => Some(VERBOSE_PREFIX),
            Level::Warning => Some(WARNING_PREFIX),
            Level::Failure => Some(ERROR_PREFIX),
        }
    }

    /// Failures are printed even in quiet mode; verbose lines only on request.
    pub fn is_enabled(&self) -> bool {
        match self {
            Level::Failure => true,
            Level::Verbose => is_verbose() && !is_quiet(),
            _ => !is_quiet(),
        }
    }

    pub fn uses_stderr(&self) -> bool {
        matches!(self, Level::Warning | Level::Failure)
    }

    /// `message` with the level's marker, e.g. `✅ photo.png: ...`
    pub fn decorate(&self, message: &str) -> String {
        match self.prefix() {
            // The warning emoji renders narrow in most terminals
            Some(prefix) if *self == Level::Warning => format!("{}  {}", prefix, message),
            Some(prefix) => format!("{} {}", prefix, message),
            None => message.to_string(),
        }
    }
}

/// Routes subsequent lines around `progress` until [`detach_progress`].
///
/// In quiet mode the bar is hidden outright.
pub fn attach_progress(progress: &ProgressBar) {
    if is_quiet() {
        progress.set_draw_target(ProgressDrawTarget::hidden());
    }
    if let Ok(mut active) = ACTIVE_PROGRESS.lock() {
        *active = Some(progress.clone());
    }
}

pub fn detach_progress() {
    if let Ok(mut active) = ACTIVE_PROGRESS.lock() {
        *active = None;
    }
}

pub fn emit(level: Level, message: &str) {
    if !level.is_enabled() {
        return;
    }

    let line = level.decorate(message);
    let write = || {
        if level.uses_stderr() {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    };

    // Released before writing; `suspend` may block on the bar's own state
    let progress = ACTIVE_PROGRESS.lock().ok().and_then(|active| active.clone());
    match progress {
        Some(progress) => progress.suspend(write),
        None => write(),
    }
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Level::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Level::Success, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Level::Verbose, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Level::Warning, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::logger::emit($crate::logger::Level::Failure, &format!($($arg)*))
    };
}
