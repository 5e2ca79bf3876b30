//! Logger setup for the binary
//!
//! `-v` count picks the level (0 warn, 1 info, 2 debug, 3+ trace); `RUST_LOG`
//! overrides it. While the interactive tree owns the terminal, console output
//! is suppressed so log lines do not tear the raw-mode screen.

use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};

use log::LevelFilter;

static TUI_MODE: AtomicBool = AtomicBool::new(false);

pub fn level_for(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init_logger(verbose: u8) {
    let result = env_logger::Builder::new()
        .filter_level(level_for(verbose))
        .parse_default_env()
        .format(|buf, record| {
            if TUI_MODE.load(Ordering::Relaxed) {
                return Ok(());
            }
            writeln!(
                buf,
                "{:>5} {}: {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .try_init();

    if result.is_ok() {
        log::debug!("logger initialized at {}", level_for(verbose));
    }
}

/// Silence console logging while the interactive view is on screen
pub fn set_tui_mode(enabled: bool) {
    TUI_MODE.store(enabled, Ordering::Relaxed);
}
