//! Terminal setup and restoration

use ratatui::DefaultTerminal;
use shopdesk_core::prelude::*;

/// Enter raw mode and the alternate screen, restoring the terminal on panic.
pub fn init() -> Result<DefaultTerminal> {
    install_panic_hook();
    ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))
}

/// Leave raw mode. Failures are logged since the process is exiting anyway.
pub fn restore() {
    if let Err(e) = ratatui::try_restore() {
        error!("{}", Error::TerminalRestore(e.to_string()));
    }
}

fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));
}
