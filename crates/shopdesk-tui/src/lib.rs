//! shopdesk-tui - Terminal UI for shopdesk
//!
//! Adds ratatui rendering, crossterm event polling and widgets on top of the
//! TEA core in shopdesk-app, and runs the event loop.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

pub use runner::run;
