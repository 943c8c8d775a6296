//! shopdesk-app - Application state and orchestration for shopdesk
//!
//! This crate implements the TEA (The Elm Architecture) pattern for state
//! management: the model ([`AppState`]), messages, the `update()` handlers,
//! and the background actions that call the remote API. It also owns the
//! session context with its key-value token store, and configuration loading.

pub mod account;
pub mod actions;
pub mod config;
pub mod handler;
pub mod input_key;
pub mod login;
pub mod message;
pub mod process;
pub mod request;
pub mod session;
pub mod signals;
pub mod state;
pub mod store;
pub mod user_list;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use request::{RequestId, RequestSeq};
pub use session::SessionContext;
pub use state::{AppPhase, AppState, Focus};
