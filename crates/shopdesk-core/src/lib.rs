//! # shopdesk-core - Core Domain Types
//!
//! Foundation crate for shopdesk. Provides domain types, error handling,
//! form validation, list filtering and navigation routes.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, regex, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`UserProfile`] / [`ProfileField`] - Editable account profile and its form fields
//! - [`UserListItem`] - Read-only row of the admin user list
//! - [`FilterCriteria`] / [`FilterField`] - User list filter inputs
//! - [`SessionToken`], [`UserId`], [`Credentials`] - Session identity values
//! - [`LoadStage`] - Stages of the account load pipeline
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//!
//! ### Validation (`validation`)
//! - [`validate_email()`] / [`validate_login()`] - Login form preconditions
//!
//! ### Filtering (`filter`)
//! - [`filter_users()`] - Pure derivation of the displayed user list
//! - [`format_date()`] - `DD-MM-YYYY` display formatting
//!
//! ### Routes (`route`)
//! - [`Route`] - Named destinations
//! - [`NAV_DESTINATIONS`] - The fixed side panel entries
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use shopdesk_core::prelude::*;
//! ```

pub mod error;
pub mod filter;
pub mod logging;
pub mod prelude;
pub mod route;
pub mod types;
pub mod validation;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result};
pub use filter::{filter_users, format_date};
pub use route::{Route, NAV_DESTINATIONS};
pub use types::{
    id_from_value, Credentials, FilterCriteria, FilterField, LoadStage, ProfileField,
    RecordId, SessionToken, UserId, UserListItem, UserProfile,
};
pub use validation::{validate_email, validate_login};
