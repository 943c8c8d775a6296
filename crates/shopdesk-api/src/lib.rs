//! # shopdesk-api - Remote User API Client
//!
//! Typed access to the storefront's User API: login, identity check,
//! profile read/update and the admin user list.
//!
//! Depends on [`shopdesk_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! - [`UserApi`] / [`LocalUserApi`] - The operations the console performs
//! - [`HttpUserApi`] - reqwest-backed implementation
//! - [`LoginResponse`] - Raw login body plus token extraction
//! - [`parse_auth_check()`] - Read `user.id` from an identity check body

pub mod client;
pub mod dto;
pub mod http;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

pub use client::{LocalUserApi, UserApi};
pub use dto::{parse_auth_check, LoginResponse};
pub use http::HttpUserApi;
