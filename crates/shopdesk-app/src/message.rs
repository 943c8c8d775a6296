//! Message types for the application (TEA pattern)

use shopdesk_api::LoginResponse;
use shopdesk_core::{FilterField, LoadStage, ProfileField, Route, UserId, UserListItem, UserProfile};

use crate::input_key::InputKey;
use crate::login::LoginField;
use crate::request::RequestId;
use crate::user_list::ListFailure;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (Ctrl+C, signal handler)
    Quit,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    /// Go to a route, subject to the session guard
    Navigate(Route),
    /// Clear the session and return to login
    Logout,
    /// Move keyboard focus to the side panel
    FocusNav,
    /// Move keyboard focus to the main content
    FocusContent,
    NavSelectNext,
    NavSelectPrev,
    /// Open the highlighted side panel entry
    NavOpenSelected,

    // ─────────────────────────────────────────────────────────
    // Login
    // ─────────────────────────────────────────────────────────
    LoginInput { field: LoginField, value: String },
    LoginFocusNext,
    LoginFocusPrev,
    /// Enter on the login screen; acts on whatever has focus
    LoginActivate,
    LoginSubmit,
    LoginSucceeded(LoginResponse),
    LoginFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Account
    // ─────────────────────────────────────────────────────────
    /// Mount (or remount) the account editor
    LoadAccount,
    /// Re-fetch the profile by the stored user id (after a save)
    ReloadProfile,
    IdentityResolved { request: RequestId, user_id: UserId },
    ProfileLoaded { request: RequestId, profile: UserProfile },
    AccountLoadFailed {
        request: RequestId,
        stage: LoadStage,
        error: String,
    },
    AccountInput { field: ProfileField, value: String },
    AccountFocusNext,
    AccountFocusPrev,
    SaveAccount,
    AccountSaved { request: RequestId },
    AccountSaveFailed { request: RequestId, error: String },
    /// Timer for the banner with this id fired
    BannerExpired { banner_id: u64 },

    // ─────────────────────────────────────────────────────────
    // User List
    // ─────────────────────────────────────────────────────────
    LoadUsers,
    UsersLoaded {
        request: RequestId,
        users: Vec<UserListItem>,
    },
    UsersLoadFailed {
        request: RequestId,
        failure: ListFailure,
        error: String,
    },
    FilterInput { field: FilterField, value: String },
    FilterFocusNext,
    FilterFocusPrev,
    UserSelectNext,
    UserSelectPrev,
    UserSelectFirst,
    UserSelectLast,
}
