//! Account editor state (the signed-in user's profile)
//!
//! Lifecycle:
//!
//! ```text
//! Idle ──mount, no token──▶ Unauthenticated
//!   │
//!   └─mount──▶ Loading(IdentityCheck) ──▶ Loading(ProfileFetch) ──▶ Loaded
//!                      │                          │                  │ save
//!                      └──────────┬───────────────┘                  ▼
//!                                 ▼                               Saving
//!                               Error ◀──────────failure───────────┘ │
//!                                                                    success
//!                                                                    ▼
//!                                             Loaded, then Loading(ProfileFetch)
//! ```
//!
//! Load and save share one request sequence: starting either makes any
//! outstanding result stale.

use shopdesk_core::{LoadStage, ProfileField, UserProfile};

use crate::request::{RequestId, RequestSeq};

pub const MSG_FETCH_USER_ID_FAILED: &str = "Failed to fetch user ID.";
pub const MSG_PROFILE_LOAD_FAILED: &str = "Could not load user information.";
pub const MSG_UPDATE_SUCCESS: &str = "Your information has been updated successfully!";
pub const MSG_UPDATE_FAILED: &str = "Something went wrong. Please try again!";

/// Number of focus stops: every profile field plus the save button.
pub const FOCUS_STOPS: usize = ProfileField::ALL.len() + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AccountPhase {
    /// Not mounted yet
    #[default]
    Idle,
    /// Mounted without a token; the app has redirected to login
    Unauthenticated,
    Loading(LoadStage),
    Loaded,
    Saving,
    /// Last load or save failed. The form stays editable.
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Failure,
}

/// Transient message shown after a save, cleared by its own timer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub id: u64,
    pub kind: BannerKind,
    pub text: &'static str,
}

#[derive(Debug, Default)]
pub struct AccountState {
    pub phase: AccountPhase,
    pub form: UserProfile,
    /// Persistent load failure message
    pub fetch_error: Option<String>,
    pub banner: Option<Banner>,
    /// Focus stop index, see [`FOCUS_STOPS`]
    pub focus: usize,
    seq: RequestSeq,
    last_banner_id: u64,
}

impl AccountState {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────
    // Loading
    // ─────────────────────────────────────────────────────────

    /// Enter the identity check stage and issue its request id.
    pub fn begin_load(&mut self) -> RequestId {
        self.phase = AccountPhase::Loading(LoadStage::IdentityCheck);
        self.fetch_error = None;
        self.seq.next_id()
    }

    /// Enter the profile fetch stage directly, keeping the form and banner.
    pub fn begin_reload(&mut self) -> RequestId {
        self.phase = AccountPhase::Loading(LoadStage::ProfileFetch);
        self.fetch_error = None;
        self.seq.next_id()
    }

    /// Mounted without a token. Terminal until the next mount.
    pub fn mark_unauthenticated(&mut self) {
        self.seq.invalidate();
        self.phase = AccountPhase::Unauthenticated;
        self.form = UserProfile::default();
        self.fetch_error = None;
        self.banner = None;
    }

    pub fn is_current(&self, request: RequestId) -> bool {
        self.seq.is_current(request)
    }

    pub fn identity_resolved(&mut self) {
        self.phase = AccountPhase::Loading(LoadStage::ProfileFetch);
    }

    pub fn profile_loaded(&mut self, profile: UserProfile) {
        self.form = profile;
        self.phase = AccountPhase::Loaded;
    }

    pub fn load_failed(&mut self, stage: LoadStage) {
        self.phase = AccountPhase::Error;
        self.fetch_error = Some(
            match stage {
                LoadStage::IdentityCheck => MSG_FETCH_USER_ID_FAILED,
                LoadStage::ProfileFetch => MSG_PROFILE_LOAD_FAILED,
            }
            .to_string(),
        );
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, AccountPhase::Loading(_))
    }

    // ─────────────────────────────────────────────────────────
    // Editing
    // ─────────────────────────────────────────────────────────

    /// Merge one field into the form. Read-only fields are refused.
    pub fn update_field(&mut self, field: ProfileField, value: String) -> bool {
        if field.is_read_only() {
            return false;
        }
        self.form.set(field, value);
        true
    }

    /// The field under the cursor; `None` when the save button is focused.
    pub fn focused_field(&self) -> Option<ProfileField> {
        ProfileField::ALL.get(self.focus).copied()
    }

    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % FOCUS_STOPS;
    }

    pub fn focus_prev(&mut self) {
        self.focus = (self.focus + FOCUS_STOPS - 1) % FOCUS_STOPS;
    }

    // ─────────────────────────────────────────────────────────
    // Saving
    // ─────────────────────────────────────────────────────────

    /// A profile has been loaded at least once and nothing is in flight.
    pub fn can_submit(&self) -> bool {
        matches!(self.phase, AccountPhase::Loaded | AccountPhase::Error) && !self.form.id.is_empty()
    }

    /// Snapshot the form for `PUT /users/{id}` and enter `Saving`.
    pub fn begin_save(&mut self) -> Option<(RequestId, UserProfile)> {
        if !self.can_submit() {
            return None;
        }
        self.phase = AccountPhase::Saving;
        Some((self.seq.next_id(), self.form.clone()))
    }

    /// Returns the id of the banner that was raised.
    pub fn save_succeeded(&mut self) -> u64 {
        self.phase = AccountPhase::Loaded;
        self.raise_banner(BannerKind::Success, MSG_UPDATE_SUCCESS)
    }

    /// Returns the id of the banner that was raised.
    pub fn save_failed(&mut self) -> u64 {
        self.phase = AccountPhase::Error;
        self.raise_banner(BannerKind::Failure, MSG_UPDATE_FAILED)
    }

    fn raise_banner(&mut self, kind: BannerKind, text: &'static str) -> u64 {
        self.last_banner_id += 1;
        self.banner = Some(Banner {
            id: self.last_banner_id,
            kind,
            text,
        });
        self.last_banner_id
    }

    /// Clear the banner only if it is still the one `banner_id` refers to.
    pub fn clear_banner(&mut self, banner_id: u64) -> bool {
        match &self.banner {
            Some(banner) if banner.id == banner_id => {
                self.banner = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> AccountState {
        let mut state = AccountState::new();
        state.begin_load();
        state.identity_resolved();
        state.profile_loaded(UserProfile {
            id: "u-1".into(),
            email: "an@example.com".to_string(),
            ..Default::default()
        });
        state
    }

    #[test]
    fn test_load_pipeline_phases() {
        let mut state = AccountState::new();
        let id = state.begin_load();
        assert_eq!(
            state.phase,
            AccountPhase::Loading(LoadStage::IdentityCheck)
        );
        assert!(state.is_current(id));

        state.identity_resolved();
        assert_eq!(state.phase, AccountPhase::Loading(LoadStage::ProfileFetch));
    }

    #[test]
    fn test_load_failure_message_per_stage() {
        let mut state = AccountState::new();
        state.begin_load();
        state.load_failed(LoadStage::IdentityCheck);
        assert_eq!(state.fetch_error.as_deref(), Some(MSG_FETCH_USER_ID_FAILED));

        state.begin_load();
        assert!(state.fetch_error.is_none());
        state.load_failed(LoadStage::ProfileFetch);
        assert_eq!(state.fetch_error.as_deref(), Some(MSG_PROFILE_LOAD_FAILED));
        assert_eq!(state.phase, AccountPhase::Error);
    }

    #[test]
    fn test_new_load_makes_previous_request_stale() {
        let mut state = AccountState::new();
        let first = state.begin_load();
        let second = state.begin_load();
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }

    #[test]
    fn test_email_is_read_only() {
        let mut state = loaded();
        assert!(!state.update_field(ProfileField::Email, "x@y.z".to_string()));
        assert_eq!(state.form.email, "an@example.com");

        assert!(state.update_field(ProfileField::City, "Hue".to_string()));
        assert_eq!(state.form.city, "Hue");
    }

    #[test]
    fn test_cannot_save_before_profile_loaded() {
        let mut state = AccountState::new();
        state.begin_load();
        assert!(state.begin_save().is_none());

        state.load_failed(LoadStage::IdentityCheck);
        assert!(state.begin_save().is_none());
    }

    #[test]
    fn test_save_round_trip_raises_banner() {
        let mut state = loaded();
        let (request, profile) = state.begin_save().unwrap();
        assert_eq!(profile.id, "u-1");
        assert_eq!(state.phase, AccountPhase::Saving);
        assert!(state.is_current(request));
        assert!(state.begin_save().is_none());

        let banner_id = state.save_succeeded();
        assert_eq!(state.banner.as_ref().unwrap().text, MSG_UPDATE_SUCCESS);
        assert!(state.clear_banner(banner_id));
        assert!(state.banner.is_none());
    }

    #[test]
    fn test_failed_save_keeps_form_editable() {
        let mut state = loaded();
        state.begin_save();
        state.save_failed();
        assert_eq!(state.phase, AccountPhase::Error);
        assert_eq!(state.banner.as_ref().unwrap().kind, BannerKind::Failure);
        assert!(state.update_field(ProfileField::City, "Hue".to_string()));
        assert!(state.begin_save().is_some());
    }

    #[test]
    fn test_old_timer_does_not_clear_newer_banner() {
        let mut state = loaded();
        state.begin_save();
        let first = state.save_failed();
        state.begin_save();
        let second = state.save_succeeded();

        assert!(!state.clear_banner(first));
        assert_eq!(state.banner.as_ref().unwrap().id, second);
    }

    #[test]
    fn test_unauthenticated_discards_form() {
        let mut state = loaded();
        let id = state.begin_load();
        state.mark_unauthenticated();
        assert!(!state.is_current(id));
        assert_eq!(state.phase, AccountPhase::Unauthenticated);
        assert!(state.form.id.is_empty());
    }

    #[test]
    fn test_focus_wraps_through_save_button() {
        let mut state = AccountState::new();
        state.focus_prev();
        assert_eq!(state.focus, FOCUS_STOPS - 1);
        assert_eq!(state.focused_field(), None);
        state.focus_next();
        assert_eq!(state.focused_field(), Some(ProfileField::FirstName));
    }
}
