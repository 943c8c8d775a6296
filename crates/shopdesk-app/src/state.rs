//! Application state (the Model in TEA)

use shopdesk_core::{Route, NAV_DESTINATIONS};

use crate::account::AccountState;
use crate::config::Settings;
use crate::login::LoginState;
use crate::session::SessionContext;
use crate::user_list::UserListState;

/// Application lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which half of the screen receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Side navigation panel
    #[default]
    Nav,
    /// The current route's view
    Content,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    /// Current screen
    pub route: Route,

    /// Keyboard focus on routes that show the side panel
    pub focus: Focus,

    /// Highlighted entry in [`NAV_DESTINATIONS`]
    pub nav_selected: usize,

    pub login: LoginState,
    pub account: AccountState,
    pub users: UserListState,

    /// Signed-in identity; the only owner of the token store
    pub session: SessionContext,

    /// Application settings from config file
    pub settings: Settings,

    pub phase: AppPhase,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Default settings and an in-memory session
    pub fn new() -> Self {
        Self::with_session(Settings::default(), SessionContext::in_memory())
    }

    /// Start on Home when a token survived from a previous run, else Login.
    pub fn with_session(settings: Settings, session: SessionContext) -> Self {
        let route = if session.is_signed_in() {
            Route::Home
        } else {
            Route::Login
        };

        Self {
            route,
            focus: Focus::Nav,
            nav_selected: 0,
            login: LoginState::new(),
            account: AccountState::new(),
            users: UserListState::new(),
            session,
            settings,
            phase: AppPhase::Running,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn shows_nav(&self) -> bool {
        self.route.has_nav_panel()
    }

    pub fn nav_destination(&self) -> Route {
        NAV_DESTINATIONS[self.nav_selected % NAV_DESTINATIONS.len()]
    }

    pub fn nav_select_next(&mut self) {
        self.nav_selected = (self.nav_selected + 1) % NAV_DESTINATIONS.len();
    }

    pub fn nav_select_prev(&mut self) {
        self.nav_selected =
            (self.nav_selected + NAV_DESTINATIONS.len() - 1) % NAV_DESTINATIONS.len();
    }

    /// Forget every per-user view so the next user starts clean.
    pub fn reset_views(&mut self) {
        self.login.reset();
        self.account = AccountState::new();
        self.users = UserListState::new();
        self.nav_selected = 0;
        self.focus = Focus::Nav;
    }
}
