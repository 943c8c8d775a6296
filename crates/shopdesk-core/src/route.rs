//! Named destinations and the fixed side navigation list

/// Every place the console can navigate to.
///
/// Some routes are served by this console; the rest belong to the web
/// storefront and are shown as placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Home,
    MyAccount,
    Users,
    MyOrders,
    Support,
    ChangePassword,
    SignUp,
    LostPassword,
}

impl Route {
    /// Path of the route in the storefront's URL space
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::Home => "/home",
            Route::MyAccount => "/user/my-account",
            Route::Users => "/admin/users",
            Route::MyOrders => "/user/my-orders",
            Route::Support => "/user/support",
            Route::ChangePassword => "/new-password",
            Route::SignUp => "/signup",
            Route::LostPassword => "/lost-password",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Login => "Login",
            Route::Home => "Home",
            Route::MyAccount => "My Account",
            Route::Users => "Users",
            Route::MyOrders => "My Orders",
            Route::Support => "Support",
            Route::ChangePassword => "Change Password",
            Route::SignUp => "Sign Up",
            Route::LostPassword => "Lost Password",
        }
    }

    /// Whether the route needs a stored session token to be shown.
    ///
    /// The user list is reachable without one and reports the missing token
    /// itself.
    pub fn requires_session(&self) -> bool {
        !matches!(
            self,
            Route::Login | Route::SignUp | Route::LostPassword | Route::Users
        )
    }

    /// Whether the side panel is shown next to this route
    pub fn has_nav_panel(&self) -> bool {
        !matches!(self, Route::Login | Route::SignUp | Route::LostPassword)
    }

    /// Whether this console renders the route itself
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Route::Login | Route::Home | Route::MyAccount | Route::Users
        )
    }
}

/// Side panel entries, in display order.
pub const NAV_DESTINATIONS: [Route; 4] = [
    Route::MyAccount,
    Route::MyOrders,
    Route::Support,
    Route::ChangePassword,
];
