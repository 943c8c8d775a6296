//! Login form state

use std::fmt;

use shopdesk_core::{validate_login, Credentials};

/// Shown for any failed login request, whatever the cause.
pub const MSG_LOGIN_FAILED: &str = "Invalid email or password. Please try again.";

/// Focusable elements of the login screen, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginFocus {
    #[default]
    Email,
    Password,
    Submit,
    SignUp,
    LostPassword,
}

impl LoginFocus {
    pub fn next(&self) -> Self {
        match self {
            LoginFocus::Email => LoginFocus::Password,
            LoginFocus::Password => LoginFocus::Submit,
            LoginFocus::Submit => LoginFocus::SignUp,
            LoginFocus::SignUp => LoginFocus::LostPassword,
            LoginFocus::LostPassword => LoginFocus::Email,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            LoginFocus::Email => LoginFocus::LostPassword,
            LoginFocus::Password => LoginFocus::Email,
            LoginFocus::Submit => LoginFocus::Password,
            LoginFocus::SignUp => LoginFocus::Submit,
            LoginFocus::LostPassword => LoginFocus::SignUp,
        }
    }

    pub fn is_text_input(&self) -> bool {
        matches!(self, LoginFocus::Email | LoginFocus::Password)
    }
}

/// The two editable fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginField {
    Email,
    Password,
}

#[derive(Clone, Default)]
pub struct LoginState {
    pub email: String,
    pub password: String,
    pub focus: LoginFocus,
    /// Inline error under the form, cleared by the next edit
    pub error: Option<String>,
    /// A login request is in flight
    pub submitting: bool,
}

impl fmt::Debug for LoginState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginState")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("focus", &self.focus)
            .field("error", &self.error)
            .field("submitting", &self.submitting)
            .finish()
    }
}

impl LoginState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(&self, field: LoginField) -> &str {
        match field {
            LoginField::Email => &self.email,
            LoginField::Password => &self.password,
        }
    }

    /// Replace a field's value. Any edit clears the inline error.
    pub fn set_field(&mut self, field: LoginField, value: String) {
        match field {
            LoginField::Email => self.email = value,
            LoginField::Password => self.password = value,
        }
        self.error = None;
    }

    /// The field under the cursor, if the focus is on a text input
    pub fn focused_field(&self) -> Option<LoginField> {
        match self.focus {
            LoginFocus::Email => Some(LoginField::Email),
            LoginFocus::Password => Some(LoginField::Password),
            _ => None,
        }
    }

    /// Validate and mark the form as submitting.
    ///
    /// Returns the credentials to send, or `None` when a request is already
    /// in flight or validation failed (the error is then set inline).
    pub fn begin_submit(&mut self) -> Option<Credentials> {
        if self.submitting {
            return None;
        }

        match validate_login(&self.email, &self.password) {
            Ok(credentials) => {
                self.error = None;
                self.submitting = true;
                Some(credentials)
            }
            Err(e) => {
                self.error = Some(e.to_string());
                None
            }
        }
    }

    pub fn submit_failed(&mut self) {
        self.submitting = false;
        self.error = Some(MSG_LOGIN_FAILED.to_string());
    }

    /// Reset after a successful login so nothing lingers for the next visit.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
