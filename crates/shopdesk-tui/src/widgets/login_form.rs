//! Login screen

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use shopdesk_app::login::{LoginFocus, LoginState};

use crate::layout::centered;
use crate::theme::styles;

use super::InputLine;

const FORM_WIDTH: u16 = 60;
const FORM_HEIGHT: u16 = 15;
const LABEL_WIDTH: u16 = 10;

pub struct LoginForm<'a> {
    state: &'a LoginState,
}

impl<'a> LoginForm<'a> {
    pub fn new(state: &'a LoginState) -> Self {
        Self { state }
    }

    fn button(&self, text: &str, focus: LoginFocus) -> Line<'static> {
        let style = if self.state.focus == focus {
            styles::focused_selected()
        } else {
            styles::accent()
        };
        Line::from(Span::styled(text.to_string(), style)).alignment(Alignment::Center)
    }

    fn link(&self, text: &str, focus: LoginFocus) -> Line<'static> {
        let style = if self.state.focus == focus {
            styles::focused_selected()
        } else {
            styles::text_secondary()
        };
        Line::from(Span::styled(text.to_string(), style)).alignment(Alignment::Center)
    }
}

impl Widget for LoginForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let form_area = centered(area, FORM_WIDTH, FORM_HEIGHT);
        let block = styles::glass_block(true).title(Span::styled(" Login ", styles::accent_bold()));
        let inner = block.inner(form_area);
        block.render(form_area, buf);

        if inner.height < 3 || inner.width < 10 {
            return;
        }

        let inner = inner.inner(Margin::new(1, 0));
        let [intro, _, email, password, _, status, _, submit, _, sign_up, lost_password] =
            Layout::vertical([Constraint::Length(1); 11]).areas(inner);

        Paragraph::new(Line::from(Span::styled(
            "Sign in with your store account",
            styles::text_muted(),
        )))
        .alignment(Alignment::Center)
        .render(intro, buf);

        InputLine::new("Email", &self.state.email)
            .placeholder("you@example.com")
            .label_width(LABEL_WIDTH)
            .focused(self.state.focus == LoginFocus::Email)
            .render(email, buf);

        InputLine::new("Password", &self.state.password)
            .label_width(LABEL_WIDTH)
            .focused(self.state.focus == LoginFocus::Password)
            .masked()
            .render(password, buf);

        let status_line = if self.state.submitting {
            Some(Span::styled("Signing in…", styles::pending_text()))
        } else {
            self.state
                .error
                .as_deref()
                .map(|e| Span::styled(e.to_string(), styles::error_text()))
        };
        if let Some(span) = status_line {
            Paragraph::new(Line::from(span))
                .alignment(Alignment::Center)
                .render(status, buf);
        }

        self.button("[ Login ]", LoginFocus::Submit).render(submit, buf);
        self.link("Sign up", LoginFocus::SignUp).render(sign_up, buf);
        self.link("Forgot password?", LoginFocus::LostPassword)
            .render(lost_password, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_renders_fields_and_links() {
        let mut term = TestTerminal::new();
        let state = LoginState::new();
        term.render_widget(LoginForm::new(&state), term.area());

        assert!(term.buffer_contains("Login"));
        assert!(term.buffer_contains("Email"));
        assert!(term.buffer_contains("Password"));
        assert!(term.buffer_contains("[ Login ]"));
        assert!(term.buffer_contains("Sign up"));
        assert!(term.buffer_contains("Forgot password?"));
    }

    #[test]
    fn test_password_is_masked() {
        let mut term = TestTerminal::new();
        let mut state = LoginState::new();
        state.email = "an@example.com".to_string();
        state.password = "hunter2".to_string();
        term.render_widget(LoginForm::new(&state), term.area());

        assert!(term.buffer_contains("an@example.com"));
        assert!(term.buffer_contains("*******"));
        assert!(!term.buffer_contains("hunter2"));
    }

    #[test]
    fn test_shows_inline_error() {
        let mut term = TestTerminal::new();
        let mut state = LoginState::new();
        state.error = Some("Invalid email address.".to_string());
        term.render_widget(LoginForm::new(&state), term.area());

        assert!(term.buffer_contains("Invalid email address."));
    }

    #[test]
    fn test_shows_progress_while_submitting() {
        let mut term = TestTerminal::new();
        let mut state = LoginState::new();
        state.submitting = true;
        term.render_widget(LoginForm::new(&state), term.area());

        assert!(term.buffer_contains("Signing in…"));
    }
}
