//! Account editor
//!
//! One input row per profile field, the save button, and above them the
//! load status, the persistent fetch error and the transient save banner.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use shopdesk_app::account::{AccountPhase, AccountState};
use shopdesk_core::{LoadStage, ProfileField};

use crate::theme::styles;

use super::InputLine;

const LABEL_WIDTH: u16 = 15;

pub struct AccountForm<'a> {
    state: &'a AccountState,
    focused: bool,
}

impl<'a> AccountForm<'a> {
    pub fn new(state: &'a AccountState, focused: bool) -> Self {
        Self { state, focused }
    }

    fn status_line(&self) -> Option<Line<'static>> {
        let text = match self.state.phase {
            AccountPhase::Loading(LoadStage::IdentityCheck) => "Checking your session…",
            AccountPhase::Loading(LoadStage::ProfileFetch) => "Loading your information…",
            AccountPhase::Saving => "Saving…",
            AccountPhase::Unauthenticated => "Signed out. Redirecting to login…",
            AccountPhase::Idle | AccountPhase::Loaded | AccountPhase::Error => return None,
        };
        Some(Line::from(Span::styled(text, styles::pending_text())))
    }

    fn save_button(&self) -> Line<'static> {
        let on_button = self.focused && self.state.focused_field().is_none();
        let style = if on_button {
            styles::focused_selected()
        } else if self.state.can_submit() {
            styles::accent()
        } else {
            styles::text_muted()
        };
        Line::from(Span::styled("[ Save ]", style))
    }
}

impl Widget for AccountForm<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(Span::styled(" My Account ", styles::accent_bold()));
        let inner = block.inner(area).inner(Margin::new(1, 0));
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let mut notices: Vec<Line> = Vec::new();
        if let Some(line) = self.status_line() {
            notices.push(line);
        }
        if let Some(error) = &self.state.fetch_error {
            notices.push(Line::from(Span::styled(error.clone(), styles::error_text())));
        }
        if let Some(banner) = &self.state.banner {
            notices.push(Line::from(Span::styled(banner.text, styles::banner(banner.kind))));
        }

        let notice_height = notices.len() as u16;
        let [notice_area, _, fields_area, _, button_area] = Layout::vertical([
            Constraint::Length(notice_height),
            Constraint::Length(u16::from(notice_height > 0)),
            Constraint::Length(ProfileField::ALL.len() as u16),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(inner);

        Paragraph::new(notices).render(notice_area, buf);

        let rows = Layout::vertical([Constraint::Length(1); ProfileField::ALL.len()])
            .split(fields_area);
        for (i, (field, row)) in ProfileField::ALL.iter().zip(rows.iter()).enumerate() {
            InputLine::new(field.label(), self.state.form.get(*field))
                .placeholder(field.placeholder())
                .label_width(LABEL_WIDTH)
                .focused(self.focused && self.state.focus == i)
                .read_only(field.is_read_only())
                .render(*row, buf);
        }

        self.save_button().render(button_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopdesk_api::test_utils::sample_profile;
    use shopdesk_app::account::{MSG_FETCH_USER_ID_FAILED, MSG_UPDATE_SUCCESS};
    use crate::test_utils::TestTerminal;

    fn loaded() -> AccountState {
        let mut state = AccountState::new();
        state.begin_load();
        state.identity_resolved();
        state.profile_loaded(sample_profile());
        state
    }

    #[test]
    fn test_renders_every_field_label() {
        let mut term = TestTerminal::new();
        let state = loaded();
        term.render_widget(AccountForm::new(&state, true), term.area());

        for field in ProfileField::ALL {
            assert!(term.buffer_contains(field.label()), "missing {}", field.label());
        }
        assert!(term.buffer_contains("Hanoi"));
        assert!(term.buffer_contains("[ Save ]"));
    }

    #[test]
    fn test_email_is_marked_read_only() {
        let mut term = TestTerminal::new();
        let state = loaded();
        term.render_widget(AccountForm::new(&state, true), term.area());

        assert!(term.buffer_contains("(read-only)"));
    }

    #[test]
    fn test_shows_fetch_error() {
        let mut term = TestTerminal::new();
        let mut state = AccountState::new();
        state.begin_load();
        state.load_failed(LoadStage::IdentityCheck);
        term.render_widget(AccountForm::new(&state, true), term.area());

        assert!(term.buffer_contains(MSG_FETCH_USER_ID_FAILED));
    }

    #[test]
    fn test_shows_banner_after_save() {
        let mut term = TestTerminal::with_size(100, 24);
        let mut state = loaded();
        state.begin_save();
        state.save_succeeded();
        term.render_widget(AccountForm::new(&state, true), term.area());

        assert!(term.buffer_contains(MSG_UPDATE_SUCCESS));
    }

    #[test]
    fn test_shows_loading_stage() {
        let mut term = TestTerminal::new();
        let mut state = AccountState::new();
        state.begin_load();
        term.render_widget(AccountForm::new(&state, true), term.area());
        assert!(term.buffer_contains("Checking your session…"));

        state.identity_resolved();
        term.render_widget(AccountForm::new(&state, true), term.area());
        assert!(term.buffer_contains("Loading your information…"));
    }

    #[test]
    fn test_empty_fields_show_placeholders() {
        let mut term = TestTerminal::new();
        let state = AccountState::new();
        term.render_widget(AccountForm::new(&state, false), term.area());

        assert!(term.buffer_contains("YYYY-MM-DD"));
        assert!(term.buffer_contains("Your City"));
    }
}
