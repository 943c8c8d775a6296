//! Key event handlers for each screen

use shopdesk_core::Route;

use crate::input_key::InputKey;
use crate::message::Message;
use crate::state::{AppState, Focus};

/// Convert key events to messages based on the current route and focus
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    // Force quit from anywhere
    if key == InputKey::CharCtrl('c') {
        return Some(Message::Quit);
    }

    match state.route {
        Route::Login => handle_key_login(state, key),
        Route::SignUp | Route::LostPassword => handle_key_public_placeholder(key),
        _ => handle_key_signed_in(state, key),
    }
}

fn handle_key_login(state: &AppState, key: InputKey) -> Option<Message> {
    let login = &state.login;

    match key {
        InputKey::Tab | InputKey::Down => Some(Message::LoginFocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::LoginFocusPrev),
        InputKey::Enter => Some(Message::LoginActivate),
        InputKey::Esc => Some(Message::Quit),

        InputKey::Backspace => login.focused_field().map(|field| {
            let mut value = login.field(field).to_string();
            value.pop();
            Message::LoginInput { field, value }
        }),

        InputKey::Char(c) => match login.focused_field() {
            Some(field) => {
                let mut value = login.field(field).to_string();
                value.push(c);
                Some(Message::LoginInput { field, value })
            }
            None if c == 'q' => Some(Message::Quit),
            None => None,
        },

        _ => None,
    }
}

/// Sign up / lost password: flows that live in the web storefront
fn handle_key_public_placeholder(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc | InputKey::Enter | InputKey::Backspace => {
            Some(Message::Navigate(Route::Login))
        }
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_signed_in(state: &AppState, key: InputKey) -> Option<Message> {
    // Shortcuts work regardless of focus
    match key {
        InputKey::CharCtrl('o') => return Some(Message::Navigate(Route::Home)),
        InputKey::CharCtrl('u') => return Some(Message::Navigate(Route::Users)),
        InputKey::CharCtrl('l') => return Some(Message::Logout),
        _ => {}
    }

    match (state.focus, state.route) {
        (Focus::Content, Route::MyAccount) => handle_key_account(state, key),
        (Focus::Content, Route::Users) => handle_key_users(state, key),
        _ => handle_key_nav(state, key),
    }
}

fn handle_key_nav(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::NavSelectPrev),
        InputKey::Down | InputKey::Char('j') => Some(Message::NavSelectNext),
        InputKey::Enter => Some(Message::NavOpenSelected),
        InputKey::Tab | InputKey::Right => match state.route {
            Route::MyAccount | Route::Users => Some(Message::FocusContent),
            _ => None,
        },
        InputKey::Char('q') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_account(state: &AppState, key: InputKey) -> Option<Message> {
    let account = &state.account;

    match key {
        InputKey::Esc => Some(Message::FocusNav),
        InputKey::Tab | InputKey::Down => Some(Message::AccountFocusNext),
        InputKey::BackTab | InputKey::Up => Some(Message::AccountFocusPrev),
        InputKey::Enter => Some(Message::SaveAccount),

        InputKey::Backspace => {
            let field = account.focused_field().filter(|f| !f.is_read_only())?;
            let mut value = account.form.get(field).to_string();
            value.pop();
            Some(Message::AccountInput { field, value })
        }

        InputKey::Char(c) => {
            let field = account.focused_field().filter(|f| !f.is_read_only())?;
            let mut value = account.form.get(field).to_string();
            value.push(c);
            Some(Message::AccountInput { field, value })
        }

        _ => None,
    }
}

fn handle_key_users(state: &AppState, key: InputKey) -> Option<Message> {
    let users = &state.users;

    match key {
        InputKey::Esc => Some(Message::FocusNav),
        InputKey::CharCtrl('r') => Some(Message::LoadUsers),

        // Filter inputs
        InputKey::Tab => Some(Message::FilterFocusNext),
        InputKey::BackTab => Some(Message::FilterFocusPrev),
        InputKey::Backspace => {
            let mut value = users.criteria.get(users.focus).to_string();
            value.pop();
            Some(Message::FilterInput {
                field: users.focus,
                value,
            })
        }
        InputKey::Char(c) => {
            let mut value = users.criteria.get(users.focus).to_string();
            value.push(c);
            Some(Message::FilterInput {
                field: users.focus,
                value,
            })
        }

        // Table selection
        InputKey::Up => Some(Message::UserSelectPrev),
        InputKey::Down => Some(Message::UserSelectNext),
        InputKey::Home | InputKey::PageUp => Some(Message::UserSelectFirst),
        InputKey::End | InputKey::PageDown => Some(Message::UserSelectLast),

        _ => None,
    }
}
