//! Custom widget components

mod account_form;
mod header;
mod hints;
mod input_line;
mod login_form;
mod nav_panel;
mod placeholder;
mod user_table;

pub use account_form::AccountForm;
pub use header::MainHeader;
pub use hints::{hints_for, HintsBar};
pub use input_line::InputLine;
pub use login_form::LoginForm;
pub use nav_panel::{NavPanel, SHORTCUTS};
pub use placeholder::Placeholder;
pub use user_table::UserTable;
