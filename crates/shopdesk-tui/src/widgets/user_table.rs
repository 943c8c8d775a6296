//! Admin user list: filter inputs above a selectable table

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, StatefulWidget, Table, TableState, Widget},
};

use shopdesk_app::user_list::UserListState;
use shopdesk_core::{format_date, FilterField, UserListItem};

use crate::theme::styles;

use super::InputLine;

const COLUMNS: [&str; 5] = ["Name", "Email", "Role", "Address", "Created At"];

pub struct UserTable<'a> {
    state: &'a UserListState,
    focused: bool,
}

impl<'a> UserTable<'a> {
    pub fn new(state: &'a UserListState, focused: bool) -> Self {
        Self { state, focused }
    }

    fn render_filters(&self, area: Rect, buf: &mut Buffer) {
        let cells = Layout::horizontal([Constraint::Ratio(1, 3); 3])
            .spacing(2)
            .split(area);

        for (field, cell) in FilterField::ALL.iter().zip(cells.iter()) {
            let placeholder = match field {
                FilterField::Name => "Search by name",
                FilterField::Role => "Search by role",
                FilterField::CreatedAt => "YYYY-MM-DD",
            };
            InputLine::new(field.label(), self.state.criteria.get(*field))
                .placeholder(placeholder)
                .focused(self.focused && self.state.focus == *field)
                .render(*cell, buf);
        }
    }

    fn status_line(&self) -> Line<'static> {
        if self.state.loading {
            return Line::from(Span::styled("Loading users…", styles::pending_text()));
        }
        if let Some(error) = &self.state.error {
            return Line::from(Span::styled(error.clone(), styles::error_text()));
        }
        Line::from(Span::styled(
            format!(
                "Showing {} of {} users",
                self.state.displayed.len(),
                self.state.base.len()
            ),
            styles::text_secondary(),
        ))
    }

    fn row(item: &UserListItem) -> Row<'static> {
        Row::new(vec![
            Cell::from(item.display_name()),
            Cell::from(item.email.clone()),
            Cell::from(item.role.clone()),
            Cell::from(item.address.clone()),
            Cell::from(format_date(&item.created_at)),
        ])
    }
}

impl Widget for UserTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(
            " Users ({}/{}) ",
            self.state.displayed.len(),
            self.state.base.len()
        );
        let block = styles::glass_block(self.focused).title(Span::styled(title, styles::accent_bold()));
        let inner = block.inner(area).inner(Margin::new(1, 0));
        block.render(area, buf);

        if inner.height < 3 || inner.width == 0 {
            return;
        }

        let [filters, status, _, table_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .areas(inner);

        self.render_filters(filters, buf);
        Paragraph::new(self.status_line()).render(status, buf);

        let header = Row::new(COLUMNS.map(Cell::from))
            .style(styles::accent().add_modifier(Modifier::BOLD));
        let table = Table::new(
            self.state.displayed.iter().map(Self::row),
            [
                Constraint::Percentage(22),
                Constraint::Percentage(28),
                Constraint::Percentage(12),
                Constraint::Percentage(24),
                Constraint::Percentage(14),
            ],
        )
        .header(header)
        .column_spacing(1)
        .row_highlight_style(if self.focused {
            styles::focused_selected()
        } else {
            styles::text_primary().add_modifier(Modifier::REVERSED)
        });

        let mut table_state = TableState::default().with_selected(self.state.selected);
        StatefulWidget::render(table, table_area, buf, &mut table_state);
    }
}
