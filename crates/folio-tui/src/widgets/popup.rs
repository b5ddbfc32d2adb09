use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use folio_core::contact::SubmitNotice;

use crate::app::{ComposeDraft, ComposeField};
use crate::theme::Slate;

pub struct PopupWidget;

impl PopupWidget {
    /// Blocking notice after a form submission; any key dismisses it
    pub fn render_notice(frame: &mut Frame, notice: SubmitNotice) {
        let area = frame.area();
        let popup_width = 56u16.min(area.width.saturating_sub(4));
        let popup_height = 6u16.min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let (title, border) = if notice.is_success() {
            (" Message sent ", Slate::GREEN)
        } else {
            (" Delivery failed ", Slate::RED)
        };

        let block = Block::default()
            .title(title)
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .style(Style::default().bg(Slate::BG1));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(inner);

        let message = Paragraph::new(Line::from(Span::styled(
            notice.message(),
            Style::default()
                .fg(Slate::FG0)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(message, chunks[0]);

        let hint = Paragraph::new(Line::from(Span::styled(
            "press any key to continue",
            Style::default().fg(Slate::DIM),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[2]);
    }

    /// Contact form dialog
    pub fn render_compose(frame: &mut Frame, draft: &ComposeDraft) {
        let area = frame.area();
        let popup_width = 60u16.min(area.width.saturating_sub(4));
        let popup_height = 11u16.min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Contact ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Slate::ACCENT))
            .style(Style::default().bg(Slate::BG1));
        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // name
                Constraint::Length(1), // email
                Constraint::Length(1), // spacer
                Constraint::Min(3),    // message
                Constraint::Length(1), // hint
            ])
            .split(inner);

        frame.render_widget(
            field_line("Name", &draft.name, draft.field == ComposeField::Name),
            chunks[0],
        );
        frame.render_widget(
            field_line("Email", &draft.email, draft.field == ComposeField::Email),
            chunks[1],
        );

        let message_active = draft.field == ComposeField::Message;
        let message = Paragraph::new(format!("Message: {}", draft.message))
            .style(field_style(message_active))
            .wrap(ratatui::widgets::Wrap { trim: false });
        frame.render_widget(message, chunks[3]);

        let hint = Paragraph::new(Line::from(Span::styled(
            "Tab: next field   Enter on message: send   Esc: cancel",
            Style::default().fg(Slate::DIM),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[4]);
    }
}

fn field_line<'a>(label: &'a str, value: &'a str, active: bool) -> Paragraph<'a> {
    Paragraph::new(format!("{}: {}", label, value)).style(field_style(active))
}

fn field_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Slate::FG0)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Slate::DIM)
    }
}

/// Helper function to create a centered rect
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
