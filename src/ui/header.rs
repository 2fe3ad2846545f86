//! Header row: screen tabs, folder label and the admin badge.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::interaction::ClickAction;
use super::theme::{COLOR_ACCENT, COLOR_ADMIN, COLOR_DIM, COLOR_HEADER, COLOR_MUTED};
use crate::app::{App, Screen};

const BRAND: &str = " folio ";

pub fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    let mut spans = vec![Span::styled(
        BRAND,
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
    )];
    let mut x = area.x + BRAND.width() as u16;

    for (i, screen) in Screen::ALL.iter().enumerate() {
        let label = format!(" {} {} ", i + 1, screen.title());
        let width = label.width() as u16;
        let style = if *screen == app.screen() {
            Style::default()
                .fg(COLOR_HEADER)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        if x + width <= area.right() {
            app.hit_areas.register(
                Rect::new(x, area.y, width, 1),
                ClickAction::SwitchScreen(*screen),
            );
        }
        spans.push(Span::styled(label, style));
        x += width;
    }

    // The home carousel always shows the configured folder.
    if app.screen() != Screen::Home {
        let label = format!(" [{}] ", app.folder);
        let width = label.width() as u16;
        spans.push(Span::styled("│", Style::default().fg(COLOR_MUTED)));
        x += 1;
        if x + width <= area.right() {
            app.hit_areas
                .register(Rect::new(x, area.y, width, 1), ClickAction::NextFolder);
        }
        spans.push(Span::styled(label, Style::default().fg(COLOR_ACCENT)));
    }

    if let Some(session) = &app.session {
        spans.push(Span::styled(
            format!(" {} ", session.user.username),
            Style::default().fg(COLOR_DIM),
        ));
        if session.is_admin() {
            spans.push(Span::styled(
                "ADMIN",
                Style::default().fg(COLOR_ADMIN).add_modifier(Modifier::BOLD),
            ));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
