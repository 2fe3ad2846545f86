//! Screen bodies and the footer.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use super::carousel::render_carousel;
use super::interaction::ClickAction;
use super::theme::{
    COLOR_ACCENT, COLOR_ADMIN, COLOR_DIM, COLOR_ERROR, COLOR_HEADER, COLOR_MUTED, COLOR_PANEL_BG,
    COLOR_TEXT,
};
use crate::app::{App, Status};
use crate::gallery::{format_image_title, KnownFolder};

/// Landing page: the background carousel with the welcome card on top.
///
/// Without images only the placeholder shows.
pub fn render_home(frame: &mut Frame, area: Rect, app: &mut App) {
    if let Some(view) = app.page.view() {
        render_carousel(frame, area, "Home", &view, &mut app.hit_areas);
        if view.is_placeholder() {
            return;
        }
    }

    let card_width = area.width.min(44);
    let card_height = area.height.min(7);
    let card = Rect::new(
        area.x + (area.width - card_width) / 2,
        area.y + (area.height - card_height) / 2,
        card_width,
        card_height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_MUTED))
        .style(Style::default().bg(COLOR_PANEL_BG));
    let lines = vec![
        Line::from(Span::styled(
            "Portfolio",
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "2 slideshow · 3 gallery · f folder",
            Style::default().fg(COLOR_DIM),
        )),
    ];
    frame.render_widget(Clear, card);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        card,
    );
}

pub fn render_slideshow(frame: &mut Frame, area: Rect, app: &mut App) {
    let title = app
        .folder
        .parse::<KnownFolder>()
        .map(|folder| folder.label().to_string())
        .unwrap_or_else(|_| app.folder.clone());
    if let Some(view) = app.page.view() {
        render_carousel(frame, area, &title, &view, &mut app.hit_areas);
    }
}

/// Gallery list of the selected folder.
pub fn render_gallery(frame: &mut Frame, area: Rect, app: &mut App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_MUTED))
        .title(Line::from(Span::styled(
            format!(" Gallery · {} ", app.folder),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let gallery = &app.gallery;
    let message = if gallery.loading {
        Some(Span::styled("Loading…", Style::default().fg(COLOR_DIM)))
    } else if let Some(error) = &gallery.error {
        Some(Span::styled(error.clone(), Style::default().fg(COLOR_ERROR)))
    } else if gallery.images.is_empty() {
        Some(Span::styled(
            format!("No images in '{}' yet.", app.folder),
            Style::default().fg(COLOR_DIM),
        ))
    } else {
        None
    };
    if let Some(message) = message {
        frame.render_widget(Paragraph::new(Line::from(message)), inner);
        return;
    }

    let [list, hint] = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    // Keep the selection visible.
    let rows = list.height as usize;
    let offset = gallery.selected.saturating_sub(rows.saturating_sub(1));
    let mut lines = Vec::new();
    for (row, url) in gallery.images.iter().enumerate().skip(offset).take(rows) {
        let selected = row == gallery.selected;
        let marker = if selected { "▶" } else { " " };
        let title_style = if selected {
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(COLOR_TEXT)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} {:>3}  ", marker, row + 1), title_style),
            Span::styled(format_image_title(url), title_style),
            Span::raw("  "),
            Span::styled(url.to_string(), Style::default().fg(COLOR_DIM)),
        ]));
        let y = list.y + (row - offset) as u16;
        app.hit_areas
            .register(Rect::new(list.x, y, list.width, 1), ClickAction::SelectRow(row));
    }
    frame.render_widget(Paragraph::new(lines), list);

    let hint_line = if app.is_admin() {
        Line::from(Span::styled("d delete", Style::default().fg(COLOR_ADMIN)))
    } else {
        Line::from(Span::styled(
            "log in as an admin to manage images",
            Style::default().fg(COLOR_MUTED),
        ))
    };
    frame.render_widget(Paragraph::new(hint_line), hint);
}

/// Status message, or the key hints when there is none.
pub fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status {
        Some(Status::Info(message)) => {
            Line::from(Span::styled(message.clone(), Style::default().fg(COLOR_TEXT)))
        }
        Some(Status::Error(message)) => {
            Line::from(Span::styled(message.clone(), Style::default().fg(COLOR_ERROR)))
        }
        None => Line::from(Span::styled(
            "tab screen  ←/→ slide  f folder  r reload  q quit",
            Style::default().fg(COLOR_MUTED),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}
