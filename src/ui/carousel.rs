//! Drawing a [`CarouselView`].

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{COLOR_ACCENT, COLOR_BACKDROP, COLOR_DIM, COLOR_HEADER, COLOR_MUTED};
use crate::carousel::{placeholder_message, CarouselView, Dot, SlideView};
use crate::gallery::format_image_title;

/// Glyph of the active dot; wider, like the pill on the site.
const DOT_ACTIVE: &str = "━━";
const DOT_INACTIVE: &str = "•";

/// Draw a carousel into `area`, registering a hit area per dot.
pub fn render_carousel(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    view: &CarouselView,
    hit_areas: &mut HitAreaRegistry,
) {
    match view {
        CarouselView::Placeholder { folder } => render_placeholder(frame, area, folder),
        CarouselView::Slides(slides) if slides.dim_overlay => render_backdrop(frame, area, slides),
        CarouselView::Slides(slides) => render_slideshow(frame, area, title, slides, hit_areas),
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, folder: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ACCENT));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(2),
        Constraint::Fill(1),
    ])
    .areas(inner);

    let message = Paragraph::new(Line::from(Span::styled(
        placeholder_message(folder),
        Style::default().fg(COLOR_DIM),
    )))
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(message, middle);
}

/// Background mode: the visible image's title, dimmed, in the bottom-left
/// corner. Content is drawn on top by the caller.
fn render_backdrop(frame: &mut Frame, area: Rect, slides: &SlideView) {
    let Some(layer) = slides.visible() else {
        return;
    };
    if area.height == 0 {
        return;
    }
    let caption = Paragraph::new(Line::from(Span::styled(
        format_image_title(&layer.source),
        Style::default()
            .fg(COLOR_BACKDROP)
            .add_modifier(Modifier::ITALIC),
    )));
    let bottom = Rect::new(area.x + 1, area.y + area.height - 1, area.width.saturating_sub(2), 1);
    frame.render_widget(caption, bottom);
}

fn render_slideshow(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    slides: &SlideView,
    hit_areas: &mut HitAreaRegistry,
) {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_ACCENT))
        .title(Line::from(Span::styled(
            format!(" {} ", title),
            Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
        )));
    if let Some(counter) = &slides.counter {
        block = block.title_top(
            Line::from(Span::styled(
                format!(" {} ", counter),
                Style::default().fg(COLOR_HEADER),
            ))
            .right_aligned(),
        );
    }
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [body, dots_row] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(inner);

    let lines = match slides.visible() {
        Some(layer) => vec![
            Line::from(Span::styled(
                format_image_title(&layer.source),
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(layer.source.clone(), Style::default().fg(COLOR_DIM))),
        ],
        // Between fade-out and fade-in nothing is opaque.
        None => vec![Line::from(Span::styled("· · ·", Style::default().fg(COLOR_MUTED)))],
    };
    let text_height = lines.len() as u16;
    let [_, text_area, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(text_height),
        Constraint::Fill(1),
    ])
    .areas(body);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        text_area,
    );

    render_dots(frame, dots_row, &slides.dots, hit_areas);
}

/// Width of the dot row: glyphs plus one space between neighbours.
fn dots_width(dots: &[Dot]) -> u16 {
    let glyphs: usize = dots.iter().map(|dot| dot_glyph(dot).width()).sum();
    (glyphs + dots.len().saturating_sub(1)) as u16
}

fn dot_glyph(dot: &Dot) -> &'static str {
    if dot.active {
        DOT_ACTIVE
    } else {
        DOT_INACTIVE
    }
}

fn render_dots(frame: &mut Frame, area: Rect, dots: &[Dot], hit_areas: &mut HitAreaRegistry) {
    let total = dots_width(dots);
    if dots.is_empty() || area.height == 0 || total > area.width {
        return;
    }

    let mut x = area.x + (area.width - total) / 2;
    for dot in dots {
        let glyph = dot_glyph(dot);
        let width = glyph.width() as u16;
        let color = if dot.active { COLOR_ACCENT } else { COLOR_MUTED };
        let rect = Rect::new(x, area.y, width, 1);

        frame.render_widget(
            Paragraph::new(Span::styled(glyph, Style::default().fg(color))),
            rect,
        );
        hit_areas.register(rect, ClickAction::SelectImage(dot.position));
        x += width + 1;
    }
}
