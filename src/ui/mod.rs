//! UI rendering for folio.
//!
//! Every frame is a header row, the body of the current screen and a
//! footer row. Widgets register their clickable regions in
//! [`App::hit_areas`](crate::app::App) while drawing.

mod carousel;
mod header;
pub mod interaction;
mod pages;
mod theme;

pub use carousel::render_carousel;
pub use theme::{COLOR_ACCENT, COLOR_DIM, COLOR_HEADER, COLOR_MUTED};

use ratatui::{
    layout::{Constraint, Layout},
    Frame,
};

use crate::app::{App, Screen};

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &mut App) {
    app.hit_areas.clear();

    let [header_area, body, footer_area] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    header::render_header(frame, header_area, app);
    match app.screen() {
        Screen::Home => pages::render_home(frame, body, app),
        Screen::Slideshow => pages::render_slideshow(frame, body, app),
        Screen::Gallery => pages::render_gallery(frame, body, app),
    }
    pages::render_footer(frame, footer_area, app);
}
