//! End-to-end flows through the App state machine and the renderer.

mod common;

use common::*;
use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use folio::app::{App, Screen, Status};
use folio::ui::{self, interaction::ClickAction};
use ratatui::{backend::TestBackend, Terminal};

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    });
}

fn click(app: &mut App, x: u16, y: u16) {
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: x,
        row: y,
        modifiers: KeyModifiers::NONE,
    });
}

fn draw(app: &mut App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal.draw(|f| ui::render(f, app)).unwrap();
    terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn area_of(app: &App, action: &ClickAction) -> (u16, u16) {
    let area = app
        .hit_areas
        .areas()
        .iter()
        .find(|area| &area.action == action)
        .unwrap_or_else(|| panic!("no hit area for {:?}", action));
    (area.rect.x, area.rect.y)
}

#[tokio::test(start_paused = true)]
async fn test_tab_click_opens_slideshow() {
    let mut app = TestAppBuilder::new()
        .with_images("hero", &["/images/hero/one.jpg", "/images/hero/two.jpg"])
        .build();
    drain_messages(&mut app).await;

    draw(&mut app);
    let (x, y) = area_of(&app, &ClickAction::SwitchScreen(Screen::Slideshow));
    click(&mut app, x, y);
    assert_eq!(app.screen(), Screen::Slideshow);

    drain_messages(&mut app).await;
    let text = draw(&mut app);
    assert!(text.contains("1 / 2"));
    assert!(text.contains("One"));
}

#[tokio::test(start_paused = true)]
async fn test_dot_click_selects_image() {
    let mut app = TestAppBuilder::new()
        .with_images("hero", &["/a.jpg", "/b.jpg", "/c.jpg"])
        .build();
    press(&mut app, KeyCode::Char('2'));
    drain_messages(&mut app).await;

    draw(&mut app);
    let (x, y) = area_of(&app, &ClickAction::SelectImage(2));
    click(&mut app, x, y);

    assert_eq!(app.page.store().get_state().current_index, 2);
    assert!(draw(&mut app).contains("3 / 3"));
}

#[tokio::test(start_paused = true)]
async fn test_slideshow_redraws_after_advance() {
    let mut app = TestAppBuilder::new()
        .with_images("hero", &["/a.jpg", "/b.jpg"])
        .build();
    press(&mut app, KeyCode::Char('s'));
    drain_messages(&mut app).await;
    app.tick();
    app.needs_redraw = false;

    tokio::time::sleep(std::time::Duration::from_millis(5600)).await;
    app.tick();
    assert!(app.needs_redraw);
    assert!(draw(&mut app).contains("2 / 2"));
}

#[tokio::test(start_paused = true)]
async fn test_slideshow_index_survives_screen_switch() {
    let mut app = TestAppBuilder::new()
        .with_images("hero", &["/a.jpg", "/b.jpg", "/c.jpg"])
        .build();
    press(&mut app, KeyCode::Char('s'));
    drain_messages(&mut app).await;
    press(&mut app, KeyCode::Right);
    assert_eq!(app.page.store().get_state().current_index, 1);

    press(&mut app, KeyCode::Char('h'));
    drain_messages(&mut app).await;
    press(&mut app, KeyCode::Char('s'));
    drain_messages(&mut app).await;

    let carousel = app.page.carousel().unwrap();
    assert_eq!(carousel.state().display_index(carousel.images().len()), Some(1));
    assert!(draw(&mut app).contains("2 / 3"));
}

#[tokio::test(start_paused = true)]
async fn test_empty_folder_shows_placeholder() {
    let mut app = TestAppBuilder::new().build();
    press(&mut app, KeyCode::Char('s'));
    drain_messages(&mut app).await;

    let text = draw(&mut app);
    assert!(text.contains("No images in 'hero' yet."));
    assert!(!app.page.carousel().unwrap().is_ticking());
}

#[tokio::test(start_paused = true)]
async fn test_admin_deletes_selected_image() {
    let http = MockHttpConfig::new()
        .with_response(
            &format!("{}/api/images?folder=hero", API),
            200,
            r#"["/api/image/3", "/api/image/4"]"#,
        )
        .with_response(&format!("{}/api/gallery/4", API), 200, "")
        .build();
    let mut app = TestAppBuilder::new()
        .with_http(http.clone())
        .with_session(test_session("owner", true))
        .build();

    press(&mut app, KeyCode::Char('g'));
    drain_messages(&mut app).await;
    assert_eq!(app.gallery.images.len(), 2);
    assert!(draw(&mut app).contains("d delete"));

    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Char('d'));
    drain_messages(&mut app).await;

    assert_eq!(app.status, Some(Status::Info("Deleted image 4".to_string())));
    let deletes: Vec<_> = http
        .get_requests()
        .into_iter()
        .filter(|r| r.method == "DELETE")
        .collect();
    assert_eq!(deletes.len(), 1);
    assert_eq!(deletes[0].url, format!("{}/api/gallery/4", API));
    assert_eq!(
        deletes[0].headers.get("Authorization").map(String::as_str),
        Some("Bearer token-owner")
    );
}

#[tokio::test(start_paused = true)]
async fn test_non_admin_cannot_delete() {
    let http = MockHttpConfig::new()
        .with_response(
            &format!("{}/api/images?folder=hero", API),
            200,
            r#"["/api/image/3"]"#,
        )
        .build();
    let mut app = TestAppBuilder::new()
        .with_http(http.clone())
        .with_session(test_session("visitor", false))
        .build();

    press(&mut app, KeyCode::Char('g'));
    drain_messages(&mut app).await;
    press(&mut app, KeyCode::Char('d'));

    assert!(matches!(app.status, Some(Status::Error(ref m)) if m.contains("visitor")));
    assert!(http.get_requests().iter().all(|r| r.method != "DELETE"));
}

#[tokio::test(start_paused = true)]
async fn test_gallery_error_is_shown() {
    let http = MockHttpConfig::new()
        .with_response(
            &format!("{}/api/images?folder=hero", API),
            500,
            "Database error",
        )
        .build();
    let mut app = TestAppBuilder::new().with_http(http).build();

    press(&mut app, KeyCode::Char('g'));
    drain_messages(&mut app).await;

    assert!(app.gallery.error.is_some());
    assert!(draw(&mut app).contains("Database error"));
}

#[tokio::test(start_paused = true)]
async fn test_folder_label_click_cycles_folder() {
    let mut app = TestAppBuilder::new().build();
    press(&mut app, KeyCode::Char('s'));
    draw(&mut app);

    let (x, y) = area_of(&app, &ClickAction::NextFolder);
    click(&mut app, x, y);
    assert_eq!(app.folder, "about");
    assert_eq!(app.page.carousel().unwrap().props().folder(), "about");
}
