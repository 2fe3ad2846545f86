//! Message, key and mouse handling for App.

use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use tracing::{debug, info, warn};

use super::{App, AppMessage, GalleryState, Page, Screen, Status};
use crate::error::AuthError;
use crate::gallery::KnownFolder;
use crate::ui::interaction::ClickAction;

impl App {
    /// Handle a message from a background task.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::ImagesLoaded { page_id, loaded } => {
                if page_id != self.page.id() {
                    debug!(page_id, "listing for a closed page");
                    return;
                }
                if let Some(carousel) = self.page.carousel_mut() {
                    carousel.finish_load(loaded);
                }
            }
            AppMessage::GalleryLoaded { folder, result } => {
                if folder != self.gallery.images.folder() {
                    return;
                }
                self.gallery.loading = false;
                match result {
                    Ok(images) => {
                        self.gallery.images = crate::gallery::ImageSet::new(folder, images);
                        self.gallery.selected = self
                            .gallery
                            .selected
                            .min(self.gallery.images.len().saturating_sub(1));
                    }
                    Err(message) => self.gallery.error = Some(message),
                }
            }
            AppMessage::ImageDeleted { url, result } => match result {
                Ok(id) => {
                    info!(id, "image deleted");
                    self.set_status(Status::Info(format!("Deleted image {}", id)));
                    self.load_gallery();
                }
                Err(message) => {
                    warn!(url = %url, error = %message, "delete failed");
                    self.set_status(Status::Error(message));
                }
            },
        }
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.mark_dirty();
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit(),
            KeyCode::Char('q') | KeyCode::Esc => self.quit(),
            KeyCode::Tab => self.open_screen(self.screen().next()),
            KeyCode::Char('1') | KeyCode::Char('h') => self.open_screen(Screen::Home),
            KeyCode::Char('2') | KeyCode::Char('s') => self.open_screen(Screen::Slideshow),
            KeyCode::Char('3') | KeyCode::Char('g') => self.open_screen(Screen::Gallery),
            KeyCode::Char('f') => self.next_folder(),
            KeyCode::Char('r') => self.reload(),
            KeyCode::Left => self.step_slide(-1),
            KeyCode::Right => self.step_slide(1),
            KeyCode::Up | KeyCode::Char('k') => self.gallery.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.gallery.select_next(),
            KeyCode::Char('d') if self.screen() == Screen::Gallery => self.delete_selected(),
            _ => {}
        }
    }

    /// Handle a mouse event. Only left clicks do anything.
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(action) = self.hit_areas.hit_test(event.column, event.row) else {
            return;
        };
        self.mark_dirty();
        match action {
            ClickAction::SelectImage(position) => {
                if let Some(carousel) = self.page.carousel_mut() {
                    carousel.select(position);
                }
            }
            ClickAction::SwitchScreen(screen) => self.open_screen(screen),
            ClickAction::NextFolder => self.next_folder(),
            ClickAction::SelectRow(row) => {
                if row < self.gallery.images.len() {
                    self.gallery.selected = row;
                }
            }
        }
    }

    /// Replace the page-view with one for `screen`.
    pub fn open_screen(&mut self, screen: Screen) {
        if screen == self.screen() {
            return;
        }
        let folder = match screen {
            Screen::Home => self.config.folder.clone(),
            Screen::Slideshow | Screen::Gallery => self.folder.clone(),
        };
        let id = self.next_page_id;
        match Page::open(
            id,
            screen,
            &folder,
            self.config.interval,
            &self.provider,
            Arc::clone(&self.source),
        ) {
            Ok((page, pending)) => {
                self.next_page_id += 1;
                // Dropping the old page unmounts its carousel.
                self.page = page;
                if let Some(pending) = pending {
                    self.spawn_load(pending);
                }
                if screen == Screen::Gallery {
                    self.load_gallery();
                }
            }
            Err(err) => self.set_status(Status::Error(err.to_string())),
        }
    }

    /// Cycle the slideshow/gallery folder through the known folders.
    pub fn next_folder(&mut self) {
        let next = self
            .folder
            .parse::<KnownFolder>()
            .map(KnownFolder::next)
            .unwrap_or(KnownFolder::Hero);
        self.folder = next.as_str().to_string();
        self.set_status(Status::Info(format!("Folder: {}", next.label())));

        match self.screen() {
            Screen::Home => {}
            Screen::Slideshow => {
                let result = match self.page.carousel_mut() {
                    Some(carousel) => carousel.set_folder(self.folder.clone()),
                    None => Ok(None),
                };
                match result {
                    Ok(Some(pending)) => self.spawn_load(pending),
                    Ok(None) => {}
                    Err(err) => self.set_status(Status::Error(err.to_string())),
                }
            }
            Screen::Gallery => self.load_gallery(),
        }
    }

    /// Manual navigation relative to the displayed image.
    pub fn step_slide(&mut self, delta: isize) {
        let Some(carousel) = self.page.carousel_mut() else {
            return;
        };
        let len = carousel.images().len();
        let Some(current) = carousel.state().display_index(len) else {
            return;
        };
        let target = (current as isize + delta).rem_euclid(len as isize) as usize;
        carousel.select(target);
    }

    /// Re-fetch whatever the current screen shows.
    pub fn reload(&mut self) {
        if self.screen() == Screen::Gallery {
            self.load_gallery();
            return;
        }
        let pending = self.page.carousel_mut().map(|carousel| carousel.begin_load());
        if let Some(pending) = pending {
            self.spawn_load(pending);
        }
    }

    /// Fetch the gallery list of the current folder.
    pub fn load_gallery(&mut self) {
        self.gallery = GalleryState::loading(&self.folder);
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        let folder = self.folder.clone();
        tokio::spawn(async move {
            let result = client
                .list_images(&folder)
                .await
                .map_err(|err| err.user_message());
            let _ = tx.send(AppMessage::GalleryLoaded { folder, result });
        });
    }

    /// Delete the highlighted gallery image. Admin only.
    pub fn delete_selected(&mut self) {
        let session = match self.session.as_ref() {
            Some(session) => session,
            None => {
                self.set_status(Status::Error(AuthError::NotLoggedIn.user_message()));
                return;
            }
        };
        if let Err(err) = session.require_admin() {
            self.set_status(Status::Error(err.user_message()));
            return;
        }
        let Some(url) = self.gallery.selected_url().map(str::to_string) else {
            return;
        };

        let token = session.token.clone();
        let client = self.client.clone();
        let tx = self.message_tx.clone();
        self.set_status(Status::Info(format!("Deleting {}…", url)));
        tokio::spawn(async move {
            let result = client
                .delete_image_by_url(&url, &token)
                .await
                .map(|id| id.get())
                .map_err(|err| err.user_message());
            let _ = tx.send(AppMessage::ImageDeleted { url, result });
        });
    }
}
