//! Application state for the folio TUI.

mod handlers;
mod messages;
mod page;

pub use messages::AppMessage;
pub use page::{Page, Screen};

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::auth::Session;
use crate::carousel::{CarouselProvider, PendingLoad};
use crate::config::{ConfigError, FolioConfig};
use crate::gallery::{GalleryClient, ImageSet, ImageSource};
use crate::traits::HttpClient;
use crate::ui::interaction::HitAreaRegistry;

/// One-line message in the footer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Info(String),
    Error(String),
}

/// The gallery list screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryState {
    pub images: ImageSet,
    pub selected: usize,
    pub loading: bool,
    pub error: Option<String>,
}

impl GalleryState {
    fn loading(folder: &str) -> Self {
        Self {
            images: ImageSet::empty(folder),
            selected: 0,
            loading: true,
            error: None,
        }
    }

    /// URL of the highlighted row.
    pub fn selected_url(&self) -> Option<&str> {
        self.images.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.images.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

/// Main application state.
pub struct App {
    /// Runtime configuration
    pub config: FolioConfig,
    /// Folder of the slideshow and gallery screens
    pub folder: String,
    /// The page-view of the current screen
    pub page: Page,
    /// Gallery list state
    pub gallery: GalleryState,
    /// Cached login, if any
    pub session: Option<Session>,
    /// Footer message
    pub status: Option<Status>,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Set when state changed and the next loop iteration must draw
    pub needs_redraw: bool,
    /// Frames since start
    pub tick_count: u64,
    /// Clickable regions of the last frame
    pub hit_areas: HitAreaRegistry,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    client: GalleryClient,
    source: Arc<dyn ImageSource>,
    provider: CarouselProvider,
    next_page_id: u64,
    seen_version: u64,
}

impl App {
    /// Create the app on the home screen and start its listing.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(
        config: FolioConfig,
        http: Arc<dyn HttpClient>,
        session: Option<Session>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let client = GalleryClient::new(http, config.api_url.clone());
        let source: Arc<dyn ImageSource> = Arc::new(client.clone());
        Self::with_source(config, client, source, session)
    }

    /// Create the app with an explicit carousel image source.
    pub fn with_source(
        config: FolioConfig,
        client: GalleryClient,
        source: Arc<dyn ImageSource>,
        session: Option<Session>,
    ) -> Result<Self, ConfigError> {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        let provider = CarouselProvider::new();
        let (page, pending) = Page::open(
            1,
            Screen::Home,
            &config.folder,
            config.interval,
            &provider,
            Arc::clone(&source),
        )?;

        let app = Self {
            folder: config.folder.clone(),
            gallery: GalleryState::loading(&config.folder),
            config,
            page,
            session,
            status: None,
            should_quit: false,
            needs_redraw: true,
            tick_count: 0,
            hit_areas: HitAreaRegistry::new(),
            message_rx: Some(message_rx),
            message_tx,
            client,
            source,
            provider,
            next_page_id: 2,
            seen_version: 0,
        };
        if let Some(pending) = pending {
            app.spawn_load(pending);
        }
        Ok(app)
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.page.screen()
    }

    /// Whether the cached session may use admin actions.
    pub fn is_admin(&self) -> bool {
        self.session.as_ref().is_some_and(Session::is_admin)
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Frame tick: redraw when the carousel store moved.
    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
        let version = self.page.store().version();
        if version != self.seen_version {
            self.seen_version = version;
            self.mark_dirty();
        }
    }

    fn set_status(&mut self, status: Status) {
        self.status = Some(status);
        self.mark_dirty();
    }

    /// Run a carousel listing in the background and report back.
    fn spawn_load(&self, pending: PendingLoad) {
        let tx = self.message_tx.clone();
        let page_id = self.page.id();
        tokio::spawn(async move {
            let loaded = pending.await;
            let _ = tx.send(AppMessage::ImagesLoaded { page_id, loaded });
        });
    }
}
