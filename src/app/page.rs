//! Screens and the page-view that owns a screen's carousel.

use std::sync::Arc;
use std::time::Duration;

use crate::carousel::{
    CarouselProps, CarouselProvider, CarouselRenderer, CarouselStore, CarouselView, PendingLoad,
};
use crate::config::ConfigError;
use crate::gallery::ImageSource;

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Landing page over a background carousel
    Home,
    /// Foreground slideshow of the selected folder
    Slideshow,
    /// Static list of the selected folder, with admin actions
    Gallery,
}

impl Screen {
    pub const ALL: [Screen; 3] = [Screen::Home, Screen::Slideshow, Screen::Gallery];

    pub fn title(&self) -> &'static str {
        match self {
            Screen::Home => "Home",
            Screen::Slideshow => "Slideshow",
            Screen::Gallery => "Gallery",
        }
    }

    /// The screen after this one, wrapping.
    pub fn next(self) -> Self {
        match self {
            Screen::Home => Screen::Slideshow,
            Screen::Slideshow => Screen::Gallery,
            Screen::Gallery => Screen::Home,
        }
    }
}

/// One page-view: the carousel mounted for a screen.
///
/// Pages are mounted under the app's provider, so the carousel index carries
/// over from one screen to the next.
#[derive(Debug)]
pub struct Page {
    id: u64,
    screen: Screen,
    store: CarouselStore,
    carousel: Option<CarouselRenderer>,
}

impl Page {
    /// Build the page for `screen` and start its first listing.
    pub fn open(
        id: u64,
        screen: Screen,
        folder: &str,
        interval: Duration,
        provider: &CarouselProvider,
        source: Arc<dyn ImageSource>,
    ) -> Result<(Self, Option<PendingLoad>), ConfigError> {
        let props = match screen {
            Screen::Home => Some(
                CarouselProps::new(folder)?
                    .with_interval(interval)?
                    .with_content(),
            ),
            Screen::Slideshow => Some(CarouselProps::new(folder)?.with_interval(interval)?),
            Screen::Gallery => None,
        };

        let mut carousel =
            props.map(|props| provider.scope(|| CarouselRenderer::new(props, source)));
        let pending = carousel.as_mut().map(CarouselRenderer::begin_mount);

        tracing::debug!(id, screen = screen.title(), folder, "page opened");
        Ok((
            Self {
                id,
                screen,
                store: provider.store().clone(),
                carousel,
            },
            pending,
        ))
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn store(&self) -> &CarouselStore {
        &self.store
    }

    pub fn carousel(&self) -> Option<&CarouselRenderer> {
        self.carousel.as_ref()
    }

    pub fn carousel_mut(&mut self) -> Option<&mut CarouselRenderer> {
        self.carousel.as_mut()
    }

    /// Current carousel view, if the page has a carousel.
    pub fn view(&self) -> Option<CarouselView> {
        self.carousel.as_ref().map(CarouselRenderer::view)
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        if let Some(carousel) = self.carousel.as_mut() {
            carousel.unmount();
        }
    }
}
