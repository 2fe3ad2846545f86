//! Turns a folder of images into an auto-advancing carousel view.
//!
//! The renderer owns the image set, the load bookkeeping and the ticker of
//! one mounted carousel. It never draws anything itself: [`CarouselRenderer::view`]
//! produces a [`CarouselView`] that the UI layer turns into widgets.

use std::future::Future;
use std::num::NonZeroUsize;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};
use std::time::Duration;

use futures::future::{BoxFuture, FutureExt};

use super::cycle::CarouselCycle;
use super::provider::use_carousel;
use super::state::{CarouselState, CarouselStore};
use super::ticker::Ticker;
use super::{BACKGROUND_TRANSITION, DEFAULT_INTERVAL, FADE_DURATION, FOREGROUND_TRANSITION};
use crate::config::ConfigError;
use crate::gallery::{ImageSet, ImageSource};

/// How the carousel is composed with the rest of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselMode {
    /// Bounded slideshow with dots and a counter.
    Foreground,
    /// Full-screen layer behind other content, dimmed, no controls.
    Background,
}

impl CarouselMode {
    /// Duration of the opacity transition of one layer.
    pub fn transition(&self) -> Duration {
        match self {
            CarouselMode::Foreground => FOREGROUND_TRANSITION,
            CarouselMode::Background => BACKGROUND_TRANSITION,
        }
    }
}

/// Validated inputs of a carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselProps {
    folder: String,
    cycle: CarouselCycle,
    mode: CarouselMode,
}

impl CarouselProps {
    /// Foreground carousel over `folder` with the default interval.
    pub fn new(folder: impl Into<String>) -> Result<Self, ConfigError> {
        let folder = folder.into();
        if folder.trim().is_empty() {
            return Err(ConfigError::EmptyFolder);
        }
        Ok(Self {
            folder,
            cycle: CarouselCycle::new(DEFAULT_INTERVAL, FADE_DURATION)?,
            mode: CarouselMode::Foreground,
        })
    }

    /// Use a different advance interval. It must exceed the fade.
    pub fn with_interval(mut self, interval: Duration) -> Result<Self, ConfigError> {
        self.cycle = CarouselCycle::new(interval, FADE_DURATION)?;
        Ok(self)
    }

    /// Render behind other content.
    pub fn with_content(mut self) -> Self {
        self.mode = CarouselMode::Background;
        self
    }

    pub fn folder(&self) -> &str {
        &self.folder
    }

    pub fn interval(&self) -> Duration {
        self.cycle.interval()
    }

    pub fn mode(&self) -> CarouselMode {
        self.mode
    }
}

/// Where the image set of a renderer came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Not mounted yet, or unmounted.
    Unmounted,
    /// A listing is in flight.
    Loading,
    /// The listing succeeded (possibly with zero images).
    Loaded,
    /// The listing failed; shown as an empty set.
    Failed,
}

/// Result of a listing, tagged with the load it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImages {
    pub generation: u64,
    pub images: ImageSet,
    pub failed: bool,
}

/// A listing that has been started but not installed.
///
/// Await it (or spawn it) and hand the result to
/// [`CarouselRenderer::finish_load`].
pub struct PendingLoad {
    generation: u64,
    future: BoxFuture<'static, LoadedImages>,
}

impl PendingLoad {
    /// Load generation this listing belongs to.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl std::fmt::Debug for PendingLoad {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PendingLoad")
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

impl Future for PendingLoad {
    type Output = LoadedImages;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.future.as_mut().poll(cx)
    }
}

/// One image layer of the stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Layer {
    pub position: usize,
    pub source: String,
    /// 1.0 for the visible image, 0.0 for every other layer and during a fade.
    pub opacity: f32,
    /// Whether the layer receives clicks.
    pub interactive: bool,
}

/// A position indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dot {
    pub position: usize,
    pub active: bool,
}

/// Everything needed to draw a carousel with images.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideView {
    pub mode: CarouselMode,
    pub layers: Vec<Layer>,
    pub transition: Duration,
    /// Empty in background mode.
    pub dots: Vec<Dot>,
    /// `"<n> / <len>"`, foreground only.
    pub counter: Option<String>,
    pub dim_overlay: bool,
}

impl SlideView {
    /// The layer currently at full opacity, if any.
    pub fn visible(&self) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.opacity > 0.0)
    }
}

/// What a carousel shows right now.
#[derive(Debug, Clone, PartialEq)]
pub enum CarouselView {
    /// No images (pending, failed or empty listing).
    Placeholder { folder: String },
    Slides(SlideView),
}

impl CarouselView {
    pub fn is_placeholder(&self) -> bool {
        matches!(self, CarouselView::Placeholder { .. })
    }
}

/// Text shown when a folder has nothing to display.
pub fn placeholder_message(folder: &str) -> String {
    format!(
        "No images in '{}' yet. Upload some with `folio upload {} <files>`",
        folder, folder
    )
}

/// A mounted carousel.
pub struct CarouselRenderer {
    props: CarouselProps,
    source: Arc<dyn ImageSource>,
    store: CarouselStore,
    images: ImageSet,
    load_state: LoadState,
    generation: u64,
    ticker: Option<Ticker>,
    mounted: bool,
}

impl std::fmt::Debug for CarouselRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselRenderer")
            .field("props", &self.props)
            .field("images", &self.images.len())
            .field("load_state", &self.load_state)
            .field("generation", &self.generation)
            .field("ticking", &self.is_ticking())
            .finish()
    }
}

impl CarouselRenderer {
    /// Create a renderer bound to the store of the enclosing provider scope.
    ///
    /// # Panics
    ///
    /// Panics outside a [`CarouselProvider`](super::CarouselProvider) scope.
    pub fn new(props: CarouselProps, source: Arc<dyn ImageSource>) -> Self {
        Self::with_store(props, source, use_carousel())
    }

    /// Create a renderer bound to an explicit store.
    pub fn with_store(
        props: CarouselProps,
        source: Arc<dyn ImageSource>,
        store: CarouselStore,
    ) -> Self {
        let images = ImageSet::empty(props.folder.clone());
        Self {
            props,
            source,
            store,
            images,
            load_state: LoadState::Unmounted,
            generation: 0,
            ticker: None,
            mounted: false,
        }
    }

    pub fn props(&self) -> &CarouselProps {
        &self.props
    }

    pub fn store(&self) -> &CarouselStore {
        &self.store
    }

    /// Shared state snapshot.
    pub fn state(&self) -> CarouselState {
        self.store.get_state()
    }

    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// True while an advance loop is running.
    pub fn is_ticking(&self) -> bool {
        self.ticker.as_ref().is_some_and(Ticker::is_running)
    }

    /// Mark the renderer mounted and start the first listing.
    pub fn begin_mount(&mut self) -> PendingLoad {
        self.mounted = true;
        tracing::debug!(folder = %self.props.folder, "carousel mounted");
        self.begin_load()
    }

    /// Mount and wait for the first listing.
    pub async fn mount(&mut self) {
        let pending = self.begin_mount();
        let loaded = pending.await;
        self.finish_load(loaded);
    }

    /// Start a listing of the current folder.
    ///
    /// Cancels the ticker and clears the image set; the placeholder shows
    /// until [`finish_load`](Self::finish_load) installs the result.
    pub fn begin_load(&mut self) -> PendingLoad {
        self.stop_ticker();
        self.generation += 1;
        self.images = ImageSet::empty(self.props.folder.clone());
        self.load_state = LoadState::Loading;

        let generation = self.generation;
        let folder = self.props.folder.clone();
        let source = Arc::clone(&self.source);
        let future = async move {
            match source.list_images(&folder).await {
                Ok(images) => LoadedImages {
                    generation,
                    images: ImageSet::new(folder, images),
                    failed: false,
                },
                Err(err) => {
                    tracing::warn!(
                        folder = %folder,
                        code = err.error_code(),
                        error = %err,
                        "failed to load carousel images"
                    );
                    LoadedImages {
                        generation,
                        images: ImageSet::empty(folder),
                        failed: true,
                    }
                }
            }
        }
        .boxed();

        PendingLoad { generation, future }
    }

    /// Install a finished listing. Returns false if it was stale.
    pub fn finish_load(&mut self, loaded: LoadedImages) -> bool {
        if !self.mounted || loaded.generation != self.generation {
            tracing::debug!(
                generation = loaded.generation,
                current = self.generation,
                "dropping stale image listing"
            );
            return false;
        }

        self.images = loaded.images;
        self.load_state = if loaded.failed {
            LoadState::Failed
        } else {
            LoadState::Loaded
        };
        tracing::info!(
            folder = %self.props.folder,
            count = self.images.len(),
            "carousel images loaded"
        );
        self.start_ticker();
        true
    }

    /// Re-list the current folder.
    pub async fn load(&mut self) {
        let pending = self.begin_load();
        let loaded = pending.await;
        self.finish_load(loaded);
    }

    /// Switch to another folder. Returns the listing to run when mounted.
    ///
    /// The shared index is left alone; it is taken modulo the new length.
    pub fn set_folder(
        &mut self,
        folder: impl Into<String>,
    ) -> Result<Option<PendingLoad>, ConfigError> {
        let folder = folder.into();
        if folder.trim().is_empty() {
            return Err(ConfigError::EmptyFolder);
        }
        if folder == self.props.folder {
            return Ok(None);
        }
        tracing::debug!(from = %self.props.folder, to = %folder, "carousel folder changed");
        self.props.folder = folder;
        if !self.mounted {
            self.images = ImageSet::empty(self.props.folder.clone());
            return Ok(None);
        }
        Ok(Some(self.begin_load()))
    }

    /// Switch folder and wait for the new listing.
    pub async fn change_folder(&mut self, folder: impl Into<String>) -> Result<(), ConfigError> {
        if let Some(pending) = self.set_folder(folder)? {
            let loaded = pending.await;
            self.finish_load(loaded);
        }
        Ok(())
    }

    /// Change the advance interval, restarting the ticker.
    pub fn set_interval(&mut self, interval: Duration) -> Result<(), ConfigError> {
        if interval == self.props.interval() {
            return Ok(());
        }
        self.props.cycle = CarouselCycle::new(interval, FADE_DURATION)?;
        if self.mounted {
            self.start_ticker();
        }
        Ok(())
    }

    /// Jump to `position` from a dot.
    ///
    /// Foreground only. The ticker keeps its phase, so the next automatic
    /// advance still comes at the next interval boundary.
    pub fn select(&mut self, position: usize) -> bool {
        if self.props.mode != CarouselMode::Foreground || position >= self.images.len() {
            return false;
        }
        self.store.set_index(position);
        true
    }

    /// Stop everything. Listings still in flight are ignored when they land.
    pub fn unmount(&mut self) {
        self.stop_ticker();
        self.generation += 1;
        self.mounted = false;
        self.load_state = LoadState::Unmounted;
        tracing::debug!(folder = %self.props.folder, "carousel unmounted");
    }

    fn stop_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    fn start_ticker(&mut self) {
        self.stop_ticker();
        let Some(len) = NonZeroUsize::new(self.images.len()) else {
            return;
        };
        // A ticker cancelled mid-fade leaves the flag set; a new cycle starts idle.
        if self.store.get_state().is_transitioning {
            self.store.set_transitioning(false);
        }
        self.ticker = Some(Ticker::spawn(self.props.cycle.clone(), self.store.clone(), len));
    }

    /// Build the view for the current state.
    pub fn view(&self) -> CarouselView {
        let state = self.store.get_state();
        let Some(display) = state.display_index(self.images.len()) else {
            return CarouselView::Placeholder {
                folder: self.props.folder.clone(),
            };
        };

        let mode = self.props.mode;
        let layers = self
            .images
            .iter()
            .enumerate()
            .map(|(position, source)| {
                let current = position == display;
                Layer {
                    position,
                    source: source.to_string(),
                    opacity: if current && !state.is_transitioning {
                        1.0
                    } else {
                        0.0
                    },
                    interactive: current && mode == CarouselMode::Foreground,
                }
            })
            .collect();

        let (dots, counter) = match mode {
            CarouselMode::Foreground => (
                (0..self.images.len())
                    .map(|position| Dot {
                        position,
                        active: position == display,
                    })
                    .collect(),
                Some(format!("{} / {}", display + 1, self.images.len())),
            ),
            CarouselMode::Background => (Vec::new(), None),
        };

        CarouselView::Slides(SlideView {
            mode,
            layers,
            transition: mode.transition(),
            dots,
            counter,
            dim_overlay: mode == CarouselMode::Background,
        })
    }
}

impl Drop for CarouselRenderer {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}
