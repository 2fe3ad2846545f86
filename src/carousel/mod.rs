//! Rotating image carousel.
//!
//! The pieces, bottom up:
//!
//! - [`state`]: `CarouselState` and the shared `CarouselStore` handle
//! - [`provider`]: the scope that makes one store visible to every consumer
//!   mounted under it, and `use_carousel()`
//! - [`cycle`]: the `Idle -> Fading -> Idle` machine for one automatic advance
//! - [`ticker`]: the tokio task that drives the cycle for a mounted renderer
//! - [`renderer`]: folder in, `CarouselView` out
//!
//! Several renderers mounted under the same provider share one index, so a
//! background carousel and a foreground slideshow stay in step.

pub mod cycle;
pub mod provider;
pub mod renderer;
pub mod state;
pub mod ticker;

use std::time::Duration;

use thiserror::Error;

pub use cycle::{CarouselCycle, CyclePhase, CycleStep};
pub use provider::{try_use_carousel, use_carousel, CarouselProvider, ProviderGuard};
pub use renderer::{
    placeholder_message, CarouselMode, CarouselProps, CarouselRenderer, CarouselView, Dot,
    Layer, LoadState, LoadedImages, PendingLoad, SlideView,
};
pub use state::{CarouselState, CarouselStore, IndexUpdate};
pub use ticker::Ticker;

/// Default time between automatic advances.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(5000);

/// Length of the fade between leaving one image and showing the next.
pub const FADE_DURATION: Duration = Duration::from_millis(500);

/// CSS-equivalent opacity transition of background layers.
pub const BACKGROUND_TRANSITION: Duration = Duration::from_millis(800);

/// CSS-equivalent opacity transition of foreground layers.
pub const FOREGROUND_TRANSITION: Duration = Duration::from_millis(500);

/// Carousel store misuse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CarouselError {
    /// The store was requested with no provider scope active.
    #[error("use_carousel must be called within a CarouselProvider scope")]
    OutsideProvider,
}
