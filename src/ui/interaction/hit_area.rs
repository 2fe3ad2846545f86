//! Clickable regions.
//!
//! Widgets register hit areas while rendering; the event loop asks the
//! registry what a mouse click landed on.

use ratatui::layout::Rect;

use crate::app::Screen;

/// What a click on a hit area does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickAction {
    /// Jump the slideshow to this position (a navigation dot)
    SelectImage(usize),
    /// Open a screen (a header tab)
    SwitchScreen(Screen),
    /// Cycle to the next known folder
    NextFolder,
    /// Select a row of the gallery list
    SelectRow(usize),
}

/// A clickable region with an associated action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HitArea {
    pub rect: Rect,
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.rect.x
            && x < self.rect.x.saturating_add(self.rect.width)
            && y >= self.rect.y
            && y < self.rect.y.saturating_add(self.rect.height)
    }
}

/// Hit areas of the last rendered frame.
///
/// Cleared at the start of every render. Later registrations sit on top.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    areas: Vec<HitArea>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget every area. Call at the start of a render.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        self.areas.push(HitArea::new(rect, action));
    }

    /// Action of the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action.clone())
    }

    pub fn areas(&self) -> &[HitArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }
}
