//! Mouse interaction.

mod hit_area;

pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
