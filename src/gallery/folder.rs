//! The folders the portfolio site serves images from.

use std::fmt;
use std::str::FromStr;

use super::GalleryError;

/// A folder the API accepts uploads for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KnownFolder {
    /// Home page background.
    Hero,
    /// About page.
    About,
    /// Car build log.
    CarBuild,
    /// General gallery.
    Gallery,
}

impl KnownFolder {
    /// Every folder, in the order the UI cycles through them.
    pub const ALL: [KnownFolder; 4] = [
        KnownFolder::Hero,
        KnownFolder::About,
        KnownFolder::CarBuild,
        KnownFolder::Gallery,
    ];

    /// Wire name of the folder.
    pub fn as_str(&self) -> &'static str {
        match self {
            KnownFolder::Hero => "hero",
            KnownFolder::About => "about",
            KnownFolder::CarBuild => "carbuild",
            KnownFolder::Gallery => "gallery",
        }
    }

    /// Title shown in the UI.
    pub fn label(&self) -> &'static str {
        match self {
            KnownFolder::Hero => "Home",
            KnownFolder::About => "About",
            KnownFolder::CarBuild => "Car Build",
            KnownFolder::Gallery => "Gallery",
        }
    }

    /// The folder after this one, wrapping.
    pub fn next(self) -> Self {
        let position = Self::ALL.iter().position(|f| *f == self).unwrap_or(0);
        Self::ALL[(position + 1) % Self::ALL.len()]
    }
}

impl fmt::Display for KnownFolder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KnownFolder {
    type Err = GalleryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|folder| folder.as_str() == s)
            .ok_or_else(|| GalleryError::UnknownFolder(s.to_string()))
    }
}
