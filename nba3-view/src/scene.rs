//! The narrative scenes the dashboard steps through.
//!
//! Four guided scenes tell the league-wide story; the last one hands over
//! to the interactive explorer. Navigation is bounds-checked: stepping past
//! either end is an error and leaves the current scene in place.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scene {
    #[default]
    Overview,
    Evolution,
    Players,
    Efficiency,
    Explorer,
}

/// A scene move that would leave the sequence.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneNavError {
    #[error("scene {0} does not exist (there are {count})", count = Scene::ALL.len())]
    NoSuchScene(usize),

    #[error("already at the first scene")]
    AtFirst,

    #[error("already at the last scene")]
    AtLast,
}

impl Scene {
    pub const ALL: [Scene; 5] = [
        Scene::Overview,
        Scene::Evolution,
        Scene::Players,
        Scene::Efficiency,
        Scene::Explorer,
    ];

    /// Zero-based position in [`Scene::ALL`].
    pub fn index(self) -> usize {
        match self {
            Scene::Overview => 0,
            Scene::Evolution => 1,
            Scene::Players => 2,
            Scene::Efficiency => 3,
            Scene::Explorer => 4,
        }
    }

    pub fn from_index(index: usize) -> Result<Scene, SceneNavError> {
        Scene::ALL
            .get(index)
            .copied()
            .ok_or(SceneNavError::NoSuchScene(index))
    }

    pub fn next(self) -> Result<Scene, SceneNavError> {
        Scene::from_index(self.index() + 1).map_err(|_| SceneNavError::AtLast)
    }

    pub fn prev(self) -> Result<Scene, SceneNavError> {
        match self.index() {
            0 => Err(SceneNavError::AtFirst),
            i => Scene::from_index(i - 1),
        }
    }

    pub fn is_first(self) -> bool {
        self.index() == 0
    }

    pub fn is_last(self) -> bool {
        self.index() == Scene::ALL.len() - 1
    }

    /// Navigation pill label.
    pub fn label(self) -> &'static str {
        match self {
            Scene::Overview => "Overview",
            Scene::Evolution => "Evolution",
            Scene::Players => "Players",
            Scene::Efficiency => "Efficiency",
            Scene::Explorer => "Explorer",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Scene::Overview => "The Great Transformation",
            Scene::Evolution => "Evolution Timeline",
            Scene::Players => "Revolutionary Players",
            Scene::Efficiency => "The Efficiency Revolution",
            Scene::Explorer => "Interactive Explorer",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Scene::Overview => {
                "From mid-range masters to three-point revolutionaries - see how basketball fundamentally changed"
            }
            Scene::Evolution => {
                "Watch the three-point revolution unfold year by year across the entire league"
            }
            Scene::Players => "Meet the sharpshooters who led the charge and redefined basketball",
            Scene::Efficiency => "Why teams embraced the three-pointer: it's simply more effective",
            Scene::Explorer => {
                "Dive deep into the data - explore players, compare eras, and discover insights"
            }
        }
    }
}
