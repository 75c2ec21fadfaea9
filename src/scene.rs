//! Room scenes: authored backgrounds plus one optional generated background.

use alloc::string::String;
use alloc::vec::Vec;

use crate::drag::DragConstraints;

/// Soft light cone drawn over gallery-style scenes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spotlight {
    /// Cone center as fractions of the room image.
    pub center_x: f64,
    pub center_y: f64,
    /// Radius as a fraction of the room width.
    pub radius: f64,
    /// Peak brightness added, 0–1.
    pub intensity: f64,
}

/// An authored scene shipped with the site.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StaticScene {
    pub id: &'static str,
    pub name: &'static str,
    pub thumbnail: &'static str,
    pub background: &'static str,
    pub constraints: DragConstraints,
    /// CSS background shown while (or if) the photo fails to load.
    pub fallback_gradient: &'static str,
    pub spotlight: Option<Spotlight>,
}

/// A scene whose background came from the image-generation service.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratedScene {
    pub id: String,
    /// URL or data URI returned by the generator.
    pub background: String,
    pub constraints: DragConstraints,
}

/// Id given to the generated scene inside a [`SceneCatalog`].
pub const GENERATED_SCENE_ID: &str = "custom";

/// Wall region used for generated rooms, whose layout is unknown.
pub const GENERATED_CONSTRAINTS: DragConstraints = DragConstraints {
    min_x: 0.10,
    max_x: 0.90,
    min_y: 0.10,
    max_y: 0.65,
};

const GENERATED_FALLBACK: &str = "linear-gradient(180deg, #e7e2da 0%, #cfc7bb 100%)";

/// A room the artwork can be previewed in.
#[derive(Clone, Debug, PartialEq)]
pub enum RoomScene {
    Static(StaticScene),
    Generated(GeneratedScene),
}

impl RoomScene {
    pub fn id(&self) -> &str {
        match self {
            Self::Static(s) => s.id,
            Self::Generated(g) => &g.id,
        }
    }

    pub fn background(&self) -> &str {
        match self {
            Self::Static(s) => s.background,
            Self::Generated(g) => &g.background,
        }
    }

    /// Generated scenes have no separate thumbnail; the background doubles as one.
    pub fn thumbnail(&self) -> &str {
        match self {
            Self::Static(s) => s.thumbnail,
            Self::Generated(g) => &g.background,
        }
    }

    pub fn constraints(&self) -> DragConstraints {
        match self {
            Self::Static(s) => s.constraints,
            Self::Generated(g) => g.constraints,
        }
    }

    pub fn fallback_gradient(&self) -> &'static str {
        match self {
            Self::Static(s) => s.fallback_gradient,
            Self::Generated(_) => GENERATED_FALLBACK,
        }
    }

    pub fn spotlight(&self) -> Option<Spotlight> {
        match self {
            Self::Static(s) => s.spotlight,
            Self::Generated(_) => None,
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, Self::Generated(_))
    }
}

/// Scenes shipped with the site, in display order.
pub const STATIC_SCENES: &[StaticScene] = &[
    StaticScene {
        id: "living-room",
        name: "Living Room",
        thumbnail: "/rooms/living-room-thumb.jpg",
        background: "/rooms/living-room.jpg",
        constraints: DragConstraints {
            min_x: 0.05,
            max_x: 0.95,
            min_y: 0.05,
            max_y: 0.70,
        },
        fallback_gradient: "linear-gradient(180deg, #f5f1ea 0%, #f5f1ea 72%, #8b6f4e 72%, #6e5238 100%)",
        spotlight: None,
    },
    StaticScene {
        id: "bedroom",
        name: "Bedroom",
        thumbnail: "/rooms/bedroom-thumb.jpg",
        background: "/rooms/bedroom.jpg",
        constraints: DragConstraints {
            min_x: 0.10,
            max_x: 0.90,
            min_y: 0.05,
            max_y: 0.55,
        },
        fallback_gradient: "linear-gradient(180deg, #eef0f2 0%, #eef0f2 60%, #c9c2b8 60%, #a79f94 100%)",
        spotlight: None,
    },
    StaticScene {
        id: "office",
        name: "Office",
        thumbnail: "/rooms/office-thumb.jpg",
        background: "/rooms/office.jpg",
        constraints: DragConstraints {
            min_x: 0.08,
            max_x: 0.92,
            min_y: 0.05,
            max_y: 0.60,
        },
        fallback_gradient: "linear-gradient(180deg, #e9e6e1 0%, #e9e6e1 68%, #5b5149 68%, #3f3731 100%)",
        spotlight: None,
    },
    StaticScene {
        id: "gallery",
        name: "Gallery",
        thumbnail: "/rooms/gallery-thumb.jpg",
        background: "/rooms/gallery.jpg",
        constraints: DragConstraints {
            min_x: 0.05,
            max_x: 0.95,
            min_y: 0.08,
            max_y: 0.75,
        },
        fallback_gradient: "linear-gradient(180deg, #fafafa 0%, #fafafa 78%, #bdb8b1 78%, #9d978f 100%)",
        spotlight: Some(Spotlight {
            center_x: 0.5,
            center_y: 0.3,
            radius: 0.35,
            intensity: 0.25,
        }),
    },
];

/// The scene strip: static scenes followed by at most one generated scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneCatalog {
    scenes: Vec<RoomScene>,
}

impl Default for SceneCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneCatalog {
    /// Catalog holding [`STATIC_SCENES`].
    pub fn new() -> Self {
        Self::from_static(STATIC_SCENES)
    }

    pub fn from_static(scenes: &[StaticScene]) -> Self {
        Self {
            scenes: scenes.iter().copied().map(RoomScene::Static).collect(),
        }
    }

    /// Add the generated background, replacing any earlier one.
    pub fn set_generated(&mut self, background: impl Into<String>) -> &RoomScene {
        self.clear_generated();
        self.scenes.push(RoomScene::Generated(GeneratedScene {
            id: String::from(GENERATED_SCENE_ID),
            background: background.into(),
            constraints: GENERATED_CONSTRAINTS,
        }));
        tracing::debug!(scenes = self.scenes.len(), "generated room scene added");
        &self.scenes[self.scenes.len() - 1]
    }

    /// Drop the generated scene, if any.
    pub fn clear_generated(&mut self) {
        self.scenes.retain(|s| !s.is_generated());
    }

    pub fn generated(&self) -> Option<&RoomScene> {
        self.scenes.iter().find(|s| s.is_generated())
    }

    pub fn get(&self, id: &str) -> Option<&RoomScene> {
        self.scenes.iter().find(|s| s.id() == id)
    }

    /// First scene, the one shown on open.
    pub fn first(&self) -> Option<&RoomScene> {
        self.scenes.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoomScene> {
        self.scenes.iter()
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }
}
