//! Game art tables and texture loading

use std::collections::HashMap;
use std::path::Path;

use lawn_engine::assets::{AssetError, Texture, TextureCatalog, TextureConfig};

use crate::error::GameError;

/// Plant sprite sources, keyed by art id
pub const PLANT_IMAGES: &[(&str, &str)] = &[
    ("bonkchoy", "plants/bonk-choy.png"),
    ("chomper", "plants/chomper.png"),
    ("five", "plants/pea-five.png"),
    ("gatling", "plants/pea-gatling.png"),
    ("icequeen", "plants/pea-ice-queen.png"),
    ("pea", "plants/pea-bullet.png"),
    ("shooter", "plants/pea-plain.png"),
    ("snapdragon", "plants/snapdragon.png"),
    ("sunflower", "plants/sunflower.png"),
    ("threepeater", "plants/pea-three.png"),
    ("viking", "plants/pea-viking.png"),
];

/// Zombie sprite sources, keyed by art id
pub const ZOMB_IMAGES: &[(&str, &str)] = &[
    ("adventurer", "zombs/adventurer.png"),
    ("advskull", "zombs/adventure-skull.png"),
    ("cowboy", "zombs/cowboy.png"),
    ("flag", "zombs/flag.png"),
    ("glitter", "zombs/glitter.png"),
    ("jestercake", "zombs/jester-cake.png"),
    ("jetpack", "zombs/jetpack.png"),
    ("onbird", "zombs/onbird.png"),
    ("parka", "zombs/parka.png"),
    ("pirate", "zombs/pirate.png"),
    ("suit", "zombs/suit.png"),
    ("twilight", "zombs/twilight.png"),
];

/// Miscellaneous sprite sources (terrain sheets)
pub const MISC_IMAGES: &[(&str, &str)] = &[("ground", "ground.png")];

/// All loaded game textures, grouped by category
pub struct Textures {
    /// Plant art by id
    pub plants: HashMap<String, Texture>,

    /// Zombie art by id
    pub zombs: HashMap<String, Texture>,

    /// Terrain sheets by id
    pub misc: HashMap<String, Texture>,
}

impl Textures {
    /// Load every game texture under `root`
    ///
    /// Join-all-then-proceed: the first missing or undecodable image aborts
    /// startup.
    pub fn load(
        catalog: &mut TextureCatalog,
        root: &Path,
        config: &TextureConfig,
    ) -> Result<Self, AssetError> {
        Ok(Self {
            plants: catalog.load_keyed(root, PLANT_IMAGES, config)?,
            zombs: catalog.load_keyed(root, ZOMB_IMAGES, config)?,
            misc: catalog.load_keyed(root, MISC_IMAGES, config)?,
        })
    }

    /// Look up plant art by id
    pub fn plant(&self, art: &str) -> Result<Texture, GameError> {
        self.plants
            .get(art)
            .copied()
            .ok_or_else(|| GameError::UnknownArt(art.to_string()))
    }

    /// Look up zombie art by id
    pub fn zomb(&self, art: &str) -> Result<Texture, GameError> {
        self.zombs
            .get(art)
            .copied()
            .ok_or_else(|| GameError::UnknownArt(art.to_string()))
    }

    /// Look up a terrain sheet by id
    pub fn misc(&self, art: &str) -> Result<Texture, GameError> {
        self.misc
            .get(art)
            .copied()
            .ok_or_else(|| GameError::UnknownArt(art.to_string()))
    }
}

#[cfg(test)]
pub(crate) fn placeholder_textures(catalog: &mut TextureCatalog) -> Textures {
    // Stand-in sheets with the footprint of real unit art: 150 units wide so
    // adjacent grid columns (200 apart) start disjoint.
    let config = TextureConfig::default();
    let mut keyed = |sources: &[(&str, &str)], width, height| {
        sources
            .iter()
            .map(|(key, _)| ((*key).to_string(), catalog.solid(width, height, &config)))
            .collect::<HashMap<_, _>>()
    };
    Textures {
        plants: keyed(PLANT_IMAGES, 150, 200),
        zombs: keyed(ZOMB_IMAGES, 150, 200),
        misc: keyed(MISC_IMAGES, 512, 512),
    }
}
