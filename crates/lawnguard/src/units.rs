//! Unit rosters
//!
//! Static data for the shipped content. Plants hold a grid cell; zombies
//! shamble leftward at their intrinsic speed until something in their lane
//! blocks them.

/// Which art table a unit's sprite comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitSide {
    /// Stationary defenders
    Plant,

    /// Leftward-moving attackers
    Zombie,
}

/// Static description of a unit type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitSpec {
    /// Art id in the side's texture table
    pub art: &'static str,

    /// Which texture table the art id resolves against
    pub side: UnitSide,

    /// Starting health
    pub health: f32,

    /// Intrinsic horizontal speed in world units per second; zero for plants
    pub speed: f32,
}

/// Plant roster
pub mod plants {
    use super::{UnitSide, UnitSpec};

    /// Single pea shooter
    pub const SHOOTER: UnitSpec = UnitSpec {
        art: "shooter",
        side: UnitSide::Plant,
        health: 100.0,
        speed: 0.0,
    };

    /// Three-headed pea shooter
    pub const THREEPEATER: UnitSpec = UnitSpec {
        art: "threepeater",
        side: UnitSide::Plant,
        health: 100.0,
        speed: 0.0,
    };
}

/// Zombie roster
pub mod zombs {
    use super::{UnitSide, UnitSpec};

    /// Ordinary suit zombie
    pub const NORMAL: UnitSpec = UnitSpec {
        art: "suit",
        side: UnitSide::Zombie,
        health: 100.0,
        speed: -20.0,
    };

    /// Faster but frailer glitter zombie
    pub const GLITTER: UnitSpec = UnitSpec {
        art: "glitter",
        side: UnitSide::Zombie,
        health: 50.0,
        speed: -30.0,
    };
}
