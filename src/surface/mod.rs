//! Surface generators - paint a textured star body onto a circular canvas.
//!
//! The set of star types is closed and known at compile time: [`StarType`]
//! names every variant and hands out its [`SurfaceGenerator`]. Adding a type
//! means a new generator module plus one enum arm; the render pipeline only
//! ever talks to the trait.

pub mod features;
mod red_giant;
mod regular;
mod white_dwarf;

use std::fmt;
use std::str::FromStr;

use crate::canvas::PixelCanvas;
use crate::error::{Result, StarError};
use crate::rng::StarRng;
use crate::types::ColourPalette;

pub use red_giant::RedGiantStar;
pub use regular::RegularStar;
pub use white_dwarf::WhiteDwarfStar;

/// Paints one star type.
///
/// Implementations hold no state between calls: `generate` depends only on
/// `size` and the random stream.
pub trait SurfaceGenerator: Send + Sync {
    /// Stable, case-sensitive type name.
    fn name(&self) -> &'static str;

    /// Palette as `(name, "#rrggbb")` pairs. Must include `core`.
    fn colours(&self) -> &'static [(&'static str, &'static str)];

    /// Parsed colour palette.
    fn palette(&self) -> Result<ColourPalette> {
        ColourPalette::from_hex_pairs(self.colours())
    }

    /// Paint a body of diameter `size` onto a `size x size` canvas.
    fn generate(&self, size: i32, rng: &mut StarRng) -> Result<PixelCanvas>;
}

/// Every star type with a registered generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StarType {
    Regular,
    RedGiant,
    WhiteDwarf,
}

impl StarType {
    /// All registered types, in lookup order.
    pub const ALL: [StarType; 3] = [StarType::Regular, StarType::RedGiant, StarType::WhiteDwarf];

    /// The generator for this type.
    pub fn generator(self) -> &'static dyn SurfaceGenerator {
        match self {
            StarType::Regular => &RegularStar,
            StarType::RedGiant => &RedGiantStar,
            StarType::WhiteDwarf => &WhiteDwarfStar,
        }
    }

    /// The type's name, as reported by its generator.
    pub fn name(self) -> &'static str {
        self.generator().name()
    }

    /// Resolve a type by exact name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == name)
            .ok_or_else(|| StarError::UnknownSurfaceType {
                name: name.to_string(),
                help: Some(format!("Known types: {}", Self::names().join(", "))),
            })
    }

    /// Names of all registered types.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(|t| t.name()).collect()
    }
}

impl FromStr for StarType {
    type Err = StarError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for StarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Look up the generator for a type name.
pub fn generator_for_type(name: &str) -> Result<&'static dyn SurfaceGenerator> {
    StarType::from_name(name).map(StarType::generator)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CORE;

    #[test]
    fn test_registry_resolves_known_types() {
        for name in ["Regular", "RedGiant", "WhiteDwarf"] {
            let generator = generator_for_type(name).unwrap();
            assert_eq!(generator.name(), name);
        }
    }

    #[test]
    fn test_registry_rejects_unknown_type() {
        let err = generator_for_type("Unknown").err().unwrap();
        assert!(matches!(err, StarError::UnknownSurfaceType { ref name, .. } if name == "Unknown"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        assert!(StarType::from_name("regular").is_err());
        assert!(StarType::from_name("REDGIANT").is_err());
    }

    #[test]
    fn test_every_palette_has_core() {
        for star_type in StarType::ALL {
            assert!(star_type.generator().palette().unwrap().contains(CORE), "{star_type}");
        }
    }

    #[test]
    fn test_names_are_unique() {
        let mut names = StarType::names();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), StarType::ALL.len());
    }

    #[test]
    fn test_from_str_round_trip() {
        for star_type in StarType::ALL {
            let parsed: StarType = star_type.to_string().parse().unwrap();
            assert_eq!(parsed, star_type);
        }
    }

    #[test]
    fn test_generate_is_deterministic_per_type() {
        for star_type in StarType::ALL {
            let generator = star_type.generator();
            let a = generator.generate(64, &mut StarRng::seeded(12345)).unwrap();
            let b = generator.generate(64, &mut StarRng::seeded(12345)).unwrap();
            assert_eq!(a, b, "{star_type}");
            assert_eq!(a.size(), (64, 64));
        }
    }

    #[test]
    fn test_generate_paints_a_disc() {
        for star_type in StarType::ALL {
            let canvas = star_type
                .generator()
                .generate(400, &mut StarRng::seeded(7))
                .unwrap();
            assert!(canvas.get(200, 200).unwrap().is_opaque(), "{star_type}");
            assert!(canvas.get(0, 0).unwrap().is_transparent(), "{star_type}");

            // Flares may spill past the rim; prominence extensions reach further
            let reach = match star_type {
                StarType::RedGiant => 245.0,
                _ => 215.0,
            };
            let stray = canvas.iter_pixels().find(|(x, y, c)| {
                let dx = *x as f64 - 200.0;
                let dy = *y as f64 - 200.0;
                (dx * dx + dy * dy).sqrt() > reach && !c.is_transparent()
            });
            assert_eq!(stray, None, "{star_type}");
        }
    }

    #[test]
    fn test_generate_rejects_zero_size() {
        for star_type in StarType::ALL {
            let result = star_type.generator().generate(0, &mut StarRng::seeded(1));
            assert!(matches!(result, Err(StarError::InvalidDimension { .. })));
        }
    }
}
