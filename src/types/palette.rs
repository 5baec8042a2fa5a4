//! Colour palette for a star type.

use crate::error::{Result, StarError};

use super::Colour;

/// Name of the mandatory palette entry.
pub const CORE: &str = "core";

/// A named colour table. The `core` entry always exists.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourPalette {
    /// Colours in declaration order, `core` first.
    colours: Vec<(String, Colour)>,
}

impl ColourPalette {
    /// Create a palette with the required core colour.
    pub fn new(core: Colour) -> Self {
        Self {
            colours: vec![(CORE.to_string(), core)],
        }
    }

    /// Build a palette from `(name, "#rrggbb")` pairs.
    ///
    /// Fails when no `core` entry is present or a colour does not parse.
    pub fn from_hex_pairs(pairs: &[(&str, &str)]) -> Result<Self> {
        let core_hex = pairs
            .iter()
            .find(|(name, _)| *name == CORE)
            .map(|(_, hex)| *hex)
            .ok_or_else(|| StarError::Parse {
                message: "palette has no core colour".to_string(),
                help: Some("Every palette must define a \"core\" entry".to_string()),
            })?;

        let mut palette = Self::new(core_hex.parse()?);
        for (name, hex) in pairs.iter().filter(|(name, _)| *name != CORE) {
            palette = palette.with(*name, hex.parse()?);
        }
        Ok(palette)
    }

    /// Add or replace a named colour.
    pub fn with(mut self, name: impl Into<String>, colour: Colour) -> Self {
        let name = name.into();
        match self.colours.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = colour,
            None => self.colours.push((name, colour)),
        }
        self
    }

    /// The core colour.
    pub fn core(&self) -> Colour {
        self.colours[0].1
    }

    /// Get a colour by name.
    pub fn get(&self, name: &str) -> Option<Colour> {
        self.colours
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, c)| *c)
    }

    /// Get a colour by name, falling back to `core` when absent.
    pub fn get_or_core(&self, name: &str) -> Colour {
        self.get(name).unwrap_or_else(|| self.core())
    }

    /// Whether the palette defines a colour.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate `(name, colour)` entries in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Colour)> {
        self.colours.iter().map(|(n, c)| (n.as_str(), *c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex_pairs() {
        let palette = ColourPalette::from_hex_pairs(&[
            ("surface", "#ffffcc"),
            ("core", "#ffff66"),
        ])
        .unwrap();

        assert_eq!(palette.core(), Colour::rgb(255, 255, 0x66));
        assert_eq!(palette.get("surface"), Some(Colour::rgb(255, 255, 0xcc)));
        // core is always listed first
        assert_eq!(palette.iter().next().map(|(n, _)| n), Some("core"));
    }

    #[test]
    fn test_bad_hex_is_rejected() {
        let result = ColourPalette::from_hex_pairs(&[("core", "#ffff6")]);
        assert!(matches!(result, Err(StarError::Parse { .. })));
    }

    #[test]
    fn test_missing_core_is_rejected() {
        let result = ColourPalette::from_hex_pairs(&[("corona", "#ffffff")]);
        assert!(matches!(result, Err(StarError::Parse { .. })));
    }

    #[test]
    fn test_get_or_core_falls_back() {
        let palette = ColourPalette::new(Colour::rgb(1, 2, 3));
        assert_eq!(palette.get("corona"), None);
        assert_eq!(palette.get_or_core("corona"), Colour::rgb(1, 2, 3));

        let palette = palette.with("corona", Colour::WHITE);
        assert_eq!(palette.get_or_core("corona"), Colour::WHITE);
    }

    #[test]
    fn test_with_replaces_existing() {
        let palette = ColourPalette::new(Colour::BLACK).with("core", Colour::WHITE);
        assert_eq!(palette.iter().count(), 1);
        assert_eq!(palette.core(), Colour::WHITE);
    }
}
