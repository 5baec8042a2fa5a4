//! JSON metadata sidecar written next to each image.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, StarError};

use super::star::RenderedStar;

/// Serialized description of a render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarMeta {
    pub name: String,
    #[serde(rename = "type")]
    pub star_type: String,
    pub seed: u64,
    pub diameter: i32,
    /// Pixel size of the written image.
    pub width: u32,
    pub height: u32,
    pub palette: Vec<PaletteEntry>,
}

/// One named palette colour as a hex string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaletteEntry {
    pub name: String,
    pub colour: String,
}

impl StarMeta {
    /// Describe a render whose written image is `width x height`.
    pub fn from_star(star: &RenderedStar, width: u32, height: u32) -> Self {
        let palette = star
            .palette
            .iter()
            .map(|(name, colour)| PaletteEntry {
                name: name.to_string(),
                colour: colour.to_string(),
            })
            .collect();

        Self {
            name: star.name.clone(),
            star_type: star.star_type.to_string(),
            seed: star.seed,
            diameter: star.diameter,
            width,
            height,
            palette,
        }
    }
}

/// Write metadata as pretty-printed JSON.
pub fn write_metadata(meta: &StarMeta, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(meta).map_err(|e| StarError::Build {
        message: format!("Failed to serialize star metadata: {}", e),
        help: None,
    })?;
    fs::write(path, json).map_err(|e| StarError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write star metadata: {}", e),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render_star, RenderRequest};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn test_meta_from_star() {
        let star = render_star(&RenderRequest::new("RedGiant", 40, 77)).unwrap();
        let meta = StarMeta::from_star(&star, 80, 80);

        assert_eq!(
            meta,
            StarMeta {
                name: "RedGiant".to_string(),
                star_type: "RedGiant".to_string(),
                seed: 77,
                diameter: 40,
                width: 80,
                height: 80,
                palette: vec![
                    PaletteEntry {
                        name: "core".to_string(),
                        colour: "#FF2200".to_string(),
                    },
                    PaletteEntry {
                        name: "surface".to_string(),
                        colour: "#FF5500".to_string(),
                    },
                    PaletteEntry {
                        name: "corona".to_string(),
                        colour: "#FF8844".to_string(),
                    },
                ],
            }
        );
    }

    #[test]
    fn test_write_metadata() {
        let star = render_star(&RenderRequest::new("WhiteDwarf", 30, 5)).unwrap();
        let meta = StarMeta::from_star(&star, 30, 30);

        let dir = tempdir().unwrap();
        let path = dir.path().join("star.json");
        write_metadata(&meta, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(parsed["type"], "WhiteDwarf");
        assert_eq!(parsed["seed"], 5);
        assert_eq!(parsed["diameter"], 30);
        assert_eq!(parsed["palette"][0]["name"], "core");
        assert_eq!(parsed["palette"][0]["colour"], "#FFFFFF");
    }
}
