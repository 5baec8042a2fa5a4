//! Project manifest (starforge.yaml) parsing.
//!
//! The manifest lists the bodies to render along with shared output
//! settings.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StarError};
use crate::render::RenderRequest;
use crate::star::DEFAULT_SEED;

/// The name of the manifest file.
pub const MANIFEST_FILENAME: &str = "starforge.yaml";

/// Project manifest loaded from starforge.yaml.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Output directory for rendered images.
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Seed for bodies that do not set their own.
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Crop each image to the body diameter.
    #[serde(default)]
    pub crop: bool,

    /// Write a JSON sidecar next to each image.
    #[serde(default = "default_metadata")]
    pub metadata: bool,

    /// Default scale factor for output.
    #[serde(default)]
    pub scale: Option<u32>,

    /// Bodies to render, in order.
    #[serde(default)]
    pub bodies: Vec<BodySpec>,
}

/// One body entry in the manifest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodySpec {
    #[serde(rename = "type")]
    pub star_type: String,

    pub diameter: i64,

    /// Output file stem. Derived from type, diameter and seed when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

fn default_output() -> PathBuf {
    PathBuf::from("rendered")
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

fn default_metadata() -> bool {
    true
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            output: default_output(),
            seed: default_seed(),
            crop: false,
            metadata: default_metadata(),
            scale: None,
            bodies: vec![],
        }
    }
}

impl Manifest {
    /// Load manifest from a starforge.yaml file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| StarError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    /// Parse manifest from YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| StarError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check starforge.yaml syntax".to_string()),
        })
    }

    /// Serialize back to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| StarError::Build {
            message: format!("Failed to serialize manifest: {}", e),
            help: None,
        })
    }

    /// Get the effective scale factor.
    pub fn effective_scale(&self) -> u32 {
        self.scale.unwrap_or(1).max(1)
    }

    /// Seed for a body: its own, else the manifest default.
    pub fn seed_for(&self, body: &BodySpec) -> u64 {
        body.seed.unwrap_or(self.seed)
    }

    /// Render request for a body.
    pub fn request_for(&self, body: &BodySpec) -> RenderRequest {
        RenderRequest::new(body.star_type.clone(), body.diameter, self.seed_for(body))
    }

    /// Output file stem for a body.
    pub fn file_stem(&self, body: &BodySpec) -> String {
        match &body.name {
            Some(name) => name.clone(),
            None => default_stem(&body.star_type, body.diameter, self.seed_for(body)),
        }
    }
}

/// File stem for an unnamed body, e.g. `redgiant-300-7`.
pub fn default_stem(star_type: &str, diameter: i64, seed: u64) -> String {
    format!("{}-{}-{}", star_type.to_lowercase(), diameter, seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_minimal_manifest() {
        let yaml = "output: build";
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.output, PathBuf::from("build"));
        assert_eq!(manifest.seed, DEFAULT_SEED);
        assert!(manifest.bodies.is_empty());
        assert!(manifest.metadata);
    }

    #[test]
    fn test_parse_full_manifest() {
        let yaml = r#"
output: out/stars
seed: 99
crop: true
metadata: false
scale: 2
bodies:
  - type: Regular
    diameter: 300
    name: sol
    seed: 7
  - type: RedGiant
    diameter: 250
"#;
        let manifest = Manifest::parse(yaml).unwrap();

        assert_eq!(manifest.output, PathBuf::from("out/stars"));
        assert_eq!(manifest.seed, 99);
        assert!(manifest.crop);
        assert!(!manifest.metadata);
        assert_eq!(manifest.effective_scale(), 2);
        assert_eq!(
            manifest.bodies,
            vec![
                BodySpec {
                    star_type: "Regular".to_string(),
                    diameter: 300,
                    name: Some("sol".to_string()),
                    seed: Some(7),
                },
                BodySpec {
                    star_type: "RedGiant".to_string(),
                    diameter: 250,
                    name: None,
                    seed: None,
                },
            ]
        );
    }

    #[test]
    fn test_default_manifest() {
        let manifest = Manifest::default();

        assert_eq!(manifest.output, PathBuf::from("rendered"));
        assert_eq!(manifest.seed, DEFAULT_SEED);
        assert!(!manifest.crop);
        assert!(manifest.scale.is_none());
        assert_eq!(manifest.effective_scale(), 1);
    }

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert_eq!(manifest, Manifest::default());
    }

    #[test]
    fn test_invalid_manifest() {
        let err = Manifest::parse("bodies: 12").unwrap_err();
        assert!(matches!(err, StarError::Parse { .. }));
    }

    #[test]
    fn test_seed_and_stem_fall_back_to_defaults() {
        let manifest = Manifest {
            seed: 5,
            ..Default::default()
        };
        let body = BodySpec {
            star_type: "WhiteDwarf".to_string(),
            diameter: 120,
            name: None,
            seed: None,
        };

        assert_eq!(manifest.seed_for(&body), 5);
        assert_eq!(manifest.file_stem(&body), "whitedwarf-120-5");
        assert_eq!(
            manifest.request_for(&body),
            RenderRequest::new("WhiteDwarf", 120, 5)
        );
    }

    #[test]
    fn test_scale_zero_is_one() {
        let manifest = Manifest {
            scale: Some(0),
            ..Default::default()
        };
        assert_eq!(manifest.effective_scale(), 1);
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut manifest = Manifest::default();
        manifest.bodies.push(BodySpec {
            star_type: "Regular".to_string(),
            diameter: 200,
            name: Some("sun".to_string()),
            seed: None,
        });

        let yaml = manifest.to_yaml().unwrap();
        assert_eq!(Manifest::parse(&yaml).unwrap(), manifest);
    }
}
