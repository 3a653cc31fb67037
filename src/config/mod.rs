use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::domain::Ring;
use crate::storage::coords::decode_ring;

/// Built-in administrative boundary of Desa Tegalsambi, `[lat, lng]` pairs
pub const DEFAULT_BOUNDARY_JSON: &str = include_str!("../../data/tegalsambi_boundary.json");

pub const DEFAULT_VILLAGE_NAME: &str = "Desa Tegalsambi";

fn default_village_name() -> String {
    DEFAULT_VILLAGE_NAME.to_string()
}
fn default_verbose() -> bool {
    false
}
fn default_enforce_boundary() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct FileConfig {
    /// Stored-ring JSON file with the reference village boundary
    #[serde(default)]
    pub boundary: Option<PathBuf>,
    #[serde(default = "default_village_name")]
    pub village_name: String,
    #[serde(default = "default_verbose")]
    pub verbose: bool,
    #[serde(default)]
    pub drawing: Option<DrawingConfig>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DrawingConfig {
    /// Reject clicks outside the reference boundary
    #[serde(default = "default_enforce_boundary")]
    pub enforce_boundary: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            enforce_boundary: default_enforce_boundary(),
        }
    }
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            boundary: None,
            village_name: default_village_name(),
            verbose: default_verbose(),
            drawing: None,
        }
    }
}

impl FileConfig {
    /// First config file on the search path that parses
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Ok(contents) = std::fs::read_to_string(&path)
            {
                match toml::from_str(&contents) {
                    Ok(config) => {
                        log::debug!("using config file {}", path.display());
                        return Some(config);
                    }
                    Err(e) => {
                        log::warn!("Failed to parse config file {:?}: {}", path, e);
                    }
                }
            }
        }
        None
    }

    /// Load an explicitly named config file
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {:?}", path);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&contents).context("Failed to parse config file")
    }

    pub fn drawing(&self) -> DrawingConfig {
        self.drawing.clone().unwrap_or_default()
    }
}

/// Reference boundary from `path`, or the built-in one
pub fn load_boundary(path: Option<&Path>) -> Result<Ring> {
    match path {
        Some(p) => {
            let contents = std::fs::read_to_string(p)
                .with_context(|| format!("Failed to read boundary file: {:?}", p))?;
            let ring = decode_ring(&contents)
                .with_context(|| format!("Failed to parse boundary file: {:?}", p))?;
            if ring.len() < crate::geometry::MIN_RING_POINTS {
                log::warn!(
                    "boundary {:?} has {} points; every point will be rejected",
                    p,
                    ring.len()
                );
            }
            Ok(ring)
        }
        None => {
            log::debug!("no boundary file configured, using built-in {}", DEFAULT_VILLAGE_NAME);
            decode_ring(DEFAULT_BOUNDARY_JSON).context("Built-in boundary is invalid")
        }
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("desagis.toml"));
    paths.push(PathBuf::from(".desagis.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("desagis").join("config.toml"));
        paths.push(config_dir.join("desagis.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".desagis.toml"));
        paths.push(home.join(".config").join("desagis").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GeoPoint;
    use crate::geometry::{compute_area, is_point_in_polygon};
    use tempfile::tempdir;

    #[test]
    fn test_builtin_boundary() {
        let ring = load_boundary(None).unwrap();
        assert_eq!(ring.len(), 115);
        assert_eq!(ring.first(), ring.last());
        assert!(is_point_in_polygon(GeoPoint::new(-6.6181, 110.6539), &ring));
        assert!(!is_point_in_polygon(GeoPoint::new(-6.60, 110.65), &ring));
        // roughly 180 ha
        assert!((compute_area(&ring) - 1_800_881.0).abs() < 10.0);
    }

    #[test]
    fn test_draw_parcel_inside_builtin_village() {
        use crate::facade::{DrawingSession, PointDecision, ShapeKind};
        use crate::geometry::format_area;

        let village = load_boundary(None).unwrap();
        let clicks = [
            GeoPoint::new(-6.6185, 110.6540),
            GeoPoint::new(-6.6185, 110.6550),
            GeoPoint::new(-6.6175, 110.6550),
            GeoPoint::new(-6.6175, 110.6540),
        ];

        let draw = || {
            let mut session = DrawingSession::new(ShapeKind::Polygon, Some(village.as_slice()));
            assert_eq!(
                session.add_point(GeoPoint::new(-6.60, 110.65)),
                PointDecision::Rejected
            );
            for p in clicks {
                assert!(matches!(session.add_point(p), PointDecision::Accepted { .. }));
            }
            let ring = session.finish().unwrap();
            let area = compute_area(ring.points());
            (area, format_area(Some(area)))
        };

        let (area, display) = draw();
        assert!((area - 12_280.61).abs() < 0.5);
        assert_eq!(display, "1,23 ha");
        assert_eq!(draw(), (area, display));
    }

    #[test]
    fn test_parse_config_defaults() {
        let config: FileConfig = toml::from_str("verbose = true").unwrap();
        assert!(config.verbose);
        assert_eq!(config.village_name, DEFAULT_VILLAGE_NAME);
        assert!(config.boundary.is_none());
        assert!(config.drawing().enforce_boundary);
    }

    #[test]
    fn test_parse_config_drawing_section() {
        let config: FileConfig = toml::from_str(
            r#"
            boundary = "batas.json"
            village_name = "Desa Contoh"

            [drawing]
            enforce_boundary = false
            "#,
        )
        .unwrap();
        assert_eq!(config.boundary, Some(PathBuf::from("batas.json")));
        assert!(!config.drawing().enforce_boundary);
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempdir().unwrap();
        assert!(FileConfig::load_from(&dir.path().join("nope.toml")).is_err());
    }

    #[test]
    fn test_load_boundary_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("batas.json");
        std::fs::write(&path, "[[0.0, 0.0], [0.0, 1.0], [1.0, 1.0], [1.0, 0.0]]").unwrap();
        let ring = load_boundary(Some(&path)).unwrap();
        assert_eq!(ring.len(), 4);
        assert!(is_point_in_polygon(GeoPoint::new(0.5, 0.5), &ring));
    }
}
