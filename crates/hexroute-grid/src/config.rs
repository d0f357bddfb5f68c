//! Plain configuration structs for grids and path selection.
//!
//! With the `serde` feature both derive `Serialize`/`Deserialize`; missing
//! fields fall back to [`Default`]. The parity is written in its integer
//! form (`1` even, `-1` odd) and any other value is rejected.

use hexroute_core::{OffsetLayout, Parity};

use crate::tile::Biome;

/// How to build a [`HexGrid`](crate::HexGrid).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct GridConfig {
    /// Number of columns.
    pub width: i32,
    /// Number of rows.
    pub height: i32,
    pub offset_layout: OffsetLayout,
    pub parity: Parity,
    /// Center-to-corner hex size in pixels, used for screen mapping.
    pub hex_size: f32,
    /// Biome every tile starts with.
    pub default_biome: Biome,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            offset_layout: OffsetLayout::ROffset,
            parity: Parity::Odd,
            hex_size: 1.0,
            default_biome: Biome::Grass,
        }
    }
}

impl GridConfig {
    /// A default configuration of the given size.
    pub fn with_size(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }
}

/// Behaviour of the click/hover [`Pathfinder`](crate::Pathfinder).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct PathfinderConfig {
    /// Search towards the hovered tile while only a start is selected.
    pub hover_preview: bool,
    /// Give up after this many node expansions. `None` is unbounded.
    pub max_expansions: Option<usize>,
}

impl Default for PathfinderConfig {
    fn default() -> Self {
        Self {
            hover_preview: true,
            max_expansions: None,
        }
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn partial_grid_config() {
        let cfg: GridConfig =
            serde_json::from_str(r#"{"width":5,"height":7,"parity":1,"offset_layout":"QOffset"}"#)
                .unwrap();
        assert_eq!(cfg.width, 5);
        assert_eq!(cfg.height, 7);
        assert_eq!(cfg.parity, Parity::Even);
        assert_eq!(cfg.offset_layout, OffsetLayout::QOffset);
        assert_eq!(cfg.default_biome, Biome::Grass);
    }

    #[test]
    fn invalid_parity_is_rejected() {
        let err = serde_json::from_str::<GridConfig>(r#"{"parity":0}"#).unwrap_err();
        assert!(err.to_string().contains("invalid offset parity 0"));
    }

    #[test]
    fn pathfinder_config_round_trip() {
        let cfg = PathfinderConfig {
            hover_preview: false,
            max_expansions: Some(64),
        };
        let json = serde_json::to_string(&cfg).unwrap();
        let back: PathfinderConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
