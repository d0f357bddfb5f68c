//! Click/hover driven path selection.
//!
//! [`Pathfinder`] turns pointer events on tiles into searches:
//!
//! - first click picks the start,
//! - second click picks the goal and searches,
//! - a further click starts over from the clicked tile,
//! - hovering while only a start is picked previews a path to the hovered
//!   tile (when [`PathfinderConfig::hover_preview`] is on).
//!
//! A search that finds nothing leaves the previous path in place.

use hexroute_core::Hex;
use hexroute_paths::Path;

use crate::config::PathfinderConfig;
use crate::grid::HexGrid;

/// What the player has picked so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    NoneSelected,
    StartSelected {
        start: Hex,
    },
    StartAndGoalSelected {
        start: Hex,
        goal: Hex,
    },
}

impl Selection {
    pub fn start(self) -> Option<Hex> {
        match self {
            Self::NoneSelected => None,
            Self::StartSelected { start } | Self::StartAndGoalSelected { start, .. } => {
                Some(start)
            }
        }
    }

    pub fn goal(self) -> Option<Hex> {
        match self {
            Self::StartAndGoalSelected { goal, .. } => Some(goal),
            _ => None,
        }
    }
}

/// Selection state plus the last path found.
#[derive(Debug, Clone, Default)]
pub struct Pathfinder {
    config: PathfinderConfig,
    selection: Selection,
    last_path: Option<Path<Hex>>,
}

impl Pathfinder {
    pub fn new(config: PathfinderConfig) -> Self {
        Self {
            config,
            selection: Selection::NoneSelected,
            last_path: None,
        }
    }

    #[inline]
    pub fn config(&self) -> &PathfinderConfig {
        &self.config
    }

    #[inline]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// The most recent path found, for display.
    #[inline]
    pub fn last_path(&self) -> Option<&Path<Hex>> {
        self.last_path.as_ref()
    }

    /// Forget the selection and the last path.
    pub fn clear(&mut self) {
        self.selection = Selection::NoneSelected;
        self.last_path = None;
    }

    /// Handle a click on `hex`. Clicks outside the grid are ignored.
    ///
    /// Returns the new path when the click completed a selection and a
    /// route exists.
    pub fn on_tile_clicked(&mut self, grid: &HexGrid, hex: Hex) -> Option<&Path<Hex>> {
        if !grid.contains(hex) {
            return None;
        }
        match self.selection {
            Selection::NoneSelected | Selection::StartAndGoalSelected { .. } => {
                log::debug!("path start selected at {hex}");
                self.selection = Selection::StartSelected { start: hex };
                self.last_path = None;
                None
            }
            Selection::StartSelected { start } => {
                log::debug!("path goal selected at {hex}");
                self.selection = Selection::StartAndGoalSelected { start, goal: hex };
                self.update_path(grid, start, hex)
            }
        }
    }

    /// Handle the pointer entering `hex`.
    ///
    /// Only previews while a start is picked and no goal is committed.
    pub fn on_tile_entered(&mut self, grid: &HexGrid, hex: Hex) -> Option<&Path<Hex>> {
        if !self.config.hover_preview {
            return None;
        }
        match self.selection {
            Selection::StartSelected { start } => self.update_path(grid, start, hex),
            _ => None,
        }
    }

    fn update_path(&mut self, grid: &HexGrid, start: Hex, goal: Hex) -> Option<&Path<Hex>> {
        let path = grid.find_path_bounded(start, goal, self.config.max_expansions)?;
        self.last_path = Some(path);
        self.last_path.as_ref()
    }
}
