//! A rectangular hex tile grid and its [`GridNode`] adapter.
//!
//! [`HexGrid`] owns the coordinate → tile map. Each tile caches its passable
//! neighbors when the grid is built; changing a tile's passability refreshes
//! the caches around it. [`TileNode`] is a borrowed `(grid, hex)` handle the
//! search engine walks, so nodes never own or outlive the grid.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use glam::Vec2;
use hexroute_core::{Hex, Layout, OffsetCoord, Orientation};
use hexroute_paths::{GridNode, Path, PathSearch, scaled_hex_distance};

use crate::config::GridConfig;
use crate::error::GridError;
use crate::tile::{Biome, Tile};

/// A rectangular grid of hex tiles.
#[derive(Debug, Clone)]
pub struct HexGrid {
    config: GridConfig,
    layout: Layout,
    tiles: HashMap<Hex, Tile>,
    /// Cheapest travel cost among passable tiles; scales the heuristic.
    min_travel_cost: i32,
}

impl HexGrid {
    /// Build a `width × height` grid, converting each offset index to a cube
    /// coordinate with the configured offset layout and parity.
    pub fn new(config: GridConfig) -> Result<Self, GridError> {
        if config.width <= 0 || config.height <= 0 {
            return Err(GridError::EmptyGrid {
                width: config.width,
                height: config.height,
            });
        }
        let layout = Layout::new(
            Orientation::from(config.offset_layout),
            Vec2::splat(config.hex_size),
            Vec2::ZERO,
        )?;

        let mut tiles = HashMap::with_capacity(tile_count(&config));
        for row in 0..config.height {
            for col in 0..config.width {
                let offset = OffsetCoord::new(col, row);
                let hex = config.offset_layout.to_cube(config.parity, offset);
                tiles.insert(hex, Tile::new(hex, offset, config.default_biome));
            }
        }

        let mut grid = Self {
            config,
            layout,
            tiles,
            min_travel_cost: 1,
        };
        grid.rebuild_topology();
        log::debug!(
            "built {}x{} hex grid ({:?}, {:?})",
            config.width,
            config.height,
            config.offset_layout,
            config.parity
        );
        Ok(grid)
    }

    #[inline]
    pub fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Screen mapping for this grid, with the origin hex at pixel (0, 0).
    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.config.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.config.height
    }

    /// Number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    #[inline]
    pub fn contains(&self, hex: Hex) -> bool {
        self.tiles.contains_key(&hex)
    }

    /// The tile at `hex`, or `None` past the grid edge.
    #[inline]
    pub fn tile(&self, hex: Hex) -> Option<&Tile> {
        self.tiles.get(&hex)
    }

    /// The tile stored at offset index `offset`.
    pub fn tile_at_offset(&self, offset: OffsetCoord) -> Option<&Tile> {
        self.tile(self.hex_at_offset(offset))
    }

    /// Cube coordinate of offset index `offset` under this grid's layout.
    #[inline]
    pub fn hex_at_offset(&self, offset: OffsetCoord) -> Hex {
        self.config.offset_layout.to_cube(self.config.parity, offset)
    }

    /// Iterate over all tiles in unspecified order.
    pub fn tiles(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.values()
    }

    /// Pixel position of the center of `hex`.
    #[inline]
    pub fn tile_center(&self, hex: Hex) -> Vec2 {
        self.layout.hex_to_pixel(hex)
    }

    /// The tile under pixel `p`, if any.
    pub fn tile_at_pixel(&self, p: Vec2) -> Option<&Tile> {
        self.tile(self.layout.pixel_to_hex(p)?)
    }

    /// Cheapest travel cost among passable tiles.
    #[inline]
    pub fn min_travel_cost(&self) -> i32 {
        self.min_travel_cost
    }

    // -----------------------------------------------------------------------
    // Mutation
    // -----------------------------------------------------------------------

    /// Set whether `hex` can be entered, refreshing the neighbor caches of
    /// the tile and its adjacent tiles. Returns `false` if there is no tile.
    pub fn set_passable(&mut self, hex: Hex, passable: bool) -> bool {
        let Some(tile) = self.tiles.get_mut(&hex) else {
            return false;
        };
        if tile.passable == passable {
            return true;
        }
        tile.passable = passable;
        self.refresh_around(hex);
        self.update_min_travel_cost();
        true
    }

    /// Set the cost of entering `hex`. Returns `false` if there is no tile.
    pub fn set_travel_cost(&mut self, hex: Hex, cost: u8) -> bool {
        let Some(tile) = self.tiles.get_mut(&hex) else {
            return false;
        };
        tile.travel_cost = cost;
        self.update_min_travel_cost();
        true
    }

    /// Change only the biome of `hex`. Returns `false` if there is no tile.
    pub fn set_biome(&mut self, hex: Hex, biome: Biome) -> bool {
        let Some(tile) = self.tiles.get_mut(&hex) else {
            return false;
        };
        tile.biome = biome;
        true
    }

    /// Set the biome of `hex` together with its default cost and
    /// passability. Returns `false` if there is no tile.
    pub fn paint(&mut self, hex: Hex, biome: Biome) -> bool {
        if !self.set_biome(hex, biome) {
            return false;
        }
        self.set_travel_cost(hex, biome.default_travel_cost());
        self.set_passable(hex, biome.default_passable());
        true
    }

    /// Recompute every neighbor cache.
    pub fn rebuild_topology(&mut self) {
        let all: Vec<Hex> = self.tiles.keys().copied().collect();
        for hex in all {
            self.refresh_neighbors(hex);
        }
        self.update_min_travel_cost();
    }

    fn passable_neighbors(&self, hex: Hex) -> Vec<Hex> {
        let passable = |h: &Hex| self.tiles.get(h).is_some_and(|t| t.passable);
        if !passable(&hex) {
            return Vec::new();
        }
        hex.neighbors().into_iter().filter(passable).collect()
    }

    fn refresh_neighbors(&mut self, hex: Hex) {
        let neighbors = self.passable_neighbors(hex);
        if let Some(tile) = self.tiles.get_mut(&hex) {
            tile.neighbors = neighbors;
        }
    }

    fn refresh_around(&mut self, hex: Hex) {
        self.refresh_neighbors(hex);
        for n in hex.neighbors() {
            self.refresh_neighbors(n);
        }
        log::debug!("refreshed neighbor caches around {hex}");
    }

    fn update_min_travel_cost(&mut self) {
        self.min_travel_cost = self
            .tiles
            .values()
            .filter(|t| t.passable)
            .map(|t| t.travel_cost as i32)
            .min()
            .unwrap_or(1);
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// A search handle for the tile at `hex`.
    pub fn node(&self, hex: Hex) -> Option<TileNode<'_>> {
        self.contains(hex).then_some(TileNode { grid: self, hex })
    }

    /// Cheapest path between two tiles, as coordinates.
    ///
    /// Returns `None` when either coordinate is off the grid or the goal is
    /// unreachable.
    pub fn find_path(&self, start: Hex, goal: Hex) -> Option<Path<Hex>> {
        self.find_path_bounded(start, goal, None)
    }

    /// Like [`find_path`](Self::find_path), giving up after
    /// `max_expansions` node expansions when set.
    pub fn find_path_bounded(
        &self,
        start: Hex,
        goal: Hex,
        max_expansions: Option<usize>,
    ) -> Option<Path<Hex>> {
        let start = self.node(start)?;
        let goal = self.node(goal)?;
        let mut search = match max_expansions {
            Some(limit) => PathSearch::with_max_expansions(limit),
            None => PathSearch::new(),
        };
        search.search(start, goal).map(|p| p.map(|n| n.hex))
    }
}

// ---------------------------------------------------------------------------
// TileNode
// ---------------------------------------------------------------------------

/// A borrowed handle to one tile, walkable by the A* engine.
///
/// Equality and hashing use the coordinate only.
#[derive(Clone, Copy)]
pub struct TileNode<'a> {
    grid: &'a HexGrid,
    hex: Hex,
}

impl<'a> TileNode<'a> {
    #[inline]
    pub fn hex(&self) -> Hex {
        self.hex
    }

    /// The tile this handle points at.
    pub fn tile(&self) -> Option<&'a Tile> {
        self.grid.tile(self.hex)
    }
}

impl PartialEq for TileNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.hex == other.hex
    }
}

impl Eq for TileNode<'_> {}

impl Hash for TileNode<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hex.hash(state);
    }
}

impl std::fmt::Debug for TileNode<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TileNode{}", self.hex)
    }
}

impl GridNode for TileNode<'_> {
    fn neighbors(&self, buf: &mut Vec<Self>) {
        if let Some(tile) = self.tile() {
            buf.extend(tile.neighbors.iter().map(|&hex| TileNode {
                grid: self.grid,
                hex,
            }));
        }
    }

    fn step_cost(&self, _from: &Self) -> i32 {
        self.tile().map_or(i32::MAX, |t| t.travel_cost as i32)
    }

    fn heuristic(&self, to: &Self) -> i32 {
        scaled_hex_distance(self.hex, to.hex, self.grid.min_travel_cost)
    }
}

/// Number of tiles `config` describes. Width and height must be positive.
fn tile_count(config: &GridConfig) -> usize {
    (config.width as usize).saturating_mul(config.height as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexroute_core::{OffsetLayout, Parity};
    use hexroute_paths::search;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn grid(w: i32, h: i32) -> HexGrid {
        HexGrid::new(GridConfig::with_size(w, h)).unwrap()
    }

    fn at(g: &HexGrid, col: i32, row: i32) -> Hex {
        g.hex_at_offset(OffsetCoord::new(col, row))
    }

    // -----------------------------------------------------------------------
    // Construction
    // -----------------------------------------------------------------------

    #[test]
    fn build_assigns_offsets() {
        let g = grid(5, 4);
        assert_eq!(g.len(), 20);
        for row in 0..4 {
            for col in 0..5 {
                let o = OffsetCoord::new(col, row);
                let t = g.tile_at_offset(o).unwrap();
                assert_eq!(t.offset(), o);
                assert_eq!(
                    OffsetLayout::ROffset.from_cube(Parity::Odd, t.hex()),
                    o
                );
            }
        }
        assert!(g.tile_at_offset(OffsetCoord::new(5, 0)).is_none());
    }

    #[test]
    fn tile_count_does_not_overflow() {
        let cfg = GridConfig::with_size(i32::MAX, i32::MAX);
        assert_eq!(
            tile_count(&cfg),
            (i32::MAX as usize).saturating_mul(i32::MAX as usize)
        );
        assert_eq!(tile_count(&GridConfig::with_size(5, 7)), 35);
    }

    #[test]
    fn empty_grid_is_rejected() {
        let err = HexGrid::new(GridConfig::with_size(0, 3)).unwrap_err();
        assert_eq!(err, GridError::EmptyGrid { width: 0, height: 3 });
    }

    #[test]
    fn bad_hex_size_is_rejected() {
        let cfg = GridConfig {
            hex_size: 0.0,
            ..GridConfig::default()
        };
        assert!(matches!(HexGrid::new(cfg), Err(GridError::Hex(_))));
    }

    #[test]
    fn raw_parity_is_checked_at_the_boundary() {
        let build = |raw: i32| -> Result<HexGrid, GridError> {
            let parity = Parity::try_from(raw)?;
            HexGrid::new(GridConfig {
                parity,
                ..GridConfig::with_size(3, 3)
            })
        };
        assert!(build(1).is_ok());
        assert!(build(-1).is_ok());
        assert_eq!(
            build(0).unwrap_err(),
            GridError::Hex(hexroute_core::HexError::InvalidParity(0))
        );
    }

    #[test]
    fn both_offset_families_build_connected_grids() {
        for offset_layout in [OffsetLayout::QOffset, OffsetLayout::ROffset] {
            for parity in [Parity::Even, Parity::Odd] {
                let g = HexGrid::new(GridConfig {
                    offset_layout,
                    parity,
                    ..GridConfig::with_size(6, 5)
                })
                .unwrap();
                let a = at(&g, 0, 0);
                let b = at(&g, 5, 4);
                let p = g.find_path(a, b).unwrap();
                assert_eq!(p.steps() as i32, a.distance(b));
            }
        }
    }

    // -----------------------------------------------------------------------
    // Neighbor caches
    // -----------------------------------------------------------------------

    #[test]
    fn neighbor_caches_are_mutual_and_adjacent() {
        let g = grid(6, 6);
        for t in g.tiles() {
            assert!(t.neighbors().len() <= 6);
            for &n in t.neighbors() {
                assert_eq!(t.hex().distance(n), 1);
                assert!(g.tile(n).unwrap().neighbors().contains(&t.hex()));
            }
        }
        // An interior tile has all six.
        assert_eq!(g.tile(at(&g, 2, 2)).unwrap().neighbors().len(), 6);
    }

    #[test]
    fn neighbors_follow_direction_order() {
        let g = grid(5, 5);
        let c = at(&g, 2, 2);
        assert_eq!(g.tile(c).unwrap().neighbors(), &c.neighbors());
    }

    #[test]
    fn impassable_tiles_drop_out_of_caches() {
        let mut g = grid(5, 5);
        let c = at(&g, 2, 2);
        let n = c.neighbor(0);
        assert!(g.set_passable(n, false));
        assert!(!g.tile(c).unwrap().neighbors().contains(&n));
        assert!(g.tile(n).unwrap().neighbors().is_empty());
        assert!(g.set_passable(n, true));
        assert!(g.tile(c).unwrap().neighbors().contains(&n));
        assert_eq!(g.tile(n).unwrap().neighbors().len(), 6);
        assert!(!g.set_passable(Hex::axial(100, 0), false));
    }

    #[test]
    fn paint_applies_biome_defaults() {
        let mut g = grid(4, 4);
        let h = at(&g, 1, 1);
        assert!(g.paint(h, Biome::Water));
        let t = g.tile(h).unwrap();
        assert_eq!(t.biome(), Biome::Water);
        assert!(!t.is_passable());
        assert!(g.paint(h, Biome::Mountain));
        let t = g.tile(h).unwrap();
        assert!(t.is_passable());
        assert_eq!(t.travel_cost(), 3);
        // Biome alone leaves the cost untouched.
        assert!(g.set_biome(h, Biome::Desert));
        assert_eq!(g.tile(h).unwrap().travel_cost(), 3);
    }

    #[test]
    fn min_travel_cost_tracks_passable_tiles() {
        let mut g = grid(3, 3);
        assert_eq!(g.min_travel_cost(), 1);
        for t in g.tiles().map(|t| t.hex()).collect::<Vec<_>>() {
            g.set_travel_cost(t, 4);
        }
        assert_eq!(g.min_travel_cost(), 4);
        let h = at(&g, 0, 0);
        g.set_travel_cost(h, 2);
        assert_eq!(g.min_travel_cost(), 2);
        g.set_passable(h, false);
        assert_eq!(g.min_travel_cost(), 4);
    }

    // -----------------------------------------------------------------------
    // Screen mapping
    // -----------------------------------------------------------------------

    #[test]
    fn pixel_picking_finds_tiles() {
        let g = HexGrid::new(GridConfig {
            hex_size: 32.0,
            ..GridConfig::with_size(4, 4)
        })
        .unwrap();
        for t in g.tiles() {
            let p = g.tile_center(t.hex());
            assert_eq!(g.tile_at_pixel(p).map(Tile::hex), Some(t.hex()));
        }
        assert!(g.tile_at_pixel(Vec2::new(-500.0, -500.0)).is_none());
        assert!(g.tile_at_pixel(Vec2::new(1e10, 0.0)).is_none());
        assert!(g.tile_at_pixel(Vec2::new(f32::NAN, 0.0)).is_none());
    }

    // -----------------------------------------------------------------------
    // Search through the adapter
    // -----------------------------------------------------------------------

    #[test]
    fn open_5x5_paths_match_cube_distance() {
        let g = grid(5, 5);
        let all: Vec<Hex> = g.tiles().map(Tile::hex).collect();
        for &a in &all {
            for &b in &all {
                let p = search(g.node(a).unwrap(), g.node(b).unwrap()).unwrap();
                assert_eq!(p.len() as i32 - 1, a.distance(b));
            }
        }
    }

    #[test]
    fn detours_around_an_expensive_tile() {
        let mut g = grid(5, 5);
        let a = at(&g, 0, 2);
        let b = at(&g, 4, 2);
        let direct = g.find_path(a, b).unwrap();
        assert_eq!(direct.steps(), 4);
        let middle = at(&g, 2, 2);
        assert!(direct.nodes.contains(&middle));

        g.set_travel_cost(middle, 9);
        let p = g.find_path(a, b).unwrap();
        assert!(!p.nodes.contains(&middle));
        assert_eq!(p.cost, 5);
    }

    #[test]
    fn fenced_goal_is_unreachable() {
        let mut g = grid(5, 5);
        let goal = at(&g, 2, 2);
        for n in goal.neighbors() {
            g.set_passable(n, false);
        }
        assert!(g.find_path(at(&g, 0, 0), goal).is_none());
    }

    #[test]
    fn impassable_endpoints_yield_no_path() {
        let mut g = grid(5, 5);
        let a = at(&g, 0, 0);
        let b = at(&g, 4, 4);
        g.set_passable(a, false);
        assert!(g.find_path(a, b).is_none());
        assert!(g.find_path(b, a).is_none());
        // Degenerate case still returns the single tile.
        assert_eq!(g.find_path(a, a).unwrap().nodes, vec![a]);
    }

    #[test]
    fn off_grid_coordinates_yield_no_path() {
        let g = grid(3, 3);
        assert!(g.find_path(Hex::axial(40, 0), at(&g, 0, 0)).is_none());
        assert!(g.node(Hex::axial(40, 0)).is_none());
    }

    #[test]
    fn cheap_tiles_keep_the_heuristic_admissible() {
        // Most tiles cost 3, a winding corridor costs 1. The cheap corridor
        // must win even though it is longer.
        let mut rng = StdRng::seed_from_u64(9);
        let mut g = grid(8, 8);
        for t in g.tiles().map(Tile::hex).collect::<Vec<_>>() {
            g.set_travel_cost(t, 3 + rng.random_range(0..2));
        }
        let corridor: Vec<Hex> = (0..8)
            .map(|c| at(&g, c, 0))
            .chain((1..8).map(|r| at(&g, 7, r)))
            .collect();
        for &h in &corridor {
            g.set_travel_cost(h, 1);
        }
        let a = at(&g, 0, 0);
        let b = at(&g, 7, 7);
        let p = g.find_path(a, b).unwrap();
        assert_eq!(p.cost as usize, p.steps());
        assert!(p.nodes.iter().all(|h| corridor.contains(h)));
    }

    #[test]
    fn bounded_search_gives_up() {
        let g = grid(8, 8);
        let a = at(&g, 0, 0);
        let b = at(&g, 7, 7);
        assert!(g.find_path_bounded(a, b, Some(2)).is_none());
        assert!(g.find_path_bounded(a, b, Some(500)).is_some());
    }

    #[test]
    fn grid_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HexGrid>();
    }
}
