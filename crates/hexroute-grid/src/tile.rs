//! Grid cells: [`Tile`] and its [`Biome`].

use hexroute_core::{Hex, OffsetCoord};

/// Terrain kind of a tile.
///
/// The biome only supplies defaults; a tile's travel cost and passability
/// can be configured independently of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Biome {
    Desert,
    Forest,
    #[default]
    Grass,
    Mountain,
    Water,
}

impl Biome {
    pub const ALL: [Biome; 5] = [
        Self::Desert,
        Self::Forest,
        Self::Grass,
        Self::Mountain,
        Self::Water,
    ];

    pub const fn default_travel_cost(self) -> u8 {
        match self {
            Self::Forest => 2,
            Self::Mountain => 3,
            Self::Desert | Self::Grass | Self::Water => 1,
        }
    }

    pub const fn default_passable(self) -> bool {
        !matches!(self, Self::Water)
    }
}

/// A single cell of a [`HexGrid`](crate::HexGrid).
///
/// Tiles are only mutated through the grid so that the cached neighbor
/// lists stay consistent with passability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub(crate) hex: Hex,
    pub(crate) offset: OffsetCoord,
    pub(crate) passable: bool,
    pub(crate) travel_cost: u8,
    pub(crate) biome: Biome,
    /// Passable edge-adjacent tiles, in direction order.
    pub(crate) neighbors: Vec<Hex>,
}

impl Tile {
    pub(crate) fn new(hex: Hex, offset: OffsetCoord, biome: Biome) -> Self {
        Self {
            hex,
            offset,
            passable: biome.default_passable(),
            travel_cost: biome.default_travel_cost(),
            biome,
            neighbors: Vec::with_capacity(6),
        }
    }

    #[inline]
    pub fn hex(&self) -> Hex {
        self.hex
    }

    /// The storage index this tile was built from.
    #[inline]
    pub fn offset(&self) -> OffsetCoord {
        self.offset
    }

    #[inline]
    pub fn is_passable(&self) -> bool {
        self.passable
    }

    /// Cost of entering this tile.
    #[inline]
    pub fn travel_cost(&self) -> u8 {
        self.travel_cost
    }

    #[inline]
    pub fn biome(&self) -> Biome {
        self.biome
    }

    /// Cached passable neighbors. Empty when the tile itself is impassable.
    #[inline]
    pub fn neighbors(&self) -> &[Hex] {
        &self.neighbors
    }
}
