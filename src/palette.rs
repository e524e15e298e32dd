//! Terrain palette: the ordered, index-addressed list of named colors.

use bevy::prelude::Reflect;

use crate::error::{GridError, Result};

/// One palette entry.
#[derive(Clone, Debug, PartialEq, Eq, Reflect)]
pub struct Terrain {
    /// Display name, shown in the per-cell terrain menu.
    pub name: String,
    /// sRGB fill color.
    pub color: [u8; 3],
}

impl Terrain {
    /// Convenience constructor.
    pub fn new(name: impl Into<String>, color: [u8; 3]) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// Ordered list of terrains. Never empty.
///
/// Cells store an index into this list, so every operation that can shrink
/// it goes through the controller, which remaps the grid in the same step.
#[derive(Clone, Debug, PartialEq, Eq, Reflect)]
pub struct Palette {
    terrains: Vec<Terrain>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            terrains: vec![
                Terrain::new("Plains", [210, 230, 115]),
                Terrain::new("Desert", [237, 201, 175]),
                Terrain::new("Forest", [76, 166, 107]),
                Terrain::new("Water", [118, 182, 237]),
                Terrain::new("Mountains", [166, 162, 140]),
                Terrain::new("Hills", [148, 196, 139]),
                Terrain::new("Swamp", [76, 128, 107]),
            ],
        }
    }
}

impl Palette {
    /// Builds a palette from explicit terrains; rejects an empty list.
    pub fn new(terrains: Vec<Terrain>) -> Result<Self> {
        if terrains.is_empty() {
            return Err(GridError::EmptyPalette);
        }
        Ok(Self { terrains })
    }

    /// Number of terrains. Always at least one.
    pub fn len(&self) -> usize {
        self.terrains.len()
    }

    /// Always `false`; present for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.terrains.is_empty()
    }

    /// Terrain at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Terrain> {
        self.terrains.get(index)
    }

    /// Iterates terrains in index order.
    pub fn iter(&self) -> impl Iterator<Item = &Terrain> {
        self.terrains.iter()
    }

    /// Index of the first terrain called `name`.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.terrains.iter().position(|t| t.name == name)
    }

    /// Fails with [`GridError::TerrainOutOfRange`] unless `index` is valid.
    pub fn check_index(&self, index: usize) -> Result<()> {
        if index < self.terrains.len() {
            Ok(())
        } else {
            Err(GridError::TerrainOutOfRange {
                index,
                len: self.terrains.len(),
            })
        }
    }

    /// Fill color of terrain `index`.
    pub fn color(&self, index: usize) -> Result<[u8; 3]> {
        self.check_index(index)?;
        Ok(self.terrains[index].color)
    }

    /// Replaces the color of terrain `index`.
    pub fn set_color(&mut self, index: usize, color: [u8; 3]) -> Result<()> {
        self.check_index(index)?;
        self.terrains[index].color = color;
        Ok(())
    }

    /// Appends a terrain and returns its index.
    pub fn push(&mut self, terrain: Terrain) -> usize {
        self.terrains.push(terrain);
        self.terrains.len() - 1
    }

    /// Removes terrain `index`. Later terrains move down by one.
    ///
    /// Refuses to remove the last terrain. Callers holding indices must
    /// remap them; see `HexGrid::remap_terrain`.
    pub fn remove(&mut self, index: usize) -> Result<Terrain> {
        self.check_index(index)?;
        if self.terrains.len() == 1 {
            return Err(GridError::LastTerrain);
        }
        Ok(self.terrains.remove(index))
    }
}
