//! Coordinate keyed table of cell blocks covering the container.
//!
//! The table is filled once and never queried by the particles; the only
//! consumer is the debug overlay in [`crate::debug_lines`].

use std::collections::HashMap;

use cgmath::Vector2;
use tracing::debug;

use crate::error::{require_positive, GeometryError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridKey {
    pub x: i32,
    pub y: i32,
}

impl GridKey {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Anchor of the block in world space, `key * subgrid_length`
    pub fn origin(&self, subgrid_length: u32) -> Vector2<f32> {
        let len = subgrid_length as f32;
        Vector2::new(self.x as f32 * len, self.y as f32 * len)
    }
}

impl From<(i32, i32)> for GridKey {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Placeholder cell, nothing writes to it yet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub position: Vector2<f32>,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            position: Vector2::new(0.0, 0.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellBlock {
    cells: Box<[Cell]>,
}

impl CellBlock {
    pub fn new(len: usize) -> Self {
        Self {
            cells: vec![Cell::default(); len].into_boxed_slice(),
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct SparseGrid {
    blocks: HashMap<GridKey, CellBlock>,
    subgrid_length: u32,
    num_hori: i32,
    num_vert: i32,
}

impl SparseGrid {
    pub fn new(bounds_size: Vector2<f32>, subgrid_length: u32) -> Result<Self, GeometryError> {
        let width = require_positive("bounds_size.x", bounds_size.x)?;
        let height = require_positive("bounds_size.y", bounds_size.y)?;
        if subgrid_length == 0 {
            return Err(GeometryError::invalid(
                "subgrid_length",
                "expected a value >= 1, got 0",
            ));
        }

        let num_hori = block_count("bounds_size.x", width, subgrid_length)?;
        let num_vert = block_count("bounds_size.y", height, subgrid_length)?;

        let mut grid = Self {
            blocks: HashMap::new(),
            subgrid_length,
            num_hori,
            num_vert,
        };

        for i in 0..num_hori {
            for j in 0..num_vert {
                for key in [(i, j), (-i, j), (i, -j), (-i, -j)] {
                    grid.insert(key.into());
                }
            }
        }

        debug!(
            "built sparse grid: {}x{} blocks per quadrant, {} unique keys, {} cells per block",
            num_hori,
            num_vert,
            grid.blocks.len(),
            subgrid_length
        );

        Ok(grid)
    }

    /// An existing key keeps its block.
    fn insert(&mut self, key: GridKey) {
        let len = self.subgrid_length as usize;
        self.blocks.entry(key).or_insert_with(|| CellBlock::new(len));
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, key: GridKey) -> Option<&CellBlock> {
        self.blocks.get(&key)
    }

    pub fn contains(&self, key: GridKey) -> bool {
        self.blocks.contains_key(&key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&GridKey, &CellBlock)> {
        self.blocks.iter()
    }

    pub fn sorted_keys(&self) -> Vec<GridKey> {
        let mut keys = self.blocks.keys().copied().collect::<Vec<_>>();
        keys.sort();
        keys
    }

    pub fn subgrid_length(&self) -> u32 {
        self.subgrid_length
    }

    pub fn num_hori(&self) -> i32 {
        self.num_hori
    }

    pub fn num_vert(&self) -> i32 {
        self.num_vert
    }
}

/// `max(ceil(extent / subgrid_length), 1)`
fn block_count(name: &'static str, extent: f32, subgrid_length: u32) -> Result<i32, GeometryError> {
    let count = (extent / subgrid_length as f32).ceil().max(1.0);
    if count > i32::MAX as f32 {
        return Err(GeometryError::invalid(
            name,
            format!("{extent} spans too many blocks of length {subgrid_length}"),
        ));
    }
    Ok(count as i32)
}

pub fn build_sparse_grid(
    bounds_size: impl Into<Vector2<f32>>,
    subgrid_length: u32,
) -> Result<SparseGrid, GeometryError> {
    SparseGrid::new(bounds_size.into(), subgrid_length)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_insert_keeps_the_first_block() {
        let mut grid = SparseGrid::new(Vector2::new(4.0, 4.0), 2).unwrap();
        let key = GridKey::new(1, -1);
        let count = grid.len();

        let marker = Vector2::new(7.0, -3.0);
        grid.blocks.get_mut(&key).unwrap().cells[0].position = marker;

        grid.insert(key);
        grid.insert(key);

        assert_eq!(grid.len(), count);
        let block = grid.get(key).unwrap();
        assert_eq!(block.len(), 2);
        assert_eq!(block.cells()[0].position, marker);
        assert_eq!(block.cells()[1], Cell::default());
    }

    #[test]
    fn axis_keys_are_inserted_once() {
        // (0, 0) is produced four times, (i, 0) and (0, j) twice each
        let grid = SparseGrid::new(Vector2::new(6.0, 6.0), 2).unwrap();
        assert_eq!(grid.num_hori(), 3);
        assert_eq!(grid.len(), 5 * 5);
        assert!(grid.iter().all(|(_, block)| block.len() == 2));
    }
}
