#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        validate_size(self.size)?;
        if self.mines == 0 {
            return Err(ConfigProblem::NoMines.into());
        }
        if self.mines > self.total_cells() {
            return Err(ConfigProblem::TooManyMines.into());
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

pub(crate) fn validate_size((rows, cols): Coord2) -> Result<()> {
    if rows == 0 || cols == 0 {
        Err(ConfigProblem::EmptyBoard.into())
    } else {
        Ok(())
    }
}

/// Where the mines are: a mask for lookups plus the coordinates in the order they were placed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    positions: Vec<Coord2>,
}

impl MineLayout {
    pub(crate) fn from_parts(mine_mask: Array2<bool>, positions: Vec<Coord2>) -> Self {
        debug_assert_eq!(
            mine_mask.iter().filter(|&&is_mine| is_mine).count(),
            positions.len()
        );
        Self {
            mine_mask,
            positions,
        }
    }

    pub(crate) fn full(size: Coord2) -> Self {
        let mine_mask = Array2::from_elem(size.to_nd_index(), true);
        let positions = mine_mask
            .indexed_iter()
            .map(|((x, y), _)| (x as Coord, y as Coord))
            .collect();
        Self::from_parts(mine_mask, positions)
    }

    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        validate_size(size)?;
        if mine_coords.is_empty() {
            return Err(ConfigProblem::NoMines.into());
        }

        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());
        for &coords in mine_coords {
            if !in_bounds(coords, size) {
                return Err(GameError::OutOfBounds);
            }
            let cell = &mut mine_mask[coords.to_nd_index()];
            if *cell {
                return Err(ConfigProblem::DuplicateMine.into());
            }
            *cell = true;
        }

        Ok(Self::from_parts(mine_mask, mine_coords.to_vec()))
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::new_unchecked(self.size(), self.mine_count())
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size().0, self.size().1)
    }

    pub fn mine_count(&self) -> CellCount {
        self.positions.len() as CellCount
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count()
    }

    pub fn mine_positions(&self) -> &[Coord2] {
        &self.positions
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    /// Number of mines among the in-bounds neighbors of `coords`.
    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        self.mine_mask
            .iter_neighbors(coords)
            .filter(|&pos| self[pos])
            .count() as u8
    }

    /// All board coordinates in row-major order.
    pub fn iter_positions(&self) -> impl Iterator<Item = Coord2> + use<> {
        let (rows, cols) = self.size();
        (0..rows).flat_map(move |x| (0..cols).map(move |y| (x, y)))
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}

/// Result of revealing a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevealOutcome {
    pub was_mine: bool,
}

impl RevealOutcome {
    pub const SAFE: Self = Self { was_mine: false };
    pub const MINE: Self = Self { was_mine: true };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_and_excess_mines() {
        assert_eq!(
            GameConfig::new((3, 3), 0),
            Err(GameError::InvalidConfiguration(ConfigProblem::NoMines))
        );
        assert_eq!(
            GameConfig::new((3, 3), 10),
            Err(GameError::InvalidConfiguration(ConfigProblem::TooManyMines))
        );
        assert!(GameConfig::new((3, 3), 9).is_ok());
    }

    #[test]
    fn config_rejects_empty_board() {
        assert_eq!(
            GameConfig::new((0, 4), 1),
            Err(GameError::InvalidConfiguration(ConfigProblem::EmptyBoard))
        );
    }

    #[test]
    fn layout_from_coords_validates_input() {
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(2, 0)]),
            Err(GameError::OutOfBounds)
        );
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[(1, 0), (1, 0)]),
            Err(GameError::InvalidConfiguration(ConfigProblem::DuplicateMine))
        );
        assert_eq!(
            MineLayout::from_mine_coords((2, 2), &[]),
            Err(GameError::InvalidConfiguration(ConfigProblem::NoMines))
        );
    }

    #[test]
    fn adjacent_count_ignores_cells_outside_board() {
        let layout = MineLayout::from_mine_coords((3, 3), &[(0, 0), (0, 1), (2, 2)]).unwrap();

        assert_eq!(layout.adjacent_mine_count((1, 1)), 3);
        assert_eq!(layout.adjacent_mine_count((0, 0)), 1);
        assert_eq!(layout.adjacent_mine_count((2, 0)), 0);
        assert_eq!(layout.safe_cell_count(), 6);
        assert_eq!(layout.game_config(), GameConfig::new_unchecked((3, 3), 3));
    }
}
