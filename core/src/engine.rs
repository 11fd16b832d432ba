use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngineState {
    #[default]
    Uninitialized,
    Active,
    Lost,
    Cleared,
}

impl EngineState {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Lost | Self::Cleared)
    }
}

/// Owns the grid and every state transition of one game session.
///
/// Lifecycle: [`BoardEngine::new`] creates an empty board, [`BoardEngine::initialize`] places the mines and computes
/// adjacency counts, then [`BoardEngine::reveal`] flips cells one at a time. Only revealed cells disclose whether they
/// hold a mine.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardEngine {
    size: Coord2,
    board: Array2<Cell>,
    layout: Option<MineLayout>,
    revealed_safe: CellCount,
    state: EngineState,
}

impl BoardEngine {
    pub fn new(size: Coord2) -> Result<Self> {
        validate_size(size)?;
        Ok(Self {
            size,
            board: Array2::default(size.to_nd_index()),
            layout: None,
            revealed_safe: 0,
            state: EngineState::Uninitialized,
        })
    }

    /// Places exactly `mine_count` mines using `sampler`, then computes the adjacency count of every cell.
    ///
    /// Calling it again re-randomizes and resets the whole board. On error the board is left as it was.
    pub fn initialize<S: CellSampler + ?Sized>(&mut self, mine_count: CellCount, sampler: &mut S) -> Result<()> {
        let config = GameConfig::new(self.size, mine_count)?;
        let layout = RejectionGenerator::new(sampler).generate(config)?;
        self.initialize_with_layout(layout)
    }

    /// Like [`BoardEngine::initialize`] but with mines at known positions.
    pub fn initialize_with_layout(&mut self, layout: MineLayout) -> Result<()> {
        if layout.size() != self.size {
            return Err(ConfigProblem::SizeMismatch.into());
        }

        let board = Array2::from_shape_fn(self.size.to_nd_index(), |(x, y)| {
            let coords = (x as Coord, y as Coord);
            Cell {
                has_mine: layout.contains_mine(coords),
                revealed: false,
                adjacent_mines: layout.adjacent_mine_count(coords),
            }
        });

        log::debug!(
            "Initialized {}x{} board with {} mines",
            self.size.0,
            self.size.1,
            layout.mine_count()
        );
        self.board = board;
        self.layout = Some(layout);
        self.revealed_safe = 0;
        self.state = EngineState::Active;
        Ok(())
    }

    /// Reveals a single cell and reports whether it held a mine.
    ///
    /// Revealing an already revealed cell changes nothing and reports the same classification again. Neighbors are
    /// never opened automatically.
    pub fn reveal(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_initialized()?;

        let cell = &mut self.board[coords.to_nd_index()];
        let outcome = RevealOutcome {
            was_mine: cell.has_mine,
        };
        if cell.revealed {
            log::trace!("Cell {:?} already revealed", coords);
            return Ok(outcome);
        }
        cell.revealed = true;

        if outcome.was_mine {
            log::debug!("Mine revealed at {:?}", coords);
            self.end_game(false);
        } else {
            self.revealed_safe += 1;
            if self.safe_cells_left() == 0 {
                self.end_game(true);
            }
        }
        Ok(outcome)
    }

    /// Converts untrusted signed coordinates into in-bounds board coordinates.
    pub fn checked_coords(&self, x: i64, y: i64) -> Result<Coord2> {
        let coords = (
            Coord::try_from(x).map_err(|_| GameError::OutOfBounds)?,
            Coord::try_from(y).map_err(|_| GameError::OutOfBounds)?,
        );
        self.validate_coords(coords)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn size(&self) -> Coord2 {
        self.size
    }

    pub fn rows(&self) -> Coord {
        self.size.0
    }

    pub fn cols(&self) -> Coord {
        self.size.1
    }

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn is_initialized(&self) -> bool {
        self.layout.is_some()
    }

    pub fn mine_count(&self) -> CellCount {
        self.layout.as_ref().map_or(0, MineLayout::mine_count)
    }

    /// Mine coordinates in placement order; empty until initialized.
    pub fn mine_positions(&self) -> &[Coord2] {
        match &self.layout {
            Some(layout) => layout.mine_positions(),
            None => &[],
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<CellView> {
        let coords = self.validate_coords(coords)?;
        Ok(self.board[coords.to_nd_index()].view())
    }

    pub fn is_revealed(&self, coords: Coord2) -> Result<bool> {
        Ok(self.cell_at(coords)?.is_revealed())
    }

    /// `Some(has_mine)` for revealed cells, `None` while the cell is hidden.
    pub fn is_mine(&self, coords: Coord2) -> Result<Option<bool>> {
        Ok(match self.cell_at(coords)? {
            CellView::Hidden => None,
            CellView::Safe(_) => Some(false),
            CellView::Mine => Some(true),
        })
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> Result<u8> {
        let coords = self.validate_coords(coords)?;
        self.check_initialized()?;
        Ok(self.board[coords.to_nd_index()].adjacent_mines)
    }

    pub fn revealed_safe_count(&self) -> CellCount {
        self.revealed_safe
    }

    /// Safe cells still hidden.
    pub fn safe_cells_left(&self) -> CellCount {
        match &self.layout {
            Some(layout) => layout.safe_cell_count() - self.revealed_safe,
            None => mult(self.size.0, self.size.1),
        }
    }

    /// Win condition: a safe reveal left no safe cell hidden.
    ///
    /// A board packed with mines is never cleared, it can only be lost.
    pub fn is_cleared(&self) -> bool {
        self.state == EngineState::Cleared
    }

    /// Coordinates and views of every cell in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Coord2, CellView)> + '_ {
        self.board
            .indexed_iter()
            .map(|((x, y), cell)| ((x as Coord, y as Coord), cell.view()))
    }

    /// Hidden cells in row-major order.
    pub fn hidden_cells(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter_cells()
            .filter(|(_, view)| !view.is_revealed())
            .map(|(coords, _)| coords)
    }

    fn end_game(&mut self, cleared: bool) {
        if self.state.is_finished() {
            return;
        }
        self.state = if cleared {
            EngineState::Cleared
        } else {
            EngineState::Lost
        };
    }

    fn check_initialized(&self) -> Result<()> {
        if self.is_initialized() {
            Ok(())
        } else {
            Err(GameError::NotInitialized)
        }
    }
}
