use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use log::{info, warn};
use rand::Rng;
use rand::seq::IteratorRandom;
use serde::Serialize;
use sweeper_core::{BoardEngine, CellCount, Coord, Coord2, GameError};

use crate::input::{parse_coords, prompt_line};
use crate::render::{render_board, render_row};

/// Chooses the next cell to reveal. `None` ends the game early.
pub trait Player {
    fn next_move(&mut self, engine: &BoardEngine) -> anyhow::Result<Option<Coord2>>;
}

/// Reveals uniformly random hidden cells.
pub struct AutoPlayer<R> {
    rng: R,
}

impl<R: Rng> AutoPlayer<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Player for AutoPlayer<R> {
    fn next_move(&mut self, engine: &BoardEngine) -> anyhow::Result<Option<Coord2>> {
        Ok(engine.hidden_cells().choose(&mut self.rng))
    }
}

/// Reads `x,y` moves, re-prompting until one lands on the board.
pub struct ManualPlayer<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> ManualPlayer<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }
}

impl<I: BufRead, O: Write> Player for ManualPlayer<I, O> {
    fn next_move(&mut self, engine: &BoardEngine) -> anyhow::Result<Option<Coord2>> {
        loop {
            let Some(line) = prompt_line(&mut self.input, &mut self.output, "Enter your positions (x,y). e.g. 1,2: ")?
            else {
                return Ok(None);
            };

            let (x, y) = match parse_coords(&line) {
                Ok(pair) => pair,
                Err(err) => {
                    writeln!(self.output, "Invalid input: {err}")?;
                    continue;
                }
            };
            match engine.checked_coords(x, y) {
                Ok(coords) => return Ok(Some(coords)),
                Err(GameError::OutOfBounds) => {
                    writeln!(
                        self.output,
                        "Position out of bounds, the board is {}x{}",
                        engine.rows(),
                        engine.cols()
                    )?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum GameOutcome {
    Lost { at: Coord2 },
    Cleared,
    Aborted,
}

/// Machine-readable summary printed after the game.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
    pub outcome: GameOutcome,
    pub revealed_safe: CellCount,
    pub board: Vec<String>,
    pub mine_positions: &'a [Coord2],
}

/// Drives an initialized board until a mine goes off, the board is cleared, or the player stops.
pub struct Session<W> {
    engine: BoardEngine,
    out: W,
    delay: Duration,
}

impl<W: Write> Session<W> {
    pub fn new(engine: BoardEngine, out: W, delay: Duration) -> Self {
        Self { engine, out, delay }
    }

    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    pub fn play(&mut self, player: &mut dyn Player) -> anyhow::Result<GameOutcome> {
        render_board(&self.engine, &mut self.out)?;

        loop {
            if !self.delay.is_zero() {
                thread::sleep(self.delay);
            }

            let Some(coords) = player.next_move(&self.engine)? else {
                warn!("No more moves, stopping");
                return Ok(GameOutcome::Aborted);
            };

            info!("Clicking on {} {} on board", coords.0, coords.1);
            let outcome = self.engine.reveal(coords)?;
            render_board(&self.engine, &mut self.out)?;

            if outcome.was_mine {
                info!("Game Over. Boom!");
                return Ok(GameOutcome::Lost { at: coords });
            }
            if self.engine.is_cleared() {
                info!("All {} safe cells revealed, you win!", self.engine.revealed_safe_count());
                return Ok(GameOutcome::Cleared);
            }
        }
    }

    pub fn snapshot(&self, outcome: GameOutcome) -> Snapshot<'_> {
        let engine = &self.engine;
        Snapshot {
            rows: engine.rows(),
            cols: engine.cols(),
            mines: engine.mine_count(),
            outcome,
            revealed_safe: engine.revealed_safe_count(),
            board: (0..engine.rows()).map(|x| render_row(engine, x)).collect(),
            mine_positions: engine.mine_positions(),
        }
    }
}
