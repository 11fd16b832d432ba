use rand::Rng;
use sweeper_core::{CellCount, ConfigProblem, GameError};

/// Converts a user supplied absolute mine count; range against the board is checked by the engine.
pub fn mine_count_arg(mines: i64) -> Result<CellCount, GameError> {
    if mines <= 0 {
        return Err(ConfigProblem::NoMines.into());
    }
    CellCount::try_from(mines).map_err(|_| ConfigProblem::TooManyMines.into())
}

/// Random mine count scaled by `density`: `floor(density * floor(u * total))` for uniform `u`, redrawn until positive.
pub fn density_mine_count(density: f64, total_cells: CellCount, rng: &mut impl Rng) -> anyhow::Result<CellCount> {
    let largest = (density * f64::from(total_cells.saturating_sub(1))).floor();
    if largest < 1.0 {
        anyhow::bail!("density {density} is too low to place any mine on {total_cells} cells");
    }

    loop {
        let drawn = (rng.random::<f64>() * f64::from(total_cells)).floor();
        let mines = (density * drawn).floor() as CellCount;
        if mines > 0 {
            return Ok(mines);
        }
        log::trace!("Drew zero mines, retrying");
    }
}

pub fn parse_density(s: &str) -> Result<f64, &'static str> {
    let f: f64 = s.parse().map_err(|_| "invalid number")?;
    if !(f > 0.0 && f <= 1.0) {
        return Err("density out of range (0, 1]");
    }
    Ok(f)
}
