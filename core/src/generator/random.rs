use alloc::vec::Vec;
use rand::Rng;

use super::*;

impl<R: Rng + ?Sized> CellSampler for R {
    fn sample_cell(&mut self, (rows, cols): Coord2) -> Coord2 {
        (self.random_range(0..rows), self.random_range(0..cols))
    }
}

/// Places mines by drawing random coordinates and discarding the ones already mined, until the requested number of
/// distinct mines is reached.
pub struct RejectionGenerator<'a, S: ?Sized> {
    sampler: &'a mut S,
}

impl<'a, S: CellSampler + ?Sized> RejectionGenerator<'a, S> {
    pub fn new(sampler: &'a mut S) -> Self {
        Self { sampler }
    }
}

impl<S: CellSampler + ?Sized> MinefieldGenerator for RejectionGenerator<'_, S> {
    fn generate(self, config: GameConfig) -> Result<MineLayout> {
        config.validate()?;
        let total_cells = config.total_cells();

        // optimize for full boards
        if config.mines == total_cells {
            log::debug!("Minefield full, skipping sampling for {} mines", config.mines);
            return Ok(MineLayout::full(config.size));
        }

        let mut mine_mask: Array2<bool> = Array2::default(config.size.to_nd_index());
        let mut positions = Vec::with_capacity(config.mines.into());
        let mut attempts: u64 = 0;

        while positions.len() < usize::from(config.mines) {
            attempts += 1;
            let coords = self.sampler.sample_cell(config.size);
            debug_assert!(in_bounds(coords, config.size), "sampler left the board: {coords:?}");

            let cell = &mut mine_mask[coords.to_nd_index()];
            if *cell {
                continue;
            }
            *cell = true;
            positions.push(coords);
            log::trace!("Inserted mine at {:?}", coords);
        }

        log::debug!(
            "Placed {} mines on {}x{} board in {} attempts",
            config.mines,
            config.size.0,
            config.size.1,
            attempts
        );
        Ok(MineLayout::from_parts(mine_mask, positions))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn places_exact_number_of_distinct_mines() {
        let mut rng = StdRng::seed_from_u64(7);
        for mines in [1, 10, 50, 99] {
            let config = GameConfig::new_unchecked((10, 10), mines);
            let layout = RejectionGenerator::new(&mut rng).generate(config).unwrap();

            assert_eq!(layout.mine_count(), mines);
            let mut positions = layout.mine_positions().to_vec();
            positions.sort_unstable();
            positions.dedup();
            assert_eq!(positions.len(), usize::from(mines));
            assert!(positions.iter().all(|&pos| in_bounds(pos, (10, 10))));
        }
    }

    #[test]
    fn duplicate_draws_are_rejected() {
        let mut sampler = ScriptedSampler([(1, 1), (1, 1), (0, 2), (1, 1), (2, 0)].into_iter());
        let config = GameConfig::new_unchecked((3, 3), 3);

        let layout = RejectionGenerator::new(&mut sampler).generate(config).unwrap();

        assert_eq!(layout.mine_positions(), &[(1, 1), (0, 2), (2, 0)]);
    }

    #[test]
    fn full_board_needs_no_sampling() {
        let mut sampler = ScriptedSampler(core::iter::empty::<Coord2>());
        let config = GameConfig::new_unchecked((2, 3), 6);

        let layout = RejectionGenerator::new(&mut sampler).generate(config).unwrap();

        assert_eq!(layout.mine_count(), 6);
        assert!(layout.iter_positions().all(|pos| layout.contains_mine(pos)));
    }

    #[test]
    fn invalid_config_is_rejected_before_sampling() {
        let mut sampler = ScriptedSampler(core::iter::empty::<Coord2>());
        let config = GameConfig::new_unchecked((2, 2), 5);

        let err = RejectionGenerator::new(&mut sampler).generate(config).unwrap_err();

        assert_eq!(err, GameError::InvalidConfiguration(ConfigProblem::TooManyMines));
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let config = GameConfig::new_unchecked((9, 9), 10);
        let first = RejectionGenerator::new(&mut StdRng::seed_from_u64(42))
            .generate(config)
            .unwrap();
        let second = RejectionGenerator::new(&mut StdRng::seed_from_u64(42))
            .generate(config)
            .unwrap();

        assert_eq!(first, second);
    }
}
