use crate::*;
pub use random::*;

mod random;

/// Source of uniformly distributed board coordinates.
///
/// Every [`rand::Rng`] is a sampler; tests can supply a scripted one to force exact mine positions.
pub trait CellSampler {
    /// Returns a coordinate with `x < size.0` and `y < size.1`.
    fn sample_cell(&mut self, size: Coord2) -> Coord2;
}

pub trait MinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<MineLayout>;
}

#[cfg(test)]
pub(crate) use scripted::ScriptedSampler;

#[cfg(test)]
mod scripted {
    use super::*;

    /// Replays a fixed sequence of coordinates, panicking once it runs out.
    pub(crate) struct ScriptedSampler<I>(pub I);

    impl<I: Iterator<Item = Coord2>> CellSampler for ScriptedSampler<I> {
        fn sample_cell(&mut self, _size: Coord2) -> Coord2 {
            self.0.next().expect("scripted sampler exhausted")
        }
    }
}
