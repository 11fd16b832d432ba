use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(ConfigProblem),
    #[error("Coordinates out of bounds")]
    OutOfBounds,
    #[error("Board has not been initialized")]
    NotInitialized,
}

/// Why a board or mine configuration was rejected.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ConfigProblem {
    #[error("board dimensions must be at least 1x1")]
    EmptyBoard,
    #[error("at least one mine is required")]
    NoMines,
    #[error("more mines than cells")]
    TooManyMines,
    #[error("duplicate mine position")]
    DuplicateMine,
    #[error("layout size does not match the board")]
    SizeMismatch,
}

impl From<ConfigProblem> for GameError {
    fn from(problem: ConfigProblem) -> Self {
        Self::InvalidConfiguration(problem)
    }
}

pub type Result<T> = core::result::Result<T, GameError>;
