use crate::grid::TowerId;
use thiserror::Error;

/// Local, recoverable failure conditions. The core reports and lets the
/// caller decide; nothing here is process-fatal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CityGridError {
    #[error("coordinates ({row}, {col}) are outside the grid")]
    OutOfRange { row: i32, col: i32 },

    #[error("radius must be non-negative, got {0}")]
    InvalidRadius(i32),

    #[error("cell ({row}, {col}) is not free")]
    CellOccupied { row: i32, col: i32 },

    #[error("tower {0} does not exist")]
    TowerNotFound(TowerId),
}

pub type Result<T> = std::result::Result<T, CityGridError>;
