use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::piece::PieceId;

/// Board size of the reference game
pub const DEFAULT_BOARD_SIZE: usize = 8;
/// Largest board a configuration may ask for
pub const MAX_BOARD_SIZE: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    White,
    Black,
}

impl Team {
    pub fn opponent(&self) -> Team {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Team::White => 0,
            Team::Black => 1,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::White => write!(f, "White"),
            Team::Black => write!(f, "Black"),
        }
    }
}

/// A board square as `(file, rank)`.
///
/// Both axes are signed: coordinate transforms may land off the board and the
/// result is still a valid value that simply fails the on-board check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    pub file: i32,
    pub rank: i32,
}

impl Coord {
    pub fn new(file: i32, rank: i32) -> Self {
        Coord { file, rank }
    }

    pub fn offset(&self, df: i32, dr: i32) -> Coord {
        Coord::new(self.file + df, self.rank + dr)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.file, self.rank)
    }
}

/// A point in the board's local plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldPosition {
    pub x: f32,
    pub y: f32,
}

impl WorldPosition {
    pub fn new(x: f32, y: f32) -> Self {
        WorldPosition { x, y }
    }
}

impl fmt::Display for WorldPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// A committed move as it was applied to the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub piece: PieceId,
    pub from: Coord,
    pub to: Coord,
    /// Opposing piece that sat on `to` and was overwritten by the commit
    pub captured: Option<PieceId>,
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)?;
        if let Some(captured) = self.captured {
            write!(f, " x{}", captured)?;
        }
        Ok(())
    }
}

/// Errors raised while configuring a session.
///
/// Input handling never fails: illegal clicks are reported as outcomes.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("Failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("Malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid board size: {0}")]
    InvalidBoardSize(usize),
    #[error("Invalid square size: {0}")]
    InvalidSquareSize(f32),
    #[error("Placement off the board: {0}")]
    PlacementOffBoard(Coord),
    #[error("Square {0} is placed twice")]
    DuplicatePlacement(Coord),
}
