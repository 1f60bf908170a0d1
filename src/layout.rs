use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::game::{Coord, GameError, Team};
use crate::piece::PieceKind;

/// One piece to put on the board at game start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementSpec {
    pub square: Coord,
    pub team: Team,
    pub kind: PieceKind,
}

impl PlacementSpec {
    pub fn new(square: Coord, team: Team, kind: PieceKind) -> Self {
        PlacementSpec { square, team, kind }
    }
}

/// Initial piece placement, in the order pieces are created
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BoardLayout {
    pub placements: Vec<PlacementSpec>,
}

impl BoardLayout {
    pub fn empty() -> Self {
        BoardLayout::default()
    }

    /// The usual chess starting position on an 8x8 board
    pub fn standard_chess() -> Self {
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut placements = Vec::with_capacity(32);
        for (team, home, pawns) in [(Team::White, 0, 1), (Team::Black, 7, 6)] {
            for (file, &kind) in back_rank.iter().enumerate() {
                placements.push(PlacementSpec::new(Coord::new(file as i32, home), team, kind));
            }
            for file in 0..8 {
                placements.push(PlacementSpec::new(
                    Coord::new(file, pawns),
                    team,
                    PieceKind::Pawn,
                ));
            }
        }

        BoardLayout { placements }
    }

    pub fn with(mut self, square: Coord, team: Team, kind: PieceKind) -> Self {
        self.placements.push(PlacementSpec::new(square, team, kind));
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, GameError> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Every placement must land on its own square of a `board_size` board
    pub fn validate(&self, board_size: usize) -> Result<(), GameError> {
        let size = board_size as i64;
        let mut seen = HashSet::new();
        for placement in &self.placements {
            let square = placement.square;
            let on_board = (0..size).contains(&(square.file as i64))
                && (0..size).contains(&(square.rank as i64));
            if !on_board {
                return Err(GameError::PlacementOffBoard(square));
            }
            if !seen.insert(square) {
                return Err(GameError::DuplicatePlacement(square));
            }
        }
        Ok(())
    }
}
